//! Comment archive extraction from exported HTML.
//!
//! The archive holds a `table#resulttable`. Each usable row has a `td` with an
//! `h4` (the post title) and a `div.md` (the comment body). Rows missing any
//! of these, and styled rows, are skipped.

use profiler_application::{CommentSource, SourceError};
use profiler_domain::{Comment, CommentSet};
use scraper::{ElementRef, Html, Selector};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use unicode_normalization::UnicodeNormalization;

/// Reads `<input_dir>/<username>.html`
pub struct HtmlCommentSource {
    input_dir: PathBuf,
}

impl HtmlCommentSource {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
        }
    }

    pub fn archive_path(&self, username: &str) -> PathBuf {
        self.input_dir.join(format!("{username}.html"))
    }
}

impl CommentSource for HtmlCommentSource {
    fn extract(&self, username: &str) -> Result<CommentSet, SourceError> {
        let path = self.archive_path(username);
        let html = read_lossy(&path)?;
        let comments = parse_comments(&html, &path.display().to_string())?;
        info!(
            "Extracted {} comments ({} words) from {}",
            comments.len(),
            comments.total_word_count(),
            path.display()
        );
        Ok(comments)
    }
}

fn read_lossy(path: &Path) -> Result<String, SourceError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(SourceError::NotFound {
            path: path.display().to_string(),
        }),
        Err(e) => Err(SourceError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        }),
    }
}

fn selector(css: &str) -> Result<Selector, SourceError> {
    Selector::parse(css).map_err(|e| SourceError::InvalidSelector(format!("{css}: {e}")))
}

/// Parse every usable row of the result table in document order.
///
/// `origin` names the document in errors.
pub fn parse_comments(html: &str, origin: &str) -> Result<CommentSet, SourceError> {
    let document = Html::parse_document(html);
    let table_selector = selector("table#resulttable")?;
    let row_selector = selector("tr")?;
    let cell_selector = selector("td")?;
    let title_selector = selector("h4")?;
    let body_selector = selector("div.md")?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| SourceError::MissingTable {
            path: origin.to_string(),
        })?;

    let mut comments = Vec::new();
    for (index, row) in table.select(&row_selector).enumerate() {
        if row
            .value()
            .attr("style")
            .is_some_and(|style| !style.trim().is_empty())
        {
            debug!("Skipping styled row {}", index);
            continue;
        }
        let Some(cell) = row.select(&cell_selector).next() else {
            debug!("Skipping row {}: no cell", index);
            continue;
        };
        let Some(title) = cell.select(&title_selector).next() else {
            debug!("Skipping row {}: no title", index);
            continue;
        };
        let Some(body) = cell.select(&body_selector).next() else {
            debug!("Skipping row {}: no comment body", index);
            continue;
        };

        let post_title: String = title.text().map(str::trim).collect();
        let reply_comment = to_ascii(flatten_body(body).trim_start_matches('\n'));
        comments.push(Comment::new(to_ascii(&post_title), reply_comment));
    }

    Ok(CommentSet::new(comments))
}

/// Flatten a comment body to plain text.
///
/// Walks the body depth-first: each paragraph starts a new line, each quote
/// block emits `>`, and every link emits its text, so a link inside a
/// paragraph is counted twice.
fn flatten_body(body: ElementRef<'_>) -> String {
    let mut text = String::new();
    for node in body.descendants().skip(1) {
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };
        match element.value().name() {
            "blockquote" => text.push('>'),
            "p" => {
                text.push('\n');
                text.extend(element.text());
            }
            "a" => text.extend(element.text()),
            _ => {}
        }
    }
    text
}

/// NFKD-decompose and drop everything outside ASCII
fn to_ascii(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}
