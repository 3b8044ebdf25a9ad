//! File-backed [`ArtifactStore`].
//!
//! Layout under the output directory, per user:
//!
//! | File | Content |
//! |------|---------|
//! | `<user>_comments_data.csv` | `post_title,reply_comment` |
//! | `<user>_gpt_responses.csv` | `cache_key,from_index,to_index,response` |
//! | `<user>_category_checkpoint.json` | partial category profile |
//! | `<user>_synthesized_profile.txt` | final profile |

use profiler_application::{ArtifactStore, CachedChunkResults, CategoryCheckpoint, StoreError};
use profiler_domain::{ChunkCacheKey, ChunkRange, ChunkResult, CommentSet};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
struct ResponseRow {
    cache_key: String,
    from_index: usize,
    to_index: usize,
    response: String,
}

pub struct CsvArtifactStore {
    output_dir: PathBuf,
}

impl CsvArtifactStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn comments_path(&self, username: &str) -> PathBuf {
        self.output_dir.join(format!("{username}_comments_data.csv"))
    }

    pub fn responses_path(&self, username: &str) -> PathBuf {
        self.output_dir.join(format!("{username}_gpt_responses.csv"))
    }

    pub fn checkpoint_path(&self, username: &str) -> PathBuf {
        self.output_dir.join(format!("{username}_category_checkpoint.json"))
    }

    pub fn profile_path(&self, username: &str) -> PathBuf {
        self.output_dir.join(format!("{username}_synthesized_profile.txt"))
    }

    fn ensure_dir(&self) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|e| io_error(&self.output_dir, e))
    }
}

pub(crate) fn io_error(path: &Path, error: impl std::fmt::Display) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}

pub(crate) fn format_error(path: &Path, error: impl std::fmt::Display) -> StoreError {
    StoreError::Format {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}

impl ArtifactStore for CsvArtifactStore {
    fn save_comments(&self, username: &str, comments: &CommentSet) -> Result<(), StoreError> {
        self.ensure_dir()?;
        let path = self.comments_path(username);
        let mut writer = csv::Writer::from_path(&path).map_err(|e| io_error(&path, e))?;
        for comment in comments.comments() {
            writer
                .serialize(comment)
                .map_err(|e| io_error(&path, e))?;
        }
        writer.flush().map_err(|e| io_error(&path, e))?;
        debug!("Saved {} comments to {}", comments.len(), path.display());
        Ok(())
    }

    fn load_chunk_results(
        &self,
        username: &str,
    ) -> Result<Option<CachedChunkResults>, StoreError> {
        let path = self.responses_path(username);
        if !path.exists() {
            return Ok(None);
        }

        let mut reader = csv::Reader::from_path(&path).map_err(|e| io_error(&path, e))?;
        let mut key: Option<String> = None;
        let mut results = Vec::new();
        for row in reader.deserialize::<ResponseRow>() {
            let row = row.map_err(|e| format_error(&path, e))?;
            match &key {
                None => key = Some(row.cache_key.clone()),
                Some(k) if *k != row.cache_key => {
                    return Err(format_error(&path, "rows carry different cache keys"));
                }
                Some(_) => {}
            }
            let range =
                ChunkRange::new(row.from_index, row.to_index).map_err(|e| format_error(&path, e))?;
            results.push(ChunkResult::new(range, row.response));
        }

        Ok(key.map(|key| CachedChunkResults {
            key: ChunkCacheKey::from_stored(key),
            results,
        }))
    }

    fn save_chunk_results(
        &self,
        username: &str,
        key: &ChunkCacheKey,
        results: &[ChunkResult],
    ) -> Result<(), StoreError> {
        self.ensure_dir()?;
        let path = self.responses_path(username);
        let mut writer = csv::Writer::from_path(&path).map_err(|e| io_error(&path, e))?;
        for result in results {
            writer
                .serialize(ResponseRow {
                    cache_key: key.as_str().to_string(),
                    from_index: result.from_index,
                    to_index: result.to_index,
                    response: result.response.clone(),
                })
                .map_err(|e| io_error(&path, e))?;
        }
        writer.flush().map_err(|e| io_error(&path, e))?;
        debug!("Cached {} chunk analyses to {}", results.len(), path.display());
        Ok(())
    }

    fn load_category_checkpoint(
        &self,
        username: &str,
    ) -> Result<Option<CategoryCheckpoint>, StoreError> {
        let path = self.checkpoint_path(username);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(&path, e)),
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| format_error(&path, e))
    }

    fn save_category_checkpoint(
        &self,
        username: &str,
        checkpoint: &CategoryCheckpoint,
    ) -> Result<(), StoreError> {
        self.ensure_dir()?;
        let path = self.checkpoint_path(username);
        let json = serde_json::to_string_pretty(checkpoint).map_err(|e| format_error(&path, e))?;
        std::fs::write(&path, json).map_err(|e| io_error(&path, e))
    }

    fn clear_category_checkpoint(&self, username: &str) -> Result<(), StoreError> {
        let path = self.checkpoint_path(username);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&path, e)),
        }
    }

    fn save_profile(&self, username: &str, profile: &str) -> Result<PathBuf, StoreError> {
        self.ensure_dir()?;
        let path = self.profile_path(username);
        std::fs::write(&path, profile).map_err(|e| io_error(&path, e))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profiler_domain::{CategoryProfile, Comment, ProfileCategory};

    fn results() -> Vec<ChunkResult> {
        vec![
            ChunkResult::new(ChunkRange::new(0, 4).unwrap(), "- likes \"quotes\",\ncommas"),
            ChunkResult::new(ChunkRange::new(5, 5).unwrap(), "second"),
        ]
    }

    #[test]
    fn test_comments_csv_layout() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvArtifactStore::new(dir.path());
        let comments = CommentSet::new(vec![Comment::new("A title", "line one\nline, two")]);

        store.save_comments("alice", &comments).unwrap();

        let text = std::fs::read_to_string(store.comments_path("alice")).unwrap();
        assert!(text.starts_with("post_title,reply_comment\n"));
        assert!(text.contains("\"line one\nline, two\""));
    }

    #[test]
    fn test_chunk_results_reload_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvArtifactStore::new(dir.path().join("out"));
        let key = ChunkCacheKey::from_stored("k1");

        assert!(store.load_chunk_results("alice").unwrap().is_none());
        store.save_chunk_results("alice", &key, &results()).unwrap();

        let cached = store.load_chunk_results("alice").unwrap().unwrap();
        assert_eq!(cached.key, key);
        assert_eq!(cached.results, results());
    }

    #[test]
    fn test_legacy_responses_file_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvArtifactStore::new(dir.path());
        std::fs::write(
            store.responses_path("alice"),
            "from_index,to_index,response\n0,3,old analysis\n",
        )
        .unwrap();

        assert!(matches!(
            store.load_chunk_results("alice"),
            Err(StoreError::Format { .. })
        ));
    }

    #[test]
    fn test_checkpoint_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvArtifactStore::new(dir.path());
        let mut profile = CategoryProfile::new();
        profile.insert(ProfileCategory::CommunicationStyle, "- terse");
        let checkpoint = CategoryCheckpoint {
            key: ChunkCacheKey::from_stored("k"),
            profile,
        };

        assert!(store.load_category_checkpoint("bob").unwrap().is_none());
        store.save_category_checkpoint("bob", &checkpoint).unwrap();
        assert_eq!(
            store.load_category_checkpoint("bob").unwrap(),
            Some(checkpoint)
        );

        store.clear_category_checkpoint("bob").unwrap();
        assert!(!store.checkpoint_path("bob").exists());
        // clearing twice is fine
        store.clear_category_checkpoint("bob").unwrap();
    }

    #[test]
    fn test_save_profile_returns_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvArtifactStore::new(dir.path());

        let path = store.save_profile("carol", "Summary\nfine").unwrap();

        assert!(path.ends_with("carol_synthesized_profile.txt"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "Summary\nfine");
    }
}
