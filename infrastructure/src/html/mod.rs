//! HTML comment archive adapter

mod source;

pub use source::{HtmlCommentSource, parse_comments};
