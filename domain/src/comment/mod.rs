//! Comment history domain.
//!
//! - [`entities::Comment`]: one extracted reply with its post title
//! - [`entities::CommentSet`]: the ordered history plus its word total

pub mod entities;
