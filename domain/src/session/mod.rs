//! Conversation session domain.
//!
//! - [`entities::SessionState`]: instructions, model and the ordered message log
//! - [`entities::Message`]: a stored message with its `sendable` flag
//! - [`entities::ChatTurn`]: one turn of an outbound request
//! - [`inserts::KeywordInserts`]: keyword-triggered text attached on append

pub mod entities;
pub mod inserts;
