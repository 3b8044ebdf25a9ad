//! File-backed stores for run artifacts and sessions

mod csv_store;
mod session_store;

pub use csv_store::CsvArtifactStore;
pub use session_store::JsonSessionStore;
