//! Session persistence port

use super::artifact_store::StoreError;
use profiler_domain::SessionState;

/// Named storage for conversation state
pub trait SessionStore: Send + Sync {
    /// Load a saved session.
    ///
    /// Missing or malformed data is not an error: it means there is no prior
    /// history and the caller starts fresh.
    fn load(&self, name: &str) -> Option<SessionState>;

    /// Save the full session state, replacing any previous save
    fn save(&self, name: &str, state: &SessionState) -> Result<(), StoreError>;
}
