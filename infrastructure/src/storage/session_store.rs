//! JSON-file [`SessionStore`]: one `<name>.json` per session.

use super::csv_store::{format_error, io_error};
use profiler_application::{SessionStore, StoreError};
use profiler_domain::SessionState;
use std::path::PathBuf;
use tracing::{debug, warn};

pub struct JsonSessionStore {
    dir: PathBuf,
}

impl JsonSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }
}

impl SessionStore for JsonSessionStore {
    fn load(&self, name: &str) -> Option<SessionState> {
        let path = self.path_for(name);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                debug!("No session at {}: {}", path.display(), e);
                return None;
            }
        };
        match serde_json::from_str(&text) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!(
                    "Ignoring malformed session file {}: {}",
                    path.display(),
                    e
                );
                None
            }
        }
    }

    fn save(&self, name: &str, state: &SessionState) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| io_error(&self.dir, e))?;
        let path = self.path_for(name);
        let json = serde_json::to_string_pretty(state).map_err(|e| format_error(&path, e))?;
        std::fs::write(&path, json).map_err(|e| io_error(&path, e))
    }
}
