use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::model::AppState;

/// Local persistence target: one serialized snapshot under one logical key.
///
/// The local side has no fallback of its own, so failures never cross this
/// boundary: unreadable state loads as `None` and failed saves are logged
/// and swallowed. The in-memory state stays authoritative and the next
/// debounced save retries.
pub trait LocalStore {
    fn load(&self) -> Option<AppState>;
    fn save(&self, state: &AppState);
}

/// Snapshot stored as a single JSON file
pub struct FileLocal {
    path: PathBuf,
}

impl FileLocal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileLocal { path: path.into() }
    }

    /// `<dir>/<key>.json`, with the key from [`crate::config::StoreConfig`]
    pub fn in_dir(dir: &Path, key: &str) -> Self {
        FileLocal {
            path: dir.join(format!("{key}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LocalStore for FileLocal {
    fn load(&self) -> Option<AppState> {
        let text = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&text) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable local snapshot");
                None
            }
        }
    }

    fn save(&self, state: &AppState) {
        let json = match serde_json::to_string(state) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "could not serialize state, skipping local save");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, json) {
            warn!(path = %self.path.display(), error = %e, "local save failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let local = FileLocal::in_dir(dir.path(), "planit-app-v1");

        let state: AppState = serde_json::from_str(r#"{"activeProjectId":"proj_1"}"#).unwrap();
        local.save(&state);
        assert_eq!(local.load(), Some(state));
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let local = FileLocal::in_dir(dir.path(), "planit-app-v1");
        assert!(local.load().is_none());
    }

    #[test]
    fn malformed_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("planit-app-v1.json");
        fs::write(&path, "not json {{{").unwrap();
        assert!(FileLocal::new(path).load().is_none());
    }

    #[test]
    fn save_failure_is_swallowed() {
        let dir = TempDir::new().unwrap();
        // Parent directory does not exist, so the write fails silently
        let local = FileLocal::new(dir.path().join("missing").join("state.json"));
        local.save(&AppState::default());
        assert!(local.load().is_none());
    }
}
