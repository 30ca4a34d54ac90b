use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::AppState;

/// Error type for remote persistence operations
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("could not read remote row for {user}: {source}")]
    Read {
        user: String,
        source: io::Error,
    },
    #[error("could not write remote row for {user}: {source}")]
    Write {
        user: String,
        source: io::Error,
    },
    #[error("remote row for {user} is corrupt: {source}")]
    Corrupt {
        user: String,
        source: serde_json::Error,
    },
}

/// Remote persistence target: one snapshot row per authenticated user.
///
/// Unlike the local side, `load` must distinguish "no row" (`Ok(None)`)
/// from "read failed" (`Err`): the store's hydration falls back to local
/// state only on actual failure.
pub trait RemoteStore {
    fn load(&self, user_id: &str) -> Result<Option<AppState>, RemoteError>;
    fn save(&self, user_id: &str, state: &AppState) -> Result<(), RemoteError>;
}

/// The persisted row: the snapshot plus a server-side write stamp
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RemoteRow {
    state: AppState,
    updated_at: DateTime<Utc>,
}

/// Remote store backed by a directory with one JSON row per user id
pub struct RemoteDir {
    dir: PathBuf,
}

impl RemoteDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        RemoteDir { dir: dir.into() }
    }

    fn row_path(&self, user_id: &str) -> PathBuf {
        // Identity strings are opaque; percent-encode anything outside the
        // safe set so distinct ids never collide on one row file
        let mut safe = String::with_capacity(user_id.len());
        for byte in user_id.bytes() {
            match byte {
                b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' => {
                    safe.push(byte as char);
                }
                _ => safe.push_str(&format!("%{byte:02x}")),
            }
        }
        self.dir.join(format!("{safe}.json"))
    }
}

impl RemoteStore for RemoteDir {
    fn load(&self, user_id: &str) -> Result<Option<AppState>, RemoteError> {
        let path = self.row_path(user_id);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(RemoteError::Read {
                    user: user_id.into(),
                    source: e,
                });
            }
        };
        let row: RemoteRow = serde_json::from_str(&text).map_err(|e| RemoteError::Corrupt {
            user: user_id.into(),
            source: e,
        })?;
        Ok(Some(row.state))
    }

    fn save(&self, user_id: &str, state: &AppState) -> Result<(), RemoteError> {
        fs::create_dir_all(&self.dir).map_err(|e| RemoteError::Write {
            user: user_id.into(),
            source: e,
        })?;
        let row = RemoteRow {
            state: state.clone(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&row).map_err(|e| RemoteError::Corrupt {
            user: user_id.into(),
            source: e,
        })?;
        fs::write(self.row_path(user_id), json).map_err(|e| RemoteError::Write {
            user: user_id.into(),
            source: e,
        })
    }
}
