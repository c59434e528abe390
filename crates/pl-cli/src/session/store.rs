use crate::client::{CliClientResult, ClientError};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What survives a restart: the bearer token and the last known public
/// view of the logged-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub token: String,
    pub user: Value,
}

/// Reads and writes `session.json`.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store under the standard PeerLearn config directory
    pub fn new() -> CliClientResult<Self> {
        let dir = pl_config::Config::config_dir()
            .map_err(|e| ClientError::session(format!("Cannot resolve config directory: {}", e)))?;

        Ok(Self::with_dir(&dir))
    }

    /// Store under an explicit directory. Tests point this at a temp dir.
    pub fn with_dir(dir: &Path) -> Self {
        Self {
            path: dir.join("session.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted session, if any.
    ///
    /// A missing file means no session. A corrupt file is treated the
    /// same way; the next login overwrites it.
    pub fn load(&self) -> Option<PersistedSession> {
        let text = std::fs::read_to_string(&self.path).ok()?;

        match serde_json::from_str(&text) {
            Ok(session) => Some(session),
            Err(e) => {
                eprintln!(
                    "Warning: ignoring corrupt session file {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    /// Write the session to disk, creating the directory if needed
    pub fn save(&self, session: &PersistedSession) -> CliClientResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ClientError::io("Cannot create session directory", e))?;
        }

        let text = serde_json::to_string_pretty(session)?;

        std::fs::write(&self.path, text)
            .map_err(|e| ClientError::io("Cannot write session file", e))?;

        Ok(())
    }

    /// Remove the persisted session. Removing an absent file succeeds.
    pub fn clear(&self) -> CliClientResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::io("Cannot remove session file", e)),
        }
    }
}
