//! Session persistence
//!
//! This module handles persistence of the session record in device-local
//! storage, modeled as a JSON file under a fixed key inside the configured
//! data directory. Covers serialization, corruption cleanup and removal.
//! Writes are last-writer-wins; there is no cross-process locking.

use std::path::PathBuf;

use tokio::fs;
use tracing::{debug, warn};

use crate::config::StorageConfig;
use crate::state::session::SessionRecord;
use crate::utils::errors::Result;

/// Fixed storage key for the session record
const SESSION_KEY: &str = "session.json";

/// File-backed session store
#[derive(Debug, Clone)]
pub struct SessionStore {
    data_dir: PathBuf,
}

impl SessionStore {
    /// Create a new session store, creating the data directory if needed
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        let data_dir = PathBuf::from(&config.data_dir);
        fs::create_dir_all(&data_dir).await?;
        Ok(Self { data_dir })
    }

    fn session_path(&self) -> PathBuf {
        self.data_dir.join(SESSION_KEY)
    }

    /// Save the session record under the fixed key. The record is written
    /// to a temp file first and moved into place in one step.
    pub async fn save(&self, record: &SessionRecord) -> Result<()> {
        let serialized = serde_json::to_string(record)?;

        let path = self.session_path();
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serialized.as_bytes()).await?;
        fs::rename(&tmp, &path).await?;

        debug!(user_id = record.user.id, path = %path.display(), "Session record saved");
        Ok(())
    }

    /// Load the persisted session record, if any. A record that fails to
    /// deserialize is removed and treated as absent.
    pub async fn load(&self) -> Result<Option<SessionRecord>> {
        let path = self.session_path();

        let raw = match fs::read_to_string(&path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No persisted session found");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<SessionRecord>(&raw) {
            Ok(record) => {
                debug!(user_id = record.user.id, "Session record loaded");
                Ok(Some(record))
            }
            Err(e) => {
                warn!(error = %e, "Persisted session is corrupted, removing it");
                fs::remove_file(&path).await?;
                Ok(None)
            }
        }
    }

    /// Remove the persisted session. Safe to call when none exists.
    pub async fn clear(&self) -> Result<()> {
        match fs::remove_file(self.session_path()).await {
            Ok(()) => {
                debug!("Persisted session removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Check whether a session record exists on disk
    pub async fn exists(&self) -> bool {
        fs::try_exists(self.session_path()).await.unwrap_or(false)
    }
}
