/*
    blob_store.rs - Named JSON blobs on a durable key-value layout

    The persistence adapter. Each key maps to one JSON file under the data
    directory, overwritten whole on every save. There are no transactions
    across keys: the users, session, and posts blobs are independent units,
    and concurrent writers follow last-write-wins.

    Loading never fails: a missing or malformed blob degrades to the
    caller-supplied fallback, trading data-loss risk for availability.
*/

use crate::core_store::store::errors::StoreResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Blob key for the registered-user collection
pub const USERS_KEY: &str = "mini_social_users";

/// Blob key for the current session
pub const SESSION_KEY: &str = "mini_social_session";

/// Blob key for the post collection
pub const POSTS_KEY: &str = "mini_social_posts";

/// File-backed blob storage rooted at a data directory
#[derive(Debug, Clone)]
pub struct BlobStore {
    data_dir: PathBuf,
}

impl BlobStore {
    /// Open a blob store, creating the data directory if needed
    pub fn open(data_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(BlobStore { data_dir })
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    /// Load the blob for `key`, or `fallback` when absent or malformed
    pub fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let raw = match fs::read_to_string(self.blob_path(key)) {
            Ok(raw) => raw,
            Err(_) => return fallback,
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "discarding corrupt blob");
                fallback
            }
        }
    }

    /// Serialize `value` and fully overwrite the blob for `key`
    ///
    /// Writes to a sibling temp file and renames over the target, so a
    /// crashed save leaves either the old blob or the new one, never a
    /// torn write.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value)?;
        let tmp = self.data_dir.join(format!("{}.json.tmp", key));
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, self.blob_path(key))?;
        Ok(())
    }

    /// Delete the blob for `key`; a missing blob is not an error
    pub fn remove(&self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.blob_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
