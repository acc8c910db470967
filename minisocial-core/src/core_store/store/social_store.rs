/*
    social_store.rs - Composition root for the state store

    Opens the blob store once and hands each sub-store its own handle. The
    presentation layer constructs this at startup and keeps it for the
    process lifetime; there is no module-level state anywhere in the crate.
*/

use crate::config::Config;
use crate::core_store::store::blob_store::BlobStore;
use crate::core_store::store::errors::StoreResult;
use crate::core_store::store::identity_store::IdentityStore;
use crate::core_store::store::post_store::PostStore;

/// The whole persisted state: identity plus posts
///
/// The two stores share a data directory but persist to independent blobs;
/// there is no atomicity between them.
#[derive(Debug)]
pub struct SocialStore {
    pub identity: IdentityStore,
    pub posts: PostStore,
}

impl SocialStore {
    /// Open both stores under the configured data directory
    pub fn open(config: &Config) -> StoreResult<Self> {
        let blobs = BlobStore::open(config.store.data_dir.clone())?;
        Ok(SocialStore {
            identity: IdentityStore::open(blobs.clone()),
            posts: PostStore::open(blobs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_data_dir() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.store.data_dir = dir.path().join("nested").join("data");

        let store = SocialStore::open(&config).unwrap();
        assert!(config.store.data_dir.exists());
        assert!(store.identity.session().is_none());
        assert!(store.posts.posts().is_empty());
    }
}
