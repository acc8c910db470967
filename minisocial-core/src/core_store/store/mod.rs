/*
    Store subsystem - Persistence layer
*/

pub mod blob_store;
pub mod errors;
pub mod identity_store;
pub mod post_store;
pub mod social_store;

pub use blob_store::{BlobStore, POSTS_KEY, SESSION_KEY, USERS_KEY};
pub use errors::*;
pub use identity_store::IdentityStore;
pub use post_store::PostStore;
pub use social_store::SocialStore;
