/*
    core_store - Persistent post-and-session state layer

    The authoritative state layer for the local social-feed demo.
    Handles:
    - Data models (users, sessions, posts, comments)
    - Blob persistence with fallback-on-corruption
    - Identity lifecycle (signup, login, logout)
    - Post mutations (create, delete, like, comment)
    - Feed filtering and sorting
*/

pub mod model;
pub mod query;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export commonly used types
pub use model::{AuthorRef, Comment, CommentId, Post, PostId, Session, Timestamp, User, UserId};
pub use query::{query, SortMode};
pub use store::{BlobStore, IdentityStore, PostStore, SocialStore, StoreError, StoreResult};
