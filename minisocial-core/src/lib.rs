//! # minisocial-core
//!
//! The post-and-session state store behind a local social-feed demo:
//! users, the current session, and posts with nested likes and comments,
//! persisted as named JSON blobs under a data directory. The presentation
//! layer calls the mutators here and re-renders from [`core_store::query`]
//! after every change.

pub mod config;
pub mod core_store;
pub mod logging;

pub use config::Config;
pub use core_store::{
    query, Comment, Post, PostId, Session, SocialStore, SortMode, StoreError, StoreResult, User,
    UserId,
};
pub use logging::{init_logging, LogLevel};
