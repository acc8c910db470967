//! Example walking the store through a full session
//!
//! Run with:
//! ```bash
//! cargo run --example feed_demo
//! ```

use minisocial_core::config::Config;
use minisocial_core::core_store::query::SortMode;
use minisocial_core::core_store::store::SocialStore;
use minisocial_core::logging::{init_logging_with_config, LogConfig, LogLevel};

fn main() {
    let log_config = LogConfig::new(LogLevel::Debug).with_target(false);
    init_logging_with_config(log_config).expect("Failed to initialize logging");

    let mut config = Config::default();
    config.store.data_dir = std::env::temp_dir().join("minisocial-demo");

    let mut store = SocialStore::open(&config).expect("Failed to open store");
    store.identity.seed_demo_user().expect("Failed to seed demo user");

    let session = store
        .identity
        .log_in("guest@mini.local", "guest")
        .expect("Guest login failed");

    let post = store
        .posts
        .create_post(Some(&session), "Hello from the demo", None)
        .expect("Failed to create post");
    store
        .posts
        .toggle_like(Some(&session), &post.id)
        .expect("Failed to like post");
    store
        .posts
        .add_comment(Some(&session), &post.id, "first!")
        .expect("Failed to comment");

    for post in store.posts.feed("hello", SortMode::MostLiked) {
        println!(
            "{}: {} ({} likes, {} comments)",
            post.author.name,
            post.text,
            post.like_count(),
            post.comment_count()
        );
    }

    store.identity.log_out().expect("Failed to log out");
}
