/*
    persistence_tests.rs - Blob durability and degradation scenarios

    Validates reopen behavior, corrupt-blob fallback, the independence of
    the three persisted blobs, and the last-write-wins behavior of two
    store instances sharing a data directory.
*/

use crate::config::Config;
use crate::core_store::query::SortMode;
use crate::core_store::store::SocialStore;
use std::path::Path;
use tempfile::tempdir;

fn open(dir: &Path) -> SocialStore {
    let mut config = Config::default();
    config.store.data_dir = dir.to_path_buf();
    SocialStore::open(&config).unwrap()
}

#[test]
fn test_state_survives_reopen() {
    let dir = tempdir().unwrap();

    {
        let mut store = open(dir.path());
        let alice = store
            .identity
            .sign_up("Alice", "alice@example.com", "pw", None)
            .unwrap();
        store.posts.create_post(Some(&alice), "persisted", None).unwrap();
    }

    let mut store = open(dir.path());
    assert_eq!(store.identity.users().len(), 1);
    assert!(store.identity.session().is_some());

    let feed = store.posts.feed("", SortMode::Latest);
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].text, "persisted");
}

#[test]
fn test_corrupt_posts_blob_degrades_to_empty() {
    let dir = tempdir().unwrap();

    {
        let mut store = open(dir.path());
        let alice = store
            .identity
            .sign_up("Alice", "alice@example.com", "pw", None)
            .unwrap();
        store.posts.create_post(Some(&alice), "doomed", None).unwrap();
    }

    std::fs::write(dir.path().join("mini_social_posts.json"), "{{{").unwrap();

    // Posts are discarded; the untouched users blob is unaffected.
    let store = open(dir.path());
    assert!(store.posts.posts().is_empty());
    assert_eq!(store.identity.users().len(), 1);
}

#[test]
fn test_corrupt_session_blob_means_logged_out() {
    let dir = tempdir().unwrap();

    {
        let mut store = open(dir.path());
        store
            .identity
            .sign_up("Alice", "alice@example.com", "pw", None)
            .unwrap();
    }

    std::fs::write(dir.path().join("mini_social_session.json"), "not json").unwrap();

    let store = open(dir.path());
    assert!(store.identity.session().is_none());
    assert_eq!(store.identity.users().len(), 1);
}

#[test]
fn test_two_writers_last_write_wins() {
    let dir = tempdir().unwrap();

    let mut first = open(dir.path());
    let mut second = open(dir.path());

    let alice = first
        .identity
        .sign_up("Alice", "alice@example.com", "pw", None)
        .unwrap();

    // Both instances hydrate, then write the posts blob in turn. The
    // second writer never saw the first's post, so its save overwrites it.
    second.posts.reload();
    first.posts.create_post(Some(&alice), "from first", None).unwrap();
    second.posts.create_post(Some(&alice), "from second", None).unwrap();

    let mut reader = open(dir.path());
    let feed = reader.posts.feed("", SortMode::Latest);
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].text, "from second");
}

#[test]
fn test_reload_picks_up_foreign_writes() {
    let dir = tempdir().unwrap();

    let mut reader = open(dir.path());
    let mut writer = open(dir.path());

    let alice = writer
        .identity
        .sign_up("Alice", "alice@example.com", "pw", None)
        .unwrap();
    writer.posts.create_post(Some(&alice), "hello", None).unwrap();

    assert!(reader.posts.posts().is_empty());
    reader.posts.reload();
    assert_eq!(reader.posts.posts().len(), 1);

    reader.identity.reload();
    assert_eq!(reader.identity.users().len(), 1);
}
