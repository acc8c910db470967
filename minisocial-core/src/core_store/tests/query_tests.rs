/*
    query_tests.rs - Feed query ordering properties

    The unit tests in feed_query.rs cover the concrete scenarios; here
    proptest checks the ordering contracts over arbitrary collections.
*/

use crate::core_store::model::{AuthorRef, Post, PostId, Timestamp, UserId};
use crate::core_store::query::{query, SortMode};
use proptest::prelude::*;

fn post_at(text: &str, at: u64, likes: usize) -> Post {
    Post {
        id: PostId::generate(),
        author: AuthorRef {
            id: UserId::generate(),
            name: "Someone".to_string(),
            avatar: String::new(),
        },
        text: text.to_string(),
        image: None,
        created_at: Timestamp::from_millis(at),
        likes: (0..likes).map(|_| UserId::generate()).collect(),
        comments: Vec::new(),
    }
}

proptest! {
    #[test]
    fn prop_latest_is_non_increasing(times in prop::collection::vec(0u64..1_000_000, 0..20)) {
        let posts: Vec<Post> = times.iter().map(|&t| post_at("x", t, 0)).collect();

        let shown = query(&posts, "", SortMode::Latest);
        for pair in shown.windows(2) {
            prop_assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn prop_oldest_is_non_decreasing(times in prop::collection::vec(0u64..1_000_000, 0..20)) {
        let posts: Vec<Post> = times.iter().map(|&t| post_at("x", t, 0)).collect();

        let shown = query(&posts, "", SortMode::Oldest);
        for pair in shown.windows(2) {
            prop_assert!(pair[0].created_at <= pair[1].created_at);
        }
    }

    #[test]
    fn prop_oldest_reverses_latest_without_ties(
        times in prop::collection::hash_set(0u64..1_000_000, 0..20)
    ) {
        let posts: Vec<Post> = times.iter().map(|&t| post_at("x", t, 0)).collect();

        let latest: Vec<PostId> = query(&posts, "", SortMode::Latest)
            .into_iter()
            .map(|p| p.id)
            .collect();
        let mut oldest: Vec<PostId> = query(&posts, "", SortMode::Oldest)
            .into_iter()
            .map(|p| p.id)
            .collect();
        oldest.reverse();

        prop_assert_eq!(latest, oldest);
    }

    #[test]
    fn prop_most_liked_is_non_increasing(likes in prop::collection::vec(0usize..10, 0..20)) {
        let posts: Vec<Post> = likes
            .iter()
            .enumerate()
            .map(|(i, &n)| post_at("x", i as u64, n))
            .collect();

        let shown = query(&posts, "", SortMode::MostLiked);
        for pair in shown.windows(2) {
            prop_assert!(pair[0].like_count() >= pair[1].like_count());
        }
    }

    #[test]
    fn prop_filter_returns_a_subset(texts in prop::collection::vec("[a-z ]{0,12}", 0..20)) {
        let posts: Vec<Post> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| post_at(t, i as u64, 0))
            .collect();

        let shown = query(&posts, "a", SortMode::Latest);
        prop_assert!(shown.len() <= posts.len());
        for p in &shown {
            prop_assert!(p.text.contains('a') || p.author.name.to_lowercase().contains('a'));
        }
    }
}
