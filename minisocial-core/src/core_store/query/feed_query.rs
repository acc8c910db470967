/*
    feed_query.rs - Read-only feed filtering and sorting

    Pure functions over the post collection for presentation purposes.
    Input is never mutated; callers get a fresh, ordered sequence of clones.
*/

use crate::core_store::model::Post;
use serde::{Deserialize, Serialize};

/// Sort order applied to the filtered feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    /// Newest first (descending creation time)
    Latest,
    /// Oldest first (ascending creation time)
    Oldest,
    /// Most liked first; ties keep their filtered order
    MostLiked,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Latest => "latest",
            SortMode::Oldest => "oldest",
            SortMode::MostLiked => "mostLiked",
        }
    }

    /// Parse a sort mode from its wire name
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "latest" => Some(SortMode::Latest),
            "oldest" => Some(SortMode::Oldest),
            "mostLiked" => Some(SortMode::MostLiked),
            _ => None,
        }
    }
}

impl Default for SortMode {
    fn default() -> Self {
        SortMode::Latest
    }
}

/// Filter posts by a search term, then sort for display
///
/// The term matches case-insensitively as a substring of the post text or
/// the author name; an empty term matches everything. Sorting is stable, so
/// like-count ties under `MostLiked` keep the filtered sequence's relative
/// order.
pub fn query(posts: &[Post], search_term: &str, sort: SortMode) -> Vec<Post> {
    let term = search_term.trim().to_lowercase();

    let mut shown: Vec<Post> = posts
        .iter()
        .filter(|p| {
            term.is_empty()
                || p.text.to_lowercase().contains(&term)
                || p.author.name.to_lowercase().contains(&term)
        })
        .cloned()
        .collect();

    match sort {
        SortMode::Latest => shown.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::Oldest => shown.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortMode::MostLiked => shown.sort_by(|a, b| b.like_count().cmp(&a.like_count())),
    }

    shown
}
