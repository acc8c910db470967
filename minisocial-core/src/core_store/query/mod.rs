pub mod feed_query;

pub use feed_query::{query, SortMode};
