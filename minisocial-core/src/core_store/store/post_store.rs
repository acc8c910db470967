/*
    post_store.rs - The ordered post collection

    The authoritative, persisted sequence of posts, newest first. Mutations
    require the caller's session and persist immediately. Reads used for
    display go through reload() first so another process writing the same
    blob is reflected; there is no locking, last write wins.
*/

use crate::core_store::model::{Comment, Post, PostId, Session};
use crate::core_store::query::{query, SortMode};
use crate::core_store::store::blob_store::{BlobStore, POSTS_KEY};
use crate::core_store::store::errors::{StoreError, StoreResult};
use tracing::{debug, info};

/// Post collection with nested likes and comments
#[derive(Debug)]
pub struct PostStore {
    blobs: BlobStore,
    posts: Vec<Post>,
}

impl PostStore {
    /// Open the store, hydrating posts from the blob
    pub fn open(blobs: BlobStore) -> Self {
        let posts: Vec<Post> = blobs.load(POSTS_KEY, Vec::new());
        debug!(posts = posts.len(), "post store opened");
        PostStore { blobs, posts }
    }

    /// Create a post authored by the active session
    ///
    /// The post must carry trimmed non-empty text or an image reference.
    /// New posts go to the front of the sequence (most-recent-first).
    pub fn create_post(
        &mut self,
        session: Option<&Session>,
        text: &str,
        image: Option<String>,
    ) -> StoreResult<Post> {
        let session = session.ok_or(StoreError::NotAuthenticated)?;

        let text = text.trim().to_string();
        let image = image.filter(|i| !i.is_empty());
        if text.is_empty() && image.is_none() {
            return Err(StoreError::EmptyPost);
        }

        let post = Post::new(session, text, image);
        self.posts.insert(0, post.clone());
        self.blobs.save(POSTS_KEY, &self.posts)?;

        info!(post_id = %post.id, author = %post.author.id, "post created");
        Ok(post)
    }

    /// Delete a post; only its author may do so
    pub fn delete_post(&mut self, session: Option<&Session>, post_id: &PostId) -> StoreResult<()> {
        let pos = self
            .posts
            .iter()
            .position(|p| &p.id == post_id)
            .ok_or_else(|| StoreError::NotFound(post_id.to_string()))?;

        let authorized = session.is_some_and(|s| s.id == self.posts[pos].author.id);
        if !authorized {
            return Err(StoreError::NotAuthorized(
                "only the author can delete a post".to_string(),
            ));
        }

        self.posts.remove(pos);
        self.blobs.save(POSTS_KEY, &self.posts)?;

        info!(post_id = %post_id, "post deleted");
        Ok(())
    }

    /// Toggle the session user's like on a post; returns the updated post
    pub fn toggle_like(&mut self, session: Option<&Session>, post_id: &PostId) -> StoreResult<Post> {
        let session = session.ok_or(StoreError::NotAuthenticated)?;

        let post = self
            .posts
            .iter_mut()
            .find(|p| &p.id == post_id)
            .ok_or_else(|| StoreError::NotFound(post_id.to_string()))?;

        let liked = post.toggle_like(&session.id);
        let updated = post.clone();
        self.blobs.save(POSTS_KEY, &self.posts)?;

        info!(post_id = %post_id, user = %session.id, liked, "like toggled");
        Ok(updated)
    }

    /// Append a comment to a post; returns the new comment
    pub fn add_comment(
        &mut self,
        session: Option<&Session>,
        post_id: &PostId,
        text: &str,
    ) -> StoreResult<Comment> {
        let session = session.ok_or(StoreError::NotAuthenticated)?;

        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyComment);
        }

        let post = self
            .posts
            .iter_mut()
            .find(|p| &p.id == post_id)
            .ok_or_else(|| StoreError::NotFound(post_id.to_string()))?;

        let comment = post.add_comment(session, text.to_string());
        self.blobs.save(POSTS_KEY, &self.posts)?;

        info!(post_id = %post_id, comment_id = %comment.id, "comment added");
        Ok(comment)
    }

    /// Re-read the post collection from its blob
    pub fn reload(&mut self) {
        self.posts = self.blobs.load(POSTS_KEY, Vec::new());
        debug!(posts = self.posts.len(), "post store reloaded");
    }

    /// The posts, newest first, as last loaded
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Reload, then filter and sort for display
    pub fn feed(&mut self, search_term: &str, sort: SortMode) -> Vec<Post> {
        self.reload();
        query(&self.posts, search_term, sort)
    }
}
