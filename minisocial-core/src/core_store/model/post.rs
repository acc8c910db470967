/*
    post.rs - Post and Comment models

    A Post embeds a snapshot of its author's identity taken at creation time,
    not a live reference: later profile edits do not retroactively change
    historical posts. Likes are a set of user ids, serialized as a plain
    array to match the persisted blob layout. Comments are append-only and
    keep submission order.
*/

use super::types::{CommentId, PostId, Timestamp, UserId};
use super::user::Session;
use serde::{Deserialize, Serialize};

/// Identity snapshot embedded in posts and comments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRef {
    pub id: UserId,
    pub name: String,
    pub avatar: String,
}

impl AuthorRef {
    /// Snapshot the active session's identity fields
    pub fn from_session(session: &Session) -> Self {
        AuthorRef {
            id: session.id.clone(),
            name: session.name.clone(),
            avatar: session.avatar.clone(),
        }
    }
}

/// A comment on a post
///
/// Never edited or deleted once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub user: AuthorRef,
    pub text: String,
    pub created_at: Timestamp,
}

impl Comment {
    pub fn new(user: AuthorRef, text: String) -> Self {
        Comment {
            id: CommentId::generate(),
            user,
            text,
            created_at: Timestamp::now(),
        }
    }
}

/// A post in the feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Unique post ID
    pub id: PostId,

    /// Author snapshot taken at creation time
    pub author: AuthorRef,

    /// Post body; may be empty when an image is attached
    pub text: String,

    /// Opaque image reference (data URI or URL), if any
    pub image: Option<String>,

    /// When the post was created
    pub created_at: Timestamp,

    /// Ids of users who liked this post; set semantics, at most one entry
    /// per user. Older blobs may omit the field entirely.
    #[serde(default)]
    pub likes: Vec<UserId>,

    /// Comments in submission order. Older blobs may omit the field.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Create a new post authored by the given session
    pub fn new(session: &Session, text: String, image: Option<String>) -> Self {
        Post {
            id: PostId::generate(),
            author: AuthorRef::from_session(session),
            text,
            image,
            created_at: Timestamp::now(),
            likes: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Whether the given user currently likes this post
    pub fn is_liked_by(&self, user: &UserId) -> bool {
        self.likes.contains(user)
    }

    /// Toggle the user's like; returns true when the post is now liked
    pub fn toggle_like(&mut self, user: &UserId) -> bool {
        if let Some(pos) = self.likes.iter().position(|id| id == user) {
            self.likes.remove(pos);
            false
        } else {
            self.likes.push(user.clone());
            true
        }
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Append a comment snapshotting the commenting session
    pub fn add_comment(&mut self, session: &Session, text: String) -> Comment {
        let comment = Comment::new(AuthorRef::from_session(session), text);
        self.comments.push(comment.clone());
        comment
    }
}
