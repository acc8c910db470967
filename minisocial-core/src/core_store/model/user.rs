/*
    user.rs - Registered users and the active session

    A User is the full registered record, including the plaintext password
    (this is a local demo store, not a real credential system). A Session is
    the public projection of a User that the rest of the system sees while
    that user is logged in; it never carries the password.
*/

use super::types::UserId;
use serde::{Deserialize, Serialize};

/// A registered user
///
/// The email is stored normalized (trimmed, lowercased) and is unique across
/// the user collection. The avatar is an opaque reference string: an external
/// URL or an embedded data URI, the store does not interpret it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID, assigned at signup and immutable afterwards
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Normalized email, unique across all users
    pub email: String,

    /// Plaintext password (no hashing in this system, by design)
    pub password: String,

    /// Opaque avatar reference (URL or data URI)
    pub avatar: String,
}

impl User {
    /// Create a new user with a freshly generated id
    pub fn new(name: String, email: String, password: String, avatar: String) -> Self {
        User {
            id: UserId::generate(),
            name,
            email,
            password,
            avatar,
        }
    }
}

/// The currently authenticated user's public projection
///
/// At most one session exists per store instance. Created on successful
/// signup or login, destroyed on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

impl Session {
    /// Project a user into a session, dropping the password
    pub fn from_user(user: &User) -> Self {
        Session {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

/// Normalize an email for storage and comparison: trim and lowercase
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Default avatar reference for users who signed up without one
///
/// Points at the ui-avatars initials service with the display name
/// percent-encoded into the query string.
pub fn default_avatar_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=0D8ABC&color=fff&size=256",
        percent_encode(name)
    )
}

/// Minimal percent-encoding for a URL query value
///
/// Keeps the characters `encodeURIComponent` leaves alone (alphanumerics and
/// `-_.!~*'()`), escapes everything else byte-wise.
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' => out.push(byte as char),
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
