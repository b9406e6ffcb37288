//! Wire types for the mark server's JSON API.
//!
//! The server owns these shapes; the client treats anything it doesn't
//! recognize as opaque. Unknown fields are ignored on decode, and
//! server-assigned fields are never fabricated client-side.

use serde::{Deserialize, Serialize};

/// A single bookmark, as returned by `/api/stream` and `/api/bookmark`.
///
/// `id` is server-assigned. The client carries it around but never
/// interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// The signed-in user's profile (`/api/profile`).
///
/// All fields optional: a PUT carries only the fields being changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}
