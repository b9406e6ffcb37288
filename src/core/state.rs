//! # Application State
//!
//! The whole client state in one immutable value tree. This module contains
//! domain data only — no HTTP, no rendering.
//!
//! ```text
//! AppState
//! ├── bookmarks: BookmarksSlice
//! │   ├── items: Vec<Bookmark>     // the feed, insertion order preserved
//! │   ├── loading: bool            // fetch or post in flight
//! │   └── error: Option<ApiError>  // last failure for this slice
//! ├── url: String                  // URL input field value
//! ├── title: String                // title input field value
//! ├── show_title: bool             // title field visible (url non-empty)
//! └── profile: ProfileSlice
//!     ├── me: Option<Profile>      // fetched profile
//!     ├── loading: bool
//!     └── error: Option<ApiError>
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! Every update returns a fresh tree; a state you already hold never
//! changes underneath you.

use crate::api::client::ApiError;
use crate::api::types::{Bookmark, Profile};

/// The bookmarks slice: the feed plus its request bookkeeping.
///
/// A stream fetch and a mark post share `loading` and `error`. Overlapping
/// in-flight requests against this slice can interleave those flags — that
/// mirrors the server contract and is left unfenced on purpose.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookmarksSlice {
    pub items: Vec<Bookmark>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

/// The profile slice (`/api/profile`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileSlice {
    pub me: Option<Profile>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub bookmarks: BookmarksSlice,
    pub url: String,
    pub title: String,
    pub show_title: bool,
    pub profile: ProfileSlice,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
