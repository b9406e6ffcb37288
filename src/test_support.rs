//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::api::types::Bookmark;
use crate::core::state::AppState;

/// A bookmark with no server-assigned fields.
pub fn bookmark(url: &str, title: &str) -> Bookmark {
    Bookmark {
        url: url.to_string(),
        title: title.to_string(),
        id: None,
    }
}

/// State as it looks after the user typed a URL: url set, title field shown.
pub fn state_with_url(url: &str) -> AppState {
    let mut state = AppState::new();
    state.url = url.to_string();
    state.show_title = true;
    state
}
