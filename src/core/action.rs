//! # Actions
//!
//! Everything that can happen in mark becomes an `Action`.
//! User types in the URL field? That's `Action::UpdateUrl`.
//! The feed request comes back? That's `Action::FetchStreamSuccess(items)`.
//!
//! The `update()` function takes the current state and an action,
//! then returns the new state. No side effects here. I/O happens in the
//! dispatchers.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```
//!
//! This makes everything testable: `assert_eq!(update(&state, &action), expected)`.
//! And debuggable: log every action, replay the exact session.

use crate::api::client::ApiError;
use crate::api::types::{Bookmark, Profile};
use crate::core::state::AppState;

/// The closed set of events the reducer folds over. Each variant carries
/// its payload; request-started variants carry none.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A feed fetch has started.
    RequestStream,
    FetchStreamSuccess(Vec<Bookmark>),
    FetchStreamFailed(ApiError),

    /// A bookmark post has started.
    PostMark,
    AddMarkSuccess(Bookmark),
    AddMarkFailed(ApiError),

    /// The URL input field changed.
    UpdateUrl(String),
    /// The title input field changed (user edit).
    UpdateTitle(String),
    /// The throttled title lookup came back.
    LoadTitleSuccess(String),
    LoadTitleFailed(ApiError),

    /// A profile request (GET or PUT) has started.
    RequestMe,
    FetchMeSuccess(Profile),
    FetchMeFailed(ApiError),
    UpdateMeSuccess(Profile),
    UpdateMeFailed(ApiError),

    /// Routing events share this pipeline but carry no state of ours.
    /// The reducer passes them through untouched.
    Navigate(String),
}

/// Pure reducer: folds one action into the state, returning a fresh tree.
///
/// Never performs I/O, never suspends, never panics on an action it has
/// no interest in.
pub fn update(state: &AppState, action: &Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::RequestStream | Action::PostMark => {
            next.bookmarks.loading = true;
        }
        Action::FetchStreamSuccess(items) => {
            next.bookmarks.loading = false;
            next.bookmarks.items = items.clone();
        }
        Action::FetchStreamFailed(err) => {
            next.bookmarks.loading = false;
            next.bookmarks.error = Some(err.clone());
        }
        Action::AddMarkSuccess(bookmark) => {
            next.bookmarks.loading = false;
            next.bookmarks.items.push(bookmark.clone());
            // Posting succeeded: reset the form for the next entry.
            next.url.clear();
            next.title.clear();
            next.show_title = false;
        }
        Action::AddMarkFailed(err) => {
            next.bookmarks.loading = false;
            next.bookmarks.error = Some(err.clone());
        }
        Action::UpdateUrl(url) => {
            next.url = url.clone();
            next.show_title = !url.is_empty();
            if url.is_empty() {
                // An empty URL means no bookmark to title.
                next.title.clear();
            }
        }
        Action::UpdateTitle(title) => {
            // Ignored while the URL field is empty: there is nothing to title.
            if !next.url.is_empty() {
                next.title = title.clone();
            }
        }
        Action::LoadTitleSuccess(title) => {
            // Same guard as UpdateTitle. A lookup that lands after the URL
            // was cleared must not resurrect a title.
            if !next.url.is_empty() {
                next.title = title.clone();
            }
        }
        Action::LoadTitleFailed(_) => {
            // Keep whatever the user typed.
        }
        Action::RequestMe => {
            next.profile.loading = true;
        }
        Action::FetchMeSuccess(profile) | Action::UpdateMeSuccess(profile) => {
            next.profile.loading = false;
            next.profile.me = Some(profile.clone());
            next.profile.error = None;
        }
        Action::FetchMeFailed(err) | Action::UpdateMeFailed(err) => {
            next.profile.loading = false;
            next.profile.error = Some(err.clone());
        }
        Action::Navigate(_) => {}
    }
    next
}
