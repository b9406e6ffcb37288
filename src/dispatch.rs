//! Async action dispatchers.
//!
//! Each public operation emits a deterministic action sequence into the
//! store's channel: a request-started action, then exactly one terminal
//! success or failure action. Errors never escape a dispatcher — every
//! `ApiError` is folded into the matching `*Failed` action, so the caller
//! only ever awaits completion.

use std::sync::mpsc::Sender;

use log::{info, warn};

use crate::api::client::{ApiClient, ApiError};
use crate::api::types::Profile;
use crate::core::action::Action;
use crate::core::debounce::DebouncedTitleLoader;
use crate::core::validate::is_web_uri;

fn send(tx: &Sender<Action>, action: Action) {
    if tx.send(action).is_err() {
        warn!("action receiver dropped");
    }
}

/// `RequestStream` → `FetchStreamSuccess(items)` | `FetchStreamFailed(err)`.
pub async fn fetch_stream(client: &ApiClient, tx: &Sender<Action>) {
    info!("fetching bookmark stream");
    send(tx, Action::RequestStream);
    match client.fetch_stream().await {
        Ok(items) => send(tx, Action::FetchStreamSuccess(items)),
        Err(err) => send(tx, Action::FetchStreamFailed(err)),
    }
}

/// `PostMark` → `AddMarkSuccess(bookmark)` | `AddMarkFailed(err)`.
///
/// A malformed `url` short-circuits to `AddMarkFailed(InvalidUrl)` without
/// a network call.
pub async fn add_mark(client: &ApiClient, tx: &Sender<Action>, url: &str, title: &str) {
    send(tx, Action::PostMark);
    if !is_web_uri(url) {
        send(tx, Action::AddMarkFailed(ApiError::InvalidUrl));
        return;
    }
    info!("posting bookmark: {url}");
    match client.post_bookmark(url, title).await {
        Ok(bookmark) => send(tx, Action::AddMarkSuccess(bookmark)),
        Err(err) => send(tx, Action::AddMarkFailed(err)),
    }
}

/// Records the new URL input value, then kicks the throttled title lookup
/// when the value is a well-formed web URI. Synchronous apart from the
/// lookup the loader may spawn.
pub fn update_url(tx: &Sender<Action>, title_loader: &DebouncedTitleLoader, url: &str) {
    send(tx, Action::UpdateUrl(url.to_string()));
    if is_web_uri(url) {
        title_loader.call(url);
    }
}

/// Records the new title input value. Synchronous.
pub fn update_title(tx: &Sender<Action>, title: &str) {
    send(tx, Action::UpdateTitle(title.to_string()));
}

/// `RequestMe` → `FetchMeSuccess(profile)` | `FetchMeFailed(err)`.
pub async fn get_profile(client: &ApiClient, tx: &Sender<Action>) {
    send(tx, Action::RequestMe);
    match client.get_profile().await {
        Ok(profile) => send(tx, Action::FetchMeSuccess(profile)),
        Err(err) => send(tx, Action::FetchMeFailed(err)),
    }
}

/// `RequestMe` → `UpdateMeSuccess(profile)` | `UpdateMeFailed(err)`.
pub async fn update_profile(client: &ApiClient, tx: &Sender<Action>, profile: &Profile) {
    send(tx, Action::RequestMe);
    match client.update_profile(profile).await {
        Ok(profile) => send(tx, Action::UpdateMeSuccess(profile)),
        Err(err) => send(tx, Action::UpdateMeFailed(err)),
    }
}
