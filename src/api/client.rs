//! HTTP adapter for the mark server.
//!
//! One rule governs every call: a response with status >= 400 becomes
//! `ApiError::Status` without the body being read, a transport failure
//! becomes `ApiError::Network`, and a body that won't decode becomes
//! `ApiError::Parse`. No retries, no timeouts — callers see failures
//! immediately and turn them into `*Failed` actions.

use std::fmt;

use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::types::{Bookmark, Profile};

/// Errors surfaced by the HTTP adapter, plus the one validation error
/// that never reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The URL failed client-side validation. No network call was made.
    InvalidUrl,
    /// The server answered with status >= 400. The body is not inspected.
    Status(u16),
    /// Transport-level failure: DNS, refused connection, dropped socket.
    Network(String),
    /// The response body could not be decoded.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidUrl => write!(f, "Invalid URL"),
            ApiError::Status(code) => write!(f, "HTTP {code}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// POST body for `/api/bookmark`.
#[derive(Serialize)]
struct NewBookmark<'a> {
    url: &'a str,
    title: &'a str,
}

/// Client for the mark server's endpoints.
///
/// Holds a cookie store so the session credential rides along on profile
/// requests — the non-browser analogue of same-origin credentials.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("reqwest client construction failed");
        Self { base_url, client }
    }

    /// GET `/api/stream`: the bookmark feed, oldest first.
    pub async fn fetch_stream(&self) -> Result<Vec<Bookmark>, ApiError> {
        self.get_json("/api/stream").await
    }

    /// POST `/api/bookmark`: stores a new bookmark, returns it with
    /// server-assigned fields filled in.
    pub async fn post_bookmark(&self, url: &str, title: &str) -> Result<Bookmark, ApiError> {
        debug!("POST /api/bookmark url={url}");
        let response = self
            .client
            .post(format!("{}/api/bookmark", self.base_url))
            .json(&NewBookmark { url, title })
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_status("/api/bookmark", response)?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// GET `/views/title?url=<encoded>`: the page title as plain text.
    pub async fn load_title(&self, url: &str) -> Result<String, ApiError> {
        debug!("GET /views/title url={url}");
        let response = self
            .client
            .get(format!("{}/views/title", self.base_url))
            .query(&[("url", url)])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_status("/views/title", response)?;
        response
            .text()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// GET `/api/profile`: the signed-in user's profile.
    pub async fn get_profile(&self) -> Result<Profile, ApiError> {
        self.get_json("/api/profile").await
    }

    /// PUT `/api/profile`: updates profile fields, returns the stored profile.
    pub async fn update_profile(&self, profile: &Profile) -> Result<Profile, ApiError> {
        debug!("PUT /api/profile");
        let response = self
            .client
            .put(format!("{}/api/profile", self.base_url))
            .json(profile)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_status("/api/profile", response)?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!("GET {path}");
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_status(path, response)?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// Rejects any response with status >= 400 without touching the body.
fn check_status(path: &str, response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status().as_u16();
    if status >= 400 {
        warn!("{path}: HTTP {status}");
        return Err(ApiError::Status(status));
    }
    Ok(response)
}
