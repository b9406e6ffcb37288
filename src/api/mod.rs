//! HTTP adapter: the only module that talks to the network.
//!
//! Dispatchers call through [`client::ApiClient`] and fold every outcome
//! into actions; nothing above this layer sees a raw `reqwest` type.

pub mod client;
pub mod types;

pub use client::{ApiClient, ApiError};
pub use types::{Bookmark, Profile};
