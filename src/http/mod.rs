//! HTTP client and API communication layer for the Remote API.
//!
//! This module handles all HTTP communication with Remote's REST API,
//! including environment selection, authentication, request construction
//! and response handling.

mod client;

// Re-export client's public API
pub use client::{
    PRODUCTION_BASE_URL, RemoteApiClient, SANDBOX_BASE_URL, SANDBOX_KEY_PREFIX, resolve_base_url,
};
pub(crate) use client::to_json;

// Re-export common types used in our public API
pub use reqwest::Method;
