//! HTTP API layer
//!
//! [`client`] holds the request plumbing; the resource modules are flat
//! sets of functions, one per backend operation, that build a fixed path
//! and hand the parsed payload back unchanged.

use leptos::*;

pub mod client;
pub mod content;
pub mod health;
pub mod interactions;
pub mod logs;
pub mod posts;
pub mod settings;
pub mod trends;
pub mod types;

pub use client::{get_api_base, set_api_base, ApiClient, ApiError, DEFAULT_API_BASE};

/// Fetch the injected [`ApiClient`] from context.
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not provided")
}
