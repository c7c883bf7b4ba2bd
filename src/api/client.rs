//! HTTP client wrapper
//!
//! One explicit, injectable client for the PostPilot REST API. Every
//! request goes through [`ApiClient`]: it attaches the bearer token from
//! persisted storage, parses the JSON body, and funnels failures into
//! [`ApiError`]. A 401 anywhere ends the session client-side through the
//! pluggable on-unauthorized callback.

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::state::session;

/// Default API base URL, overridable at build time.
pub const DEFAULT_API_BASE: &str = match option_env!("POSTPILOT_API_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

const API_URL_KEY: &str = "postpilot_api_url";

/// Get the API base URL from local storage or use the default.
pub fn get_api_base() -> String {
    let url = local_storage()
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage.
pub fn set_api_base(url: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(API_URL_KEY, url);
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Failures surfaced by the API layer.
///
/// Resource modules and hooks never catch these; pages do, and show a
/// notification. `Unauthorized` additionally forces a logout through the
/// client's callback before propagating.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {code}: {message}")]
    Status { code: u16, message: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("session expired")]
    Unauthorized,
}

#[derive(Debug, Default, serde::Deserialize)]
struct ErrorBody {
    #[serde(default, alias = "error")]
    message: String,
}

/// HTTP client for the automation backend.
///
/// Carries the base URL and the on-unauthorized callback explicitly so
/// tests can construct one with a fake callback instead of patching a
/// module global.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    on_unauthorized: Rc<dyn Fn()>,
    unauthorized_fired: Rc<Cell<bool>>,
}

impl ApiClient {
    /// Client against the configured base URL with the default
    /// on-unauthorized behavior (clear credentials, go to `/login`).
    pub fn new() -> Self {
        Self::with_base_url(get_api_base())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            on_unauthorized: Rc::new(default_on_unauthorized),
            unauthorized_fired: Rc::new(Cell::new(false)),
        }
    }

    /// Replace the on-unauthorized callback.
    pub fn on_unauthorized(self, callback: impl Fn() + 'static) -> Self {
        Self {
            on_unauthorized: Rc::new(callback),
            ..self
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(Request::get(&self.url(path))).build();
        self.dispatch(request).await
    }

    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.authorize(Request::post(&self.url(path))).json(body);
        self.dispatch(request).await
    }

    /// POST with an empty body (trigger-style endpoints).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(Request::post(&self.url(path))).build();
        self.dispatch(request).await
    }

    pub async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.authorize(Request::put(&self.url(path))).json(body);
        self.dispatch(request).await
    }

    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(Request::delete(&self.url(path))).build();
        self.dispatch(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match session::persisted_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<T, ApiError> {
        let request = request.map_err(|e| ApiError::Network(format!("request build error: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status() == 401 {
            self.note_unauthorized();
            return Err(ApiError::Unauthorized);
        }

        if !response.ok() {
            return Err(ApiError::Status {
                code: response.status(),
                message: error_message(&response).await,
            });
        }

        self.note_success();
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Invoke the on-unauthorized callback at most once per burst of 401s.
    /// The guard re-arms after the next successful response.
    fn note_unauthorized(&self) {
        if !self.unauthorized_fired.replace(true) {
            (self.on_unauthorized)();
        }
    }

    fn note_success(&self) {
        self.unauthorized_fired.set(false);
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn default_on_unauthorized() {
    session::clear_persisted();
    session::redirect_to_login();
}

async fn error_message(response: &Response) -> String {
    match response.json::<ErrorBody>().await {
        Ok(body) if !body.message.is_empty() => body.message,
        _ => response.status_text(),
    }
}

/// Build a query string from optional parameters, skipping absent ones.
pub(crate) fn query_string(params: &[(&str, Option<String>)]) -> String {
    let mut out = String::new();
    for (key, value) in params {
        if let Some(value) = value {
            out.push(if out.is_empty() { '?' } else { '&' });
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_skips_absent_params() {
        assert_eq!(query_string(&[("limit", None)]), "");
        assert_eq!(
            query_string(&[("status", Some("pending".into())), ("type", None)]),
            "?status=pending"
        );
        assert_eq!(
            query_string(&[
                ("status", Some("approved".into())),
                ("type", Some("video".into())),
                ("limit", Some("50".into())),
            ]),
            "?status=approved&type=video&limit=50"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::with_base_url("http://api.example.com/");
        assert_eq!(client.base_url(), "http://api.example.com");
        assert_eq!(client.url("/api/posts"), "http://api.example.com/api/posts");
    }

    #[test]
    fn unauthorized_callback_fires_once_per_burst() {
        let hits = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&hits);
        let client = ApiClient::with_base_url("http://api.example.com")
            .on_unauthorized(move || counter.set(counter.get() + 1));

        // A burst of 401s navigates exactly once
        client.note_unauthorized();
        client.note_unauthorized();
        client.note_unauthorized();
        assert_eq!(hits.get(), 1);

        // A successful response re-arms the guard
        client.note_success();
        client.note_unauthorized();
        assert_eq!(hits.get(), 2);
    }
}
