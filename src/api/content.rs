//! Content resource
//!
//! Generated media assets and the generate trigger.

use serde::Serialize;

use super::client::{query_string, ApiClient, ApiError};
use super::types::{ContentEnvelope, ContentList, GenerateOutcome};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentQuery {
    pub media_type: Option<String>,
    pub status: Option<String>,
    pub limit: Option<u32>,
}

pub async fn list(client: &ApiClient, query: &ContentQuery) -> Result<ContentList, ApiError> {
    let qs = query_string(&[
        ("type", query.media_type.clone()),
        ("status", query.status.clone()),
        ("limit", query.limit.map(|l| l.to_string())),
    ]);
    client.get_json(&format!("/api/content{}", qs)).await
}

pub async fn get(client: &ApiClient, id: &str) -> Result<ContentEnvelope, ApiError> {
    client.get_json(&format!("/api/content/{}", id)).await
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct GenerateRequest {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept: Option<String>,
}

/// Ask the backend to generate a new piece of content. With an empty
/// request the pipeline picks type and concept from the latest trends.
pub async fn generate(
    client: &ApiClient,
    request: &GenerateRequest,
) -> Result<GenerateOutcome, ApiError> {
    client.post_json("/api/content/generate", request).await
}
