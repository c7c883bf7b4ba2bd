//! Trends resource
//!
//! Trend analyses are immutable snapshots; the dashboard lists them,
//! fetches the latest, triggers a fresh analysis, and can delete one.

use serde::Serialize;

use super::client::{query_string, ApiClient, ApiError};
use super::types::{Acknowledged, TrendEnvelope, TrendList};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrendQuery {
    pub limit: Option<u32>,
    pub date: Option<String>,
}

pub async fn list(client: &ApiClient, query: &TrendQuery) -> Result<TrendList, ApiError> {
    let qs = query_string(&[
        ("limit", query.limit.map(|l| l.to_string())),
        ("date", query.date.clone()),
    ]);
    client.get_json(&format!("/api/trends{}", qs)).await
}

pub async fn latest(client: &ApiClient) -> Result<TrendEnvelope, ApiError> {
    client.get_json("/api/trends/latest").await
}

pub async fn get(client: &ApiClient, id: &str) -> Result<TrendEnvelope, ApiError> {
    client.get_json(&format!("/api/trends/{}", id)).await
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeRequest {
    include_videos: bool,
}

/// Kick off a new analysis run on the backend.
pub async fn analyze(client: &ApiClient, include_videos: bool) -> Result<TrendEnvelope, ApiError> {
    client
        .post_json("/api/trends/analyze", &AnalyzeRequest { include_videos })
        .await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<Acknowledged, ApiError> {
    client.delete_json(&format!("/api/trends/{}", id)).await
}
