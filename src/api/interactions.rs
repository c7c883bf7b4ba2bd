//! Interactions resource
//!
//! Customer comments and DMs, read-only apart from deletion.

use super::client::{query_string, ApiClient, ApiError};
use super::types::{Acknowledged, InteractionEnvelope, InteractionList, InteractionStatsEnvelope};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionQuery {
    pub platform: Option<String>,
    pub kind: Option<String>,
    pub category: Option<String>,
    pub limit: Option<u32>,
}

pub async fn list(
    client: &ApiClient,
    query: &InteractionQuery,
) -> Result<InteractionList, ApiError> {
    let qs = query_string(&[
        ("platform", query.platform.clone()),
        ("type", query.kind.clone()),
        ("category", query.category.clone()),
        ("limit", query.limit.map(|l| l.to_string())),
    ]);
    client.get_json(&format!("/api/interactions{}", qs)).await
}

pub async fn statistics(client: &ApiClient) -> Result<InteractionStatsEnvelope, ApiError> {
    client.get_json("/api/interactions/statistics").await
}

pub async fn get(client: &ApiClient, id: &str) -> Result<InteractionEnvelope, ApiError> {
    client.get_json(&format!("/api/interactions/{}", id)).await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<Acknowledged, ApiError> {
    client
        .delete_json(&format!("/api/interactions/{}", id))
        .await
}
