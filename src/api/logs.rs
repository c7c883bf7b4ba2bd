//! Logs resource

use super::client::{query_string, ApiClient, ApiError};
use super::types::LogList;

pub async fn list(client: &ApiClient, limit: Option<u32>) -> Result<LogList, ApiError> {
    let qs = query_string(&[("limit", limit.map(|l| l.to_string()))]);
    client.get_json(&format!("/api/logs{}", qs)).await
}
