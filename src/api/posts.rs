//! Posts resource
//!
//! Review-queue operations: list/filter posts, pull statistics, and
//! forward approve/reject/edit/delete decisions. Payloads pass through
//! unchanged; filtering and rendering happen in the pages.

use serde::Serialize;

use super::client::{query_string, ApiClient, ApiError};
use super::types::{
    Acknowledged, ApprovalOutcome, PostEnvelope, PostHistory, PostList, StatisticsEnvelope,
};

/// Optional filters for the post list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub status: Option<String>,
    pub media_type: Option<String>,
    pub limit: Option<u32>,
}

pub async fn list(client: &ApiClient, query: &PostQuery) -> Result<PostList, ApiError> {
    let qs = query_string(&[
        ("status", query.status.clone()),
        ("type", query.media_type.clone()),
        ("limit", query.limit.map(|l| l.to_string())),
    ]);
    client.get_json(&format!("/api/posts{}", qs)).await
}

pub async fn pending(client: &ApiClient, limit: Option<u32>) -> Result<PostList, ApiError> {
    let qs = query_string(&[("limit", limit.map(|l| l.to_string()))]);
    client.get_json(&format!("/api/posts/pending{}", qs)).await
}

pub async fn get(client: &ApiClient, id: &str) -> Result<PostEnvelope, ApiError> {
    client.get_json(&format!("/api/posts/{}", id)).await
}

pub async fn statistics(client: &ApiClient) -> Result<StatisticsEnvelope, ApiError> {
    client.get_json("/api/posts/statistics").await
}

pub async fn history(client: &ApiClient, id: &str) -> Result<PostHistory, ApiError> {
    client.get_json(&format!("/api/posts/{}/history", id)).await
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_post_time: Option<String>,
}

pub async fn approve(
    client: &ApiClient,
    id: &str,
    body: &ApproveRequest,
) -> Result<ApprovalOutcome, ApiError> {
    client
        .put_json(&format!("/api/posts/{}/approve", id), body)
        .await
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectRequest {
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_by: Option<String>,
}

pub async fn reject(
    client: &ApiClient,
    id: &str,
    body: &RejectRequest,
) -> Result<Acknowledged, ApiError> {
    client
        .put_json(&format!("/api/posts/{}/reject", id), body)
        .await
}

/// Fields an admin may rewrite before approval.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PostUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRequest {
    pub updates: PostUpdates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_by: Option<String>,
}

pub async fn edit(
    client: &ApiClient,
    id: &str,
    body: &EditRequest,
) -> Result<ApprovalOutcome, ApiError> {
    client
        .put_json(&format!("/api/posts/{}/edit", id), body)
        .await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<Acknowledged, ApiError> {
    client.delete_json(&format!("/api/posts/{}", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_request_carries_only_changed_fields() {
        let body = EditRequest {
            updates: PostUpdates {
                caption: Some("New caption".into()),
                hashtags: None,
            },
            edited_by: Some("admin".into()),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["updates"]["caption"], "New caption");
        assert!(json["updates"].get("hashtags").is_none());
        assert_eq!(json["editedBy"], "admin");
    }

    #[test]
    fn approve_request_serializes_camel_case() {
        let body = ApproveRequest {
            approved_by: Some("admin@postpilot.local".into()),
            scheduled_post_time: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["approvedBy"], "admin@postpilot.local");
        assert!(json.get("scheduledPostTime").is_none());
    }
}
