//! Health check

use super::client::{ApiClient, ApiError};
use super::types::HealthStatus;

pub async fn check(client: &ApiClient) -> Result<HealthStatus, ApiError> {
    client.get_json("/health").await
}
