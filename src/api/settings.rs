//! Settings resource
//!
//! A singleton configuration object: fetched once per settings-page
//! visit and replaced wholesale on save.

use super::client::{ApiClient, ApiError};
use super::types::{Settings, SettingsEnvelope};

pub async fn get(client: &ApiClient) -> Result<SettingsEnvelope, ApiError> {
    client.get_json("/api/settings").await
}

pub async fn replace(client: &ApiClient, settings: &Settings) -> Result<SettingsEnvelope, ApiError> {
    client.put_json("/api/settings", settings).await
}
