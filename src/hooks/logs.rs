//! Log hooks

use crate::api::logs;
use crate::api::types::LogList;
use crate::api::use_api_client;
use crate::fetch::{use_poll, Poll, POSTS_INTERVAL_MS};

/// Recent system events.
pub fn use_logs(limit: Option<u32>) -> Poll<LogList> {
    let client = use_api_client();
    use_poll(POSTS_INTERVAL_MS, move || {
        let client = client.clone();
        async move { logs::list(&client, limit).await }
    })
}
