//! Trend hooks

use crate::api::trends::{self, TrendQuery};
use crate::api::types::{TrendAnalysis, TrendList};
use crate::api::use_api_client;
use crate::fetch::{use_poll, Poll, TRENDS_INTERVAL_MS};

/// Recent trend analyses, newest first.
pub fn use_trends(limit: Option<u32>) -> Poll<TrendList> {
    let client = use_api_client();
    use_poll(TRENDS_INTERVAL_MS, move || {
        let client = client.clone();
        let query = TrendQuery {
            limit,
            date: None,
        };
        async move { trends::list(&client, &query).await }
    })
}

/// The most recent analysis, if any exists yet.
pub fn use_latest_trend() -> Poll<Option<TrendAnalysis>> {
    let client = use_api_client();
    use_poll(TRENDS_INTERVAL_MS, move || {
        let client = client.clone();
        async move { trends::latest(&client).await.map(|e| e.trend) }
    })
}
