//! Data-fetching hooks
//!
//! Per-resource wrappers pairing API calls with the polling layer.

pub mod interactions;
pub mod logs;
pub mod posts;
pub mod trends;

pub use interactions::{use_interaction_statistics, use_interactions};
pub use logs::use_logs;
pub use posts::{use_pending_posts, use_post_statistics, use_posts};
pub use trends::{use_latest_trend, use_trends};

use crate::api::types::HealthStatus;
use crate::api::{health, use_api_client};
use crate::fetch::{use_poll, Poll, STATISTICS_INTERVAL_MS};

/// Backend reachability, shown on the overview page.
pub fn use_health() -> Poll<HealthStatus> {
    let client = use_api_client();
    use_poll(STATISTICS_INTERVAL_MS, move || {
        let client = client.clone();
        async move { health::check(&client).await }
    })
}
