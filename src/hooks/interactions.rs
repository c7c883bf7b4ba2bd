//! Interaction hooks

use leptos::*;

use crate::api::interactions::{self, InteractionQuery};
use crate::api::types::{InteractionList, InteractionStatistics};
use crate::api::use_api_client;
use crate::fetch::{use_poll, Poll, POSTS_INTERVAL_MS, STATISTICS_INTERVAL_MS};

use super::posts::reload_on_change;

/// Interactions matching a reactive filter.
pub fn use_interactions(query: Signal<InteractionQuery>) -> Poll<InteractionList> {
    let client = use_api_client();
    let poll = use_poll(POSTS_INTERVAL_MS, move || {
        let client = client.clone();
        let query = query.get_untracked();
        async move { interactions::list(&client, &query).await }
    });

    reload_on_change(poll.clone(), query);
    poll
}

/// Aggregate interaction statistics.
pub fn use_interaction_statistics() -> Poll<InteractionStatistics> {
    let client = use_api_client();
    use_poll(STATISTICS_INTERVAL_MS, move || {
        let client = client.clone();
        async move {
            interactions::statistics(&client)
                .await
                .map(|e| e.statistics)
        }
    })
}
