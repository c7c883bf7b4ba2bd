//! Post hooks
//!
//! Bind post API calls to their poll intervals. The review queue polls
//! every 10 seconds, general lists every 30, statistics every minute.

use leptos::*;

use crate::api::posts::{self, PostQuery};
use crate::api::types::{PostList, PostStatistics};
use crate::api::use_api_client;
use crate::fetch::{
    use_poll, Poll, PENDING_POSTS_INTERVAL_MS, POSTS_INTERVAL_MS, STATISTICS_INTERVAL_MS,
};

/// All posts matching a reactive filter. The subscription reloads (new
/// logical key) whenever the filter changes.
pub fn use_posts(query: Signal<PostQuery>) -> Poll<PostList> {
    let client = use_api_client();
    let poll = use_poll(POSTS_INTERVAL_MS, move || {
        let client = client.clone();
        let query = query.get_untracked();
        async move { posts::list(&client, &query).await }
    });

    reload_on_change(poll.clone(), query);
    poll
}

/// The pending review queue.
pub fn use_pending_posts(limit: Option<u32>) -> Poll<PostList> {
    let client = use_api_client();
    use_poll(PENDING_POSTS_INTERVAL_MS, move || {
        let client = client.clone();
        async move { posts::pending(&client, limit).await }
    })
}

/// Aggregate post statistics.
pub fn use_post_statistics() -> Poll<PostStatistics> {
    let client = use_api_client();
    use_poll(STATISTICS_INTERVAL_MS, move || {
        let client = client.clone();
        async move { posts::statistics(&client).await.map(|e| e.statistics) }
    })
}

/// Reload a subscription whenever its filter value changes.
pub(crate) fn reload_on_change<T, Q>(poll: Poll<T>, query: Signal<Q>)
where
    T: Clone + 'static,
    Q: Clone + PartialEq + 'static,
{
    create_effect(move |previous: Option<Q>| {
        let current = query.get();
        if previous.is_some_and(|p| p != current) {
            poll.reload();
        }
        current
    });
}
