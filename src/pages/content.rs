//! Content calendar page
//!
//! Every post regardless of lifecycle stage, with status and type
//! filters. Approval is allowed from here too.

use leptos::*;

use crate::api::posts::{self, ApproveRequest, PostQuery};
use crate::api::types::{PostList, PostStatus};
use crate::api::use_api_client;
use crate::components::{CardSkeleton, PostCard};
use crate::hooks::use_posts;
use crate::state::{use_session, use_ui_state};

const STATUS_FILTERS: [(&str, &str); 5] = [
    ("all", "All Posts"),
    ("pending", "Pending"),
    ("approved", "Approved"),
    ("posted", "Posted"),
    ("rejected", "Rejected"),
];

const TYPE_FILTERS: [(&str, &str); 3] = [
    ("all", "All Types"),
    ("image", "Images"),
    ("video", "Videos"),
];

/// Content calendar component.
#[component]
pub fn ContentCalendar() -> impl IntoView {
    let client = use_api_client();
    let ui = use_ui_state();
    let session = use_session();

    let (status_filter, set_status_filter) = create_signal("all".to_string());
    let (type_filter, set_type_filter) = create_signal("all".to_string());

    let query = Signal::derive(move || PostQuery {
        status: Some(status_filter.get()).filter(|s| s != "all"),
        media_type: Some(type_filter.get()).filter(|t| t != "all"),
        limit: Some(100),
    });

    let poll = use_posts(query);

    let on_approve = {
        let ui = ui.clone();
        let poll = poll.clone();
        Callback::new(move |id: String| {
            let client = client.clone();
            let ui = ui.clone();
            let poll = poll.clone();
            let body = ApproveRequest {
                approved_by: session.email(),
                scheduled_post_time: None,
            };
            spawn_local(async move {
                match posts::approve(&client, &id, &body).await {
                    Ok(outcome) => {
                        poll.revalidate();
                        crate::pages::approval::notify_publish_outcome(
                            &ui,
                            outcome.publish_outcome(),
                            "approved",
                        );
                    }
                    Err(e) => ui.show_error(&format!("Failed to approve post: {}", e)),
                }
            });
        })
    };

    let status_count = {
        let poll = poll.clone();
        move |value: &'static str| {
            let poll = poll.clone();
            Signal::derive(move || {
                let list = poll.data.get().unwrap_or_default();
                if value == "all" {
                    list.posts.len()
                } else {
                    count_by_status(&list, value)
                }
            })
        }
    };

    view! {
        <div class="p-8">
            // Header
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-900 mb-2">"Content Calendar"</h1>
                <p class="text-gray-600">"View and manage all your content"</p>
            </div>

            // Filters
            <div class="card mb-6">
                <div class="flex flex-wrap gap-6">
                    <div>
                        <label class="label">"Status"</label>
                        <div class="flex gap-2">
                            {STATUS_FILTERS
                                .into_iter()
                                .map(|(value, label)| {
                                    let count = status_count(value);
                                    view! {
                                        <FilterChip
                                            value=value
                                            label=label
                                            selected=Signal::derive(move || status_filter.get() == value)
                                            on_select=move |v| set_status_filter.set(v)
                                            count=count
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <label class="label">"Type"</label>
                        <div class="flex gap-2">
                            {TYPE_FILTERS
                                .into_iter()
                                .map(|(value, label)| view! {
                                    <FilterChip
                                        value=value
                                        label=label
                                        selected=Signal::derive(move || type_filter.get() == value)
                                        on_select=move |v| set_type_filter.set(v)
                                    />
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>

            // Posts grid
            {
                let poll = poll.clone();
                move || {
                    if poll.loading.get() {
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                                <CardSkeleton count=8 height="h-[600px]" />
                            </div>
                        }
                        .into_view()
                    } else {
                        let posts = poll.data.get().map(|list| list.posts).unwrap_or_default();
                        if posts.is_empty() {
                            view! {
                                <div class="card text-center py-16">
                                    <div class="text-6xl mb-4">"📅"</div>
                                    <h2 class="text-2xl font-semibold text-gray-900 mb-2">
                                        "No Posts Found"
                                    </h2>
                                    <p class="text-gray-600">"No content matches the selected filters"</p>
                                </div>
                            }
                            .into_view()
                        } else {
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                                    {posts
                                        .into_iter()
                                        .map(|post| view! {
                                            <PostCard post=post on_approve=on_approve />
                                        })
                                        .collect_view()}
                                </div>
                            }
                            .into_view()
                        }
                    }
                }
            }
        </div>
    }
}

/// Count posts whose normalized status matches a filter value. Must agree
/// with what the server returns for the same query parameter.
fn count_by_status(list: &PostList, value: &str) -> usize {
    let wanted = PostStatus::parse(value);
    list.posts.iter().filter(|p| p.status == wanted).count()
}

#[component]
fn FilterChip(
    value: &'static str,
    label: &'static str,
    #[prop(into)] selected: Signal<bool>,
    on_select: impl Fn(String) + 'static,
    #[prop(optional, into)] count: Option<Signal<usize>>,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_select(value.to_string())
            class=move || {
                if selected.get() {
                    "px-4 py-2 rounded-lg text-sm font-medium transition-all bg-primary-600 text-white"
                } else {
                    "px-4 py-2 rounded-lg text-sm font-medium transition-all bg-gray-100 text-gray-700 hover:bg-gray-200"
                }
            }
        >
            {label}
            {count.map(|count| view! {
                <span class="ml-2 px-2 py-0.5 rounded-full bg-white/20 text-xs">
                    {move || count.get()}
                </span>
            })}
        </button>
    }
}
