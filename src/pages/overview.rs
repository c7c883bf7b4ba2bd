//! Overview page
//!
//! Key figures, the head of the review queue, quick actions, the latest
//! trend snapshot, and system status.

use leptos::*;
use leptos_router::{use_navigate, A};

use crate::api::types::Settings;
use crate::api::{content, settings, trends, use_api_client};
use crate::components::{CardSkeleton, PostCard, StatsCard};
use crate::hooks::{use_health, use_latest_trend, use_pending_posts, use_post_statistics};
use crate::state::use_ui_state;
use crate::util::format_number;

/// Dashboard overview component.
#[component]
pub fn Overview() -> impl IntoView {
    let client = use_api_client();
    let ui = use_ui_state();

    let stats = use_post_statistics();
    let pending = use_pending_posts(Some(3));
    let latest_trend = use_latest_trend();
    let health = use_health();

    // Module flags for the status panel, loaded once per visit
    let module_settings = create_rw_signal(None::<Settings>);
    {
        let client = client.clone();
        create_effect(move |_| {
            let client = client.clone();
            spawn_local(async move {
                if let Ok(envelope) = settings::get(&client).await {
                    module_settings.set(Some(envelope.settings));
                }
            });
        });
    }

    let stat = move |pick: fn(&crate::api::types::PostStatistics) -> u64| {
        let stats = stats.clone();
        Signal::derive(move || {
            stats
                .data
                .get()
                .map(|s| format_number(pick(&s)))
                .unwrap_or_else(|| "0".to_string())
        })
    };
    let total = stat(|s| s.total);
    let pending_count = stat(|s| s.by_status.pending);
    let approved_count = stat(|s| s.by_status.approved);
    let posted_count = stat(|s| s.by_status.posted);

    // Quick actions
    let (generating, set_generating) = create_signal(false);
    let on_generate = {
        let client = client.clone();
        let ui = ui.clone();
        let pending = pending.clone();
        move |_| {
            if generating.get_untracked() {
                return;
            }
            set_generating.set(true);
            let client = client.clone();
            let ui = ui.clone();
            let pending = pending.clone();
            spawn_local(async move {
                match content::generate(&client, &Default::default()).await {
                    Ok(_) => {
                        pending.revalidate();
                        ui.show_success("Content generated. Check the approval queue!");
                    }
                    Err(e) => ui.show_error(&format!("Failed to generate content: {}", e)),
                }
                set_generating.set(false);
            });
        }
    };

    let (analyzing, set_analyzing) = create_signal(false);
    let on_analyze = {
        let client = client.clone();
        let ui = ui.clone();
        let latest_trend = latest_trend.clone();
        move |_| {
            if analyzing.get_untracked() {
                return;
            }
            set_analyzing.set(true);
            let client = client.clone();
            let ui = ui.clone();
            let latest_trend = latest_trend.clone();
            spawn_local(async move {
                match trends::analyze(&client, true).await {
                    Ok(_) => {
                        latest_trend.revalidate();
                        ui.show_success("Trends analyzed. Check the trends page!");
                    }
                    Err(e) => ui.show_error(&format!("Failed to analyze trends: {}", e)),
                }
                set_analyzing.set(false);
            });
        }
    };

    let navigate = use_navigate();
    let on_view = Callback::new(move |_id: String| {
        navigate("/approval", Default::default());
    });

    view! {
        <div class="p-8">
            // Header
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-900 mb-2">"Dashboard"</h1>
                <p class="text-gray-600">"Welcome back! Here's your content overview"</p>
            </div>

            // Stats grid
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                <StatsCard title="Total Posts" value=total icon="🗂" color="blue" />
                <StatsCard
                    title="Pending Approval"
                    value=pending_count
                    icon="⏳"
                    color="yellow"
                    subtitle="Requires action"
                />
                <StatsCard
                    title="Approved"
                    value=approved_count
                    icon="✅"
                    color="green"
                    subtitle="Ready to post"
                />
                <StatsCard
                    title="Posted"
                    value=posted_count
                    icon="📤"
                    color="purple"
                    subtitle="Successfully published"
                />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                // Left column
                <div class="lg:col-span-2 space-y-6">
                    // Pending approval preview
                    <div class="card">
                        <div class="flex items-center justify-between mb-6">
                            <div>
                                <h2 class="text-xl font-semibold text-gray-900">"Pending Approval"</h2>
                                <p class="text-sm text-gray-600 mt-1">"Review and approve content"</p>
                            </div>
                            <A href="/approval" class="btn-primary btn-sm">"View All"</A>
                        </div>

                        {
                            let pending = pending.clone();
                            move || {
                                if pending.loading.get() {
                                    view! {
                                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                            <CardSkeleton count=3 />
                                        </div>
                                    }
                                    .into_view()
                                } else {
                                    let posts = pending
                                        .data
                                        .get()
                                        .map(|list| list.posts)
                                        .unwrap_or_default();
                                    if posts.is_empty() {
                                        view! {
                                            <div class="text-center py-12">
                                                <div class="text-5xl mb-4">"✅"</div>
                                                <h3 class="text-lg font-medium text-gray-900 mb-1">
                                                    "All caught up!"
                                                </h3>
                                                <p class="text-gray-500">"No posts pending approval"</p>
                                            </div>
                                        }
                                        .into_view()
                                    } else {
                                        view! {
                                            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                                {posts
                                                    .into_iter()
                                                    .map(|post| view! {
                                                        <PostCard
                                                            post=post
                                                            show_actions=false
                                                            on_view=on_view
                                                        />
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

                    // Quick actions
                    <div class="card">
                        <h3 class="text-lg font-semibold text-gray-900 mb-4">"Quick Actions"</h3>
                        <div class="grid grid-cols-2 gap-4">
                            <button
                                on:click=on_generate
                                disabled=generating
                                class="btn-primary justify-center"
                            >
                                {move || if generating.get() { "Generating..." } else { "+ Generate Content" }}
                            </button>
                            <button
                                on:click=on_analyze
                                disabled=analyzing
                                class="btn-secondary justify-center"
                            >
                                {move || if analyzing.get() { "Analyzing..." } else { "📊 Analyze Trends" }}
                            </button>
                        </div>
                    </div>
                </div>

                // Right column
                <div class="space-y-6">
                    <LatestTrendCard trend=latest_trend />
                    <SystemStatusCard health=health settings=module_settings.into() />
                </div>
            </div>
        </div>
    }
}

/// Summary of the most recent trend analysis.
#[component]
fn LatestTrendCard(
    trend: crate::fetch::Poll<Option<crate::api::types::TrendAnalysis>>,
) -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="text-lg font-semibold text-gray-900 mb-4">"Latest Trend Analysis"</h3>

            {move || {
                if trend.loading.get() {
                    return view! {
                        <div class="space-y-3 animate-pulse">
                            <div class="h-4 bg-gray-200 rounded w-3/4" />
                            <div class="h-4 bg-gray-200 rounded w-full" />
                            <div class="h-4 bg-gray-200 rounded w-5/6" />
                        </div>
                    }
                    .into_view();
                }

                match trend.data.get().flatten() {
                    Some(snapshot) => {
                        let hashtags: Vec<String> =
                            snapshot.top_hashtags.iter().take(6).cloned().collect();
                        view! {
                            <div class="space-y-4">
                                <div>
                                    <p class="text-sm text-gray-600 mb-2">"Date"</p>
                                    <p class="font-medium">
                                        {snapshot.date.clone().unwrap_or_else(|| "N/A".to_string())}
                                    </p>
                                </div>

                                <div>
                                    <p class="text-sm text-gray-600 mb-2">"Top Hashtags"</p>
                                    <div class="flex flex-wrap gap-1.5">
                                        {hashtags
                                            .into_iter()
                                            .map(|tag| view! {
                                                <span class="badge bg-primary-50 text-primary-700">{tag}</span>
                                            })
                                            .collect_view()}
                                    </div>
                                </div>

                                <div>
                                    <p class="text-sm text-gray-600 mb-2">"Content Mix"</p>
                                    <div class="flex gap-2 text-sm">
                                        <span class="badge bg-blue-50 text-blue-700">
                                            {format!("{}% Images", snapshot.content_mix.images)}
                                        </span>
                                        <span class="badge bg-purple-50 text-purple-700">
                                            {format!("{}% Videos", snapshot.content_mix.videos)}
                                        </span>
                                    </div>
                                </div>

                                <A href="/trends" class="btn-secondary w-full btn-sm mt-4">
                                    "View Full Analysis"
                                </A>
                            </div>
                        }
                        .into_view()
                    }
                    None => view! {
                        <p class="text-gray-500 text-sm">"No trend data available"</p>
                    }
                    .into_view(),
                }
            }}
        </div>
    }
}

/// Backend reachability and module switches.
#[component]
fn SystemStatusCard(
    health: crate::fetch::Poll<crate::api::types::HealthStatus>,
    settings: Signal<Option<Settings>>,
) -> impl IntoView {
    let backend_online = Signal::derive(move || {
        health
            .data
            .get()
            .map(|status| status.is_ok())
            .unwrap_or(false)
    });

    let module = move |pick: fn(&Settings) -> bool| {
        Signal::derive(move || settings.get().map(|s| pick(&s)).unwrap_or(false))
    };
    let trend_analysis = module(|s| s.trend_analysis_enabled);
    let content_generation = module(|s| s.content_generation_enabled);
    let auto_posting = module(|s| s.auto_posting_enabled);

    view! {
        <div class="card">
            <h3 class="text-lg font-semibold text-gray-900 mb-4">"System Status"</h3>
            <div class="space-y-3">
                <StatusItem label="Backend API" online=backend_online />
                <StatusItem label="Trend Analysis" online=trend_analysis />
                <StatusItem label="Content Generation" online=content_generation />
                <StatusItem
                    label="Auto-Posting"
                    online=auto_posting
                    subtitle="Requires Meta API credentials"
                />
            </div>
        </div>
    }
}

#[component]
fn StatusItem(
    label: &'static str,
    #[prop(into)] online: Signal<bool>,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between py-2">
            <div>
                <p class="text-sm font-medium text-gray-900">{label}</p>
                {subtitle.map(|s| view! { <p class="text-xs text-gray-500">{s}</p> })}
            </div>
            <div class="flex items-center gap-2">
                <div class=move || {
                    if online.get() {
                        "w-2 h-2 rounded-full bg-green-500 animate-pulse"
                    } else {
                        "w-2 h-2 rounded-full bg-gray-300"
                    }
                } />
                <span class=move || {
                    if online.get() {
                        "text-xs font-medium text-green-600"
                    } else {
                        "text-xs font-medium text-gray-500"
                    }
                }>
                    {move || if online.get() { "Online" } else { "Offline" }}
                </span>
            </div>
        </div>
    }
}
