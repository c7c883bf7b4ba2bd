//! Trends page
//!
//! Chronological trend analyses, newest first.

use leptos::*;

use crate::api::types::TrendAnalysis;
use crate::api::{trends, use_api_client};
use crate::components::ListSkeleton;
use crate::hooks::use_trends;
use crate::state::use_ui_state;
use crate::util::{format_date, DateStyle};

/// Trends page component.
#[component]
pub fn Trends() -> impl IntoView {
    let client = use_api_client();
    let ui = use_ui_state();
    let poll = use_trends(Some(10));

    let (analyzing, set_analyzing) = create_signal(false);
    let on_analyze = {
        let poll = poll.clone();
        move |_| {
            if analyzing.get_untracked() {
                return;
            }
            set_analyzing.set(true);
            let client = client.clone();
            let ui = ui.clone();
            let poll = poll.clone();
            spawn_local(async move {
                match trends::analyze(&client, true).await {
                    Ok(_) => {
                        poll.revalidate();
                        ui.show_success("Trend analysis complete");
                    }
                    Err(e) => ui.show_error(&format!("Failed to analyze trends: {}", e)),
                }
                set_analyzing.set(false);
            });
        }
    };

    view! {
        <div class="p-8">
            // Header
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-900 mb-2">"Trend Analysis"</h1>
                <p class="text-gray-600">"AI-powered market insights for content optimization"</p>
            </div>

            {
                let poll = poll.clone();
                move || {
                    if poll.loading.get() {
                        view! { <ListSkeleton count=3 /> }.into_view()
                    } else {
                        let snapshots = poll.data.get().map(|list| list.trends).unwrap_or_default();
                        if snapshots.is_empty() {
                            view! {
                                <div class="card text-center py-16">
                                    <div class="text-6xl mb-4">"🔥"</div>
                                    <h2 class="text-2xl font-semibold text-gray-900 mb-2">
                                        "No Trends Available"
                                    </h2>
                                    <p class="text-gray-600 mb-6">"Run a trend analysis to get started"</p>
                                    <button
                                        on:click=on_analyze.clone()
                                        disabled=analyzing
                                        class="btn-primary"
                                    >
                                        {move || if analyzing.get() {
                                            "Analyzing..."
                                        } else {
                                            "Analyze Trends Now"
                                        }}
                                    </button>
                                </div>
                            }
                            .into_view()
                        } else {
                            view! {
                                <div class="space-y-6">
                                    {snapshots
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, snapshot)| view! {
                                            <TrendCard snapshot=snapshot latest=index == 0 />
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

/// One trend snapshot.
#[component]
fn TrendCard(snapshot: TrendAnalysis, latest: bool) -> impl IntoView {
    let date_label = format_date(snapshot.date.as_deref(), DateStyle::Long);
    let analyzed_label = format_date(snapshot.analyzed_at.as_deref(), DateStyle::Short);

    let hashtags: Vec<String> = snapshot.top_hashtags.iter().take(12).cloned().collect();
    let image_styles: Vec<String> = snapshot.image_post_styles.iter().take(4).cloned().collect();
    let video_styles: Vec<String> = snapshot.video_post_styles.iter().take(4).cloned().collect();
    let topics = snapshot.trending_topics.clone();
    let insights = snapshot.competitor_insights.clone();

    view! {
        <div class=if latest {
            "card-hover border-2 border-primary-200"
        } else {
            "card-hover"
        }>
            {latest.then(|| view! {
                <div class="mb-4">
                    <span class="badge bg-primary-600 text-white">"Latest Analysis"</span>
                </div>
            })}

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                // Date and content mix
                <div>
                    <h3 class="text-lg font-semibold text-gray-900 mb-2">{date_label}</h3>
                    <p class="text-sm text-gray-600 mb-4">"Analyzed at " {analyzed_label}</p>

                    <div class="space-y-2">
                        <p class="text-sm font-medium text-gray-700">"Content Mix"</p>
                        <div class="flex gap-2">
                            <span class="badge bg-blue-100 text-blue-700">
                                {format!("{}% Images", snapshot.content_mix.images)}
                            </span>
                            <span class="badge bg-purple-100 text-purple-700">
                                {format!("{}% Videos", snapshot.content_mix.videos)}
                            </span>
                        </div>
                    </div>
                </div>

                // Top hashtags
                <div>
                    <h4 class="text-sm font-medium text-gray-700 mb-3">"Top Hashtags"</h4>
                    <div class="flex flex-wrap gap-1.5">
                        {hashtags
                            .into_iter()
                            .map(|tag| view! {
                                <span class="badge bg-primary-50 text-primary-700 text-xs">{tag}</span>
                            })
                            .collect_view()}
                    </div>
                </div>

                // Popular styles
                <div>
                    <h4 class="text-sm font-medium text-gray-700 mb-3">"Popular Styles"</h4>
                    <div class="space-y-2">
                        <StyleRow label="Images" styles=image_styles class="bg-blue-50 text-blue-700" />
                        <StyleRow label="Videos" styles=video_styles class="bg-purple-50 text-purple-700" />
                    </div>
                </div>
            </div>

            // Trending topics
            {(!topics.is_empty()).then(|| view! {
                <div class="mt-6 pt-6 border-t border-gray-200">
                    <h4 class="text-sm font-medium text-gray-700 mb-3">"Trending Topics"</h4>
                    <div class="flex flex-wrap gap-2">
                        {topics
                            .into_iter()
                            .map(|topic| view! {
                                <span class="badge bg-gray-100 text-gray-700">{topic}</span>
                            })
                            .collect_view()}
                    </div>
                </div>
            })}

            // Competitor insights
            {insights.map(|insights| view! {
                <div class="mt-6 pt-6 border-t border-gray-200">
                    <h4 class="text-sm font-medium text-gray-700 mb-3">"Competitor Insights"</h4>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="p-3 bg-gray-50 rounded-lg">
                            <p class="text-xs text-gray-600 mb-1">"Common Themes"</p>
                            <p class="text-xs text-gray-700">
                                {insights.common_themes.join(", ")}
                            </p>
                        </div>
                        <div class="p-3 bg-gray-50 rounded-lg">
                            <p class="text-xs text-gray-600 mb-1">"Avg Engagement"</p>
                            <p class="text-sm font-medium text-gray-900">
                                {insights.avg_engagement.unwrap_or_else(|| "N/A".to_string())}
                            </p>
                        </div>
                    </div>
                </div>
            })}
        </div>
    }
}

#[component]
fn StyleRow(
    label: &'static str,
    styles: Vec<String>,
    class: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <p class="text-xs text-gray-600 mb-1">{label}</p>
            <div class="flex flex-wrap gap-1.5">
                {styles
                    .into_iter()
                    .map(|style| view! {
                        <span class=format!("badge text-xs {}", class)>{style}</span>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
