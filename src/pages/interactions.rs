//! Interactions page
//!
//! Customer comments and DMs from Instagram and Facebook, with
//! platform/type/category filters and a client-side summary.

use leptos::*;

use crate::api::interactions::InteractionQuery;
use crate::api::types::{Interaction, InteractionStatus, Platform};
use crate::components::ListSkeleton;
use crate::hooks::use_interactions;
use crate::util::{format_date, DateStyle};

const PLATFORM_FILTERS: [(&str, &str); 3] = [
    ("all", "All"),
    ("instagram", "Instagram"),
    ("facebook", "Facebook"),
];

const TYPE_FILTERS: [(&str, &str); 3] = [("all", "All"), ("comment", "Comment"), ("dm", "DM")];

const CATEGORY_FILTERS: [(&str, &str); 5] = [
    ("all", "All"),
    ("price_inquiry", "Price Inquiry"),
    ("technical_question", "Technical Question"),
    ("compliment", "Compliment"),
    ("faq", "FAQ"),
];

/// Interactions page component.
#[component]
pub fn Interactions() -> impl IntoView {
    let (platform_filter, set_platform_filter) = create_signal("all".to_string());
    let (type_filter, set_type_filter) = create_signal("all".to_string());
    let (category_filter, set_category_filter) = create_signal("all".to_string());

    let query = Signal::derive(move || InteractionQuery {
        platform: Some(platform_filter.get()).filter(|v| v != "all"),
        kind: Some(type_filter.get()).filter(|v| v != "all"),
        category: Some(category_filter.get()).filter(|v| v != "all"),
        limit: Some(50),
    });

    let poll = use_interactions(query);

    view! {
        <div class="p-8">
            // Header
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-900 mb-2">"Interactions"</h1>
                <p class="text-gray-600">
                    "Monitor and manage comments & DMs from Instagram and Facebook"
                </p>
            </div>

            // Filters
            <div class="card mb-6">
                <div class="space-y-4">
                    <FilterRow
                        label="Platform"
                        options=&PLATFORM_FILTERS
                        selected=platform_filter.into()
                        on_select=move |v| set_platform_filter.set(v)
                    />
                    <FilterRow
                        label="Type"
                        options=&TYPE_FILTERS
                        selected=type_filter.into()
                        on_select=move |v| set_type_filter.set(v)
                    />
                    <FilterRow
                        label="Category"
                        options=&CATEGORY_FILTERS
                        selected=category_filter.into()
                        on_select=move |v| set_category_filter.set(v)
                    />
                </div>
            </div>

            // Error state
            {
                let poll = poll.clone();
                move || {
                    poll.error.get().map(|error| {
                        let poll = poll.clone();
                        view! {
                            <div class="card bg-red-50 border border-red-200 mb-6">
                                <div class="flex items-center text-red-700">
                                    <span class="mr-2">"⚠"</span>
                                    <span>{format!("Error: {}", error)}</span>
                                </div>
                                <button
                                    on:click=move |_| poll.revalidate()
                                    class="mt-3 btn-secondary btn-sm"
                                >
                                    "Retry"
                                </button>
                            </div>
                        }
                    })
                }
            }

            // List / empty / loading states
            {
                let poll = poll.clone();
                move || {
                    if poll.loading.get() {
                        return view! { <ListSkeleton count=5 /> }.into_view();
                    }

                    let interactions = poll
                        .data
                        .get()
                        .map(|list| list.interactions)
                        .unwrap_or_default();

                    if interactions.is_empty() {
                        return view! {
                            <div class="card text-center py-16">
                                <div class="text-6xl mb-4">"💬"</div>
                                <h2 class="text-2xl font-semibold text-gray-900 mb-2">
                                    "No Interactions Yet"
                                </h2>
                                <p class="text-gray-600">
                                    "Customer comments and messages will appear here once they \
                                     interact with your posts"
                                </p>
                            </div>
                        }
                        .into_view();
                    }

                    view! {
                        <div class="space-y-3">
                            {interactions
                                .iter()
                                .cloned()
                                .map(|interaction| view! { <InteractionRow interaction=interaction /> })
                                .collect_view()}
                        </div>

                        <InteractionSummary interactions=interactions />
                    }
                    .into_view()
                }
            }
        </div>
    }
}

#[component]
fn FilterRow(
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    #[prop(into)] selected: Signal<String>,
    on_select: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div>
            <label class="text-sm font-medium text-gray-700 mb-2 block">{label}</label>
            <div class="flex flex-wrap gap-2">
                {options
                    .iter()
                    .map(|(value, label)| view! {
                        <button
                            on:click=move |_| on_select(value.to_string())
                            class=move || {
                                if selected.get() == *value {
                                    "px-4 py-2 rounded-lg text-sm font-medium transition-all \
                                     bg-primary-600 text-white"
                                } else {
                                    "px-4 py-2 rounded-lg text-sm font-medium transition-all \
                                     bg-gray-100 text-gray-700 hover:bg-gray-200"
                                }
                            }
                        >
                            {*label}
                        </button>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn InteractionRow(interaction: Interaction) -> impl IntoView {
    let username = format!("@{}", interaction.username());
    let category_label = interaction.category_label();
    let category_class = interaction.category_class();
    let relative = format_date(interaction.timestamp.as_deref(), DateStyle::Relative);
    let absolute = format_date(interaction.timestamp.as_deref(), DateStyle::Short);
    let responded_at = interaction
        .responded_at
        .as_deref()
        .map(|at| format_date(Some(at), DateStyle::Short));

    view! {
        <div class="card-hover">
            <div class="flex items-start gap-4">
                // Platform and type icons
                <div class="flex flex-col items-center gap-1">
                    <div class="text-2xl">{interaction.platform.icon()}</div>
                    <div class="text-xl">{interaction.kind.icon()}</div>
                </div>

                // Content
                <div class="flex-1 min-w-0">
                    <div class="flex items-center gap-3 mb-2 flex-wrap">
                        <span class="font-medium text-gray-900">{username}</span>
                        <span class=format!("badge {}", category_class)>{category_label}</span>
                        <span class=interaction.status.badge_class()>
                            {interaction.status.label()}
                        </span>
                        <span class="text-xs text-gray-500">{relative}</span>
                        {interaction.redirected.then(|| view! {
                            <span class="badge bg-green-100 text-green-700 text-xs">
                                "✓ Redirected to Quote Form"
                            </span>
                        })}
                    </div>

                    // User message
                    <div class="mb-3 p-3 bg-gray-50 rounded-lg">
                        <p class="text-sm text-gray-700">{interaction.user_message.clone()}</p>
                    </div>

                    // Automated response
                    {interaction.bot_response.clone().map(|response| view! {
                        <div class="p-3 bg-primary-50 rounded-lg">
                            <p class="text-xs text-primary-600 font-medium mb-1">"AI Response:"</p>
                            <p class="text-sm text-gray-700">{response}</p>
                            {responded_at.clone().map(|at| view! {
                                <p class="text-xs text-gray-500 mt-2">"Sent: " {at}</p>
                            })}
                        </div>
                    })}

                    // Meta line
                    <div class="flex flex-wrap gap-3 mt-3 text-xs text-gray-500">
                        <span>"Platform: " {interaction.platform.label()}</span>
                        <span>"Type: " {interaction.kind.label()}</span>
                        {interaction.post_id.clone().map(|id| view! {
                            <span>"Post ID: " {id}</span>
                        })}
                    </div>
                </div>

                // Absolute timestamp
                <div class="text-xs text-gray-400 text-right whitespace-nowrap">{absolute}</div>
            </div>
        </div>
    }
}

/// Counts over the currently displayed list.
#[component]
fn InteractionSummary(interactions: Vec<Interaction>) -> impl IntoView {
    let total = interactions.len();
    let responded = interactions
        .iter()
        .filter(|i| i.status == InteractionStatus::Responded)
        .count();
    let pending = interactions
        .iter()
        .filter(|i| i.status == InteractionStatus::Pending)
        .count();
    let instagram = interactions
        .iter()
        .filter(|i| i.platform == Platform::Instagram)
        .count();

    view! {
        <div class="card mt-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-4">"Interaction Summary"</h3>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <SummaryTile value=total label="Total" class="bg-gray-50 text-gray-900" />
                <SummaryTile value=responded label="Responded" class="bg-green-50 text-green-900" />
                <SummaryTile value=pending label="Pending" class="bg-yellow-50 text-yellow-900" />
                <SummaryTile value=instagram label="Instagram" class="bg-purple-50 text-purple-900" />
            </div>
        </div>
    }
}

#[component]
fn SummaryTile(value: usize, label: &'static str, class: &'static str) -> impl IntoView {
    view! {
        <div class=format!("text-center p-4 rounded-lg {}", class)>
            <p class="text-2xl font-bold">{value}</p>
            <p class="text-sm">{label}</p>
        </div>
    }
}
