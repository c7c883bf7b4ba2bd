//! Logs page
//!
//! System activity feed with severity filters. Severity is derived
//! client-side from each entry's type tag.

use leptos::*;

use crate::api::types::{LogEntry, LogStatus};
use crate::components::ListSkeleton;
use crate::hooks::use_logs;
use crate::util::{format_date, DateStyle};

const STATUS_FILTERS: [(&str, &str); 5] = [
    ("all", "All"),
    ("success", "Success"),
    ("warning", "Warning"),
    ("error", "Error"),
    ("info", "Info"),
];

/// Logs page component.
#[component]
pub fn Logs() -> impl IntoView {
    let poll = use_logs(Some(50));
    let (filter, set_filter) = create_signal("all".to_string());

    let entries = {
        let poll = poll.clone();
        move || poll.data.get().map(|list| list.logs).unwrap_or_default()
    };

    let filtered = {
        let entries = entries.clone();
        move || {
            let selected = filter.get();
            entries()
                .into_iter()
                .filter(|entry| selected == "all" || entry.status().as_str() == selected)
                .collect::<Vec<_>>()
        }
    };

    view! {
        <div class="p-8">
            // Header
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-900 mb-2">"System Logs"</h1>
                <p class="text-gray-600">"Monitor system activity and events"</p>
            </div>

            // Filters
            <div class="card mb-6">
                <div class="flex gap-2">
                    {STATUS_FILTERS
                        .into_iter()
                        .map(|(value, label)| view! {
                            <button
                                on:click=move |_| set_filter.set(value.to_string())
                                class=move || {
                                    if filter.get() == value {
                                        "px-4 py-2 rounded-lg text-sm font-medium transition-all \
                                         bg-primary-600 text-white"
                                    } else {
                                        "px-4 py-2 rounded-lg text-sm font-medium transition-all \
                                         bg-gray-100 text-gray-700 hover:bg-gray-200"
                                    }
                                }
                            >
                                {label}
                            </button>
                        })
                        .collect_view()}
                </div>
            </div>

            // Log list
            {
                let poll = poll.clone();
                let filtered = filtered.clone();
                move || {
                    if poll.loading.get() {
                        return view! { <ListSkeleton count=5 /> }.into_view();
                    }

                    let entries = filtered();
                    if entries.is_empty() {
                        return view! {
                            <div class="card text-center py-16">
                                <div class="text-6xl mb-4">"📝"</div>
                                <h2 class="text-2xl font-semibold text-gray-900 mb-2">"No Logs Found"</h2>
                                <p class="text-gray-600">"No system logs match your filter"</p>
                            </div>
                        }
                        .into_view();
                    }

                    view! {
                        <div class="space-y-3">
                            {entries
                                .into_iter()
                                .map(|entry| view! { <LogRow entry=entry /> })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }
            }

            // Summary over all fetched entries, regardless of filter
            {
                let entries = entries.clone();
                move || {
                    let entries = entries();
                    view! { <LogSummary entries=entries /> }
                }
            }
        </div>
    }
}

#[component]
fn LogRow(entry: LogEntry) -> impl IntoView {
    let status = entry.status();
    let relative = format_date(entry.timestamp.as_deref(), DateStyle::Relative);
    let absolute = format_date(entry.timestamp.as_deref(), DateStyle::Short);

    view! {
        <div class="card-hover">
            <div class="flex items-start gap-4">
                <div class="text-2xl">{entry.icon()}</div>

                <div class="flex-1 min-w-0">
                    <div class="flex items-center gap-3 mb-1">
                        <span class=status.badge_class()>{status.as_str()}</span>
                        <span class="text-xs text-gray-500">{relative}</span>
                    </div>

                    <p class="text-sm font-medium text-gray-900 mb-1">{entry.message.clone()}</p>

                    <div class="flex flex-wrap gap-3 text-xs text-gray-500">
                        <span>"Type: " {entry.event_type.clone()}</span>
                        {entry.post_id.clone().map(|id| view! {
                            <span>"Post ID: " {id}</span>
                        })}
                        {entry.content_type.clone().map(|ct| view! {
                            <span>"Content: " {ct}</span>
                        })}
                    </div>
                </div>

                <div class="text-xs text-gray-400 text-right whitespace-nowrap">{absolute}</div>
            </div>
        </div>
    }
}

#[component]
fn LogSummary(entries: Vec<LogEntry>) -> impl IntoView {
    let count = |status: LogStatus| entries.iter().filter(|e| e.status() == status).count();
    let success = count(LogStatus::Success);
    let warnings = count(LogStatus::Warning);
    let errors = count(LogStatus::Error);
    let info = count(LogStatus::Info);

    view! {
        <div class="card mt-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-4">"Log Summary"</h3>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <div class="text-center p-4 bg-green-50 rounded-lg">
                    <p class="text-2xl font-bold text-green-900">{success}</p>
                    <p class="text-sm text-green-600">"Success"</p>
                </div>
                <div class="text-center p-4 bg-yellow-50 rounded-lg">
                    <p class="text-2xl font-bold text-yellow-900">{warnings}</p>
                    <p class="text-sm text-yellow-600">"Warnings"</p>
                </div>
                <div class="text-center p-4 bg-red-50 rounded-lg">
                    <p class="text-2xl font-bold text-red-900">{errors}</p>
                    <p class="text-sm text-red-600">"Errors"</p>
                </div>
                <div class="text-center p-4 bg-blue-50 rounded-lg">
                    <p class="text-2xl font-bold text-blue-900">{info}</p>
                    <p class="text-sm text-blue-600">"Info"</p>
                </div>
            </div>
        </div>
    }
}
