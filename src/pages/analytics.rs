//! Analytics page
//!
//! Aggregate figures over already-fetched statistics: status
//! distribution, approval and publishing rates, interaction volume.

use leptos::*;

use crate::api::types::StatusCounts;
use crate::components::{StatsCard, StatusChart};
use crate::hooks::{use_interaction_statistics, use_post_statistics};
use crate::util::format_number;

/// Analytics page component.
#[component]
pub fn Analytics() -> impl IntoView {
    let stats = use_post_statistics();
    let interactions = use_interaction_statistics();

    let stat = {
        let stats = stats.clone();
        move |pick: fn(&crate::api::types::PostStatistics) -> u64| {
            let stats = stats.clone();
            Signal::derive(move || {
                stats
                    .data
                    .get()
                    .map(|s| format_number(pick(&s)))
                    .unwrap_or_else(|| "0".to_string())
            })
        }
    };
    let total = stat(|s| s.total);
    let pending = stat(|s| s.by_status.pending);
    let approved = stat(|s| s.by_status.approved);
    let posted = stat(|s| s.by_status.posted);

    let counts: Signal<StatusCounts> = {
        let stats = stats.clone();
        Signal::derive(move || {
            stats
                .data
                .get()
                .map(|s| s.by_status)
                .unwrap_or_default()
        })
    };

    let rate = {
        let stats = stats.clone();
        move |pick: fn(&crate::api::types::PostStatistics) -> u64| {
            let stats = stats.clone();
            move || {
                stats
                    .data
                    .get()
                    .map(|s| format!("{}%", pick(&s)))
                    .unwrap_or_else(|| "0%".to_string())
            }
        }
    };
    let approval_rate = rate(|s| s.approval_rate());
    let publishing_rate = rate(|s| s.publishing_rate());

    let responded_share = {
        let interactions = interactions.clone();
        move || {
            interactions
                .data
                .get()
                .map(|i| {
                    format!(
                        "{}%",
                        crate::util::calculate_percentage(i.responded, i.total)
                    )
                })
                .unwrap_or_else(|| "0%".to_string())
        }
    };
    let interaction_total = {
        let interactions = interactions.clone();
        move || {
            interactions
                .data
                .get()
                .map(|i| format_number(i.total))
                .unwrap_or_else(|| "0".to_string())
        }
    };

    view! {
        <div class="p-8">
            // Header
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-900 mb-2">"Analytics"</h1>
                <p class="text-gray-600">"Track your content performance and insights"</p>
            </div>

            // Stats overview
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                <StatsCard title="Total Posts" value=total icon="🗂" color="blue" />
                <StatsCard title="Pending" value=pending icon="⏳" color="yellow" />
                <StatsCard title="Approved" value=approved icon="✅" color="green" />
                <StatsCard title="Posted" value=posted icon="📤" color="purple" />
            </div>

            // Status distribution chart
            <div class="card mb-6">
                <h3 class="text-lg font-semibold text-gray-900 mb-4">"Post Status Distribution"</h3>
                <StatusChart counts=counts />
            </div>

            // Key insights
            <div class="card">
                <h3 class="text-lg font-semibold text-gray-900 mb-4">"Key Insights"</h3>
                <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                    <div class="p-4 bg-blue-50 rounded-lg">
                        <p class="text-sm text-blue-600 font-medium mb-1">"Approval Rate"</p>
                        <p class="text-2xl font-bold text-blue-900">{approval_rate}</p>
                    </div>

                    <div class="p-4 bg-green-50 rounded-lg">
                        <p class="text-sm text-green-600 font-medium mb-1">"Publishing Rate"</p>
                        <p class="text-2xl font-bold text-green-900">{publishing_rate}</p>
                    </div>

                    <div class="p-4 bg-purple-50 rounded-lg">
                        <p class="text-sm text-purple-600 font-medium mb-1">"Interactions"</p>
                        <p class="text-2xl font-bold text-purple-900">{interaction_total}</p>
                    </div>

                    <div class="p-4 bg-yellow-50 rounded-lg">
                        <p class="text-sm text-yellow-600 font-medium mb-1">"Response Rate"</p>
                        <p class="text-2xl font-bold text-yellow-900">{responded_share}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
