//! Stats card
//!
//! Headline figure with an icon and optional subtitle.

use leptos::*;

/// Stats card component.
#[component]
pub fn StatsCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    /// Emoji stand-in for the icon slot
    icon: &'static str,
    #[prop(optional, into)] subtitle: Option<String>,
    /// One of blue/green/yellow/red/purple
    #[prop(default = "blue")]
    color: &'static str,
) -> impl IntoView {
    let icon_class = match color {
        "green" => "bg-green-50 text-green-600",
        "yellow" => "bg-yellow-50 text-yellow-600",
        "red" => "bg-red-50 text-red-600",
        "purple" => "bg-purple-50 text-purple-600",
        _ => "bg-blue-50 text-blue-600",
    };

    view! {
        <div class="stat-card flex items-start justify-between bg-white rounded-xl border border-gray-200 p-6">
            <div class="flex-1">
                <p class="text-sm font-medium text-gray-600">{title}</p>
                <p class="text-3xl font-bold text-gray-900 mt-2">{value}</p>
                {subtitle.map(|s| view! { <p class="text-xs text-gray-500 mt-1">{s}</p> })}
            </div>

            <div class=format!("p-4 rounded-xl text-2xl {}", icon_class)>{icon}</div>
        </div>
    }
}
