//! Loading states
//!
//! Spinners and skeleton placeholders.

use leptos::*;

/// Centered loading spinner.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Skeleton loader for card grids.
#[component]
pub fn CardSkeleton(
    #[prop(default = 3)] count: usize,
    #[prop(default = "h-96")] height: &'static str,
) -> impl IntoView {
    view! {
        {(0..count)
            .map(|_| view! {
                <div class=format!("skeleton {} rounded-lg animate-pulse bg-gray-200", height) />
            })
            .collect_view()}
    }
}

/// Skeleton loader for list rows.
#[component]
pub fn ListSkeleton(#[prop(default = 3)] count: usize) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count)
                .map(|_| view! { <div class="bg-gray-200 rounded-lg h-24" /> })
                .collect_view()}
        </div>
    }
}
