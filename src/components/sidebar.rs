//! Sidebar
//!
//! Navigation rail with the pending-approval badge and the logout
//! control.

use leptos::*;
use leptos_router::*;

use crate::hooks::use_pending_posts;
use crate::state::use_session;

const NAV_ITEMS: [(&str, &str, &str); 8] = [
    ("/", "📋", "Dashboard"),
    ("/approval", "✅", "Pending Approval"),
    ("/content", "📅", "Content Calendar"),
    ("/analytics", "📈", "Analytics"),
    ("/trends", "🔥", "Trends"),
    ("/interactions", "💬", "Interactions"),
    ("/logs", "📝", "Logs"),
    ("/settings", "⚙️", "Settings"),
];

/// Navigation sidebar.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let pending = use_pending_posts(None);
    let pending_count = move || {
        pending
            .data
            .get()
            .map(|list| list.count.max(list.posts.len()))
            .unwrap_or(0)
    };

    let navigate = use_navigate();
    let session_for_logout = session.clone();
    let on_logout = move |_| {
        session_for_logout.logout();
        navigate("/login", Default::default());
    };

    view! {
        <aside class="flex flex-col h-full w-64 bg-white border-r border-gray-200">
            // Brand
            <div class="flex items-center gap-3 px-6 py-5 border-b border-gray-200">
                <div class="w-10 h-10 bg-gradient-to-br from-primary-600 to-blue-600 rounded-xl flex items-center justify-center">
                    <span class="text-white font-bold text-xl">"P"</span>
                </div>
                <div>
                    <h1 class="text-lg font-bold text-gray-900">"PostPilot"</h1>
                    <p class="text-xs text-gray-500">"AI Automation"</p>
                </div>
            </div>

            // Navigation
            <nav class="flex-1 px-4 py-6 space-y-1 overflow-y-auto">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(href, icon, label)| {
                        let pending_count = pending_count.clone();
                        let badge = (href == "/approval").then(|| {
                            view! {
                                <span class="ml-auto badge bg-yellow-100 text-yellow-700 text-xs">
                                    {pending_count}
                                </span>
                            }
                        });

                        view! {
                            <A
                                href=href
                                exact=href == "/"
                                class="flex items-center gap-3 px-4 py-3 rounded-lg text-sm font-medium \
                                       text-gray-700 hover:bg-gray-50 hover:text-gray-900 transition-all"
                                active_class="bg-primary-50 text-primary-700"
                            >
                                <span class="text-lg">{icon}</span>
                                <span>{label}</span>
                                {badge}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>

            // Signed-in admin
            <div class="px-6 py-4 border-t border-gray-200">
                <p class="text-xs text-gray-500 mb-1">"Signed in as"</p>
                <p class="text-sm font-medium text-gray-900 truncate">
                    {move || session.email().unwrap_or_default()}
                </p>
                <button
                    on:click=on_logout
                    class="mt-3 w-full px-4 py-2 text-sm font-medium text-gray-700 \
                           bg-gray-100 hover:bg-gray-200 rounded-lg transition-colors"
                >
                    "Sign Out"
                </button>
            </div>
        </aside>
    }
}
