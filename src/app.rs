//! App root component
//!
//! Router, context providers, and the authenticated shell.

use leptos::*;
use leptos_router::*;

use crate::api::ApiClient;
use crate::components::{Sidebar, Toast};
use crate::pages::{
    Analytics, Approval, ContentCalendar, Interactions, Login, Logs, Overview, SettingsPage,
    Trends,
};
use crate::state::{provide_session, provide_ui_state, use_session};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    // Provide shared state to all components
    provide_ui_state();
    provide_session();

    // One API client for the whole tree; a 401 anywhere tears the
    // session down exactly once
    let session = use_session();
    let client = ApiClient::new().on_unauthorized({
        let session = session.clone();
        move || session.invalidate()
    });
    provide_context(client);

    view! {
        <Router>
            <Routes>
                <Route path="/login" view=Login />
                <Route path="/" view=Shell>
                    <Route path="" view=Overview />
                    <Route path="approval" view=Approval />
                    <Route path="content" view=ContentCalendar />
                    <Route path="analytics" view=Analytics />
                    <Route path="trends" view=Trends />
                    <Route path="interactions" view=Interactions />
                    <Route path="logs" view=Logs />
                    <Route path="settings" view=SettingsPage />
                </Route>
                <Route path="/*any" view=NotFound />
            </Routes>

            // Toast notifications
            <Toast />
        </Router>
    }
}

/// Authenticated layout: sidebar plus the routed page. Unauthenticated
/// visitors are sent to the login page.
#[component]
fn Shell() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    create_effect(move |_| {
        if !session.is_authenticated() {
            navigate("/login", Default::default());
        }
    });

    view! {
        <div class="min-h-screen bg-gray-50 flex">
            <Sidebar />
            <main class="flex-1 overflow-y-auto">
                <Outlet />
            </main>
        </div>
    }
}

/// 404 page.
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col items-center justify-center text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold text-gray-900 mb-2">"Page Not Found"</h1>
            <p class="text-gray-600 mb-6">"The page you're looking for doesn't exist."</p>
            <A href="/" class="btn-primary">"Go to Dashboard"</A>
        </div>
    }
}
