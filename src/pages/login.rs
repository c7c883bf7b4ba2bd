//! Login page
//!
//! Placeholder credential gate in front of the dashboard shell.

use leptos::*;
use leptos_router::use_navigate;

use crate::state::use_session;

/// Login page component.
#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    // Already signed in: straight to the dashboard
    {
        let session = session.clone();
        let navigate = use_navigate();
        create_effect(move |_| {
            if session.is_authenticated() {
                navigate("/", Default::default());
            }
        });
    }

    let navigate = use_navigate();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let submitted_email = email.get();
        let submitted_password = password.get();

        if submitted_email.is_empty() || submitted_password.is_empty() {
            set_error.set(Some("Email and password are required".to_string()));
            return;
        }

        if session.login(&submitted_email, &submitted_password) {
            navigate("/", Default::default());
        } else {
            set_error.set(Some("Invalid email or password".to_string()));
        }
    };

    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center p-4">
            <div class="bg-white rounded-xl shadow-lg border border-gray-200 w-full max-w-md p-8">
                // Brand
                <div class="flex items-center gap-3 mb-8">
                    <div class="w-12 h-12 bg-gradient-to-br from-primary-600 to-blue-600 rounded-xl flex items-center justify-center">
                        <span class="text-white font-bold text-2xl">"P"</span>
                    </div>
                    <div>
                        <h1 class="text-xl font-bold text-gray-900">"PostPilot"</h1>
                        <p class="text-sm text-gray-500">"Admin Dashboard"</p>
                    </div>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="label" for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="admin@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="input w-full border border-gray-300 rounded-lg px-4 py-3"
                        />
                    </div>

                    <div>
                        <label class="label" for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="input w-full border border-gray-300 rounded-lg px-4 py-3"
                        />
                    </div>

                    {move || error.get().map(|message| view! {
                        <p class="text-sm text-red-600">{message}</p>
                    })}

                    <button type="submit" class="btn-primary w-full py-3">
                        "Sign In"
                    </button>
                </form>
            </div>
        </div>
    }
}
