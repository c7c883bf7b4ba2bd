//! Settings page
//!
//! Loads the configuration singleton once per visit, edits it locally,
//! and replaces it wholesale on save.

use leptos::*;

use crate::api::types::Settings;
use crate::api::{settings, use_api_client};
use crate::state::use_ui_state;

const BRAND_VOICES: [(&str, &str); 5] = [
    ("professional-inspirational", "Professional & Inspirational"),
    ("casual-friendly", "Casual & Friendly"),
    ("technical-detailed", "Technical & Detailed"),
    ("luxury-premium", "Luxury & Premium"),
    ("modern-minimal", "Modern & Minimal"),
];

/// Settings page component.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let client = use_api_client();
    let ui = use_ui_state();

    let form = create_rw_signal(Settings::default());
    let (saving, set_saving) = create_signal(false);

    // One fetch per visit
    {
        let client = client.clone();
        let ui = ui.clone();
        create_effect(move |_| {
            let client = client.clone();
            let ui = ui.clone();
            spawn_local(async move {
                match settings::get(&client).await {
                    Ok(envelope) => form.set(envelope.settings),
                    Err(e) => ui.show_error(&format!("Failed to load settings: {}", e)),
                }
            });
        });
    }

    let on_save = {
        let client = client.clone();
        let ui = ui.clone();
        move |_| {
            if saving.get_untracked() {
                return;
            }
            set_saving.set(true);
            let client = client.clone();
            let ui = ui.clone();
            let payload = form.get_untracked();
            spawn_local(async move {
                match settings::replace(&client, &payload).await {
                    Ok(envelope) => {
                        form.set(envelope.settings);
                        ui.show_success("Settings saved successfully!");
                    }
                    Err(e) => ui.show_error(&format!("Failed to save settings: {}", e)),
                }
                set_saving.set(false);
            });
        }
    };

    let on_reset = {
        let client = client.clone();
        let ui = ui.clone();
        move |_| {
            let client = client.clone();
            let ui = ui.clone();
            spawn_local(async move {
                match settings::get(&client).await {
                    Ok(envelope) => {
                        form.set(envelope.settings);
                        ui.show_success("Settings reloaded");
                    }
                    Err(e) => ui.show_error(&format!("Failed to reload settings: {}", e)),
                }
            });
        }
    };

    view! {
        <div class="p-8">
            // Header
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-900 mb-2">"Settings"</h1>
                <p class="text-gray-600">"Configure system preferences and automation settings"</p>
            </div>

            <div class="space-y-6">
                <ContentGenerationSection form=form />
                <PostingScheduleSection form=form />
                <ApprovalWorkflowSection form=form />
                <SystemModulesSection form=form />
                <CredentialsSection />

                // Save / reset
                <div class="flex justify-end gap-3">
                    <button on:click=on_reset class="btn-secondary">"Reset to Defaults"</button>
                    <button on:click=on_save disabled=saving class="btn-primary">
                        {move || if saving.get() { "Saving..." } else { "Save Settings" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Content mix sliders and brand voice.
#[component]
fn ContentGenerationSection(form: RwSignal<Settings>) -> impl IntoView {
    let images = move || form.with(|s| s.content_mix.images);
    let videos = move || form.with(|s| s.content_mix.videos);

    let on_images = move |ev: web_sys::Event| {
        if let Ok(pct) = event_target_value(&ev).parse::<u8>() {
            form.update(|s| s.content_mix.set_images(pct));
        }
    };
    let on_videos = move |ev: web_sys::Event| {
        if let Ok(pct) = event_target_value(&ev).parse::<u8>() {
            form.update(|s| s.content_mix.set_videos(pct));
        }
    };

    view! {
        <div class="card">
            <h2 class="text-xl font-semibold text-gray-900 mb-4">"Content Generation"</h2>

            <div class="space-y-6">
                // Content mix
                <div>
                    <label class="text-sm font-medium text-gray-700 mb-2 block">
                        "Content Mix (Images vs Videos)"
                    </label>
                    <div class="space-y-3">
                        <div>
                            <div class="flex justify-between text-sm text-gray-600 mb-1">
                                <span>"Images"</span>
                                <span class="font-medium">{move || format!("{}%", images())}</span>
                            </div>
                            <input
                                type="range"
                                min="0"
                                max="100"
                                prop:value=move || images().to_string()
                                on:input=on_images
                                class="w-full h-2 bg-gray-200 rounded-lg appearance-none cursor-pointer"
                            />
                        </div>
                        <div>
                            <div class="flex justify-between text-sm text-gray-600 mb-1">
                                <span>"Videos/Reels"</span>
                                <span class="font-medium">{move || format!("{}%", videos())}</span>
                            </div>
                            <input
                                type="range"
                                min="0"
                                max="100"
                                prop:value=move || videos().to_string()
                                on:input=on_videos
                                class="w-full h-2 bg-gray-200 rounded-lg appearance-none cursor-pointer"
                            />
                        </div>
                    </div>
                    <p class="text-xs text-gray-500 mt-2">
                        "Adjust the ratio of images to video/reel content generated daily"
                    </p>
                </div>

                // Brand voice
                <div>
                    <label class="text-sm font-medium text-gray-700 mb-2 block">
                        "Brand Voice & Caption Tone"
                    </label>
                    <select
                        prop:value=move || form.with(|s| s.brand_voice.clone())
                        on:change=move |ev| {
                            let voice = event_target_value(&ev);
                            form.update(|s| s.brand_voice = voice);
                        }
                        class="w-full px-4 py-2 border border-gray-300 rounded-lg"
                    >
                        {BRAND_VOICES
                            .into_iter()
                            .map(|(value, label)| view! {
                                <option value=value selected=move || form.with(|s| s.brand_voice == value)>
                                    {label}
                                </option>
                            })
                            .collect_view()}
                    </select>
                    <p class="text-xs text-gray-500 mt-1">
                        "Sets the tone for AI-generated captions and responses"
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PostingScheduleSection(form: RwSignal<Settings>) -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="text-xl font-semibold text-gray-900 mb-4">"Posting Schedule"</h2>

            <div class="space-y-4">
                <div>
                    <label class="text-sm font-medium text-gray-700 mb-2 block">
                        "Daily Posting Time (UTC)"
                    </label>
                    <input
                        type="time"
                        prop:value=move || form.with(|s| s.posting_time.clone())
                        on:input=move |ev| {
                            let time = event_target_value(&ev);
                            form.update(|s| s.posting_time = time);
                        }
                        class="px-4 py-2 border border-gray-300 rounded-lg"
                    />
                </div>

                <div class="p-4 bg-blue-50 rounded-lg">
                    <p class="text-sm text-blue-900"><strong>"Optimal Posting Times:"</strong></p>
                    <ul class="text-xs text-blue-700 mt-2 space-y-1">
                        <li>"• Instagram: 11:00 AM - 2:00 PM EST (weekdays)"</li>
                        <li>"• Facebook: 1:00 PM - 3:00 PM EST (weekdays)"</li>
                        <li>
                            {move || format!("• Current setting: {} UTC", form.with(|s| s.posting_time.clone()))}
                        </li>
                    </ul>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ApprovalWorkflowSection(form: RwSignal<Settings>) -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="text-xl font-semibold text-gray-900 mb-4">"Approval Workflow"</h2>

            <div class="space-y-4">
                <SettingToggle
                    title="Auto-Approval Mode"
                    description="Skip manual approval and auto-post all generated content"
                    warning="Warning: Content will post without review"
                    checked=Signal::derive(move || form.with(|s| s.auto_approval))
                    on_toggle=move |on| form.update(|s| s.auto_approval = on)
                />

                <SettingToggle
                    title="Email Notifications"
                    description="Receive email alerts when new content needs approval"
                    checked=Signal::derive(move || form.with(|s| s.email_notifications))
                    on_toggle=move |on| form.update(|s| s.email_notifications = on)
                />
            </div>
        </div>
    }
}

#[component]
fn SystemModulesSection(form: RwSignal<Settings>) -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="text-xl font-semibold text-gray-900 mb-4">"System Modules"</h2>

            <div class="space-y-4">
                <SettingToggle
                    title="Daily Trend Analysis"
                    description="Analyze competitor content and market trends (Runs at 3:00 AM UTC)"
                    checked=Signal::derive(move || form.with(|s| s.trend_analysis_enabled))
                    on_toggle=move |on| form.update(|s| s.trend_analysis_enabled = on)
                />

                <SettingToggle
                    title="Content Generation"
                    description="Generate images and videos from the latest trends (Runs at 3:15 AM UTC)"
                    checked=Signal::derive(move || form.with(|s| s.content_generation_enabled))
                    on_toggle=move |on| form.update(|s| s.content_generation_enabled = on)
                />

                <SettingToggle
                    title="Auto-Posting to Social Media"
                    description="Automatically post approved content to Instagram & Facebook"
                    warning="Requires Meta API credentials"
                    checked=Signal::derive(move || form.with(|s| s.auto_posting_enabled))
                    on_toggle=move |on| form.update(|s| s.auto_posting_enabled = on)
                />
            </div>
        </div>
    }
}

#[component]
fn SettingToggle(
    title: &'static str,
    description: &'static str,
    #[prop(optional)] warning: Option<&'static str>,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: impl Fn(bool) + 'static,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between p-4 bg-gray-50 rounded-lg">
            <div class="flex-1">
                <p class="font-medium text-gray-900">{title}</p>
                <p class="text-sm text-gray-600">{description}</p>
                {warning.map(|w| view! {
                    <p class="text-xs text-yellow-600 mt-1">"⚠ " {w}</p>
                })}
            </div>
            <label class="relative inline-flex items-center cursor-pointer">
                <input
                    type="checkbox"
                    prop:checked=checked
                    on:change=move |ev| on_toggle(event_target_checked(&ev))
                    class="sr-only peer"
                />
                <div class="w-11 h-6 bg-gray-200 rounded-full peer peer-checked:bg-primary-600 \
                            peer-checked:after:translate-x-full after:content-[''] after:absolute \
                            after:top-[2px] after:left-[2px] after:bg-white after:border \
                            after:border-gray-300 after:rounded-full after:h-5 after:w-5 \
                            after:transition-all" />
            </label>
        </div>
    }
}

/// Masked integration credentials. Keys live in backend environment
/// variables and are never editable from the dashboard.
#[component]
fn CredentialsSection() -> impl IntoView {
    const INTEGRATIONS: [(&str, &str, bool); 4] = [
        ("OpenAI API", "sk-proj-***************************", true),
        ("Midjourney (Discord)", "MTAx***************************", true),
        ("Cloudinary", "Cloud: configured", true),
        ("Meta Graph API", "Not configured", false),
    ];

    view! {
        <div class="card">
            <h2 class="text-xl font-semibold text-gray-900 mb-4">"API Credentials"</h2>

            <div class="space-y-4">
                <div class="p-4 bg-yellow-50 border border-yellow-200 rounded-lg">
                    <p class="text-sm text-yellow-800">
                        <strong>"🔒 Security Notice: "</strong>
                        "API keys are stored securely in environment variables. For security \
                         reasons, keys cannot be viewed or edited from the dashboard."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {INTEGRATIONS
                        .into_iter()
                        .map(|(name, masked, connected)| view! {
                            <div class="p-4 bg-gray-50 rounded-lg">
                                <p class="text-sm font-medium text-gray-700 mb-1">{name}</p>
                                <p class="text-xs text-gray-600">{masked}</p>
                                {if connected {
                                    view! {
                                        <span class="badge bg-green-100 text-green-700 text-xs mt-2">
                                            "✓ Connected"
                                        </span>
                                    }
                                } else {
                                    view! {
                                        <span class="badge bg-red-100 text-red-700 text-xs mt-2">
                                            "✗ Not Connected"
                                        </span>
                                    }
                                }}
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
