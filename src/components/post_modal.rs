//! Edit post modal
//!
//! Caption editor shown before save-and-approve.

use leptos::*;

use crate::api::types::Post;

/// Modal for rewriting a pending post's caption.
#[component]
pub fn EditPostModal(
    post: Post,
    caption: RwSignal<String>,
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_save: Callback<()>,
) -> impl IntoView {
    let preview = post.preview_url().map(|url| url.to_string());
    let hashtags = post.hashtags.clone();

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center p-4 z-50">
            <div class="bg-white rounded-xl shadow-2xl max-w-2xl w-full max-h-[90vh] overflow-y-auto">
                <div class="p-6 border-b border-gray-200">
                    <h2 class="text-2xl font-bold text-gray-900">"Edit Post"</h2>
                </div>

                <div class="p-6 space-y-6">
                    // Media preview
                    <div>
                        <label class="label">"Media Preview"</label>
                        <div class="relative aspect-[4/5] rounded-lg overflow-hidden bg-gray-100">
                            {match preview {
                                Some(url) => view! {
                                    <img src=url alt="Post media" class="w-full h-full object-cover" />
                                }
                                .into_view(),
                                None => view! {
                                    <div class="flex items-center justify-center h-full text-gray-400 text-4xl">
                                        "🖼"
                                    </div>
                                }
                                .into_view(),
                            }}
                        </div>
                    </div>

                    // Caption editor
                    <div>
                        <label for="caption" class="label">"Caption"</label>
                        <textarea
                            id="caption"
                            prop:value=move || caption.get()
                            on:input=move |ev| caption.set(event_target_value(&ev))
                            class="input w-full min-h-[150px] resize-y border border-gray-300 rounded-lg p-3"
                            placeholder="Enter caption..."
                        />
                        <p class="text-xs text-gray-500 mt-1">
                            {move || format!("{} characters", caption.get().chars().count())}
                        </p>
                    </div>

                    // Hashtags (read-only in the editor)
                    {(!hashtags.is_empty()).then(|| view! {
                        <div>
                            <label class="label">"Hashtags"</label>
                            <div class="flex flex-wrap gap-2">
                                {hashtags
                                    .into_iter()
                                    .map(|tag| view! {
                                        <span class="badge bg-primary-50 text-primary-700">{tag}</span>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    })}
                </div>

                // Actions
                <div class="p-6 border-t border-gray-200 flex gap-3">
                    <button
                        on:click=move |_| on_close.call(())
                        disabled=saving
                        class="btn-secondary flex-1"
                    >
                        "Cancel"
                    </button>
                    <button
                        on:click=move |_| on_save.call(())
                        disabled=saving
                        class="btn-primary flex-1"
                    >
                        {move || if saving.get() { "Saving..." } else { "Save & Approve" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
