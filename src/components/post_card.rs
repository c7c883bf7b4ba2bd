//! Post card
//!
//! Media preview plus caption, hashtags, meta line, and the review
//! actions for pending posts.

use leptos::*;

use crate::api::types::{Post, PostStatus};
use crate::util::{format_date, format_file_size, DateStyle};

/// Post card component.
#[component]
pub fn PostCard(
    post: Post,
    #[prop(optional, into)] on_approve: Option<Callback<String>>,
    #[prop(optional, into)] on_reject: Option<Callback<String>>,
    #[prop(optional, into)] on_edit: Option<Callback<String>>,
    #[prop(optional, into)] on_view: Option<Callback<String>>,
    #[prop(default = true)] show_actions: bool,
) -> impl IntoView {
    let id = post.id.clone();
    let is_pending = post.status == PostStatus::Pending;
    let show_review_actions = show_actions && is_pending;

    let preview = post.preview_url().map(|url| url.to_string());
    let is_video = post.is_video();
    let status_label = post.status.label();
    let status_class = post.status.badge_class();
    let caption = post
        .caption
        .clone()
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| "No caption".to_string());

    let visible_hashtags: Vec<String> = post.hashtags.iter().take(5).cloned().collect();
    let extra_hashtags = post.hashtags.len().saturating_sub(5);

    let generated_label = format_date(post.generated_at.as_deref(), DateStyle::Relative);
    let size_label = post.file_size.map(format_file_size);
    let duration_label = post.duration.map(|d| format!("{}s", d));

    view! {
        <div class="card-hover group bg-white rounded-xl border border-gray-200 p-4">
            // Media preview
            <div class="relative aspect-[4/5] overflow-hidden rounded-lg bg-gray-100 mb-4">
                {match preview {
                    Some(url) => view! {
                        <img
                            src=url
                            alt="Post media"
                            class="w-full h-full object-cover transition-transform duration-300 group-hover:scale-105"
                        />
                    }
                    .into_view(),
                    None => view! {
                        <div class="flex items-center justify-center h-full text-gray-400 text-4xl">
                            "🖼"
                        </div>
                    }
                    .into_view(),
                }}

                {is_video.then(|| view! {
                    <div class="absolute inset-0 flex items-center justify-center bg-black/30">
                        <div class="bg-white/90 rounded-full p-4 text-2xl">"▶"</div>
                    </div>
                })}

                // Status badge
                <div class="absolute top-3 right-3">
                    <span class=format!("{} capitalize", status_class)>{status_label}</span>
                </div>

                // Type badge
                <div class="absolute top-3 left-3">
                    <span class="badge bg-black/50 text-white">{post.media_type.label()}</span>
                </div>
            </div>

            <div class="space-y-3">
                // Caption
                <p class="text-sm text-gray-700 line-clamp-3">{caption}</p>

                // Hashtags
                {(!visible_hashtags.is_empty()).then(|| view! {
                    <div class="flex flex-wrap gap-1.5">
                        {visible_hashtags
                            .into_iter()
                            .map(|tag| view! {
                                <span class="text-xs text-primary-600">{tag}</span>
                            })
                            .collect_view()}
                        {(extra_hashtags > 0).then(|| view! {
                            <span class="text-xs text-gray-500">
                                {format!("+{} more", extra_hashtags)}
                            </span>
                        })}
                    </div>
                })}

                // Meta line
                <div class="flex items-center gap-4 text-xs text-gray-500">
                    <span>{generated_label}</span>
                    {size_label.map(|s| view! { <span>{s}</span> })}
                    {duration_label.map(|d| view! { <span>{d}</span> })}
                </div>

                // Post ID
                <div class="text-xs text-gray-400 font-mono">"ID: " {post.post_id.clone()}</div>

                // Review actions
                {show_review_actions.then(|| {
                    let approve_id = id.clone();
                    let edit_id = id.clone();
                    let reject_id = id.clone();
                    view! {
                        <div class="flex gap-2 pt-3 border-t border-gray-200">
                            {on_approve.map(|cb| {
                                let id = approve_id.clone();
                                view! {
                                    <button
                                        type="button"
                                        on:click=move |_| cb.call(id.clone())
                                        class="btn-success flex-1 btn-sm"
                                    >
                                        "✓ Approve"
                                    </button>
                                }
                            })}
                            {on_edit.map(|cb| {
                                let id = edit_id.clone();
                                view! {
                                    <button
                                        type="button"
                                        on:click=move |_| cb.call(id.clone())
                                        class="btn-secondary btn-sm"
                                    >
                                        "✎ Edit"
                                    </button>
                                }
                            })}
                            {on_reject.map(|cb| {
                                let id = reject_id.clone();
                                view! {
                                    <button
                                        type="button"
                                        on:click=move |_| cb.call(id.clone())
                                        class="btn-danger btn-sm"
                                    >
                                        "✕ Reject"
                                    </button>
                                }
                            })}
                        </div>
                    }
                })}

                // Preview button
                {on_view.map(|cb| {
                    let id = id.clone();
                    view! {
                        <button
                            type="button"
                            on:click=move |_| cb.call(id.clone())
                            class="btn-secondary w-full btn-sm mt-2"
                        >
                            "Preview"
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
