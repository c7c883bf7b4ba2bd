//! Approval page
//!
//! The review queue: approve, reject, or edit pending posts. Every
//! successful action is followed by one revalidation of the queue; a
//! failed action leaves the cached list untouched.

use leptos::*;
use leptos_router::A;

use crate::api::posts::{self, ApproveRequest, EditRequest, PostUpdates, RejectRequest};
use crate::api::types::{Post, PublishOutcome};
use crate::api::use_api_client;
use crate::components::{CardSkeleton, EditPostModal, PostCard};
use crate::hooks::use_pending_posts;
use crate::state::{use_session, use_ui_state};

/// Pending approval page component.
#[component]
pub fn Approval() -> impl IntoView {
    let client = use_api_client();
    let ui = use_ui_state();
    let session = use_session();
    let pending = use_pending_posts(Some(50));

    let action_loading = create_rw_signal(None::<String>);
    let editing = create_rw_signal(None::<Post>);
    let edit_caption = create_rw_signal(String::new());

    let on_approve = {
        let client = client.clone();
        let ui = ui.clone();
        let session = session.clone();
        let pending = pending.clone();
        Callback::new(move |id: String| {
            if action_loading.get_untracked().is_some() {
                return;
            }
            action_loading.set(Some(id.clone()));

            let client = client.clone();
            let ui = ui.clone();
            let pending = pending.clone();
            let body = ApproveRequest {
                approved_by: session.email(),
                scheduled_post_time: None,
            };
            spawn_local(async move {
                match posts::approve(&client, &id, &body).await {
                    Ok(outcome) => {
                        pending.revalidate();
                        notify_publish_outcome(&ui, outcome.publish_outcome(), "approved");
                    }
                    Err(e) => ui.show_error(&format!("Failed to approve post: {}", e)),
                }
                action_loading.set(None);
            });
        })
    };

    let on_reject = {
        let client = client.clone();
        let ui = ui.clone();
        let session = session.clone();
        let pending = pending.clone();
        Callback::new(move |id: String| {
            // Cancelling the prompt cancels the action
            let Some(reason) = prompt_reason() else {
                return;
            };
            if action_loading.get_untracked().is_some() {
                return;
            }
            action_loading.set(Some(id.clone()));

            let client = client.clone();
            let ui = ui.clone();
            let pending = pending.clone();
            let body = RejectRequest {
                reason: if reason.is_empty() {
                    "No reason provided".to_string()
                } else {
                    reason
                },
                rejected_by: session.email(),
            };
            spawn_local(async move {
                match posts::reject(&client, &id, &body).await {
                    Ok(_) => {
                        pending.revalidate();
                        ui.show_success("Post rejected");
                    }
                    Err(e) => ui.show_error(&format!("Failed to reject post: {}", e)),
                }
                action_loading.set(None);
            });
        })
    };

    let on_edit = {
        let pending = pending.clone();
        Callback::new(move |id: String| {
            let post = pending
                .data
                .get_untracked()
                .and_then(|list| list.posts.into_iter().find(|p| p.id == id));
            if let Some(post) = post {
                edit_caption.set(post.caption.clone().unwrap_or_default());
                editing.set(Some(post));
            }
        })
    };

    let on_save_edit = {
        let client = client.clone();
        let ui = ui.clone();
        let session = session.clone();
        let pending = pending.clone();
        Callback::new(move |_| {
            let Some(post) = editing.get_untracked() else {
                return;
            };
            if action_loading.get_untracked().is_some() {
                return;
            }
            action_loading.set(Some(post.id.clone()));

            let client = client.clone();
            let ui = ui.clone();
            let pending = pending.clone();
            let body = EditRequest {
                updates: PostUpdates {
                    caption: Some(edit_caption.get_untracked()),
                    hashtags: None,
                },
                edited_by: session.email(),
            };
            spawn_local(async move {
                match posts::edit(&client, &post.id, &body).await {
                    Ok(outcome) => {
                        pending.revalidate();
                        editing.set(None);
                        notify_publish_outcome(&ui, outcome.publish_outcome(), "updated");
                    }
                    Err(e) => ui.show_error(&format!("Failed to update post: {}", e)),
                }
                action_loading.set(None);
            });
        })
    };

    let queue_size = {
        let pending = pending.clone();
        move || {
            pending
                .data
                .get()
                .map(|list| list.posts.len())
                .unwrap_or(0)
        }
    };

    view! {
        <div class="p-8">
            // Header
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-900 mb-2">"Pending Approval"</h1>
                <p class="text-gray-600">
                    {
                        let queue_size = queue_size.clone();
                        move || {
                            let n = queue_size();
                            format!("{} post{} awaiting your review", n, if n == 1 { "" } else { "s" })
                        }
                    }
                </p>
            </div>

            // Queue
            {
                let pending = pending.clone();
                move || {
                    if pending.loading.get() {
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                <CardSkeleton count=6 height="h-[600px]" />
                            </div>
                        }
                        .into_view()
                    } else {
                        let posts = pending.data.get().map(|list| list.posts).unwrap_or_default();
                        if posts.is_empty() {
                            view! { <EmptyQueue /> }.into_view()
                        } else {
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                    {posts
                                        .into_iter()
                                        .map(|post| view! {
                                            <PostCard
                                                post=post
                                                on_approve=on_approve
                                                on_reject=on_reject
                                                on_edit=on_edit
                                            />
                                        })
                                        .collect_view()}
                                </div>
                            }
                            .into_view()
                        }
                    }
                }
            }

            // Edit modal
            {move || {
                editing.get().map(|post| view! {
                    <EditPostModal
                        post=post
                        caption=edit_caption
                        saving=Signal::derive(move || action_loading.get().is_some())
                        on_close=Callback::new(move |_| editing.set(None))
                        on_save=on_save_edit
                    />
                })
            }}
        </div>
    }
}

/// Toast the result of an approve/edit, including the publish attempt.
pub(crate) fn notify_publish_outcome(ui: &crate::state::UiState, outcome: PublishOutcome, verb: &str) {
    match outcome {
        PublishOutcome::PublishedNow => {
            ui.show_success(&format!("Post {} and published successfully!", verb));
        }
        PublishOutcome::Scheduled => {
            ui.show_success(&format!(
                "Post {} successfully! It will be published at the scheduled time.",
                verb
            ));
        }
        PublishOutcome::FailedWillRetry(error) => {
            // The post stays approved; only the publish attempt failed
            ui.show_error(&format!(
                "Post {} but publishing failed: {}. It will be retried automatically.",
                verb, error
            ));
        }
    }
}

fn prompt_reason() -> Option<String> {
    web_sys::window()?
        .prompt_with_message("Enter rejection reason (optional):")
        .ok()
        .flatten()
}

#[component]
fn EmptyQueue() -> impl IntoView {
    view! {
        <div class="card text-center py-16">
            <div class="text-6xl mb-4">"✅"</div>
            <h2 class="text-2xl font-semibold text-gray-900 mb-2">"All Caught Up!"</h2>
            <p class="text-gray-600 mb-6">"No posts pending approval"</p>
            <A href="/" class="btn-primary">"Back to Dashboard"</A>
        </div>
    }
}
