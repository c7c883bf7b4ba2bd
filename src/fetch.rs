//! Polling subscriptions
//!
//! Cache-and-revalidate data fetching: each subscription refetches on a
//! fixed interval and on window focus, keeps the last successful payload
//! across failures, deduplicates in-flight requests, and discards stale
//! responses after teardown or a reload. The timer and focus listener are
//! cancelled explicitly when the owning component goes away.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::*;

use crate::api::ApiError;

/// Pending posts drive the review queue; poll them aggressively.
pub const PENDING_POSTS_INTERVAL_MS: u32 = 10_000;
/// General post lists.
pub const POSTS_INTERVAL_MS: u32 = 30_000;
/// Aggregate statistics and system status.
pub const STATISTICS_INTERVAL_MS: u32 = 60_000;
/// Trend snapshots change at most daily.
pub const TRENDS_INTERVAL_MS: u32 = 300_000;

/// Bookkeeping for one subscription: at most one request in flight, and
/// a generation counter so a response that outlives its subscription (or
/// a reload) is ignored instead of clobbering newer state.
pub struct PollCore {
    generation: Cell<u64>,
    in_flight: Cell<bool>,
}

impl PollCore {
    pub fn new() -> Self {
        Self {
            generation: Cell::new(0),
            in_flight: Cell::new(false),
        }
    }

    /// Claim the in-flight slot. `None` means a request is already
    /// running and this tick is deduplicated.
    pub fn try_begin(&self) -> Option<u64> {
        if self.in_flight.get() {
            return None;
        }
        self.in_flight.set(true);
        Some(self.generation.get())
    }

    /// Release the slot. Returns whether the response may be applied;
    /// a superseded request must not touch state or the slot, which a
    /// newer request may own by now.
    pub fn finish(&self, generation: u64) -> bool {
        if generation != self.generation.get() {
            return false;
        }
        self.in_flight.set(false);
        true
    }

    /// Invalidate anything currently in flight (teardown, reload).
    pub fn supersede(&self) {
        self.generation.set(self.generation.get() + 1);
        self.in_flight.set(false);
    }
}

impl Default for PollCore {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle returned by [`use_poll`].
pub struct Poll<T: 'static> {
    /// Latest successfully fetched payload; `None` before the first
    /// response arrives.
    pub data: RwSignal<Option<T>>,
    /// True until the first response (success or failure) lands.
    pub loading: RwSignal<bool>,
    /// Error of the last attempt. A failure leaves `data` untouched.
    pub error: RwSignal<Option<ApiError>>,
    refresh: Rc<dyn Fn()>,
    reset: Rc<dyn Fn()>,
}

impl<T> Clone for Poll<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            loading: self.loading,
            error: self.error,
            refresh: Rc::clone(&self.refresh),
            reset: Rc::clone(&self.reset),
        }
    }
}

impl<T> Poll<T> {
    /// Refetch now, keeping the current payload on screen. Called after
    /// every successful mutation.
    pub fn revalidate(&self) {
        (self.refresh)();
    }

    /// Drop the cached payload and refetch, discarding any in-flight
    /// response. Used when filter parameters change the logical key.
    pub fn reload(&self) {
        (self.reset)();
    }
}

/// Subscribe to a fetcher: run it immediately, then on every `interval_ms`
/// tick and whenever the window regains focus. Failures surface on the
/// error signal; the previous payload stays in place until the next
/// successful response replaces it wholesale.
pub fn use_poll<T, F, Fut>(interval_ms: u32, fetcher: F) -> Poll<T>
where
    T: Clone + 'static,
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let data = create_rw_signal(None::<T>);
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<ApiError>);
    let core = Rc::new(PollCore::new());

    let run = {
        let core = Rc::clone(&core);
        move || {
            let Some(generation) = core.try_begin() else {
                return;
            };
            let core = Rc::clone(&core);
            let request = fetcher();
            spawn_local(async move {
                let result = request.await;
                if !core.finish(generation) {
                    return;
                }
                match result {
                    Ok(payload) => {
                        data.set(Some(payload));
                        error.set(None);
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("fetch failed: {}", e).into());
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
        }
    };

    // Initial fetch
    run();

    let interval = Interval::new(interval_ms, {
        let run = run.clone();
        move || run()
    });

    let focus_listener = window_event_listener(ev::focus, {
        let run = run.clone();
        move |_| run()
    });

    // Cancel the schedule and orphan any in-flight response on teardown
    on_cleanup({
        let core = Rc::clone(&core);
        move || {
            core.supersede();
            drop(interval);
            focus_listener.remove();
        }
    });

    let reset = {
        let core = Rc::clone(&core);
        let run = run.clone();
        move || {
            core.supersede();
            data.set(None);
            error.set(None);
            loading.set(true);
            run();
        }
    };

    Poll {
        data,
        loading,
        error,
        refresh: Rc::new(run),
        reset: Rc::new(reset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concurrent_fetches_are_deduplicated() {
        let core = PollCore::new();

        let first = core.try_begin().expect("slot should be free");
        // A second tick while the first is in flight is dropped
        assert!(core.try_begin().is_none());

        assert!(core.finish(first));
        assert!(core.try_begin().is_some());
    }

    #[test]
    fn superseded_response_is_discarded() {
        let core = PollCore::new();

        let stale = core.try_begin().unwrap();
        core.supersede();

        // The reload's own fetch may start immediately
        let fresh = core.try_begin().expect("supersede frees the slot");

        // The stale response resolves later and must not be applied, nor
        // release the slot the fresh request owns
        assert!(!core.finish(stale));
        assert!(core.try_begin().is_none());

        assert!(core.finish(fresh));
    }

    #[test]
    fn teardown_orphans_in_flight_request() {
        let core = PollCore::new();
        let generation = core.try_begin().unwrap();
        core.supersede();
        assert!(!core.finish(generation));
    }
}
