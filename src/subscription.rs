//! Polling data subscription primitive
//!
//! Gives consumers a uniform way to bind to an asynchronous, periodically
//! refreshed data source without re-implementing fetch, error and interval
//! bookkeeping at every call site. Each [`Subscription`] owns a single
//! logical timeline: an immediate fetch on activation, an explicit
//! cancellable ticker for automatic refreshes, and a manual out-of-band
//! [`refresh`](Subscription::refresh).
//!
//! State flows through a `tokio::sync::watch` channel, so writes apply
//! atomically in completion order. A manual refresh issued while an
//! automatic tick is in flight yields two concurrent fetches; whichever
//! settles last is authoritative.

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::constants;
use crate::error::AppError;

/// Type-erased fetch target.
///
/// Kept behind a swap slot that is read at each fetch, so a caller
/// supplying a fresh closure via [`Subscription::set_fetch_fn`] is always
/// honored by the next tick — the subscription never keeps polling an
/// outdated target.
pub type FetchFn<T> = Arc<dyn Fn() -> BoxFuture<'static, Result<T, AppError>> + Send + Sync>;

/// The state tuple exposed to consumers.
///
/// `error` and `data` are not mutually exclusive: a failed refresh keeps
/// the previous `data` (stale-on-error) while carrying the error message.
/// `last_updated` only moves on success.
#[derive(Debug, Clone)]
pub struct SubscriptionState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl<T> SubscriptionState<T> {
    fn initial() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
            last_updated: None,
        }
    }

    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// True once no activation- or refresh-triggered fetch is outstanding.
    pub fn is_settled(&self) -> bool {
        !self.loading
    }

    /// A panel is stale when it still shows data from before a failed
    /// refresh.
    pub fn is_stale(&self) -> bool {
        self.data.is_some() && self.error.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct SubscriptionOptions {
    /// Fixed period between automatic refreshes, measured from the end of
    /// the previous scheduling step. `None` disables automatic refresh.
    pub refresh_interval: Option<Duration>,
    /// Whether fetching starts immediately. A disabled subscription sits
    /// idle until [`Subscription::set_enabled`] flips it on.
    pub enabled: bool,
}

impl Default for SubscriptionOptions {
    fn default() -> Self {
        Self {
            refresh_interval: Some(Duration::from_millis(constants::intervals::LIVE_POLL_MS)),
            enabled: true,
        }
    }
}

impl SubscriptionOptions {
    /// Options for a one-shot binding: immediate fetch, no ticker.
    pub fn once() -> Self {
        Self {
            refresh_interval: None,
            enabled: true,
        }
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            refresh_interval: Some(interval),
            enabled: true,
        }
    }
}

struct Shared<T> {
    state_tx: watch::Sender<SubscriptionState<T>>,
    fetch_fn: RwLock<FetchFn<T>>,
    enabled: AtomicBool,
    closed: AtomicBool,
}

impl<T> Shared<T> {
    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn current_fetch_fn(&self) -> FetchFn<T> {
        self.fetch_fn
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// A handle to a polling data binding. Dropping it (or calling
/// [`shutdown`](Subscription::shutdown)) cancels the ticker immediately;
/// fetches already in flight may finish but their results are discarded.
pub struct Subscription<T> {
    shared: Arc<Shared<T>>,
    ticker: Option<JoinHandle<()>>,
}

impl<T: Clone + Send + Sync + 'static> Subscription<T> {
    /// Activates a subscription over `fetch`. When enabled, an immediate
    /// fetch is issued; when a refresh interval is set, a ticker task
    /// fetches on the fixed period for as long as the handle lives.
    pub fn spawn<F, Fut>(fetch: F, options: SubscriptionOptions) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, AppError>> + Send + 'static,
    {
        Self::spawn_boxed(boxed_fetch(fetch), options)
    }

    /// [`spawn`](Subscription::spawn) for an already type-erased target.
    pub fn spawn_boxed(fetch_fn: FetchFn<T>, options: SubscriptionOptions) -> Self {
        let (state_tx, _) = watch::channel(SubscriptionState::initial());
        let shared = Arc::new(Shared {
            state_tx,
            fetch_fn: RwLock::new(fetch_fn),
            enabled: AtomicBool::new(options.enabled),
            closed: AtomicBool::new(false),
        });

        if options.enabled {
            tokio::spawn(run_fetch(Arc::clone(&shared)));
        }

        let ticker = options
            .refresh_interval
            .filter(|interval| !interval.is_zero())
            .map(|interval| {
                let shared = Arc::clone(&shared);
                tokio::spawn(async move {
                    loop {
                        tokio::time::sleep(interval).await;
                        if shared.is_closed() {
                            break;
                        }
                        if shared.enabled.load(Ordering::SeqCst) {
                            // Fetches are spawned so a slow one never
                            // delays the next tick; overlapping results
                            // apply in completion order.
                            tokio::spawn(run_fetch(Arc::clone(&shared)));
                        }
                    }
                })
            });

        Self { shared, ticker }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SubscriptionState<T> {
        self.shared.state_tx.borrow().clone()
    }

    /// A receiver that observes every state change. Useful for awaiting
    /// settles without polling.
    pub fn watch(&self) -> watch::Receiver<SubscriptionState<T>> {
        self.shared.state_tx.subscribe()
    }

    /// Manual, immediate, out-of-band refresh. `loading` is raised
    /// synchronously before the fetch is issued; the fetch itself follows
    /// the same path as automatic refreshes.
    pub fn refresh(&self) {
        if self.shared.is_closed() {
            return;
        }
        self.shared.state_tx.send_modify(|state| state.loading = true);
        tokio::spawn(run_fetch(Arc::clone(&self.shared)));
    }

    /// Flips automatic fetching on or off. A disabled→enabled transition
    /// triggers an immediate fetch, mirroring activation. While disabled
    /// the ticker idles without fetching; only teardown cancels it.
    pub fn set_enabled(&self, enabled: bool) {
        let was_enabled = self.shared.enabled.swap(enabled, Ordering::SeqCst);
        if enabled && !was_enabled && !self.shared.is_closed() {
            self.shared.state_tx.send_modify(|state| state.loading = true);
            tokio::spawn(run_fetch(Arc::clone(&self.shared)));
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.shared.enabled.load(Ordering::SeqCst)
    }

    /// Swaps the fetch target. Takes effect from the next tick or
    /// [`refresh`](Subscription::refresh); the fetch already in flight (if
    /// any) still belongs to the old target.
    pub fn set_fetch_fn<F, Fut>(&self, fetch: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, AppError>> + Send + 'static,
    {
        self.set_fetch_fn_boxed(boxed_fetch(fetch));
    }

    pub fn set_fetch_fn_boxed(&self, fetch_fn: FetchFn<T>) {
        *self
            .shared
            .fetch_fn
            .write()
            .unwrap_or_else(PoisonError::into_inner) = fetch_fn;
    }

    /// Tears the subscription down: no further ticks, and results of
    /// in-flight fetches are discarded. Idempotent; also runs on drop.
    pub fn shutdown(&self) {
        if self.shared.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(ticker) = &self.ticker {
            ticker.abort();
        }
        debug!("Subscription shut down");
    }

    pub fn is_closed(&self) -> bool {
        self.shared.is_closed()
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.shared.closed.store(true, Ordering::SeqCst);
        if let Some(ticker) = &self.ticker {
            ticker.abort();
        }
    }
}

fn boxed_fetch<T, F, Fut>(fetch: F) -> FetchFn<T>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, AppError>> + Send + 'static,
{
    Arc::new(move || -> BoxFuture<'static, Result<T, AppError>> { Box::pin(fetch()) })
}

/// One fetch cycle: read the current target, await it, apply the outcome
/// unless the subscription was torn down in the meantime.
async fn run_fetch<T: Clone + Send + Sync + 'static>(shared: Arc<Shared<T>>) {
    if shared.is_closed() {
        return;
    }

    let fetch = shared.current_fetch_fn();
    let result = fetch().await;

    if shared.is_closed() {
        debug!("Discarding fetch result: subscription torn down while in flight");
        return;
    }

    shared.state_tx.send_modify(|state| match result {
        Ok(data) => {
            state.data = Some(data);
            state.error = None;
            state.last_updated = Some(Utc::now());
            state.loading = false;
        }
        Err(e) => {
            // Stale-on-error: data and last_updated stay untouched
            warn!("Subscription fetch failed: {e}");
            state.error = Some(e.user_message());
            state.loading = false;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    /// Lets spawned fetch tasks run to completion under a paused clock.
    async fn drain_tasks() {
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }
    }

    async fn await_settle<T: Clone>(rx: &mut watch::Receiver<SubscriptionState<T>>) {
        while rx.borrow().loading {
            rx.changed().await.expect("subscription state sender dropped");
        }
    }

    fn counted_fetch(
        counter: Arc<AtomicUsize>,
    ) -> impl Fn() -> BoxFuture<'static, Result<String, AppError>> + Send + Sync + 'static {
        move || {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            Box::pin(async move { Ok(format!("fetch-{n}")) })
        }
    }

    #[tokio::test]
    async fn test_initial_fetch_settles_state() {
        let counter = Arc::new(AtomicUsize::new(0));
        let subscription =
            Subscription::spawn(counted_fetch(Arc::clone(&counter)), SubscriptionOptions::once());

        assert!(subscription.state().loading);

        let mut rx = subscription.watch();
        await_settle(&mut rx).await;

        let state = subscription.state();
        assert_eq!(state.data.as_deref(), Some("fetch-1"));
        assert_eq!(state.error, None);
        assert!(state.last_updated.is_some());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_refresh_raises_loading_synchronously() {
        let subscription = Subscription::spawn(
            || async { Ok::<_, AppError>("data".to_string()) },
            SubscriptionOptions::once(),
        );
        let mut rx = subscription.watch();
        await_settle(&mut rx).await;

        subscription.refresh();
        assert!(subscription.state().loading);

        await_settle(&mut rx).await;
        assert!(subscription.state().is_settled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_fetches_on_fixed_period() {
        let counter = Arc::new(AtomicUsize::new(0));
        let _subscription = Subscription::spawn(
            counted_fetch(Arc::clone(&counter)),
            SubscriptionOptions::with_interval(Duration::from_secs(30)),
        );

        drain_tasks().await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        tokio::time::advance(Duration::from_secs(31)).await;
        drain_tasks().await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);

        tokio::time::advance(Duration::from_secs(30)).await;
        drain_tasks().await;
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_subscription_does_not_fetch() {
        let counter = Arc::new(AtomicUsize::new(0));
        let subscription = Subscription::spawn(
            counted_fetch(Arc::clone(&counter)),
            SubscriptionOptions {
                refresh_interval: Some(Duration::from_secs(30)),
                enabled: false,
            },
        );

        drain_tasks().await;
        tokio::time::advance(Duration::from_secs(61)).await;
        drain_tasks().await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        // Enabling triggers an immediate fetch and resumes ticking
        subscription.set_enabled(true);
        drain_tasks().await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        tokio::time::advance(Duration::from_secs(31)).await;
        drain_tasks().await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabling_stops_ticks_without_tearing_down() {
        let counter = Arc::new(AtomicUsize::new(0));
        let subscription = Subscription::spawn(
            counted_fetch(Arc::clone(&counter)),
            SubscriptionOptions::with_interval(Duration::from_secs(30)),
        );
        drain_tasks().await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        subscription.set_enabled(false);
        tokio::time::advance(Duration::from_secs(120)).await;
        drain_tasks().await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(!subscription.is_closed());
    }

    #[tokio::test]
    async fn test_set_fetch_fn_swaps_target_for_next_fetch() {
        let subscription = Subscription::spawn(
            || async { Ok::<_, AppError>("old".to_string()) },
            SubscriptionOptions::once(),
        );
        let mut rx = subscription.watch();
        await_settle(&mut rx).await;
        assert_eq!(subscription.state().data.as_deref(), Some("old"));

        subscription.set_fetch_fn(|| async { Ok::<_, AppError>("new".to_string()) });
        subscription.refresh();
        await_settle(&mut rx).await;

        assert_eq!(subscription.state().data.as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_refresh_after_shutdown_is_a_no_op() {
        let counter = Arc::new(AtomicUsize::new(0));
        let subscription =
            Subscription::spawn(counted_fetch(Arc::clone(&counter)), SubscriptionOptions::once());
        let mut rx = subscription.watch();
        await_settle(&mut rx).await;

        subscription.shutdown();
        subscription.refresh();
        drain_tasks().await;

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        // loading was not raised by the ignored refresh
        assert!(subscription.state().is_settled());
    }

    #[tokio::test]
    async fn test_state_helpers() {
        let state = SubscriptionState::<String>::initial();
        assert!(!state.has_data());
        assert!(!state.is_settled());
        assert!(!state.is_stale());

        let stale = SubscriptionState {
            data: Some("old".to_string()),
            loading: false,
            error: Some("Request timed out".to_string()),
            last_updated: Some(Utc::now()),
        };
        assert!(stale.is_stale());
    }
}
