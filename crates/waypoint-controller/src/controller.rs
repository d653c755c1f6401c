use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, info, trace};
use waypoint_core::{
    Navigator, RedirectConfig, RedirectState, ResolutionState, ResolveError, Resolver, ShortCode,
};
use waypoint_countdown::{Countdown, CountdownHandle};

/// Drives a short code through resolution, countdown, and navigation.
///
/// One controller handles one redirect view. Its lifecycle:
///
/// - [`start`](Self::start) kicks off resolution; state is
///   [`RedirectState::Loading`].
/// - A failed resolution publishes a terminal [`RedirectState::Error`];
///   no timer ever starts.
/// - A successful resolution starts the countdown and publishes
///   [`RedirectState::Redirecting`] once per tick.
/// - When the countdown elapses, or the user calls
///   [`skip`](Self::skip), the navigator fires exactly once and the
///   terminal [`RedirectState::Redirected`] is published.
///
/// Calling `start` again performs a full re-entry reset: the epoch
/// counter is bumped so an in-flight resolution settles into the void,
/// any running countdown is canceled, and the state returns to
/// `Loading`. Dropping the controller performs the same teardown.
pub struct RedirectController<R, N> {
    resolver: Arc<R>,
    config: RedirectConfig,
    shared: Arc<Shared<N>>,
}

struct Shared<N> {
    state_tx: watch::Sender<RedirectState>,
    navigator: N,
    inner: Mutex<Inner>,
}

struct Inner {
    /// Bumped on every `start` and on drop. Callbacks carry the epoch
    /// they were created under and bail out on mismatch, which is what
    /// discards stale resolutions and late ticks.
    epoch: u64,
    resolution: ResolutionState,
    /// The at-most-one live countdown for this controller.
    countdown: Option<CountdownHandle>,
    navigated: bool,
}

impl<R: Resolver, N: Navigator> RedirectController<R, N> {
    /// Creates a controller in the `Loading` state. Nothing happens
    /// until [`start`](Self::start) is called.
    pub fn new(resolver: R, navigator: N, config: RedirectConfig) -> Self {
        let (state_tx, _) = watch::channel(RedirectState::Loading);
        Self {
            resolver: Arc::new(resolver),
            config,
            shared: Arc::new(Shared {
                state_tx,
                navigator,
                inner: Mutex::new(Inner {
                    epoch: 0,
                    resolution: ResolutionState::Pending,
                    countdown: None,
                    navigated: false,
                }),
            }),
        }
    }

    /// Subscribes to state changes. The receiver initially holds the
    /// current state.
    pub fn subscribe(&self) -> watch::Receiver<RedirectState> {
        self.shared.state_tx.subscribe()
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> RedirectState {
        self.shared.state_tx.borrow().clone()
    }

    /// Begins (or restarts) a run for `code`.
    ///
    /// Issues exactly one resolution request. Safe to call again with a
    /// new code: the previous run is fully torn down first. Must be
    /// called from within a tokio runtime.
    pub fn start(&self, code: ShortCode) {
        let epoch = {
            let mut inner = self.shared.inner.lock();
            inner.epoch += 1;
            inner.resolution = ResolutionState::Pending;
            inner.navigated = false;
            if let Some(handle) = inner.countdown.take() {
                handle.cancel();
            }
            inner.epoch
        };

        // send_replace so the snapshot stays correct even with no
        // subscribers attached yet.
        self.shared.state_tx.send_replace(RedirectState::Loading);
        debug!(code = %code, "starting resolution");

        let resolver = Arc::clone(&self.resolver);
        let shared = Arc::clone(&self.shared);
        let config = self.config.clone();
        tokio::spawn(async move {
            let result = resolver.resolve(&code).await;
            Shared::on_resolution_settled(&shared, epoch, &code, result, &config);
        });
    }

    /// Bypasses the remaining countdown and navigates immediately.
    ///
    /// Only meaningful while `Redirecting`: ignored during `Loading`,
    /// after an `Error`, and after navigation already happened.
    pub fn skip(&self) {
        let (epoch, url) = {
            let inner = self.shared.inner.lock();
            match &inner.resolution {
                ResolutionState::Resolved { destination_url } if !inner.navigated => {
                    (inner.epoch, destination_url.clone())
                }
                _ => {
                    trace!("skip ignored outside of redirecting state");
                    return;
                }
            }
        };
        Shared::complete(&self.shared, epoch, &url);
    }
}

impl<R, N> Drop for RedirectController<R, N> {
    fn drop(&mut self) {
        let mut inner = self.shared.inner.lock();
        inner.epoch += 1;
        if let Some(handle) = inner.countdown.take() {
            handle.cancel();
        }
    }
}

impl<N: Navigator> Shared<N> {
    fn on_resolution_settled(
        shared: &Arc<Self>,
        epoch: u64,
        code: &ShortCode,
        result: Result<String, ResolveError>,
        config: &RedirectConfig,
    ) {
        let resolution = ResolutionState::from_settled(result);

        let destination = {
            let mut inner = shared.inner.lock();
            if inner.epoch != epoch {
                trace!(code = %code, "discarding stale resolution result");
                return;
            }
            inner.resolution = resolution.clone();

            match &resolution {
                ResolutionState::Resolved { destination_url } => destination_url.clone(),
                ResolutionState::Failed { reason } => {
                    debug!(code = %code, error = %reason, "resolution failed");
                    shared.state_tx.send_replace(RedirectState::Error {
                        message: reason.user_message().to_string(),
                    });
                    return;
                }
                // from_settled never yields Pending
                ResolutionState::Pending => return,
            }
        };

        debug!(code = %code, url = %destination, "resolved; starting countdown");

        let on_tick = {
            let shared = Arc::clone(shared);
            let url = destination.clone();
            move |remaining: u32| {
                let inner = shared.inner.lock();
                if inner.epoch != epoch {
                    return;
                }
                shared.state_tx.send_replace(RedirectState::Redirecting {
                    remaining_seconds: remaining,
                    destination_url: url.clone(),
                });
            }
        };
        let on_elapsed = {
            let shared = Arc::clone(shared);
            let url = destination.clone();
            move || Self::complete(&shared, epoch, &url)
        };

        // Started outside the lock: the first tick fires synchronously
        // inside `Countdown::start` and takes the lock itself.
        let handle = Countdown::start(
            config.countdown_seconds,
            config.tick_interval,
            on_tick,
            on_elapsed,
        );

        let mut inner = shared.inner.lock();
        if inner.epoch != epoch {
            // A reset raced the countdown start; tear it down again.
            handle.cancel();
            return;
        }
        inner.countdown = Some(handle);
    }

    /// The unique terminal action, shared by natural elapse and skip.
    /// Navigates at most once per epoch.
    fn complete(shared: &Arc<Self>, epoch: u64, url: &str) {
        let mut inner = shared.inner.lock();
        if inner.epoch != epoch || inner.navigated {
            return;
        }
        if let Some(handle) = inner.countdown.take() {
            handle.cancel();
        }
        inner.navigated = true;

        info!(url = %url, "navigating to destination");
        shared.navigator.navigate(url);
        shared.state_tx.send_replace(RedirectState::Redirected {
            destination_url: url.to_string(),
        });
    }
}
