use std::num::NonZeroU32;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::trace;

/// A one-shot countdown timer.
///
/// Pure timing: this component has no failure modes and defines no
/// error type.
pub struct Countdown;

impl Countdown {
    /// Starts a countdown from `initial`.
    ///
    /// `on_tick` is invoked synchronously with `initial` before this
    /// function returns, then once per `tick_interval` with each
    /// decremented value down to 0. Tick values are strictly sequential
    /// and monotonically decreasing. After the tick for 0, `on_elapsed`
    /// fires exactly once and the timer stops.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<T, E>(
        initial: NonZeroU32,
        tick_interval: Duration,
        on_tick: T,
        on_elapsed: E,
    ) -> CountdownHandle
    where
        T: Fn(u32) + Send + 'static,
        E: FnOnce() + Send + 'static,
    {
        let (cancel_tx, mut cancel_rx) = watch::channel(false);

        on_tick(initial.get());

        let task = tokio::spawn(async move {
            let mut remaining = initial.get();
            while remaining > 0 {
                tokio::select! {
                    // Check cancellation first so a cancel requested
                    // before the pending tick always wins the race.
                    biased;
                    _ = cancel_rx.changed() => {
                        trace!(remaining, "countdown canceled");
                        return;
                    }
                    _ = time::sleep(tick_interval) => {
                        remaining -= 1;
                        on_tick(remaining);
                    }
                }
            }
            trace!("countdown elapsed");
            on_elapsed();
        });

        CountdownHandle { cancel_tx, task }
    }
}

/// Handle to a running [`Countdown`].
///
/// Dropping the handle also cancels: the timer task observes the closed
/// channel before its next tick and stops without firing `on_elapsed`.
pub struct CountdownHandle {
    cancel_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl CountdownHandle {
    /// Stops all future ticks and guarantees `on_elapsed` will not fire.
    ///
    /// Idempotent: canceling an already-canceled or already-elapsed
    /// countdown is a no-op.
    pub fn cancel(&self) {
        // Send fails only when the task has already exited, which is
        // exactly the no-op case.
        let _ = self.cancel_tx.send(true);
    }

    /// Whether the timer task has stopped, by elapse or cancellation.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
