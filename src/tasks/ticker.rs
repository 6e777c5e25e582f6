//! Periodic tick sources
//!
//! A running countdown consumes ticks from a [`TickSource`]. Production code
//! uses the tokio interval-backed [`TokioTicker`]; tests may substitute a
//! manually driven source.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{interval_at, Instant};
use tracing::debug;

/// Callback invoked once per elapsed interval.
pub type TickCallback = Arc<dyn Fn() + Send + Sync>;

/// A producer of periodic ticks.
pub trait TickSource: Send + Sync {
    /// Invoke `on_tick` every `interval` until the returned handle is
    /// cancelled or dropped.
    fn schedule_periodic(&self, interval: Duration, on_tick: TickCallback) -> TickHandle;
}

/// Cancellation handle for one scheduled tick stream.
///
/// Cancelling (or dropping) the handle stops the stream. A tick already in
/// flight at that moment is discarded by the engine's epoch check, so no tick
/// is ever observed after cancellation completes.
pub struct TickHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl TickHandle {
    /// Wrap the cancellation action for one scheduled stream.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Stop the tick stream.
    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

/// Tick source backed by a spawned tokio interval task.
pub struct TokioTicker;

impl TickSource for TokioTicker {
    fn schedule_periodic(&self, interval: Duration, on_tick: TickCallback) -> TickHandle {
        let (cancel_tx, mut cancel_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            // The first tick is due one full interval from now, not immediately.
            let mut ticks = interval_at(Instant::now() + interval, interval);
            loop {
                tokio::select! {
                    _ = ticks.tick() => on_tick(),
                    _ = cancel_rx.changed() => {
                        debug!("Tick source cancelled");
                        break;
                    }
                }
            }
        });

        TickHandle::new(move || {
            let _ = cancel_tx.send(true);
            task.abort();
        })
    }
}
