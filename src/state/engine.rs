//! Countdown engine
//!
//! The engine owns the countdown state machine behind a lock, publishes a
//! fresh [`TimerSnapshot`] over a watch channel after every mutation, and
//! keeps at most one periodic tick source alive at a time.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::countdown::{Begin, CountdownState, TickOutcome, DEFAULT_TICK_INTERVAL_MILLIS};
use super::snapshot::TimerSnapshot;
use crate::error::TimerError;
use crate::tasks::{TickCallback, TickHandle, TickSource, TokioTicker};

/// Engine driving one countdown and publishing its state.
pub struct CountdownEngine {
    /// Countdown bookkeeping, serialized behind one lock
    state: Mutex<CountdownState>,
    /// Channel for snapshot updates
    snapshot_tx: watch::Sender<TimerSnapshot>,
    /// Keep one receiver alive to prevent channel closure
    _snapshot_rx: watch::Receiver<TimerSnapshot>,
    /// Producer of periodic ticks
    tick_source: Box<dyn TickSource>,
    /// Handle of the active tick stream, if any. At most one at a time.
    ticker: Mutex<Option<TickHandle>>,
    /// Back-reference handed to tick callbacks, so a scheduled stream never
    /// keeps a discarded engine alive.
    weak_self: Weak<CountdownEngine>,
}

impl CountdownEngine {
    /// Create an engine backed by the tokio interval ticker.
    pub fn new() -> Arc<Self> {
        Self::with_tick_source(Box::new(TokioTicker))
    }

    /// Create an engine with a custom tick source (e.g. a manual test clock).
    pub fn with_tick_source(tick_source: Box<dyn TickSource>) -> Arc<Self> {
        let (snapshot_tx, snapshot_rx) = watch::channel(TimerSnapshot::default());

        Arc::new_cyclic(|weak_self| Self {
            state: Mutex::new(CountdownState::new()),
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
            tick_source,
            ticker: Mutex::new(None),
            weak_self: weak_self.clone(),
        })
    }

    /// Select a new countdown duration.
    ///
    /// Allowed whenever the countdown is not running; the remaining time is
    /// reset to the full duration.
    pub fn select_duration(&self, millis: i64) -> Result<TimerSnapshot, TimerError> {
        if millis < 0 {
            return Err(TimerError::InvalidDuration(format!(
                "duration must be non-negative, got {millis}ms"
            )));
        }

        let snapshot = {
            let mut state = self.lock_state();
            state.select_duration(millis as u64)?;
            TimerSnapshot::of(&state)
        };

        info!("Duration selected: {}ms ({})", millis, snapshot.remaining_text);
        self.publish(snapshot.clone());
        Ok(snapshot)
    }

    /// Start (or resume) the countdown at the default one-second cadence.
    ///
    /// Counting proceeds from the current remaining time: the full duration
    /// after a selection, the pause point after a pause.
    pub fn start(&self) -> Result<TimerSnapshot, TimerError> {
        self.start_with_interval(DEFAULT_TICK_INTERVAL_MILLIS)
    }

    /// Start (or resume) the countdown with an explicit tick interval.
    pub fn start_with_interval(&self, interval_millis: u64) -> Result<TimerSnapshot, TimerError> {
        let (snapshot, begin, epoch) = {
            let mut state = self.lock_state();
            let begin = state.begin(interval_millis)?;
            (TimerSnapshot::of(&state), begin, state.tick_epoch())
        };

        // Starting always replaces the previous tick stream, so two
        // interleaved streams can never decrement the same countdown.
        self.clear_ticker();

        match begin {
            Begin::Ticking => {
                let weak = self.weak_self.clone();
                let on_tick: TickCallback = Arc::new(move || {
                    if let Some(engine) = weak.upgrade() {
                        engine.handle_tick(epoch);
                    }
                });
                let handle = self
                    .tick_source
                    .schedule_periodic(Duration::from_millis(interval_millis), on_tick);
                *self.lock_ticker() = Some(handle);
                info!(
                    "Countdown started: {} remaining, ticking every {}ms",
                    snapshot.remaining_text, interval_millis
                );
            }
            Begin::AlreadyElapsed => {
                info!("Countdown started with nothing to count; completing immediately");
            }
        }

        self.publish(snapshot.clone());
        Ok(snapshot)
    }

    /// Pause the countdown, retaining the remaining time for a later resume.
    ///
    /// A no-op outside the running phase.
    pub fn pause(&self) -> Result<TimerSnapshot, TimerError> {
        let (snapshot, was_running) = {
            let mut state = self.lock_state();
            let was_running = state.pause();
            (TimerSnapshot::of(&state), was_running)
        };

        if was_running {
            self.clear_ticker();
            info!("Countdown paused at {}", snapshot.remaining_text);
            self.publish(snapshot.clone());
        }
        Ok(snapshot)
    }

    /// Current published snapshot.
    pub fn snapshot(&self) -> TimerSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Subscribe to snapshot updates.
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Cancel any active tick stream. Safe to call repeatedly; also runs on
    /// drop so a discarded engine never receives dangling ticks.
    ///
    /// The epoch bump under the state lock guarantees that a tick racing the
    /// cancellation is discarded rather than applied afterwards.
    pub fn shutdown(&self) {
        self.lock_state().invalidate_tick_stream();
        self.clear_ticker();
    }

    /// Apply one tick delivered by the source installed at `epoch`.
    fn handle_tick(&self, epoch: u64) {
        let (outcome, snapshot) = {
            let mut state = self.lock_state();
            let outcome = state.apply_tick(epoch);
            (outcome, TimerSnapshot::of(&state))
        };

        match outcome {
            TickOutcome::Stale => return,
            TickOutcome::Continue => {
                debug!(
                    "Tick: {} remaining ({:.1}% complete)",
                    snapshot.remaining_text,
                    snapshot.completion_fraction * 100.0
                );
            }
            TickOutcome::Completed => {
                self.clear_ticker();
                info!("Countdown completed");
            }
        }

        self.publish(snapshot);
    }

    fn clear_ticker(&self) {
        if let Some(handle) = self.lock_ticker().take() {
            handle.cancel();
        }
    }

    fn publish(&self, snapshot: TimerSnapshot) {
        if let Err(e) = self.snapshot_tx.send(snapshot) {
            warn!("Failed to send snapshot update: {}", e);
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, CountdownState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_ticker(&self) -> MutexGuard<'_, Option<TickHandle>> {
        self.ticker.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for CountdownEngine {
    fn drop(&mut self) {
        self.shutdown();
    }
}
