//! Blink Actor: dedicated thread that paces the cursor blink.
//!
//! The thread never touches widget state. It only sends numbered
//! [`BlinkTick`]s over a bounded channel; the owner thread drains them and
//! applies them to its [`BlinkState`]. Stopping the scheduler joins the
//! thread and discards anything still queued, so no tick can be observed
//! after [`BlinkScheduler::stop`] returns.

use crate::error::{PinError, PinResult};
use crossbeam_channel::{bounded, select, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Current member of the blink cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlinkPhase {
    /// Cursor hidden. Initial phase after attach.
    #[default]
    Invisible,
    /// Cursor painted.
    Visible,
}

impl BlinkPhase {
    /// The other phase.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Invisible => Self::Visible,
            Self::Visible => Self::Invisible,
        }
    }

    /// Phase after `ticks` ticks from the initial phase.
    pub const fn after_ticks(ticks: u64) -> Self {
        if ticks % 2 == 1 {
            Self::Visible
        } else {
            Self::Invisible
        }
    }
}

/// A tick sent at every blink interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkTick {
    /// Zero-based tick number since the scheduler started.
    pub seq: u64,
    /// Time elapsed since the scheduler started.
    pub elapsed: Duration,
}

/// Owner-thread blink state.
///
/// Phase is derived from the tick number rather than flipped per delivery,
/// so a tick dropped by a slow owner does not shift the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlinkState {
    phase: BlinkPhase,
}

impl BlinkState {
    /// Current phase.
    #[inline]
    pub const fn phase(&self) -> BlinkPhase {
        self.phase
    }

    /// Whether the cursor is in its painted phase.
    #[inline]
    pub const fn is_visible(&self) -> bool {
        matches!(self.phase, BlinkPhase::Visible)
    }

    /// Back to the initial phase.
    pub fn reset(&mut self) {
        self.phase = BlinkPhase::Invisible;
    }

    /// Flip the phase once.
    pub fn toggle(&mut self) {
        self.phase = self.phase.toggled();
    }

    /// Apply a tick. Returns `true` if the phase changed.
    pub fn apply(&mut self, tick: BlinkTick) -> bool {
        let phase = BlinkPhase::after_ticks(tick.seq + 1);
        let changed = phase != self.phase;
        self.phase = phase;
        changed
    }
}

/// Periodic blink timer running on its own thread.
#[derive(Debug)]
pub struct BlinkScheduler {
    /// Handle to the blink thread.
    handle: Option<JoinHandle<()>>,
    /// Dropping this disconnects the thread's stop receiver.
    stop_tx: Option<Sender<()>>,
    /// Receiver for tick events.
    tick_rx: Receiver<BlinkTick>,
    interval: Duration,
}

impl BlinkScheduler {
    /// Start ticking every `interval`. The first tick arrives one interval
    /// after this call.
    ///
    /// # Errors
    ///
    /// Returns [`PinError::ThreadSpawn`] if the OS refuses the thread.
    pub fn start(interval: Duration) -> PinResult<Self> {
        let (stop_tx, stop_rx) = bounded::<()>(0);
        // Small buffer - ticks should not queue up behind a busy owner
        let (tick_tx, tick_rx) = bounded(2);

        let handle = thread::Builder::new()
            .name("pinpad-blink".to_string())
            .spawn(move || Self::run_loop(&tick_tx, &stop_rx, interval))
            .map_err(PinError::ThreadSpawn)?;

        tracing::debug!(?interval, "blink scheduler started");
        Ok(Self {
            handle: Some(handle),
            stop_tx: Some(stop_tx),
            tick_rx,
            interval,
        })
    }

    /// Get a reference to the tick receiver, for `select!`-driven loops.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<BlinkTick> {
        &self.tick_rx
    }

    /// Blink interval.
    #[inline]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the thread is still running.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Take every tick that is ready, without blocking.
    pub fn pending(&self) -> impl Iterator<Item = BlinkTick> + '_ {
        self.tick_rx.try_iter()
    }

    /// Stop the thread and wait for it to exit.
    ///
    /// Ticks queued before the call are discarded. Idempotent.
    pub fn stop(&mut self) {
        drop(self.stop_tx.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("blink thread panicked");
            }
            let discarded = self.tick_rx.try_iter().count();
            tracing::debug!(discarded, "blink scheduler stopped");
        }
    }

    /// Main blink loop.
    fn run_loop(tick_tx: &Sender<BlinkTick>, stop_rx: &Receiver<()>, interval: Duration) {
        let start = Instant::now();
        let mut seq = 0u64;
        let mut next_tick = start + interval;

        loop {
            let wait = next_tick.saturating_duration_since(Instant::now());
            select! {
                recv(stop_rx) -> _ => break,
                default(wait) => {
                    let now = Instant::now();
                    let tick = BlinkTick {
                        seq,
                        elapsed: now - start,
                    };
                    // Non-blocking send - if the owner is behind, skip this tick
                    let _ = tick_tx.try_send(tick);
                    tracing::trace!(seq, "blink tick");

                    seq += 1;
                    next_tick += interval;

                    // Handle case where we're behind (catch up without queuing)
                    if next_tick < now {
                        next_tick = now + interval;
                    }
                }
            }
        }
    }
}

impl Drop for BlinkScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::TryRecvError;

    fn tick(seq: u64) -> BlinkTick {
        BlinkTick {
            seq,
            elapsed: Duration::ZERO,
        }
    }

    #[test]
    fn test_phase_parity() {
        for n in 0..10u64 {
            let expected = if n % 2 == 1 {
                BlinkPhase::Visible
            } else {
                BlinkPhase::Invisible
            };
            assert_eq!(BlinkPhase::after_ticks(n), expected);

            let mut state = BlinkState::default();
            for seq in 0..n {
                state.apply(tick(seq));
            }
            assert_eq!(state.phase(), expected);
            assert_eq!(state.is_visible(), n % 2 == 1);
        }
    }

    #[test]
    fn test_state_starts_invisible() {
        let mut state = BlinkState::default();
        assert!(!state.is_visible());
        state.toggle();
        assert!(state.is_visible());
        state.reset();
        assert_eq!(state.phase(), BlinkPhase::Invisible);
    }

    #[test]
    fn test_dropped_tick_keeps_cycle() {
        let mut state = BlinkState::default();
        assert!(state.apply(tick(0)));
        // seq 1 never arrived
        assert!(!state.apply(tick(2)));
        assert!(state.is_visible());
    }

    #[test]
    fn test_scheduler_ticks() {
        let mut scheduler = BlinkScheduler::start(Duration::from_millis(10)).unwrap();
        assert!(scheduler.is_running());

        let first = scheduler.receiver().recv_timeout(Duration::from_millis(500));
        assert_eq!(first.map(|t| t.seq), Ok(0));

        let second = scheduler.receiver().recv_timeout(Duration::from_millis(500));
        assert!(second.is_ok());

        scheduler.stop();
        assert!(!scheduler.is_running());
    }

    #[test]
    fn test_no_tick_after_stop() {
        let mut scheduler = BlinkScheduler::start(Duration::from_millis(1)).unwrap();
        thread::sleep(Duration::from_millis(20));
        scheduler.stop();

        // Thread is joined and its sender dropped: the channel is empty and
        // can never be refilled.
        assert_eq!(
            scheduler.receiver().try_recv(),
            Err(TryRecvError::Disconnected)
        );
        thread::sleep(Duration::from_millis(20));
        assert_eq!(scheduler.pending().count(), 0);
    }

    #[test]
    fn test_stop_is_prompt_and_idempotent() {
        let mut scheduler = BlinkScheduler::start(Duration::from_secs(3600)).unwrap();
        let started = Instant::now();
        scheduler.stop();
        scheduler.stop();
        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(scheduler.interval(), Duration::from_secs(3600));
    }
}
