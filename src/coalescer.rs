//! Move-event coalescing: merge per-side move notifications arriving within a
//! short quiet window into one classified event.
//!
//! A cross-tree drag reaches us as two independent notifications, one per
//! side, arriving asynchronously. The coalescer buffers them behind a
//! debounce timer and, once the buffer goes quiet, emits exactly one
//! [`CoalescedMove`]: left-only, right-only, or both.
//!
//! The coalescer holds at most one pending event per side ("latest wins") and
//! never invokes anything itself: the host pumps [`poll`](MoveCoalescer::poll)
//! from its event loop, passing the current instant. A burst of N
//! notifications between idle and flush collapses to one classified event.

use crate::events::{CoalescedMove, MoveEvent, Side};
use crate::timer::DebounceTimer;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Default quiet interval after the last notification before a buffered burst
/// is flushed. A tunable, not a contract.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(10);

/// Buffers per-side move notifications and classifies each burst into exactly
/// one combined event.
///
/// State machine: **idle** (both slots empty, timer disarmed) → **buffering**
/// (at least one slot filled, timer armed) → flush on `poll` once the timer
/// deadline passes → idle again.
#[derive(Debug)]
pub struct MoveCoalescer<L, R> {
    pending_left: Option<MoveEvent<L>>,
    pending_right: Option<MoveEvent<R>>,
    timer: DebounceTimer,
    window: Duration,
}

impl<L, R> MoveCoalescer<L, R> {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_DEBOUNCE_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            pending_left: None,
            pending_right: None,
            timer: DebounceTimer::new(),
            window,
        }
    }

    /// Record a left-side move, overwriting any pending left event (only the
    /// latest move per side before a flush matters), and re-arm the debounce
    /// timer. Re-arming extends the quiet window rather than triggering a
    /// second flush.
    pub fn notify_left(&mut self, event: MoveEvent<L>, now: Instant) {
        trace!(side = %Side::Left, "buffering move notification");
        self.pending_left = Some(event);
        self.timer.arm(now, self.window);
    }

    /// Record a right-side move. See [`notify_left`](Self::notify_left).
    pub fn notify_right(&mut self, event: MoveEvent<R>, now: Instant) {
        trace!(side = %Side::Right, "buffering move notification");
        self.pending_right = Some(event);
        self.timer.arm(now, self.window);
    }

    /// Flush the buffered burst if the quiet window has elapsed.
    ///
    /// Both slots are drained before the classified event is handed out, so a
    /// notification arriving while the caller handles the result starts a
    /// fresh buffering cycle and is never merged into the one being flushed.
    /// A timer fire with an empty buffer is silently ignored.
    pub fn poll(&mut self, now: Instant) -> Option<CoalescedMove<L, R>> {
        if !self.timer.fire(now) {
            return None;
        }
        let flushed = match (self.pending_left.take(), self.pending_right.take()) {
            (Some(left), Some(right)) => CoalescedMove::Both(left, right),
            (Some(left), None) => CoalescedMove::Left(left),
            (None, Some(right)) => CoalescedMove::Right(right),
            // Spurious fire.
            (None, None) => return None,
        };
        debug!(kind = ?flushed.kind(), "burst flushed");
        Some(flushed)
    }

    /// True while at least one side has a buffered notification.
    pub fn has_pending(&self) -> bool {
        self.pending_left.is_some() || self.pending_right.is_some()
    }

    /// When the host should next call [`poll`](Self::poll), if buffering.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Discard any buffered notifications and disarm the timer.
    pub fn clear(&mut self) {
        self.pending_left = None;
        self.pending_right = None;
        self.timer.disarm();
    }
}

impl<L, R> Default for MoveCoalescer<L, R> {
    fn default() -> Self {
        Self::new()
    }
}
