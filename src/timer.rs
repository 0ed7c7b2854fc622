//! Cancellable one-shot debounce timer.
//!
//! No scheduler or background thread is involved: the host passes the
//! current instant into [`arm`](DebounceTimer::arm) and polls
//! [`fire`](DebounceTimer::fire) from its own event loop. Handles are
//! generation-numbered so a cancel against a superseded arm is a no-op.

use std::time::{Duration, Instant};

/// Handle for a specific arming of a [`DebounceTimer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerHandle(u64);

/// Single-slot cancellable timer. At most one deadline is outstanding at any
/// time; arming again always cancels the previous deadline first.
#[derive(Debug, Default)]
pub struct DebounceTimer {
    deadline: Option<Instant>,
    generation: u64,
}

impl DebounceTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer to fire `after` the given instant, cancelling any
    /// previously armed deadline. Returns a handle tied to this arming.
    pub fn arm(&mut self, now: Instant, after: Duration) -> TimerHandle {
        self.generation += 1;
        self.deadline = Some(now + after);
        TimerHandle(self.generation)
    }

    /// Cancel the arming identified by `handle`. Idempotent; a handle from a
    /// superseded arming is ignored.
    pub fn cancel(&mut self, handle: TimerHandle) {
        if handle.0 == self.generation {
            self.deadline = None;
        }
    }

    /// Drop any armed deadline.
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// True iff the timer is armed and `now` has reached the deadline.
    /// Firing disarms the timer.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if armed. A host wake hint.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fire_after_deadline() {
        let mut timer = DebounceTimer::new();
        let start = Instant::now();
        timer.arm(start, ms(10));

        assert!(!timer.fire(start + ms(5)));
        assert!(timer.is_armed());
        assert!(timer.fire(start + ms(10)));
        assert!(!timer.is_armed());
        // Already fired; does not fire twice.
        assert!(!timer.fire(start + ms(20)));
    }

    #[test]
    fn test_rearm_extends_deadline() {
        let mut timer = DebounceTimer::new();
        let start = Instant::now();
        timer.arm(start, ms(10));
        timer.arm(start + ms(5), ms(10));

        assert!(!timer.fire(start + ms(12)));
        assert!(timer.fire(start + ms(15)));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut timer = DebounceTimer::new();
        let start = Instant::now();
        let handle = timer.arm(start, ms(10));

        timer.cancel(handle);
        timer.cancel(handle);
        assert!(!timer.is_armed());
        assert!(!timer.fire(start + ms(20)));
    }

    #[test]
    fn test_stale_cancel_ignored() {
        let mut timer = DebounceTimer::new();
        let start = Instant::now();
        let stale = timer.arm(start, ms(10));
        timer.arm(start + ms(2), ms(10));

        // Cancelling the superseded arming must not disturb the live one.
        timer.cancel(stale);
        assert!(timer.is_armed());
        assert!(timer.fire(start + ms(12)));
    }

    #[test]
    fn test_deadline_reported() {
        let mut timer = DebounceTimer::new();
        assert_eq!(timer.deadline(), None);
        let start = Instant::now();
        timer.arm(start, ms(10));
        assert_eq!(timer.deadline(), Some(start + ms(10)));
        timer.disarm();
        assert_eq!(timer.deadline(), None);
    }
}
