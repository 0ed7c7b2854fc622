//! Dual-tree controller: owns the live forests and wires widget notifications
//! through the coalescer into the history stack.
//!
//! Inbound, the controller forwards the widget's per-side move notifications
//! verbatim into the coalescer and applies visibility toggles directly.
//! Outbound, a flushed burst becomes exactly one history push followed by the
//! live-state update; `undo`/`redo` bypass the coalescer entirely. Any
//! notification-to-redraw wiring is the host's concern: it reads
//! [`left`](DualTree::left)/[`right`](DualTree::right) after pumping
//! [`tick`](DualTree::tick).

use crate::coalescer::MoveCoalescer;
use crate::error::Result;
use crate::events::{CoalescedMove, MoveEvent, MoveKind, VisibilityToggle};
use crate::history::HistoryStack;
use crate::snapshot::TreePair;
use crate::tree::Forest;
use std::time::{Duration, Instant};
use tracing::debug;

/// Authoritative state for a pair of side-by-side tree editors.
#[derive(Debug)]
pub struct DualTree<L, R> {
    left: Forest<L>,
    right: Forest<R>,
    coalescer: MoveCoalescer<L, R>,
    history: HistoryStack<L, R>,
}

impl<L: Clone, R: Clone> DualTree<L, R> {
    pub fn new(left: Forest<L>, right: Forest<R>) -> Self {
        Self {
            left,
            right,
            coalescer: MoveCoalescer::new(),
            history: HistoryStack::new(),
        }
    }

    /// Override the debounce window. Call at construction time, before any
    /// notifications have been buffered.
    pub fn with_debounce_window(mut self, window: Duration) -> Self {
        self.coalescer = MoveCoalescer::with_window(window);
        self
    }

    /// The live left forest, as the widget should render it.
    pub fn left(&self) -> &Forest<L> {
        &self.left
    }

    /// The live right forest.
    pub fn right(&self) -> &Forest<R> {
        &self.right
    }

    /// Widget callback: a drag completed on the left side. Buffered; the live
    /// forest does not change until the burst flushes in [`tick`](Self::tick),
    /// so the pre-move state is still live when the snapshot is taken.
    pub fn on_left_move(&mut self, event: MoveEvent<L>, now: Instant) {
        self.coalescer.notify_left(event, now);
    }

    /// Widget callback: a drag completed on the right side.
    pub fn on_right_move(&mut self, event: MoveEvent<R>, now: Instant) {
        self.coalescer.notify_right(event, now);
    }

    /// Widget callback: a node was expanded or collapsed on the left side.
    /// Applied directly; expand/collapse is presentation state, not an
    /// undoable edit, so it bypasses the coalescer and the history stack.
    pub fn on_left_visibility_toggle(&mut self, toggle: VisibilityToggle<L>) {
        self.left = toggle.forest;
    }

    /// Widget callback: a node was expanded or collapsed on the right side.
    pub fn on_right_visibility_toggle(&mut self, toggle: VisibilityToggle<R>) {
        self.right = toggle.forest;
    }

    /// Pump the coalescer. If a buffered burst has gone quiet, record the
    /// pre-move state as one history entry and apply the post-move forest(s).
    ///
    /// Returns the burst's classification, or `None` when nothing flushed.
    /// Fails only if a lazy children producer fails while the pre-move
    /// snapshot is captured; the burst is dropped in that case.
    pub fn tick(&mut self, now: Instant) -> Result<Option<MoveKind>> {
        let Some(flushed) = self.coalescer.poll(now) else {
            return Ok(None);
        };
        let kind = flushed.kind();
        self.history.push(TreePair::capture(&self.left, &self.right)?);
        match flushed {
            CoalescedMove::Left(event) => {
                self.left = event.forest;
            }
            CoalescedMove::Right(event) => {
                self.right = event.forest;
            }
            CoalescedMove::Both(left_event, right_event) => {
                self.left = left_event.forest;
                self.right = right_event.forest;
            }
        }
        debug!(?kind, "applied coalesced move");
        Ok(Some(kind))
    }

    /// When the host should next call [`tick`](Self::tick), if a burst is
    /// buffering.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.coalescer.next_deadline()
    }

    /// Restore the most recent past state, moving the current state onto the
    /// redo stack. Returns `Ok(false)` (a defined no-op) when there is
    /// nothing to undo; hosts should grey their control off
    /// [`can_undo`](Self::can_undo).
    pub fn undo(&mut self) -> Result<bool> {
        if !self.history.can_undo() {
            return Ok(false);
        }
        let current = TreePair::capture(&self.left, &self.right)?;
        match self.history.undo(current) {
            Some(snapshot) => {
                self.left = snapshot.left;
                self.right = snapshot.right;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Restore the most recently undone state. Symmetric to
    /// [`undo`](Self::undo).
    pub fn redo(&mut self) -> Result<bool> {
        if !self.history.can_redo() {
            return Ok(false);
        }
        let current = TreePair::capture(&self.left, &self.right)?;
        match self.history.redo(current) {
            Some(snapshot) => {
                self.left = snapshot.left;
                self.right = snapshot.right;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The underlying history stack, for depth introspection.
    pub fn history(&self) -> &HistoryStack<L, R> {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeNode;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn forest(titles: &[&str]) -> Forest<u32> {
        titles
            .iter()
            .enumerate()
            .map(|(i, t)| TreeNode::new(*t, i as u32))
            .collect()
    }

    #[test]
    fn test_move_applies_after_debounce() {
        let mut trees = DualTree::new(forest(&["a", "b"]), forest(&["c"]));
        let start = Instant::now();

        let reordered = forest(&["b", "a"]);
        trees.on_left_move(
            MoveEvent::new(TreeNode::new("b", 1), reordered.clone()),
            start,
        );

        // Nothing applied until the window elapses.
        assert_eq!(trees.tick(start + ms(5)).unwrap(), None);
        assert_eq!(trees.left()[0].title, "a");
        assert!(!trees.can_undo());

        assert_eq!(trees.tick(start + ms(20)).unwrap(), Some(MoveKind::Left));
        assert_eq!(trees.left(), &reordered);
        assert!(trees.can_undo());
        assert_eq!(trees.history().undo_depth(), 1);
    }

    #[test]
    fn test_visibility_toggle_is_not_undoable() {
        let mut trees = DualTree::new(forest(&["a"]), forest(&["b"]));

        let toggled = vec![TreeNode::new("a", 0u32).with_expanded(true)];
        trees.on_left_visibility_toggle(VisibilityToggle::new(toggled[0].clone(), toggled.clone()));

        assert_eq!(trees.left(), &toggled);
        assert!(!trees.can_undo());
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut trees = DualTree::new(forest(&["a"]), forest(&["b"]));
        assert!(!trees.undo().unwrap());
        assert!(!trees.redo().unwrap());
        assert_eq!(trees.left()[0].title, "a");
    }

    #[test]
    fn test_next_deadline_reflects_buffering() {
        let mut trees = DualTree::new(forest(&["a"]), forest(&["b"])).with_debounce_window(ms(10));
        assert_eq!(trees.next_deadline(), None);

        let start = Instant::now();
        trees.on_left_move(MoveEvent::new(TreeNode::new("a", 0), forest(&["a"])), start);
        assert_eq!(trees.next_deadline(), Some(start + ms(10)));
    }
}
