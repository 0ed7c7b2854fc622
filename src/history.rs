//! Undo/redo history stack for tree-pair snapshots.
//!
//! Classic linear undo: two LIFO stacks of [`TreePair`], with destructive
//! redo invalidation — any new [`push`](HistoryStack::push) discards the redo
//! branch. Isolation of stored entries is by ownership: callers hand in
//! values produced by [`TreePair::capture`], and the stack never exposes a
//! stored entry by reference.

use crate::snapshot::TreePair;
use tracing::debug;

/// Two LIFO stacks of tree-pair snapshots with push/undo/redo semantics.
#[derive(Debug)]
pub struct HistoryStack<L, R> {
    /// Top = most recent past state.
    undo: Vec<TreePair<L, R>>,
    /// Top = most recently undone state.
    redo: Vec<TreePair<L, R>>,
}

impl<L, R> HistoryStack<L, R> {
    pub fn new() -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// Record `snapshot` as the most recent past state and discard all redo
    /// history. Always succeeds.
    ///
    /// Redo entries are only valid along the single undo chain that produced
    /// them; a new edit after an undo prunes that branch.
    pub fn push(&mut self, snapshot: TreePair<L, R>) {
        self.undo.push(snapshot);
        if !self.redo.is_empty() {
            debug!(pruned = self.redo.len(), "push discarded redo branch");
            self.redo.clear();
        }
    }

    /// Step back: move `current` onto the redo stack and return the most
    /// recent past state. Returns `None` (dropping `current`, caller state
    /// unchanged) when there is nothing to undo.
    pub fn undo(&mut self, current: TreePair<L, R>) -> Option<TreePair<L, R>> {
        let restored = self.undo.pop()?;
        self.redo.push(current);
        debug!(
            undo_depth = self.undo.len(),
            redo_depth = self.redo.len(),
            "undo"
        );
        Some(restored)
    }

    /// Step forward: move `current` onto the undo stack and return the most
    /// recently undone state. Returns `None` when there is nothing to redo.
    pub fn redo(&mut self, current: TreePair<L, R>) -> Option<TreePair<L, R>> {
        let restored = self.redo.pop()?;
        self.undo.push(current);
        debug!(
            undo_depth = self.undo.len(),
            redo_depth = self.redo.len(),
            "redo"
        );
        Some(restored)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}

impl<L, R> Default for HistoryStack<L, R> {
    fn default() -> Self {
        Self::new()
    }
}
