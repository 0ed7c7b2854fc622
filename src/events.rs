//! Event types exchanged with the tree widget and emitted by the coalescer.

use crate::tree::{Forest, TreeNode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which tree a notification refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A completed drag reported by the widget for one side: the moved node, its
/// previous and next parent (`None` at forest root), and the resulting full
/// forest for that side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "P: Serialize + Clone", deserialize = "P: Deserialize<'de>"))]
pub struct MoveEvent<P> {
    pub node: TreeNode<P>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_parent: Option<TreeNode<P>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_parent: Option<TreeNode<P>>,

    /// The full forest for this side after the move.
    pub forest: Forest<P>,
}

impl<P> MoveEvent<P> {
    pub fn new(node: TreeNode<P>, forest: Forest<P>) -> Self {
        Self {
            node,
            previous_parent: None,
            next_parent: None,
            forest,
        }
    }

    pub fn with_previous_parent(mut self, parent: TreeNode<P>) -> Self {
        self.previous_parent = Some(parent);
        self
    }

    pub fn with_next_parent(mut self, parent: TreeNode<P>) -> Self {
        self.next_parent = Some(parent);
        self
    }
}

/// An expand/collapse reported by the widget. Presentation state only; never
/// recorded in history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "P: Serialize + Clone", deserialize = "P: Deserialize<'de>"))]
pub struct VisibilityToggle<P> {
    pub node: TreeNode<P>,
    /// The full forest for this side after the toggle.
    pub forest: Forest<P>,
}

impl<P> VisibilityToggle<P> {
    pub fn new(node: TreeNode<P>, forest: Forest<P>) -> Self {
        Self { node, forest }
    }
}

/// A burst of per-side move notifications classified by the coalescer into
/// exactly one combined event.
#[derive(Clone, Debug, PartialEq)]
pub enum CoalescedMove<L, R> {
    /// Only the left tree changed.
    Left(MoveEvent<L>),
    /// Only the right tree changed.
    Right(MoveEvent<R>),
    /// Both trees changed as part of one user gesture (a cross-tree drag).
    Both(MoveEvent<L>, MoveEvent<R>),
}

impl<L, R> CoalescedMove<L, R> {
    /// Classification tag without the event payload.
    pub fn kind(&self) -> MoveKind {
        match self {
            CoalescedMove::Left(_) => MoveKind::Left,
            CoalescedMove::Right(_) => MoveKind::Right,
            CoalescedMove::Both(_, _) => MoveKind::Both,
        }
    }
}

/// How a flushed burst was classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Left,
    Right,
    Both,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coalesced_move_kind() {
        let event = MoveEvent::new(TreeNode::new("n", ()), Vec::new());
        assert_eq!(
            CoalescedMove::<(), ()>::Left(event.clone()).kind(),
            MoveKind::Left
        );
        assert_eq!(
            CoalescedMove::<(), ()>::Right(event.clone()).kind(),
            MoveKind::Right
        );
        assert_eq!(
            CoalescedMove::<(), ()>::Both(event.clone(), event).kind(),
            MoveKind::Both
        );
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Left.to_string(), "left");
        assert_eq!(Side::Right.to_string(), "right");
    }
}
