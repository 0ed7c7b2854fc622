//! # Dual Tree
//!
//! Coalesced drag events and snapshot undo/redo for a pair of tree editors
//! rendered side by side.
//!
//! An external tree widget owns rendering and drag-and-drop; this crate owns
//! the hard part of coordinating the two trees: a single cross-tree drag
//! reaches the core as two separate, asynchronously-arriving per-side
//! notifications, and must land in history as *one* undoable action.
//!
//! ## Core Concepts
//!
//! - **Forests**: ordered sequences of [`TreeNode`] roots, generic over an
//!   attached payload; children may be materialized or produced lazily
//! - **Coalescing**: per-side move notifications buffered behind a debounce
//!   window and classified into one left / right / both event per burst
//! - **Snapshots**: deep, isolated [`TreePair`] copies of both forests,
//!   captured before each applied edit
//! - **History**: linear undo/redo stacks with destructive redo invalidation
//!
//! Everything is single-threaded and host-pumped: the current instant is
//! passed in explicitly and the host polls [`DualTree::tick`], so the whole
//! state machine is deterministic under test.
//!
//! ## Example
//!
//! ```
//! use dual_tree::{DualTree, MoveEvent, MoveKind, TreeNode};
//! use std::time::{Duration, Instant};
//!
//! # fn main() -> dual_tree::Result<()> {
//! let left = vec![TreeNode::new("node1", ()), TreeNode::new("node2", ())];
//! let right = vec![TreeNode::new("node3", ())];
//! let mut trees = DualTree::new(left, right);
//!
//! // The widget reports a drag that reordered the left side.
//! let start = Instant::now();
//! let reordered = vec![TreeNode::new("node2", ()), TreeNode::new("node1", ())];
//! trees.on_left_move(MoveEvent::new(TreeNode::new("node2", ()), reordered), start);
//!
//! // Once the debounce window has gone quiet, the burst lands as one edit.
//! let flushed = trees.tick(start + Duration::from_millis(20))?;
//! assert_eq!(flushed, Some(MoveKind::Left));
//! assert!(trees.can_undo());
//!
//! // Undo restores the forests from the snapshot taken before the move.
//! assert!(trees.undo()?);
//! assert_eq!(trees.left()[0].title, "node1");
//! # Ok(())
//! # }
//! ```

pub mod coalescer;
pub mod controller;
pub mod error;
pub mod events;
pub mod history;
pub mod snapshot;
pub mod timer;
pub mod tree;

// Re-exports
pub use coalescer::{MoveCoalescer, DEFAULT_DEBOUNCE_WINDOW};
pub use controller::DualTree;
pub use error::{Result, TreeError};
pub use events::{CoalescedMove, MoveEvent, MoveKind, Side, VisibilityToggle};
pub use history::HistoryStack;
pub use snapshot::TreePair;
pub use timer::{DebounceTimer, TimerHandle};
pub use tree::{realize_forest, Children, ChildrenFn, Forest, TreeNode};
