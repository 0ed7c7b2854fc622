//! Tree-pair snapshots: deep, isolated copies of both forests at one instant.

use crate::error::Result;
use crate::tree::{realize_forest, Forest, TreeNode};
use serde::{Deserialize, Serialize};

/// An independent deep copy of the left and right forests.
///
/// Captured on every history boundary. Once a pair is stored in the
/// [`HistoryStack`](crate::history::HistoryStack), no later in-place edit to
/// the live trees can reach it: `capture` realizes both forests (forcing any
/// lazy children) and the stack takes entries by value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "L: Serialize + Clone, R: Serialize + Clone",
    deserialize = "L: Deserialize<'de>, R: Deserialize<'de>"
))]
pub struct TreePair<L, R> {
    pub left: Forest<L>,
    pub right: Forest<R>,
}

impl<L: Clone, R: Clone> TreePair<L, R> {
    /// Deep-copy both forests at this instant.
    ///
    /// Fails only if a lazy children producer fails while being forced.
    pub fn capture(left: &[TreeNode<L>], right: &[TreeNode<R>]) -> Result<Self> {
        Ok(Self {
            left: realize_forest(left)?,
            right: realize_forest(right)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Children;

    #[test]
    fn test_capture_is_deep() {
        let mut left = vec![TreeNode::new("a", 1u32).with_children(vec![TreeNode::new("b", 2)])];
        let right: Forest<u32> = vec![TreeNode::new("c", 3)];

        let pair = TreePair::capture(&left, &right).unwrap();

        // Mutate the live forest after capture.
        left[0].title = "mutated".to_string();
        if let Children::Materialized(kids) = &mut left[0].children {
            kids[0].payload = 99;
        }

        assert_eq!(pair.left[0].title, "a");
        if let Children::Materialized(kids) = &pair.left[0].children {
            assert_eq!(kids[0].payload, 2);
        } else {
            panic!("captured children must be materialized");
        }
    }

    #[test]
    fn test_capture_forces_lazy() {
        let left = vec![
            TreeNode::new("root", ()).with_lazy_children(|| Ok(vec![TreeNode::new("kid", ())]))
        ];
        let right: Forest<()> = Vec::new();

        let pair = TreePair::capture(&left, &right).unwrap();
        assert!(!pair.left[0].children.is_lazy());
    }
}
