//! Tree node data model and the structural deep-copy used for snapshots.
//!
//! A [`Forest`] is an ordered sequence of root [`TreeNode`]s. Nodes carry a
//! presentation `title`/`subtitle`, an `expanded` flag, an application-defined
//! payload, and [`Children`] that are either materialized or produced lazily
//! on demand. Node identity is positional (its path from a forest root);
//! nodes carry no stable ID.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// An ordered sequence of root nodes.
pub type Forest<P> = Vec<TreeNode<P>>;

/// Producer for lazily-computed children.
pub type ChildrenFn<P> = Arc<dyn Fn() -> Result<Vec<TreeNode<P>>> + Send + Sync>;

/// A node in a forest, generic over an attached payload type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "P: Serialize + Clone", deserialize = "P: Deserialize<'de>"))]
pub struct TreeNode<P> {
    /// Display label. Presentation only, not an identity.
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Expand/collapse presentation state, persisted across snapshots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,

    /// Application-defined payload.
    pub payload: P,

    #[serde(default)]
    pub children: Children<P>,
}

impl<P> TreeNode<P> {
    /// Create a leaf node with the given title and payload.
    pub fn new(title: impl Into<String>, payload: P) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            expanded: None,
            payload,
            children: Children::default(),
        }
    }

    /// Set the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the expanded flag.
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = Some(expanded);
        self
    }

    /// Set materialized children.
    pub fn with_children(mut self, children: Vec<TreeNode<P>>) -> Self {
        self.children = Children::Materialized(children);
        self
    }

    /// Set a lazy children producer.
    pub fn with_lazy_children<F>(mut self, producer: F) -> Self
    where
        F: Fn() -> Result<Vec<TreeNode<P>>> + Send + Sync + 'static,
    {
        self.children = Children::lazy(producer);
        self
    }
}

impl<P: Clone> TreeNode<P> {
    /// Deep, fully-independent copy of this node.
    ///
    /// Lazy children are forced recursively, so the result shares no closure
    /// or mutable substructure with the source. This is the copy used on
    /// every snapshot boundary.
    pub fn realize(&self) -> Result<TreeNode<P>> {
        Ok(TreeNode {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            expanded: self.expanded,
            payload: self.payload.clone(),
            children: Children::Materialized(self.children.realize()?),
        })
    }
}

/// Children of a node: either a materialized ordered sequence, or a producer
/// evaluated on demand.
///
/// `Clone` on the lazy variant shares the producer; use
/// [`realize`](Children::realize) for an independent deep copy.
pub enum Children<P> {
    /// Ordered child nodes, possibly empty.
    Materialized(Vec<TreeNode<P>>),
    /// Children computed on demand.
    Lazy(ChildrenFn<P>),
}

impl<P> Children<P> {
    /// Wrap a producer closure in the lazy variant.
    pub fn lazy<F>(producer: F) -> Self
    where
        F: Fn() -> Result<Vec<TreeNode<P>>> + Send + Sync + 'static,
    {
        Children::Lazy(Arc::new(producer))
    }

    /// True for the lazy variant.
    pub fn is_lazy(&self) -> bool {
        matches!(self, Children::Lazy(_))
    }
}

impl<P: Clone> Children<P> {
    /// Produce an independent, fully-materialized copy of the children.
    ///
    /// The lazy variant is evaluated here; its output is realized recursively
    /// so nested lazy producers are forced as well.
    pub fn realize(&self) -> Result<Vec<TreeNode<P>>> {
        match self {
            Children::Materialized(nodes) => nodes.iter().map(TreeNode::realize).collect(),
            Children::Lazy(producer) => producer()?.iter().map(TreeNode::realize).collect(),
        }
    }
}

impl<P> Default for Children<P> {
    fn default() -> Self {
        Children::Materialized(Vec::new())
    }
}

impl<P: Clone> Clone for Children<P> {
    fn clone(&self) -> Self {
        match self {
            Children::Materialized(nodes) => Children::Materialized(nodes.clone()),
            Children::Lazy(producer) => Children::Lazy(Arc::clone(producer)),
        }
    }
}

impl<P: fmt::Debug> fmt::Debug for Children<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Children::Materialized(nodes) => f.debug_tuple("Materialized").field(nodes).finish(),
            Children::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl<P: PartialEq> PartialEq for Children<P> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Children::Materialized(a), Children::Materialized(b)) => a == b,
            // Lazy producers compare by identity.
            (Children::Lazy(a), Children::Lazy(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<P> From<Vec<TreeNode<P>>> for Children<P> {
    fn from(nodes: Vec<TreeNode<P>>) -> Self {
        Children::Materialized(nodes)
    }
}

impl<P: Serialize + Clone> Serialize for Children<P> {
    /// Serializes the realized child sequence. A stored or transmitted tree
    /// must not depend on a live closure, so the lazy variant is forced.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::Error;
        match self {
            Children::Materialized(nodes) => serializer.collect_seq(nodes),
            Children::Lazy(_) => {
                let realized = self.realize().map_err(S::Error::custom)?;
                serializer.collect_seq(&realized)
            }
        }
    }
}

impl<'de, P: Deserialize<'de>> Deserialize<'de> for Children<P> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Children::Materialized(Vec::deserialize(deserializer)?))
    }
}

/// Deep-copy a whole forest, forcing any lazy children.
pub fn realize_forest<P: Clone>(forest: &[TreeNode<P>]) -> Result<Forest<P>> {
    forest.iter().map(TreeNode::realize).collect()
}
