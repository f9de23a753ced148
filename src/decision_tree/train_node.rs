//! Defines the node representation used while growing a tree.
use crate::Attribute;

use std::collections::BTreeSet;
use std::fmt;


/// The resolution of a `TrainNode`.
pub enum NodeState {
    /// Not resolved yet.
    Pending,
    /// A leaf that predicts the label.
    Leaf(Option<String>),
    /// A node split by `attribute`,
    /// with one child per legal value of `attribute`.
    Split {
        attribute: Attribute,
        children: Vec<(String, TrainNode)>,
    },
}


/// A node under construction.
///
/// Until it is resolved, a `TrainNode` owns the indices of its rows
/// and the columns of its eligible attributes.
/// A node is resolved exactly once, by [`TrainNode::mark_leaf`]
/// or [`TrainNode::split`], which also drops both buffers.
pub struct TrainNode {
    pub(super) state: NodeState,
    indices: Vec<usize>,
    eligible: BTreeSet<usize>,
    depth: usize,
}


impl TrainNode {
    /// Construct an unresolved node.
    #[inline]
    pub(super) fn new(
        indices: Vec<usize>,
        eligible: BTreeSet<usize>,
        depth: usize,
    ) -> Self
    {
        Self { state: NodeState::Pending, indices, eligible, depth, }
    }


    /// Resolve this node as a leaf predicting `label`.
    ///
    /// # Panics
    /// Panics if this node is already resolved.
    pub(super) fn mark_leaf(&mut self, label: Option<String>) {
        self.assert_pending("mark as a leaf");
        self.state = NodeState::Leaf(label);
        self.release();
    }


    /// Resolve this node as a split on `attribute`.
    ///
    /// # Panics
    /// Panics if this node is already resolved,
    /// or if `attribute` is not eligible on this node.
    pub(super) fn split(
        &mut self,
        attribute: Attribute,
        children: Vec<(String, TrainNode)>,
    )
    {
        self.assert_pending("split");
        assert!(
            self.eligible.contains(&attribute.column()),
            "Attribute `{}` is not eligible on this node",
            attribute.name()
        );

        self.state = NodeState::Split { attribute, children };
        self.release();
    }


    /// Returns `true` if this node is not resolved yet.
    #[inline]
    pub(super) fn is_pending(&self) -> bool {
        matches!(self.state, NodeState::Pending)
    }


    /// Returns the children of a split node.
    #[inline]
    pub(super) fn children_mut(&mut self)
        -> impl Iterator<Item = &mut TrainNode>
    {
        let children: &mut [(String, TrainNode)] = match &mut self.state {
            NodeState::Split { children, .. } => &mut children[..],
            _ => &mut [],
        };
        children.iter_mut().map(|(_, child)| child)
    }


    /// Returns the indices of the rows on this node.
    #[inline]
    pub(super) fn indices(&self) -> &[usize] {
        &self.indices[..]
    }


    /// Returns the columns of the eligible attributes.
    #[inline]
    pub(super) fn eligible(&self) -> &BTreeSet<usize> {
        &self.eligible
    }


    /// Returns the depth of this node. The root has depth `0`.
    #[inline]
    pub(super) fn depth(&self) -> usize {
        self.depth
    }


    #[inline]
    fn assert_pending(&self, action: &str) {
        assert!(
            self.is_pending(),
            "Cannot {action} a node that is already resolved"
        );
    }


    #[inline]
    fn release(&mut self) {
        self.indices = Vec::new();
        self.eligible = BTreeSet::new();
    }
}


impl fmt::Debug for TrainNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            NodeState::Pending => {
                f.debug_struct("TrainPendingNode")
                    .field("depth", &self.depth)
                    .field("rows", &self.indices.len())
                    .field("eligible", &self.eligible)
                    .finish()
            },
            NodeState::Leaf(label) => {
                f.debug_struct("TrainLeafNode")
                    .field("depth", &self.depth)
                    .field("label", label)
                    .finish()
            },
            NodeState::Split { attribute, children } => {
                f.debug_struct("TrainBranchNode")
                    .field("depth", &self.depth)
                    .field("attribute", &attribute.name())
                    .field("children", children)
                    .finish()
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;


    fn pending() -> TrainNode {
        TrainNode::new(vec![0, 1, 2], BTreeSet::from([0, 1]), 0)
    }


    #[test]
    fn resolving_drops_the_buffers() {
        let mut leaf = pending();
        leaf.mark_leaf(Some("yes".to_string()));
        assert!(matches!(&leaf.state, NodeState::Leaf(Some(l)) if l == "yes"));
        assert!(leaf.indices().is_empty());
        assert!(leaf.eligible().is_empty());

        let mut branch = pending();
        let attribute = Attribute::new("windy", ["true", "false"], 1);
        let children = attribute.values()
            .iter()
            .map(|v| {
                let child = TrainNode::new(Vec::new(), BTreeSet::from([0]), 1);
                (v.clone(), child)
            })
            .collect();
        branch.split(attribute, children);
        assert!(!branch.is_pending());
        assert_eq!(branch.children_mut().count(), 2);
        assert!(branch.indices().is_empty());
        assert!(branch.children_mut().all(|child| child.depth() == 1));
    }


    #[test]
    #[should_panic(expected = "already resolved")]
    fn a_leaf_cannot_be_split() {
        let mut node = pending();
        node.mark_leaf(None);
        node.split(Attribute::new("windy", ["true"], 1), Vec::new());
    }


    #[test]
    #[should_panic(expected = "already resolved")]
    fn a_leaf_cannot_be_relabeled() {
        let mut node = pending();
        node.mark_leaf(Some("yes".to_string()));
        node.mark_leaf(Some("no".to_string()));
    }


    #[test]
    #[should_panic(expected = "not eligible")]
    fn only_eligible_attributes_split() {
        let mut node = pending();
        node.split(Attribute::new("play", ["yes", "no"], 2), Vec::new());
    }
}
