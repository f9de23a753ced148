//! Defines the inner representation
//! of the Decision Tree class.
use serde::{Serialize, Deserialize};

use crate::{Attribute, Row};
use super::train_node::*;

use std::fmt::Write;


/// Enumeration of the branch and the leaf nodes
/// of a finished decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node split by `attribute`.
    /// `children` has exactly one entry per legal value of `attribute`,
    /// in declaration order.
    Branch {
        /// The split attribute.
        attribute: Attribute,
        /// Pairs of an attribute value and the sub-tree taking it.
        children: Vec<(String, Node)>,
    },
    /// A node that have no child.
    /// A leaf that received no row has no label.
    Leaf {
        /// The predicted label.
        label: Option<String>,
    },
}


impl From<TrainNode> for Node {
    /// # Panics
    /// Panics if `train_node` or one of its descendants is unresolved.
    #[inline]
    fn from(train_node: TrainNode) -> Self {
        match train_node.state {
            NodeState::Leaf(label) => Node::Leaf { label },
            NodeState::Split { attribute, children } => {
                let children = children.into_iter()
                    .map(|(value, child)| (value, Node::from(child)))
                    .collect();
                Node::Branch { attribute, children }
            },
            NodeState::Pending => {
                panic!("An unresolved node is left in the tree")
            },
        }
    }
}


impl Node {
    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }


    /// Returns the label of a leaf.
    /// Returns `None` for a branch and for a leaf without label.
    #[inline]
    pub fn label(&self) -> Option<&str> {
        match self {
            Node::Leaf { label } => label.as_deref(),
            Node::Branch { .. } => None,
        }
    }


    /// Returns the split attribute of a branch.
    #[inline]
    pub fn split_attribute(&self) -> Option<&Attribute> {
        match self {
            Node::Branch { attribute, .. } => Some(attribute),
            Node::Leaf { .. } => None,
        }
    }


    /// Returns the name of the split attribute of a branch.
    #[inline]
    pub fn split_attribute_name(&self) -> Option<&str> {
        self.split_attribute().map(Attribute::name)
    }


    /// Returns the pairs of a value and the child taking it.
    /// The slice is empty for a leaf.
    #[inline]
    pub fn children_by_value(&self) -> &[(String, Node)] {
        match self {
            Node::Branch { children, .. } => &children[..],
            Node::Leaf { .. } => &[],
        }
    }


    /// Returns the child that takes `value`.
    pub fn child(&self, value: &str) -> Option<&Node> {
        self.children_by_value()
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, child)| child)
    }


    /// Returns the depth of this sub-tree.
    /// A leaf has depth `0`.
    pub fn depth(&self) -> usize {
        self.children_by_value()
            .iter()
            .map(|(_, child)| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Branch { children, .. } => {
                children.iter().map(|(_, child)| child.n_leaves()).sum()
            },
        }
    }


    /// Walk down the tree along `row`.
    /// Returns `None` if a split value of `row` is missing or unknown,
    /// or if the reached leaf has no label.
    pub fn predict(&self, row: &Row) -> Option<&str> {
        match self {
            Node::Leaf { label } => label.as_deref(),
            Node::Branch { attribute, .. } => {
                let column = attribute.column();
                if column >= row.len() || row.is_missing(column) {
                    return None;
                }
                self.child(row.get(column))?.predict(row)
            },
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch { attribute, children } => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{feat} ?\" ];\n",
                    feat = escape_dot(attribute.name()),
                )];

                let mut next_id = id + 1;
                for (value, child) in children {
                    let child_id = next_id;
                    let (mut child_info, ret_id) = child.to_dot_info(child_id);
                    info.append(&mut child_info);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{v}\" ];\n",
                        v = escape_dot(value),
                    ));
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Node::Leaf { label } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{l}\", shape = box ];\n",
                    l = escape_dot(label.as_deref().unwrap_or("")),
                );

                (vec![info], id + 1)
            }
        }
    }


    /// Writes the elements below the element of this node
    /// in the nested-element format.
    /// A leaf writes nothing; its label is the text of its parent element.
    pub(super) fn write_xml_children(&self, out: &mut String, level: usize) {
        let Node::Branch { attribute, children } = self else { return; };

        let name = element_name(attribute.name());
        let indent = "  ".repeat(level);
        for (value, child) in children {
            let value = escape_xml(value);
            // `write!` to a `String` never fails.
            let _ = write!(out, "{indent}<{name} value=\"{value}\"");
            match child {
                Node::Leaf { label: Some(label) } => {
                    let _ = writeln!(out, ">{}</{name}>", escape_xml(label));
                },
                Node::Leaf { label: None } => {
                    let _ = writeln!(out, "/>");
                },
                Node::Branch { .. } => {
                    let _ = writeln!(out, ">");
                    child.write_xml_children(out, level + 1);
                    let _ = writeln!(out, "{indent}</{name}>");
                },
            }
        }
    }
}


/// Replaces the characters that cannot appear in an element name.
fn element_name(name: &str) -> String {
    let mut element = name.chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '_' | '-' | '.') { c } else { '_' }
        })
        .collect::<String>();

    let starts_ok = element.chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_');
    if !starts_ok {
        element.insert(0, '_');
    }
    element
}


pub(super) fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}


fn escape_dot(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
