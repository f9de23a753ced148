//! The induction engine of the decision tree.

/// Defines the impurity measures.
pub mod impurity;
/// Defines the decision tree algorithm.
pub mod decision_tree_algorithm;
/// Defines the classifier produced by `DecisionTree`.
pub mod decision_tree_classifier;
/// Defines the builder of `DecisionTree`.
pub mod builder;

/// Defines the inner representations of `DecisionTreeClassifier`.
mod node;
mod criterion;
mod train_node;


pub use decision_tree_algorithm::{DecisionTree, LeafLabel};
pub use decision_tree_classifier::DecisionTreeClassifier;
pub use builder::DecisionTreeBuilder;
pub use criterion::Criterion;
pub use node::Node;
