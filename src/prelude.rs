//! Exports the standard structs for loading a sample
//! and growing a decision tree.
//!
pub use crate::sample::{
    Attribute,
    AttributeRegistry,
    Row,
    Sample,
    SampleReader,
};


pub use crate::decision_tree::{
    // Induction
    DecisionTree,
    DecisionTreeBuilder,
    Criterion,
    LeafLabel,


    // Output
    DecisionTreeClassifier,
    Node,
};


pub use crate::error::{Result, TreeError};
