#![warn(missing_docs)]

//!
//! A crate that grows a classification decision tree
//! over nominal (categorical) attributes.
//!
//! Each node of the tree is either a leaf that predicts a label
//! or a branch that splits its rows on one attribute,
//! with one child per legal value of the attribute.
//! The split attribute is the one that maximizes the chosen [`Criterion`]:
//! information gain (the classic ID3 rule), Gini gain, or their ratios.
//!
//! ```no_run
//! use nominal_tree::prelude::*;
//!
//! let sample = SampleReader::new()
//!     .file("weather.nominal.arff")
//!     .target_feature("play")
//!     .read()?;
//! let f = DecisionTreeBuilder::new(&sample)
//!     .build()
//!     .fit();
//! println!("{}", f.to_xml());
//! # Ok::<(), nominal_tree::TreeError>(())
//! ```
//!
//! Numeric attributes must be discretized beforehand.

pub mod error;
pub mod sample;
pub mod decision_tree;
pub mod research;

pub mod prelude;


pub use error::{Result, TreeError};

pub use sample::{
    Attribute,
    AttributeRegistry,
    Row,
    Sample,
    SampleReader,
};

pub use decision_tree::{
    impurity,
    Criterion,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    LeafLabel,
    Node,
};

pub use research::CrossValidation;
