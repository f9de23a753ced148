//! This directory provides some tools for evaluating a tree.

/// Provides the cross validation iterator.
pub mod cross_validation;

pub use cross_validation::CrossValidation;
