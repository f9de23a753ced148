//! Errors
//!
//! Error types reported while loading a sample or exporting a tree.
use thiserror::Error;


/// A `Result` alias whose error type is [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;


/// Errors that can occur before or after the induction.
/// The induction itself cannot fail on a loaded [`Sample`](crate::Sample).
#[derive(Debug, Error)]
pub enum TreeError {
    /// The target attribute is not declared.
    #[error("Target attribute `{0}` is not declared.")]
    UnknownTarget(String),
    /// The source declares no attribute at all.
    #[error("No attribute is declared.")]
    NoAttributes,
    /// The same attribute name is registered twice.
    #[error("Attribute `{0}` is declared more than once.")]
    DuplicateAttribute(String),
    /// An attribute is declared without any legal value.
    #[error("Attribute `{0}` has no legal value.")]
    EmptyDomain(String),
    /// An attribute is registered at a column other than the next free one.
    #[error("Attribute `{name}` is registered at column {column}, expected column {expected}.")]
    ColumnOutOfOrder {
        /// The attribute name.
        name: String,
        /// The given column.
        column: usize,
        /// The next free column.
        expected: usize,
    },
    /// An attribute declaration that cannot be parsed.
    #[error("Malformed attribute declaration at line {line}: {content}")]
    MalformedDeclaration {
        /// 1-indexed line number.
        line: usize,
        /// The offending line.
        content: String,
    },
    /// The `@data` marker was not found.
    #[error("The `@data` section is missing.")]
    MissingDataSection,
    /// Reading or writing a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// (De)serializing a tree failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// Converting a `DataFrame` failed.
    #[error(transparent)]
    Polars(#[from] polars::prelude::PolarsError),
}
