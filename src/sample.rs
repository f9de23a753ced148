//! Struct `Sample` represents a nominal data set.

// Provides attributes and the attribute registry.
pub(crate) mod attribute;
// Provides row struct.
pub(crate) mod row;
// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use attribute::{Attribute, AttributeRegistry};
pub use row::Row;
pub use sample_reader::SampleReader;
pub use sample_struct::Sample;
