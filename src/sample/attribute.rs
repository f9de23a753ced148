//! Nominal attributes and the registry that owns them.
use serde::{Serialize, Deserialize};

use crate::error::{Result, TreeError};

use std::collections::HashMap;


/// A nominal attribute: a name, an ordered domain of legal values,
/// and the column it occupies in every [`Row`](super::Row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    name: String,
    values: Vec<String>,
    column: usize,
}


impl Attribute {
    /// Construct a new attribute.
    /// Duplicated values in `values` are dropped, keeping the first one.
    pub fn new<S, I, T>(name: S, values: I, column: usize) -> Self
        where S: Into<String>,
              I: IntoIterator<Item = T>,
              T: Into<String>,
    {
        let mut domain: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if !domain.contains(&value) {
                domain.push(value);
            }
        }

        Self { name: name.into(), values: domain, column, }
    }


    /// Returns the attribute name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the legal values in declaration order.
    #[inline]
    pub fn values(&self) -> &[String] {
        &self.values[..]
    }


    /// Returns the column index of this attribute.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }


    /// Returns `true` if `value` is one of the legal values.
    #[inline]
    pub fn is_legal(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}


/// The universe of attributes of a sample.
///
/// The registry is filled once while loading
/// and only read afterwards.
/// Attributes are kept in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeRegistry {
    attributes: Vec<Attribute>,
    name_to_index: HashMap<String, usize>,
}


impl AttributeRegistry {
    /// Construct an empty registry.
    pub fn new() -> Self {
        Self::default()
    }


    /// Register a new attribute.
    /// `column` must be the next free column,
    /// i.e., attributes are registered in column order.
    ///
    /// Returns `TreeError::DuplicateAttribute` for a known name,
    /// `TreeError::EmptyDomain` for an empty domain,
    /// and `TreeError::ColumnOutOfOrder` for any other column.
    pub fn register_attribute<S, I, T>(
        &mut self,
        name: S,
        values: I,
        column: usize,
    ) -> Result<&Attribute>
        where S: Into<String>,
              I: IntoIterator<Item = T>,
              T: Into<String>,
    {
        let attribute = Attribute::new(name, values, column);
        let name = attribute.name().to_string();

        if self.name_to_index.contains_key(&name) {
            return Err(TreeError::DuplicateAttribute(name));
        }
        if attribute.values().is_empty() {
            return Err(TreeError::EmptyDomain(name));
        }
        let expected = self.attributes.len();
        if column != expected {
            return Err(TreeError::ColumnOutOfOrder { name, column, expected });
        }

        self.name_to_index.insert(name, column);
        self.attributes.push(attribute);
        Ok(&self.attributes[column])
    }


    /// Returns all the attributes except `target`.
    /// The result is the initial eligible set of a root node.
    pub fn all_attributes_except_target(&self, target: &Attribute)
        -> Vec<&Attribute>
    {
        self.attributes.iter()
            .filter(|attr| attr.column() != target.column())
            .collect()
    }


    /// Returns the attribute named `name`, if exists.
    pub fn find(&self, name: &str) -> Option<&Attribute> {
        self.name_to_index.get(name)
            .map(|&i| &self.attributes[i])
    }


    /// Returns the attribute at column `column`.
    ///
    /// # Panics
    /// Panics if `column` is out of range.
    #[inline]
    pub fn get(&self, column: usize) -> &Attribute {
        &self.attributes[column]
    }


    /// Returns all the attributes in column order.
    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes[..]
    }


    /// Returns the number of attributes.
    #[inline]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }


    /// Returns `true` if no attribute is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
