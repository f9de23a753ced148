use serde::{Serialize, Deserialize};

use std::ops::Index;


/// The marker of a missing value in the source files.
pub(crate) const MISSING_MARKER: &str = "?";


/// A single observation: one nominal value per attribute column,
/// including the target column.
/// A missing value is stored as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Row(Vec<String>);


impl Row {
    /// Returns the value at `column`.
    ///
    /// # Panics
    /// Panics if `column` is out of range.
    #[inline]
    pub fn get(&self, column: usize) -> &str {
        &self.0[column]
    }


    /// Returns `true` if the value at `column` is missing.
    #[inline]
    pub fn is_missing(&self, column: usize) -> bool {
        self.0[column].is_empty()
    }


    /// Returns the number of columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }


    /// Returns `true` if this row has no column.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }


    /// Returns the values in column order.
    #[inline]
    pub fn values(&self) -> &[String] {
        &self.0[..]
    }
}


impl<T> FromIterator<T> for Row
    where T: AsRef<str>
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values = iter.into_iter()
            .map(|value| normalize_field(value.as_ref()))
            .collect();
        Self(values)
    }
}


impl From<Vec<String>> for Row {
    #[inline]
    fn from(values: Vec<String>) -> Self {
        values.into_iter().collect()
    }
}


impl Index<usize> for Row {
    type Output = str;
    #[inline]
    fn index(&self, column: usize) -> &Self::Output {
        self.get(column)
    }
}


/// Trims a raw field and maps the missing marker `?` to the empty string.
#[inline]
pub(crate) fn normalize_field(raw: &str) -> String {
    let field = raw.trim();
    if field == MISSING_MARKER {
        String::new()
    } else {
        field.to_string()
    }
}
