use std::path::Path;
use std::fs;

use log::warn;
use polars::prelude::*;

use crate::error::{Result, TreeError};
use super::attribute::*;
use super::row::*;


const ATTRIBUTE_MARKER: &str = "@attribute";
const DATA_MARKER: &str = "@data";
const COMMENT_MARKER: char = '%';


/// Struct `Sample` holds the rows of a nominal data set,
/// the attributes describing their columns,
/// and the target attribute.
#[derive(Debug, Clone)]
pub struct Sample {
    registry: AttributeRegistry,
    rows: Vec<Row>,
    target: usize,
    n_discarded: usize,
}


impl Sample {
    /// Construct a `Sample` from its components.
    ///
    /// Rows whose column count differs from the number of attributes
    /// are discarded (and logged), never reported as an error.
    /// Returns `TreeError::UnknownTarget` if `target` is not declared.
    pub fn from_parts<S>(
        registry: AttributeRegistry,
        rows: Vec<Row>,
        target: S,
    ) -> Result<Self>
        where S: AsRef<str>
    {
        let target = target.as_ref();
        if registry.is_empty() {
            return Err(TreeError::NoAttributes);
        }
        let target = registry.find(target)
            .ok_or_else(|| TreeError::UnknownTarget(target.to_string()))?
            .column();

        let n_attributes = registry.len();
        let n_given = rows.len();
        let rows = rows.into_iter()
            .enumerate()
            .filter_map(|(i, row)| {
                if row.len() == n_attributes { return Some(row); }
                warn!(
                    "Row {i} has {} fields but {n_attributes} attributes \
                     are declared; the row is discarded.",
                    row.len()
                );
                None
            })
            .collect::<Vec<_>>();
        let n_discarded = n_given - rows.len();

        Ok(Self { registry, rows, target, n_discarded, })
    }


    /// Read a file in the attribute-declaration format.
    /// See [`Sample::from_arff_str`] for the format.
    pub fn from_arff<P, S>(file: P, target: S) -> Result<Self>
        where P: AsRef<Path>,
              S: AsRef<str>,
    {
        let text = fs::read_to_string(file)?;
        Self::from_arff_str(&text, target)
    }


    /// Parse a text in the attribute-declaration format:
    /// ```txt
    /// @relation weather
    /// @attribute outlook {sunny, overcast, rainy}
    /// @attribute windy {TRUE, FALSE}
    /// @attribute play {yes, no}
    /// @data
    /// sunny,FALSE,no
    /// overcast,?,yes
    /// ```
    /// Attributes occupy the columns in declaration order.
    /// Blank lines and lines starting with `%` are skipped.
    /// An empty field or `?` is a missing value.
    pub fn from_arff_str<S>(text: &str, target: S) -> Result<Self>
        where S: AsRef<str>
    {
        let mut registry = AttributeRegistry::new();
        let mut lines = text.lines().enumerate();


        // Header part.
        let mut has_data = false;
        for (i, line) in lines.by_ref() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }

            let lower = line.to_ascii_lowercase();
            if lower.starts_with(DATA_MARKER) {
                has_data = true;
                break;
            }
            if !lower.starts_with(ATTRIBUTE_MARKER) { continue; }

            let (name, values) = parse_declaration(line)
                .ok_or_else(|| TreeError::MalformedDeclaration {
                    line: i + 1,
                    content: line.to_string(),
                })?;
            let column = registry.len();
            registry.register_attribute(name, values, column)?;
        }

        if !has_data {
            return Err(TreeError::MissingDataSection);
        }


        // Data part.
        let rows = lines
            .map(|(_, line)| line.trim())
            .filter(|line| {
                !line.is_empty() && !line.starts_with(COMMENT_MARKER)
            })
            .map(|line| line.split(',').collect::<Row>())
            .collect::<Vec<_>>();

        Self::from_parts(registry, rows, target)
    }


    /// Convert a `polars::DataFrame` into `Sample`.
    /// Every column is cast to a string column;
    /// the domain of each attribute is the set of its non-missing values
    /// in order of appearance. Null cells are missing values.
    /// A column without any non-missing value has no domain
    /// and is skipped (and logged).
    pub fn from_dataframe<S>(data: &DataFrame, target: S) -> Result<Self>
        where S: AsRef<str>
    {
        let mut registry = AttributeRegistry::new();
        let mut columns: Vec<Vec<String>> = Vec::with_capacity(data.width());

        for series in data.get_columns() {
            let series = series.cast(&DataType::Utf8)?;
            let values = series.utf8()?
                .into_iter()
                .map(|value| normalize_field(value.unwrap_or_default()))
                .collect::<Vec<_>>();

            let mut domain: Vec<&str> = Vec::new();
            for value in values.iter().filter(|v| !v.is_empty()) {
                if !domain.contains(&value.as_str()) {
                    domain.push(value);
                }
            }

            if domain.is_empty() {
                warn!(
                    "Column `{}` has no value and is skipped.",
                    series.name()
                );
                continue;
            }

            let column = registry.len();
            registry.register_attribute(series.name(), domain, column)?;
            columns.push(values);
        }

        let rows = (0..data.height())
            .map(|i| columns.iter().map(|col| &col[i]).collect::<Row>())
            .collect::<Vec<_>>();

        Self::from_parts(registry, rows, target)
    }


    /// Returns the attribute registry.
    #[inline]
    pub fn registry(&self) -> &AttributeRegistry {
        &self.registry
    }


    /// Returns the rows.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows[..]
    }


    /// Returns the target attribute.
    #[inline]
    pub fn target(&self) -> &Attribute {
        self.registry.get(self.target)
    }


    /// Returns the non-target attributes in column order.
    #[inline]
    pub fn features(&self) -> Vec<&Attribute> {
        self.registry.all_attributes_except_target(self.target())
    }


    /// Returns the number of rows discarded while loading.
    #[inline]
    pub fn n_discarded(&self) -> usize {
        self.n_discarded
    }


    /// Returns the pair of the number of rows and attributes.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.registry.len())
    }


    /// Split `self` into a training part and a test part.
    /// The rows `ix[start..end]` form the test part
    /// and the rest the training part.
    pub fn split(&self, ix: &[usize], start: usize, end: usize)
        -> (Self, Self)
    {
        let end = end.min(ix.len());
        let start = start.min(end);

        let test = ix[start..end].iter()
            .map(|&i| self.rows[i].clone())
            .collect::<Vec<_>>();
        let train = ix[..start].iter()
            .chain(&ix[end..])
            .map(|&i| self.rows[i].clone())
            .collect::<Vec<_>>();

        let with_rows = |rows: Vec<Row>| Self {
            registry: self.registry.clone(),
            rows,
            target: self.target,
            n_discarded: 0,
        };
        (with_rows(train), with_rows(test))
    }
}


/// Parse `@attribute <name> {v1, v2, ...}`.
fn parse_declaration(line: &str) -> Option<(&str, Vec<&str>)> {
    let rest = line.get(ATTRIBUTE_MARKER.len()..)?;
    let open = rest.find('{')?;
    let close = rest.rfind('}')?;
    if close < open { return None; }

    let name = rest[..open].trim();
    if name.is_empty() { return None; }

    let values = rest[open + 1..close].split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>();

    Some((name, values))
}
