//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use crate::{Attribute, Row, Sample};
use crate::error::Result;
use super::node::*;

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// The name of the root element of the nested-element format.
pub const XML_ROOT: &str = "ID3DecisionTree";


/// Decision tree classifier.
/// This struct is a wrapper of the root `Node`
/// together with the target attribute it predicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
    target: Attribute,
}


impl DecisionTreeClassifier {
    #[inline]
    pub(super) fn new(root: Node, target: Attribute) -> Self {
        Self { root, target }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the target attribute.
    #[inline]
    pub fn target(&self) -> &Attribute {
        &self.target
    }


    /// Returns the depth of the tree.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the number of leaves of the tree.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Predict the label of `row`.
    /// See [`Node::predict`].
    #[inline]
    pub fn predict(&self, row: &Row) -> Option<&str> {
        self.root.predict(row)
    }


    /// Predict the labels of all rows in `sample`.
    pub fn predict_all(&self, sample: &Sample) -> Vec<Option<&str>> {
        sample.rows()
            .iter()
            .map(|row| self.predict(row))
            .collect()
    }


    /// Returns the fraction of the rows in `sample`
    /// whose label is predicted correctly.
    /// Rows with a missing target value are not counted.
    pub fn accuracy(&self, sample: &Sample) -> f64 {
        let column = sample.target().column();
        let (n_rows, n_correct) = sample.rows()
            .iter()
            .filter(|row| !row.is_missing(column))
            .fold((0_usize, 0_usize), |(n, c), row| {
                let hit = self.predict(row) == Some(row.get(column));
                (n + 1, c + usize::from(hit))
            });

        if n_rows == 0 { return 0.0; }
        n_correct as f64 / n_rows as f64
    }


    /// Returns the tree in the dot format of Graphviz.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("graph DecisionTree {\n");
        let info = self.root.to_dot_info(0).0;
        info.into_iter()
            .for_each(|row| dot.push_str(&row));
        dot.push_str("}\n");
        dot
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(self.to_dot().as_bytes())?;
        Ok(())
    }


    /// Returns the tree in the nested-element format:
    /// each split value is an element named after the split attribute,
    /// carrying the value as its `value` attribute,
    /// and the label of a leaf is the text of its element.
    /// ```xml
    /// <?xml version="1.0" encoding="UTF-8"?>
    /// <ID3DecisionTree>
    ///   <outlook value="sunny">
    ///     <humidity value="high">no</humidity>
    ///     <humidity value="normal">yes</humidity>
    ///   </outlook>
    ///   <outlook value="overcast">yes</outlook>
    /// </ID3DecisionTree>
    /// ```
    pub fn to_xml(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"
        );

        match &self.root {
            Node::Leaf { label: Some(label) } => {
                xml.push_str(&format!(
                    "<{XML_ROOT}>{}</{XML_ROOT}>\n", escape_xml(label)
                ));
            },
            Node::Leaf { label: None } => {
                xml.push_str(&format!("<{XML_ROOT}/>\n"));
            },
            Node::Branch { .. } => {
                xml.push_str(&format!("<{XML_ROOT}>\n"));
                self.root.write_xml_children(&mut xml, 1);
                xml.push_str(&format!("</{XML_ROOT}>\n"));
            },
        }
        xml
    }


    /// Write the current decision tree to a file
    /// in the nested-element format.
    #[inline]
    pub fn to_xml_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(self.to_xml().as_bytes())?;
        Ok(())
    }


    /// Serialize the tree to a JSON string.
    #[inline]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }


    /// Deserialize a tree from a JSON string.
    #[inline]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
