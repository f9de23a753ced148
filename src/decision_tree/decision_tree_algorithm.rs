use log::{debug, info, warn};
use serde::{Serialize, Deserialize};

use crate::{Attribute, Row, Sample};
use super::{
    node::*,
    criterion::*,
    train_node::*,
    decision_tree_classifier::DecisionTreeClassifier,
};


use std::fmt;
use std::collections::BTreeSet;


/// The rule that labels a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LeafLabel {
    /// The target value of the first row on the leaf.
    /// When the attributes run out before the rows are pure,
    /// the remaining impurity is not resolved by a vote.
    #[default]
    FirstRow,
    /// The most frequent target value on the leaf.
    /// Ties go to the value that appears first.
    /// This deviates from `FirstRow` only on impure leaves.
    Majority,
}


impl fmt::Display for LeafLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FirstRow => "First row",
            Self::Majority => "Majority vote",
        };

        write!(f, "{name}")
    }
}


impl LeafLabel {
    /// Returns the label of a leaf holding `rows`.
    /// Rows with a missing target value are ignored.
    pub fn label(&self, rows: &[&Row], class_column: usize) -> Option<String> {
        let mut labels = rows.iter()
            .filter(|row| !row.is_missing(class_column))
            .map(|row| row.get(class_column));

        match self {
            Self::FirstRow => labels.next().map(str::to_string),
            Self::Majority => {
                let mut counter: Vec<(&str, usize)> = Vec::new();
                for label in labels {
                    match counter.iter_mut().find(|(l, _)| *l == label) {
                        Some((_, count)) => { *count += 1; },
                        None => { counter.push((label, 1)); },
                    }
                }

                let mut best: Option<(&str, usize)> = None;
                for (label, count) in counter {
                    if best.map_or(true, |(_, c)| count > c) {
                        best = Some((label, count));
                    }
                }
                best.map(|(label, _)| label.to_string())
            },
        }
    }
}


/// The Decision Tree algorithm for nominal attributes.
/// Given a [`Sample`], [`DecisionTree`] outputs a decision tree classifier
/// named [`DecisionTreeClassifier`]
/// under the specified parameters.
///
/// Each node is either labeled as a leaf,
/// when it has no eligible attribute left or its rows are pure,
/// or split on the eligible attribute that maximizes the [`Criterion`],
/// with one child per legal value of that attribute.
/// The split attribute is not eligible in the sub-trees,
/// so the depth of the tree is at most the number of non-target attributes.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use nominal_tree::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/weather.nominal.arff")
///     .target_feature("play")
///     .read()?;
///
/// let tree = DecisionTreeBuilder::new(&sample)
///     .criterion(Criterion::GiniGainRatio)
///     .build();
/// let f = tree.fit();
///
/// println!("accuracy (train) is: {}", f.accuracy(&sample));
/// f.to_xml_file("result.xml")?;
/// # Ok::<(), nominal_tree::TreeError>(())
/// ```
pub struct DecisionTree<'a> {
    sample: &'a Sample,
    criterion: Criterion,
    leaf_label: LeafLabel,
}


impl<'a> DecisionTree<'a> {
    #[inline]
    pub(super) fn from_components(
        sample: &'a Sample,
        criterion: Criterion,
        leaf_label: LeafLabel,
    ) -> Self
    {
        Self { sample, criterion, leaf_label, }
    }


    /// Grow a decision tree on the whole sample.
    /// This method computes as follows;
    /// 1. grow a tree of `TrainNode`s, which hold the rows
    ///     and the eligible attributes while they are unresolved,
    /// 2. convert the `TrainNode`s into `Node`s.
    pub fn fit(&self) -> DecisionTreeClassifier {
        let sample = self.sample;
        let target = sample.target();
        let (n_rows, _) = sample.shape();

        let eligible = sample.features()
            .into_iter()
            .map(Attribute::column)
            .collect::<BTreeSet<_>>();
        let n_features = eligible.len();

        let mut root = TrainNode::new((0..n_rows).collect(), eligible, 0);
        self.grow_node(&mut root);
        let root = Node::from(root);

        info!(
            "Grew a tree on {n_rows} rows and {n_features} attributes \
             (target: `{}`, {}): depth {}, {} leaves.",
            target.name(),
            self.criterion,
            root.depth(),
            root.n_leaves(),
        );

        DecisionTreeClassifier::new(root, target.clone())
    }


    /// Resolve `node` and, if it splits, all of its descendants.
    fn grow_node(&self, node: &mut TrainNode) {
        let sample = self.sample;
        let class_column = sample.target().column();
        let rows = node.indices()
            .iter()
            .map(|&i| &sample.rows()[i])
            .collect::<Vec<_>>();


        // If no attribute is left, or the rows are pure,
        // construct a leaf node.
        if node.eligible().is_empty() || is_pure(&rows, class_column) {
            let label = self.leaf_label.label(&rows, class_column);
            node.mark_leaf(label);
            return;
        }


        // Find the best attribute based on the `criterion`.
        let registry = sample.registry();
        let candidates = node.eligible()
            .iter()
            .map(|&column| registry.get(column))
            .collect::<Vec<_>>();
        let (attribute, score) = self.criterion.best_split(
            &candidates[..], &rows[..], class_column
        );
        debug!(
            "Split {} rows at depth {} on `{}` ({} = {:.6}).",
            rows.len(), node.depth(), attribute.name(), self.criterion, score.0,
        );


        // Distribute the rows to the children.
        let children = self.partition(node, attribute);
        node.split(attribute.clone(), children);


        // Grow the sub-trees.
        for child in node.children_mut() {
            self.grow_node(child);
        }
    }


    /// Creates one unresolved child per legal value of `attribute`.
    /// Rows whose value of `attribute` is missing or illegal
    /// are not passed to any child.
    fn partition(&self, node: &TrainNode, attribute: &Attribute)
        -> Vec<(String, TrainNode)>
    {
        let rows = self.sample.rows();
        let column = attribute.column();
        let values = attribute.values();

        let mut buckets = vec![Vec::new(); values.len()];
        let (mut n_missing, mut n_illegal) = (0_usize, 0_usize);
        for &i in node.indices() {
            let row = &rows[i];
            if row.is_missing(column) {
                n_missing += 1;
                continue;
            }
            match values.iter().position(|v| v == row.get(column)) {
                Some(k) => { buckets[k].push(i); },
                None => { n_illegal += 1; },
            }
        }

        if n_missing > 0 {
            debug!(
                "{n_missing} rows miss `{}` and are not split further.",
                attribute.name()
            );
        }
        if n_illegal > 0 {
            warn!(
                "{n_illegal} rows have a value of `{}` \
                 outside of its domain and are not split further.",
                attribute.name()
            );
        }

        let mut eligible = node.eligible().clone();
        eligible.remove(&column);

        values.iter()
            .cloned()
            .zip(buckets)
            .map(|(value, indices)| {
                let child = TrainNode::new(
                    indices, eligible.clone(), node.depth() + 1
                );
                (value, child)
            })
            .collect()
    }
}


/// Returns `true` if the non-missing target values of `rows`
/// are all the same.
fn is_pure(rows: &[&Row], class_column: usize) -> bool {
    let mut labels = rows.iter()
        .filter(|row| !row.is_missing(class_column))
        .map(|row| row.get(class_column));

    match labels.next() {
        None => true,
        Some(first) => labels.all(|label| label == first),
    }
}


#[cfg(test)]
mod tests {
    use super::*;


    fn rows(raw: &[&str]) -> Vec<Row> {
        raw.iter()
            .map(|label| [*label].into_iter().collect::<Row>())
            .collect()
    }


    #[test]
    fn purity_ignores_missing_labels() {
        let data = rows(&["yes", "", "yes"]);
        let refs = data.iter().collect::<Vec<_>>();
        assert!(is_pure(&refs, 0));
        assert!(is_pure(&[], 0));

        let data = rows(&["yes", "no"]);
        let refs = data.iter().collect::<Vec<_>>();
        assert!(!is_pure(&refs, 0));
    }


    #[test]
    fn leaf_labels() {
        let data = rows(&["", "no", "yes", "yes"]);
        let refs = data.iter().collect::<Vec<_>>();

        assert_eq!(LeafLabel::FirstRow.label(&refs, 0).as_deref(), Some("no"));
        assert_eq!(LeafLabel::Majority.label(&refs, 0).as_deref(), Some("yes"));

        let data = rows(&["no", "yes"]);
        let refs = data.iter().collect::<Vec<_>>();
        assert_eq!(LeafLabel::Majority.label(&refs, 0).as_deref(), Some("no"));

        assert_eq!(LeafLabel::FirstRow.label(&[], 0), None);
        assert_eq!(LeafLabel::Majority.label(&[], 0), None);
    }
}
