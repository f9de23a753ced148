use crate::Sample;
use super::criterion::*;
use super::decision_tree_algorithm::*;


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use nominal_tree::prelude::*;
///
/// # let sample = Sample::from_arff("weather.nominal.arff", "play")?;
/// let tree = DecisionTreeBuilder::new(&sample)
///     .criterion(Criterion::InfoGain)
///     .leaf_label(LeafLabel::Majority)
///     .build();
/// # Ok::<(), nominal_tree::TreeError>(())
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a> {
    sample: &'a Sample,
    criterion: Criterion,
    leaf_label: LeafLabel,
}


impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// criterion: Criterion::GiniGainRatio,
    /// leaf_label: LeafLabel::FirstRow,
    /// ```
    pub fn new(sample: &'a Sample) -> Self {
        let criterion = Criterion::default();
        let leaf_label = LeafLabel::default();

        Self { sample, criterion, leaf_label, }
    }


    /// Set the node splitting rule.
    /// Default value is `Criterion::GiniGainRatio`.
    /// See [`Criterion`] for other rules.
    #[inline]
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }


    /// Set the leaf labeling rule.
    /// Default value is `LeafLabel::FirstRow`.
    #[inline]
    pub fn leaf_label(mut self, leaf_label: LeafLabel) -> Self {
        self.leaf_label = leaf_label;
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree<'a> {
        DecisionTree::from_components(
            self.sample, self.criterion, self.leaf_label
        )
    }
}
