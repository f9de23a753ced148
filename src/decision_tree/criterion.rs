//! Defines the splitting criteria of the decision tree.
use rayon::prelude::*;

use serde::{Serialize, Deserialize};

use std::fmt;
use std::cmp::Ordering;

use log::trace;

use crate::{Attribute, Row};
use super::impurity;


/// Score for a splitting.
/// This is just a wrapper for `f64`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub(crate) struct Score(pub(crate) f64);


impl From<f64> for Score {
    #[inline(always)]
    fn from(score: f64) -> Self {
        Self(score)
    }
}


impl PartialEq for Score {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}


impl PartialOrd for Score {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}


/// Splitting criteria for growing decision tree.
/// Every criterion is maximized.
/// * `Criterion::InfoGain` is the classic ID3 rule.
/// * `Criterion::GiniGainRatio` is the default one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Criterion {
    /// Information gain `H(y) - H(y | x)`.
    InfoGain,
    /// Information gain ratio `H(y) / (H(y | x) + ε)`.
    InfoGainRatio,
    /// Gini gain `G(y) - G(y | x)`.
    GiniGain,
    /// Gini gain ratio `G(y) / (G(y | x) + ε)`.
    #[default]
    GiniGainRatio,
}


impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InfoGain => "Information gain",
            Self::InfoGainRatio => "Information gain ratio",
            Self::GiniGain => "Gini gain",
            Self::GiniGainRatio => "Gini gain ratio",
        };

        write!(f, "{name}")
    }
}


impl Criterion {
    /// Returns the score of splitting `rows` on `split_column`.
    #[inline]
    pub fn score(
        &self,
        rows: &[&Row],
        split_column: usize,
        class_column: usize,
    ) -> f64
    {
        match self {
            Self::InfoGain
                => impurity::information_gain(rows, split_column, class_column),
            Self::InfoGainRatio
                => impurity::information_gain_ratio(rows, split_column, class_column),
            Self::GiniGain
                => impurity::gini_gain(rows, split_column, class_column),
            Self::GiniGainRatio
                => impurity::gini_gain_ratio(rows, split_column, class_column),
        }
    }


    /// Returns the candidate that maximizes the criterion,
    /// together with its score.
    /// Candidates are scored in parallel;
    /// on ties, the earliest candidate in `candidates` wins.
    ///
    /// # Panics
    /// Panics if `candidates` is empty.
    pub(crate) fn best_split<'a>(
        &self,
        candidates: &[&'a Attribute],
        rows: &[&Row],
        class_column: usize,
    ) -> (&'a Attribute, Score)
    {
        assert!(
            !candidates.is_empty(),
            "Split attribute is selected from an empty eligible set"
        );

        let scores = candidates.par_iter()
            .map(|attr| {
                let score = self.score(rows, attr.column(), class_column);
                Score::from(score)
            })
            .collect::<Vec<_>>();

        let mut best = 0_usize;
        for (i, score) in scores.iter().enumerate() {
            trace!(
                "{self} of `{}`: {:.6}", candidates[i].name(), score.0
            );
            if *score > scores[best] {
                best = i;
            }
        }

        (candidates[best], scores[best])
    }
}
