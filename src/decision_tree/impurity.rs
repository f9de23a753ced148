//! Impurity measures over nominal columns.
//!
//! Every function here is pure.
//! A row whose value in a relevant column is missing (the empty string)
//! is ignored, so leaving such a row in the input
//! gives the same value as removing it.
//! An input without any countable row has impurity `0`.
use crate::Row;

use std::collections::BTreeMap;


/// Added to the denominator of the gain ratios.
pub const EPSILON: f64 = 1e-7;


/// Returns the Shannon entropy (natural log)
/// of the value distribution of `column`.
pub fn entropy_impurity(rows: &[&Row], column: usize) -> f64 {
    let counts = value_counts(rows, column);
    entropy_from_counts(&counts)
}


/// Returns the entropy of `class_column`
/// conditioned on the partition by `split_column`.
/// Each group of the partition is weighted by its share of the rows.
pub fn conditional_entropy_impurity(
    rows: &[&Row],
    split_column: usize,
    class_column: usize,
) -> f64
{
    conditional_impurity(
        rows, split_column, class_column, entropy_from_counts
    )
}


/// Returns the Gini impurity `1 - Σ_v p_v^2` of `column`.
pub fn gini_impurity(rows: &[&Row], column: usize) -> f64 {
    let counts = value_counts(rows, column);
    gini_from_counts(&counts)
}


/// Returns the Gini impurity of `class_column`
/// conditioned on the partition by `split_column`.
pub fn conditional_gini_impurity(
    rows: &[&Row],
    split_column: usize,
    class_column: usize,
) -> f64
{
    conditional_impurity(
        rows, split_column, class_column, gini_from_counts
    )
}


/// Returns the information gain `H(class) - H(class | split)`.
pub fn information_gain(
    rows: &[&Row],
    split_column: usize,
    class_column: usize,
) -> f64
{
    let rows = complete_rows(rows, split_column, class_column);
    entropy_impurity(&rows, class_column)
        - conditional_entropy_impurity(&rows, split_column, class_column)
}


/// Returns the information gain ratio
/// `H(class) / (H(class | split) + EPSILON)`.
pub fn information_gain_ratio(
    rows: &[&Row],
    split_column: usize,
    class_column: usize,
) -> f64
{
    let rows = complete_rows(rows, split_column, class_column);
    entropy_impurity(&rows, class_column)
        / (conditional_entropy_impurity(&rows, split_column, class_column)
            + EPSILON)
}


/// Returns the Gini gain `G(class) - G(class | split)`.
pub fn gini_gain(
    rows: &[&Row],
    split_column: usize,
    class_column: usize,
) -> f64
{
    let rows = complete_rows(rows, split_column, class_column);
    gini_impurity(&rows, class_column)
        - conditional_gini_impurity(&rows, split_column, class_column)
}


/// Returns the Gini gain ratio
/// `G(class) / (G(class | split) + EPSILON)`.
pub fn gini_gain_ratio(
    rows: &[&Row],
    split_column: usize,
    class_column: usize,
) -> f64
{
    let rows = complete_rows(rows, split_column, class_column);
    gini_impurity(&rows, class_column)
        / (conditional_gini_impurity(&rows, split_column, class_column)
            + EPSILON)
}


/// Keeps the rows that have both `split_column` and `class_column`.
#[inline]
fn complete_rows<'a>(
    rows: &[&'a Row],
    split_column: usize,
    class_column: usize,
) -> Vec<&'a Row>
{
    rows.iter()
        .copied()
        .filter(|row| {
            !row.is_missing(split_column) && !row.is_missing(class_column)
        })
        .collect()
}


/// Counts the non-missing values of `column`.
/// The counts are ordered by value so that summations are reproducible.
fn value_counts(rows: &[&Row], column: usize) -> Vec<usize> {
    let mut counter: BTreeMap<&str, usize> = BTreeMap::new();
    for row in rows.iter().filter(|row| !row.is_missing(column)) {
        *counter.entry(row.get(column)).or_insert(0) += 1;
    }
    counter.into_values().collect()
}


fn conditional_impurity<F>(
    rows: &[&Row],
    split_column: usize,
    class_column: usize,
    impurity: F,
) -> f64
    where F: Fn(&[usize]) -> f64
{
    let mut groups: BTreeMap<&str, BTreeMap<&str, usize>> = BTreeMap::new();
    let rows = complete_rows(rows, split_column, class_column);
    for row in rows {
        *groups.entry(row.get(split_column))
            .or_default()
            .entry(row.get(class_column))
            .or_insert(0) += 1;
    }

    let total = groups.values()
        .flat_map(|counter| counter.values())
        .sum::<usize>();
    if total == 0 { return 0.0; }

    groups.into_values()
        .map(|counter| {
            let counts = counter.into_values().collect::<Vec<_>>();
            let size = counts.iter().sum::<usize>() as f64;
            (size / total as f64) * impurity(&counts)
        })
        .sum::<f64>()
}


#[inline]
fn entropy_from_counts(counts: &[usize]) -> f64 {
    let total = counts.iter().sum::<usize>();
    if total == 0 { return 0.0; }

    let total = total as f64;
    counts.iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.ln()
        })
        .sum::<f64>()
}


#[inline]
fn gini_from_counts(counts: &[usize]) -> f64 {
    let total = counts.iter().sum::<usize>();
    if total == 0 { return 0.0; }

    let total = total as f64;
    let correct = counts.iter()
        .map(|&c| (c as f64 / total).powi(2))
        .sum::<f64>();

    (1.0 - correct).max(0.0)
}
