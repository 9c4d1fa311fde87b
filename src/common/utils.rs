//! This file provides the label statistics shared by every learner:
//! the majority vote and the weighted misclassification error.
use std::collections::BTreeMap;


/// Returns the uniform weight vector `[1/n, ..., 1/n]`.
/// Every learner that accepts optional weights resolves
/// a missing weight vector through this function.
#[inline(always)]
pub fn uniform_weights(n_sample: usize) -> Vec<f64> {
    assert!(n_sample > 0, "Cannot build weights over an empty sample");
    let uni = 1f64 / n_sample as f64;
    vec![uni; n_sample]
}


/// Returns the most frequent label in `labels`.
/// If two or more labels occur equally often,
/// the smallest one is returned.
///
/// Panics if `labels` is empty.
pub fn vote<T>(labels: T) -> i64
    where T: IntoIterator<Item = i64>,
{
    let mut counter: BTreeMap<i64, usize> = BTreeMap::new();
    for y in labels {
        *counter.entry(y).or_insert(0) += 1;
    }

    // `BTreeMap` iterates in ascending order of labels,
    // so a strict comparison keeps the smallest label on a tie.
    let mut best: Option<(i64, usize)> = None;
    for (y, count) in counter {
        match best {
            Some((_, c)) if c >= count => {},
            _ => { best = Some((y, count)); },
        }
    }
    best.map(|(y, _)| y)
        .unwrap_or_else(|| panic!("Cannot vote over an empty set of labels"))
}


/// Returns the total weight on the labels not equal to `class`.
/// No normalization is applied.
#[inline(always)]
pub fn misclassified_mass(labels: &[i64], class: i64, weights: &[f64])
    -> f64
{
    labels.iter()
        .zip(weights)
        .filter(|&(&y, _)| y != class)
        .map(|(_, &w)| w)
        .sum::<f64>()
}


/// Computes the (optionally weighted) misclassification error
/// of assigning `class` to every label in `labels`.
///
/// The error is the fraction of the total weight
/// put on the labels differing from `class`.
/// If `weights` is `None`, every label counts once,
/// so that the error is exactly the fraction of mismatches.
pub fn weighted_misclassification(
    labels: &[i64],
    class: i64,
    weights: Option<&[f64]>,
) -> f64
{
    let n_sample = labels.len();
    let Some(weights) = weights else {
        if n_sample == 0 { return 0f64; }
        let n_wrong = labels.iter().filter(|&&y| y != class).count();
        return n_wrong as f64 / n_sample as f64;
    };
    assert_eq!(
        n_sample, weights.len(),
        "The number of labels ({n_sample}) differs \
         from the number of weights ({})",
        weights.len(),
    );

    let total = weights.iter().sum::<f64>();
    if total <= 0f64 { return 0f64; }

    misclassified_mass(labels, class, weights) / total
}


/// Returns `ln(sum(exp(values)))` without overflow.
#[inline(always)]
pub(crate) fn log_sum_exp(values: &[f64]) -> f64 {
    let max = values.iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() { return max; }

    let sum = values.iter()
        .map(|v| (v - max).exp())
        .sum::<f64>();
    max + sum.ln()
}
