//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data
//!
//! Every checker panics on violation.
//! A violated pre-condition is a bug of the caller,
//! not a recoverable state.

use crate::Sample;

use std::collections::BTreeSet;
use std::cmp::Ordering;


/// Check whether the sample is non-empty.
#[inline(always)]
pub(crate) fn sample(sample: &Sample) {
    let (n_sample, n_feature) = sample.shape();

    assert!(n_sample > 0, "The sample has no examples");
    assert!(n_feature > 0, "The sample has no features");
}


/// Check whether `sample` can be used for training:
/// non-empty, the target is assigned to every row,
/// and every target value is an integer.
#[inline(always)]
pub(crate) fn training_sample(sample: &Sample) {
    self::sample(sample);

    let n_sample = sample.shape().0;
    let n_target = sample.target().len();
    if n_sample != n_target {
        panic!(
            "The sample has {n_sample} rows but {n_target} labels.\n\
             Use `Sample::set_target(\"Column Name\")`."
        );
    }

    let non_integers = sample.target()
        .iter()
        .filter(|&yi| !yi.trunc().eq(yi))
        .collect::<Vec<_>>();
    if !non_integers.is_empty() {
        let line = non_integers.iter().take(5)
            .map(|yi| yi.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        panic!(
            "Target values are non-integer types.\n\
             Ex. [{line}, ...]."
        );
    }
}


/// Check whether `sample` is a training set for binary classification
/// with labels `{0, 1}` or `{-1, +1}`.
/// Returns the pair `(negative, positive)` of the labels.
pub(crate) fn binary_sample(sample: &Sample) -> (i64, i64) {
    training_sample(sample);

    let set = sample.target()
        .iter()
        .map(|&yi| yi as i64)
        .collect::<BTreeSet<_>>();
    let n_label = set.len();
    match n_label.cmp(&2) {
        Ordering::Greater => {
            panic!(
                "The target values take more than 2 kinds. \
                 Expected 2 kinds, got {n_label} kinds."
            );
        },
        Ordering::Less => {
            panic!(
                "The target values take less than 2 kinds. \
                 Expected 2 kinds, got {n_label} kinds."
            );
        },
        Ordering::Equal => {},
    }

    let labels = set.into_iter().collect::<Vec<_>>();
    let (neg, pos) = (labels[0], labels[1]);
    assert!(
        pos == 1 && (neg == 0 || neg == -1),
        "Binary labels must be {{0, 1}} or {{-1, +1}}. \
         Got {{{neg}, {pos}}}."
    );
    (neg, pos)
}


/// Check whether `dist` is a weight vector over `n_sample` examples.
#[inline(always)]
pub(crate) fn distribution(dist: &[f64], n_sample: usize) {
    assert_eq!(
        dist.len(), n_sample,
        "The weight vector has length {}, expected {n_sample}",
        dist.len(),
    );
    assert!(
        dist.iter().all(|d| d.is_finite() && *d >= 0f64),
        "Weights must be finite and non-negative"
    );
}


/// Check whether the minimum node size is valid.
#[inline(always)]
pub(crate) fn min_size(size: usize) {
    assert!(size > 0, "The minimum node size must be positive");
}


/// Check whether `train` and `test` share the feature space.
#[inline(always)]
pub(crate) fn same_features(train: &Sample, test: &Sample) {
    let n_train = train.shape().1;
    let n_test = test.shape().1;
    assert_eq!(
        n_train, n_test,
        "The training sample has {n_train} features \
         but the test sample has {n_test}"
    );
}


/// Check whether the zero-error threshold is valid.
#[inline(always)]
pub(crate) fn epsilon(eps: f64) {
    assert!(
        eps > 0f64 && eps < 0.5,
        "epsilon must be in (0, 0.5). got {eps}."
    );
}
