use minitrees::prelude::*;
use minitrees::common::uniform_weights;


fn assert_close(error: f64, expected: f64) {
    assert!(
        (error - expected).abs() < 1e-12,
        "expected {expected}, got {error}",
    );
}


#[test]
fn all_labels_match() {
    let error = weighted_misclassification(&[1, 1, 1], 1, None);
    assert_eq!(error, 0.0);
}


#[test]
fn no_label_matches() {
    let error = weighted_misclassification(&[1, 1, 1], 0, None);
    assert_eq!(error, 1.0);
}


#[test]
fn half_of_the_labels_match() {
    // Without weights the error is the exact fraction of mismatches.
    let error = weighted_misclassification(&[1, 1, 1, 0, 0, 0], 1, None);
    assert_eq!(error, 0.5);

    let error = weighted_misclassification(&[0, 1, 2, 0, 1, 2], 0, None);
    assert_eq!(error, 4.0 / 6.0);
}


#[test]
fn uniform_weights_agree_with_no_weights() {
    let labels = [1, 1, 1, 0, 0, 0];
    let weights = uniform_weights(labels.len());
    let weighted = weighted_misclassification(&labels, 1, Some(&weights));
    let plain = weighted_misclassification(&labels, 1, None);
    assert_close(weighted, plain);
}


#[test]
fn weights_are_normalized() {
    let labels = [0, 1, 1];

    let error = weighted_misclassification(&labels, 1, Some(&[0.2, 0.3, 0.5]));
    assert_close(error, 0.2);

    // The total weight need not be `1`.
    let error = weighted_misclassification(&labels, 1, Some(&[2.0, 1.0, 1.0]));
    assert_close(error, 0.5);
}


#[test]
fn zero_total_weight() {
    let error = weighted_misclassification(&[0, 1], 1, Some(&[0.0, 0.0]));
    assert_eq!(error, 0.0);
}


#[test]
fn no_labels() {
    assert_eq!(weighted_misclassification(&[], 1, None), 0.0);
}


#[test]
#[should_panic]
fn weights_of_another_length() {
    let _ = weighted_misclassification(&[0, 1], 1, Some(&[1.0]));
}


#[test]
fn vote_prefers_the_smallest_label_on_a_tie() {
    assert_eq!(vote(vec![3, 3, 1]), 3);
    assert_eq!(vote(vec![2, 1, 2, 1]), 1);
    assert_eq!(vote(vec![-1, 1]), -1);
}
