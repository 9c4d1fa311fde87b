//! Brute-force search of the best `(feature, threshold)` pair.
//!
//! Every observed value of every feature is tried as a threshold,
//! so a node with `n` rows and `d` features costs `O(d * n^2)`.
use rayon::prelude::*;

use crate::Sample;
use crate::common::utils::misclassified_mass;

use super::split_rule::{Splitter, Side};

use std::collections::BTreeSet;


/// The outcome of [`best_split`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split {
    /// Column index of the selected feature.
    pub feature: usize,
    /// Rows with `x[feature] < threshold` go below.
    pub threshold: f64,
    /// The class minimizing the misclassified mass of the `below` side.
    pub below_class: i64,
    /// The class minimizing the misclassified mass of the `above` side.
    pub above_class: i64,
    /// The sum of the misclassified mass of both sides.
    pub loss: f64,
}


impl Split {
    /// Returns the rule that routes examples to the two children.
    #[inline]
    pub fn splitter(&self) -> Splitter {
        Splitter::new(self.feature, self.threshold)
    }
}


/// Searches the split of the rows `indices` that minimizes
/// the total misclassified mass of the two children.
///
/// `class` is the label currently assigned to the node;
/// a split is returned only if its loss is
/// strictly smaller than the loss of keeping `class` for every row.
/// Children with less than `min_size` rows are never produced.
///
/// Returns `None` if
/// - the node has less than `2 * min_size` rows,
/// - `class` already makes no mistake on the node, or
/// - no candidate improves on `class`.
///
/// Ties are broken toward the smallest feature index,
/// then toward the threshold encountered first in `indices`.
pub fn best_split(
    sample: &Sample,
    dist: &[f64],
    indices: &[usize],
    class: i64,
    min_size: usize,
) -> Option<Split>
{
    let n_node = indices.len();
    if n_node < 2 * min_size { return None; }

    let labels = indices.iter()
        .map(|&i| sample.label(i))
        .collect::<Vec<_>>();
    let weights = indices.iter()
        .map(|&i| dist[i])
        .collect::<Vec<_>>();

    let no_split = misclassified_mass(&labels, class, &weights);
    if no_split == 0f64 { return None; }

    let n_feature = sample.shape().1;
    let per_feature = (0..n_feature).into_par_iter()
        .map(|j| {
            let values = sample.feature(j).gather(indices);
            best_threshold(j, &values, &labels, &weights, min_size)
        })
        .collect::<Vec<_>>();

    // `collect` keeps the feature order, so the reduction is deterministic.
    per_feature.into_iter()
        .flatten()
        .fold(None, |best: Option<Split>, split| {
            match best {
                Some(b) if b.loss <= split.loss => Some(b),
                _ => Some(split),
            }
        })
        .filter(|split| split.loss < no_split)
}


/// Returns the best split on a single feature whose values
/// on the node are `values`.
fn best_threshold(
    feature: usize,
    values: &[f64],
    labels: &[i64],
    weights: &[f64],
    min_size: usize,
) -> Option<Split>
{
    let mut best: Option<Split> = None;
    let mut below = Partition::with_capacity(values.len());
    let mut above = Partition::with_capacity(values.len());

    for &threshold in values {
        let rule = Splitter::new(feature, threshold);

        below.clear();
        above.clear();
        for ((&x, &y), &w) in values.iter().zip(labels).zip(weights) {
            match rule.side_of(x) {
                Side::Below => below.push(y, w),
                Side::Above => above.push(y, w),
            }
        }

        if below.len() < min_size || above.len() < min_size { continue; }

        let (below_class, below_loss) = below.best_class();
        let (above_class, above_loss) = above.best_class();
        let loss = below_loss + above_loss;

        let improves = best.as_ref()
            .map(|b| loss < b.loss)
            .unwrap_or(true);
        if improves {
            best = Some(Split {
                feature,
                threshold,
                below_class,
                above_class,
                loss,
            });
        }
    }
    best
}


/// Labels and weights of the rows falling on one side of a candidate.
struct Partition {
    labels: Vec<i64>,
    weights: Vec<f64>,
}


impl Partition {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            weights: Vec::with_capacity(capacity),
        }
    }

    fn clear(&mut self) {
        self.labels.clear();
        self.weights.clear();
    }

    fn push(&mut self, label: i64, weight: f64) {
        self.labels.push(label);
        self.weights.push(weight);
    }

    fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns the class present on this side
    /// with the smallest misclassified mass, and that mass.
    /// Classes are tried in ascending order; the first minimum wins.
    fn best_class(&self) -> (i64, f64) {
        let classes = self.labels.iter()
            .copied()
            .collect::<BTreeSet<_>>();

        let mut best: Option<(i64, f64)> = None;
        for class in classes {
            let loss = misclassified_mass(&self.labels, class, &self.weights);
            match best {
                Some((_, l)) if l <= loss => {},
                _ => { best = Some((class, loss)); },
            }
        }
        // Called only on non-empty sides.
        best.unwrap_or((0, 0f64))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::utils::uniform_weights;

    fn all_rows(sample: &Sample) -> Vec<usize> {
        (0..sample.shape().0).collect()
    }

    #[test]
    fn test_separable_feature() {
        let sample = Sample::from_rows(
            &[[0.0, 5.0], [1.0, 5.0], [2.0, 5.0], [3.0, 5.0]],
            vec![0.0, 0.0, 1.0, 1.0],
        );
        let dist = uniform_weights(4);
        let split = best_split(&sample, &dist, &all_rows(&sample), 0, 1)
            .expect("a perfect split exists");

        assert_eq!(split.feature, 0);
        assert_eq!(split.threshold, 2.0);
        assert_eq!((split.below_class, split.above_class), (0, 1));
        assert!(split.loss.abs() < 1e-12);
    }

    #[test]
    fn test_pure_node_is_not_split() {
        let sample = Sample::from_rows(
            &[[0.0], [1.0], [2.0]],
            vec![1.0, 1.0, 1.0],
        );
        let dist = uniform_weights(3);
        assert!(best_split(&sample, &dist, &all_rows(&sample), 1, 1).is_none());
    }

    #[test]
    fn test_too_small_node() {
        let sample = Sample::from_rows(
            &[[0.0], [1.0], [2.0], [3.0], [4.0]],
            vec![0.0, 0.0, 1.0, 1.0, 1.0],
        );
        let dist = uniform_weights(5);
        assert!(best_split(&sample, &dist, &all_rows(&sample), 1, 3).is_none());
    }

    #[test]
    fn test_min_size_is_respected() {
        // The perfect threshold 1.0 leaves a single row below.
        let sample = Sample::from_rows(
            &[[0.0], [1.0], [2.0], [3.0], [4.0], [5.0]],
            vec![0.0, 1.0, 1.0, 1.0, 0.0, 1.0],
        );
        let dist = uniform_weights(6);
        let indices = all_rows(&sample);
        let split = best_split(&sample, &dist, &indices, 1, 2);
        if let Some(split) = split {
            let below = indices.iter()
                .filter(|&&i| sample.value(i, 0) < split.threshold)
                .count();
            assert!(below >= 2 && 6 - below >= 2, "got {split:?}");
        }
    }

    #[test]
    fn test_requires_strict_improvement() {
        // No threshold separates the labels better than the majority.
        let sample = Sample::from_rows(
            &[[0.0], [0.0], [1.0], [1.0]],
            vec![0.0, 1.0, 0.0, 1.0],
        );
        let dist = uniform_weights(4);
        assert!(best_split(&sample, &dist, &all_rows(&sample), 0, 1).is_none());
    }

    #[test]
    fn test_tie_prefers_first_feature() {
        let sample = Sample::from_rows(
            &[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [3.0, 3.0]],
            vec![0.0, 0.0, 1.0, 1.0],
        );
        let dist = uniform_weights(4);
        let split = best_split(&sample, &dist, &all_rows(&sample), 0, 1)
            .expect("a perfect split exists");
        assert_eq!(split.feature, 0);
    }

    #[test]
    fn test_weights_drive_the_split() {
        // The light row 1 is the cheapest one to misclassify.
        let sample = Sample::from_rows(
            &[[0.0], [1.0], [2.0], [3.0]],
            vec![0.0, 1.0, 0.0, 1.0],
        );
        let dist = vec![0.1, 0.05, 0.1, 0.75];
        let split = best_split(&sample, &dist, &all_rows(&sample), 0, 1)
            .expect("isolating row 3 improves");
        assert_eq!(split.threshold, 3.0);
        assert_eq!((split.below_class, split.above_class), (0, 1));
        assert!((split.loss - 0.05).abs() < 1e-12, "got {split:?}");
    }

    #[test]
    fn test_subset_of_rows() {
        let sample = Sample::from_rows(
            &[[5.0], [0.0], [1.0], [9.0]],
            vec![1.0, 0.0, 1.0, 0.0],
        );
        let dist = uniform_weights(4);
        let split = best_split(&sample, &dist, &[1, 2], 0, 1)
            .expect("rows 1 and 2 are separable");
        assert_eq!(split.threshold, 1.0);
    }
}
