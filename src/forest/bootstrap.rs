//! Bootstrap resampling and out-of-bag evaluation.
use fixedbitset::FixedBitSet;
use rand::Rng;

use crate::{
    common::utils,
    Classifier,
    DecisionTreeClassifier,
    Sample,
};


/// Draws `n_sample` indices uniformly with replacement from `0..n_sample`.
pub(crate) fn bootstrap_indices<R>(rng: &mut R, n_sample: usize)
    -> Vec<usize>
    where R: Rng + ?Sized,
{
    (0..n_sample).map(|_| rng.gen_range(0..n_sample))
        .collect()
}


/// Returns the set of rows drawn at least once.
pub(crate) fn in_bag(indices: &[usize], n_sample: usize) -> FixedBitSet {
    let mut bag = FixedBitSet::with_capacity(n_sample);
    indices.iter()
        .for_each(|&i| { bag.insert(i); });
    bag
}


/// Computes the out-of-bag error.
/// Each row is predicted by the majority vote of
/// the trees whose bag does not contain it.
/// Rows contained in every bag are skipped.
///
/// Returns `None` if every row is contained in every bag.
pub(crate) fn oob_error(
    trees: &[DecisionTreeClassifier],
    bags: &[FixedBitSet],
    sample: &Sample,
) -> Option<f64>
{
    let n_sample = sample.shape().0;

    let mut n_oob = 0_usize;
    let mut n_wrong = 0_usize;
    for i in 0..n_sample {
        let predictions = trees.iter()
            .zip(bags)
            .filter(|(_, bag)| !bag.contains(i))
            .map(|(tree, _)| tree.predict(sample, i))
            .collect::<Vec<_>>();

        if predictions.is_empty() { continue; }

        n_oob += 1;
        if utils::vote(predictions) != sample.label(i) {
            n_wrong += 1;
        }
    }

    if n_oob == 0 { return None; }
    Some(n_wrong as f64 / n_oob as f64)
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_bootstrap_range_and_determinism() {
        let mut rng = StdRng::seed_from_u64(1234);
        let indices = bootstrap_indices(&mut rng, 50);
        assert_eq!(indices.len(), 50);
        assert!(indices.iter().all(|&i| i < 50));

        let mut rng = StdRng::seed_from_u64(1234);
        assert_eq!(indices, bootstrap_indices(&mut rng, 50));
    }

    #[test]
    fn test_in_bag() {
        let bag = in_bag(&[0, 0, 3], 4);
        assert!(bag.contains(0));
        assert!(!bag.contains(1));
        assert!(!bag.contains(2));
        assert!(bag.contains(3));
    }
}
