//! A nearest-neighbour classifier.
use rayon::prelude::*;

use crate::{
    common::{checker, utils},
    constants::DEFAULT_NEIGHBOURS,
    Classifier,
    Sample,
};


/// Predicts the majority label of the closest training examples
/// in the Euclidean distance.
///
/// The closest training example (rank `0`) is always skipped
/// and the examples of rank `1..=k` vote.
/// Evaluated on its own training set,
/// a point is therefore never matched with itself
/// (unless a duplicate of it is also in the set).
/// Distance ties keep the training row order.
///
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
///
/// let train = Sample::from_rows(
///     &[[0.0, 0.0], [0.1, 0.0], [5.0, 5.0], [5.1, 5.0]],
///     vec![0.0, 0.0, 1.0, 1.0],
/// );
/// let test = Sample::unlabelled(&[[0.05, 0.0], [4.9, 5.0]]);
/// let knn = NearestNeighbours::init(&train).neighbours(1);
/// assert_eq!(knn.predict_all(&test), vec![0, 1]);
/// ```
pub struct NearestNeighbours<'a> {
    train: &'a Sample,
    neighbours: usize,
}


impl<'a> NearestNeighbours<'a> {
    /// Initialize the classifier on the labelled sample `train`.
    /// `train` must have at least two rows.
    pub fn init(train: &'a Sample) -> Self {
        checker::training_sample(train);
        assert!(
            train.shape().0 >= 2,
            "The nearest neighbours need at least 2 training examples"
        );
        Self { train, neighbours: DEFAULT_NEIGHBOURS, }
    }


    /// Set the number of neighbours that vote.
    /// Default value is `1`.
    pub fn neighbours(mut self, k: usize) -> Self {
        assert!(k > 0, "At least one neighbour must vote");
        self.neighbours = k;
        self
    }


    /// Returns the Euclidean distances from the `row`-th example of `sample`
    /// to every training example.
    pub fn distances(&self, sample: &Sample, row: usize) -> Vec<f64> {
        checker::same_features(self.train, sample);

        let x = sample.row(row);
        let n_train = self.train.shape().0;
        let mut sq = vec![0f64; n_train];
        for (j, &xj) in x.iter().enumerate() {
            self.train.feature(j)
                .values()
                .iter()
                .zip(&mut sq[..])
                .for_each(|(&v, s)| { *s += (v - xj).powi(2); });
        }
        sq.into_iter().map(f64::sqrt).collect()
    }


    /// Returns the `|test| x |train|` Euclidean distance matrix.
    pub fn distance_matrix(&self, test: &Sample) -> Vec<Vec<f64>> {
        checker::same_features(self.train, test);

        let n_test = test.shape().0;
        (0..n_test).into_par_iter()
            .map(|row| self.distances(test, row))
            .collect()
    }


    /// Votes among the neighbours of rank `1..=k`.
    fn vote_by_distance(&self, distances: Vec<f64>) -> i64 {
        let mut ranking = (0..distances.len()).collect::<Vec<_>>();
        // `sort_by` is stable.
        ranking.sort_by(|&i, &j| distances[i].total_cmp(&distances[j]));

        let labels = ranking.into_iter()
            .skip(1)
            .take(self.neighbours)
            .map(|i| self.train.label(i));
        utils::vote(labels)
    }
}


impl Classifier for NearestNeighbours<'_> {
    fn predict(&self, sample: &Sample, row: usize) -> i64 {
        let distances = self.distances(sample, row);
        self.vote_by_distance(distances)
    }


    fn predict_all(&self, sample: &Sample) -> Vec<i64> {
        self.distance_matrix(sample)
            .into_par_iter()
            .map(|distances| self.vote_by_distance(distances))
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distances() {
        let train = Sample::from_rows(&[[0.0, 0.0], [3.0, 4.0]], vec![0.0, 1.0]);
        let test = Sample::unlabelled(&[[0.0, 0.0]]);
        let knn = NearestNeighbours::init(&train);
        assert_eq!(knn.distances(&test, 0), vec![0.0, 5.0]);
    }

    #[test]
    fn test_rank_zero_is_skipped() {
        // The query coincides with row 0; its label must not be used.
        let train = Sample::from_rows(
            &[[0.0], [1.0], [10.0]],
            vec![7.0, 3.0, 5.0],
        );
        let test = Sample::unlabelled(&[[0.0]]);
        let knn = NearestNeighbours::init(&train).neighbours(1);
        assert_eq!(knn.predict_all(&test), vec![3]);
    }

    #[test]
    fn test_ties_keep_row_order() {
        let train = Sample::from_rows(
            &[[-1.0], [1.0], [-1.0], [1.0]],
            vec![0.0, 1.0, 2.0, 3.0],
        );
        let test = Sample::unlabelled(&[[0.0]]);
        // Ranks: rows 0, 1, 2, 3. Rank 1 is row 1.
        let knn = NearestNeighbours::init(&train).neighbours(1);
        assert_eq!(knn.predict(&test, 0), 1);
    }

    #[test]
    #[should_panic]
    fn test_column_mismatch() {
        let train = Sample::from_rows(&[[0.0, 0.0], [1.0, 1.0]], vec![0.0, 1.0]);
        let test = Sample::unlabelled(&[[0.0]]);
        let _ = NearestNeighbours::init(&train).predict_all(&test);
    }

    #[test]
    #[should_panic]
    fn test_single_training_row() {
        let train = Sample::from_rows(&[[0.0]], vec![0.0]);
        let _ = NearestNeighbours::init(&train);
    }
}
