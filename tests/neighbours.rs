use minitrees::prelude::*;
use minitrees::research::{synthetic, zero_one_loss};

use rand::{rngs::StdRng, SeedableRng};


fn clusters() -> Sample {
    let mut rng = StdRng::seed_from_u64(2024);
    let centers = [[0.0, 0.0], [10.0, 0.0], [5.0, 10.0]];
    synthetic::blobs(&mut rng, &centers, 10, 0.5)
}


#[test]
fn one_neighbour_recovers_labels() {
    let sample = clusters();
    let knn = NearestNeighbours::init(&sample).neighbours(1);
    assert_eq!(knn.predict_all(&sample), sample.labels());
}


#[test]
fn duplicated_points_vote_for_each_other() {
    let rows = [[0.0, 0.0], [0.0, 0.0], [1.0, 1.0], [1.0, 1.0]];
    let sample = Sample::from_rows(&rows, vec![0.0, 0.0, 1.0, 1.0]);
    let knn = NearestNeighbours::init(&sample);
    assert_eq!(zero_one_loss(&sample, &knn), 0.0);
}


#[test]
fn a_point_is_never_its_own_neighbour() {
    // The closest other point always has the other label.
    let sample = Sample::from_rows(
        &[[0.0], [1.0], [10.0], [11.0]],
        vec![0.0, 1.0, 0.0, 1.0],
    );
    let knn = NearestNeighbours::init(&sample).neighbours(1);
    assert_eq!(knn.predict_all(&sample), vec![1, 0, 1, 0]);
}


#[test]
fn three_neighbours_vote() {
    let sample = Sample::from_rows(
        &[[0.0], [1.0], [2.0], [3.0], [100.0]],
        vec![5.0, 5.0, 5.0, 9.0, 9.0],
    );
    let test = Sample::unlabelled(&[[0.0], [99.0]]);
    let knn = NearestNeighbours::init(&sample).neighbours(3);

    // Ranks 1..=3 of `0.0` are rows 1, 2, 3.
    // Ranks 1..=3 of `99.0` are rows 3, 2, 1.
    assert_eq!(knn.predict_all(&test), vec![5, 5]);
}


#[test]
fn distance_matrix_shape() {
    let sample = clusters();
    let test = Sample::unlabelled(&[[0.0, 0.0], [3.0, 4.0]]);
    let knn = NearestNeighbours::init(&sample);

    let matrix = knn.distance_matrix(&test);
    assert_eq!(matrix.len(), 2);
    assert!(matrix.iter().all(|row| row.len() == sample.shape().0));

    let origin = Sample::unlabelled(&[[0.0, 0.0]]);
    let expected = knn.distances(&origin, 0)[0] + 5.0;
    assert!(matrix[1][0] <= expected + 1e-12);
}


#[test]
#[should_panic]
fn zero_neighbours() {
    let sample = clusters();
    let _ = NearestNeighbours::init(&sample).neighbours(0);
}
