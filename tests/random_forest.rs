use minitrees::prelude::*;
use minitrees::research::{synthetic, zero_one_loss};

use rand::{rngs::StdRng, SeedableRng};


const CENTERS: [[f64; 2]; 3] = [[0.0, 0.0], [10.0, 0.0], [0.0, 10.0]];


fn clusters(seed: u64) -> Sample {
    let mut rng = StdRng::seed_from_u64(seed);
    synthetic::blobs(&mut rng, &CENTERS, 20, 0.5)
}


#[test]
fn identity_bootstrap_is_a_single_tree() {
    let sample = clusters(11);
    let n_sample = sample.shape().0;

    let forest = RandomForest::init(&sample)
        .n_trees(1)
        .min_size(2)
        .max_depth(4)
        .fit_on_bootstraps(vec![(0..n_sample).collect()]);

    let tree = DecisionTreeBuilder::new(&sample)
        .min_size(2)
        .max_depth(4)
        .build()
        .fit(&sample);

    assert_eq!(forest.n_trees(), 1);
    assert_eq!(forest.trees()[0], tree);
    assert_eq!(forest.predict_all(&sample), tree.predict_all(&sample));
    // Every row is in the bag.
    assert_eq!(forest.oob_error(), None);
}


#[test]
fn same_seed_same_forest() {
    let sample = clusters(3);

    let mut rng = StdRng::seed_from_u64(42);
    let f = RandomForest::init(&sample).n_trees(8).fit(&mut rng);

    let mut rng = StdRng::seed_from_u64(42);
    let g = RandomForest::init(&sample).n_trees(8).fit(&mut rng);

    assert_eq!(f, g);
    assert_eq!(f.n_trees(), 8);
}


#[test]
fn predicts_separated_clusters() {
    let sample = clusters(5);

    let mut rng = StdRng::seed_from_u64(0);
    let forest = RandomForest::init(&sample)
        .n_trees(10)
        .fit(&mut rng);

    let centers = Sample::unlabelled(&CENTERS);
    assert_eq!(forest.predict_all(&centers), vec![0, 1, 2]);
    assert!(zero_one_loss(&sample, &forest) <= 0.1);

    let oob = forest.oob_error()
        .expect("60 rows and 10 bootstrap samples leave some row out");
    assert!((0.0..=1.0).contains(&oob));
}


#[test]
fn duplicated_rows_in_a_bootstrap() {
    let sample = Sample::from_rows(
        &[[0.0], [1.0], [2.0], [3.0]],
        vec![0.0, 0.0, 1.0, 1.0],
    );
    let forest = RandomForest::init(&sample)
        .min_size(1)
        .fit_on_bootstraps(vec![vec![0, 0, 3, 3], vec![1, 2, 2, 2]]);

    assert_eq!(forest.n_trees(), 2);
    // Rows 1 and 2 are out of the first bag, rows 0 and 3 of the second.
    let oob = forest.oob_error().unwrap();
    assert!((0.0..=1.0).contains(&oob));
}


#[test]
fn json_round_trip() {
    let sample = Sample::from_rows(
        &[[0.0, 1.0], [1.0, 0.0], [2.0, 2.0], [3.0, 1.0], [4.0, 3.0]],
        vec![0.0, 0.0, 1.0, 1.0, 1.0],
    );
    let mut rng = StdRng::seed_from_u64(9);
    let forest = RandomForest::init(&sample)
        .n_trees(3)
        .min_size(1)
        .fit(&mut rng);

    let json = serde_json::to_string(&forest).unwrap();
    let loaded: RandomForestClassifier = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded.predict_all(&sample), forest.predict_all(&sample));
    assert_eq!(loaded.trees(), forest.trees());
}


#[test]
#[should_panic]
fn empty_bootstrap_is_rejected() {
    let sample = clusters(1);
    let _ = RandomForest::init(&sample).fit_on_bootstraps(vec![Vec::new()]);
}


#[test]
#[should_panic]
fn zero_trees() {
    let sample = clusters(1);
    let _ = RandomForest::init(&sample).n_trees(0);
}
