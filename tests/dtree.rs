use minitrees::prelude::*;
use minitrees::{Node, Splitter};
use minitrees::research::{synthetic, zero_one_loss, save_json, load_json};

use polars::prelude::*;
use rand::{rngs::StdRng, SeedableRng};


// Toy example  (o/x are the pos/neg examples)
// This partition is the decision tree for the unit prior.
//
// 15|                     |
//   |                   5 |
//   |                  x  |
//   |                     |         6
//   |                     |        x
// 10|       4             |________________________ 11.0
//   |      x              |             1
//   |                     |            o
//   |                     |
//   |                     |   0
//  5|                     |  o
//   |                     |                 2
//   |                     |                o
//   |            3        |
//   |           x         |
//   |_____________________|____________________
//  0            5         | 10            15
//                         |
//                        10.0
//
fn toy() -> Sample {
    let s1 = Series::new("x", &[10.0, 14.0, 15.0, 5.0, 3.0, 8.0, 12.0]);
    let s2 = Series::new("y", &[5.0, 8.0, 3.0, 1.0, 9.0, 13.0, 11.0]);
    let target = Series::new("class", &[1_i64, 1, 1, -1, -1, -1, -1]);

    let df = DataFrame::new(vec![s1, s2]).unwrap();
    Sample::from_dataframe(df, target).unwrap()
}


#[test]
fn full_binary_tree() {
    let sample = toy();
    let f = DecisionTreeBuilder::new(&sample)
        .min_size(1)
        .build()
        .fit(&sample);

    let expected = Node::branch(
        Splitter::new(0, 10.0),
        Box::new(Node::leaf(-1)),
        Box::new(Node::branch(
            Splitter::new(1, 11.0),
            Box::new(Node::leaf(1)),
            Box::new(Node::leaf(-1)),
        )),
    );
    assert_eq!(f.root(), &expected);
    assert_eq!(f.predict_all(&sample), sample.labels());
    assert_eq!(f.depth(), 2);
    assert_eq!(f.n_leaves(), 3);
}


#[test]
fn stump_on_toy() {
    let sample = toy();
    let f = DecisionTreeBuilder::new(&sample)
        .min_size(1)
        .max_depth(1)
        .build()
        .fit(&sample);

    assert_eq!(f.depth(), 1);
    // Only the example at (12, 11) lies on the wrong side.
    assert_eq!(f.predict_all(&sample), vec![1, 1, 1, -1, -1, -1, 1]);
}


#[test]
fn zero_training_error_on_separated_clusters() {
    let mut rng = StdRng::seed_from_u64(1234);
    let centers = [[0.0, 0.0], [10.0, 0.0], [0.0, 10.0]];
    let sample = synthetic::blobs(&mut rng, &centers, 20, 0.5);

    let f = DecisionTreeBuilder::new(&sample)
        .min_size(1)
        .build()
        .fit(&sample);

    assert_eq!(zero_one_loss(&sample, &f), 0.0);
}


#[test]
fn depth_never_exceeds_max_depth() {
    let mut rng = StdRng::seed_from_u64(7);
    let centers = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
    let sample = synthetic::blobs(&mut rng, &centers, 30, 1.0);

    for max_depth in 0..4 {
        let f = DecisionTreeBuilder::new(&sample)
            .min_size(1)
            .max_depth(max_depth)
            .build()
            .fit(&sample);
        assert!(f.depth() <= max_depth, "depth {} > {max_depth}", f.depth());
    }
}


#[test]
fn max_depth_zero_is_the_majority_leaf() {
    let sample = toy();
    let f = DecisionTreeBuilder::new(&sample)
        .max_depth(0)
        .build()
        .fit(&sample);

    assert_eq!(f.root(), &Node::leaf(-1));
    assert_eq!(f.n_leaves(), 1);
}


#[test]
fn weights_move_the_split() {
    let sample = Sample::from_rows(
        &[[0.0], [1.0], [2.0], [3.0]],
        vec![0.0, 1.0, 0.0, 1.0],
    );
    let tree = DecisionTreeBuilder::new(&sample)
        .min_size(1)
        .max_depth(1)
        .build();

    // Row 3 dominates, rows 0 and 2 agree on the left.
    let dist = [0.1, 0.05, 0.1, 0.75];
    let f = tree.produce(&sample, &dist);
    assert_eq!(f.predict_all(&sample), vec![0, 0, 0, 1]);
}


#[test]
fn dot_file() {
    let sample = toy();
    let f = DecisionTreeBuilder::new(&sample)
        .min_size(1)
        .build()
        .fit(&sample);

    let path = std::env::temp_dir().join("minitrees_dtree_toy.dot");
    f.to_dot_file(&path).unwrap();

    let dot = std::fs::read_to_string(&path).unwrap();
    assert!(dot.starts_with("graph DecisionTree {"));
    assert!(dot.contains("x[0] < 10.00 ?"));
    assert!(dot.contains("x[1] < 11.00 ?"));
    assert_eq!(dot.matches("shape = box").count(), 3);
    std::fs::remove_file(&path).unwrap();
}


#[test]
fn json_round_trip() {
    let sample = toy();
    let f = DecisionTreeBuilder::new(&sample)
        .min_size(1)
        .build()
        .fit(&sample);

    let json = serde_json::to_string(&f).unwrap();
    let g: DecisionTreeClassifier = serde_json::from_str(&json).unwrap();
    assert_eq!(f, g);

    let path = std::env::temp_dir().join("minitrees_dtree_toy.json");
    save_json(&f, &path).unwrap();
    let h: DecisionTreeClassifier = load_json(&path).unwrap();
    assert_eq!(f, h);
    std::fs::remove_file(&path).unwrap();
}


#[test]
#[should_panic]
fn unlabelled_sample_is_rejected() {
    let sample = Sample::unlabelled(&[[0.0], [1.0]]);
    let _ = DecisionTreeBuilder::new(&sample).build();
}
