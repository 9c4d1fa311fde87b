#![warn(missing_docs)]

//!
//! A crate that provides tree-based classifiers
//! together with a nearest-neighbour baseline.
//!
//! - [`NearestNeighbours`]
//!     Votes among the closest training examples
//!     in the Euclidean distance.
//!
//! - [`DecisionTree`]
//!     A binary decision tree grown greedily.
//!     Each node takes the threshold on a single feature
//!     that minimizes the weighted misclassification of its children,
//!     searched over every observed feature value.
//!
//! - [`RandomForest`]
//!     Majority vote of decision trees,
//!     each trained on a bootstrap sample.
//!
//! - [`AdaBoost`]
//!     Weighted vote of decision stumps,
//!     each trained on a reweighted training set.
//!
//! All the classifiers read numeric data through [`Sample`]
//! and predict through the [`Classifier`] trait.
//!
//! ```no_run
//! use minitrees::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let sample = SampleReader::default()
//!     .file("/path/to/data.csv")
//!     .has_header(true)
//!     .features(&["X1", "X2"])
//!     .target_feature("Multi")
//!     .read()
//!     .unwrap();
//!
//! let tree = DecisionTreeBuilder::new(&sample)
//!     .min_size(3)
//!     .build()
//!     .fit(&sample);
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let forest = RandomForest::init(&sample)
//!     .n_trees(10)
//!     .fit(&mut rng);
//!
//! let tree_predictions = tree.predict_all(&sample);
//! let forest_predictions = forest.predict_all(&sample);
//! ```

pub mod common;
pub mod sample;
pub mod hypothesis;
pub mod weak_learner;
pub mod booster;
pub mod forest;
pub mod neighbours;
pub mod research;
pub mod prelude;
pub mod constants;


pub use sample::{
    Feature,
    Sample,
    SampleReader,
};

pub use hypothesis::{
    Classifier,
    WeightedMajority,
};

pub use weak_learner::{
    WeakLearner,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
    Split,
    Splitter,
};

pub use booster::{
    Booster,
    AdaBoost,
};

pub use forest::{
    RandomForest,
    RandomForestClassifier,
};

pub use neighbours::NearestNeighbours;
