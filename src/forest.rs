//! Bootstrap aggregation of decision trees.

pub(crate) mod bootstrap;
pub(crate) mod random_forest;
pub(crate) mod classifier;


pub use random_forest::RandomForest;
pub use classifier::RandomForestClassifier;
