//! Exports the standard learners and traits.
//!
pub use crate::booster::{
    // Booster trait
    Booster,

    AdaBoost,
};


pub use crate::weak_learner::{
    // Weak Learner trait
    WeakLearner,

    // Decision tree
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
};


pub use crate::forest::{
    RandomForest,
    RandomForestClassifier,
};


pub use crate::neighbours::NearestNeighbours;


pub use crate::hypothesis::{
    Classifier,
    WeightedMajority,
};


pub use crate::sample::{
    Sample,
    SampleReader,
};


pub use crate::common::{
    vote,
    weighted_misclassification,
};
