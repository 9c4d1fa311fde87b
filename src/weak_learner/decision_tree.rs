//! Defines the decision tree weak learner.
//! The tree is induced by a brute-force threshold search
//! over every observed feature value.

pub(crate) mod split_rule;
pub(crate) mod split;
pub(crate) mod node;
pub(crate) mod builder;
pub(crate) mod dtree;
pub(crate) mod classifier;


pub use split_rule::{Splitter, Side};
pub use split::{Split, best_split};
pub use node::Node;
pub use builder::DecisionTreeBuilder;
pub use dtree::DecisionTree;
pub use classifier::DecisionTreeClassifier;
