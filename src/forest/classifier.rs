use serde::{Serialize, Deserialize};

use crate::{
    common::utils,
    Classifier,
    DecisionTreeClassifier,
    Sample,
};


/// A forest of decision trees predicting by majority vote.
/// Ties are broken toward the smallest label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForestClassifier {
    trees: Vec<DecisionTreeClassifier>,
    oob_error: Option<f64>,
}


impl RandomForestClassifier {
    /// Construct a forest from trained trees.
    pub fn new(trees: Vec<DecisionTreeClassifier>, oob_error: Option<f64>)
        -> Self
    {
        assert!(!trees.is_empty(), "A forest needs at least one tree");
        Self { trees, oob_error, }
    }


    /// Returns the trees of this forest.
    #[inline]
    pub fn trees(&self) -> &[DecisionTreeClassifier] {
        &self.trees[..]
    }


    /// Returns the number of trees.
    #[inline]
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }


    /// Returns the out-of-bag error measured at training time,
    /// or `None` if no row was left out of every bootstrap sample.
    #[inline]
    pub fn oob_error(&self) -> Option<f64> {
        self.oob_error
    }
}


impl Classifier for RandomForestClassifier {
    fn predict(&self, sample: &Sample, row: usize) -> i64 {
        utils::vote(self.trees.iter().map(|tree| tree.predict(sample, row)))
    }
}
