use crate::Sample;
use crate::common::checker;
use crate::constants::{DEFAULT_MIN_SIZE, DEFAULT_MAX_DEPTH};

use super::dtree::DecisionTree;


/// Collects the growth parameters of a [`DecisionTree`].
/// The sample is only checked here; trees are fitted later
/// with [`DecisionTree::fit`] or through a booster.
///
/// # Example
///
/// ```no_run
/// use minitrees::prelude::*;
/// let sample = SampleReader::default()
///     .file("train.csv")
///     .has_header(true)
///     .target_feature("label")
///     .read()
///     .unwrap();
/// let tree = DecisionTreeBuilder::new(&sample)
///     .max_depth(2)
///     .min_size(1)
///     .build();
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a> {
    sample: &'a Sample,
    min_size: usize,
    max_depth: usize,
}


impl<'a> DecisionTreeBuilder<'a> {
    /// Starts from the default depth and node size.
    pub fn new(sample: &'a Sample) -> Self {
        Self {
            sample,
            min_size: DEFAULT_MIN_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }


    /// Nodes at depth `depth` become leaves.
    /// Defaults to `10`.
    /// A depth of `0` yields a single leaf.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }


    /// A split leaving fewer than `size` rows on either side is skipped.
    /// Defaults to `3`.
    pub fn min_size(mut self, size: usize) -> Self {
        checker::min_size(size);
        self.min_size = size;
        self
    }


    /// Panics if the sample has no labels.
    pub fn build(self) -> DecisionTree {
        checker::training_sample(self.sample);
        DecisionTree::new(self.min_size, self.max_depth)
    }
}
