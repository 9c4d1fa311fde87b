use crate::{
    common::{checker, utils},
    Sample,
    WeakLearner,
};

use super::{
    split::best_split,
    split_rule::Side,
    node::Node,
    classifier::DecisionTreeClassifier,
};

use std::fmt;


/// Grows a [`DecisionTreeClassifier`] on a weighted sample.
///
/// The tree is grown greedily.
/// Each node takes the `(feature, threshold)` pair
/// minimizing the weighted misclassification of its two children
/// (see [`best_split`](super::split::best_split)),
/// and becomes a leaf if no pair improves on the node's own class,
/// or if the node is at the maximal depth.
///
/// Obtain one from [`DecisionTreeBuilder`](super::builder::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("train.csv")
///     .has_header(true)
///     .target_feature("label")
///     .read()
///     .unwrap();
///
/// let f = DecisionTreeBuilder::new(&sample)
///     .max_depth(2)
///     .build()
///     .fit(&sample);
///
/// let missed = f.predict_all(&sample)
///     .into_iter()
///     .zip(sample.labels())
///     .filter(|(p, y)| p != y)
///     .count();
/// println!("{missed} training rows misclassified");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionTree {
    min_size: usize,
    max_depth: usize,
}


impl DecisionTree {
    /// Called by `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(min_size: usize, max_depth: usize) -> Self {
        Self { min_size, max_depth, }
    }


    /// Returns the minimal number of examples in each child.
    #[inline]
    pub fn min_size_value(&self) -> usize {
        self.min_size
    }


    /// Returns the maximal depth.
    #[inline]
    pub fn max_depth_value(&self) -> usize {
        self.max_depth
    }


    /// Train a tree on `sample` with the uniform weights.
    pub fn fit(&self, sample: &Sample) -> DecisionTreeClassifier {
        checker::sample(sample);
        let dist = utils::uniform_weights(sample.shape().0);
        self.produce(sample, &dist)
    }


    /// Train a tree on `sample` weighted by `dist`.
    /// If `class` is `Some(c)`, the root is labelled `c`
    /// instead of the majority label of `sample`.
    pub fn produce_seeded(
        &self,
        sample: &Sample,
        dist: &[f64],
        class: Option<i64>,
    ) -> DecisionTreeClassifier
    {
        checker::training_sample(sample);
        checker::distribution(dist, sample.shape().0);
        checker::min_size(self.min_size);

        let indices = (0..sample.shape().0).collect::<Vec<usize>>();
        let root = self.grow(sample, dist, indices, class, 0);

        DecisionTreeClassifier::from(root)
    }


    /// Grows the subtree on the rows `indices`
    /// whose root lies at `depth`.
    fn grow(
        &self,
        sample: &Sample,
        dist: &[f64],
        indices: Vec<usize>,
        class: Option<i64>,
        depth: usize,
    ) -> Box<Node>
    {
        let class = class.unwrap_or_else(|| {
            utils::vote(indices.iter().map(|&i| sample.label(i)))
        });

        if depth >= self.max_depth {
            return Box::new(Node::leaf(class));
        }

        let split = match best_split(sample, dist, &indices, class, self.min_size) {
            Some(split) => split,
            None => { return Box::new(Node::leaf(class)); },
        };

        let rule = split.splitter();

        // Split the rows for below/above childrens
        let mut below = Vec::new();
        let mut above = Vec::new();
        for i in indices {
            match rule.split(sample, i) {
                Side::Below => { below.push(i); },
                Side::Above => { above.push(i); },
            }
        }

        let depth = depth + 1;
        let below = self.grow(sample, dist, below, Some(split.below_class), depth);
        let above = self.grow(sample, dist, above, Some(split.above_class), depth);

        Box::new(Node::branch(rule, below, above))
    }
}


impl WeakLearner for DecisionTree {
    type Hypothesis = DecisionTreeClassifier;

    fn name(&self) -> &str {
        "Decision Tree"
    }

    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Max depth", format!("{}", self.max_depth)),
            ("Min node size", format!("{}", self.min_size)),
            ("Split search", "brute force".to_string()),
        ]);
        Some(info)
    }

    #[inline]
    fn produce(&self, sample: &Sample, dist: &[f64])
        -> Self::Hypothesis
    {
        self.produce_seeded(sample, dist, None)
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Decision tree\n\n\
            - Max depth: {}\n\
            - Min node size: {}\n\
            ----------\
            ",
            self.max_depth,
            self.min_size,
        )
    }
}
