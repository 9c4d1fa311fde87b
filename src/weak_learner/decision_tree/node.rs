//! A node struct used in the decision tree algorithm.
use serde::{Serialize, Deserialize};

use crate::Sample;
use super::split_rule::{Splitter, Side};


/// A node of a decision tree.
/// Children are exclusively owned by their parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// An internal node testing `x[feature] < threshold`.
    Branch {
        /// The test of this node.
        splitter: Splitter,
        /// Subtree for the examples with `x[feature] < threshold`.
        below: Box<Node>,
        /// Subtree for the examples with `x[feature] >= threshold`.
        above: Box<Node>,
    },
    /// A terminal node predicting `class`.
    Leaf {
        /// The predicted class label.
        class: i64,
    },
}


impl Node {
    /// Construct a branch node.
    #[inline]
    pub fn branch(splitter: Splitter, below: Box<Node>, above: Box<Node>)
        -> Self
    {
        Self::Branch { splitter, below, above, }
    }


    /// Construct a leaf node.
    #[inline]
    pub fn leaf(class: i64) -> Self {
        Self::Leaf { class, }
    }


    /// Walks from this node to a leaf along the `row`-th example
    /// and returns the class of that leaf.
    pub fn predict(&self, sample: &Sample, row: usize) -> i64 {
        let mut node = self;
        loop {
            match node {
                Self::Leaf { class } => { return *class; },
                Self::Branch { splitter, below, above } => {
                    node = match splitter.split(sample, row) {
                        Side::Below => below.as_ref(),
                        Side::Above => above.as_ref(),
                    };
                },
            }
        }
    }


    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Branch { below, above, .. } => {
                1 + below.depth().max(above.depth())
            },
        }
    }


    /// Number of leaves of the subtree rooted at this node.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Branch { below, above, .. } => {
                below.n_leaves() + above.n_leaves()
            },
        }
    }


    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Branch { splitter, below, above } => {
                let node = format!(
                    "\tnode_{id} [ label = \"x[{feat}] < {thr:.2} ?\" ];\n",
                    feat = splitter.feature,
                    thr  = splitter.threshold,
                );

                let below_id = id + 1;
                let (    below,  above_id) = below.to_dot_info(below_id);
                let (mut above, return_id) = above.to_dot_info(above_id);

                let mut info = below;
                info.push(node);
                info.append(&mut above);

                info.push(format!(
                    "\tnode_{id} -- node_{below_id} [ label = \"Yes\" ];\n",
                ));
                info.push(format!(
                    "\tnode_{id} -- node_{above_id} [ label = \"No\" ];\n",
                ));

                (info, return_id)
            },
            Self::Leaf { class } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{class}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }
}
