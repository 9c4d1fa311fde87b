//! Defines the decision tree classifier.
use crate::{Classifier, Sample};

use super::node::Node;
use serde::{Serialize, Deserialize};

use std::fs;
use std::io;
use std::path::Path;


/// A trained decision tree.
/// Predicts by walking from the root to a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node
}


impl From<Node> for DecisionTreeClassifier {
    fn from(root: Node) -> Self {
        Self { root, }
    }
}


impl From<Box<Node>> for DecisionTreeClassifier {
    fn from(root: Box<Node>) -> Self {
        Self::from(*root)
    }
}


impl Classifier for DecisionTreeClassifier {
    #[inline]
    fn predict(&self, sample: &Sample, row: usize) -> i64 {
        self.root.predict(sample, row)
    }
}


impl DecisionTreeClassifier {
    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Writes the tree to `path` in the Graphviz dot format.
    /// Branches read `x[feature] < threshold ?`;
    /// the `Yes` edge leads to the `below` child.
    pub fn to_dot_file<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>
    {
        let (lines, _) = self.root.to_dot_info(0);

        let mut dot = String::from("graph DecisionTree {\n");
        lines.iter().for_each(|line| dot.push_str(line));
        dot.push_str("}\n");

        fs::write(path, dot)
    }
}
