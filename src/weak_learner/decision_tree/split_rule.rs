//! This file defines split rules for decision tree.
use serde::{Serialize, Deserialize};

use crate::Sample;


/// The output of the function `split` of [`Splitter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// `x[feature] < threshold`
    Below,
    /// `x[feature] >= threshold`
    Above,
}


/// A test `x[feature] < threshold` stored in a branch node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Splitter {
    /// Column index of the tested feature.
    pub feature: usize,
    /// Examples strictly below this value go to the `below` child.
    pub threshold: f64,
}


impl Splitter {
    /// Construct the test `x[feature] < threshold`.
    #[inline]
    pub fn new(feature: usize, threshold: f64) -> Self {
        Self { feature, threshold, }
    }


    /// Defines the splitting.
    #[inline]
    pub fn split(&self, sample: &Sample, row: usize) -> Side {
        let value = sample.value(row, self.feature);
        self.side_of(value)
    }


    #[inline]
    pub(crate) fn side_of(&self, value: f64) -> Side {
        if value < self.threshold { Side::Below } else { Side::Above }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_goes_above() {
        let rule = Splitter::new(1, 2.0);
        let sample = Sample::unlabelled(&[[9.0, 1.99], [9.0, 2.0], [-9.0, 3.0]]);
        assert_eq!(rule.split(&sample, 0), Side::Below);
        assert_eq!(rule.split(&sample, 1), Side::Above);
        assert_eq!(rule.split(&sample, 2), Side::Above);
    }
}
