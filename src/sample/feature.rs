use serde::{Serialize, Deserialize};
use std::mem;
use std::ops::Index;

use crate::constants::BUFFER_SIZE;

/// A named, dense feature column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    name: String,
    vals: Vec<f64>,
}

impl Feature {
    /// Construct an empty column named `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            vals: Vec::with_capacity(BUFFER_SIZE),
        }
    }

    /// Construct a column from the given values.
    pub fn from_vals<T: ToString>(name: T, vals: Vec<f64>) -> Self {
        Self { name: name.to_string(), vals, }
    }

    /// Returns the column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the values of this column.
    pub fn values(&self) -> &[f64] {
        &self.vals[..]
    }

    /// Consumes the column and returns its values.
    pub fn into_vals(self) -> Vec<f64> {
        self.vals
    }

    /// Appends a value.
    pub fn append(&mut self, val: f64) {
        self.vals.push(val);
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.vals.len()
    }

    /// Returns `true` if the column holds no value.
    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    pub(crate) fn replace_name<T>(&mut self, name: T) -> String
        where T: ToString,
    {
        mem::replace(&mut self.name, name.to_string())
    }

    /// Returns the pair `(min, max)` of this column,
    /// or `None` for an empty column.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        if self.vals.is_empty() { return None; }
        let (min, max) = self.vals.iter()
            .fold((f64::MAX, f64::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        Some((min, max))
    }

    /// Returns the values at `indices`, in the order given.
    pub(crate) fn gather(&self, indices: &[usize]) -> Vec<f64> {
        indices.iter().map(|&i| self.vals[i]).collect()
    }
}

impl Index<usize> for Feature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.vals[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_01() {
        let feat = Feature::from_vals("x", vec![3.0, -1.0, 2.5]);
        assert_eq!(feat.min_max(), Some((-1.0, 3.0)));
    }

    #[test]
    fn test_min_max_02() {
        let feat = Feature::new("x");
        assert_eq!(feat.min_max(), None);
    }
}
