use serde::{Serialize, Deserialize};
use crate::{
    Classifier,
    Sample,
};


/// The combined hypothesis returned by [`AdaBoost`](crate::AdaBoost).
/// Serialisable with serde.
///
/// Each hypothesis predicts a label in `{-1, +1}`.
/// The combined prediction is the sign of the weighted sum
/// `Σ weights[t] * hypotheses[t](x)`,
/// translated back to the class labels the booster was trained on.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WeightedMajority<H> {
    /// `weights[t]` belongs to `hypotheses[t]`.
    pub weights: Vec<f64>,
    /// Set of hypotheses.
    pub hypotheses: Vec<H>,
    /// The pair `(negative, positive)` of the original class labels.
    pub labels: (i64, i64),
}


impl<H> WeightedMajority<H> {
    /// Construct an empty combined hypothesis
    /// that reports `labels.0` for negative and `labels.1`
    /// for non-negative confidence.
    #[inline]
    pub fn new(labels: (i64, i64)) -> Self {
        Self {
            weights: Vec::new(),
            hypotheses: Vec::new(),
            labels,
        }
    }


    /// Construct a combined hypothesis from the given vectors.
    #[inline]
    pub fn from_parts(
        weights: Vec<f64>,
        hypotheses: Vec<H>,
        labels: (i64, i64),
    ) -> Self
    {
        assert_eq!(
            weights.len(), hypotheses.len(),
            "The number of weights ({}) differs \
             from the number of hypotheses ({})",
            weights.len(), hypotheses.len(),
        );
        Self { weights, hypotheses, labels, }
    }


    /// Adds `hypothesis` with vote `weight`.
    #[inline]
    pub fn push(&mut self, weight: f64, hypothesis: H) {
        self.weights.push(weight);
        self.hypotheses.push(hypothesis);
    }


    /// Returns the number of hypotheses.
    #[inline]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Returns `true` if no hypothesis is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }
}


impl<H> WeightedMajority<H>
    where H: Classifier,
{
    /// Computes `Σ weights[t] * hypotheses[t](x)`
    /// for the `row`-th example of `sample`.
    pub fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        self.weights.iter()
            .zip(&self.hypotheses[..])
            .map(|(w, h)| *w * h.predict(sample, row) as f64)
            .sum::<f64>()
    }


    /// Computes the confidence of every row of `sample`.
    pub fn confidence_all(&self, sample: &Sample) -> Vec<f64> {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| self.confidence(sample, row))
            .collect::<Vec<_>>()
    }
}


impl<H> Classifier for WeightedMajority<H>
    where H: Classifier,
{
    fn predict(&self, sample: &Sample, row: usize) -> i64 {
        let (neg, pos) = self.labels;
        if self.confidence(sample, row) >= 0f64 { pos } else { neg }
    }
}
