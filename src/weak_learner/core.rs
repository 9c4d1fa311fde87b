//! Provides `WeakLearner` trait.
use crate::Sample;


/// An interface for weak learners.
/// Given a training sample and a distribution over it,
/// a weak learner returns a hypothesis
/// that (hopefully) has small weighted training error.
///
/// # Required Methods
/// - [`WeakLearner::name`]
/// - [`WeakLearner::produce`]
/// - [`WeakLearner::info`] ... optional.
pub trait WeakLearner {
    /// The hypothesis type this weak learner returns.
    type Hypothesis;


    /// Returns the name of the weak learner.
    fn name(&self) -> &str;


    /// Returns the parameters of the weak learner,
    /// printed by the research logger.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Returns a hypothesis trained on `sample` weighted by `dist`.
    fn produce(&self, sample: &Sample, dist: &[f64]) -> Self::Hypothesis;
}
