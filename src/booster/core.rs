//! Provides `Booster` trait.

use crate::WeakLearner;
use std::ops::ControlFlow;


/// A boosting algorithm, seen as a game played in rounds
/// against a [`WeakLearner`].
///
/// Round `t = 1, 2, ...` goes as follows:
/// 1. the booster puts a weight on every training example,
/// 2. the weak learner answers with a hypothesis
///    that does well under those weights,
/// 3. the booster records the hypothesis and reweights.
///
/// Once the booster decides to stop,
/// [`Booster::postprocess`] combines the recorded hypotheses.
///
/// Implementors provide [`Booster::name`], [`Booster::preprocess`],
/// [`Booster::boost`] and [`Booster::postprocess`];
/// [`Booster::info`] and [`Booster::run`] have default bodies.
pub trait Booster<H> {
    /// The combined hypothesis.
    type Output;


    /// Returns the name of the boosting algorithm.
    fn name(&self) -> &str;


    /// Returns the parameters of the booster as `(key, value)` pairs,
    /// printed by the research logger.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Plays rounds `1, 2, ...` until [`Booster::boost`] breaks
    /// and returns the combined hypothesis.
    fn run<W>(&mut self, weak_learner: &W) -> Self::Output
        where W: WeakLearner<Hypothesis = H>
    {
        self.preprocess();

        let mut round = 1;
        while let ControlFlow::Continue(()) = self.boost(weak_learner, round) {
            round += 1;
        }

        self.postprocess()
    }


    /// Resets the state before the first round.
    fn preprocess(&mut self);


    /// Plays round `iteration`.
    /// Returns `ControlFlow::Break(n)` instead once the booster stops,
    /// where `n` is the number of hypotheses obtained.
    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> ControlFlow<usize>
        where W: WeakLearner<Hypothesis = H>;


    /// Combines the hypotheses obtained so far.
    fn postprocess(&mut self) -> Self::Output;
}
