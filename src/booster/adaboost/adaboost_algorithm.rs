//! Provides [`AdaBoost`](AdaBoost) by Freund & Schapire, 1995.
use rayon::prelude::*;


use crate::{
    Booster,
    WeakLearner,
    Classifier,
    WeightedMajority,
    Sample,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,

    common::{checker, utils},
    constants::{
        DEFAULT_EPSILON,
        DEFAULT_MAX_ROUNDS,
        DEFAULT_STUMP_DEPTH,
        DEFAULT_STUMP_MIN_SIZE,
    },
    research::logger::CurrentHypothesis,
};

use std::mem;
use std::ops::ControlFlow;


/// Defines `AdaBoost`.
/// This struct is based on the book:
/// [Boosting: Foundations and Algorithms](https://direct.mit.edu/books/oa-monograph/5342/BoostingFoundations-and-Algorithms)
/// by Robert E. Schapire and Yoav Freund.
///
/// The training labels must take exactly two values,
/// either `{0, 1}` or `{-1, +1}`.
/// `AdaBoost` works on its own copy of the sample
/// whose labels are mapped to `{-1, +1}`;
/// the returned [`WeightedMajority`] maps its predictions back.
///
/// In round `t`, the weak learner is trained on the current weights `d`.
/// Let `e` be the weight of the examples it misclassifies.
/// The hypothesis gets the weight `α = ln((1 - e) / e)`,
/// where `e` is clamped into `[ε, 1 - ε]`,
/// and the weight of each misclassified example is multiplied by `exp(α)`
/// before the weights are normalized to sum to `1`.
/// The booster stops after `max_rounds` rounds
/// or once a round ends with `e <= ε`.
///
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("/path/to/binary.csv")
///     .has_header(true)
///     .target_feature("Binary")
///     .read()
///     .unwrap();
///
/// let mut booster = AdaBoost::<DecisionTreeClassifier>::init(&sample)
///     .max_rounds(20);
///
/// // Decision stumps.
/// let weak_learner = DecisionTreeBuilder::new(&sample)
///     .min_size(1)
///     .max_depth(1)
///     .build();
///
/// let f = booster.run(&weak_learner);
/// let predictions: Vec<i64> = f.predict_all(&sample);
/// ```
pub struct AdaBoost<H> {
    // Training sample with labels in `{-1, +1}`.
    sample: Sample,

    // The original `(negative, positive)` labels.
    labels: (i64, i64),

    // Weights on the training examples.
    dist: Vec<f64>,

    // Errors at most this value are treated as zero.
    epsilon: f64,

    // Maximal number of rounds.
    max_rounds: usize,

    // Weighted error of the latest hypothesis.
    error: Option<f64>,

    // Weights on hypotheses in `hypotheses`
    weights: Vec<f64>,

    // Hypohteses obtained by the weak-learner.
    hypotheses: Vec<H>,

    // Number of hypotheses at termination.
    terminated: usize,
}


impl<H> AdaBoost<H> {
    /// Initialize the `AdaBoost`.
    /// This method sets some parameters `AdaBoost` holds.
    ///
    /// Panics if the labels of `sample` are not
    /// exactly `{0, 1}` or `{-1, +1}`.
    pub fn init(sample: &Sample) -> Self {
        let labels = checker::binary_sample(sample);
        let (_, pos) = labels;

        let target = sample.target()
            .iter()
            .map(|&y| if y as i64 == pos { 1f64 } else { -1f64 })
            .collect::<Vec<_>>();
        let sample = sample.clone().with_target(target);

        let n_sample = sample.shape().0;
        Self {
            sample,
            labels,

            dist: utils::uniform_weights(n_sample),
            epsilon: DEFAULT_EPSILON,
            max_rounds: DEFAULT_MAX_ROUNDS,
            error: None,

            weights: Vec::new(),
            hypotheses: Vec::new(),

            terminated: usize::MAX,
        }
    }


    /// Set the maximal number of weak classifiers.
    /// Default value is `10`.
    pub fn max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = rounds;
        self
    }


    /// Set the threshold below which the error is considered `0`.
    /// Default value is `1e-8`.
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        checker::epsilon(epsilon);
        self.epsilon = epsilon;
        self
    }


    /// Returns the current weights on the training examples.
    #[inline]
    pub fn distribution(&self) -> &[f64] {
        &self.dist[..]
    }


    /// Returns the weighted error of the latest hypothesis,
    /// or `None` before the first round.
    #[inline]
    pub fn error(&self) -> Option<f64> {
        self.error
    }


    /// Returns the weights `α` of the hypotheses obtained so far.
    #[inline]
    pub fn alphas(&self) -> &[f64] {
        &self.weights[..]
    }


    /// Returns the number of hypotheses `AdaBoost` obtained
    /// when it stopped, or `usize::MAX` while it runs.
    #[inline]
    pub fn terminated(&self) -> usize {
        self.terminated
    }


    /// Returns the default weak learner, a decision stump.
    pub fn weak_learner(&self) -> DecisionTree {
        DecisionTreeBuilder::new(&self.sample)
            .min_size(DEFAULT_STUMP_MIN_SIZE)
            .max_depth(DEFAULT_STUMP_DEPTH)
            .build()
    }


    /// Returns the weight on the new hypothesis.
    /// `update_params` also updates `self.dist`
    #[inline]
    fn update_params(&mut self, missed: &[bool], error: f64) -> f64 {
        let error = error.clamp(self.epsilon, 1f64 - self.epsilon);
        let alpha = ((1f64 - error) / error).ln();

        // To prevent overflow, take the logarithm.
        self.dist.par_iter_mut()
            .zip(missed)
            .for_each(|(d, &m)| {
                *d = d.ln() + if m { alpha } else { 0f64 };
            });

        let normalizer = utils::log_sum_exp(&self.dist);

        self.dist.par_iter_mut()
            .for_each(|d| *d = (*d - normalizer).exp());

        alpha
    }
}


impl AdaBoost<DecisionTreeClassifier> {
    /// Run `AdaBoost` with decision stumps.
    pub fn fit(mut self) -> WeightedMajority<DecisionTreeClassifier> {
        let weak_learner = self.weak_learner();
        self.run(&weak_learner)
    }
}


impl<H> Booster<H> for AdaBoost<H>
    where H: Classifier,
{
    type Output = WeightedMajority<H>;


    fn name(&self) -> &str {
        "AdaBoost"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_sample, n_feature) = self.sample.shape();
        let (neg, pos) = self.labels;
        let info = Vec::from([
            ("# of examples", format!("{n_sample}")),
            ("# of features", format!("{n_feature}")),
            ("Labels", format!("{{{neg}, {pos}}}")),
            ("Max rounds", format!("{}", self.max_rounds)),
            ("Epsilon", format!("{}", self.epsilon)),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) {
        let n_sample = self.sample.shape().0;
        self.dist = utils::uniform_weights(n_sample);
        self.error = None;

        self.weights = Vec::new();
        self.hypotheses = Vec::new();

        self.terminated = usize::MAX;
    }


    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> ControlFlow<usize>
        where W: WeakLearner<Hypothesis = H>,
    {
        let converged = self.error
            .map(|e| e <= self.epsilon)
            .unwrap_or(false);
        if self.max_rounds < iteration || converged {
            self.terminated = self.hypotheses.len();
            return ControlFlow::Break(self.terminated);
        }


        // Get a new hypothesis
        let h = weak_learner.produce(&self.sample, &self.dist);


        let missed = h.predict_all(&self.sample)
            .into_iter()
            .zip(self.sample.target())
            .map(|(p, &y)| p != y as i64)
            .collect::<Vec<_>>();

        let error = self.dist.iter()
            .zip(&missed[..])
            .filter_map(|(&d, &m)| if m { Some(d) } else { None })
            .sum::<f64>();


        // Compute the weight on the new hypothesis
        let alpha = self.update_params(&missed, error);
        self.weights.push(alpha);
        self.hypotheses.push(h);
        self.error = Some(error);

        ControlFlow::Continue(())
    }


    fn postprocess(&mut self) -> Self::Output {
        let weights = mem::take(&mut self.weights);
        let hypotheses = mem::take(&mut self.hypotheses);
        WeightedMajority::from_parts(weights, hypotheses, self.labels)
    }
}


impl<H> CurrentHypothesis for AdaBoost<H>
    where H: Classifier + Clone,
{
    type Output = WeightedMajority<H>;

    fn current_hypothesis(&self) -> Self::Output {
        WeightedMajority::from_parts(
            self.weights.clone(),
            self.hypotheses.clone(),
            self.labels,
        )
    }
}
