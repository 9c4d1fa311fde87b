use colored::Colorize;
use rand::Rng;
use rayon::prelude::*;

use crate::{
    common::checker,
    constants::{DEFAULT_MAX_DEPTH, DEFAULT_MIN_SIZE, DEFAULT_N_TREES},
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Sample,
};

use super::bootstrap;
use super::classifier::RandomForestClassifier;

use std::time::Instant;


const WIDTH: usize = 8;


/// The random forest algorithm.
/// Every tree is trained on a bootstrap sample,
/// `N` rows drawn with replacement from the `N` training rows,
/// and the forest predicts the majority vote of its trees.
///
/// Bootstrap samples are drawn sequentially
/// from the generator passed to [`RandomForest::fit`],
/// so the forest depends only on its seed.
/// The trees are then trained in parallel.
///
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let sample = SampleReader::default()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let mut rng = StdRng::seed_from_u64(1234);
/// let forest = RandomForest::init(&sample)
///     .n_trees(10)
///     .max_depth(10)
///     .fit(&mut rng);
///
/// println!("OOB error: {:?}", forest.oob_error());
/// let predictions = forest.predict_all(&sample);
/// ```
pub struct RandomForest<'a> {
    sample: &'a Sample,
    n_trees: usize,
    min_size: usize,
    max_depth: usize,
    verbose: bool,
}


impl<'a> RandomForest<'a> {
    /// Initialize the `RandomForest`.
    pub fn init(sample: &'a Sample) -> Self {
        Self {
            sample,
            n_trees: DEFAULT_N_TREES,
            min_size: DEFAULT_MIN_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
            verbose: false,
        }
    }


    /// Set the number of trees.
    /// Default value is `10`.
    pub fn n_trees(mut self, n_trees: usize) -> Self {
        assert!(n_trees > 0, "A forest needs at least one tree");
        self.n_trees = n_trees;
        self
    }


    /// Set the minimal number of examples in each child of a tree.
    /// Default value is `3`.
    pub fn min_size(mut self, size: usize) -> Self {
        checker::min_size(size);
        self.min_size = size;
        self
    }


    /// Set the maximal depth of each tree.
    /// Default value is `10`.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }


    /// Print the progress of the training.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Train the forest on bootstrap samples drawn from `rng`.
    pub fn fit<R>(&self, rng: &mut R) -> RandomForestClassifier
        where R: Rng + ?Sized,
    {
        checker::training_sample(self.sample);

        let n_sample = self.sample.shape().0;
        let bootstraps = (0..self.n_trees)
            .map(|_| bootstrap::bootstrap_indices(rng, n_sample))
            .collect::<Vec<_>>();

        self.fit_on_bootstraps(bootstraps)
    }


    /// Train one tree per index vector in `bootstraps`.
    /// Each vector lists the rows of one bootstrap sample
    /// and may contain duplicates.
    ///
    /// The number of trees is `bootstraps.len()`,
    /// regardless of [`RandomForest::n_trees`].
    pub fn fit_on_bootstraps(&self, bootstraps: Vec<Vec<usize>>)
        -> RandomForestClassifier
    {
        checker::training_sample(self.sample);

        let n_sample = self.sample.shape().0;
        assert!(!bootstraps.is_empty(), "A forest needs at least one tree");
        for (k, indices) in bootstraps.iter().enumerate() {
            assert!(!indices.is_empty(), "Bootstrap sample {k} is empty");
            assert!(
                indices.iter().all(|&i| i < n_sample),
                "Bootstrap sample {k} contains a row out of 0..{n_sample}"
            );
        }

        let learner = DecisionTreeBuilder::new(self.sample)
            .min_size(self.min_size)
            .max_depth(self.max_depth)
            .build();

        let now = Instant::now();
        let trees = bootstraps.par_iter()
            .map(|indices| {
                let sample = self.sample.resample(indices);
                learner.fit(&sample)
            })
            .collect::<Vec<DecisionTreeClassifier>>();
        let elapsed = now.elapsed().as_millis();

        if self.verbose { self.print_trees(&trees, elapsed); }

        let bags = bootstraps.iter()
            .map(|indices| bootstrap::in_bag(indices, n_sample))
            .collect::<Vec<_>>();
        let oob_error = bootstrap::oob_error(&trees, &bags, self.sample);

        if self.verbose {
            let oob = oob_error
                .map(|e| format!("{e:>WIDTH$.5}"))
                .unwrap_or_else(|| format!("{:>WIDTH$}", "-"));
            println!(
                "{} OOB error {}\n",
                "[FIN]".bold().bright_green(),
                oob.bold().yellow(),
            );
        }

        RandomForestClassifier::new(trees, oob_error)
    }


    fn print_trees(&self, trees: &[DecisionTreeClassifier], elapsed: u128) {
        println!(
            "{} {} trees, min size {}, max depth {}",
            "[RF]".bold().cyan(),
            trees.len(),
            self.min_size,
            self.max_depth,
        );
        for (k, tree) in trees.iter().enumerate() {
            println!(
                "{} {}\tdepth {}\tleaves {}",
                "[LOG]".bold().magenta(),
                format!("{:>WIDTH$}", k + 1).red(),
                format!("{:>WIDTH$}", tree.depth()).green(),
                format!("{:>WIDTH$}", tree.n_leaves()).yellow(),
            );
        }
        println!(
            "{} trained in {}ms",
            "[RF]".bold().cyan(),
            format!("{elapsed}").bold(),
        );
    }
}
