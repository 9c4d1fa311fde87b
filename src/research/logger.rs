use colored::{Colorize, ColoredString};

use crate::{
    Sample,
    Booster,
    WeakLearner,
    Classifier,
};

use std::fs::File;
use std::io::{self, prelude::*};
use std::path::Path;
use std::time::Instant;


const DEFAULT_ROUND: usize = 1;
const DEFAULT_TIMELIMIT_MILLIS: u128 = u128::MAX;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Round,TrainError,TestError,Time\n";


/// A booster that can report the combined hypothesis
/// it would output if it stopped now.
pub trait CurrentHypothesis {
    /// The combined hypothesis type.
    type Output;

    /// Returns the current combined hypothesis.
    fn current_hypothesis(&self) -> Self::Output;
}


/// Runs a booster round by round,
/// recording the train and test loss of the current hypothesis
/// together with the boosting time.
///
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
/// use minitrees::research::{Logger, zero_one_loss};
///
/// let train = SampleReader::default()
///     .file("/path/to/train.csv")
///     .has_header(true)
///     .target_feature("Binary")
///     .read()
///     .unwrap();
/// let test = SampleReader::default()
///     .file("/path/to/test.csv")
///     .has_header(true)
///     .target_feature("Binary")
///     .read()
///     .unwrap();
///
/// let booster = AdaBoost::<DecisionTreeClassifier>::init(&train)
///     .max_rounds(50);
/// let weak_learner = booster.weak_learner();
/// let loss = zero_one_loss::<WeightedMajority<DecisionTreeClassifier>>;
/// let mut logger = Logger::new(booster, weak_learner, loss, &train, &test)
///     .print_every(10)
///     .time_limit_as_secs(60);
/// let f = logger.run("adaboost.csv").unwrap();
/// ```
pub struct Logger<'a, B, W, G> {
    booster: B,
    weak_learner: W,
    loss_func: G,
    train: &'a Sample,
    test: &'a Sample,
    time_limit: u128,
    round: usize,
}


impl<'a, B, W, G> Logger<'a, B, W, G> {
    /// Prints every round and has no time limit until told otherwise.
    pub fn new(
        booster: B,
        weak_learner: W,
        loss_func: G,
        train: &'a Sample,
        test: &'a Sample,
    ) -> Self
    {
        Self {
            booster,
            weak_learner,
            loss_func,
            train,
            test,
            time_limit: DEFAULT_TIMELIMIT_MILLIS,
            round: DEFAULT_ROUND,
        }
    }


    /// Stops boosting once the cumulative boosting time
    /// exceeds `time_limit` milliseconds.
    #[inline(always)]
    pub fn time_limit_as_millis(mut self, time_limit: u128) -> Self {
        self.time_limit = time_limit;
        self
    }


    /// Same as [`Logger::time_limit_as_millis`], in seconds.
    #[inline(always)]
    pub fn time_limit_as_secs(mut self, time_limit: u64) -> Self {
        self.time_limit = time_limit as u128 * 1_000_u128;
        self
    }


    /// Prints a console line every `round` rounds.
    /// `usize::MAX` silences the console; the CSV file is still written.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        assert!(round > 0, "The logging interval must be positive");
        self.round = round;
        self
    }
}


impl<H, B, W, G, O, S> Logger<'_, B, W, G>
    where B: Booster<H, Output=O> + CurrentHypothesis<Output=S>,
          S: Classifier,
          W: WeakLearner<Hypothesis = H>,
          G: Fn(&Sample, &S) -> f64,
{
    fn print_stats(&self) {
        let limit = if self.time_limit == DEFAULT_TIMELIMIT_MILLIS {
            "Nothing".to_string()
        } else {
            time_format(self.time_limit)
        };

        println!("\n{:=>FULL_WIDTH$}", "");
        println!("{:^FULL_WIDTH$}", "STATS".bold());
        println!("{:->FULL_WIDTH$}", "");

        print_entry("Booster", self.booster.name());
        if let Some(info) = self.booster.info() {
            println!("{}", info_lines(info));
        }
        print_entry("Weak Learner", self.weak_learner.name());
        if let Some(info) = self.weak_learner.info() {
            println!("{}", info_lines(info));
        }
        print_entry("Time Limit", &limit);

        println!("{:=>FULL_WIDTH$}\n", "");

        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "ROUND".bold().red(),
            "TRAIN".bold().green(),
            "TEST".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// Runs the booster like [`Booster::run`]
    /// and writes `Round,TrainError,TestError,Time` to `filename`,
    /// one line per round that produced a hypothesis.
    /// The time column is the cumulative boosting time in milliseconds;
    /// evaluating the losses is not counted.
    pub fn run<P: AsRef<Path>>(&mut self, filename: P) -> io::Result<O> {
        let mut file = File::create(filename)?;
        file.write_all(HEADER.as_bytes())?;

        self.booster.preprocess();
        let verbose = self.round != usize::MAX;
        if verbose { self.print_stats(); }

        let mut elapsed = 0;
        let mut last: Option<Row> = None;
        for round in 1.. {
            let now = Instant::now();
            let flow = self.booster.boost(&self.weak_learner, round);
            elapsed += now.elapsed().as_millis();

            // The stopping call adds no hypothesis.
            if flow.is_break() {
                if let (true, Some(row)) = (verbose, &last) {
                    row.print("[FIN]".bold().bright_green());
                }
                break;
            }

            let f = self.booster.current_hypothesis();
            let train = (self.loss_func)(self.train, &f);
            let test = (self.loss_func)(self.test, &f);
            writeln!(file, "{round},{train},{test},{elapsed}")?;

            let row = Row { round, train, test, elapsed, };
            if elapsed > self.time_limit {
                row.print("[TLE]".bold().bright_red());
                break;
            }
            if verbose && round % self.round == 0 {
                row.print("[LOG]".bold().magenta());
            }
            last = Some(row);
        }

        Ok(self.booster.postprocess())
    }
}


/// One line of the console log.
struct Row {
    round: usize,
    train: f64,
    test: f64,
    elapsed: u128,
}


impl Row {
    fn print(&self, tag: ColoredString) {
        println!(
            "{tag} {}\t\t{}\t{}\t{}",
            format!("{:>WIDTH$}", self.round).red(),
            format!("{:>WIDTH$.PREC_WIDTH$}", self.train).green(),
            format!("{:>WIDTH$.PREC_WIDTH$}", self.test).yellow(),
            time_format(self.elapsed).bold().cyan(),
        );
    }
}


fn print_entry(key: &str, value: &str) {
    println!(
        "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
        key.bold(),
        value.bold().green(),
    );
}


fn info_lines(info: Vec<(&str, String)>) -> String {
    info.into_iter()
        .map(|(key, val)| {
            format!(
                "    + {:<STAT_WIDTH$}\t{:>width$}",
                key,
                val.bold().yellow(),
                width = STAT_WIDTH - 8
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}


pub(crate) fn time_format(millis: u128) -> String {
    let (secs, ms) = (millis / 1_000, millis % 1_000);
    let (mins, hours) = (secs / 60, secs / 3_600);
    match (hours, mins, secs) {
        (0, 0, 0) => format!("  0.{ms:0>3}s"),
        (0, 0, s) => format!(" {s:0>2}.{ms:0>3}s"),
        (0, m, s) => format!(" {m:0>2}m {:0>2}s", s % 60),
        (h, m, _) => format!(" {h:0>2}h {:0>2}m", m % 60),
    }
}
