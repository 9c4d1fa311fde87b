//! Fits the four classifiers on a 2-dimensional data set
//! and draws their decision maps side by side.
//!
//! ```txt
//! cargo run --release --example four_panel -- \
//!     [-s seed] [-n num-samples] [-k neighbours] [-m min-size] \
//!     [-w weak] [-f forest] [-r resolution] [-x] [-d data.csv] [output.svg]
//! ```
//!
//! The CSV file must have the columns `X1`, `X2`, `Multi`, and `Binary`.
//! Without `-d`, three Gaussian clusters are generated,
//! or the four clusters of the XOR layout with `-x`.
use clap::Parser;
use minitrees::prelude::*;
use minitrees::Feature;
use minitrees::constants::DEFAULT_RESOLUTION;
use minitrees::research::{
    decision_map,
    draw_panels,
    synthetic,
    zero_one_loss,
    Panel,
};
use rand::{rngs::StdRng, SeedableRng};

use std::error::Error;


#[derive(Parser, Debug)]
#[command(name = "four_panel")]
#[command(about = "Decision maps of kNN, a decision tree, a random forest and AdaBoost")]
struct Args {
    /// RNG seed for the synthetic data and the bootstrap samples
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Number of rows to generate, or to keep from the CSV file
    #[arg(short, long, default_value_t = 50)]
    num_samples: usize,

    /// Number of neighbours voting in kNN
    #[arg(short = 'k', long, default_value_t = 3)]
    neighbours: usize,

    /// Minimal number of rows on each side of a split
    #[arg(short, long, default_value_t = 3)]
    min_size: usize,

    /// Number of AdaBoost rounds
    #[arg(short, long, default_value_t = 10)]
    weak: usize,

    /// Number of trees in the random forest
    #[arg(short, long, default_value_t = 10)]
    forest: usize,

    /// Grid points per axis of each decision map
    #[arg(short, long, default_value_t = DEFAULT_RESOLUTION)]
    resolution: usize,

    /// Generate the XOR layout instead of three clusters
    #[arg(short = 'x', long)]
    xor: bool,

    /// CSV file with the columns `X1`, `X2`, `Multi` and `Binary`
    #[arg(short, long)]
    data: Option<String>,

    /// Output SVG file
    #[arg(default_value = "four_panel.svg")]
    file: String,
}


/// Returns the samples labelled by `Multi` and `Binary`.
fn load(args: &Args, rng: &mut StdRng) -> Result<(Sample, Sample), Box<dyn Error>> {
    let multi = match &args.data {
        Some(path) => {
            println!("loading data from {path}");
            let sample = SampleReader::default()
                .file(path.as_str())
                .has_header(true)
                .features(&["X1", "X2", "Binary"])
                .target_feature("Multi")
                .read()?;
            sample.head(args.num_samples)
        },
        None => {
            let sample = if args.xor {
                println!("generating the XOR layout");
                let n_per_cluster = (args.num_samples + 3) / 4;
                synthetic::xor(rng, n_per_cluster, 0.5)
            } else {
                println!("generating three Gaussian clusters");
                let n_per_center = (args.num_samples + 2) / 3;
                let centers = [[0.0, 0.0], [3.0, 0.5], [1.5, 3.0]];
                synthetic::blobs(rng, &centers, n_per_center, 0.9)
            };
            let binary = sample.target()
                .iter()
                .map(|&y| if y > 0.0 { 1.0 } else { 0.0 })
                .collect::<Vec<_>>();
            let mut sample = sample;
            sample.replace_names(["X1", "X2"]);
            let features = vec![
                sample.feature(0).clone(),
                sample.feature(1).clone(),
                Feature::from_vals("Binary", binary),
            ];
            Sample::from_features(features, sample.target().to_vec())
        },
    };

    let binary_target = multi.feature_by_name("Binary")
        .ok_or("The data has no `Binary` column")?
        .values()
        .to_vec();
    let multi = multi.retain_features(&["X1", "X2"]);
    let binary = multi.clone().with_target(binary_target);
    Ok((multi, binary))
}


fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let (sample, binary) = load(&args, &mut rng)?;
    let mut panels = Vec::with_capacity(4);

    println!("Q1: plotting {}-nearest neighbours fit", args.neighbours);
    let knn = NearestNeighbours::init(&sample)
        .neighbours(args.neighbours);
    panels.push(Panel {
        title: format!("{}-Nearest Neighbours", args.neighbours),
        map: decision_map(&sample, &knn, args.resolution),
        sample: &sample,
    });

    println!("Q2: testing misclassification error");
    let checks = [
        ("all right", weighted_misclassification(&[1, 1, 1], 1, None), 0.0),
        ("all wrong", weighted_misclassification(&[1, 1, 1], 0, None), 1.0),
        ("fifty-fifty", weighted_misclassification(&[1, 1, 1, 0, 0, 0], 1, None), 0.5),
    ];
    for (name, value, expected) in checks {
        let msg = if (value - expected).abs() < 1e-12 {
            "correct".to_string()
        } else {
            format!("wrong, should be {expected}")
        };
        println!(" {name}: {value} - {msg}");
    }

    println!("Q2: fitting decision tree");
    let tree = DecisionTreeBuilder::new(&sample)
        .min_size(args.min_size)
        .build()
        .fit(&sample);
    println!(
        " depth {}, {} leaves, training error {:.3}",
        tree.depth(), tree.n_leaves(), zero_one_loss(&sample, &tree),
    );
    panels.push(Panel {
        title: "Decision Tree".to_string(),
        map: decision_map(&sample, &tree, args.resolution),
        sample: &sample,
    });

    println!("Q3: fitting random forest with {} trees", args.forest);
    let forest = RandomForest::init(&sample)
        .n_trees(args.forest)
        .min_size(args.min_size)
        .fit(&mut rng);
    if let Some(oob) = forest.oob_error() {
        println!(" out-of-bag error {oob:.3}");
    }
    panels.push(Panel {
        title: format!("Random Forest ({} Trees)", args.forest),
        map: decision_map(&sample, &forest, args.resolution),
        sample: &sample,
    });

    println!("Q4: fitting adaboost ensemble");
    let ada = AdaBoost::<DecisionTreeClassifier>::init(&binary)
        .max_rounds(args.weak)
        .fit();
    println!(
        " {} stumps, training error {:.3}",
        ada.len(), zero_one_loss(&binary, &ada),
    );
    panels.push(Panel {
        title: format!("AdaBoost ({} Stumps)", args.weak),
        map: decision_map(&binary, &ada, args.resolution),
        sample: &binary,
    });

    draw_panels(&args.file, &panels, 2)?;
    println!("wrote {}", args.file);
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["four_panel"]).unwrap();
        assert_eq!(args.seed, 0);
        assert_eq!(args.num_samples, 50);
        assert_eq!(args.neighbours, 3);
        assert_eq!(args.min_size, 3);
        assert_eq!(args.weak, 10);
        assert_eq!(args.forest, 10);
        assert_eq!(args.resolution, DEFAULT_RESOLUTION);
        assert!(!args.xor);
        assert!(args.data.is_none());
        assert_eq!(args.file, "four_panel.svg");
    }

    #[test]
    fn short_flags_and_output_path() {
        let args = Args::try_parse_from([
            "four_panel",
            "-s", "7", "-n", "40", "-k", "5", "-m", "2",
            "-w", "20", "-f", "15", "-r", "30", "-x",
            "-d", "data.csv", "out.svg",
        ]).unwrap();
        assert_eq!(args.seed, 7);
        assert_eq!(args.num_samples, 40);
        assert_eq!(args.neighbours, 5);
        assert_eq!(args.min_size, 2);
        assert_eq!(args.weak, 20);
        assert_eq!(args.forest, 15);
        assert_eq!(args.resolution, 30);
        assert!(args.xor);
        assert_eq!(args.data.as_deref(), Some("data.csv"));
        assert_eq!(args.file, "out.svg");
    }

    #[test]
    fn malformed_number() {
        assert!(Args::try_parse_from(["four_panel", "-k", "three"]).is_err());
    }
}
