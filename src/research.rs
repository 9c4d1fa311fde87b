//! This directory provides some features for research
//! - Logging train/test error and running time of boosting per round
//! - Decision maps of 2-dimensional classifiers, drawn as SVG
//! - Synthetic data sets
//! - JSON files of fitted models

/// Defines a logger that runs a boosting algorithm.
pub mod logger;

/// Defines loss functions (e.g., zero-one loss).
pub mod loss_functions;

/// Defines decision maps and their rendering.
pub mod decision_map;

/// Defines synthetic data sets.
pub mod synthetic;

/// Saves and loads fitted models.
pub mod persist;


pub use logger::{Logger, CurrentHypothesis};
pub use loss_functions::zero_one_loss;
pub use decision_map::{decision_map, draw_panels, DecisionMap, Panel};
pub use persist::{save_json, load_json};
