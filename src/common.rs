//! Defines some common functions used in this library.

/// Defines the label statistics and weight helpers.
pub mod utils;

/// Defines some checker functions.
pub(crate) mod checker;

pub use utils::{
    vote,
    weighted_misclassification,
    uniform_weights,
};
