//! The core library for `Hypothesis` traits.

pub(crate) mod classifier;
pub(crate) mod weighted_majority;


pub use classifier::Classifier;
pub use weighted_majority::WeightedMajority;
