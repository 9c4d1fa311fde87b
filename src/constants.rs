//! Default parameters shared by the learners in this crate.

/// Smallest acceptable child node for a plain decision tree.
pub const DEFAULT_MIN_SIZE:        usize = 3;
/// Maximal depth for a plain decision tree.
pub const DEFAULT_MAX_DEPTH:       usize = 10;

/// Number of trees in a random forest.
pub const DEFAULT_N_TREES:         usize = 10;

/// Maximal number of weak classifiers trained by AdaBoost.
pub const DEFAULT_MAX_ROUNDS:      usize = 10;
/// Weak learners of AdaBoost are stumps by default.
pub const DEFAULT_STUMP_DEPTH:     usize = 1;
/// Smallest acceptable child node for a stump.
pub const DEFAULT_STUMP_MIN_SIZE:  usize = 1;
/// Errors at most this value are treated as zero.
pub const DEFAULT_EPSILON:           f64 = 1e-8;

/// Number of neighbours canvassed by the nearest-neighbour voter.
pub const DEFAULT_NEIGHBOURS:      usize = 1;

/// Grid resolution of a decision map.
pub const DEFAULT_RESOLUTION:      usize = 20;

/// Initial capacity of a feature column read from a file.
pub const BUFFER_SIZE:             usize = 256;
