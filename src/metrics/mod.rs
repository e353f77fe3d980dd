//! Explanation quality metrics.
//!
//! Each metric is a pure function of its inputs; none depends on another's
//! output.

pub mod acceptability;
pub mod circularity;
pub mod faithfulness;

pub use acceptability::compute_dialectical_acceptability;
pub use circularity::compute_circularity;
pub use faithfulness::{compute_dialectical_faithfulness, STRONG_ARGUMENT_THRESHOLD};
