//! Confidence policy definitions.

pub mod thresholds;

pub use thresholds::{
    ConfidenceThresholds, ConfidenceTier, ModelPrediction,
    TOP_CONFIDENCE_ENV, HIGH_CONFIDENCE_ENV,
};
