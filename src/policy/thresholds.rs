//! Confidence thresholds and tier selection.
//!
//! ## Float Normalization for Deterministic Hashing
//!
//! Thresholds are quantized to integers before hashing so that the same
//! configuration produces the same `params_hash` regardless of float
//! formatting. The quantization factor is 1e6.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::canonical::canonical_hash_hex;
use crate::error::{MetricError, MetricResult};

/// Quantization factor for float normalization.
const FLOAT_QUANTIZATION_FACTOR: f64 = 1_000_000.0;

/// Environment variable overriding the top-tier threshold.
pub const TOP_CONFIDENCE_ENV: &str = "ARGUMENT_METRICS_TOP_CONFIDENCE";

/// Environment variable overriding the high-tier threshold.
pub const HIGH_CONFIDENCE_ENV: &str = "ARGUMENT_METRICS_HIGH_CONFIDENCE";

/// Confidence tier of a model prediction.
///
/// Tiers select which faithfulness policy applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    /// `confidence >= top_confidence_threshold`.
    Top,
    /// `high_confidence_threshold <= confidence < top_confidence_threshold`.
    High,
    /// `confidence < high_confidence_threshold`.
    Low,
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::High => write!(f, "high"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Caller-defined confidence thresholds.
///
/// `top_confidence_threshold >= high_confidence_threshold` is expected but
/// not enforced; tier selection always checks the top threshold first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceThresholds {
    /// Lower bound of the top tier.
    pub top_confidence_threshold: f64,
    /// Lower bound of the high tier.
    pub high_confidence_threshold: f64,
}

/// Quantized thresholds for deterministic hashing.
#[derive(Debug, Clone, Serialize)]
struct QuantizedThresholds {
    top_confidence_threshold: i64,
    high_confidence_threshold: i64,
}

fn quantize_float(value: f64) -> i64 {
    (value * FLOAT_QUANTIZATION_FACTOR).round() as i64
}

impl ConfidenceThresholds {
    /// Create thresholds.
    pub fn new(top_confidence_threshold: f64, high_confidence_threshold: f64) -> Self {
        Self {
            top_confidence_threshold,
            high_confidence_threshold,
        }
    }

    /// Load thresholds from the environment.
    ///
    /// Reads [`TOP_CONFIDENCE_ENV`] and [`HIGH_CONFIDENCE_ENV`]; unset
    /// variables fall back to the defaults.
    pub fn from_env() -> MetricResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load thresholds through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> MetricResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let top = parse_threshold(&lookup, TOP_CONFIDENCE_ENV, defaults.top_confidence_threshold)?;
        let high = parse_threshold(&lookup, HIGH_CONFIDENCE_ENV, defaults.high_confidence_threshold)?;
        Ok(Self::new(top, high))
    }

    /// Whether `top >= high`.
    pub fn is_ordered(&self) -> bool {
        self.top_confidence_threshold >= self.high_confidence_threshold
    }

    /// Select the tier for a model confidence.
    pub fn tier(&self, model_confidence: f64) -> ConfidenceTier {
        if model_confidence >= self.top_confidence_threshold {
            ConfidenceTier::Top
        } else if model_confidence >= self.high_confidence_threshold {
            ConfidenceTier::High
        } else {
            ConfidenceTier::Low
        }
    }

    /// Hash of the threshold values, stable across platforms.
    pub fn params_hash(&self) -> String {
        let quantized = QuantizedThresholds {
            top_confidence_threshold: quantize_float(self.top_confidence_threshold),
            high_confidence_threshold: quantize_float(self.high_confidence_threshold),
        };
        canonical_hash_hex(&quantized)
    }
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            top_confidence_threshold: 0.9,
            high_confidence_threshold: 0.7,
        }
    }
}

fn parse_threshold<F>(lookup: &F, key: &str, default: f64) -> MetricResult<f64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<f64>().map_err(|_| MetricError::InvalidConfig {
            key: key.to_string(),
            value: raw,
        }),
    }
}

/// The model-side inputs of a faithfulness check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPrediction {
    /// Label the model predicted.
    pub predicted_label: String,
    /// Model confidence in that label.
    pub model_confidence: f64,
}

impl ModelPrediction {
    /// Create a prediction.
    pub fn new(predicted_label: impl Into<String>, model_confidence: f64) -> Self {
        Self {
            predicted_label: predicted_label.into(),
            model_confidence,
        }
    }
}
