//! Scoring configuration.

use serde::Deserialize;

/// Error returned when scoring weights are unusable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid scoring weights: {reason}")]
pub struct InvalidWeights {
    reason: String,
}

impl InvalidWeights {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Relative weight of each sub-score in the final score.
///
/// Weights must be finite, non-negative, and sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringWeights {
    /// Carbon footprint relative to driving.
    pub carbon: f64,

    /// Energy efficiency of the modes used.
    pub mode_efficiency: f64,

    /// Share of renewable energy behind the modes used.
    pub renewable_energy: f64,

    /// How much the modes keep traffic off the road.
    pub congestion_reduction: f64,
}

/// Tolerance when checking that weights sum to one.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

impl ScoringWeights {
    /// Create weights from the four components.
    pub fn new(
        carbon: f64,
        mode_efficiency: f64,
        renewable_energy: f64,
        congestion_reduction: f64,
    ) -> Self {
        Self {
            carbon,
            mode_efficiency,
            renewable_energy,
            congestion_reduction,
        }
    }

    fn as_array(&self) -> [(&'static str, f64); 4] {
        [
            ("carbon", self.carbon),
            ("mode_efficiency", self.mode_efficiency),
            ("renewable_energy", self.renewable_energy),
            ("congestion_reduction", self.congestion_reduction),
        ]
    }

    /// Sum of all four weights.
    pub fn sum(&self) -> f64 {
        self.as_array().iter().map(|(_, w)| w).sum()
    }

    /// Check the weights are finite, non-negative and sum to 1.0.
    pub fn validate(&self) -> Result<(), InvalidWeights> {
        for (name, weight) in self.as_array() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(InvalidWeights::new(format!(
                    "{name} weight must be a non-negative number, got {weight}"
                )));
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(InvalidWeights::new(format!(
                "weights must sum to 1.0, got {sum}"
            )));
        }

        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            carbon: 0.6,
            mode_efficiency: 0.2,
            renewable_energy: 0.1,
            congestion_reduction: 0.1,
        }
    }
}

/// Configuration for the sustainability scorer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Sub-score weights.
    pub weights: ScoringWeights,
}

impl ScoringConfig {
    /// Create a configuration with the given weights.
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), InvalidWeights> {
        self.weights.validate()
    }
}
