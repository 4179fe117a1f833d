//! Engine configuration types.
//!
//! Pure-serde configuration with defaults matching the engine's documented
//! constants. Nothing here touches the filesystem; the embedding caller owns
//! how (or whether) these values are loaded and passed in.

use serde::{Deserialize, Serialize};

/// Top-level engine configuration.
///
/// # Example
///
/// ```
/// use simplex_space_core::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.classifier.high, 0.6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// Geometric degeneracy thresholds.
    pub geometry: GeometryConfig,

    /// Classification thresholds.
    pub classifier: ClassifierConfig,
}

impl EngineConfig {
    /// Validate the configuration, returning an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.geometry.validate()?;
        self.classifier.validate()?;
        Ok(())
    }
}

/// Degeneracy thresholds for the geometric layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Triangle solves whose denominator magnitude falls below this are
    /// degenerate and take the equal-weight fallback.
    pub denom_epsilon: f64,

    /// Tetrahedra whose absolute volume falls below this are degenerate.
    pub volume_epsilon: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            denom_epsilon: 1e-4,
            volume_epsilon: 1e-10,
        }
    }
}

impl GeometryConfig {
    /// Validate thresholds are positive and finite.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("denom_epsilon", self.denom_epsilon),
            ("volume_epsilon", self.volume_epsilon),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("geometry.{name} must be positive and finite, got {value}"));
            }
        }
        Ok(())
    }
}

/// Thresholds for the semantic classifier.
///
/// The triangle taxonomy is driven by `high` / `medium` / `low` plus the
/// balanced-spread bound; the tetrahedron taxonomy has its own set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// A weight at or above this dominates its simplex.
    pub high: f64,

    /// A weight at or above this is one half of a pairing.
    pub medium: f64,

    /// A weight at or above this counts as a real influence.
    pub low: f64,

    /// Max-minus-min bound for the balanced triangle case.
    pub balanced_spread: f64,

    /// Tetrahedron: a weight strictly above this dominates.
    pub tetra_dominant: f64,

    /// Tetrahedron: every weight strictly above this is balanced.
    pub tetra_balanced: f64,

    /// Tetrahedron: the two largest weights summing strictly above this
    /// form a pairing.
    pub tetra_paired_sum: f64,

    /// Tetrahedron: the smallest weight must fall strictly below this for
    /// the paired case.
    pub tetra_paired_min: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            high: 0.6,
            medium: 0.3,
            low: 0.1,
            balanced_spread: 0.3,
            tetra_dominant: 0.6,
            tetra_balanced: 0.2,
            tetra_paired_sum: 0.8,
            tetra_paired_min: 0.1,
        }
    }
}

impl ClassifierConfig {
    /// Validate threshold ordering and ranges.
    pub fn validate(&self) -> Result<(), String> {
        let in_unit = [
            ("high", self.high),
            ("medium", self.medium),
            ("low", self.low),
            ("balanced_spread", self.balanced_spread),
            ("tetra_dominant", self.tetra_dominant),
            ("tetra_balanced", self.tetra_balanced),
            ("tetra_paired_sum", self.tetra_paired_sum),
            ("tetra_paired_min", self.tetra_paired_min),
        ];
        for (name, value) in in_unit {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(format!("classifier.{name} must be in [0, 1], got {value}"));
            }
        }
        if self.low >= self.medium || self.medium >= self.high {
            return Err(format!(
                "classifier thresholds must satisfy low < medium < high, got {} / {} / {}",
                self.low, self.medium, self.high
            ));
        }
        Ok(())
    }
}
