//! Ranking configuration.
//!
//! [`RankConfig`] holds everything a ranking call needs besides the
//! population itself.

use super::error::ParetoError;
use super::types::{Direction, RankingMode};

/// Configuration for a Pareto ranking run.
///
/// # Defaults
///
/// ```
/// use u_pareto::pareto::{Direction, RankConfig, RankingMode};
///
/// let config = RankConfig::default();
/// assert_eq!(config.direction, Direction::Maximize);
/// assert_eq!(config.mode, RankingMode::FrontPeeling);
/// assert!(config.fuzziness.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_pareto::pareto::{RankConfig, RankingMode};
///
/// let config = RankConfig::minimize()
///     .with_fuzziness(vec![0.1, 0.0])
///     .with_mode(RankingMode::Cardinality);
/// assert!(config.validate(2).is_ok());
/// assert!(config.validate(3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankConfig {
    /// Per-feature tolerances, or `None` for exact comparison.
    ///
    /// When present, any feature whose values differ by no more than its
    /// tolerance makes the whole pair incomparable.
    pub fuzziness: Option<Vec<f64>>,

    /// Whether higher or lower feature values are better.
    pub direction: Direction,

    /// How dominance relations are turned into ranks.
    pub mode: RankingMode,
}

impl RankConfig {
    /// Preset: every feature is "higher is better".
    pub fn maximize() -> Self {
        Self::default()
    }

    /// Preset: every feature is "lower is better".
    pub fn minimize() -> Self {
        Self {
            direction: Direction::Minimize,
            ..Self::default()
        }
    }

    /// Sets per-feature fuzziness tolerances.
    pub fn with_fuzziness(mut self, tolerances: Vec<f64>) -> Self {
        self.fuzziness = Some(tolerances);
        self
    }

    /// Switches back to exact comparison.
    pub fn without_fuzziness(mut self) -> Self {
        self.fuzziness = None;
        self
    }

    /// Sets the optimization direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the ranking mode.
    pub fn with_mode(mut self, mode: RankingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Fuzziness as a slice, if present.
    pub fn fuzziness(&self) -> Option<&[f64]> {
        self.fuzziness.as_deref()
    }

    /// Validates the configuration against a population's feature count.
    ///
    /// Fuzziness, when present, must hold one finite, non-negative
    /// tolerance per feature.
    pub fn validate(&self, feature_count: usize) -> Result<(), ParetoError> {
        let Some(tolerances) = &self.fuzziness else {
            return Ok(());
        };

        if tolerances.len() != feature_count {
            return Err(ParetoError::FuzzinessLength {
                expected: feature_count,
                found: tolerances.len(),
            });
        }

        if let Some((index, &value)) = tolerances
            .iter()
            .enumerate()
            .find(|(_, t)| !t.is_finite() || **t < 0.0)
        {
            return Err(ParetoError::InvalidTolerance { index, value });
        }

        Ok(())
    }
}
