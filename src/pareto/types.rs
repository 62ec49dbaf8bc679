//! Core data model: samples, populations, and the small enums that
//! parameterize a ranking run.

use super::error::ParetoError;

/// Global optimization direction, applied uniformly to every feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Higher feature values are better.
    #[default]
    Maximize,

    /// Lower feature values are better.
    Minimize,
}

impl Direction {
    /// Returns `+1` for [`Maximize`](Direction::Maximize) and `-1` for
    /// [`Minimize`](Direction::Minimize).
    pub fn sign(self) -> i8 {
        match self {
            Direction::Maximize => 1,
            Direction::Minimize => -1,
        }
    }
}

impl From<bool> for Direction {
    /// `true` means "higher is better".
    fn from(max_is_best: bool) -> Self {
        if max_is_best {
            Direction::Maximize
        } else {
            Direction::Minimize
        }
    }
}

/// Outcome of comparing two feature vectors `p` and `q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dominance {
    /// `p` dominates `q`.
    PDominates,

    /// `q` dominates `p`.
    QDominates,

    /// Neither dominates the other.
    Incomparable,
}

impl Dominance {
    /// Returns the outcome with `p` and `q` swapped.
    pub fn reverse(self) -> Self {
        match self {
            Dominance::PDominates => Dominance::QDominates,
            Dominance::QDominates => Dominance::PDominates,
            Dominance::Incomparable => Dominance::Incomparable,
        }
    }

    /// Integer form: `+1` when `p` dominates, `-1` when `q` dominates, `0` otherwise.
    pub fn signum(self) -> i8 {
        match self {
            Dominance::PDominates => 1,
            Dominance::QDominates => -1,
            Dominance::Incomparable => 0,
        }
    }
}

/// Fitness scaling policy used to turn dominance relations into ranks.
///
/// Exactly one mode is active per ranking call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RankingMode {
    /// Rank is the index of the Pareto front the sample belongs to.
    #[default]
    FrontPeeling,

    /// Rank is the number of samples dominating the sample.
    ///
    /// Rank 0 still identifies the non-dominated set, but larger values are
    /// raw dominator counts, not front depths.
    Cardinality,
}

/// A population member: an opaque identifier and its feature values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    id: String,
    features: Vec<f64>,
}

impl Sample {
    /// Creates a sample.
    pub fn new(id: impl Into<String>, features: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            features,
        }
    }

    /// Identifier token.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Feature values.
    pub fn features(&self) -> &[f64] {
        &self.features
    }
}

/// An ordered collection of samples sharing the same feature count.
///
/// The feature count is fixed at construction, so every sample accepted by
/// [`push`](Population::push) is guaranteed to be comparable with every
/// other sample.
///
/// # Examples
///
/// ```
/// use u_pareto::pareto::{Population, Sample};
///
/// let mut population = Population::new(2);
/// population.push(Sample::new("A", vec![3.0, 3.0])).unwrap();
/// assert_eq!(population.len(), 1);
///
/// // wrong number of features
/// assert!(population.push(Sample::new("B", vec![1.0])).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PopulationRepr"))]
pub struct Population {
    feature_count: usize,
    samples: Vec<Sample>,
}

impl Population {
    /// Creates an empty population whose samples carry `feature_count` features.
    pub fn new(feature_count: usize) -> Self {
        Self {
            feature_count,
            samples: Vec::new(),
        }
    }

    /// Creates an empty population with room for `capacity` samples.
    pub fn with_capacity(feature_count: usize, capacity: usize) -> Self {
        Self {
            feature_count,
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Builds a population from samples, checking every feature count.
    pub fn from_samples(
        feature_count: usize,
        samples: impl IntoIterator<Item = Sample>,
    ) -> Result<Self, ParetoError> {
        let mut population = Self::new(feature_count);
        for sample in samples {
            population.push(sample)?;
        }
        Ok(population)
    }

    /// Appends a sample.
    ///
    /// Fails with [`ParetoError::FeatureCountMismatch`] when the sample's
    /// feature vector length differs from the population's feature count,
    /// and with [`ParetoError::NotANumber`] when a feature value is NaN.
    pub fn push(&mut self, sample: Sample) -> Result<(), ParetoError> {
        if sample.features.len() != self.feature_count {
            return Err(ParetoError::FeatureCountMismatch {
                id: sample.id,
                expected: self.feature_count,
                found: sample.features.len(),
            });
        }
        // NaN compares unordered and could close a dominance cycle
        if let Some(index) = sample.features.iter().position(|v| v.is_nan()) {
            return Err(ParetoError::NotANumber {
                id: sample.id,
                index,
            });
        }
        self.samples.push(sample);
        Ok(())
    }

    /// Number of features per sample.
    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the population holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in population order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the sample at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    /// Iterates over samples in population order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }
}

/// Unchecked wire form of [`Population`]; deserialization goes through
/// [`Population::from_samples`] so the same checks apply.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PopulationRepr {
    feature_count: usize,
    samples: Vec<Sample>,
}

#[cfg(feature = "serde")]
impl TryFrom<PopulationRepr> for Population {
    type Error = ParetoError;

    fn try_from(repr: PopulationRepr) -> Result<Self, Self::Error> {
        Population::from_samples(repr.feature_count, repr.samples)
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
