//! Error type shared by the ranking core and the table adapter.

use thiserror::Error;

/// Errors produced while building a population, validating a ranking
/// configuration, ranking, or reading/writing a population table.
#[derive(Debug, Error)]
pub enum ParetoError {
    /// Growing the dominance graph or the rank array failed.
    ///
    /// The ranking call is aborted and any partial graph is released.
    #[error("cannot allocate space for {requested} elements of the dominance graph")]
    AllocationFailure {
        /// Number of elements that were requested.
        requested: usize,
    },

    /// A sample's feature vector does not match the population's feature count.
    #[error("sample '{id}' has {found} features, expected {expected}")]
    FeatureCountMismatch {
        /// Identifier of the offending sample.
        id: String,
        /// Feature count of the population.
        expected: usize,
        /// Feature count of the sample.
        found: usize,
    },

    /// A sample carries a NaN feature value.
    #[error("sample '{id}' has a NaN value for feature #{index}")]
    NotANumber {
        /// Identifier of the offending sample.
        id: String,
        /// Feature index of the NaN value.
        index: usize,
    },

    /// The fuzziness vector length differs from the feature count.
    #[error("fuzziness has {found} tolerances, expected one per feature ({expected})")]
    FuzzinessLength {
        /// Feature count of the population.
        expected: usize,
        /// Length of the fuzziness vector.
        found: usize,
    },

    /// A fuzziness tolerance is negative or not finite.
    #[error("fuzziness tolerance #{index} must be finite and non-negative, got {value}")]
    InvalidTolerance {
        /// Feature index of the tolerance.
        index: usize,
        /// Offending value.
        value: f64,
    },

    /// The textual population table violates the boundary format.
    #[error("malformed input at token {token}: {message}")]
    MalformedInput {
        /// One-based index of the token where the problem was found
        /// (0 when the problem is not tied to a token).
        token: usize,
        /// Description of what was expected.
        message: String,
    },

    /// Underlying reader or writer failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

