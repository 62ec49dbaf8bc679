//! Pareto dominance ranking.
//!
//! Assigns every sample of a population a fitness rank derived from Pareto
//! dominance. All features share one optimization direction, and an
//! optional per-feature fuzziness tolerance can suppress dominance between
//! samples whose values are too close to tell apart.
//!
//! # Key Types
//!
//! - [`Population`] / [`Sample`]: identifier + fixed-length feature vector
//! - [`RankConfig`]: fuzziness, direction, and [`RankingMode`]
//! - [`ParetoRanker`]: validated entry point producing a [`RankResult`]
//!
//! # Submodules
//!
//! - [`compare`](fn@compare): the pairwise dominance predicate
//! - [`front_peeling_ranks`] / [`cardinality_ranks`]: the two ranking modes
//!
//! # Example
//!
//! ```
//! use u_pareto::pareto::{ParetoRanker, Population, RankConfig, Sample};
//!
//! let population = Population::from_samples(2, vec![
//!     Sample::new("fast", vec![9.0, 2.0]),
//!     Sample::new("cheap", vec![2.0, 9.0]),
//!     Sample::new("meh", vec![1.0, 1.0]),
//! ]).unwrap();
//!
//! let result = ParetoRanker::rank(&population, &RankConfig::maximize()).unwrap();
//! assert_eq!(result.ranks, vec![0, 0, 1]);
//! ```

mod compare;
mod config;
mod error;
mod ranker;
mod types;

pub use compare::{compare, dominates};
pub use config::RankConfig;
pub use error::ParetoError;
pub use ranker::{cardinality_ranks, front_peeling_ranks, ParetoRanker, RankResult};
pub use types::{Direction, Dominance, Population, RankingMode, Sample};
