//! Population-wide Pareto ranking.
//!
//! Two fitness scaling policies are available, selected per call through
//! [`RankingMode`]:
//!
//! - [`front_peeling_ranks`]: non-dominated sorting. Rank `k` means the
//!   sample belongs to the `k`-th Pareto front.
//! - [`cardinality_ranks`]: rank is the number of samples dominating the
//!   sample. No front structure is built.
//!
//! Both modes agree on the rank-0 set (the non-dominated samples).
//!
//! # Memory
//!
//! The dominance graph lives only for the duration of one call. Every
//! allocation goes through `try_reserve`, so running out of memory yields
//! [`ParetoError::AllocationFailure`] and never a truncated rank array.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Fonseca & Fleming (1993), "Genetic Algorithms for Multiobjective Optimization"
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"

use super::compare::compare;
use super::config::RankConfig;
use super::error::ParetoError;
use super::types::{Direction, Dominance, Population, RankingMode};

/// Result of ranking a population.
///
/// `ranks[i]` belongs to the sample at index `i` of the population.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankResult {
    /// One rank per sample, in population order.
    pub ranks: Vec<usize>,

    /// Mode the ranks were computed with.
    pub mode: RankingMode,
}

impl RankResult {
    /// Number of distinct rank values.
    ///
    /// Under [`RankingMode::FrontPeeling`] this is the number of fronts.
    pub fn front_count(&self) -> usize {
        self.fronts().len()
    }

    /// Sample indices grouped by rank value, in ascending rank order.
    ///
    /// Under [`RankingMode::FrontPeeling`] `fronts()[k]` is the `k`-th
    /// Pareto front. Under [`RankingMode::Cardinality`] groups are ordered
    /// by dominator count and empty counts are skipped.
    pub fn fronts(&self) -> Vec<Vec<usize>> {
        let mut order: Vec<usize> = (0..self.ranks.len()).collect();
        order.sort_by_key(|&i| self.ranks[i]);

        let mut groups: Vec<Vec<usize>> = Vec::new();
        let mut last_rank = None;
        for i in order {
            if last_rank != Some(self.ranks[i]) {
                groups.push(Vec::new());
                last_rank = Some(self.ranks[i]);
            }
            if let Some(group) = groups.last_mut() {
                group.push(i);
            }
        }
        groups
    }

    /// Indices of the non-dominated samples (rank 0).
    pub fn non_dominated(&self) -> Vec<usize> {
        self.ranks
            .iter()
            .enumerate()
            .filter(|(_, r)| **r == 0)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Ranks populations according to a [`RankConfig`].
///
/// # Usage
///
/// ```
/// use u_pareto::pareto::{ParetoRanker, Population, RankConfig, RankingMode, Sample};
///
/// let population = Population::from_samples(2, vec![
///     Sample::new("A", vec![3.0, 3.0]),
///     Sample::new("B", vec![1.0, 1.0]),
///     Sample::new("C", vec![2.0, 2.0]),
///     Sample::new("D", vec![3.0, 1.0]),
/// ]).unwrap();
///
/// let result = ParetoRanker::rank(&population, &RankConfig::default()).unwrap();
/// assert_eq!(result.ranks, vec![0, 2, 1, 1]);
///
/// let config = RankConfig::default().with_mode(RankingMode::Cardinality);
/// let result = ParetoRanker::rank(&population, &config).unwrap();
/// assert_eq!(result.ranks, vec![0, 3, 1, 1]);
/// ```
pub struct ParetoRanker;

impl ParetoRanker {
    /// Validates `config` against the population, then ranks it with the
    /// configured mode.
    pub fn rank(population: &Population, config: &RankConfig) -> Result<RankResult, ParetoError> {
        config.validate(population.feature_count())?;

        let fuzziness = config.fuzziness();
        let ranks = match config.mode {
            RankingMode::FrontPeeling => front_peeling_ranks(population, fuzziness, config.direction)?,
            RankingMode::Cardinality => cardinality_ranks(population, fuzziness, config.direction)?,
        };

        Ok(RankResult {
            ranks,
            mode: config.mode,
        })
    }
}

/// Assigns each sample the index of its Pareto front.
///
/// Front 0 holds the samples no one dominates; front `k + 1` holds the
/// samples whose dominators all sit in fronts `0..=k`.
///
/// # Complexity
///
/// O(f * n²) time, O(n²) worst-case space for the dominance graph.
///
/// # Panics
///
/// In debug builds, panics if `fuzziness` does not hold one tolerance per
/// feature. Use [`ParetoRanker::rank`] for a validated entry point.
pub fn front_peeling_ranks(
    population: &Population,
    fuzziness: Option<&[f64]>,
    direction: Direction,
) -> Result<Vec<usize>, ParetoError> {
    let n = population.len();
    let mut graph = DominanceGraph::build(population, fuzziness, direction)?;

    let mut ranks = try_filled(n, usize::MAX)?;
    let mut current: Vec<usize> = try_with_capacity(n)?;
    current.extend((0..n).filter(|&i| graph.domination_count[i] == 0));

    let mut front = 0;
    let mut assigned = 0;
    while !current.is_empty() {
        for &i in &current {
            ranks[i] = front;
        }
        assigned += current.len();

        let mut next = try_with_capacity(n - assigned)?;
        for &i in &current {
            for &j in &graph.dominated[i] {
                graph.domination_count[j] -= 1;
                if graph.domination_count[j] == 0 {
                    next.push(j);
                }
            }
        }

        current = next;
        front += 1;
    }

    // dominance is acyclic, so peeling reaches every sample
    debug_assert_eq!(assigned, n, "dominance graph contains a cycle");

    Ok(ranks)
}

/// Assigns each sample the number of samples that dominate it.
///
/// # Complexity
///
/// O(f * n²) time, O(n) space.
pub fn cardinality_ranks(
    population: &Population,
    fuzziness: Option<&[f64]>,
    direction: Direction,
) -> Result<Vec<usize>, ParetoError> {
    let samples = population.samples();
    let mut ranks = try_filled(samples.len(), 0)?;

    for (i, p) in samples.iter().enumerate() {
        for (j, q) in samples.iter().enumerate().skip(i + 1) {
            match compare(p.features(), q.features(), fuzziness, direction) {
                Dominance::PDominates => ranks[j] += 1,
                Dominance::QDominates => ranks[i] += 1,
                Dominance::Incomparable => {}
            }
        }
    }

    Ok(ranks)
}

/// Dominance relations of one population, owned by a single ranking call.
struct DominanceGraph {
    /// For each sample, the indices of the samples it dominates.
    dominated: Vec<Vec<usize>>,
    /// For each sample, how many samples dominate it.
    domination_count: Vec<usize>,
}

impl DominanceGraph {
    fn build(
        population: &Population,
        fuzziness: Option<&[f64]>,
        direction: Direction,
    ) -> Result<Self, ParetoError> {
        let samples = population.samples();
        let n = samples.len();

        let mut dominated: Vec<Vec<usize>> = try_with_capacity(n)?;
        dominated.resize_with(n, Vec::new);
        let mut domination_count: Vec<usize> = try_filled(n, 0)?;

        // each unordered pair is compared once: O(n*n / 2)
        for (i, p) in samples.iter().enumerate() {
            for (j, q) in samples.iter().enumerate().skip(i + 1) {
                match compare(p.features(), q.features(), fuzziness, direction) {
                    Dominance::PDominates => {
                        try_push(&mut dominated[i], j)?;
                        domination_count[j] += 1;
                    }
                    Dominance::QDominates => {
                        try_push(&mut dominated[j], i)?;
                        domination_count[i] += 1;
                    }
                    Dominance::Incomparable => {}
                }
            }
        }

        Ok(Self {
            dominated,
            domination_count,
        })
    }
}

// The three helpers below are the only way ranking code allocates: the
// rank arrays, the per-sample lists and the front buffers all go through
// them, so covering them covers AllocationFailure for both modes.

fn try_with_capacity<T>(capacity: usize) -> Result<Vec<T>, ParetoError> {
    let mut v = Vec::new();
    v.try_reserve_exact(capacity)
        .map_err(|_| ParetoError::AllocationFailure { requested: capacity })?;
    Ok(v)
}

fn try_filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>, ParetoError> {
    let mut v = try_with_capacity(len)?;
    v.resize(len, value);
    Ok(v)
}

fn try_push<T>(v: &mut Vec<T>, value: T) -> Result<(), ParetoError> {
    if v.len() == v.capacity() {
        v.try_reserve(1)
            .map_err(|_| ParetoError::AllocationFailure { requested: v.len() + 1 })?;
    }
    v.push(value);
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
