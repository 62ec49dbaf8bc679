//! Pairwise Pareto dominance with optional per-feature fuzziness.
//!
//! # Fuzziness
//!
//! When a fuzziness vector is supplied, a pair whose values differ by no
//! more than the tolerance on *any* feature is declared incomparable, no
//! matter how the remaining features compare. Differences within the
//! tolerance are treated as measurement noise that makes the whole
//! comparison inconclusive.
//!
//! This is not a strict partial order: with fuzziness enabled,
//! incomparability is not transitive (`a ~ b` and `b ~ c` do not imply
//! `a ~ c`). Ranking still terminates because dominance itself stays
//! irreflexive and antisymmetric per pair.

use super::types::{Direction, Dominance};

/// Compares two feature vectors for Pareto dominance.
///
/// `p` dominates `q` when it is at least as good on every feature and
/// strictly better on at least one, where "better" follows `direction`.
///
/// # Arguments
///
/// - `p`, `q`: feature vectors of equal length
/// - `fuzziness`: one non-negative tolerance per feature, or `None` for
///   exact comparison
/// - `direction`: whether higher or lower values are better
///
/// # Example
///
/// ```
/// use u_pareto::pareto::{compare, Direction, Dominance};
///
/// let p = [3.0, 3.0];
/// let q = [2.0, 2.0];
/// assert_eq!(compare(&p, &q, None, Direction::Maximize), Dominance::PDominates);
/// assert_eq!(compare(&p, &q, None, Direction::Minimize), Dominance::QDominates);
///
/// // feature 0 differs by 0.05 which is within its tolerance
/// let p = [1.0, 5.0];
/// let q = [1.05, 1.0];
/// let fuzz = [0.1, 0.0];
/// assert_eq!(compare(&p, &q, Some(&fuzz[..]), Direction::Maximize), Dominance::Incomparable);
/// ```
pub fn compare(p: &[f64], q: &[f64], fuzziness: Option<&[f64]>, direction: Direction) -> Dominance {
    debug_assert_eq!(p.len(), q.len(), "feature vectors must have the same length");
    if let Some(fuzz) = fuzziness {
        debug_assert_eq!(fuzz.len(), p.len(), "one tolerance per feature expected");
    }

    let sign = direction.sign();
    let mut consensus = 0i8;

    for (i, (&pv, &qv)) in p.iter().zip(q.iter()).enumerate() {
        match fuzziness {
            Some(fuzz) => {
                // inf - inf is NaN, so ties are checked before subtracting
                if pv == qv || (pv - qv).abs() <= fuzz[i] {
                    return Dominance::Incomparable;
                }
            }
            None => {
                if pv == qv {
                    continue;
                }
            }
        }

        let partial = if pv > qv { sign } else { -sign };
        if consensus == 0 {
            consensus = partial;
        } else if consensus != partial {
            return Dominance::Incomparable;
        }
    }

    match consensus {
        1 => Dominance::PDominates,
        -1 => Dominance::QDominates,
        _ => Dominance::Incomparable,
    }
}

/// Returns `true` if `p` dominates `q`.
pub fn dominates(p: &[f64], q: &[f64], fuzziness: Option<&[f64]>, direction: Direction) -> bool {
    compare(p, q, fuzziness, direction) == Dominance::PDominates
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strict_dominance_maximize() {
        assert_eq!(
            compare(&[3.0, 3.0], &[1.0, 1.0], None, Direction::Maximize),
            Dominance::PDominates
        );
        assert_eq!(
            compare(&[1.0, 1.0], &[3.0, 3.0], None, Direction::Maximize),
            Dominance::QDominates
        );
    }

    #[test]
    fn test_weak_dominance_with_one_equal_feature() {
        // equal on feature 1, better on feature 0
        assert_eq!(
            compare(&[3.0, 1.0], &[1.0, 1.0], None, Direction::Maximize),
            Dominance::PDominates
        );
        assert_eq!(
            compare(&[3.0, 1.0], &[1.0, 1.0], None, Direction::Minimize),
            Dominance::QDominates
        );
    }

    #[test]
    fn test_mixed_signals_incomparable() {
        assert_eq!(
            compare(&[2.0, 2.0], &[3.0, 1.0], None, Direction::Maximize),
            Dominance::Incomparable
        );
        assert_eq!(
            compare(&[1.0, 2.0, 3.0], &[1.0, 1.0, 4.0], None, Direction::Minimize),
            Dominance::Incomparable
        );
    }

    #[test]
    fn test_identical_vectors_incomparable() {
        assert_eq!(
            compare(&[1.0, 2.0], &[1.0, 2.0], None, Direction::Maximize),
            Dominance::Incomparable
        );
    }

    #[test]
    fn test_zero_features_incomparable() {
        let empty: &[f64] = &[];
        assert_eq!(compare(empty, empty, None, Direction::Maximize), Dominance::Incomparable);
        assert_eq!(compare(empty, empty, Some(empty), Direction::Minimize), Dominance::Incomparable);
    }

    #[test]
    fn test_fuzziness_short_circuit() {
        let fuzz = [0.1, 0.0];
        assert_eq!(
            compare(&[1.0, 5.0], &[1.05, 1.0], Some(&fuzz[..]), Direction::Maximize),
            Dominance::Incomparable
        );
    }

    #[test]
    fn test_fuzziness_late_feature_overrides_consensus() {
        // feature 0 establishes p-better, feature 1 falls inside its tolerance
        let fuzz = [0.0, 0.5];
        assert_eq!(
            compare(&[5.0, 1.0], &[1.0, 1.4], Some(&fuzz[..]), Direction::Maximize),
            Dominance::Incomparable
        );
    }

    #[test]
    fn test_zero_tolerance_treats_equality_as_incomparable() {
        // with fuzziness present an exact tie is within a zero tolerance
        let fuzz = [0.0, 0.0];
        assert_eq!(
            compare(&[3.0, 1.0], &[1.0, 1.0], Some(&fuzz[..]), Direction::Maximize),
            Dominance::Incomparable
        );
        assert_eq!(
            compare(&[3.0, 2.0], &[1.0, 1.0], Some(&fuzz[..]), Direction::Maximize),
            Dominance::PDominates
        );
    }

    #[test]
    fn test_fuzzy_incomparability_not_transitive() {
        let fuzz = [0.1];
        let a = [0.0];
        let b = [0.08];
        let c = [0.16];
        assert_eq!(compare(&a, &b, Some(&fuzz[..]), Direction::Maximize), Dominance::Incomparable);
        assert_eq!(compare(&b, &c, Some(&fuzz[..]), Direction::Maximize), Dominance::Incomparable);
        assert_eq!(compare(&a, &c, Some(&fuzz[..]), Direction::Maximize), Dominance::QDominates);
    }

    #[test]
    fn test_fuzziness_with_infinite_ties() {
        let fuzz = [0.1, 0.1];
        let p = [f64::INFINITY, 5.0];
        assert_eq!(compare(&p, &p, Some(&fuzz[..]), Direction::Maximize), Dominance::Incomparable);

        let q = [f64::INFINITY, 1.0];
        assert_eq!(compare(&p, &q, Some(&fuzz[..]), Direction::Maximize), Dominance::Incomparable);
        assert_eq!(compare(&q, &p, Some(&fuzz[..]), Direction::Maximize), Dominance::Incomparable);

        // opposite infinities are far apart, not tied
        let r = [f64::NEG_INFINITY, 1.0];
        assert_eq!(compare(&p, &r, Some(&fuzz[..]), Direction::Maximize), Dominance::PDominates);
        assert_eq!(compare(&r, &p, Some(&fuzz[..]), Direction::Maximize), Dominance::QDominates);
    }

    #[test]
    fn test_dominates_helper() {
        assert!(dominates(&[1.0], &[2.0], None, Direction::Minimize));
        assert!(!dominates(&[2.0], &[1.0], None, Direction::Minimize));
    }

    fn vector_pair(len: usize) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
        // small integer grid so ties actually occur
        let grid = || prop::collection::vec(grid_value(), len);
        (grid(), grid())
    }

    fn grid_value() -> impl Strategy<Value = f64> {
        prop_oneof![
            4 => (0i32..5).prop_map(f64::from),
            1 => Just(f64::INFINITY),
            1 => Just(f64::NEG_INFINITY),
        ]
    }

    proptest! {
        #[test]
        fn prop_compare_is_antisymmetric(
            (p, q) in (0usize..6).prop_flat_map(vector_pair),
            fuzz in prop::option::of(0.0f64..1.5),
            maximize in any::<bool>(),
        ) {
            let tolerances = fuzz.map(|t| vec![t; p.len()]);
            let direction = Direction::from(maximize);
            let forward = compare(&p, &q, tolerances.as_deref(), direction);
            let backward = compare(&q, &p, tolerances.as_deref(), direction);
            prop_assert_eq!(forward, backward.reverse());
        }

        #[test]
        fn prop_compare_is_irreflexive(
            p in prop::collection::vec(
                prop_oneof![
                    4 => -10.0f64..10.0,
                    1 => Just(f64::INFINITY),
                    1 => Just(f64::NEG_INFINITY),
                ],
                0..6,
            ),
            fuzz in prop::option::of(0.0f64..1.0),
            maximize in any::<bool>(),
        ) {
            let tolerances = fuzz.map(|t| vec![t; p.len()]);
            prop_assert_eq!(
                compare(&p, &p, tolerances.as_deref(), Direction::from(maximize)),
                Dominance::Incomparable
            );
        }

        #[test]
        fn prop_direction_flip_reverses_result(
            (p, q) in (1usize..5).prop_flat_map(vector_pair),
        ) {
            let max = compare(&p, &q, None, Direction::Maximize);
            let min = compare(&p, &q, None, Direction::Minimize);
            prop_assert_eq!(max, min.reverse());
        }
    }
}
