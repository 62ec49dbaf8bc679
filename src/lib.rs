//! Pareto dominance ranking for multi-objective selection.
//!
//! Ranks each member of a population of samples (identifier + feature
//! vector) by Pareto dominance:
//!
//! - **Dominance**: pairwise comparison under one global direction
//!   (maximize or minimize) with optional per-feature fuzziness.
//! - **Front peeling**: non-dominated sorting; rank is the Pareto front
//!   index (0 = non-dominated).
//! - **Cardinality**: rank is the number of samples dominating a sample.
//! - **Tables**: reading populations from and writing ranks to the
//!   whitespace-delimited table format.
//!
//! # Architecture
//!
//! The [`pareto`] module is pure: no I/O, no logging, no global state.
//! Everything that touches the outside world lives in [`table`] and in
//! the `pareto-rank` binary.

pub mod pareto;
pub mod table;
