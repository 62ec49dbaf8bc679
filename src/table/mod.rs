//! Textual population tables.
//!
//! Reads populations from, and writes ranked populations to, the
//! whitespace-delimited table format consumed by the `pareto-rank` tool.
//!
//! # Input
//!
//! ```text
//! 4 2 0
//! A 3 3
//! B 1 1
//! C 2 2
//! D 3 1
//! ```
//!
//! # Output
//!
//! ```text
//! 4 2 1
//! A	3	3	:	0
//! B	1	1	:	2
//! C	2	2	:	1
//! D	3	1	:	1
//! ```

mod reader;
mod writer;

pub use reader::{parse_population, read_population, Table};
pub use writer::{format_general, write_ranks};
