//! Parser for the whitespace-delimited population table.

use std::io::Read;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::pareto::{ParetoError, Population, Sample};

/// A population read from a table, together with the optional group ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Samples in table order.
    pub population: Population,

    /// Group id trailing each sample, when the header's group flag is set.
    ///
    /// Group ids are carried along but play no role in ranking.
    pub groups: Option<Vec<i64>>,
}

/// Reads a population table from `reader`.
///
/// The format is a stream of whitespace-separated tokens:
///
/// ```text
/// n f g
/// id_1 v_1 .. v_f [sep group]
/// ..
/// id_n v_1 .. v_f [sep group]
/// ```
///
/// `sep group` is present only when `g` is non-zero. Line breaks carry no
/// meaning. Tokens after the last sample are ignored.
///
/// # Example
///
/// ```
/// use u_pareto::table::read_population;
///
/// let input = "2 2 1\nA 3 3 : 7\nB 1 1 : 8\n";
/// let table = read_population(input.as_bytes()).unwrap();
/// assert_eq!(table.population.len(), 2);
/// assert_eq!(table.groups, Some(vec![7, 8]));
/// ```
pub fn read_population<R: Read>(mut reader: R) -> Result<Table, ParetoError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_population(&text)
}

/// Parses a population table held in memory. See [`read_population`].
pub fn parse_population(text: &str) -> Result<Table, ParetoError> {
    let mut tokens = Tokens::new(text);

    let n: usize = tokens.parse("population size")?;
    let f: usize = tokens.parse("feature count")?;
    let g: i64 = tokens.parse("group flag")?;
    debug!(n, f, g, "reading population table");

    // counts come from untrusted input, so nothing is preallocated from them
    let mut population = Population::new(f);
    let mut groups = (g != 0).then(Vec::new);

    for _ in 0..n {
        let id = tokens.next("sample identifier")?.to_string();

        let mut features = Vec::new();
        for k in 0..f {
            let value: f64 = tokens.parse_with(|| format!("value of feature #{k} for sample '{id}'"))?;
            features.push(value);
        }

        if let Some(groups) = groups.as_mut() {
            tokens.next("group separator")?;
            let group: i64 = tokens.parse_with(|| format!("group id for sample '{id}'"))?;
            groups.push(group);
        }

        trace!(id = %id, ?features, "parsed sample");
        population.push(Sample::new(id, features))?;
    }

    Ok(Table { population, groups })
}

/// Whitespace tokenizer that tracks the one-based position of each token.
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            position: 0,
        }
    }

    fn next(&mut self, what: &str) -> Result<&'a str, ParetoError> {
        self.position += 1;
        self.inner.next().ok_or_else(|| ParetoError::MalformedInput {
            token: self.position,
            message: format!("unexpected end of input, expected {what}"),
        })
    }

    fn parse<T: FromStr>(&mut self, what: &str) -> Result<T, ParetoError> {
        self.parse_with(|| what.to_string())
    }

    fn parse_with<T: FromStr>(&mut self, what: impl Fn() -> String) -> Result<T, ParetoError> {
        let token = self.next(&what())?;
        token.parse().map_err(|_| ParetoError::MalformedInput {
            token: self.position,
            message: format!("cannot parse '{token}' as {}", what()),
        })
    }
}
