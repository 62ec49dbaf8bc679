//! Serializer for ranked population tables.

use std::io::Write;

use tracing::trace;

use crate::pareto::{ParetoError, Population};

/// Writes the ranked population to `writer`.
///
/// The first line is `"<n> <f> 1"`. Each sample follows on its own line as
/// tab-separated fields: identifier, the echoed feature values, a literal
/// `:` and the rank.
///
/// Feature values use the shortest `%g`-style rendering with six
/// significant digits, so tables written here read back unchanged by tools
/// that expect that format.
///
/// # Example
///
/// ```
/// use u_pareto::pareto::{Population, Sample};
/// use u_pareto::table::write_ranks;
///
/// let population = Population::from_samples(2, vec![Sample::new("A", vec![3.0, 0.5])]).unwrap();
/// let mut out = Vec::new();
/// write_ranks(&mut out, &population, &[0]).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "1 2 1\nA\t3\t0.5\t:\t0\n");
/// ```
pub fn write_ranks<W: Write>(writer: &mut W, population: &Population, ranks: &[usize]) -> Result<(), ParetoError> {
    if ranks.len() != population.len() {
        return Err(ParetoError::MalformedInput {
            token: 0,
            message: format!("{} ranks given for {} samples", ranks.len(), population.len()),
        });
    }

    writeln!(writer, "{} {} 1", population.len(), population.feature_count())?;
    for (sample, rank) in population.iter().zip(ranks) {
        write!(writer, "{}", sample.id())?;
        for &value in sample.features() {
            write!(writer, "\t{}", format_general(value))?;
        }
        writeln!(writer, "\t:\t{rank}")?;
        trace!(id = sample.id(), rank, "wrote sample");
    }
    writer.flush()?;

    Ok(())
}

/// Formats `value` like C's `%g`: six significant digits, trailing zeros
/// removed, scientific notation when the exponent is below -4 or at least 6.
pub fn format_general(value: f64) -> String {
    const PRECISION: i32 = 6;

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }
    if value == 0.0 {
        return String::from(if value.is_sign_negative() { "-0" } else { "0" });
    }

    // the exponent after rounding to PRECISION significant digits
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_trailing_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
