//! Command line front end: reads a population table, ranks it, writes the
//! ranked table.
//!
//! ```text
//! pareto-rank [INPUT] [OUTPUT] [--minimize] [--fuzziness 0.1,0.0] [--mode cardinality] [--verbose]
//! ```
//!
//! Without INPUT the table is read from stdin; without OUTPUT the result
//! goes to stdout.

use std::fs::File;
use std::io::{stdin, stdout, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

use u_pareto::pareto::{Direction, ParetoRanker, RankConfig, RankingMode};
use u_pareto::table::{format_general, read_population, write_ranks};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Rank is the Pareto front index.
    Front,
    /// Rank is the number of dominating samples.
    Cardinality,
}

impl From<ModeArg> for RankingMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Front => RankingMode::FrontPeeling,
            ModeArg::Cardinality => RankingMode::Cardinality,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "pareto-rank", version, about = "Assigns Pareto ranks to a population of samples")]
struct Args {
    /// Population table to read (stdin when omitted).
    input: Option<PathBuf>,

    /// Where to write the ranked table (stdout when omitted).
    output: Option<PathBuf>,

    /// Treat lower feature values as better.
    #[arg(long)]
    minimize: bool,

    /// Per-feature fuzziness tolerances, comma separated.
    #[arg(long, value_delimiter = ',', num_args = 1)]
    fuzziness: Option<Vec<f64>>,

    /// Ranking mode.
    #[arg(long, value_enum, default_value_t = ModeArg::Front)]
    mode: ModeArg,

    /// Trace every sample read and ranked on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = run(&args) {
        eprintln!("pareto-rank: {err:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::default().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let reader: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open input file '{}'", path.display()))?,
        )),
        None => Box::new(stdin().lock()),
    };
    let table = read_population(reader).context("cannot read population")?;
    let population = table.population;

    let mut config = RankConfig::default()
        .with_direction(Direction::from(!args.minimize))
        .with_mode(args.mode.into());
    if let Some(tolerances) = &args.fuzziness {
        config = config.with_fuzziness(tolerances.clone());
    }
    info!(
        samples = population.len(),
        features = population.feature_count(),
        ?config,
        "ranking population"
    );

    for sample in population.iter() {
        debug!("i\t{}\t{}", sample.id(), join_values(sample.features()));
    }

    let result = ParetoRanker::rank(&population, &config).context("cannot rank population")?;

    for (sample, rank) in population.iter().zip(&result.ranks) {
        debug!("o\t{}\t{}\t:\t{}", sample.id(), join_values(sample.features()), rank);
    }

    let mut writer: BufWriter<Box<dyn Write>> = match &args.output {
        Some(path) => BufWriter::new(Box::new(
            File::create(path).with_context(|| format!("cannot create output file '{}'", path.display()))?,
        )),
        None => BufWriter::new(Box::new(stdout())),
    };
    write_ranks(&mut writer, &population, &result.ranks).context("cannot write ranks")?;

    Ok(())
}

fn join_values(values: &[f64]) -> String {
    values.iter().map(|&v| format_general(v)).collect::<Vec<_>>().join("\t")
}
