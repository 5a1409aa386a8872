use std::io::{self, prelude::*, BufWriter};
use std::process::exit;

use anyhow::{anyhow, Result};
use clap::{error::ErrorKind, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use exprv::{args, generate_to, uniform::Engine, ZeroPolicy};

/// Generates n random numbers from the exponential distribution
/// f(x) = lambda * exp(-lambda * x)
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// number of samples
    #[arg(value_parser = args::parse_count, allow_negative_numbers = true)]
    n: u64,

    /// rate of the distribution, strictly positive
    #[arg(value_parser = args::parse_rate, allow_negative_numbers = true)]
    lambda: f64,

    /// seed of the random generator, defaults to the current time in seconds
    #[arg(value_parser = args::parse_seed, allow_negative_numbers = true)]
    seed: Option<u64>,

    /// uniform generator backing the sampling
    #[arg(long, value_enum, default_value_t = Engine::Std)]
    engine: Engine,

    /// what to do when the uniform sample is exactly 0
    #[arg(long, value_enum, default_value_t = ZeroPolicy::Propagate)]
    on_zero: ZeroPolicy,
}

fn usage(program: &str) -> String {
    format!(
        "usage: {} n lambda [seed]\n  Generates n random numbers from the exponential distribution f(x) = lambda * exp(-lambda * x)\n",
        program
    )
}

fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            let program = std::env::args().next().unwrap_or_else(|| "exprv".to_string());
            print!("{}", usage(&program));
            exit(-1);
        }
        Err(e) => e.exit(),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .try_init()
        .map_err(|e| anyhow!("cannot init logger: {}", e))?;

    let cli = parse_args();

    let seed = match cli.seed {
        Some(seed) => seed,
        None => {
            let seed = args::default_seed();
            info!("no seed given, using the current time: {}", seed);
            seed
        }
    };

    info!(
        "generating {} samples with lambda = {}, seed = {} and engine {:?}",
        cli.n, cli.lambda, seed, cli.engine
    );

    let mut out = BufWriter::new(io::stdout().lock());
    let res = generate_to(&mut out, cli.engine, cli.n, cli.lambda, seed, cli.on_zero)
        .and_then(|_| out.flush());

    match res {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout has been closed");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
