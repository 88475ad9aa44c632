//! `modntt` command-line driver
//!
//! Multiplies two random polynomials in F_P[X]/(X^N - 1) through the
//! number-theoretic transform and checks the product against the schoolbook
//! convolution.

mod config;
mod render;
mod report;
mod sample;
mod selftest;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use modntt_core::params::NttParams;

use crate::config::{OutputFormat, PartialConfig, RunConfig};
use crate::report::RunReport;

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser)]
#[command(name = "modntt")]
#[command(
    version,
    about = "Exact cyclic convolution over F_P via the number-theoretic transform",
    long_about = None
)]
struct Cli {
    /// Tracing filter used when RUST_LOG is unset
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convolve two random sequences and compare against the reference
    Run {
        /// Transform length N (must divide P - 1)
        #[arg(value_name = "N")]
        length: Option<usize>,
        /// Prime modulus P
        #[arg(value_name = "P")]
        modulus: Option<u64>,
        /// Use this primitive N-th root of unity instead of deriving one
        #[arg(long)]
        root: Option<u64>,
        /// Seed for reproducible test vectors
        #[arg(long)]
        seed: Option<u64>,
        /// TOML or JSON file with default settings
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Report format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Run the built-in arithmetic checks
    Selftest,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            length,
            modulus,
            root,
            seed,
            config,
            format,
        } => {
            let file = match config {
                Some(path) => PartialConfig::load(&path)?,
                None => PartialConfig::default(),
            };
            let overrides = PartialConfig {
                length,
                modulus,
                root,
                seed,
                log_level: cli.log_level,
                format,
            };
            let run_config = RunConfig::try_from(file.merge(overrides))?;

            init_tracing(run_config.log_level.as_deref());
            run(&run_config)
        }
        Commands::Selftest => {
            init_tracing(cli.log_level.as_deref());
            self_test()
        }
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or(DEFAULT_LOG_LEVEL)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &RunConfig) -> Result<ExitCode> {
    let report = execute(config)?;
    println!("{}", report.render(config.format)?);

    if report.success {
        Ok(ExitCode::SUCCESS)
    } else {
        error!(
            n = config.length,
            modulus = config.modulus,
            "NTT convolution disagrees with the reference"
        );
        Ok(ExitCode::FAILURE)
    }
}

/// Derive or validate the root, draw the inputs and run both convolutions.
fn execute(config: &RunConfig) -> Result<RunReport> {
    let (n, p) = (config.length, config.modulus);
    let params = match config.root {
        Some(root) => NttParams::with_root(n, p, root),
        None => NttParams::new(n, p),
    }
    .with_context(|| format!("cannot set up a length-{n} transform over F_{p}"))?;
    info!(n, modulus = p, root = params.root(), "transform parameters ready");

    let mut rng = sample::rng_from_seed(config.seed);
    let lhs = sample::random_sequence(&mut rng, n, p);
    let rhs = sample::random_sequence(&mut rng, n, p);

    let check = params.verify(&lhs, &rhs).context("convolution failed")?;
    Ok(RunReport::new(params, lhs, rhs, check))
}

fn self_test() -> Result<ExitCode> {
    let failures = selftest::run_all()?;
    for failure in &failures {
        error!("{failure}");
    }
    if failures.is_empty() {
        println!("Tests Completed");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{} self-test check(s) failed", failures.len());
        Ok(ExitCode::FAILURE)
    }
}
