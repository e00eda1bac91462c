// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lychrel_obstruction::analysis::{count_classifications, residue_orbit, verify_up_to};
use lychrel_obstruction::certifier::{Certifier, Classification};
use lychrel_obstruction::config::EngineConfig;
use lychrel_obstruction::digits::DigitSequence;
use lychrel_obstruction::hensel::{try_lift, Minor};
use lychrel_obstruction::report::OrbitReport;
use lychrel_obstruction::ring::Prime;

#[derive(Debug, Parser)]
#[command(
    name = "lychrel",
    about = "Modular obstructions to palindromes under reverse-and-add",
    version
)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML engine configuration.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: EngineOverrides,

    #[command(subcommand)]
    command: Command,
}

/// Command-line overrides applied on top of the configuration file.
#[derive(Debug, Args)]
struct EngineOverrides {
    /// Prime for the congruence, lift and edge-digit checks.
    #[arg(long, global = true)]
    prime: Option<u64>,

    /// Highest Hensel level K_max.
    #[arg(long, global = true, value_name = "K")]
    hensel_levels: Option<u32>,

    /// Highest power tried by the edge-digit check.
    #[arg(long, global = true, value_name = "K")]
    empirical_levels: Option<u32>,

    /// Skip the Hensel lift in each record.
    #[arg(long, global = true)]
    no_lift: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify every iterate of an orbit and write a JSON report.
    Orbit {
        #[arg(long, default_value = "196")]
        seed: DigitSequence,

        #[arg(long, default_value_t = 100)]
        iterations: usize,

        /// Report path; the summary is printed either way.
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Print the Jacobian rank summary for each number.
    Jacobian {
        #[arg(required = true)]
        numbers: Vec<DigitSequence>,
    },

    /// Hensel lift the carries of one number.
    Lift {
        number: DigitSequence,

        /// Carry columns of the minor, e.g. `1,3`; searched for when omitted.
        #[arg(long, value_delimiter = ',')]
        minor: Option<Vec<usize>>,
    },

    /// Residues of an orbit modulo each M.
    Moduli {
        #[arg(long, default_value = "196")]
        seed: DigitSequence,

        #[arg(long = "modulus", short = 'm', default_values_t = [1024u64, 4096, 1_000_000])]
        moduli: Vec<u64>,

        #[arg(long, default_value_t = 20_000)]
        max_iter: usize,

        /// Classify each residue's first representative.
        #[arg(long)]
        classify: bool,
    },

    /// Check that (I + R)^2 vanishes modulo 2 for the reversal matrix R.
    Nilpotence {
        #[arg(long, default_value_t = 100)]
        max_size: usize,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let overrides = &cli.overrides;
    if let Some(p) = overrides.prime {
        config.prime = Prime::new(p).context("--prime")?;
    }
    if let Some(k) = overrides.hensel_levels {
        config.hensel_levels = k;
    }
    if let Some(k) = overrides.empirical_levels {
        config.empirical_levels = k;
    }
    if overrides.no_lift {
        config.run_lift = false;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = load_config(&cli)?;

    match cli.command {
        Command::Orbit {
            seed,
            iterations,
            output,
        } => {
            info!(%seed, iterations, prime = %config.prime, "certifying orbit");
            let log = Certifier::new(config.clone()).certify_orbit(seed.clone(), iterations);
            let report = OrbitReport::new(seed, iterations, config, log);
            for (tag, count) in &report.summary {
                println!("{:<24} {}", tag, count);
            }
            if let Some(at) = report.reached_palindrome_at {
                println!("palindrome after iteration {}", at);
            }
            if let Some(path) = output {
                report.write(&path)?;
                info!(path = %path.display(), "wrote report");
            }
        }
        Command::Jacobian { numbers } => {
            for n in numbers {
                let summary = Certifier::jacobian_summary(&n);
                println!(
                    "{}: digits={} constraints={} carries={} rank_mod2={} full_row_rank={}",
                    n,
                    n.len(),
                    summary.constraints,
                    summary.carries,
                    summary.rank_mod2,
                    summary.full_row_rank
                );
            }
        }
        Command::Lift { number, minor } => {
            let minor = minor.map(Minor::new);
            let outcome = try_lift(&number, minor, config.hensel_levels, config.prime);
            println!("{}: {}", number, outcome);
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Command::Moduli {
            seed,
            moduli,
            max_iter,
            classify,
        } => {
            let certifier = Certifier::new(config);
            for m in moduli {
                if m == 0 {
                    bail!("modulus must be positive");
                }
                let orbit = residue_orbit(seed.clone(), m, max_iter);
                match orbit.repeat {
                    Some(repeat) => println!(
                        "M={}: {} residues, repeat at iteration {} (first seen {})",
                        m,
                        orbit.distinct_residues(),
                        repeat.iteration,
                        repeat.first_seen
                    ),
                    None => println!(
                        "M={}: {} residues, no repeat within {}",
                        m,
                        orbit.distinct_residues(),
                        max_iter
                    ),
                }
                if classify {
                    let checks = orbit.classify(&certifier);
                    for classification in [
                        Classification::TheoreticalObstruction,
                        Classification::NeedsEmpiricalCheck,
                        Classification::RingSolvable,
                    ] {
                        let count = count_classifications(&checks, classification);
                        println!("  {:<24} {}", classification, count);
                    }
                }
            }
        }
        Command::Nilpotence { max_size } => match verify_up_to(max_size) {
            Ok(()) => println!("(I + R)^2 = 0 mod 2 for d = 1..={}", max_size),
            Err(failure) => bail!(
                "(I + R)^2 is non-zero mod 2 for d = {}:\n{}",
                failure.size,
                failure.square
            ),
        },
    }
    Ok(())
}
