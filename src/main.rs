// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! QubitOS Evolve CLI
//!
//! Evolves a configured initial state under a configured Hamiltonian and
//! prints the resulting probability distribution.
//!
//! # Usage
//!
//! ```bash
//! # Evolve with default configuration (Pauli-X, |0⟩, t = 1)
//! qubit-os-evolve run
//!
//! # Custom config, finer step, machine-readable output
//! qubit-os-evolve run --config evolve.yaml --time-step 1e-4 --json
//!
//! # Check a configuration file
//! qubit-os-evolve validate --config evolve.yaml
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use qubit_os_evolve::{config::Config, EvolutionResult, EvolutionSolver, Result, VERSION};

/// QubitOS first-order evolution
#[derive(Parser)]
#[command(name = "qubit-os-evolve")]
#[command(author = "QubitOS Contributors")]
#[command(version = VERSION)]
#[command(about = "First-order time evolution of closed quantum systems")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, env = "QUBITOS_EVOLVE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "QUBITOS_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evolve the configured state and print its probabilities
    Run {
        /// Total evolution time
        #[arg(long)]
        total_time: Option<f64>,

        /// Time step
        #[arg(long)]
        time_step: Option<f64>,

        /// Record the state after every step
        #[arg(long)]
        trajectory: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show effective configuration
    Config,

    /// Validate configuration file
    Validate,
}

/// Machine-readable output of `run`.
#[derive(Serialize)]
struct RunReport {
    steps: usize,
    final_norm: f64,
    probabilities: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trajectory: Option<Vec<Vec<f64>>>,
}

impl RunReport {
    fn new(result: EvolutionResult, probabilities: Vec<f64>) -> Self {
        Self {
            steps: result.steps,
            final_norm: result.final_norm,
            probabilities,
            trajectory: result
                .trajectory
                .map(|traj| traj.iter().map(|s| s.probabilities()).collect()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    init_logging(&config.logging.level, &config.logging.format);

    match cli.command {
        Commands::Run {
            total_time,
            time_step,
            trajectory,
            json,
        } => {
            // Override config with CLI args
            if let Some(t) = total_time {
                config.evolution.total_time = t;
            }
            if let Some(dt) = time_step {
                config.evolution.time_step = dt;
            }
            if trajectory {
                config.evolution.store_trajectory = true;
            }

            config.validate()?;

            let solver = EvolutionSolver::new(config.hamiltonian()?)?;
            let mut state = config.initial_state()?;

            info!(
                version = VERSION,
                dimension = solver.dimension(),
                total_time = config.evolution.total_time,
                time_step = config.evolution.time_step,
                "Starting evolution"
            );

            let result = solver.run(&mut state, &config.evolution)?;
            let probabilities = state.probabilities();

            info!(
                steps = result.steps,
                final_norm = result.final_norm,
                "Evolution complete"
            );

            if json {
                let report = RunReport::new(result, probabilities);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Final state: {}", state);
                println!("{:>8}  {:>12}", "basis", "probability");
                for (i, p) in probabilities.iter().enumerate() {
                    println!("{:>8}  {:>12.6}", i, p);
                }
            }
        }

        Commands::Config => {
            // Show effective configuration
            println!("{}", serde_yaml::to_string(&config)?);
        }

        Commands::Validate => {
            let checked = config
                .validate()
                .and_then(|()| config.hamiltonian())
                .and_then(EvolutionSolver::new)
                .and_then(|solver| {
                    let state = config.initial_state()?;
                    if state.len() != solver.dimension() {
                        return Err(qubit_os_evolve::ShapeError::StateLength {
                            expected: solver.dimension(),
                            actual: state.len(),
                        }
                        .into());
                    }
                    Ok(())
                });
            match checked {
                Ok(()) => {
                    println!("Configuration is valid");
                }
                Err(e) => {
                    eprintln!("Configuration error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Initialize logging with tracing.
fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    if format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
