// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration management for evolution runs.
//!
//! Configuration is loaded from multiple sources with the following priority
//! (later sources override earlier ones):
//!
//! 1. Built-in defaults
//! 2. evolve.yaml file
//! 3. Environment variables (QUBITOS_*)
//! 4. CLI arguments

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::{Error, Result};
use crate::evolution::EvolutionConfig;
use crate::gates;
use crate::matrix::literal::parse_scalars;
use crate::matrix::{Matrix, MatrixLiteral};
use crate::state::QuantumState;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Hamiltonian as a matrix literal
    #[serde(default = "default_hamiltonian")]
    pub hamiltonian: MatrixLiteral,

    /// Initial state
    #[serde(default)]
    pub initial_state: InitialStateConfig,

    /// Evolution settings
    #[serde(default)]
    pub evolution: EvolutionConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hamiltonian: default_hamiltonian(),
            initial_state: InitialStateConfig::default(),
            evolution: EvolutionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_hamiltonian() -> MatrixLiteral {
    MatrixLiteral::from_matrix(&gates::pauli_x())
}

impl Config {
    /// Load configuration from file and environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(path) = config_path {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                config = serde_yaml::from_str(&content)?;
            }
        } else {
            for path in &["evolve.yaml", "evolve.yml"] {
                let path = Path::new(path);
                if path.exists() {
                    let content = std::fs::read_to_string(path)?;
                    config = serde_yaml::from_str(&content)?;
                    break;
                }
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("QUBITOS_EVOLVE_TOTAL_TIME") {
            if let Ok(t) = val.parse() {
                self.evolution.total_time = t;
            }
        }
        if let Ok(val) = env::var("QUBITOS_EVOLVE_TIME_STEP") {
            if let Ok(dt) = val.parse() {
                self.evolution.time_step = dt;
            }
        }
        if let Ok(val) = env::var("QUBITOS_EVOLVE_STORE_TRAJECTORY") {
            self.evolution.store_trajectory = val.to_lowercase() == "true" || val == "1";
        }
        if let Ok(val) = env::var("QUBITOS_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = env::var("QUBITOS_LOG_FORMAT") {
            self.logging.format = val;
        }
    }

    /// Validate configuration.
    ///
    /// Only checks scalar settings; literal contents are checked when the
    /// runtime objects are built.
    pub fn validate(&self) -> Result<()> {
        self.evolution.validate()?;
        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(Error::Config(format!(
                    "unknown log format '{other}', expected 'pretty' or 'json'"
                )))
            }
        }
        let steps = self.evolution.steps();
        if steps > LARGE_STEP_COUNT {
            tracing::warn!(
                steps,
                "Evolution requires a large number of steps; consider a larger time_step"
            );
        }
        Ok(())
    }

    /// Build the Hamiltonian from its literal.
    pub fn hamiltonian(&self) -> Result<Matrix> {
        self.hamiltonian.to_matrix()
    }

    /// Build the initial state.
    pub fn initial_state(&self) -> Result<QuantumState> {
        self.initial_state.build()
    }
}

const LARGE_STEP_COUNT: usize = 10_000_000;

/// Initial state description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InitialStateConfig {
    /// Explicit amplitudes, normalized on load
    Amplitudes { values: Vec<serde_yaml::Value> },
    /// Equal superposition over `size` basis states
    Uniform { size: usize },
    /// Gaussian wavepacket sampled at `x = 0..size`
    Gaussian { size: usize, mu: f64, sigma: f64 },
}

impl Default for InitialStateConfig {
    fn default() -> Self {
        Self::Amplitudes {
            values: vec![1.into(), 0.into()],
        }
    }
}

impl InitialStateConfig {
    pub fn build(&self) -> Result<QuantumState> {
        match self {
            Self::Amplitudes { values } => {
                if values.is_empty() {
                    return Err(Error::Config("initial_state.values is empty".into()));
                }
                Ok(QuantumState::new(parse_scalars(values)?))
            }
            Self::Uniform { size } => {
                if *size == 0 {
                    return Err(Error::Config("initial_state.size must be > 0".into()));
                }
                Ok(QuantumState::uniform(*size))
            }
            Self::Gaussian { size, mu, sigma } => {
                if *size == 0 {
                    return Err(Error::Config("initial_state.size must be > 0".into()));
                }
                QuantumState::gaussian(*size, *mu, *sigma)
            }
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}
