// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Evolution configuration and result types.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::state::QuantumState;

/// Configuration for a first-order evolution run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Total evolution time.
    #[serde(default = "default_total_time")]
    pub total_time: f64,
    /// Step size `dt` of the operator `U = I − i·H·dt`.
    #[serde(default = "default_time_step")]
    pub time_step: f64,
    /// Whether to keep the normalized state after every step.
    #[serde(default)]
    pub store_trajectory: bool,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            total_time: default_total_time(),
            time_step: default_time_step(),
            store_trajectory: false,
        }
    }
}

fn default_total_time() -> f64 {
    1.0
}

fn default_time_step() -> f64 {
    0.01
}

impl EvolutionConfig {
    pub fn new(total_time: f64, time_step: f64) -> Self {
        Self {
            total_time,
            time_step,
            store_trajectory: false,
        }
    }

    /// Number of operator applications, `floor(total_time / time_step)`.
    pub fn steps(&self) -> usize {
        (self.total_time / self.time_step).floor() as usize
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(Error::invalid_parameter(
                "time_step",
                format!("must be finite and > 0, got {}", self.time_step),
            ));
        }
        if !self.total_time.is_finite() || self.total_time < 0.0 {
            return Err(Error::invalid_parameter(
                "total_time",
                format!("must be finite and >= 0, got {}", self.total_time),
            ));
        }
        let ratio = (self.total_time / self.time_step).floor();
        if ratio >= usize::MAX as f64 {
            return Err(Error::invalid_parameter(
                "total_time",
                format!(
                    "total_time / time_step = {ratio:e} exceeds the maximum step count {}",
                    usize::MAX
                ),
            ));
        }
        Ok(())
    }
}

/// Result of an evolution run.
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// Number of operator applications.
    pub steps: usize,
    /// Norm of the propagated vector before the final renormalization.
    ///
    /// Drifts away from 1 as `dt` grows, since `I − i·H·dt` is not unitary.
    pub final_norm: f64,
    /// Normalized state before the first step and after each step
    /// (if `store_trajectory` was true).
    pub trajectory: Option<Vec<QuantumState>>,
}
