// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! First-order time evolution under a fixed Hamiltonian.
//!
//! Each step applies `U = I − i·H·dt`, the first-order truncation of
//! `exp(−i·H·dt)`. `U` is not unitary, so the propagated vector drifts in
//! norm; the state is renormalized once at the end of every run.

use num_complex::Complex64;
use tracing::{debug, trace, warn};

use super::types::{EvolutionConfig, EvolutionResult};
use crate::error::{Result, ShapeError};
use crate::matrix::{columns_to_matrix, identity_matrix, Matrix};
use crate::state::{euclidean_norm, QuantumState};

/// Above this `‖H‖∞·dt` the first-order step is coarse.
const COARSE_STEP_THRESHOLD: f64 = 0.1;

/// Upper bound on trajectory snapshots reserved before stepping.
const TRAJECTORY_PREALLOCATION: usize = 1024;

/// Evolves states under a fixed Hamiltonian.
#[derive(Debug, Clone)]
pub struct EvolutionSolver {
    hamiltonian: Matrix,
}

impl EvolutionSolver {
    /// Create a solver for a square Hamiltonian.
    ///
    /// Hermiticity is not checked.
    pub fn new(hamiltonian: Matrix) -> Result<Self> {
        if !hamiltonian.is_square() {
            return Err(ShapeError::NotSquare {
                operation: "evolution",
                rows: hamiltonian.rows(),
                cols: hamiltonian.cols(),
            }
            .into());
        }
        Ok(Self { hamiltonian })
    }

    pub fn hamiltonian(&self) -> &Matrix {
        &self.hamiltonian
    }

    /// Dimension of the state space.
    pub fn dimension(&self) -> usize {
        self.hamiltonian.rows()
    }

    /// One-step operator `U = I − i·H·dt`.
    pub fn evolution_operator(&self, dt: f64) -> Result<Matrix> {
        let identity = identity_matrix(self.dimension())?;
        let generator = self
            .hamiltonian
            .scale(Complex64::new(0.0, 1.0))
            .scale(Complex64::new(dt, 0.0));
        identity.subtract(&generator)
    }

    /// Evolve `state` for `total_time` in steps of `dt`.
    ///
    /// Applies `U` exactly `floor(total_time / dt)` times, then renormalizes.
    pub fn evolve(
        &self,
        state: &mut QuantumState,
        total_time: f64,
        dt: f64,
    ) -> Result<EvolutionResult> {
        self.run(state, &EvolutionConfig::new(total_time, dt))
    }

    /// Evolve `state` as described by `config`.
    ///
    /// On error the state is left untouched.
    pub fn run(&self, state: &mut QuantumState, config: &EvolutionConfig) -> Result<EvolutionResult> {
        config.validate()?;

        let d = self.dimension();
        if state.len() != d {
            return Err(ShapeError::StateLength {
                expected: d,
                actual: state.len(),
            }
            .into());
        }

        let dt = config.time_step;
        let steps = config.steps();
        let stiffness = self.hamiltonian.infinity_norm() * dt;
        debug!(dimension = d, steps, dt, "Evolving state");
        if stiffness > COARSE_STEP_THRESHOLD {
            warn!(
                norm_dt = stiffness,
                threshold = COARSE_STEP_THRESHOLD,
                "Time step is coarse for a first-order step; expect truncation error"
            );
        }

        let operator = self.evolution_operator(dt)?;
        let mut psi = columns_to_matrix(&[state.amplitudes().to_vec()])?;

        let mut trajectory = if config.store_trajectory {
            let capacity = steps.saturating_add(1).min(TRAJECTORY_PREALLOCATION);
            let mut traj = Vec::with_capacity(capacity);
            traj.push(state.clone());
            Some(traj)
        } else {
            None
        };

        for step in 0..steps {
            psi = operator.multiply(&psi)?;

            if let Some(ref mut traj) = trajectory {
                let column = psi.column(0)?;
                trace!(step, norm = euclidean_norm(&column), "Evolution step");
                traj.push(QuantumState::new(column));
            }
        }

        let column = psi.column(0)?;
        let final_norm = euclidean_norm(&column);
        state.set_amplitudes(column);

        Ok(EvolutionResult {
            steps,
            final_norm,
            trajectory,
        })
    }
}
