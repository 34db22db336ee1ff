// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Closed-system time evolution.
//!
//! Advances a normalized state under a fixed Hamiltonian `H` by repeated
//! application of the first-order operator
//!
//!   U = I − i·H·dt
//!
//! followed by a single renormalization. Truncation error grows with `dt`;
//! callers trade accuracy for speed by choosing it.
//!
//! # Example
//!
//! ```ignore
//! use qubit_os_evolve::{EvolutionSolver, Matrix, QuantumState};
//!
//! let h = Matrix::from_real(vec![vec![0.0, 1.0], vec![1.0, 0.0]])?;
//! let solver = EvolutionSolver::new(h)?;
//! let mut psi = QuantumState::from_real(&[1.0, 0.0]);
//! let result = solver.evolve(&mut psi, 1.0, 0.01)?;
//! println!("{} steps, P = {:?}", result.steps, psi.probabilities());
//! ```

pub mod solver;
pub mod types;

pub use solver::EvolutionSolver;
pub use types::{EvolutionConfig, EvolutionResult};
