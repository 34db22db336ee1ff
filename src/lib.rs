// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! QubitOS Evolve
//!
//! Dense complex linear algebra and first-order time evolution of
//! closed quantum systems.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            EvolutionSolver               │
//! │        U = I − i·H·dt, n steps           │
//! ├──────────────────┬──────────────────────┤
//! │  QuantumState    │   Gate catalog       │
//! │  (amplitudes)    │   (embed onto I)     │
//! ├──────────────────┴──────────────────────┤
//! │   Matrix · builders · GEPP solver        │
//! │           (ndarray, num-complex)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`matrix`]: Dense complex matrix, builders and linear solver
//! - [`state`]: Normalized state vectors
//! - [`evolution`]: First-order time evolution
//! - [`gates`]: Named gate matrices
//! - [`math`]: Scalar functions with restricted domains
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod evolution;
pub mod gates;
pub mod math;
pub mod matrix;
pub mod state;

pub use config::Config;
pub use error::{Error, Result, ShapeError};
pub use evolution::{EvolutionConfig, EvolutionResult, EvolutionSolver};
pub use matrix::{
    columns_to_matrix, embed, filled_matrix, identity_matrix, solve, Matrix, Scalar,
};
pub use state::QuantumState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
