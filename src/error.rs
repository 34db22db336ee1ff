// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for the matrix engine and evolution solver.

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Engine error types.
#[derive(Debug, Error)]
pub enum Error {
    /// Operand dimensions are incompatible
    #[error("Shape error: {0}")]
    Shape(#[from] ShapeError),

    /// A non-numeric value appeared where a scalar was required
    #[error("Type error: {0}")]
    Type(String),

    /// Scalar division by exactly zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Elimination hit an all-zero pivot column
    #[error("Singular matrix: pivot column {column} is entirely zero")]
    SingularMatrix { column: usize },

    /// Element access outside the matrix
    #[error("Index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    Index {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Elementary math evaluated outside its domain
    #[error("Domain error: {0}")]
    Domain(String),

    /// Invalid numeric parameter
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    pub(crate) fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Dimension errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A row's length differs from the first row's
    #[error("row {row} has {actual} elements, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Matrix would have zero rows or columns
    #[error("matrix must have at least one row and one column, got {rows}x{cols}")]
    Empty { rows: usize, cols: usize },

    /// Operand shapes are incompatible for a binary operation
    #[error("incompatible dimensions for {operation}: {}x{} and {}x{}", left.0, left.1, right.0, right.1)]
    Mismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Operation requires a square matrix
    #[error("{operation} requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        operation: &'static str,
        rows: usize,
        cols: usize,
    },

    /// Embedded block is larger than its host
    #[error("{}x{} block does not fit within {}x{} matrix", block.0, block.1, host.0, host.1)]
    DoesNotFit {
        block: (usize, usize),
        host: (usize, usize),
    },

    /// Column sequences of different lengths
    #[error("column {column} has length {actual}, expected {expected}")]
    UnequalColumns {
        column: usize,
        expected: usize,
        actual: usize,
    },

    /// State length does not match the operator dimension
    #[error("state has {actual} amplitudes but the operator acts on dimension {expected}")]
    StateLength { expected: usize, actual: usize },
}
