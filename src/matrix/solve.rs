// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Gaussian elimination with partial pivoting.
//!
//! Solves `A·x = b` for a single right-hand-side column. Used by
//! [`Matrix::invert`](super::Matrix::invert) once per column of the identity.
//!
//! Partial pivoting improves stability but does not guarantee it for
//! ill-conditioned systems; no iterative refinement is performed.

use ndarray::Array2;
use num_complex::Complex64;
use tracing::debug;

use super::Matrix;
use crate::error::{Error, Result, ShapeError};

/// Solve `A·x = b` for a non-singular `n × n` matrix `A` and `n × 1` column `b`.
///
/// Both operands are taken by value and used as elimination workspace.
/// Callers that still need `A` pass a clone.
///
/// # Errors
/// * [`ShapeError::NotSquare`] if `A` is not square.
/// * [`ShapeError::Mismatch`] if `b` is not an `n × 1` column.
/// * [`Error::SingularMatrix`] if a pivot column is entirely zero.
pub fn solve(a: Matrix, b: Matrix) -> Result<Matrix> {
    a.require_square("linear solve")?;
    let n = a.rows();
    if b.rows() != n || b.cols() != 1 {
        return Err(ShapeError::Mismatch {
            operation: "linear solve",
            left: a.shape(),
            right: b.shape(),
        }
        .into());
    }

    let mut a = a.data;
    let mut b = b.data;

    // Forward elimination
    for k in 0..n {
        // Pivot: largest magnitude in column k at or below the diagonal.
        // Ties keep the first row found.
        let mut max_val = 0.0;
        let mut max_row = k;
        for row in k..n {
            let val = a[[row, k]].norm();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if max_val == 0.0 {
            return Err(Error::SingularMatrix { column: k });
        }

        if max_row != k {
            debug!(column = k, pivot_row = max_row, "Swapping pivot row");
            for j in 0..n {
                a.swap([k, j], [max_row, j]);
            }
            b.swap([k, 0], [max_row, 0]);
        }

        for i in (k + 1)..n {
            let factor = a[[i, k]] / a[[k, k]];
            for c in k..n {
                let pivot_row_val = a[[k, c]];
                a[[i, c]] -= factor * pivot_row_val;
            }
            let pivot_rhs = b[[k, 0]];
            b[[i, 0]] -= factor * pivot_rhs;
        }
    }

    // Back substitution
    let mut x = Array2::<Complex64>::zeros((n, 1));
    for j in (0..n).rev() {
        let mut sum = Complex64::new(0.0, 0.0);
        for c in (j + 1)..n {
            sum += a[[j, c]] * x[[c, 0]];
        }
        x[[j, 0]] = (b[[j, 0]] - sum) / a[[j, j]];
    }

    Ok(Matrix::from_array_unchecked(x))
}
