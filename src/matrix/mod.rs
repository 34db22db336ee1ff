// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Dense complex matrix engine.
//!
//! [`Matrix`] owns an `ndarray::Array2<Complex64>` of shape `rows × cols`
//! with `rows, cols ≥ 1`. All arithmetic returns fresh matrices; the only
//! in-place mutation is [`Matrix::set`].
//!
//! - [`builders`]: filled, identity, column-zipped and embedded matrices
//! - [`solve`]: Gaussian elimination with partial pivoting for `A·x = b`
//! - [`literal`]: matrix literals decoded from YAML configuration

pub mod builders;
pub mod literal;
pub mod solve;

use std::fmt;

use ndarray::Array2;
use num_complex::Complex64;
use tracing::debug;

use crate::error::{Error, Result, ShapeError};

pub use builders::{columns_to_matrix, embed, filled_matrix, identity_matrix, Block, Host};
pub use literal::MatrixLiteral;
pub use solve::solve;

/// Complex scalar used for every matrix element and amplitude.
pub type Scalar = Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Dense rectangular matrix of complex scalars.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Array2<Complex64>,
}

impl Matrix {
    /// Build a matrix from row literals.
    ///
    /// Fails with [`ShapeError::Ragged`] if any row's length differs from the
    /// first row's, and with [`ShapeError::Empty`] if there are no rows or no
    /// columns.
    pub fn new(rows: Vec<Vec<Complex64>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(ShapeError::Ragged {
                    row: i,
                    expected: n_cols,
                    actual: row.len(),
                }
                .into());
            }
        }

        Self::from_array(Array2::from_shape_fn((n_rows, n_cols), |(i, j)| rows[i][j]))
    }

    /// Build a matrix from real-valued rows (imaginary parts are zero).
    pub fn from_real(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(|x| Complex64::new(x, 0.0)).collect())
                .collect(),
        )
    }

    /// Wrap an existing array, rejecting zero-sized dimensions.
    pub fn from_array(data: Array2<Complex64>) -> Result<Self> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(ShapeError::Empty {
                rows: data.nrows(),
                cols: data.ncols(),
            }
            .into());
        }
        Ok(Self { data })
    }

    /// Wrap an array already known to be non-empty.
    pub(crate) fn from_array_unchecked(data: Array2<Complex64>) -> Self {
        debug_assert!(data.nrows() > 0 && data.ncols() > 0);
        Self { data }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Borrow the backing array.
    pub fn as_array(&self) -> &Array2<Complex64> {
        &self.data
    }

    /// Consume the matrix, returning the backing array.
    pub fn into_array(self) -> Array2<Complex64> {
        self.data
    }

    /// Element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Complex64> {
        self.check_index(row, col)?;
        Ok(self.data[[row, col]])
    }

    /// Overwrite the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: Complex64) -> Result<()> {
        self.check_index(row, col)?;
        self.data[[row, col]] = value;
        Ok(())
    }

    /// Copy of column `col` as a sequence.
    pub fn column(&self, col: usize) -> Result<Vec<Complex64>> {
        self.check_index(0, col)?;
        Ok(self.data.column(col).to_vec())
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::Index {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }

    fn require_square(&self, operation: &'static str) -> Result<()> {
        if !self.is_square() {
            return Err(ShapeError::NotSquare {
                operation,
                rows: self.rows(),
                cols: self.cols(),
            }
            .into());
        }
        Ok(())
    }

    fn require_same_shape(&self, other: &Matrix, operation: &'static str) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(ShapeError::Mismatch {
                operation,
                left: self.shape(),
                right: other.shape(),
            }
            .into());
        }
        Ok(())
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// Multiply every element by `scalar`.
    pub fn scale(&self, scalar: Complex64) -> Matrix {
        Self::from_array_unchecked(self.data.mapv(|x| x * scalar))
    }

    /// Divide every element by `scalar`.
    ///
    /// Division by an exact zero fails rather than filling the matrix with
    /// infinities.
    pub fn divide_by_scalar(&self, scalar: Complex64) -> Result<Matrix> {
        if scalar == ZERO {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::from_array_unchecked(self.data.mapv(|x| x / scalar)))
    }

    /// Matrix product `self · other`.
    ///
    /// Accumulates each entry over `k` in increasing order so results are
    /// bit-reproducible.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols() != other.rows() {
            return Err(ShapeError::Mismatch {
                operation: "multiplication",
                left: self.shape(),
                right: other.shape(),
            }
            .into());
        }

        let (m, n, p) = (self.rows(), self.cols(), other.cols());
        let mut out = Array2::zeros((m, p));
        for i in 0..m {
            for j in 0..p {
                let mut acc = ZERO;
                for k in 0..n {
                    acc += self.data[[i, k]] * other.data[[k, j]];
                }
                out[[i, j]] = acc;
            }
        }
        Ok(Self::from_array_unchecked(out))
    }

    /// Elementwise sum.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.require_same_shape(other, "addition")?;
        Ok(Self::from_array_unchecked(&self.data + &other.data))
    }

    /// Elementwise difference `self − other`.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix> {
        self.require_same_shape(other, "subtraction")?;
        Ok(Self::from_array_unchecked(&self.data - &other.data))
    }

    /// Rows and columns swapped.
    pub fn transpose(&self) -> Matrix {
        Self::from_array_unchecked(self.data.t().to_owned())
    }

    /// Conjugate transpose (Hermitian adjoint).
    pub fn adjoint(&self) -> Matrix {
        Self::from_array_unchecked(self.data.t().mapv(|x| x.conj()))
    }

    /// Maximum absolute row sum, ‖A‖∞.
    pub fn infinity_norm(&self) -> f64 {
        self.data
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|x| x.norm()).sum::<f64>())
            .fold(0.0, f64::max)
    }

    // =========================================================================
    // Determinant and inverse
    // =========================================================================

    /// Determinant by cofactor expansion along the first row.
    ///
    /// Runs in `O(n!)` time. Gate-sized operators (2×2, 4×4, 8×8) are fine;
    /// anything much larger should not use this method.
    pub fn determinant(&self) -> Result<Complex64> {
        self.require_square("determinant")?;
        let mut used = vec![false; self.cols()];
        Ok(cofactor_expansion(&self.data, 0, &mut used))
    }

    /// Inverse, solving `A·x = e_i` for every column of the identity.
    ///
    /// Fails with [`Error::SingularMatrix`] if elimination finds an all-zero
    /// pivot column.
    pub fn invert(&self) -> Result<Matrix> {
        self.require_square("inversion")?;
        let n = self.rows();
        debug!(size = n, "Inverting matrix");

        let identity = identity_matrix(n)?;
        let mut solution_columns = Vec::with_capacity(n);
        for i in 0..n {
            let e_i = columns_to_matrix(&[identity.column(i)?])?;
            let x = solve(self.clone(), e_i)?;
            solution_columns.push(x.column(0)?);
        }

        // Solutions are collected one per row, then transposed into columns.
        Ok(Matrix::new(solution_columns)?.transpose())
    }
}

/// Expand along `row`, skipping columns already consumed by outer minors.
///
/// The sign alternates over the remaining columns only, which is `(-1)^j`
/// for column `j` of the current minor.
fn cofactor_expansion(data: &Array2<Complex64>, row: usize, used: &mut [bool]) -> Complex64 {
    let n = data.nrows();
    if row == n - 1 {
        // 1×1 minor: the single column left.
        return used
            .iter()
            .position(|&u| !u)
            .map_or(ZERO, |col| data[[row, col]]);
    }

    let mut det = ZERO;
    let mut sign = 1.0;
    for col in 0..n {
        if used[col] {
            continue;
        }
        used[col] = true;
        let minor = cofactor_expansion(data, row + 1, used);
        used[col] = false;
        det += data[[row, col]] * minor * sign;
        sign = -sign;
    }
    det
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.data.rows().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{x}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
