// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Matrix builders: filled, identity, column-zipped and embedded matrices.

use ndarray::{s, Array2};
use num_complex::Complex64;

use super::Matrix;
use crate::error::{Result, ShapeError};

/// A `rows × cols` matrix with every element equal to `value`.
pub fn filled_matrix(rows: usize, cols: usize, value: Complex64) -> Result<Matrix> {
    Matrix::from_array(Array2::from_elem((rows, cols), value))
}

/// The `size × size` identity.
pub fn identity_matrix(size: usize) -> Result<Matrix> {
    Matrix::from_array(Array2::from_diag_elem(size, Complex64::new(1.0, 0.0)))
}

/// Build a matrix whose columns are the given sequences.
///
/// Fails with [`ShapeError::UnequalColumns`] if the sequences differ in
/// length.
pub fn columns_to_matrix(columns: &[Vec<Complex64>]) -> Result<Matrix> {
    let n_rows = columns.first().map_or(0, Vec::len);
    for (j, column) in columns.iter().enumerate() {
        if column.len() != n_rows {
            return Err(ShapeError::UnequalColumns {
                column: j,
                expected: n_rows,
                actual: column.len(),
            }
            .into());
        }
    }

    Matrix::from_array(Array2::from_shape_fn(
        (n_rows, columns.len()),
        |(i, j)| columns[j][i],
    ))
}

/// Block to place with [`embed`]: a matrix or a bare scalar (a 1×1 block).
#[derive(Debug, Clone, Copy)]
pub enum Block<'a> {
    Matrix(&'a Matrix),
    Scalar(Complex64),
}

impl<'a> From<&'a Matrix> for Block<'a> {
    fn from(m: &'a Matrix) -> Self {
        Block::Matrix(m)
    }
}

impl From<Complex64> for Block<'_> {
    fn from(x: Complex64) -> Self {
        Block::Scalar(x)
    }
}

impl From<f64> for Block<'_> {
    fn from(x: f64) -> Self {
        Block::Scalar(Complex64::new(x, 0.0))
    }
}

/// Host for [`embed`]: an existing matrix, or a size meaning the identity.
#[derive(Debug, Clone, Copy)]
pub enum Host<'a> {
    Matrix(&'a Matrix),
    Identity(usize),
}

impl<'a> From<&'a Matrix> for Host<'a> {
    fn from(m: &'a Matrix) -> Self {
        Host::Matrix(m)
    }
}

impl From<usize> for Host<'_> {
    fn from(size: usize) -> Self {
        Host::Identity(size)
    }
}

/// Copy `host` and overwrite its bottom-right corner with `block`.
///
/// The host matrix is never modified. Fails with [`ShapeError::DoesNotFit`]
/// if the block is larger than the host in either dimension.
///
/// ```ignore
/// // Controlled-X: X in the lower-right 2×2 of a 4×4 identity.
/// let cx = embed(&pauli_x(), 4usize)?;
/// ```
pub fn embed<'a, 'b>(block: impl Into<Block<'a>>, host: impl Into<Host<'b>>) -> Result<Matrix> {
    let host = match host.into() {
        Host::Matrix(m) => m.clone(),
        Host::Identity(size) => identity_matrix(size)?,
    };

    match block.into() {
        Block::Matrix(m) => place_block(m, host),
        Block::Scalar(x) => {
            let block = Matrix::from_array_unchecked(Array2::from_elem((1, 1), x));
            place_block(&block, host)
        }
    }
}

fn place_block(block: &Matrix, mut host: Matrix) -> Result<Matrix> {
    let (br, bc) = block.shape();
    let (hr, hc) = host.shape();
    if br > hr || bc > hc {
        return Err(ShapeError::DoesNotFit {
            block: (br, bc),
            host: (hr, hc),
        }
        .into());
    }

    host.data
        .slice_mut(s![hr - br.., hc - bc..])
        .assign(&block.data);
    Ok(host)
}
