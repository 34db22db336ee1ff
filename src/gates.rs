// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Catalog of named gate matrices.
//!
//! Controlled families are built by embedding a single-qubit (or two-qubit)
//! operator into the lower-right block of an identity, so the control
//! qubit(s) select the block. Gates built that way return `Result` like
//! every other [`embed`] call.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::Result;
use crate::matrix::{embed, identity_matrix, Matrix};

const I: Complex64 = Complex64::new(0.0, 1.0);

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn r(re: f64) -> Complex64 {
    Complex64::new(re, 0.0)
}

fn literal<const N: usize>(rows: [[Complex64; N]; N]) -> Matrix {
    Matrix::from_array_unchecked(Array2::from_shape_fn((N, N), |(i, j)| rows[i][j]))
}

// =============================================================================
// Identity and phase
// =============================================================================

/// Single-qubit identity.
pub fn identity() -> Result<Matrix> {
    identity_matrix(2)
}

/// Global phase `e^{iθ}·I`.
pub fn global_phase(angle: f64) -> Result<Matrix> {
    Ok(identity()?.scale((I * angle).exp()))
}

// =============================================================================
// Clifford gates
// =============================================================================

pub fn pauli_x() -> Matrix {
    literal([[r(0.0), r(1.0)], [r(1.0), r(0.0)]])
}

pub fn pauli_y() -> Matrix {
    literal([[r(0.0), r(-1.0)], [r(1.0), r(0.0)]]).scale(I)
}

pub fn pauli_z() -> Matrix {
    literal([[r(1.0), r(0.0)], [r(0.0), r(-1.0)]])
}

/// √X.
pub fn sqrt_x() -> Matrix {
    literal([[c(1.0, 1.0), c(1.0, -1.0)], [c(1.0, -1.0), c(1.0, 1.0)]]).scale(r(0.5))
}

/// √Y.
pub fn sqrt_y() -> Matrix {
    literal([[c(1.0, 1.0), c(-1.0, -1.0)], [c(1.0, 1.0), c(1.0, 1.0)]]).scale(r(0.5))
}

/// √Z (the S gate).
pub fn sqrt_z() -> Matrix {
    literal([[r(1.0), r(0.0)], [r(0.0), I]])
}

pub fn hadamard() -> Matrix {
    literal([[r(1.0), r(1.0)], [r(1.0), r(-1.0)]]).scale(r(FRAC_1_SQRT_2))
}

/// Controlled-X (CNOT).
pub fn cx() -> Result<Matrix> {
    controlled(&pauli_x())
}

/// X on the target when the control is |0⟩.
pub fn anti_cx() -> Matrix {
    literal([
        [r(0.0), r(1.0), r(0.0), r(0.0)],
        [r(1.0), r(0.0), r(0.0), r(0.0)],
        [r(0.0), r(0.0), r(1.0), r(0.0)],
        [r(0.0), r(0.0), r(0.0), r(1.0)],
    ])
}

/// Double CNOT (two CNOTs with alternating control).
pub fn double_cx() -> Matrix {
    literal([
        [r(1.0), r(0.0), r(0.0), r(0.0)],
        [r(0.0), r(0.0), r(1.0), r(0.0)],
        [r(0.0), r(0.0), r(0.0), r(1.0)],
        [r(0.0), r(1.0), r(0.0), r(0.0)],
    ])
}

pub fn cy() -> Result<Matrix> {
    controlled(&pauli_y())
}

pub fn cz() -> Result<Matrix> {
    controlled(&pauli_z())
}

/// Controlled-U for an arbitrary single-qubit `u`.
///
/// Fails with a shape error if `u` does not fit in a 4×4 operator.
pub fn controlled(u: &Matrix) -> Result<Matrix> {
    embed(u, 4usize)
}

pub fn swap() -> Matrix {
    literal([
        [r(1.0), r(0.0), r(0.0), r(0.0)],
        [r(0.0), r(0.0), r(1.0), r(0.0)],
        [r(0.0), r(1.0), r(0.0), r(0.0)],
        [r(0.0), r(0.0), r(0.0), r(1.0)],
    ])
}

/// iSWAP.
pub fn imaginary_swap() -> Matrix {
    literal([
        [r(1.0), r(0.0), r(0.0), r(0.0)],
        [r(0.0), r(0.0), I, r(0.0)],
        [r(0.0), I, r(0.0), r(0.0)],
        [r(0.0), r(0.0), r(0.0), r(1.0)],
    ])
}

// =============================================================================
// Non-Clifford gates
// =============================================================================

/// Phase shift `diag(1, e^{iθ})`.
pub fn phase(angle: f64) -> Result<Matrix> {
    embed((I * angle).exp(), 2usize)
}

/// Controlled phase `diag(1, 1, 1, e^{iθ})`.
pub fn controlled_phase(angle: f64) -> Result<Matrix> {
    embed((I * angle).exp(), 4usize)
}

/// Controlled √Z, `diag(1, 1, 1, i)`.
pub fn controlled_sqrt_z() -> Result<Matrix> {
    embed(I, 4usize)
}

/// Rotation about the x-axis.
pub fn rx(angle: f64) -> Matrix {
    let theta = angle / 2.0;
    let (cos, sin) = (r(theta.cos()), c(0.0, -theta.sin()));
    literal([[cos, sin], [sin, cos]])
}

/// Rotation about the y-axis.
pub fn ry(angle: f64) -> Matrix {
    let theta = angle / 2.0;
    let (cos, sin) = (r(theta.cos()), r(theta.sin()));
    literal([[cos, -sin], [sin, cos]])
}

/// Rotation about the z-axis, `diag(e^{−iθ/2}, e^{iθ/2})`.
pub fn rz(angle: f64) -> Matrix {
    let theta = c(0.0, -angle / 2.0);
    literal([[theta.exp(), r(0.0)], [r(0.0), (-theta).exp()]])
}

/// √SWAP.
pub fn sqrt_swap() -> Matrix {
    literal([
        [r(2.0), r(0.0), r(0.0), r(0.0)],
        [r(0.0), c(1.0, 1.0), c(1.0, -1.0), r(0.0)],
        [r(0.0), c(1.0, -1.0), c(1.0, 1.0), r(0.0)],
        [r(0.0), r(0.0), r(0.0), r(2.0)],
    ])
    .scale(r(0.5))
}

/// √iSWAP.
pub fn sqrt_imaginary_swap() -> Matrix {
    let s = r(2.0_f64.sqrt());
    literal([
        [s, r(0.0), r(0.0), r(0.0)],
        [r(0.0), r(1.0), I, r(0.0)],
        [r(0.0), I, r(1.0), r(0.0)],
        [r(0.0), r(0.0), r(0.0), s],
    ])
    .scale(r(FRAC_1_SQRT_2))
}

/// SWAP raised to `power`.
pub fn swap_power(power: f64) -> Matrix {
    let e = (-I * PI * power).exp();
    let one = r(1.0);
    literal([
        [r(2.0), r(0.0), r(0.0), r(0.0)],
        [r(0.0), one + e, one - e, r(0.0)],
        [r(0.0), one - e, one + e, r(0.0)],
        [r(0.0), r(0.0), r(0.0), r(2.0)],
    ])
    .scale(r(0.5))
}

/// Controlled SWAP (Fredkin).
pub fn fredkin() -> Result<Matrix> {
    embed(&swap(), 8usize)
}

/// Controlled-controlled-X (Toffoli).
pub fn toffoli() -> Result<Matrix> {
    embed(&pauli_x(), 8usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ShapeError};

    fn assert_matrix_close(a: &Matrix, b: &Matrix, tol: f64) {
        assert_eq!(a.shape(), b.shape());
        for ((i, j), val) in a.as_array().indexed_iter() {
            let diff = (val - b.as_array()[[i, j]]).norm();
            assert!(diff < tol, "Mismatch at ({i}, {j}): diff={diff}");
        }
    }

    fn assert_unitary(u: &Matrix) {
        let product = u.multiply(&u.adjoint()).unwrap();
        assert_matrix_close(&product, &identity_matrix(u.rows()).unwrap(), 1e-12);
    }

    fn all_gates() -> Vec<(&'static str, Matrix)> {
        vec![
            ("identity", identity().unwrap()),
            ("global_phase", global_phase(0.3).unwrap()),
            ("x", pauli_x()),
            ("y", pauli_y()),
            ("z", pauli_z()),
            ("sqrt_x", sqrt_x()),
            ("sqrt_y", sqrt_y()),
            ("sqrt_z", sqrt_z()),
            ("h", hadamard()),
            ("cx", cx().unwrap()),
            ("anti_cx", anti_cx()),
            ("double_cx", double_cx()),
            ("cy", cy().unwrap()),
            ("cz", cz().unwrap()),
            ("swap", swap()),
            ("iswap", imaginary_swap()),
            ("phase", phase(1.1).unwrap()),
            ("cphase", controlled_phase(-0.4).unwrap()),
            ("csz", controlled_sqrt_z().unwrap()),
            ("rx", rx(0.7)),
            ("ry", ry(-1.3)),
            ("rz", rz(2.1)),
            ("sqrt_swap", sqrt_swap()),
            ("sqrt_iswap", sqrt_imaginary_swap()),
            ("swap_power", swap_power(0.25)),
            ("fredkin", fredkin().unwrap()),
            ("toffoli", toffoli().unwrap()),
        ]
    }

    #[test]
    fn test_all_gates_unitary() {
        for (name, gate) in all_gates() {
            assert!(gate.is_square(), "{name} is not square");
            assert_unitary(&gate);
        }
    }

    #[test]
    fn test_pauli_x_flips_basis_state() {
        let zero = Matrix::from_real(vec![vec![1.0], vec![0.0]]).unwrap();
        let one = Matrix::from_real(vec![vec![0.0], vec![1.0]]).unwrap();
        assert_eq!(pauli_x().multiply(&zero).unwrap(), one);
    }

    #[test]
    fn test_square_roots_square_to_paulis() {
        assert_matrix_close(&sqrt_x().multiply(&sqrt_x()).unwrap(), &pauli_x(), 1e-12);
        assert_matrix_close(&sqrt_y().multiply(&sqrt_y()).unwrap(), &pauli_y(), 1e-12);
        assert_matrix_close(&sqrt_z().multiply(&sqrt_z()).unwrap(), &pauli_z(), 1e-12);
        assert_matrix_close(&sqrt_swap().multiply(&sqrt_swap()).unwrap(), &swap(), 1e-12);
        assert_matrix_close(
            &sqrt_imaginary_swap()
                .multiply(&sqrt_imaginary_swap())
                .unwrap(),
            &imaginary_swap(),
            1e-12,
        );
    }

    #[test]
    fn test_controlled_matches_embed() {
        assert_eq!(controlled(&pauli_x()).unwrap(), cx().unwrap());
        assert_eq!(controlled(&pauli_z()).unwrap(), cz().unwrap());
        assert_eq!(embed(&swap(), 8usize).unwrap(), fredkin().unwrap());
        assert_eq!(embed(&pauli_x(), 8usize).unwrap(), toffoli().unwrap());
        assert_eq!(embed(I, 4usize).unwrap(), controlled_sqrt_z().unwrap());
    }

    #[test]
    fn test_controlled_rejects_oversized_operator() {
        assert!(matches!(
            controlled(&fredkin().unwrap()),
            Err(Error::Shape(ShapeError::DoesNotFit { .. }))
        ));
    }

    #[test]
    fn test_swap_power_endpoints() {
        assert_matrix_close(&swap_power(1.0), &swap(), 1e-12);
        assert_matrix_close(&swap_power(0.0), &identity_matrix(4).unwrap(), 1e-12);
    }

    #[test]
    fn test_rotations_at_pi() {
        // R(π) equals −i times the Pauli.
        let minus_i = c(0.0, -1.0);
        assert_matrix_close(&rx(PI), &pauli_x().scale(minus_i), 1e-12);
        assert_matrix_close(&ry(PI), &pauli_y().scale(minus_i), 1e-12);
        assert_matrix_close(&rz(PI), &pauli_z().scale(minus_i), 1e-12);
    }

    #[test]
    fn test_toffoli_determinant() {
        assert_eq!(toffoli().unwrap().determinant().unwrap(), r(-1.0));
    }

    #[test]
    fn test_phase_at_pi_is_z() {
        assert_matrix_close(&phase(PI).unwrap(), &pauli_z(), 1e-12);
        assert_matrix_close(&global_phase(0.0).unwrap(), &identity().unwrap(), 1e-15);
    }

    #[test]
    fn test_controlled_families_place_block_bottom_right() {
        // Every gate built on an identity host keeps the identity outside the block.
        let cases = [
            (cx().unwrap(), pauli_x()),
            (cy().unwrap(), pauli_y()),
            (cz().unwrap(), pauli_z()),
            (fredkin().unwrap(), swap()),
            (toffoli().unwrap(), pauli_x()),
        ];
        for (gate, block) in &cases {
            let offset = gate.rows() - block.rows();
            for i in 0..gate.rows() {
                for j in 0..gate.cols() {
                    let expected = if i >= offset && j >= offset {
                        block.get(i - offset, j - offset).unwrap()
                    } else if i == j {
                        r(1.0)
                    } else {
                        r(0.0)
                    };
                    assert_eq!(gate.get(i, j).unwrap(), expected, "({i}, {j})");
                }
            }
        }
        assert_eq!(controlled_phase(0.5).unwrap().get(3, 3).unwrap(), (I * 0.5).exp());
        assert_eq!(phase(0.5).unwrap().get(0, 0).unwrap(), r(1.0));
    }
}
