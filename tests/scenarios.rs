// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! End-to-end scenarios across matrices, builders and evolution.

use approx::assert_relative_eq;
use num_complex::Complex64;
use qubit_os_evolve::{
    embed, filled_matrix, gates, Error, EvolutionSolver, Matrix, QuantumState,
};

#[test]
fn test_pauli_x_flips_basis_state() {
    let x = Matrix::from_real(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
    let zero = Matrix::from_real(vec![vec![1.0], vec![0.0]]).unwrap();
    let one = Matrix::from_real(vec![vec![0.0], vec![1.0]]).unwrap();

    assert_eq!(x.multiply(&zero).unwrap(), one);
}

#[test]
fn test_filled_zero_matrix_is_singular() {
    let zeros = filled_matrix(2, 2, Complex64::new(0.0, 0.0)).unwrap();

    assert_eq!(zeros.determinant().unwrap(), Complex64::new(0.0, 0.0));
    assert!(matches!(
        zeros.invert(),
        Err(Error::SingularMatrix { column: 0 })
    ));
}

#[test]
fn test_zero_hamiltonian_is_identity_evolution() {
    let h = Matrix::from_real(vec![vec![0.0, 0.0], vec![0.0, 0.0]]).unwrap();
    let solver = EvolutionSolver::new(h).unwrap();

    for (t, dt) in [(1.0, 0.1), (0.37, 0.01), (5.0, 2.0)] {
        let mut state = QuantumState::uniform(2);
        let before = state.clone();
        solver.evolve(&mut state, t, dt).unwrap();

        for (a, b) in state.amplitudes().iter().zip(before.amplitudes()) {
            assert!((a - b).norm() < 1e-15);
        }
    }
}

#[test]
fn test_embed_scalar_block_into_identity() {
    let block = Matrix::from_real(vec![vec![5.0]]).unwrap();
    let expected = Matrix::from_real(vec![vec![1.0, 0.0], vec![0.0, 5.0]]).unwrap();

    assert_eq!(embed(&block, 2usize).unwrap(), expected);
}

#[test]
fn test_bell_state_from_gates() {
    let h = gates::hadamard();
    let h_i = Matrix::from_array(ndarray::Array2::from_shape_fn((4, 4), |(i, j)| {
        // H ⊗ I
        let (a, b) = (i / 2, j / 2);
        if i % 2 == j % 2 {
            h.get(a, b).unwrap()
        } else {
            Complex64::new(0.0, 0.0)
        }
    }))
    .unwrap();

    let zero = Matrix::from_real(vec![vec![1.0], vec![0.0], vec![0.0], vec![0.0]]).unwrap();
    let bell = gates::cx().unwrap().multiply(&h_i.multiply(&zero).unwrap()).unwrap();
    let state = QuantumState::new(bell.column(0).unwrap());

    let probs = state.probabilities();
    assert_relative_eq!(probs[0], 0.5, epsilon = 1e-12);
    assert_relative_eq!(probs[1], 0.0, epsilon = 1e-12);
    assert_relative_eq!(probs[2], 0.0, epsilon = 1e-12);
    assert_relative_eq!(probs[3], 0.5, epsilon = 1e-12);
}

#[test]
fn test_evolve_from_config_defaults() {
    let config = qubit_os_evolve::Config::default();
    let solver = EvolutionSolver::new(config.hamiltonian().unwrap()).unwrap();
    let mut state = config.initial_state().unwrap();

    let result = solver.run(&mut state, &config.evolution).unwrap();

    assert_eq!(result.steps, 100);
    assert_relative_eq!(state.norm(), 1.0, epsilon = 1e-12);
    // P(|1⟩) ≈ sin²(1) under H = X
    assert_relative_eq!(state.probabilities()[1], 1.0_f64.sin().powi(2), epsilon = 1e-2);
}
