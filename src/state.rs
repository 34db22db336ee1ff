// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Normalized state vectors.

use std::fmt;

use num_complex::Complex64;

use crate::error::Result;
use crate::math::gaussian;

/// Wavefunction amplitudes, kept at unit Euclidean norm.
///
/// Every constructor and every amplitude-altering operation renormalizes.
/// The zero vector is left as is.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantumState {
    amplitudes: Vec<Complex64>,
}

impl QuantumState {
    /// Create a state from raw amplitudes, normalizing them.
    pub fn new(amplitudes: Vec<Complex64>) -> Self {
        let mut state = Self { amplitudes };
        state.normalize();
        state
    }

    /// Create a state from real amplitudes.
    pub fn from_real(amplitudes: &[f64]) -> Self {
        Self::new(amplitudes.iter().map(|&a| Complex64::new(a, 0.0)).collect())
    }

    /// Gaussian-shaped state sampled at `x = 0, 1, …, n-1`.
    pub fn gaussian(n: usize, mu: f64, sigma: f64) -> Result<Self> {
        let amplitudes = (0..n)
            .map(|x| gaussian(x as f64, mu, sigma).map(|g| Complex64::new(g, 0.0)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(amplitudes))
    }

    /// Equal-probability state over `n` points.
    pub fn uniform(n: usize) -> Self {
        Self::new(vec![Complex64::new(1.0, 0.0); n])
    }

    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Euclidean norm of the amplitude vector.
    pub fn norm(&self) -> f64 {
        euclidean_norm(&self.amplitudes)
    }

    /// Divide every amplitude by the norm. No-op for the zero vector.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm != 0.0 {
            for a in &mut self.amplitudes {
                *a /= norm;
            }
        }
    }

    /// Replace the amplitudes and renormalize.
    pub fn set_amplitudes(&mut self, amplitudes: Vec<Complex64>) {
        self.amplitudes = amplitudes;
        self.normalize();
    }

    /// Squared magnitude of each amplitude.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }
}

pub(crate) fn euclidean_norm(amplitudes: &[Complex64]) -> f64 {
    amplitudes.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt()
}

impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, a) in self.amplitudes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{a}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_normalizes() {
        let state = QuantumState::from_real(&[3.0, 4.0]);
        assert_relative_eq!(state.amplitudes()[0].re, 0.6, epsilon = 1e-15);
        assert_relative_eq!(state.amplitudes()[1].re, 0.8, epsilon = 1e-15);
        assert_relative_eq!(state.norm(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_complex_amplitudes_normalize() {
        let state = QuantumState::new(vec![Complex64::new(1.0, 1.0), Complex64::new(0.0, 2.0)]);
        assert_relative_eq!(state.norm(), 1.0, epsilon = 1e-15);
        let total: f64 = state.probabilities().iter().sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_vector_unchanged() {
        let state = QuantumState::from_real(&[0.0, 0.0, 0.0]);
        assert!(state.amplitudes().iter().all(|a| *a == Complex64::new(0.0, 0.0)));
        assert_eq!(state.norm(), 0.0);
    }

    #[test]
    fn test_empty_state() {
        let state = QuantumState::new(vec![]);
        assert!(state.is_empty());
        assert!(state.probabilities().is_empty());
    }

    #[test]
    fn test_uniform() {
        let state = QuantumState::uniform(4);
        assert_eq!(state.len(), 4);
        for p in state.probabilities() {
            assert_relative_eq!(p, 0.25, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_gaussian_peaks_at_mean() {
        let state = QuantumState::gaussian(9, 4.0, 1.5).unwrap();
        let probs = state.probabilities();
        let (argmax, _) = probs
            .iter()
            .enumerate()
            .fold((0, 0.0), |best, (i, &p)| if p > best.1 { (i, p) } else { best });
        assert_eq!(argmax, 4);
        assert_relative_eq!(probs[3], probs[5], epsilon = 1e-15);
        assert_relative_eq!(probs.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_gaussian_bad_sigma() {
        assert!(matches!(
            QuantumState::gaussian(4, 0.0, 0.0),
            Err(Error::Domain(_))
        ));
    }

    #[test]
    fn test_set_amplitudes_renormalizes() {
        let mut state = QuantumState::uniform(2);
        state.set_amplitudes(vec![Complex64::new(0.0, 5.0), Complex64::new(0.0, 0.0)]);
        assert_eq!(state.amplitudes()[0], Complex64::new(0.0, 1.0));
    }

    #[test]
    fn test_display() {
        let state = QuantumState::from_real(&[1.0, 0.0]);
        assert_eq!(state.to_string(), "[1+0i, 0+0i]");
    }
}
