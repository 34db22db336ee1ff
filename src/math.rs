// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Elementary scalar math used by state initializers and the gate catalog.
//!
//! `exp`, `sin`, `cos` and `sqrt` come straight from [`Complex64`] and `f64`;
//! only functions with a restricted domain live here.
//!
//! [`Complex64`]: num_complex::Complex64

use std::f64::consts::PI;

use crate::error::{Error, Result};

/// Normalized Gaussian density with mean `mu` and standard deviation `sigma`.
pub fn gaussian(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(Error::Domain(format!(
            "Gaussian sigma must be finite and > 0, got {sigma}"
        )));
    }
    let z = (x - mu) / sigma;
    Ok((-0.5 * z * z).exp() / (sigma * (2.0 * PI).sqrt()))
}

/// `n!` for non-negative `n`.
pub fn factorial(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(Error::Domain(format!(
            "factorial requires a non-negative argument, got {n}"
        )));
    }
    (1..=n as u128).try_fold(1u128, |acc, k| {
        acc.checked_mul(k)
            .ok_or_else(|| Error::Domain(format!("{n}! overflows u128")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gaussian_peak() {
        let peak = gaussian(0.0, 0.0, 1.0).unwrap();
        assert_relative_eq!(peak, 1.0 / (2.0 * PI).sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn test_gaussian_symmetric() {
        let left = gaussian(1.5, 3.0, 0.7).unwrap();
        let right = gaussian(4.5, 3.0, 0.7).unwrap();
        assert_relative_eq!(left, right, epsilon = 1e-15);
    }

    #[test]
    fn test_gaussian_rejects_bad_sigma() {
        assert!(matches!(gaussian(0.0, 0.0, 0.0), Err(Error::Domain(_))));
        assert!(matches!(gaussian(0.0, 0.0, -1.0), Err(Error::Domain(_))));
        assert!(matches!(gaussian(0.0, 0.0, f64::NAN), Err(Error::Domain(_))));
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(5).unwrap(), 120);
        assert_eq!(factorial(20).unwrap(), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_factorial_domain() {
        assert!(matches!(factorial(-1), Err(Error::Domain(_))));
        assert!(matches!(factorial(40), Err(Error::Domain(_))));
    }
}
