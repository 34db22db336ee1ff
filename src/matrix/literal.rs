// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Matrix and scalar literals as they appear in YAML configuration.
//!
//! A scalar literal is one of:
//!
//! ```yaml
//! 0.5            # real
//! [0.0, -1.0]    # [re, im]
//! {re: 0.0, im: 1.0}
//! ```
//!
//! A matrix literal is a sequence of rows of scalar literals.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use super::Matrix;
use crate::error::{Error, Result, ShapeError};

/// Undecoded matrix literal, kept as raw YAML so that element errors are
/// reported as type errors rather than parse failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatrixLiteral(pub Vec<Vec<Value>>);

impl MatrixLiteral {
    /// Decode into a [`Matrix`].
    ///
    /// Raggedness is checked before element types.
    pub fn to_matrix(&self) -> Result<Matrix> {
        let n_cols = self.0.first().map_or(0, Vec::len);
        for (i, row) in self.0.iter().enumerate() {
            if row.len() != n_cols {
                return Err(ShapeError::Ragged {
                    row: i,
                    expected: n_cols,
                    actual: row.len(),
                }
                .into());
            }
        }

        let rows = self
            .0
            .iter()
            .map(|row| parse_scalars(row))
            .collect::<Result<Vec<_>>>()?;
        Matrix::new(rows)
    }

    /// Encode a matrix, writing real elements as plain numbers.
    pub fn from_matrix(matrix: &Matrix) -> Self {
        Self(
            matrix
                .as_array()
                .rows()
                .into_iter()
                .map(|row| row.iter().map(|&x| scalar_to_value(x)).collect())
                .collect(),
        )
    }
}

/// Decode a single scalar literal.
pub fn parse_scalar(value: &Value) -> Result<Complex64> {
    match value {
        Value::Number(_) => Ok(Complex64::new(number(value, "element")?, 0.0)),
        Value::Sequence(parts) if parts.len() == 2 => Ok(Complex64::new(
            number(&parts[0], "real part")?,
            number(&parts[1], "imaginary part")?,
        )),
        Value::Mapping(map) => {
            for key in map.keys() {
                if key.as_str() != Some("re") && key.as_str() != Some("im") {
                    return Err(Error::Type(format!(
                        "unexpected key {} in complex literal",
                        describe(key)
                    )));
                }
            }
            let re = map.get("re").map_or(Ok(0.0), |v| number(v, "real part"))?;
            let im = map
                .get("im")
                .map_or(Ok(0.0), |v| number(v, "imaginary part"))?;
            Ok(Complex64::new(re, im))
        }
        other => Err(Error::Type(format!(
            "{} is not a numeric element",
            describe(other)
        ))),
    }
}

/// Decode a sequence of scalar literals.
pub fn parse_scalars(values: &[Value]) -> Result<Vec<Complex64>> {
    values.iter().map(parse_scalar).collect()
}

pub(crate) fn scalar_to_value(x: Complex64) -> Value {
    if x.im == 0.0 {
        Value::from(x.re)
    } else {
        Value::Sequence(vec![Value::from(x.re), Value::from(x.im)])
    }
}

fn number(value: &Value, what: &str) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| Error::Type(format!("{what} {} is not a number", describe(value))))
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Sequence(seq) => format!("sequence of length {}", seq.len()),
        Value::Mapping(_) => "mapping".into(),
        Value::Tagged(t) => format!("tagged value {}", t.tag),
    }
}
