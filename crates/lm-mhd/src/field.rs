//! Broadcasting arrays.
//!
//! A `Field` is a dynamic-dimension array. Binary operations combine fields of
//! different shapes under the usual broadcasting rules: shapes are aligned from the
//! trailing axis and each axis pair must be equal or contain a 1. A 0-d field
//! is a scalar.

use ndarray::{Array1, ArrayD, Axis, IxDyn, Zip};

use crate::error::{MhdError, MhdResult};

pub type Field = ArrayD<f64>;

/// How a zero denominator in a ratio is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivisionPolicy {
    /// Fail with `MhdError::DivisionByZero`.
    #[default]
    Strict,
    /// Let IEEE-754 produce ±inf/NaN (for plotting consumers that clip).
    Propagate,
}

/// 0-d field.
pub fn scalar(v: f64) -> Field {
    ArrayD::from_elem(IxDyn(&[]), v)
}

/// 1-d field of shape `[n]`.
pub fn vector(values: impl Into<Vec<f64>>) -> Field {
    Array1::from(values.into()).into_dyn()
}

/// 2-d field of shape `[n, 1]`; broadcasts against a `vector` into an `[n, m]` grid.
pub fn column(values: impl Into<Vec<f64>>) -> Field {
    Array1::from(values.into()).insert_axis(Axis(1)).into_dyn()
}

/// Shape two operands broadcast to.
pub fn broadcast_shape(lhs: &[usize], rhs: &[usize]) -> MhdResult<Vec<usize>> {
    let ndim = lhs.len().max(rhs.len());
    let axis = |shape: &[usize], i: usize| {
        let offset = ndim - shape.len();
        if i < offset { 1 } else { shape[i - offset] }
    };

    (0..ndim)
        .map(|i| match (axis(lhs, i), axis(rhs, i)) {
            (a, b) if a == b => Ok(a),
            (1, b) => Ok(b),
            (a, 1) => Ok(a),
            _ => Err(MhdError::Shape {
                lhs: lhs.to_vec(),
                rhs: rhs.to_vec(),
            }),
        })
        .collect()
}

/// Apply `f` elementwise over the broadcast of `lhs` and `rhs`.
pub fn zip_with<F>(lhs: &Field, rhs: &Field, f: F) -> MhdResult<Field>
where
    F: Fn(f64, f64) -> f64,
{
    let shape = broadcast_shape(lhs.shape(), rhs.shape())?;
    let shape_error = || MhdError::Shape {
        lhs: lhs.shape().to_vec(),
        rhs: rhs.shape().to_vec(),
    };
    let l = lhs.broadcast(shape.as_slice()).ok_or_else(shape_error)?;
    let r = rhs.broadcast(shape.as_slice()).ok_or_else(shape_error)?;
    Ok(Zip::from(&l).and(&r).map_collect(|&a, &b| f(a, b)))
}

/// Elementwise `num / den`.
pub fn divide(num: &Field, den: &Field, what: &'static str, policy: DivisionPolicy) -> MhdResult<Field> {
    let shape = broadcast_shape(num.shape(), den.shape())?;
    if policy == DivisionPolicy::Strict && shape.iter().all(|&n| n > 0) && den.iter().any(|&d| d == 0.0) {
        return Err(MhdError::DivisionByZero { what });
    }
    zip_with(num, den, |a, b| a / b)
}

/// Scalar `num / den` with a zero check.
pub(crate) fn checked_div(num: f64, den: f64, what: &'static str) -> MhdResult<f64> {
    if den == 0.0 {
        Err(MhdError::DivisionByZero { what })
    } else {
        Ok(num / den)
    }
}

/// Elementwise square root; negative or NaN entries are a domain error.
pub(crate) fn sqrt_field(radicand: Field, what: &'static str) -> MhdResult<Field> {
    if let Some(&bad) = radicand.iter().find(|v| v.is_nan() || **v < 0.0) {
        return Err(MhdError::Domain { what, value: bad });
    }
    Ok(radicand.mapv_into(f64::sqrt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcasting_rules() {
        assert_eq!(broadcast_shape(&[], &[4]).unwrap(), vec![4]);
        assert_eq!(broadcast_shape(&[3, 1], &[4]).unwrap(), vec![3, 4]);
        assert_eq!(broadcast_shape(&[2, 1, 5], &[3, 1]).unwrap(), vec![2, 3, 5]);
        assert!(matches!(
            broadcast_shape(&[3], &[4]),
            Err(MhdError::Shape { .. })
        ));
    }

    #[test]
    fn column_times_vector_is_a_grid() {
        let grid = zip_with(&column(vec![1.0, 2.0]), &vector(vec![10.0, 20.0, 30.0]), |a, b| a * b).unwrap();
        assert_eq!(grid.shape(), &[2, 3]);
        assert_eq!(grid[[1, 2]], 60.0);
    }

    #[test]
    fn scalar_broadcasts_everywhere() {
        let out = zip_with(&scalar(2.0), &vector(vec![1.0, 3.0]), |a, b| a + b).unwrap();
        assert_eq!(out, vector(vec![3.0, 5.0]));
        assert_eq!(zip_with(&scalar(2.0), &scalar(3.0), |a, b| a * b).unwrap(), scalar(6.0));
    }

    #[test]
    fn strict_division_rejects_zero() {
        let num = vector(vec![1.0, 2.0]);
        let den = vector(vec![1.0, 0.0]);
        assert!(matches!(
            divide(&num, &den, "test", DivisionPolicy::Strict),
            Err(MhdError::DivisionByZero { what: "test" })
        ));
        let out = divide(&num, &den, "test", DivisionPolicy::Propagate).unwrap();
        assert!(out[[1]].is_infinite());
    }

    #[test]
    fn mismatched_division_is_a_shape_error() {
        let err = divide(&vector(vec![1.0; 3]), &vector(vec![0.0; 2]), "x", DivisionPolicy::Strict);
        assert!(matches!(err, Err(MhdError::Shape { .. })));
    }

    #[test]
    fn sqrt_rejects_negative() {
        let err = sqrt_field(vector(vec![4.0, -1.0]), "root").unwrap_err();
        assert_eq!(err, MhdError::Domain { what: "root", value: -1.0 });
        assert_eq!(sqrt_field(vector(vec![4.0, 9.0]), "root").unwrap(), vector(vec![2.0, 3.0]));
    }
}
