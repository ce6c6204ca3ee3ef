//! Shape-agnostic `f32` arithmetic shared by every vector and matrix type.
//!
//! Functions taking `&mut Array2<f32>` update their first operand in place;
//! the rest return a freshly allocated array. All shape checks happen before
//! any element is written.

use crate::error::{MathError, Result};
use crate::math::matrix::Array2;

/// Matrix product `a * b`.
///
/// Each output cell is accumulated in `f32`, in ascending order of the inner
/// index, so results are reproducible bit for bit.
///
/// Fails with `InvalidArgument` if either operand has a zero dimension and
/// with `DimensionMismatch` if `a.ncols() != b.nrows()`.
pub fn multiply(a: &Array2<f32>, b: &Array2<f32>) -> Result<Array2<f32>> {
    log::trace!(
        "multiply: {}x{} * {}x{}",
        a.nrows(),
        a.ncols(),
        b.nrows(),
        b.ncols()
    );
    if a.is_empty() || b.is_empty() {
        return Err(MathError::InvalidArgument {
            reason: "multiply: operands must not be empty",
        });
    }
    if a.ncols() != b.nrows() {
        log::debug!(
            "multiply rejected: {}x{} and {}x{}",
            a.nrows(),
            a.ncols(),
            b.nrows(),
            b.ncols()
        );
        return Err(MathError::DimensionMismatch {
            op: "multiply",
            left: a.shape(),
            right: b.shape(),
        });
    }

    let inner = a.ncols();
    let b_cols = b.ncols();
    let a_data = a.as_slice();
    let b_data = b.as_slice();

    Ok(Array2::from_shape_fn((a.nrows(), b_cols), |(i, j)| {
        let mut sum = 0.0f32;
        for k in 0..inner {
            sum += a_data[i * inner + k] * b_data[k * b_cols + j];
        }
        sum
    }))
}

/// Matrix product over raw row lists.
///
/// Checks run in a fixed order: empty operands, then the inner dimension
/// (taken from each operand's first row), then rectangularity of `a` and `b`.
pub fn multiply_rows(a: &[Vec<f32>], b: &[Vec<f32>]) -> Result<Array2<f32>> {
    let a_shape = (a.len(), a.first().map_or(0, Vec::len));
    let b_shape = (b.len(), b.first().map_or(0, Vec::len));
    if a_shape.0 == 0 || a_shape.1 == 0 || b_shape.0 == 0 || b_shape.1 == 0 {
        return Err(MathError::InvalidArgument {
            reason: "multiply: operands must not be empty",
        });
    }
    if a_shape.1 != b_shape.0 {
        return Err(MathError::DimensionMismatch {
            op: "multiply",
            left: a_shape,
            right: b_shape,
        });
    }
    let a = Array2::from_rows(a.to_vec())?;
    let b = Array2::from_rows(b.to_vec())?;
    multiply(&a, &b)
}

/// Transpose. An array with no rows transposes to a 0x0 array.
pub fn transpose(m: &Array2<f32>) -> Array2<f32> {
    log::trace!("transpose: {}x{}", m.nrows(), m.ncols());
    if m.nrows() == 0 {
        return Array2::from_shape_fn((0, 0), |_| 0.0);
    }
    Array2::from_shape_fn((m.ncols(), m.nrows()), |(j, i)| m[(i, j)])
}

/// Transpose over a raw row list; jagged input fails with `NotRectangular`.
pub fn transpose_rows(m: &[Vec<f32>]) -> Result<Array2<f32>> {
    if m.is_empty() {
        return Ok(Array2::from_shape_fn((0, 0), |_| 0.0));
    }
    let m = Array2::from_rows(m.to_vec())?;
    Ok(transpose(&m))
}

fn check_same_shape(op: &'static str, lhs: &Array2<f32>, rhs: &Array2<f32>) -> Result<()> {
    if lhs.shape() != rhs.shape() {
        log::debug!(
            "{} rejected: {}x{} and {}x{}",
            op,
            lhs.nrows(),
            lhs.ncols(),
            rhs.nrows(),
            rhs.ncols()
        );
        return Err(MathError::DimensionMismatch {
            op,
            left: lhs.shape(),
            right: rhs.shape(),
        });
    }
    Ok(())
}

/// `lhs[i][j] += rhs[i][j]`.
pub fn add(lhs: &mut Array2<f32>, rhs: &Array2<f32>) -> Result<()> {
    check_same_shape("add", lhs, rhs)?;
    for (l, &r) in lhs.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
        *l += r;
    }
    Ok(())
}

/// `lhs[i][j] -= rhs[i][j]`.
pub fn subtract(lhs: &mut Array2<f32>, rhs: &Array2<f32>) -> Result<()> {
    check_same_shape("subtract", lhs, rhs)?;
    for (l, &r) in lhs.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
        *l -= r;
    }
    Ok(())
}

pub fn scale_multiply(arr: &mut Array2<f32>, num: f32) {
    for v in arr.as_mut_slice() {
        *v *= num;
    }
}

/// Divides every element by `num`. Dividing by zero yields infinities or NaN.
pub fn scale_divide(arr: &mut Array2<f32>, num: f32) {
    for v in arr.as_mut_slice() {
        *v /= num;
    }
}

/// Dot product of two column vectors of equal length.
pub fn dot(a: &Array2<f32>, b: &Array2<f32>) -> Result<f32> {
    check_same_shape("dot", a, b)?;
    if a.nrows() > 0 && a.ncols() != 1 {
        return Err(MathError::InvalidArgument {
            reason: "dot: operands must be column vectors",
        });
    }
    let mut sum = 0.0f32;
    for i in 0..a.nrows() {
        sum += a[(i, 0)] * b[(i, 0)];
    }
    Ok(sum)
}

/// Fails with `Shape` unless `arr` is exactly `rows x cols`.
pub fn validate_shape(arr: &Array2<f32>, rows: usize, cols: usize) -> Result<()> {
    if arr.shape() != (rows, cols) {
        log::debug!(
            "expected a {}x{} array, got {}x{}",
            rows,
            cols,
            arr.nrows(),
            arr.ncols()
        );
        return Err(MathError::Shape {
            expected: (rows, cols),
            got: arr.shape(),
        });
    }
    Ok(())
}
