use std::error::Error;
use std::fmt;

/// Errors raised by the kernel and the typed wrappers.
///
/// Every failure is detected before any output is written, so an operation
/// that returns an error has left its operands untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// An operand was empty (zero rows or zero columns) or otherwise unusable.
    InvalidArgument { reason: &'static str },
    /// Operand shapes are incompatible for the requested operation.
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A row list had rows of unequal length.
    NotRectangular {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// A flat buffer does not hold exactly `rows * cols` elements.
    BufferLength { shape: (usize, usize), len: usize },
    /// `rows * cols` does not fit in `usize`.
    ShapeOverflow { shape: (usize, usize) },
    /// An array does not have the fixed shape a wrapper type requires.
    Shape {
        expected: (usize, usize),
        got: (usize, usize),
    },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MathError::InvalidArgument { reason } => write!(f, "invalid argument: {}", reason),
            MathError::DimensionMismatch { op, left, right } => write!(
                f,
                "{}: incompatible shapes {}x{} and {}x{}",
                op, left.0, left.1, right.0, right.1
            ),
            MathError::NotRectangular { row, expected, got } => write!(
                f,
                "array is not rectangular: row {} has length {}, expected {}",
                row, got, expected
            ),
            MathError::BufferLength { shape, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                shape.0, shape.1, len
            ),
            MathError::ShapeOverflow { shape } => write!(
                f,
                "shape ({}, {}) has more elements than fit in memory",
                shape.0, shape.1
            ),
            MathError::Shape { expected, got } => write!(
                f,
                "incorrect shape: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
        }
    }
}

impl Error for MathError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MathError>;
