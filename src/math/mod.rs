//! Rectangular `f32` arrays, the arithmetic kernel over them, and the
//! fixed-shape vector and matrix types built on that kernel.
pub mod dim;
pub mod kernel;
pub mod matrix;
pub mod square;
pub mod vector;

pub use dim::{Dim, MatrixDim, VectorDim};
pub use matrix::Array2;
pub use square::{Matrix, Matrix3, Matrix4};
pub use vector::{Vector, Vector2, Vector3, Vector4};
