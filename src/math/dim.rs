//! Compile-time restriction of the wrapper dimensions.
//!
//! `Vector<N>` exists only for `N` in `2..=4` and `Matrix<N>` only for `N` in
//! `3..=4`. Any other size is rejected by the type checker:
//!
//! ```
//! use vector3d::math::{Matrix, Vector};
//! let _ = Vector::<2>::ones();
//! let _ = Matrix::<4>::zeros();
//! ```
//!
//! ```compile_fail
//! # use vector3d::math::Vector;
//! let _ = Vector::<7>::ones();
//! ```
//!
//! ```compile_fail
//! # use vector3d::math::Vector;
//! let _ = Vector::<0>::zeros();
//! ```
//!
//! ```compile_fail
//! # use vector3d::math::Matrix;
//! let _ = Matrix::<2>::zeros();
//! ```
//!
//! ```compile_fail
//! # use vector3d::math::Matrix;
//! let _ = Matrix::<0>::zeros();
//! ```

/// Type-level carrier for a dimension.
pub struct Dim<const N: usize>;

mod private {
    pub trait Sealed {}
    impl Sealed for super::Dim<2> {}
    impl Sealed for super::Dim<3> {}
    impl Sealed for super::Dim<4> {}
}

/// Dimensions a column vector may have.
///
/// Sealed trait: only implemented for `Dim<2>`, `Dim<3>` and `Dim<4>`.
pub trait VectorDim: private::Sealed {}

impl VectorDim for Dim<2> {}
impl VectorDim for Dim<3> {}
impl VectorDim for Dim<4> {}

/// Dimensions a square matrix may have. Every matrix dimension is also a
/// vector dimension, so `Matrix<N>` can always multiply `Vector<N>`.
///
/// Sealed trait: only implemented for `Dim<3>` and `Dim<4>`.
pub trait MatrixDim: VectorDim {}

impl MatrixDim for Dim<3> {}
impl MatrixDim for Dim<4> {}
