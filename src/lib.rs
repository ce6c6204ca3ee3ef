//! vector3d: fixed-dimension vectors and square matrices.
//!
//! The crate is split into a shape-agnostic `f32` kernel (`math::kernel`) that
//! works on rectangular row-major arrays, and thin typed wrappers
//! (`Vector2`/`Vector3`/`Vector4`, `Matrix3`/`Matrix4`) that pin a shape at
//! construction and forward every operation to the kernel.
//!
//! Wrappers own their backing array outright. Constructing two wrappers from
//! the same data means cloning it first, so mutation through one is never
//! visible through the other.
pub mod config;
pub mod error;
pub mod math;

pub use config::Tolerance;
pub use error::{MathError, Result};
pub use math::{Array2, Matrix, Matrix3, Matrix4, Vector, Vector2, Vector3, Vector4};
