use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::config::Tolerance;
use crate::error::{MathError, Result};
use crate::math::dim::{Dim, VectorDim};
use crate::math::kernel;
use crate::math::matrix::Array2;

/// Column vector of `N` components, backed by an `N x 1` array.
///
/// The shape is fixed at construction; arithmetic only ever changes values.
/// `N` is limited to 2, 3 or 4 (see [`VectorDim`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<f32>", into = "Array2<f32>")]
pub struct Vector<const N: usize>
where
    Dim<N>: VectorDim,
{
    data: Array2<f32>,
}

pub type Vector2 = Vector<2>;
pub type Vector3 = Vector<3>;
pub type Vector4 = Vector<4>;

impl<const N: usize> Vector<N>
where
    Dim<N>: VectorDim,
{
    /// Wraps `data`, which must be exactly `N x 1`.
    pub fn new(data: Array2<f32>) -> Result<Self> {
        kernel::validate_shape(&data, N, 1)?;
        Ok(Self { data })
    }

    /// Builds from nested rows, e.g. `vec![vec![1.0], vec![2.0], vec![3.0]]`.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        Self::new(Array2::from_rows(rows)?)
    }

    pub fn from_components(components: [f32; N]) -> Self {
        Self {
            data: Array2::from_shape_fn((N, 1), |(row, _)| components[row]),
        }
    }

    /// The all-ones vector (`E`).
    pub fn ones() -> Self {
        Self {
            data: Array2::from_shape_fn((N, 1), |_| 1.0),
        }
    }

    /// The all-zero vector (`Z`).
    pub fn zeros() -> Self {
        Self {
            data: Array2::from_shape_fn((N, 1), |_| 0.0),
        }
    }

    pub fn as_array(&self) -> &Array2<f32> {
        &self.data
    }

    pub fn into_array(self) -> Array2<f32> {
        self.data
    }

    pub fn components(&self) -> &[f32] {
        self.data.as_slice()
    }

    pub fn multiply_scalar(&mut self, num: f32) -> &mut Self {
        kernel::scale_multiply(&mut self.data, num);
        self
    }

    pub fn divide_scalar(&mut self, num: f32) -> &mut Self {
        kernel::scale_divide(&mut self.data, num);
        self
    }

    pub fn add(&mut self, other: &Vector<N>) -> Result<&mut Self> {
        kernel::validate_shape(&other.data, N, 1)?;
        kernel::add(&mut self.data, &other.data)?;
        Ok(self)
    }

    pub fn subtract(&mut self, other: &Vector<N>) -> Result<&mut Self> {
        kernel::validate_shape(&other.data, N, 1)?;
        kernel::subtract(&mut self.data, &other.data)?;
        Ok(self)
    }

    /// Euclidean norm, summed in `f64` and narrowed to `f32`.
    pub fn length(&self) -> f32 {
        self.components()
            .iter()
            .map(|&c| f64::from(c).powi(2))
            .sum::<f64>()
            .sqrt() as f32
    }

    /// Divides every component by [`length`](Self::length).
    ///
    /// A zero vector is not special-cased: every component becomes NaN.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        kernel::scale_divide(&mut self.data, len);
        self
    }

    pub fn dot(&self, other: &Vector<N>) -> Result<f32> {
        kernel::validate_shape(&other.data, N, 1)?;
        kernel::dot(&self.data, &other.data)
    }

    pub fn approx_eq(&self, other: &Vector<N>, tolerance: &Tolerance) -> bool {
        self.data.approx_eq(&other.data, tolerance)
    }
}

impl Vector<3> {
    /// Right-handed cross product `self x other`, written back into `self`.
    pub fn cross(&mut self, other: &Vector<3>) -> &mut Self {
        let a = [self[0], self[1], self[2]];
        let b = [other[0], other[1], other[2]];
        let out = self.data.as_mut_slice();
        out[0] = a[1] * b[2] - a[2] * b[1];
        out[1] = a[2] * b[0] - a[0] * b[2];
        out[2] = a[0] * b[1] - a[1] * b[0];
        self
    }
}

impl<const N: usize> Index<usize> for Vector<N>
where
    Dim<N>: VectorDim,
{
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[(index, 0)]
    }
}

impl<const N: usize> TryFrom<Array2<f32>> for Vector<N>
where
    Dim<N>: VectorDim,
{
    type Error = MathError;

    fn try_from(data: Array2<f32>) -> Result<Self> {
        Vector::new(data)
    }
}

impl<const N: usize> From<Vector<N>> for Array2<f32>
where
    Dim<N>: VectorDim,
{
    fn from(value: Vector<N>) -> Self {
        value.data
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N>
where
    Dim<N>: VectorDim,
{
    fn from(components: [f32; N]) -> Self {
        Vector::from_components(components)
    }
}

impl<const N: usize> fmt::Display for Vector<N>
where
    Dim<N>: VectorDim,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.components().iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != N {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
