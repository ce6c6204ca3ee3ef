use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::config::Tolerance;
use crate::error::{MathError, Result};
use crate::math::dim::{Dim, MatrixDim};
use crate::math::kernel;
use crate::math::matrix::Array2;
use crate::math::vector::Vector;

/// Square `N x N` matrix. The shape is fixed at construction and `N` is
/// limited to 3 or 4 (see [`MatrixDim`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<f32>", into = "Array2<f32>")]
pub struct Matrix<const N: usize>
where
    Dim<N>: MatrixDim,
{
    data: Array2<f32>,
}

pub type Matrix3 = Matrix<3>;
pub type Matrix4 = Matrix<4>;

impl<const N: usize> Matrix<N>
where
    Dim<N>: MatrixDim,
{
    /// Wraps `data`, which must be exactly `N x N`.
    pub fn new(data: Array2<f32>) -> Result<Self> {
        kernel::validate_shape(&data, N, N)?;
        Ok(Self { data })
    }

    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        Self::new(Array2::from_rows(rows)?)
    }

    pub fn from_array(rows: [[f32; N]; N]) -> Self {
        Self {
            data: Array2::from_shape_fn((N, N), |(row, col)| rows[row][col]),
        }
    }

    /// The all-ones matrix (`E`). Every entry is 1; this is not the identity.
    pub fn ones() -> Self {
        Self {
            data: Array2::from_shape_fn((N, N), |_| 1.0),
        }
    }

    /// The all-zero matrix (`Z`).
    pub fn zeros() -> Self {
        Self {
            data: Array2::from_shape_fn((N, N), |_| 0.0),
        }
    }

    pub fn as_array(&self) -> &Array2<f32> {
        &self.data
    }

    pub fn into_array(self) -> Array2<f32> {
        self.data
    }

    /// `self = self * other`.
    pub fn multiply(&mut self, other: &Matrix<N>) -> Result<&mut Self> {
        kernel::validate_shape(&other.data, N, N)?;
        self.data = kernel::multiply(&self.data, &other.data)?;
        Ok(self)
    }

    /// `self * v` as a new vector; `self` is left unchanged.
    pub fn multiply_vector(&self, v: &Vector<N>) -> Result<Vector<N>> {
        kernel::validate_shape(v.as_array(), N, 1)?;
        Vector::new(kernel::multiply(&self.data, v.as_array())?)
    }

    pub fn transpose(&mut self) -> &mut Self {
        self.data = kernel::transpose(&self.data);
        self
    }

    pub fn add(&mut self, other: &Matrix<N>) -> Result<&mut Self> {
        kernel::validate_shape(&other.data, N, N)?;
        kernel::add(&mut self.data, &other.data)?;
        Ok(self)
    }

    pub fn subtract(&mut self, other: &Matrix<N>) -> Result<&mut Self> {
        kernel::validate_shape(&other.data, N, N)?;
        kernel::subtract(&mut self.data, &other.data)?;
        Ok(self)
    }

    pub fn multiply_scalar(&mut self, num: f32) -> &mut Self {
        kernel::scale_multiply(&mut self.data, num);
        self
    }

    pub fn divide_scalar(&mut self, num: f32) -> &mut Self {
        kernel::scale_divide(&mut self.data, num);
        self
    }

    pub fn approx_eq(&self, other: &Matrix<N>, tolerance: &Tolerance) -> bool {
        self.data.approx_eq(&other.data, tolerance)
    }
}

impl<const N: usize> Index<(usize, usize)> for Matrix<N>
where
    Dim<N>: MatrixDim,
{
    type Output = f32;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[index]
    }
}

impl<const N: usize> TryFrom<Array2<f32>> for Matrix<N>
where
    Dim<N>: MatrixDim,
{
    type Error = MathError;

    fn try_from(data: Array2<f32>) -> Result<Self> {
        Matrix::new(data)
    }
}

impl<const N: usize> From<Matrix<N>> for Array2<f32>
where
    Dim<N>: MatrixDim,
{
    fn from(value: Matrix<N>) -> Self {
        value.data
    }
}

impl<const N: usize> From<[[f32; N]; N]> for Matrix<N>
where
    Dim<N>: MatrixDim,
{
    fn from(rows: [[f32; N]; N]) -> Self {
        Matrix::from_array(rows)
    }
}

impl<const N: usize> fmt::Display for Matrix<N>
where
    Dim<N>: MatrixDim,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.data, f)
    }
}
