use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};
use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::config::Tolerance;
use crate::error::{MathError, Result};

/// Dense row-major 2D array.
///
/// Rows always have equal length: the only way to build one from nested rows
/// is [`Array2::from_rows`], which rejects jagged input. Column vectors are
/// arrays with a single column.
#[derive(Clone, Debug, PartialEq)]
pub struct Array2<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

fn element_count(shape: (usize, usize)) -> Result<usize> {
    shape
        .0
        .checked_mul(shape.1)
        .ok_or(MathError::ShapeOverflow { shape })
}

impl<T> Array2<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        let (rows, cols) = shape;
        let len = element_count(shape)?;
        if data.len() != len {
            log::debug!(
                "rejecting buffer of length {} for shape ({}, {})",
                data.len(),
                rows,
                cols
            );
            return Err(MathError::BufferLength {
                shape,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build from nested rows. An empty list gives a 0x0 array.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows.checked_mul(ncols).unwrap_or(0));
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                log::debug!("row {} has length {}, expected {}", idx, row.len(), ncols);
                return Err(MathError::NotRectangular {
                    row: idx,
                    expected: ncols,
                    got: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    pub fn from_shape_fn<F>(shape: (usize, usize), mut f: F) -> Self
    where
        F: FnMut((usize, usize)) -> T,
    {
        let (rows, cols) = shape;
        let mut data = Vec::with_capacity(rows.checked_mul(cols).unwrap_or(0));
        for row in 0..rows {
            for col in 0..cols {
                data.push(f((row, col)));
            }
        }
        Self { data, rows, cols }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Array2<U>
    where
        F: FnMut(&T) -> U,
    {
        Array2 {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.rows).map(|r| self.row_slice(r).to_vec()).collect()
    }
}

impl<T> Array2<T>
where
    T: Clone,
{
    pub fn from_elem(shape: (usize, usize), value: T) -> Result<Self> {
        Ok(Array2 {
            data: vec![value; element_count(shape)?],
            rows: shape.0,
            cols: shape.1,
        })
    }
}

impl<T> Array2<T>
where
    T: Clone + Zero,
{
    pub fn zeros(shape: (usize, usize)) -> Result<Self> {
        Array2::from_elem(shape, T::zero())
    }
}

impl<T> Array2<T>
where
    T: Clone + One,
{
    pub fn ones(shape: (usize, usize)) -> Result<Self> {
        Array2::from_elem(shape, T::one())
    }
}

impl Array2<f32> {
    /// Same shape, and every pair of elements close under `tolerance`.
    pub fn approx_eq(&self, other: &Array2<f32>, tolerance: &Tolerance) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| tolerance.close(a, b))
    }
}

impl<T> Index<(usize, usize)> for Array2<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index ({}, {}) out of bounds for shape ({}, {})",
            index.0,
            index.1,
            self.rows,
            self.cols
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Array2<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index ({}, {}) out of bounds for shape ({}, {})",
            index.0,
            index.1,
            self.rows,
            self.cols
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Array2<T> {
    type Error = MathError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Array2::from_rows(rows)
    }
}

impl<T: fmt::Display> fmt::Display for Array2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows {
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if row + 1 != self.rows {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

// Serialized as a list of rows so the wire form matches `from_rows`.
impl<T: Serialize> Serialize for Array2<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows))?;
        for row in 0..self.rows {
            seq.serialize_element(self.row_slice(row))?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Array2<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Array2::from_rows(rows).map_err(D::Error::custom)
    }
}
