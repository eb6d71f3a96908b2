// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Core matrix type: strided storage and checked element access.

use crate::{Layout, MatrixError};
use num_traits::Zero;
use std::fmt;
use std::ops::{Index, IndexMut};

/// An owned two-dimensional array over a flat, strided buffer.
///
/// `Matrix` owns its buffer exclusively. Element `(row, col)` lives at flat
/// offset `row * row_stride + col * col_stride`; the canonical constructors
/// use packed row-major strides (`cols`, `1`), while
/// [`from_strided`](Matrix::from_strided) and
/// [`with_layout`](Matrix::with_layout) adopt arbitrary ones.
///
/// # Memory Layout
/// The buffer may be longer than `rows * cols` when adopted from a caller.
/// It may also be too short: strided constructors never validate the buffer,
/// and an offending access fails with [`MatrixError::StorageOverrun`] instead.
///
/// # Thread Safety
/// Plain owned data; `Matrix<T>` is `Send`/`Sync` whenever `T` is. Mutation
/// needs `&mut`, so concurrent writers must be serialised by the caller.
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    pub(crate) layout: Layout,
    pub(crate) data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Creates the empty `0x0` matrix.
    pub fn new() -> Self {
        Self {
            layout: Layout::EMPTY,
            data: Vec::new(),
        }
    }

    /// Creates a `rows x cols` matrix with every element set to `fill`.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`, like any oversized `Vec`.
    ///
    /// # Examples
    /// ```
    /// use teensymat::Matrix;
    /// let m = Matrix::filled(2, 3, 7u8);
    /// assert_eq!(m.size(), 6);
    /// assert_eq!(*m.at(1, 2).unwrap(), 7);
    /// ```
    pub fn filled(rows: usize, cols: usize, fill: T) -> Self
    where
        T: Clone,
    {
        let layout = Layout::row_major(rows, cols);
        let Some(size) = layout.checked_size() else {
            panic!("{}", MatrixError::size_overflow("filled", rows, cols));
        };
        Self {
            layout,
            data: vec![fill; size],
        }
    }

    /// Creates a `rows x cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self
    where
        T: Zero + Clone,
    {
        Self::filled(rows, cols, T::zero())
    }

    /// Creates a matrix from exactly `rows * cols` elements in row-major order.
    ///
    /// # Errors
    /// Returns [`MatrixError::ShapeMismatch`] if `elements` yields too few or
    /// too many values, or if `rows * cols` overflows `usize`.
    ///
    /// # Examples
    /// ```
    /// use teensymat::Matrix;
    /// let m = Matrix::from_elements(2, 3, [1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(m[(1, 0)], 4);
    /// assert!(Matrix::from_elements(2, 3, [1, 2, 3]).is_err());
    /// ```
    pub fn from_elements<I>(rows: usize, cols: usize, elements: I) -> Result<Self, MatrixError>
    where
        I: IntoIterator<Item = T>,
    {
        let Some(expected) = rows.checked_mul(cols) else {
            return Err(MatrixError::size_overflow("from_elements", rows, cols));
        };
        let mut iter = elements.into_iter();
        let data: Vec<T> = iter.by_ref().take(expected).collect();
        if data.len() < expected {
            return Err(MatrixError::element_count(rows, cols, data.len()));
        }
        let extra = iter.count();
        if extra > 0 {
            return Err(MatrixError::element_count(rows, cols, expected + extra));
        }
        Ok(Self::from_vec(rows, cols, data))
    }

    /// Adopts `data` as a packed row-major `rows x cols` matrix without copying.
    ///
    /// The buffer length is not validated; see [`with_layout`](Matrix::with_layout).
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Self {
        Self::with_layout(Layout::row_major(rows, cols), data)
    }

    /// Adopts `data` with explicit strides without copying.
    ///
    /// The buffer length is not validated; see [`with_layout`](Matrix::with_layout).
    pub fn from_strided(
        rows: usize,
        cols: usize,
        row_stride: usize,
        col_stride: usize,
        data: Vec<T>,
    ) -> Self {
        Self::with_layout(Layout::strided(rows, cols, row_stride, col_stride), data)
    }

    /// Adopts `data` under the given layout without copying.
    ///
    /// Construction always succeeds. If some logical offset falls outside the
    /// buffer or past `rows * cols`, a warning is logged and accesses to that
    /// element fail with [`MatrixError::StorageOverrun`].
    pub fn with_layout(layout: Layout, data: Vec<T>) -> Self {
        let limit = data.len().min(layout.size());
        match layout.extent() {
            Some(extent) if extent <= limit => {}
            extent => tracing::warn!(
                %layout,
                buffer_len = data.len(),
                ?extent,
                "matrix storage does not cover its layout; out-of-range accesses will fail"
            ),
        }
        Self { layout, data }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.layout.cols()
    }

    /// Flat offset increment from one row to the next.
    pub fn row_stride(&self) -> usize {
        self.layout.row_stride()
    }

    /// Flat offset increment from one column to the next.
    pub fn col_stride(&self) -> usize {
        self.layout.col_stride()
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.layout.shape()
    }

    /// Logical element count, `rows * cols`, saturating at `usize::MAX`.
    pub fn size(&self) -> usize {
        self.layout.size()
    }

    /// Returns `true` if the matrix has no elements.
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// Returns the shape and stride descriptor.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns `true` if the matrix uses packed row-major strides.
    pub fn is_packed(&self) -> bool {
        self.layout.is_packed()
    }

    /// Returns the backing buffer in storage order.
    ///
    /// Storage order equals logical row-major order only when
    /// [`is_packed`](Matrix::is_packed) holds.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the backing buffer mutably, in storage order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the matrix and returns its backing buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Resolves `(row, col)` to a flat offset, checking both the logical
    /// bounds and the backing storage.
    pub(crate) fn checked_offset(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        let (rows, cols) = self.shape();
        if row >= rows || col >= cols {
            tracing::debug!(row, col, rows, cols, "index out of bounds");
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            });
        }
        let len = self.data.len();
        let size = self.layout.size();
        match self.layout.offset(row, col) {
            Some(offset) if offset < len && offset < size => Ok(offset),
            offset => Err(MatrixError::StorageOverrun {
                offset: offset.unwrap_or(usize::MAX),
                len,
                size,
            }),
        }
    }

    /// Checked offsets of every element, in logical row-major order.
    pub(crate) fn offsets(&self) -> impl Iterator<Item = Result<usize, MatrixError>> + '_ {
        let (rows, cols) = self.shape();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| self.checked_offset(row, col)))
    }

    /// Returns a reference to the element at `(row, col)`.
    ///
    /// # Errors
    /// Returns [`MatrixError::IndexOutOfBounds`] if `row >= rows` or
    /// `col >= cols`, and [`MatrixError::StorageOverrun`] if the strided offset
    /// falls outside the buffer or past `rows * cols`.
    pub fn at(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        let offset = self.checked_offset(row, col)?;
        Ok(&self.data[offset])
    }

    /// Returns a mutable reference to the element at `(row, col)`.
    ///
    /// # Errors
    /// Same as [`at`](Matrix::at).
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        let offset = self.checked_offset(row, col)?;
        Ok(&mut self.data[offset])
    }

    /// Returns the element at `(row, col)` without any checks.
    ///
    /// # Safety
    /// `row * row_stride + col * col_stride` must not overflow and must be
    /// less than the buffer length.
    pub unsafe fn at_unchecked(&self, row: usize, col: usize) -> &T {
        self.data
            .get_unchecked(row * self.layout.row_stride() + col * self.layout.col_stride())
    }

    /// Mutable counterpart of [`at_unchecked`](Matrix::at_unchecked).
    ///
    /// # Safety
    /// Same contract as [`at_unchecked`](Matrix::at_unchecked).
    pub unsafe fn at_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        let offset = row * self.layout.row_stride() + col * self.layout.col_stride();
        self.data.get_unchecked_mut(offset)
    }

    /// Returns the transpose as a new matrix.
    ///
    /// The buffer is copied and the strides swapped, so the result is an
    /// independent matrix: mutating it never affects `self`. The result of
    /// transposing a packed matrix is column-major; use
    /// [`to_packed`](Matrix::to_packed) to re-pack it.
    pub fn transpose(&self) -> Matrix<T>
    where
        T: Clone,
    {
        tracing::trace!(layout = %self.layout, "transposing");
        Matrix {
            layout: self.layout.transposed(),
            data: self.data.clone(),
        }
    }

    /// Copies the elements into a new packed row-major matrix.
    ///
    /// # Errors
    /// Returns [`MatrixError::StorageOverrun`] if any element is unreachable.
    pub fn to_packed(&self) -> Result<Matrix<T>, MatrixError>
    where
        T: Clone,
    {
        tracing::trace!(layout = %self.layout, "packing into row-major order");
        let data = self
            .offsets()
            .map(|offset| offset.map(|o| self.data[o].clone()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Matrix::from_vec(self.rows(), self.cols(), data))
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Panicking element access: `m[(row, col)]`.
///
/// # Panics
/// Panics on any error [`Matrix::at`] would return.
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.at(row, col) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

/// # Panics
/// Panics on any error [`Matrix::at_mut`] would return.
impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.at_mut(row, col) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Logical equality: same shape and equal elements, compared through each
/// side's strides. A matrix with an unreachable element equals nothing.
impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self
                .offsets()
                .zip(other.offsets())
                .all(|pair| match pair {
                    (Ok(a), Ok(b)) => self.data[a] == other.data[b],
                    _ => false,
                })
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for col in 0..self.cols() {
                if col > 0 {
                    write!(f, ", ")?;
                }
                match self.at(row, col) {
                    Ok(v) => write!(f, "{v}")?,
                    Err(_) => write!(f, "?")?,
                }
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
