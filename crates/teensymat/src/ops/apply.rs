// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Elementwise apply primitives.

use crate::{Matrix, MatrixError};

impl<T: Copy> Matrix<T> {
    /// Applies `f` to every element, producing a new packed matrix.
    ///
    /// # Errors
    /// Returns [`MatrixError::StorageOverrun`] if an element is unreachable.
    pub fn map<R, F>(&self, mut f: F) -> Result<Matrix<R>, MatrixError>
    where
        F: FnMut(T) -> R,
    {
        let data = self
            .offsets()
            .map(|offset| offset.map(|o| f(self.data[o])))
            .collect::<Result<Vec<R>, _>>()?;
        Ok(Matrix::from_vec(self.rows(), self.cols(), data))
    }

    /// Computes `f(element, other)` for every element, producing a new packed
    /// matrix whose element type may differ from `T`.
    ///
    /// # Errors
    /// Returns [`MatrixError::StorageOverrun`] if an element is unreachable.
    ///
    /// # Examples
    /// ```
    /// use teensymat::Matrix;
    /// let m = Matrix::from_elements(1, 3, [1, 5, 9]).unwrap();
    /// let big = m.map_with_scalar(4, |a, b| a > b).unwrap();
    /// assert_eq!(big.as_slice(), &[false, true, true]);
    /// ```
    pub fn map_with_scalar<R, F>(&self, other: T, mut f: F) -> Result<Matrix<R>, MatrixError>
    where
        F: FnMut(T, T) -> R,
    {
        self.map(|a| f(a, other))
    }

    /// Replaces every element with `f(element, other)`.
    ///
    /// # Errors
    /// Returns [`MatrixError::StorageOverrun`] if an element is unreachable;
    /// elements visited before it keep their new values.
    pub fn map_with_scalar_in_place<F>(&mut self, other: T, mut f: F) -> Result<(), MatrixError>
    where
        F: FnMut(T, T) -> T,
    {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let o = self.checked_offset(row, col)?;
                self.data[o] = f(self.data[o], other);
            }
        }
        Ok(())
    }

    /// Computes `f(self[i, j], other[i, j])` pairwise, producing a new packed
    /// matrix whose element type may differ from `T`.
    ///
    /// # Errors
    /// Returns [`MatrixError::ShapeMismatch`] if the shapes differ and
    /// [`MatrixError::StorageOverrun`] if an element of either side is
    /// unreachable.
    pub fn map_with_matrix<R, F>(&self, other: &Matrix<T>, mut f: F) -> Result<Matrix<R>, MatrixError>
    where
        F: FnMut(T, T) -> R,
    {
        self.check_same_shape("map_with_matrix", other)?;
        let data = self
            .offsets()
            .zip(other.offsets())
            .map(|(a, b)| -> Result<R, MatrixError> { Ok(f(self.data[a?], other.data[b?])) })
            .collect::<Result<Vec<R>, _>>()?;
        Ok(Matrix::from_vec(self.rows(), self.cols(), data))
    }

    /// Replaces every element with `f(self[i, j], other[i, j])`.
    ///
    /// # Errors
    /// Same as [`map_with_matrix`](Matrix::map_with_matrix). The shape check
    /// runs before anything is written.
    pub fn map_with_matrix_in_place<F>(&mut self, other: &Matrix<T>, mut f: F) -> Result<(), MatrixError>
    where
        F: FnMut(T, T) -> T,
    {
        self.check_same_shape("map_with_matrix_in_place", other)?;
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let dst = self.checked_offset(row, col)?;
                let src = other.checked_offset(row, col)?;
                self.data[dst] = f(self.data[dst], other.data[src]);
            }
        }
        Ok(())
    }
}

impl<T> Matrix<T> {
    pub(crate) fn check_same_shape<U>(&self, op: &'static str, other: &Matrix<U>) -> Result<(), MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::shapes(op, self.shape(), other.shape()));
        }
        Ok(())
    }
}
