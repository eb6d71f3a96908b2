// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! In-place row and column manipulation.
//!
//! Every mutator costs O(row length) or O(column length) and reports the
//! index errors of [`Matrix::at`](crate::Matrix::at).

use crate::{Matrix, MatrixError, Scalar};
use num_traits::Float;

impl<T> Matrix<T> {
    /// Swaps the contents of rows `row1` and `row2`.
    pub fn swap_row(&mut self, row1: usize, row2: usize) -> Result<(), MatrixError> {
        for col in 0..self.cols() {
            let a = self.checked_offset(row1, col)?;
            let b = self.checked_offset(row2, col)?;
            self.data.swap(a, b);
        }
        Ok(())
    }

    /// Swaps the contents of columns `col1` and `col2`.
    pub fn swap_col(&mut self, col1: usize, col2: usize) -> Result<(), MatrixError> {
        for row in 0..self.rows() {
            let a = self.checked_offset(row, col1)?;
            let b = self.checked_offset(row, col2)?;
            self.data.swap(a, b);
        }
        Ok(())
    }
}

impl<T: Copy> Matrix<T> {
    fn update_row<F>(&mut self, row: usize, mut f: F) -> Result<(), MatrixError>
    where
        F: FnMut(T) -> T,
    {
        for col in 0..self.cols() {
            let o = self.checked_offset(row, col)?;
            self.data[o] = f(self.data[o]);
        }
        Ok(())
    }

    fn update_col<F>(&mut self, col: usize, mut f: F) -> Result<(), MatrixError>
    where
        F: FnMut(T) -> T,
    {
        for row in 0..self.rows() {
            let o = self.checked_offset(row, col)?;
            self.data[o] = f(self.data[o]);
        }
        Ok(())
    }

    /// `dst[j] = f(dst[j], src[j])` across two rows.
    fn combine_rows<F>(&mut self, dst: usize, src: usize, mut f: F) -> Result<(), MatrixError>
    where
        F: FnMut(T, T) -> T,
    {
        for col in 0..self.cols() {
            let d = self.checked_offset(dst, col)?;
            let s = self.checked_offset(src, col)?;
            self.data[d] = f(self.data[d], self.data[s]);
        }
        Ok(())
    }

    /// `dst[i] = f(dst[i], src[i])` across two columns.
    fn combine_cols<F>(&mut self, dst: usize, src: usize, mut f: F) -> Result<(), MatrixError>
    where
        F: FnMut(T, T) -> T,
    {
        for row in 0..self.rows() {
            let d = self.checked_offset(row, dst)?;
            let s = self.checked_offset(row, src)?;
            self.data[d] = f(self.data[d], self.data[s]);
        }
        Ok(())
    }
}

impl<T: Scalar> Matrix<T> {
    /// Multiplies every element of `row` by `by`.
    pub fn mult_row(&mut self, row: usize, by: T) -> Result<(), MatrixError> {
        self.update_row(row, |x| x * by)
    }

    /// Multiplies every element of `col` by `by`.
    pub fn mult_col(&mut self, col: usize, by: T) -> Result<(), MatrixError> {
        self.update_col(col, |x| x * by)
    }

    /// Divides every element of `row` by `by`, as multiplication by `1 / by`.
    ///
    /// Only floating-point matrices can do this, so results carry the
    /// rounding of the reciprocal.
    pub fn div_row(&mut self, row: usize, by: T) -> Result<(), MatrixError>
    where
        T: Float,
    {
        self.mult_row(row, by.recip())
    }

    /// Divides every element of `col` by `by`, as multiplication by `1 / by`.
    pub fn div_col(&mut self, col: usize, by: T) -> Result<(), MatrixError>
    where
        T: Float,
    {
        self.mult_col(col, by.recip())
    }

    /// Adds `what` to every element of `row`.
    pub fn add_row(&mut self, row: usize, what: T) -> Result<(), MatrixError> {
        self.update_row(row, |x| x + what)
    }

    /// Adds `what` to every element of `col`.
    pub fn add_col(&mut self, col: usize, what: T) -> Result<(), MatrixError> {
        self.update_col(col, |x| x + what)
    }

    /// Subtracts `what` from every element of `row`: addition of the negated
    /// scalar, computed as `x - what` so unsigned matrices support it too.
    pub fn sub_row(&mut self, row: usize, what: T) -> Result<(), MatrixError> {
        self.update_row(row, |x| x - what)
    }

    /// Subtracts `what` from every element of `col`.
    pub fn sub_col(&mut self, col: usize, what: T) -> Result<(), MatrixError> {
        self.update_col(col, |x| x - what)
    }

    /// Adds `row2` into `row1` elementwise.
    pub fn add_row_elementwise(&mut self, row1: usize, row2: usize) -> Result<(), MatrixError> {
        self.combine_rows(row1, row2, |a, b| a + b)
    }

    /// Subtracts `row2` from `row1` elementwise, storing into `row1`.
    pub fn sub_row_elementwise(&mut self, row1: usize, row2: usize) -> Result<(), MatrixError> {
        self.combine_rows(row1, row2, |a, b| a - b)
    }

    /// Adds `col2` into `col1` elementwise.
    pub fn add_col_elementwise(&mut self, col1: usize, col2: usize) -> Result<(), MatrixError> {
        self.combine_cols(col1, col2, |a, b| a + b)
    }

    /// Subtracts `col2` from `col1` elementwise, storing into `col1`.
    pub fn sub_col_elementwise(&mut self, col1: usize, col2: usize) -> Result<(), MatrixError> {
        self.combine_cols(col1, col2, |a, b| a - b)
    }
}
