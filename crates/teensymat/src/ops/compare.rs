// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Elementwise comparisons producing boolean matrices.
//!
//! `PartialEq` on [`Matrix`] answers "are these the same matrix?" with a
//! single `bool`; the methods here answer the question per element.

use crate::{Matrix, MatrixError};

macro_rules! impl_comparison {
    ($($with_matrix:ident, $with_scalar:ident, $sym:tt, $what:literal;)*) => {
        impl<T: Copy + PartialOrd> Matrix<T> {
            $(
                #[doc = concat!("Elementwise `self[i, j] ", stringify!($sym), " other[i, j]` (", $what, ").")]
                ///
                /// # Errors
                /// Returns [`MatrixError::ShapeMismatch`] if the shapes differ.
                pub fn $with_matrix(&self, other: &Matrix<T>) -> Result<Matrix<bool>, MatrixError> {
                    self.map_with_matrix(other, |a, b| a $sym b)
                }

                #[doc = concat!("Elementwise `self[i, j] ", stringify!($sym), " other` (", $what, ").")]
                pub fn $with_scalar(&self, other: T) -> Result<Matrix<bool>, MatrixError> {
                    self.map_with_scalar(other, |a, b| a $sym b)
                }
            )*
        }
    };
}

impl_comparison! {
    eq_matrix, eq_scalar, ==, "equal";
    lt_matrix, lt_scalar, <, "less than";
    le_matrix, le_scalar, <=, "less than or equal";
    gt_matrix, gt_scalar, >, "greater than";
    ge_matrix, ge_scalar, >=, "greater than or equal";
}
