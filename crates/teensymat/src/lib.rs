// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # teensymat
//!
//! A small two-dimensional array container for constrained numeric code that
//! does not want a full linear-algebra library.
//!
//! This crate provides:
//! - [`Matrix`]: an owned matrix over a flat buffer with arbitrary row and
//!   column strides, and bounds-checked element access.
//! - [`Layout`]: the shape/stride descriptor, loadable from TOML.
//! - Elementwise apply primitives that every operator is built from, the
//!   `+ - * /` operators (matrix-matrix and matrix-scalar), elementwise
//!   comparisons, and `any`/`all` reductions.
//! - In-place row/column manipulation: swap, scale, add, subtract.
//!
//! # Design Goals
//! - Every access is checked by default; [`Matrix::at_unchecked`] is the
//!   explicit opt-out.
//! - Transposition copies: a transposed matrix never aliases its source.
//! - Clean error types via `thiserror`, no panics outside the std operator
//!   traits that cannot return `Result`.
//!
//! # Example
//! ```
//! use teensymat::Matrix;
//!
//! let mut m = Matrix::from_elements(2, 3, [1, 2, 3, 4, 5, 6]).unwrap();
//! m.swap_row(0, 1).unwrap();
//! assert_eq!(*m.at(0, 0).unwrap(), 4);
//!
//! let doubled = (&m * 2).unwrap();
//! assert!(doubled.ge_matrix(&m).unwrap().all().unwrap());
//! ```

mod error;
mod layout;
mod matrix;
mod ops;
mod scalar;

pub use error::MatrixError;
pub use layout::Layout;
pub use matrix::Matrix;
pub use scalar::{Scalar, Truthy};
