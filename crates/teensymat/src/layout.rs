// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Shape and stride descriptors for strided matrix storage.
//!
//! # TOML Format
//! ```toml
//! rows = 3
//! cols = 2
//! # Optional; packed row-major strides are used when omitted.
//! row_stride = 1
//! col_stride = 3
//! ```

use crate::MatrixError;
use std::fmt;

/// Describes how a logical `rows x cols` grid maps onto a flat buffer.
///
/// The flat offset of `(row, col)` is `row * row_stride + col * col_stride`.
/// Layouts are plain values: copying one never touches element storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Layout {
    rows: usize,
    cols: usize,
    row_stride: usize,
    col_stride: usize,
}

/// On-disk form of a [`Layout`], with optional strides.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct LayoutConfig {
    rows: usize,
    cols: usize,
    row_stride: Option<usize>,
    col_stride: Option<usize>,
}

impl Layout {
    /// The layout of the empty matrix: no rows, no columns, zero strides.
    pub const EMPTY: Layout = Layout {
        rows: 0,
        cols: 0,
        row_stride: 0,
        col_stride: 0,
    };

    /// Creates a packed row-major layout (`row_stride = cols`, `col_stride = 1`).
    ///
    /// # Examples
    /// ```
    /// use teensymat::Layout;
    /// let l = Layout::row_major(2, 3);
    /// assert_eq!(l.strides(), (3, 1));
    /// assert_eq!(l.size(), 6);
    /// ```
    pub fn row_major(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            row_stride: cols,
            col_stride: 1,
        }
    }

    /// Creates a layout with explicit strides.
    pub fn strided(rows: usize, cols: usize, row_stride: usize, col_stride: usize) -> Self {
        Self {
            rows,
            cols,
            row_stride,
            col_stride,
        }
    }

    /// Number of logical rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of logical columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Offset increment for one step along a column (to the next row).
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    /// Offset increment for one step along a row (to the next column).
    pub fn col_stride(&self) -> usize {
        self.col_stride
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns `(row_stride, col_stride)`.
    pub fn strides(&self) -> (usize, usize) {
        (self.row_stride, self.col_stride)
    }

    /// Logical element count, `rows * cols`, saturating at `usize::MAX`.
    ///
    /// A saturated size never limits a strided offset; the buffer length
    /// still does.
    pub fn size(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Logical element count, or `None` if `rows * cols` overflows `usize`.
    pub fn checked_size(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Returns `true` if the layout has no elements.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns `true` for the default packed row-major layout.
    ///
    /// Layouts without elements are trivially packed.
    pub fn is_packed(&self) -> bool {
        self.is_empty() || (self.row_stride == self.cols && self.col_stride == 1)
    }

    /// Flat offset of `(row, col)`, or `None` if the arithmetic overflows.
    ///
    /// No bounds are checked here; see [`crate::Matrix::at`].
    pub fn offset(&self, row: usize, col: usize) -> Option<usize> {
        row.checked_mul(self.row_stride)?
            .checked_add(col.checked_mul(self.col_stride)?)
    }

    /// Minimum buffer length that keeps every logical offset in range.
    ///
    /// Returns `None` if the largest offset overflows `usize`.
    pub fn extent(&self) -> Option<usize> {
        if self.is_empty() {
            return Some(0);
        }
        self.offset(self.rows - 1, self.cols - 1)
            .and_then(|last| last.checked_add(1))
    }

    /// The same grid with rows and columns exchanged.
    ///
    /// Strides swap along with the shape, so `(r, c)` in the result addresses
    /// the same flat offset as `(c, r)` in `self`.
    pub fn transposed(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
            row_stride: self.col_stride,
            col_stride: self.row_stride,
        }
    }

    /// Parses a layout from a TOML string.
    ///
    /// Missing strides default to packed row-major.
    pub fn from_toml(toml_str: &str) -> Result<Self, MatrixError> {
        let raw: LayoutConfig = toml::from_str(toml_str)
            .map_err(|e| MatrixError::Config(format!("TOML parse error: {e}")))?;
        let packed = Layout::row_major(raw.rows, raw.cols);
        Ok(Layout {
            row_stride: raw.row_stride.unwrap_or(packed.row_stride),
            col_stride: raw.col_stride.unwrap_or(packed.col_stride),
            ..packed
        })
    }

    /// Serialises the layout to TOML.
    pub fn to_toml(&self) -> Result<String, MatrixError> {
        toml::to_string_pretty(self)
            .map_err(|e| MatrixError::Config(format!("TOML serialise error: {e}")))
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::EMPTY
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} (strides {}, {})",
            self.rows, self.cols, self.row_stride, self.col_stride
        )
    }
}
