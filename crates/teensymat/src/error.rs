// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for matrix operations.

/// Errors that can occur during matrix construction, access and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// A logical index lies outside the matrix shape.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A strided offset points past the backing buffer or the logical size.
    ///
    /// Only reachable through a malformed strided construction.
    #[error("flat offset {offset} overruns matrix storage (buffer length {len}, matrix size {size})")]
    StorageOverrun {
        offset: usize,
        len: usize,
        size: usize,
    },

    /// Operand shapes (or an element count) do not match what the operation needs.
    #[error("shape mismatch in {op}: {detail}")]
    ShapeMismatch { op: &'static str, detail: String },

    /// A layout description could not be parsed or serialised.
    #[error("layout configuration error: {0}")]
    Config(String),
}

impl MatrixError {
    /// Builds a [`MatrixError::ShapeMismatch`] for two differently shaped operands.
    pub(crate) fn shapes(op: &'static str, lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        tracing::debug!(op, ?lhs, ?rhs, "rejecting operands of different shapes");
        MatrixError::ShapeMismatch {
            op,
            detail: format!("{}x{} vs {}x{}", lhs.0, lhs.1, rhs.0, rhs.1),
        }
    }

    /// Builds a [`MatrixError::ShapeMismatch`] for an element list of the wrong length.
    pub(crate) fn element_count(rows: usize, cols: usize, received: usize) -> Self {
        let expected = rows.saturating_mul(cols);
        let which = if received > expected { "many" } else { "few" };
        tracing::debug!(rows, cols, received, "rejecting element list");
        MatrixError::ShapeMismatch {
            op: "from_elements",
            detail: format!(
                "too {which} elements for {rows}x{cols} matrix: expected {expected}, got {received}"
            ),
        }
    }

    /// Builds a [`MatrixError::ShapeMismatch`] for a shape whose element
    /// count does not fit in `usize`.
    pub(crate) fn size_overflow(op: &'static str, rows: usize, cols: usize) -> Self {
        tracing::debug!(op, rows, cols, "rejecting shape with overflowing size");
        MatrixError::ShapeMismatch {
            op,
            detail: format!("element count of {rows}x{cols} matrix overflows usize"),
        }
    }
}
