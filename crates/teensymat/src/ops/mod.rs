// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix operations.
//!
//! Arithmetic operators and comparisons are thin wrappers over the four
//! elementwise apply primitives ([`Matrix::map_with_scalar`] and friends);
//! the structural row/column mutators use the same closure-driven helpers
//! restricted to a single row or column. Results of non-destructive
//! operations are always packed row-major, whatever the operands' strides.
//!
//! [`Matrix::map_with_scalar`]: crate::Matrix::map_with_scalar
//!
//! # Partial Mutation
//! In-place operations check indices element by element, resolving every
//! offset an element needs before writing it. A bad row or column index
//! therefore fails on the first element with nothing changed. Only a
//! malformed strided layout can fail part-way through; the elements already
//! visited then stay modified and the error is returned.

mod apply;
mod arith;
mod compare;
mod reduce;
mod structural;
