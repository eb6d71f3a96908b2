// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Property tests for construction, structural mutators and operators.

use proptest::prelude::*;
use teensymat::{Matrix, MatrixError};

/// A `rows x cols` integer matrix with small entries (no overflow on `+`).
fn int_matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<i64>> {
    proptest::collection::vec(-1_000i64..1_000, rows * cols)
        .prop_map(move |data| Matrix::from_elements(rows, cols, data).unwrap())
}

fn shape() -> impl Strategy<Value = (usize, usize)> {
    (0usize..8, 0usize..8)
}

/// A matrix of random non-empty shape.
fn shaped_matrix() -> impl Strategy<Value = Matrix<i64>> {
    (1usize..8, 1usize..8).prop_flat_map(|(r, c)| int_matrix(r, c))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn zeros_has_expected_size((rows, cols) in shape()) {
        let m: Matrix<i32> = Matrix::zeros(rows, cols);
        prop_assert_eq!(m.size(), rows * cols);
        prop_assert!(m.eq_scalar(0).unwrap().all().unwrap());
    }

    #[test]
    fn filled_holds_fill((rows, cols) in shape(), fill in any::<i16>()) {
        let m = Matrix::filled(rows, cols, fill);
        prop_assert!(m.eq_scalar(fill).unwrap().all().unwrap());
    }

    #[test]
    fn element_list_lands_row_major((rows, cols) in shape()) {
        let n = rows * cols;
        let m = Matrix::from_elements(rows, cols, 0..n).unwrap();
        for i in 0..n {
            prop_assert_eq!(*m.at(i / cols, i % cols).unwrap(), i);
        }
    }

    #[test]
    fn wrong_element_count_is_rejected((rows, cols) in shape(), delta in 1usize..4, more in any::<bool>()) {
        let n = rows * cols;
        prop_assume!(more || n >= delta);
        let len = if more { n + delta } else { n - delta };
        prop_assert!(
            matches!(
                Matrix::from_elements(rows, cols, 0..len),
                Err(MatrixError::ShapeMismatch { .. })
            ),
            "expected shape mismatch"
        );
    }

    #[test]
    fn swap_row_is_an_involution(m in shaped_matrix(), a in 0usize..8, b in 0usize..8) {
        let (r1, r2) = (a % m.rows(), b % m.rows());
        let mut swapped = m.clone();
        swapped.swap_row(r1, r2).unwrap();
        swapped.swap_row(r1, r2).unwrap();
        prop_assert_eq!(swapped, m);
    }

    #[test]
    fn add_then_sub_row_restores(m in shaped_matrix(), r in 0usize..8, v in -1_000i64..1_000) {
        let r = r % m.rows();
        let mut n = m.clone();
        n.add_row(r, v).unwrap();
        n.sub_row(r, v).unwrap();
        prop_assert_eq!(n, m);
    }

    #[test]
    fn add_then_sub_col_restores_floats(
        data in proptest::collection::vec(-1.0e3f64..1.0e3, 12),
        c in 0usize..4,
        v in -1.0e3f64..1.0e3,
    ) {
        let m = Matrix::from_elements(3, 4, data).unwrap();
        let mut n = m.clone();
        n.add_col(c, v).unwrap();
        n.sub_col(c, v).unwrap();
        let close = n.map_with_matrix(&m, |a, b| (a - b).abs() < 1e-9).unwrap();
        prop_assert!(close.all().unwrap());
    }

    #[test]
    fn double_transpose_is_identity(m in shaped_matrix()) {
        let back = m.transpose().transpose();
        prop_assert_eq!(back.shape(), m.shape());
        prop_assert_eq!(back, m);
    }

    #[test]
    fn addition_commutes(
        (a, b) in (1usize..8, 1usize..8)
            .prop_flat_map(|(r, c)| (int_matrix(r, c), int_matrix(r, c)))
    ) {
        prop_assert_eq!((&a + &b).unwrap(), (&b + &a).unwrap());
    }

    #[test]
    fn mismatched_shapes_are_rejected(a in shaped_matrix(), b in shaped_matrix()) {
        prop_assume!(a.shape() != b.shape());
        prop_assert!(matches!(&a + &b, Err(MatrixError::ShapeMismatch { .. })), "expected shape mismatch");
        prop_assert!(a.lt_matrix(&b).is_err());
    }

    #[test]
    fn out_of_bounds_access_is_rejected(m in shaped_matrix()) {
        let (rows, cols) = m.shape();
        prop_assert!(
            matches!(m.at(rows, 0), Err(MatrixError::IndexOutOfBounds { .. })),
            "row past the end"
        );
        prop_assert!(
            matches!(m.at(0, cols), Err(MatrixError::IndexOutOfBounds { .. })),
            "column past the end"
        );
    }
}

