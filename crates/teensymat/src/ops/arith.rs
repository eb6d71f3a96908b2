// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Elementwise arithmetic operators.
//!
//! Binary operators work on references and return
//! `Result<Matrix<T>, MatrixError>`, since a matrix-matrix operation fails on
//! a shape mismatch:
//!
//! ```
//! use teensymat::Matrix;
//! let a = Matrix::from_elements(1, 2, [1, 2]).unwrap();
//! let b = Matrix::from_elements(1, 2, [10, 20]).unwrap();
//! let c = (&a + &b).unwrap();
//! assert_eq!(c.as_slice(), &[11, 22]);
//! let d = (&c * 2).unwrap();
//! assert_eq!(d.as_slice(), &[22, 44]);
//! ```
//!
//! Compound assignment (`+=` and friends) cannot report errors, so it panics
//! instead; the `*_assign_matrix` / `*_assign_scalar` methods are the
//! fallible equivalents.
//!
//! Division by zero and overflow behave exactly as `T`'s own operators do.

use crate::{Matrix, MatrixError, Scalar};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

macro_rules! impl_elementwise_op {
    (
        $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident,
        $assign_matrix:ident, $assign_scalar:ident, $sym:tt
    ) => {
        impl<T: Scalar> $Op<&Matrix<T>> for &Matrix<T> {
            type Output = Result<Matrix<T>, MatrixError>;

            fn $op(self, rhs: &Matrix<T>) -> Self::Output {
                self.map_with_matrix(rhs, |a, b| a $sym b)
            }
        }

        impl<T: Scalar> $Op<T> for &Matrix<T> {
            type Output = Result<Matrix<T>, MatrixError>;

            fn $op(self, rhs: T) -> Self::Output {
                self.map_with_scalar(rhs, |a, b| a $sym b)
            }
        }

        impl<T: Scalar> Matrix<T> {
            #[doc = concat!("Fallible `self ", stringify!($sym), "= rhs` for a matrix operand.")]
            pub fn $assign_matrix(&mut self, rhs: &Matrix<T>) -> Result<(), MatrixError> {
                self.map_with_matrix_in_place(rhs, |a, b| a $sym b)
            }

            #[doc = concat!("Fallible `self ", stringify!($sym), "= rhs` for a scalar operand.")]
            pub fn $assign_scalar(&mut self, rhs: T) -> Result<(), MatrixError> {
                self.map_with_scalar_in_place(rhs, |a, b| a $sym b)
            }
        }

        /// # Panics
        /// Panics if the shapes differ or an element is unreachable.
        impl<T: Scalar> $OpAssign<&Matrix<T>> for Matrix<T> {
            fn $op_assign(&mut self, rhs: &Matrix<T>) {
                if let Err(e) = self.$assign_matrix(rhs) {
                    panic!("{e}");
                }
            }
        }

        /// # Panics
        /// Panics if an element is unreachable.
        impl<T: Scalar> $OpAssign<T> for Matrix<T> {
            fn $op_assign(&mut self, rhs: T) {
                if let Err(e) = self.$assign_scalar(rhs) {
                    panic!("{e}");
                }
            }
        }
    };
}

impl_elementwise_op!(Add, add, AddAssign, add_assign, add_assign_matrix, add_assign_scalar, +);
impl_elementwise_op!(Sub, sub, SubAssign, sub_assign, sub_assign_matrix, sub_assign_scalar, -);
impl_elementwise_op!(Mul, mul, MulAssign, mul_assign, mul_assign_matrix, mul_assign_scalar, *);
impl_elementwise_op!(Div, div, DivAssign, div_assign, div_assign_matrix, div_assign_scalar, /);

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> Matrix<i32> {
        Matrix::from_elements(2, 3, [1, 2, 3, 4, 5, 6]).unwrap()
    }

    fn b() -> Matrix<i32> {
        Matrix::from_elements(2, 3, [6, 5, 4, 3, 2, 1]).unwrap()
    }

    #[test]
    fn test_add_matrices() {
        let c = (&a() + &b()).unwrap();
        assert_eq!(c.as_slice(), &[7; 6]);
    }

    #[test]
    fn test_sub_mul_div_matrices() {
        assert_eq!((&a() - &b()).unwrap().as_slice(), &[-5, -3, -1, 1, 3, 5]);
        assert_eq!((&a() * &b()).unwrap().as_slice(), &[6, 10, 12, 12, 10, 6]);
        assert_eq!((&b() / &a()).unwrap().as_slice(), &[6, 2, 1, 0, 0, 0]);
    }

    #[test]
    fn test_scalar_operands() {
        assert_eq!((&a() + 1).unwrap().as_slice(), &[2, 3, 4, 5, 6, 7]);
        assert_eq!((&a() - 1).unwrap().as_slice(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!((&a() * 3).unwrap().as_slice(), &[3, 6, 9, 12, 15, 18]);
        assert_eq!((&a() / 2).unwrap().as_slice(), &[0, 1, 1, 2, 2, 3]);
    }

    #[test]
    fn test_shape_mismatch() {
        let wide: Matrix<i32> = Matrix::zeros(2, 3);
        let tall: Matrix<i32> = Matrix::zeros(3, 2);
        assert!(matches!(
            &wide + &tall,
            Err(MatrixError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_float_division_by_zero_follows_ieee() {
        let m: Matrix<f64> = Matrix::from_elements(1, 3, [1.0, -1.0, 0.0]).unwrap();
        let q = (&m / 0.0).unwrap();
        assert_eq!(q[(0, 0)], f64::INFINITY);
        assert_eq!(q[(0, 1)], f64::NEG_INFINITY);
        assert!(q[(0, 2)].is_nan());
    }

    #[test]
    fn test_compound_assignment() {
        let mut m = a();
        m += &b();
        assert_eq!(m.as_slice(), &[7; 6]);
        m -= 7;
        assert_eq!(m.as_slice(), &[0; 6]);
        m += 3;
        m *= &a();
        assert_eq!(m.as_slice(), &[3, 6, 9, 12, 15, 18]);
        m /= 3;
        assert_eq!(m, a());
    }

    #[test]
    fn test_fallible_assign() {
        let mut m = a();
        let other: Matrix<i32> = Matrix::zeros(1, 1);
        assert!(m.add_assign_matrix(&other).is_err());
        assert_eq!(m, a());
        m.mul_assign_scalar(2).unwrap();
        m.div_assign_matrix(&a()).unwrap();
        assert_eq!(m.as_slice(), &[2; 6]);
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn test_compound_assignment_panics_on_mismatch() {
        let mut m = a();
        m -= &Matrix::<i32>::zeros(3, 2);
    }
}
