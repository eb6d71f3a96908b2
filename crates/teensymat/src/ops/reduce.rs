// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Boolean reductions.

use crate::{Matrix, MatrixError, Truthy};

impl<T: Truthy> Matrix<T> {
    /// Returns `true` if at least one element is truthy.
    ///
    /// Stops at the first truthy element. An empty matrix yields `false`.
    ///
    /// # Errors
    /// Returns [`MatrixError::StorageOverrun`] if an element visited before
    /// the first truthy one is unreachable.
    pub fn any(&self) -> Result<bool, MatrixError> {
        for offset in self.offsets() {
            if self.data[offset?].is_truthy() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Returns `true` if every element is truthy. An empty matrix yields `true`.
    ///
    /// Visits every element, so an unreachable one is always reported.
    ///
    /// # Errors
    /// Returns [`MatrixError::StorageOverrun`] if any element is unreachable.
    pub fn all(&self) -> Result<bool, MatrixError> {
        let mut all_truthy = true;
        for offset in self.offsets() {
            all_truthy &= self.data[offset?].is_truthy();
        }
        Ok(all_truthy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_all_bool() {
        let m = Matrix::from_elements(2, 2, [true, false, true, false]).unwrap();
        assert!(m.any().unwrap());
        assert!(!m.all().unwrap());

        let yes = Matrix::filled(2, 2, true);
        assert!(yes.all().unwrap());
        let no = Matrix::filled(2, 2, false);
        assert!(!no.any().unwrap());
    }

    #[test]
    fn test_any_all_numeric() {
        let m = Matrix::from_elements(1, 3, [0, 0, 5]).unwrap();
        assert!(m.any().unwrap());
        assert!(!m.all().unwrap());
        let z: Matrix<f32> = Matrix::zeros(2, 2);
        assert!(!z.any().unwrap());
    }

    #[test]
    fn test_empty_matrix() {
        let m: Matrix<bool> = Matrix::new();
        assert!(!m.any().unwrap());
        assert!(m.all().unwrap());
    }

    #[test]
    fn test_all_reports_overrun() {
        let m = Matrix::from_vec(2, 2, vec![false, true, true]);
        assert!(matches!(
            m.all(),
            Err(MatrixError::StorageOverrun { .. })
        ));
        assert!(m.any().unwrap());
    }

    #[test]
    fn test_comparison_then_reduce() {
        let a = Matrix::from_elements(2, 2, [1, 2, 3, 4]).unwrap();
        assert!(a.gt_scalar(0).unwrap().all().unwrap());
        assert!(!a.gt_scalar(4).unwrap().any().unwrap());
    }
}
