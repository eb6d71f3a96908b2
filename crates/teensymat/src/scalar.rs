// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Element type bounds.

use num_traits::Num;
use std::fmt::Debug;

/// Numeric element types a [`crate::Matrix`] can do arithmetic on.
///
/// Implemented for every `Copy` type with the usual arithmetic and
/// comparison operators, which covers the primitive integers and floats.
pub trait Scalar: Num + Copy + PartialOrd + Debug {}

impl<T> Scalar for T where T: Num + Copy + PartialOrd + Debug {}

/// Element types with a truth value, used by [`crate::Matrix::any`] and
/// [`crate::Matrix::all`].
///
/// Numbers are truthy when non-zero. `NaN` is truthy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    *self != (0 as $t)
                }
            }
        )*
    };
}

impl_truthy_numeric!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
