// Copyright 2025 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

use core::f64::consts::PI;

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("knotwork requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn atan2(self, other: Self) -> Self => atan2;
    fn hypot(self, other: Self) -> Self => hypot;
    fn sin(self) -> Self => sin;
    fn sin_cos(self) -> (Self, Self) => sincos;
}

/// Fold an angle that is at most one turn out of range back into `[-π, π]`.
///
/// Headings produced by `atan2` differ by less than two turns, so a single
/// correction step is enough for every difference the solver forms.
///
/// # Examples
///
/// ```
/// use core::f64::consts::PI;
/// use knotwork::common::reduce_angle;
///
/// assert_eq!(reduce_angle(0.5), 0.5);
/// assert!((reduce_angle(1.5 * PI) + 0.5 * PI).abs() < 1e-12);
/// assert!((reduce_angle(-1.5 * PI) - 0.5 * PI).abs() < 1e-12);
/// ```
#[inline]
pub fn reduce_angle(angle: f64) -> f64 {
    if angle > PI {
        angle - 2.0 * PI
    } else if angle < -PI {
        angle + 2.0 * PI
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_angle_in_range_is_identity() {
        for a in [-PI, -1.0, 0.0, 1.0, PI] {
            assert_eq!(reduce_angle(a), a);
        }
    }

    #[test]
    fn reduce_angle_folds_one_turn() {
        let eps = 1e-12;
        assert!((reduce_angle(PI + 0.25) - (-PI + 0.25)).abs() < eps);
        assert!((reduce_angle(-PI - 0.25) - (PI - 0.25)).abs() < eps);
        assert!((reduce_angle(2.0 * PI - 0.1) + 0.1).abs() < eps);
    }
}
