// Copyright 2025 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple 2D vector.

use core::f64::consts::PI;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::Point;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A 2D vector.
///
/// This is intended primarily for a vector in the mathematical sense,
/// but it can be interpreted as a translation, and converted to and
/// from a [`Point`] (vector relative to the origin).
///
/// Several of the angle helpers treat the vector as a complex number
/// `x + iy`, which is how the spline equations are usually written.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// The x-coordinate.
    pub x: f64,
    /// The y-coordinate.
    pub y: f64,
}

impl Vec2 {
    /// The vector (0, 0).
    pub const ZERO: Vec2 = Vec2::new(0., 0.);

    /// Create a new vector.
    #[inline(always)]
    pub const fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }

    /// Convert this vector into a [`Point`].
    #[inline(always)]
    pub const fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Cross product of two vectors.
    ///
    /// This is signed so that `(1, 0) × (0, 1) = 1`.
    #[inline]
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Magnitude of vector.
    #[inline]
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle of vector.
    ///
    /// If the vector is interpreted as a complex number, this is the argument.
    /// The angle is expressed in radians.
    #[inline]
    pub fn atan2(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Heading of the vector, with the x axis pinned to exact values.
    ///
    /// Vectors on the non-negative x axis (including the zero vector) give
    /// exactly `0`, and vectors on the negative x axis give exactly `π`
    /// regardless of the sign of a zero `y`. Everything else is [`atan2`].
    ///
    /// [`atan2`]: Vec2::atan2
    #[inline]
    pub fn nice_angle(self) -> f64 {
        if self.y == 0.0 {
            if self.x >= 0.0 {
                0.0
            } else {
                PI
            }
        } else {
            self.atan2()
        }
    }

    /// Signed angle turned when going from `base` to `self`.
    ///
    /// This is the [`nice_angle`] of the complex quotient `self / base`,
    /// computed as `self · conj(base)` so that a zero `base` yields `0`.
    ///
    /// [`nice_angle`]: Vec2::nice_angle
    #[inline]
    pub fn angle_from(self, base: Vec2) -> f64 {
        Vec2::new(base.dot(self), base.cross(self)).nice_angle()
    }

    /// A unit vector of the given angle.
    ///
    /// With `th` at zero, the result is the positive X unit vector, and
    /// at π/2, it is the positive Y unit vector. The angle is expressed
    /// in radians.
    #[inline]
    pub fn from_angle(th: f64) -> Vec2 {
        let (th_sin, th_cos) = th.sin_cos();
        Vec2 {
            x: th_cos,
            y: th_sin,
        }
    }

    /// Rotate the vector by `th` radians.
    ///
    /// Equivalent to multiplying by the unit complex number `e^{i th}`.
    #[inline]
    pub fn rotate(self, th: f64) -> Vec2 {
        let (th_sin, th_cos) = th.sin_cos();
        Vec2 {
            x: self.x * th_cos - self.y * th_sin,
            y: self.x * th_sin + self.y * th_cos,
        }
    }
}

impl From<(f64, f64)> for Vec2 {
    #[inline(always)]
    fn from(v: (f64, f64)) -> Vec2 {
        Vec2 { x: v.0, y: v.1 }
    }
}

impl From<Vec2> for (f64, f64) {
    #[inline(always)]
    fn from(v: Vec2) -> (f64, f64) {
        (v.x, v.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, other: f64) -> Vec2 {
        Vec2 {
            x: self.x * other,
            y: self.y * other,
        }
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    #[inline]
    fn mul(self, other: Vec2) -> Vec2 {
        other * self
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;

    /// Note: division by a scalar is implemented by multiplying by the reciprocal.
    ///
    /// This is more efficient but has different roundoff behavior than division.
    #[inline]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, other: f64) -> Vec2 {
        self * other.recip()
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    #[inline]
    fn neg(self) -> Vec2 {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "𝐯=(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ")")
    }
}

// Conversions to and from mint
#[cfg(feature = "mint")]
impl From<Vec2> for mint::Vector2<f64> {
    #[inline(always)]
    fn from(p: Vec2) -> mint::Vector2<f64> {
        mint::Vector2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Vector2<f64>> for Vec2 {
    #[inline(always)]
    fn from(p: mint::Vector2<f64>) -> Vec2 {
        Vec2 { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;

    fn assert_near(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "{a} != {b}");
    }

    #[test]
    fn display() {
        let v = Vec2::new(1.2332421, 532.10721213123);
        let s = format!("{v:.2}");
        assert_eq!(s.as_str(), "𝐯=(1.23, 532.11)");
    }

    #[test]
    fn nice_angle_pins_x_axis() {
        assert_eq!(Vec2::new(3.0, 0.0).nice_angle(), 0.0);
        assert_eq!(Vec2::ZERO.nice_angle(), 0.0);
        assert_eq!(Vec2::new(-3.0, 0.0).nice_angle(), PI);
        assert_eq!(Vec2::new(-3.0, -0.0).nice_angle(), PI);
        assert_near(Vec2::new(0.0, 2.0).nice_angle(), FRAC_PI_2);
        assert_near(Vec2::new(0.0, -2.0).nice_angle(), -FRAC_PI_2);
    }

    #[test]
    fn angle_from() {
        let east = Vec2::new(10.0, 0.0);
        let north = Vec2::new(0.0, 4.0);
        assert_near(north.angle_from(east), FRAC_PI_2);
        assert_near(east.angle_from(north), -FRAC_PI_2);
        assert_eq!((-east).angle_from(east), PI);
        // A zero base has no heading to turn from.
        assert_eq!(north.angle_from(Vec2::ZERO), 0.0);
    }

    #[test]
    fn rotate() {
        let v = Vec2::new(2.0, 0.0).rotate(FRAC_PI_2);
        assert_near(v.x, 0.0);
        assert_near(v.y, 2.0);
        let w = Vec2::new(1.0, 1.0).rotate(PI);
        assert_near(w.x, -1.0);
        assert_near(w.y, -1.0);
        let u = Vec2::from_angle(0.3);
        assert_near(u.hypot(), 1.0);
        assert_near(u.atan2(), 0.3);
    }
}
