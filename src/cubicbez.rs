// Copyright 2025 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use crate::{ParamCurve, Point, Vec2};

/// A single cubic Bézier segment.
///
/// Each join of a [`SolvedPath`](crate::SolvedPath) is one of these.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez {
    /// The start point.
    pub p0: Point,
    /// The first control point.
    pub p1: Point,
    /// The second control point.
    pub p2: Point,
    /// The end point.
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// The tangent direction at the start, from the first knot to its
    /// control point.
    ///
    /// This is zero when the control point sits on the knot.
    #[inline]
    pub fn start_tangent(&self) -> Vec2 {
        self.p1 - self.p0
    }

    /// The tangent direction at the end, from the incoming control point to
    /// the last knot.
    #[inline]
    pub fn end_tangent(&self) -> Vec2 {
        self.p3 - self.p2
    }

    /// Is this curve finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite() && self.p3.is_finite()
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let v = self.p0.to_vec2() * (mt * mt * mt)
            + (self.p1.to_vec2() * (mt * mt * 3.0)
                + (self.p2.to_vec2() * (mt * 3.0) + self.p3.to_vec2() * t) * t)
                * t;
        v.to_point()
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p3
    }
}

#[cfg(test)]
mod tests {
    use crate::{CubicBez, ParamCurve, Point};

    #[test]
    fn cubicbez_ends() {
        let c = CubicBez::new((0.0, 0.0), (1.0, 2.0), (3.0, 2.0), (4.0, 0.0));
        assert_eq!(c.start(), Point::new(0.0, 0.0));
        assert_eq!(c.end(), Point::new(4.0, 0.0));
        assert_eq!(c.eval(0.5), Point::new(2.0, 1.5));
        assert_eq!(c.start_tangent(), (1.0, 2.0).into());
        assert_eq!(c.end_tangent(), (1.0, -2.0).into());
        assert!(c.is_finite());
        assert!(!CubicBez::new((0.0, 0.0), (f64::NAN, 0.0), (1.0, 1.0), (2.0, 2.0)).is_finite());
    }

    #[test]
    fn cubicbez_eval_matches_bernstein_form() {
        let c = CubicBez::new((0.0, 0.0), (1.0, 3.0), (2.0, -1.0), (4.0, 1.0));
        for i in 0..=8 {
            let t = i as f64 * 0.125;
            let mt = 1.0 - t;
            let x = 3.0 * mt * mt * t + 3.0 * mt * t * t * 2.0 + t * t * t * 4.0;
            let y = 3.0 * mt * mt * t * 3.0 - 3.0 * mt * t * t + t * t * t;
            let p = c.eval(t);
            assert!((p.x - x).abs() < 1e-12 && (p.y - y).abs() < 1e-12, "t = {t}");
        }
    }
}
