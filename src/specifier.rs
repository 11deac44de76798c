// Copyright 2025 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Constraints on the tangent at one side of a knot.

use core::fmt;

use crate::common::reduce_angle;
use crate::{LinearEquation, Point, Section, Vec2};

/// A constraint on one side of a knot.
///
/// Each knot carries one specifier for the curve coming in and one for the
/// curve going out. After normalization, every knot is either open on both
/// sides or constrained on both sides; the constrained knots are where a path
/// is cut into independently solvable sections.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Specifier {
    /// No constraint; the tangent is chosen by the solver.
    Open,
    /// Match curvature at a section end, scaled by the curl value.
    ///
    /// A curl of 1 is the natural end condition.
    Curl(f64),
    /// The tangent points along the given vector.
    Direction(Vec2),
    /// The Bézier control point on this side is given explicitly.
    Control(Point),
}

impl Specifier {
    /// The natural end condition, `Curl(1.0)`.
    #[inline]
    pub const fn natural_curl() -> Specifier {
        Specifier::Curl(1.0)
    }

    /// A direction given as an angle in radians.
    #[inline]
    pub fn direction_angle(th: f64) -> Specifier {
        Specifier::Direction(Vec2::from_angle(th))
    }

    /// Is the tangent on this side left to the solver?
    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, Specifier::Open)
    }

    /// Has the control point on this side already been chosen?
    #[inline]
    pub fn is_controlled(&self) -> bool {
        matches!(self, Specifier::Control(_))
    }

    /// The explicit control point, if there is one.
    #[inline]
    pub fn control_point(&self) -> Option<Point> {
        match *self {
            Specifier::Control(p) => Some(p),
            _ => None,
        }
    }

    /// The constraint this specifier implies on the outgoing side of a knot at
    /// `z`, when `self` sits on the incoming side and the outgoing side is open.
    pub fn out_partner(&self, z: Point) -> Specifier {
        match *self {
            Specifier::Open => Specifier::natural_curl(),
            Specifier::Curl(_) | Specifier::Direction(_) => *self,
            Specifier::Control(c) if c == z => Specifier::natural_curl(),
            Specifier::Control(c) => Specifier::Direction(z - c),
        }
    }

    /// The constraint this specifier implies on the incoming side of a knot at
    /// `z`, when `self` sits on the outgoing side and the incoming side is open.
    pub fn in_partner(&self, z: Point) -> Specifier {
        match *self {
            Specifier::Open => Specifier::natural_curl(),
            Specifier::Curl(_) | Specifier::Direction(_) => *self,
            Specifier::Control(c) if c == z => Specifier::natural_curl(),
            Specifier::Control(c) => Specifier::Direction(c - z),
        }
    }

    /// The equation this specifier contributes as the outgoing constraint of
    /// knot `j`, the first knot of `section`.
    ///
    /// `psi` holds the turning angles of the section.
    ///
    /// # Panics
    ///
    /// Only [`Curl`](Specifier::Curl) and [`Direction`](Specifier::Direction)
    /// can bound a section; any other specifier panics.
    pub fn equation_going_out(
        &self,
        j: usize,
        section: &Section<'_>,
        psi: &[f64],
    ) -> LinearEquation {
        let this = section.knot(j);
        let next = section.knot(j + 1);
        match *self {
            Specifier::Direction(v) => {
                // The curve leaves heading at the next knot, rotated by theta.
                let theta = reduce_angle(v.nice_angle() - (next.point - this.point).nice_angle());
                LinearEquation::fixed(theta)
            }
            Specifier::Curl(gamma) => {
                let alpha = this.alpha();
                let beta = next.beta();
                let chi = alpha * alpha * gamma / (beta * beta);
                let c = alpha * chi + 3.0 - beta;
                let d = (3.0 - alpha) * chi + beta;
                LinearEquation::new(0.0, c, d, -d * psi[j + 1])
            }
            Specifier::Open | Specifier::Control(_) => {
                panic!("section starts at knot {j} with unresolved specifier {self:?}")
            }
        }
    }

    /// The equation this specifier contributes as the incoming constraint of
    /// knot `j`, the last knot of `section`.
    ///
    /// # Panics
    ///
    /// Only [`Curl`](Specifier::Curl) and [`Direction`](Specifier::Direction)
    /// can bound a section; any other specifier panics.
    pub fn equation_coming_in(
        &self,
        j: usize,
        section: &Section<'_>,
        _psi: &[f64],
    ) -> LinearEquation {
        let prev = section.knot(j - 1);
        let this = section.knot(j);
        match *self {
            Specifier::Direction(v) => {
                let theta = reduce_angle(v.nice_angle() - (this.point - prev.point).nice_angle());
                LinearEquation::fixed(theta)
            }
            Specifier::Curl(gamma) => {
                let alpha = prev.alpha();
                let beta = this.beta();
                let chi = beta * beta * gamma / (alpha * alpha);
                let a = (3.0 - beta) * chi + alpha;
                let b = beta * chi + 3.0 - alpha;
                LinearEquation::new(a, b, 0.0, 0.0)
            }
            Specifier::Open | Specifier::Control(_) => {
                panic!("section ends at knot {j} with unresolved specifier {self:?}")
            }
        }
    }
}

impl Default for Specifier {
    #[inline]
    fn default() -> Specifier {
        Specifier::Open
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Specifier::Open => Ok(()),
            Specifier::Curl(c) => write!(f, "{{curl {c}}}"),
            Specifier::Direction(v) => write!(f, "{{dir {}}}", v.nice_angle().to_degrees()),
            Specifier::Control(p) => write!(f, "controls {p}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Knot, KnotList};

    #[test]
    fn queries() {
        assert!(Specifier::Open.is_open());
        assert!(!Specifier::natural_curl().is_open());
        assert!(Specifier::Control(Point::ZERO).is_controlled());
        assert!(!Specifier::Direction(Vec2::new(1.0, 0.0)).is_controlled());
        assert_eq!(
            Specifier::Control(Point::new(1.0, 2.0)).control_point(),
            Some(Point::new(1.0, 2.0))
        );
        assert_eq!(Specifier::Curl(2.0).control_point(), None);
    }

    #[test]
    fn control_partners() {
        let z = Point::new(10.0, 10.0);
        let c = Specifier::Control(Point::new(4.0, 7.0));
        assert_eq!(c.out_partner(z), Specifier::Direction(Vec2::new(6.0, 3.0)));
        assert_eq!(c.in_partner(z), Specifier::Direction(Vec2::new(-6.0, -3.0)));
        // A control point on the knot itself says nothing about direction.
        let here = Specifier::Control(z);
        assert_eq!(here.out_partner(z), Specifier::natural_curl());
        assert_eq!(here.in_partner(z), Specifier::natural_curl());
    }

    #[test]
    fn curl_and_direction_partner_themselves() {
        let z = Point::new(1.0, 1.0);
        let d = Specifier::Direction(Vec2::new(0.0, 1.0));
        assert_eq!(d.out_partner(z), d);
        assert_eq!(d.in_partner(z), d);
        assert_eq!(Specifier::Curl(2.5).out_partner(z), Specifier::Curl(2.5));
    }

    #[test]
    fn direction_equation() {
        let list = KnotList::from_points([(0.0, 0.0), (10.0, 0.0)], false).unwrap();
        let section = list.whole();
        let psi = [0.0, 0.0];
        let up = Specifier::Direction(Vec2::new(0.0, 3.0));
        let eq = up.equation_going_out(0, &section, &psi);
        assert_eq!(eq.pre, 0.0);
        assert_eq!(eq.pivot, 1.0);
        assert_eq!(eq.post, 0.0);
        assert!((eq.rhs - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn natural_curl_equations() {
        let list = KnotList::new(
            vec![Knot::new((0.0, 0.0)), Knot::new((10.0, 5.0))],
            false,
        )
        .unwrap();
        let section = list.whole();
        let psi = [0.0, 0.0];
        let out = Specifier::natural_curl().equation_going_out(0, &section, &psi);
        assert_eq!(out, LinearEquation::new(0.0, 3.0, 3.0, 0.0));
        let inc = Specifier::natural_curl().equation_coming_in(1, &section, &psi);
        assert_eq!(inc, LinearEquation::new(3.0, 3.0, 0.0, 0.0));
    }

    #[test]
    fn weighted_curl_equations() {
        // alpha = 1/2 leaving the first knot, beta = 2/3 arriving at the last.
        let list = KnotList::new(
            vec![
                Knot::new((0.0, 0.0)).with_tension_out(2.0),
                Knot::new((10.0, 5.0)).with_tension_in(1.5),
            ],
            false,
        )
        .unwrap();
        let section = list.whole();
        let psi = [0.0, 0.25];
        let near = |a: f64, b: f64| assert!((a - b).abs() < 1e-12, "{a} != {b}");

        let out = Specifier::Curl(2.0).equation_going_out(0, &section, &psi);
        assert_eq!(out.pre, 0.0);
        near(out.pivot, 139.0 / 48.0);
        near(out.post, 167.0 / 48.0);
        near(out.rhs, -167.0 / 192.0);

        let inc = Specifier::Curl(2.0).equation_coming_in(1, &section, &psi);
        near(inc.pre, 475.0 / 54.0);
        near(inc.pivot, 263.0 / 54.0);
        assert_eq!(inc.post, 0.0);
        assert_eq!(inc.rhs, 0.0);
    }

    #[test]
    #[should_panic(expected = "unresolved specifier")]
    fn open_cannot_bound_a_section() {
        let list = KnotList::from_points([(0.0, 0.0), (10.0, 0.0)], false).unwrap();
        Specifier::Open.equation_going_out(0, &list.whole(), &[0.0, 0.0]);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Specifier::Open), "");
        assert_eq!(format!("{}", Specifier::Curl(1.0)), "{curl 1}");
        assert_eq!(format!("{}", Specifier::Direction(Vec2::new(0.0, 2.0))), "{dir 90}");
        assert_eq!(
            format!("{}", Specifier::Control(Point::new(1.0, 2.5))),
            "controls (1, 2.5)"
        );
    }
}
