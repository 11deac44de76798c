// Copyright 2025 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The linear system for the tangent angles of a section.
//!
//! Each knot of a section gets one equation in the unknown angles `θ`, where
//! `θ[j]` is the angle between the outgoing tangent at knot `j` and the chord
//! to knot `j + 1`. Interior knots ask for the curvature to be continuous
//! across the knot (linearized as in Hobby's paper); the two ends take their
//! equation from the specifier that bounds the section.

use alloc::vec::Vec;
use core::fmt;

use crate::knot::{Role, Scratch};
use crate::{Section, Vec2};

/// One row of a three-term system,
/// `pre·θ[j-1] + pivot·θ[j] + post·θ[j+1] = rhs`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearEquation {
    /// Coefficient of the previous unknown.
    pub pre: f64,
    /// Coefficient of this row's unknown.
    pub pivot: f64,
    /// Coefficient of the next unknown.
    pub post: f64,
    /// Right-hand side.
    pub rhs: f64,
}

impl LinearEquation {
    /// Create a new row.
    #[inline]
    pub const fn new(pre: f64, pivot: f64, post: f64, rhs: f64) -> LinearEquation {
        LinearEquation {
            pre,
            pivot,
            post,
            rhs,
        }
    }

    /// The row `θ[j] = theta`.
    #[inline]
    pub const fn fixed(theta: f64) -> LinearEquation {
        LinearEquation::new(0.0, 1.0, 0.0, theta)
    }
}

impl fmt::Display for LinearEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}·θ- + {}·θ + {}·θ+ = {}",
            self.pre, self.pivot, self.post, self.rhs
        )
    }
}

/// Chord vectors, chord lengths and turning angles of a section.
#[derive(Clone, Debug)]
pub(crate) struct Geometry {
    /// `dz[j]` runs from knot `j` to the next knot; zero past the end.
    pub(crate) dz: Scratch<Vec2>,
    /// Length of `dz[j]`.
    pub(crate) d: Scratch<f64>,
    /// Turn from `dz[j-1]` to `dz[j]`; zero at the ends of an open section.
    pub(crate) psi: Scratch<f64>,
}

impl Geometry {
    pub(crate) fn new(section: &Section<'_>) -> Geometry {
        let dz = section.compute(|j, role| match role {
            Role::Solo | Role::End => Vec2::ZERO,
            Role::Start | Role::Mid => section.knot(section.next(j)).point - section.knot(j).point,
        });
        let d = dz.iter().map(|v| v.hypot()).collect();
        let psi = section.compute(|j, role| match role {
            Role::Solo | Role::Start | Role::End => 0.0,
            Role::Mid => dz[j].angle_from(dz[section.prev(j)]),
        });
        Geometry { dz, d, psi }
    }
}

/// Build one equation per knot of the section.
///
/// # Panics
///
/// Panics on a single-knot section, which has nothing to solve, and when an
/// end of an open section is not bounded by a curl or a direction.
pub(crate) fn build_equations(
    section: &Section<'_>,
    geometry: &Geometry,
) -> Scratch<LinearEquation> {
    let Geometry { d, psi, .. } = geometry;
    section.compute(|j, role| match role {
        Role::Solo => panic!("a single knot has no equations to solve"),
        Role::Start => section.knot(j).out_spec.equation_going_out(j, section, psi),
        Role::End => section.knot(j).in_spec.equation_coming_in(j, section, psi),
        Role::Mid => {
            let prev = section.prev(j);
            let next = section.next(j);
            let last_alpha = section.knot(prev).alpha();
            let this_alpha = section.knot(j).alpha();
            let this_beta = section.knot(j).beta();
            let next_beta = section.knot(next).beta();

            // Linearized curvature arriving at the knot, in θ[j-1] and θ[j].
            let in_denom = this_beta * this_beta * d[prev];
            let a = last_alpha / in_denom;
            let b = (3.0 - last_alpha) / in_denom;

            // Linearized curvature leaving the knot, in θ[j] and θ[j+1].
            let out_denom = this_alpha * this_alpha * d[j];
            let c = (3.0 - next_beta) / out_denom;
            let dd = next_beta / out_denom;

            LinearEquation::new(a, b + c, dd, -b * psi[j] - dd * psi[next])
        }
    })
}

/// A two-knot section whose equations are both homogeneous is a straight
/// line, and needs no angles at all.
pub(crate) fn is_straight_section(equations: &[LinearEquation]) -> bool {
    matches!(equations, [first, last] if first.rhs == 0.0 && last.rhs == 0.0)
}

impl Section<'_> {
    /// The tangent-angle equations of this section, one per knot.
    ///
    /// The section must come from a normalized list, and hold at least two
    /// knots.
    ///
    /// # Panics
    ///
    /// Panics if the section has a single knot, or an open end that is not
    /// bounded by a curl or a direction.
    pub fn equations(&self) -> Vec<LinearEquation> {
        build_equations(self, &Geometry::new(self)).into_vec()
    }

    /// Is this a two-knot section that is solved as a straight line?
    ///
    /// # Panics
    ///
    /// As for [`equations`](Section::equations).
    pub fn is_straight(&self) -> bool {
        is_straight_section(&build_equations(self, &Geometry::new(self)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Knot, KnotList, Specifier};
    use core::f64::consts::{FRAC_PI_2, PI};

    fn assert_near(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "{a} != {b}");
    }

    #[test]
    fn geometry_of_an_open_section() {
        let l = KnotList::from_points([(0., 0.), (10., 0.), (10., 10.)], false).unwrap();
        let g = Geometry::new(&l.whole());
        assert_eq!(g.dz.as_slice(), [Vec2::new(10., 0.), Vec2::new(0., 10.), Vec2::ZERO]);
        assert_eq!(g.d.as_slice(), [10., 10., 0.]);
        assert_eq!(g.psi[0], 0.0);
        assert_near(g.psi[1], FRAC_PI_2);
        assert_eq!(g.psi[2], 0.0);
    }

    #[test]
    fn geometry_of_a_cyclic_section() {
        let l = KnotList::from_points([(0., 0.), (10., 0.), (10., 10.), (0., 10.)], true).unwrap();
        let g = Geometry::new(&l.whole());
        assert_eq!(g.dz[3], Vec2::new(0., -10.));
        for psi in g.psi {
            assert_near(psi, FRAC_PI_2);
        }
    }

    #[test]
    fn reversal_turns_by_pi() {
        let l = KnotList::from_points([(0., 0.), (10., 0.), (0., 0.)], false).unwrap();
        let g = Geometry::new(&l.whole());
        assert_eq!(g.psi[1], PI);
    }

    #[test]
    fn interior_row_with_default_tension() {
        let l = KnotList::new(
            vec![
                Knot::new((0., 0.)).with_curl_out(1.0),
                Knot::new((10., 0.)),
                Knot::new((20., 10.)).with_curl_in(1.0),
            ],
            false,
        )
        .unwrap();
        let eqs = l.whole().equations();
        assert_eq!(eqs.len(), 3);
        let mid = eqs[1];
        let d1 = 200f64.sqrt();
        assert_near(mid.pre, 1.0 / 10.0);
        assert_near(mid.pivot, 2.0 / 10.0 + 2.0 / d1);
        assert_near(mid.post, 1.0 / d1);
        assert_near(mid.rhs, -(2.0 / 10.0) * (PI / 4.0));
        // The first row looks ahead to the turn at knot 1.
        assert_eq!(eqs[0].pre, 0.0);
        assert_near(eqs[0].rhs, -3.0 * PI / 4.0);
        assert_eq!(eqs[2].post, 0.0);
    }

    #[test]
    fn straight_sections() {
        let l = KnotList::new(
            vec![
                Knot::new((0., 0.)).with_out(Specifier::natural_curl()),
                Knot::new((100., 0.)).with_in(Specifier::natural_curl()),
            ],
            false,
        )
        .unwrap();
        assert!(l.whole().is_straight());

        let bent = KnotList::new(
            vec![
                Knot::new((0., 0.)).with_out(Specifier::direction_angle(FRAC_PI_2)),
                Knot::new((100., 0.)).with_in(Specifier::natural_curl()),
            ],
            false,
        )
        .unwrap();
        assert!(!bent.whole().is_straight());
        assert!(!is_straight_section(&[LinearEquation::fixed(0.0); 3]));
    }
}
