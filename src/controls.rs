// Copyright 2025 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning solved tangent angles into Bézier control points.

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

use crate::equation::Geometry;
use crate::knot::Role;
use crate::solved::ProtoPath;
use crate::{Point, Section, Tension};

/// Upper bound on the relative length of a control arm.
pub const VELOCITY_BOUND: f64 = 4.0;

/// Relative length of the control arm of a join.
///
/// `theta` and `phi` are the angles between the chord and the tangents at the
/// start and end of the join. The result multiplies the chord length to give
/// the distance from a knot to its control point. It never exceeds
/// [`VELOCITY_BOUND`].
///
/// With an `at_least` tension the arm is further shortened so that the control
/// points stay within the triangle formed by the chord and the two tangents,
/// whenever the tangents are on the same side of the chord.
pub fn velocity(theta: f64, phi: f64, tension: Tension) -> f64 {
    const A: f64 = core::f64::consts::SQRT_2;
    const B: f64 = 1.0 / 16.0;
    // (√5 - 1) and (3 - √5).
    const C: f64 = 1.236_067_977_499_789_7;
    const D: f64 = 0.763_932_022_500_210_3;

    let (st, ct) = theta.sin_cos();
    let (sf, cf) = phi.sin_cos();
    let num = 2.0 + A * (st - B * sf) * (sf - B * st) * (ct - cf);
    let den = 3.0 * tension.value * (1.0 + 0.5 * C * ct + 0.5 * D * cf);
    let mut r = num / den;
    if r > VELOCITY_BOUND {
        r = VELOCITY_BOUND;
    }

    if tension.at_least {
        let sine = (theta + phi).sin();
        if (st >= 0.0 && sf >= 0.0 && sine > 0.0) || (st <= 0.0 && sf <= 0.0 && sine < 0.0) {
            r = r.min(sf / sine);
        }
    }
    r
}

/// Computes control points from the solved angles of one section.
pub(crate) struct Controls<'a, 'b> {
    section: &'b Section<'a>,
    geometry: &'b Geometry,
    theta: &'b [f64],
}

impl<'a, 'b> Controls<'a, 'b> {
    pub(crate) fn new(section: &'b Section<'a>, geometry: &'b Geometry, theta: &'b [f64]) -> Self {
        Controls {
            section,
            geometry,
            theta,
        }
    }

    /// The angle between the incoming chord and the incoming tangent at `j`.
    fn phi(&self, j: usize) -> f64 {
        -self.geometry.psi[j] - self.theta[j]
    }

    /// The control point leaving knot `j`.
    pub(crate) fn post(&self, j: usize, role: Role) -> Point {
        let knot = self.section.knot(j);
        match role {
            Role::Start | Role::Mid => {
                let next = self.section.next(j);
                let theta = self.theta[j];
                let v = velocity(theta, self.phi(next), knot.tension_out);
                knot.point + v * self.geometry.dz[j].rotate(theta)
            }
            Role::End | Role::Solo => knot.point,
        }
    }

    /// The control point arriving at knot `j`.
    pub(crate) fn pre(&self, j: usize, role: Role) -> Point {
        let knot = self.section.knot(j);
        match role {
            Role::Mid | Role::End => {
                let prev = self.section.prev(j);
                let phi = self.phi(j);
                let v = velocity(phi, self.theta[prev], knot.tension_in);
                knot.point - v * self.geometry.dz[prev].rotate(-phi)
            }
            Role::Start | Role::Solo => knot.point,
        }
    }

    /// Write the section into `path`, with knot `j` landing at `offset + j`.
    ///
    /// The first knot only gets its outgoing control and the last only its
    /// incoming one and its point; the remaining sides belong to the
    /// neighboring sections.
    pub(crate) fn encode(&self, path: &mut ProtoPath, offset: usize) {
        self.section.exec(|j, role| {
            let k = offset + j;
            match role {
                Role::Solo => {}
                Role::Start => path.set_post(k, self.post(j, role)),
                Role::Mid => {
                    path.set_pre(k, self.pre(j, role));
                    path.set_point(k, self.section.knot(j).point);
                    path.set_post(k, self.post(j, role));
                }
                Role::End => {
                    path.set_pre(k, self.pre(j, role));
                    path.set_point(k, self.section.knot(j).point);
                }
            }
        });
    }
}

/// Write a two-knot section as a straight line, with control points at the
/// thirds of the chord.
pub(crate) fn encode_straight(section: &Section<'_>, path: &mut ProtoPath, offset: usize) {
    let a = section.front().point;
    let b = section.back().point;
    let step = (b - a) / 3.0;
    path.set_straight(offset, true);
    path.set_post(offset, a + step);
    path.set_pre(offset + 1, b - step);
    path.set_point(offset + 1, b);
}
