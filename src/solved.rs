// Copyright 2025 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The result of solving a knot list.

use alloc::vec::Vec;
use core::fmt;

use crate::{BezPath, CubicBez, Point};

/// A knot of a solved path, with both of its control points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolvedKnot {
    /// Control point of the join arriving at this knot.
    pub pre: Point,
    /// The knot itself.
    pub point: Point,
    /// Control point of the join leaving this knot.
    pub post: Point,
    /// Whether the join leaving this knot is a straight line.
    pub straight: bool,
}

/// A path with every control point resolved.
///
/// Join `i` runs from knot `i` through `knots[i].post` and
/// `knots[i + 1].pre` to knot `i + 1`, wrapping around on a cyclic path.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolvedPath {
    knots: Vec<SolvedKnot>,
    cyclic: bool,
}

impl SolvedPath {
    /// The solved knots, in order.
    #[inline]
    pub fn knots(&self) -> &[SolvedKnot] {
        &self.knots
    }

    /// Number of knots.
    #[inline]
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    /// Always `false`; a solved path has at least one knot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    /// Does the path close back on its first knot?
    #[inline]
    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    /// The knot at index `i`, taken modulo the length on a cyclic path.
    ///
    /// # Panics
    ///
    /// Panics if the path is not cyclic and `i` is out of bounds.
    #[inline]
    pub fn get(&self, i: usize) -> &SolvedKnot {
        if self.cyclic {
            &self.knots[i % self.knots.len()]
        } else {
            &self.knots[i]
        }
    }

    /// Number of joins.
    #[inline]
    pub fn joins(&self) -> usize {
        if self.cyclic {
            self.knots.len()
        } else {
            self.knots.len() - 1
        }
    }

    /// Iterate over the joins as cubic Bézier segments.
    pub fn segments(&self) -> impl Iterator<Item = CubicBez> + '_ {
        (0..self.joins()).map(move |i| {
            let a = self.get(i);
            let b = self.get(i + 1);
            CubicBez::new(a.point, a.post, b.pre, b.point)
        })
    }

    /// Convert to a [`BezPath`].
    ///
    /// Straight joins become `LineTo` elements; a cyclic path ends with its
    /// closing join followed by `ClosePath`.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.knots[0].point);
        for i in 0..self.joins() {
            let a = self.get(i);
            let b = self.get(i + 1);
            if a.straight {
                path.line_to(b.point);
            } else {
                path.curve_to(a.post, b.pre, b.point);
            }
        }
        if self.cyclic {
            path.close_path();
        }
        path
    }
}

impl fmt::Display for SolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.knots[0].point)?;
        for i in 0..self.joins() {
            let a = self.get(i);
            let b = self.get(i + 1);
            write!(f, "..controls {} and {}..", a.post, b.pre)?;
            if self.cyclic && i + 1 == self.joins() {
                write!(f, "cycle")?;
            } else {
                write!(f, "{}", b.point)?;
            }
        }
        Ok(())
    }
}

/// A solved path under construction.
///
/// Sections write their knots and control points in place; indices wrap on a
/// cyclic path so a section may run across the seam.
#[derive(Clone, Debug)]
pub(crate) struct ProtoPath {
    knots: Vec<SolvedKnot>,
    cyclic: bool,
}

impl ProtoPath {
    pub(crate) fn new(n: usize, cyclic: bool) -> ProtoPath {
        ProtoPath {
            knots: alloc::vec![SolvedKnot::default(); n],
            cyclic,
        }
    }

    #[inline]
    fn slot(&mut self, i: usize) -> &mut SolvedKnot {
        let i = if self.cyclic { i % self.knots.len() } else { i };
        &mut self.knots[i]
    }

    pub(crate) fn set_pre(&mut self, i: usize, p: Point) {
        self.slot(i).pre = p;
    }

    pub(crate) fn set_point(&mut self, i: usize, p: Point) {
        self.slot(i).point = p;
    }

    pub(crate) fn set_post(&mut self, i: usize, p: Point) {
        self.slot(i).post = p;
    }

    pub(crate) fn set_straight(&mut self, i: usize, straight: bool) {
        self.slot(i).straight = straight;
    }

    /// On an open path, pin the outer control points to their knots.
    pub(crate) fn control_ends(&mut self) {
        if self.cyclic {
            return;
        }
        if let Some(first) = self.knots.first_mut() {
            first.pre = first.point;
        }
        if let Some(last) = self.knots.last_mut() {
            last.post = last.point;
        }
    }

    pub(crate) fn fix(self) -> SolvedPath {
        SolvedPath {
            knots: self.knots,
            cyclic: self.cyclic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathEl;

    fn knot(point: (f64, f64), pre: (f64, f64), post: (f64, f64)) -> SolvedKnot {
        SolvedKnot {
            pre: pre.into(),
            point: point.into(),
            post: post.into(),
            straight: false,
        }
    }

    #[test]
    fn proto_path_wraps_on_a_cycle() {
        let mut proto = ProtoPath::new(3, true);
        proto.set_point(3, Point::new(1.0, 2.0));
        proto.set_pre(5, Point::new(3.0, 4.0));
        let path = proto.fix();
        assert_eq!(path.get(0).point, Point::new(1.0, 2.0));
        assert_eq!(path.knots()[2].pre, Point::new(3.0, 4.0));
    }

    #[test]
    fn control_ends_only_when_open() {
        let mut open = ProtoPath::new(2, false);
        open.set_point(0, Point::new(1.0, 1.0));
        open.set_pre(0, Point::new(9.0, 9.0));
        open.set_point(1, Point::new(2.0, 2.0));
        open.control_ends();
        let open = open.fix();
        assert_eq!(open.get(0).pre, Point::new(1.0, 1.0));
        assert_eq!(open.get(1).post, Point::new(2.0, 2.0));

        let mut closed = ProtoPath::new(2, true);
        closed.set_pre(0, Point::new(9.0, 9.0));
        closed.control_ends();
        assert_eq!(closed.fix().get(0).pre, Point::new(9.0, 9.0));
    }

    #[test]
    fn segments_and_bez_path() {
        let mut a = knot((0.0, 0.0), (0.0, 0.0), (1.0, 1.0));
        a.straight = true;
        let b = knot((3.0, 0.0), (2.0, 0.0), (4.0, 1.0));
        let c = knot((3.0, 3.0), (4.0, 2.0), (2.0, 3.0));
        let path = SolvedPath {
            knots: alloc::vec![a, b, c],
            cyclic: true,
        };
        assert_eq!(path.joins(), 3);
        let segs: Vec<CubicBez> = path.segments().collect();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[2].p3, Point::new(0.0, 0.0));
        assert_eq!(segs[2].p2, Point::new(0.0, 0.0));

        let bez = path.to_bez_path();
        assert_eq!(
            bez.elements(),
            [
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(3.0, 0.0)),
                PathEl::CurveTo(Point::new(4.0, 1.0), Point::new(4.0, 2.0), Point::new(3.0, 3.0)),
                PathEl::CurveTo(Point::new(2.0, 3.0), Point::new(0.0, 0.0), Point::new(0.0, 0.0)),
                PathEl::ClosePath,
            ]
        );
    }

    #[test]
    fn display() {
        let path = SolvedPath {
            knots: alloc::vec![
                knot((0.0, 0.0), (0.0, 0.0), (1.0, 0.0)),
                knot((3.0, 0.0), (2.0, 0.0), (3.0, 0.0)),
            ],
            cyclic: false,
        };
        assert_eq!(path.to_string(), "(0, 0)..controls (1, 0) and (2, 0)..(3, 0)");
    }
}
