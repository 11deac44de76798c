// Copyright 2025 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Knots, knot lists and sections.

use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;

use crate::{Point, SolvedPath, Specifier, Tension, Vec2};

/// Per-section scratch storage; short sections stay on the stack.
pub(crate) type Scratch<T> = SmallVec<[T; 8]>;

/// A point on a path together with the constraints on either side of it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knot {
    /// Where the path passes.
    pub point: Point,
    /// Tension of the join arriving at this knot.
    pub tension_in: Tension,
    /// Tension of the join leaving this knot.
    pub tension_out: Tension,
    /// Constraint on the incoming tangent.
    pub in_spec: Specifier,
    /// Constraint on the outgoing tangent.
    pub out_spec: Specifier,
}

impl Knot {
    /// A knot at `point`, open on both sides, with default tensions.
    #[inline]
    pub fn new(point: impl Into<Point>) -> Knot {
        Knot {
            point: point.into(),
            tension_in: Tension::DEFAULT,
            tension_out: Tension::DEFAULT,
            in_spec: Specifier::Open,
            out_spec: Specifier::Open,
        }
    }

    /// Builder-style method to set the incoming specifier.
    #[inline]
    pub fn with_in(mut self, spec: Specifier) -> Knot {
        self.in_spec = spec;
        self
    }

    /// Builder-style method to set the outgoing specifier.
    #[inline]
    pub fn with_out(mut self, spec: Specifier) -> Knot {
        self.out_spec = spec;
        self
    }

    /// Builder-style method to fix the tangent direction on both sides.
    #[inline]
    pub fn with_dir(self, dir: impl Into<Vec2>) -> Knot {
        let spec = Specifier::Direction(dir.into());
        self.with_in(spec).with_out(spec)
    }

    /// Builder-style method to set an incoming curl.
    #[inline]
    pub fn with_curl_in(self, curl: f64) -> Knot {
        self.with_in(Specifier::Curl(curl))
    }

    /// Builder-style method to set an outgoing curl.
    #[inline]
    pub fn with_curl_out(self, curl: f64) -> Knot {
        self.with_out(Specifier::Curl(curl))
    }

    /// Builder-style method to set both tensions.
    #[inline]
    pub fn with_tension(self, tension: impl Into<Tension>) -> Knot {
        let tension = tension.into();
        self.with_tension_in(tension).with_tension_out(tension)
    }

    /// Builder-style method to set the incoming tension.
    #[inline]
    pub fn with_tension_in(mut self, tension: impl Into<Tension>) -> Knot {
        self.tension_in = tension.into();
        self
    }

    /// Builder-style method to set the outgoing tension.
    #[inline]
    pub fn with_tension_out(mut self, tension: impl Into<Tension>) -> Knot {
        self.tension_out = tension.into();
        self
    }

    /// Curvature weight of the join leaving this knot.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.tension_out.value.recip()
    }

    /// Curvature weight of the join arriving at this knot.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.tension_in.value.recip()
    }
}

impl fmt::Display for Knot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.tension_in.is_default() {
            write!(f, "{} ", self.tension_in)?;
        }
        if !self.in_spec.is_open() {
            write!(f, "{} ", self.in_spec)?;
        }
        write!(f, "{}", self.point)?;
        if !self.out_spec.is_open() {
            write!(f, " {}", self.out_spec)?;
        }
        if !self.tension_out.is_default() {
            write!(f, " {}", self.tension_out)?;
        }
        Ok(())
    }
}

/// An error which can be returned when building a [`KnotList`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum KnotListError {
    /// A knot list needs at least one knot.
    Empty,
}

impl fmt::Display for KnotListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnotListError::Empty => write!(f, "a knot list needs at least one knot"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KnotListError {}

/// An ordered sequence of knots, possibly closing back on itself.
#[derive(Clone, Debug, PartialEq)]
pub struct KnotList {
    knots: Vec<Knot>,
    cyclic: bool,
}

impl KnotList {
    /// Create a knot list.
    ///
    /// Returns [`KnotListError::Empty`] when `knots` is empty.
    pub fn new(knots: Vec<Knot>, cyclic: bool) -> Result<KnotList, KnotListError> {
        if knots.is_empty() {
            return Err(KnotListError::Empty);
        }
        Ok(KnotList { knots, cyclic })
    }

    /// Create a knot list of unconstrained knots.
    ///
    /// Returns [`KnotListError::Empty`] when there are no points.
    pub fn from_points<P: Into<Point>>(
        points: impl IntoIterator<Item = P>,
        cyclic: bool,
    ) -> Result<KnotList, KnotListError> {
        KnotList::new(points.into_iter().map(Knot::new).collect(), cyclic)
    }

    /// Number of knots.
    #[inline]
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    /// Always `false`; a knot list holds at least one knot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    /// Number of joins: one per knot on a cyclic list, one fewer otherwise.
    #[inline]
    pub fn joins(&self) -> usize {
        if self.cyclic {
            self.knots.len()
        } else {
            self.knots.len() - 1
        }
    }

    /// Does the last knot connect back to the first?
    #[inline]
    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    /// The knots, in order.
    #[inline]
    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    /// The knot at index `i`, taken modulo the length on a cyclic list.
    ///
    /// # Panics
    ///
    /// Panics if the list is not cyclic and `i` is out of bounds.
    #[inline]
    pub fn get(&self, i: usize) -> &Knot {
        &self.knots[self.wrap(i)]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, i: usize) -> &mut Knot {
        let i = self.wrap(i);
        &mut self.knots[i]
    }

    #[inline]
    fn wrap(&self, i: usize) -> usize {
        if self.cyclic {
            i % self.knots.len()
        } else {
            i
        }
    }

    /// The whole list as one section.
    ///
    /// The section is cyclic exactly when the list is.
    #[inline]
    pub fn whole(&self) -> Section<'_> {
        Section {
            list: self,
            start: 0,
            len: self.knots.len(),
            cyclic: self.cyclic,
        }
    }

    /// The knots `a..=b` as an open section.
    ///
    /// On a cyclic list `b` may run past the end; indices wrap around.
    ///
    /// # Panics
    ///
    /// Panics if `b < a`, or if the list is not cyclic and `b` is out of
    /// bounds.
    pub fn section(&self, a: usize, b: usize) -> Section<'_> {
        assert!(a <= b, "section {a}..={b} runs backwards");
        assert!(
            self.cyclic || b < self.knots.len(),
            "section {a}..={b} runs past the end of an open list of {} knots",
            self.knots.len()
        );
        Section {
            list: self,
            start: a,
            len: b - a + 1,
            cyclic: false,
        }
    }

    /// Fill in the implicit specifiers so the list can be cut into sections.
    ///
    /// See [`normalize`](crate::normalize::normalize).
    #[inline]
    pub fn normalize(&mut self) {
        crate::normalize::normalize(self);
    }

    /// Solve for the Bézier control points of every join.
    ///
    /// See [`solve`](crate::solve).
    #[inline]
    pub fn solve(self) -> SolvedPath {
        crate::solve(self)
    }
}

impl fmt::Display for KnotList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, knot) in self.knots.iter().enumerate() {
            if i > 0 {
                write!(f, "..")?;
            }
            write!(f, "{knot}")?;
        }
        if self.cyclic {
            write!(f, "..cycle")?;
        }
        Ok(())
    }
}

/// Where a knot sits within a section.
///
/// Properties of a section are computed knot by knot, and the formula used
/// depends on whether the knot has neighbors on each side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Role {
    /// The only knot of a section with no joins.
    Solo,
    /// First knot of an open section.
    Start,
    /// A knot with neighbors on both sides; every knot of a cyclic section.
    Mid,
    /// Last knot of an open section.
    End,
}

/// A contiguous run of knots borrowed from a [`KnotList`].
///
/// A section solved on its own is open even when cut from a cyclic list; only
/// [`KnotList::whole`] on a cyclic list produces a cyclic section.
#[derive(Clone, Copy, Debug)]
pub struct Section<'a> {
    list: &'a KnotList,
    start: usize,
    len: usize,
    cyclic: bool,
}

impl<'a> Section<'a> {
    /// Number of knots in the section.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; a section holds at least one knot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of joins in the section.
    #[inline]
    pub fn joins(&self) -> usize {
        if self.cyclic {
            self.len
        } else {
            self.len - 1
        }
    }

    /// Is this section a closed loop?
    #[inline]
    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    /// Index of the first knot in the parent list.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The `j`th knot of the section.
    #[inline]
    pub fn knot(&self, j: usize) -> &'a Knot {
        let j = if self.cyclic { j % self.len } else { j };
        self.list.get(self.start + j)
    }

    /// The first knot of the section.
    #[inline]
    pub fn front(&self) -> &'a Knot {
        self.knot(0)
    }

    /// The last knot of the section.
    #[inline]
    pub fn back(&self) -> &'a Knot {
        self.knot(self.len - 1)
    }

    #[inline]
    pub(crate) fn prev(&self, j: usize) -> usize {
        if self.cyclic {
            (j + self.len - 1) % self.len
        } else {
            j - 1
        }
    }

    #[inline]
    pub(crate) fn next(&self, j: usize) -> usize {
        if self.cyclic {
            (j + 1) % self.len
        } else {
            j + 1
        }
    }

    pub(crate) fn role(&self, j: usize) -> Role {
        if self.cyclic {
            Role::Mid
        } else if self.len == 1 {
            Role::Solo
        } else if j == 0 {
            Role::Start
        } else if j + 1 == self.len {
            Role::End
        } else {
            Role::Mid
        }
    }

    /// Compute one value per knot, in order.
    pub(crate) fn compute<T>(&self, mut f: impl FnMut(usize, Role) -> T) -> Scratch<T> {
        (0..self.len).map(|j| f(j, self.role(j))).collect()
    }

    /// Visit every knot, in order.
    pub(crate) fn exec(&self, mut f: impl FnMut(usize, Role)) {
        for j in 0..self.len {
            f(j, self.role(j));
        }
    }
}

impl fmt::Display for Section<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for j in 0..self.len {
            if j > 0 {
                write!(f, "..")?;
            }
            write!(f, "{}", self.knot(j))?;
        }
        if self.cyclic {
            write!(f, "..cycle")?;
        }
        Ok(())
    }
}
