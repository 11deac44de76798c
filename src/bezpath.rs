// Copyright 2025 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bézier paths built from solved knot lists.

use alloc::vec::Vec;

use crate::Point;

/// A Bézier path, made of lines and cubic segments.
///
/// A valid path has `MoveTo` at the beginning of each subpath.
#[derive(Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BezPath(Vec<PathEl>);

/// The element of a Bézier path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEl {
    /// Move directly to the point without drawing anything, starting a new
    /// subpath.
    MoveTo(Point),
    /// Draw a line from the current location to the point.
    LineTo(Point),
    /// Draw a cubic bezier using the current location and the two points as
    /// control points, ending at the third.
    CurveTo(Point, Point, Point),
    /// Close off the path.
    ClosePath,
}

impl BezPath {
    /// Create a new path.
    #[inline]
    pub fn new() -> BezPath {
        BezPath::default()
    }

    /// Push a generic path element onto the path.
    #[inline]
    pub fn push(&mut self, el: PathEl) {
        self.0.push(el);
    }

    /// Push a "move to" element onto the path.
    pub fn move_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::MoveTo(p.into()));
    }

    /// Push a "line to" element onto the path.
    pub fn line_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::LineTo(p.into()));
    }

    /// Push a "curve to" element onto the path.
    pub fn curve_to<P: Into<Point>>(&mut self, p1: P, p2: P, p3: P) {
        self.push(PathEl::CurveTo(p1.into(), p2.into(), p3.into()));
    }

    /// Push a "close path" element onto the path.
    pub fn close_path(&mut self) {
        self.push(PathEl::ClosePath);
    }

    /// Get the path elements.
    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        &self.0
    }

    /// Returns `true` if the path contains no segments.
    pub fn is_empty(&self) -> bool {
        self.0
            .iter()
            .all(|el| matches!(el, PathEl::MoveTo(..) | PathEl::ClosePath))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path() {
        let mut path = BezPath::new();
        assert!(path.is_empty());
        path.move_to((1.0, 1.0));
        assert!(path.is_empty());
        path.line_to((2.0, 1.0));
        assert!(!path.is_empty());
    }

    #[test]
    fn builders_push_in_order() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((3.0, 0.0));
        path.curve_to((4.0, 1.0), (4.0, 2.0), (3.0, 3.0));
        path.close_path();
        assert_eq!(
            path.elements(),
            [
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(3.0, 0.0)),
                PathEl::CurveTo(Point::new(4.0, 1.0), Point::new(4.0, 2.0), Point::new(3.0, 3.0)),
                PathEl::ClosePath,
            ]
        );
    }
}
