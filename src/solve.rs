// Copyright 2025 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Solving a whole knot list.

use log::{debug, trace};

use crate::controls::{encode_straight, Controls};
use crate::equation::{build_equations, is_straight_section, Geometry};
use crate::linsolve::Strategy;
use crate::segment::{first_breakpoint, next_breakpoint};
use crate::solved::ProtoPath;
use crate::{KnotList, Section, SolvedPath};

/// Solve a knot list for the Bézier control points of every join.
///
/// The list is normalized, cut into sections at its constrained knots, and
/// each section is solved on its own. Joins whose control points are given
/// explicitly are copied through.
///
/// # Panics
///
/// Panics if a join has an explicit outgoing control point but the knot it
/// leads to has no explicit incoming one.
///
/// # Examples
///
/// ```
/// use knotwork::{solve, KnotList, Point};
///
/// let list = KnotList::from_points([(0.0, 0.0), (100.0, 0.0)], false).unwrap();
/// let path = solve(list);
/// let first = path.get(0);
/// assert!(first.straight);
/// assert!((first.post.x - 100.0 / 3.0).abs() < 1e-9);
/// assert_eq!(path.get(1).point, Point::new(100.0, 0.0));
/// ```
pub fn solve(mut list: KnotList) -> SolvedPath {
    let n = list.len();
    let cyclic = list.is_cyclic();
    debug!(
        "solving {n} knots, {}",
        if cyclic { "cyclic" } else { "open" }
    );
    trace!("specified: {list}");
    list.normalize();

    let mut proto = ProtoPath::new(n, cyclic);
    match first_breakpoint(&list) {
        None => solve_section(&mut proto, 0, &list.whole()),
        Some(first) => {
            proto.set_point(first, list.get(first).point);
            let last = if cyclic { first + n } else { n - 1 };
            let mut a = first;
            while a != last {
                if list.get(a).out_spec.is_controlled() {
                    write_controls(&mut proto, &list, a);
                    a += 1;
                } else {
                    let b = next_breakpoint(&list, a);
                    solve_section(&mut proto, a, &list.section(a, b));
                    a = b;
                }
            }
        }
    }
    proto.control_ends();
    let path = proto.fix();
    trace!("solved: {path}");
    path
}

/// Copy the explicit control points of the join leaving knot `a`.
fn write_controls(proto: &mut ProtoPath, list: &KnotList, a: usize) {
    let here = list.get(a);
    let there = list.get(a + 1);
    let (Some(post), Some(pre)) = (here.out_spec.control_point(), there.in_spec.control_point())
    else {
        panic!("join {a} has an explicit control point on only one side");
    };
    proto.set_post(a, post);
    proto.set_pre(a + 1, pre);
    proto.set_point(a + 1, there.point);
}

/// Solve one section and write it into `proto` starting at `offset`.
fn solve_section(proto: &mut ProtoPath, offset: usize, section: &Section<'_>) {
    trace!("section at {offset}: {section}");
    if section.joins() == 0 {
        return;
    }
    let geometry = Geometry::new(section);
    let equations = build_equations(section, &geometry);
    if is_straight_section(&equations) {
        trace!("straight");
        encode_straight(section, proto, offset);
        return;
    }
    let strategy = Strategy::select(&equations, section.is_cyclic());
    let theta = strategy.run(&equations);
    trace!("{strategy:?}: {theta:?}");
    Controls::new(section, &geometry, &theta).encode(proto, offset);
}
