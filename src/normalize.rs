// Copyright 2025 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filling in the specifiers a knot list leaves implicit.
//!
//! After [`normalize`], every knot is either open on both sides or
//! constrained on both sides, and the two ends of an open list are
//! constrained. The constrained knots are the breakpoints where the list is
//! cut into sections.

use log::trace;

use crate::{KnotList, Specifier};

/// Give the free ends of an open list the natural curl.
pub fn close_open_ends(list: &mut KnotList) {
    if list.is_cyclic() {
        return;
    }
    let last = list.len() - 1;
    let front = list.get_mut(0);
    if front.in_spec.is_open() {
        front.in_spec = Specifier::natural_curl();
    }
    let back = list.get_mut(last);
    if back.out_spec.is_open() {
        back.out_spec = Specifier::natural_curl();
    }
}

/// Turn each join between two identical points into a zero-length segment
/// with both controls on the point.
pub fn resolve_duplicate_points(list: &mut KnotList) {
    for j in 0..list.joins() {
        let here = *list.get(j);
        if here.out_spec.is_controlled() || here.point != list.get(j + 1).point {
            continue;
        }
        let control = Specifier::Control(here.point);
        list.get_mut(j).out_spec = control;
        list.get_mut(j + 1).in_spec = control;
    }
}

/// Where one side of a knot is constrained and the other is open, constrain
/// the open side to match.
pub fn partner_up(list: &mut KnotList) {
    for j in 0..list.len() {
        let knot = list.get_mut(j);
        let z = knot.point;
        if knot.in_spec.is_open() && !knot.out_spec.is_open() {
            knot.in_spec = knot.out_spec.in_partner(z);
        } else if knot.out_spec.is_open() && !knot.in_spec.is_open() {
            knot.out_spec = knot.in_spec.out_partner(z);
        }
    }
}

/// Run all three passes, in order.
pub fn normalize(list: &mut KnotList) {
    close_open_ends(list);
    resolve_duplicate_points(list);
    partner_up(list);
    trace!("normalized: {list}");
}
