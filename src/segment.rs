// Copyright 2025 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Finding the breakpoints that cut a normalized list into sections.

use crate::KnotList;

/// The first knot whose outgoing side is constrained.
///
/// Returns `None` when every knot is open, which on a normalized list only
/// happens for a cyclic list that is then solved as a single cyclic section.
pub fn first_breakpoint(list: &KnotList) -> Option<usize> {
    list.knots().iter().position(|k| !k.out_spec.is_open())
}

/// The first knot after `a` whose incoming side is constrained.
///
/// On a cyclic list the result may exceed the length, and is at most
/// `a + list.len()`.
///
/// # Panics
///
/// Panics if there is no such knot, which cannot happen on a normalized list.
pub fn next_breakpoint(list: &KnotList, a: usize) -> usize {
    let limit = if list.is_cyclic() {
        a + list.len()
    } else {
        list.len() - 1
    };
    let mut j = a + 1;
    while j <= limit && list.get(j).in_spec.is_open() {
        j += 1;
    }
    assert!(j <= limit, "no breakpoint after knot {a}");
    j
}
