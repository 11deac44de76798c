// Copyright 2025 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Solving the tangent-angle systems.
//!
//! The systems are tridiagonal for open sections and tridiagonal plus two
//! corner entries for cyclic ones, so both are solved in linear time by a
//! forward elimination pass and a back substitution pass.

use alloc::vec::Vec;

use log::trace;

use crate::equation::{build_equations, Geometry};
use crate::knot::Scratch;
use crate::{LinearEquation, Section};

/// How a system of tangent-angle equations is solved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Every right-hand side is zero, so every angle is zero.
    Homogeneous,
    /// Tridiagonal elimination for an open section.
    Open,
    /// Elimination with a wrap-around term for a cyclic section.
    Cyclic,
}

impl Strategy {
    /// Pick the strategy for `equations`.
    pub fn select(equations: &[LinearEquation], cyclic: bool) -> Strategy {
        if equations.iter().all(|e| e.rhs == 0.0) {
            Strategy::Homogeneous
        } else if cyclic {
            Strategy::Cyclic
        } else {
            Strategy::Open
        }
    }

    /// Solve `equations` for one angle per equation.
    ///
    /// # Panics
    ///
    /// The open strategy panics if the system is not tridiagonal with a zero
    /// `pre` in the first row and a zero `post` in the last. The open and
    /// cyclic strategies both panic if a pivot vanishes during elimination.
    pub fn solve(self, equations: &[LinearEquation]) -> Vec<f64> {
        self.run(equations).into_vec()
    }

    pub(crate) fn run(self, equations: &[LinearEquation]) -> Scratch<f64> {
        match self {
            Strategy::Homogeneous => equations.iter().map(|_| 0.0).collect(),
            Strategy::Open => solve_open(equations),
            Strategy::Cyclic => solve_cyclic(equations),
        }
    }
}

/// A row reduced to `θ[j] + post·θ[j+1] = rhs`.
#[derive(Clone, Copy, Debug)]
struct Reduced {
    post: f64,
    rhs: f64,
}

impl Reduced {
    fn scale(e: LinearEquation) -> Reduced {
        assert!(e.pre == 0.0, "row to scale still depends on the previous angle");
        assert!(e.pivot != 0.0, "zero pivot in tangent-angle system");
        Reduced {
            post: e.post / e.pivot,
            rhs: e.rhs / e.pivot,
        }
    }
}

fn solve_open(equations: &[LinearEquation]) -> Scratch<f64> {
    let Some((&first, rest)) = equations.split_first() else {
        return Scratch::new();
    };
    let mut reduced: Scratch<Reduced> = Scratch::with_capacity(equations.len());
    let mut last = Reduced::scale(first);
    reduced.push(last);
    for &e in rest {
        last = Reduced::scale(LinearEquation::new(
            0.0,
            e.pivot - e.pre * last.post,
            e.post,
            e.rhs - e.pre * last.rhs,
        ));
        reduced.push(last);
    }

    assert!(
        last.post == 0.0,
        "last row of an open system depends on an angle past the end"
    );
    let mut theta: Scratch<f64> = reduced.iter().map(|_| 0.0).collect();
    let mut next = 0.0;
    for (t, r) in theta.iter_mut().zip(&reduced).rev() {
        next = -r.post * next + r.rhs;
        *t = next;
    }
    trace!("open solve: {theta:?}");
    theta
}

/// A row reduced to `θ[j] + post·θ[j+1] = rhs + weight·θ[0]`.
#[derive(Clone, Copy, Debug)]
struct Weighted {
    post: f64,
    rhs: f64,
    weight: f64,
}

impl Weighted {
    fn eliminate(e: LinearEquation, last: Weighted) -> Weighted {
        let pivot = e.pivot - e.pre * last.post;
        assert!(pivot != 0.0, "zero pivot in tangent-angle system");
        Weighted {
            post: e.post / pivot,
            rhs: (e.rhs - e.pre * last.rhs) / pivot,
            weight: -e.pre * last.weight / pivot,
        }
    }
}

fn solve_cyclic(equations: &[LinearEquation]) -> Scratch<f64> {
    let n = equations.len();
    if n == 0 {
        return Scratch::new();
    }
    // Row 0 is first treated as `θ[0] = θ[0]`, so every later row picks up
    // its dependence on θ[0] through `weight`.
    let placeholder = Weighted {
        post: 0.0,
        rhs: 0.0,
        weight: 1.0,
    };
    let mut reduced: Scratch<Weighted> = Scratch::with_capacity(n);
    reduced.push(placeholder);
    let mut last = placeholder;
    for &e in &equations[1..] {
        last = Weighted::eliminate(e, last);
        reduced.push(last);
    }
    // Now the real row 0, whose `pre` couples to θ[n-1].
    reduced[0] = Weighted::eliminate(equations[0], last);

    // Substitute forward around the loop to express θ[0] in terms of itself.
    let (mut a, mut b, mut c) = (0.0, 0.0, 1.0);
    for r in &reduced {
        a += c * r.rhs;
        b += c * r.weight;
        c = -c * r.post;
    }
    let theta0 = a / (1.0 - (b + c));

    let mut theta: Scratch<f64> = reduced.iter().map(|_| 0.0).collect();
    let mut next = theta0;
    for (t, r) in theta.iter_mut().zip(&reduced).rev() {
        next = -r.post * next + r.rhs + r.weight * theta0;
        *t = next;
    }
    trace!("cyclic solve: {theta:?}");
    theta
}

/// Build and solve the equations of a section.
pub(crate) fn solve_thetas(section: &Section<'_>, geometry: &Geometry) -> Scratch<f64> {
    let equations = build_equations(section, geometry);
    let strategy = Strategy::select(&equations, section.is_cyclic());
    trace!("{} equations, {strategy:?}", equations.len());
    strategy.run(&equations)
}

impl Section<'_> {
    /// The strategy used to solve this section's equations.
    ///
    /// # Panics
    ///
    /// As for [`equations`](Section::equations).
    pub fn strategy(&self) -> Strategy {
        Strategy::select(&self.equations(), self.is_cyclic())
    }

    /// The solved tangent angles `θ`, one per knot.
    ///
    /// `θ[j]` is the angle from the chord leaving knot `j` to the outgoing
    /// tangent there.
    ///
    /// # Panics
    ///
    /// As for [`equations`](Section::equations).
    pub fn angles(&self) -> Vec<f64> {
        solve_thetas(self, &Geometry::new(self)).into_vec()
    }
}
