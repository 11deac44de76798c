// Copyright 2025 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth paths through points, the MetaPost way.
//!
//! The knotwork library turns a sequence of points ("knots"), each optionally
//! annotated with a tangent direction, a curl, a tension, or explicit control
//! points, into the piecewise cubic Bézier path that John Hobby's spline
//! algorithm, as used by MetaPost, would draw through them.
//!
//! Where nothing is specified the path is as smooth as the linearized
//! curvature equations allow; every explicit constraint is met exactly.
//!
//! # Examples
//!
//! A closed curve through four points, with a fixed direction at one of them:
//!
//! ```
//! use knotwork::{Knot, KnotList, Point, Specifier};
//!
//! let list = KnotList::new(
//!     vec![
//!         Knot::new((0.0, 0.0)),
//!         Knot::new((100.0, 0.0)).with_dir((0.0, 1.0)),
//!         Knot::new((100.0, 100.0)),
//!         Knot::new((0.0, 100.0)),
//!     ],
//!     true,
//! )
//! .unwrap();
//! let path = list.solve();
//! assert_eq!(path.segments().count(), 4);
//!
//! // The curve leaves (100, 0) heading straight up.
//! let k = path.get(1);
//! assert!((k.post.x - 100.0).abs() < 1e-9);
//! assert!(k.post.y > 0.0);
//! ```
//!
//! An open path gets the natural curl at both ends, and two free points are
//! joined by a straight line:
//!
//! ```
//! use knotwork::{KnotList, PathEl, Point};
//!
//! let path = KnotList::from_points([(0.0, 0.0), (30.0, 0.0)], false)
//!     .unwrap()
//!     .solve();
//! let bez = path.to_bez_path();
//! assert_eq!(
//!     bez.elements(),
//!     [PathEl::MoveTo(Point::new(0.0, 0.0)), PathEl::LineTo(Point::new(30.0, 0.0))]
//! );
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. However, note that the `libm` crate is not as
//! efficient as the standard library, and that this crate still uses the
//! `alloc` crate regardless.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("knotwork requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

mod bezpath;
pub mod common;
mod controls;
mod cubicbez;
mod equation;
mod knot;
mod linsolve;
pub mod normalize;
mod param_curve;
mod point;
pub mod segment;
mod solve;
mod solved;
mod specifier;
mod tension;
mod vec2;

pub use crate::bezpath::*;
pub use crate::controls::{velocity, VELOCITY_BOUND};
pub use crate::cubicbez::*;
pub use crate::equation::LinearEquation;
pub use crate::knot::{Knot, KnotList, KnotListError, Section};
pub use crate::linsolve::Strategy;
pub use crate::param_curve::*;
pub use crate::point::*;
pub use crate::solve::solve;
pub use crate::solved::{SolvedKnot, SolvedPath};
pub use crate::specifier::*;
pub use crate::tension::*;
pub use crate::vec2::*;
