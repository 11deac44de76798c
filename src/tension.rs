// Copyright 2025 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Join tensions.

use core::fmt;

/// How tightly a join between two knots is pulled toward a straight line.
///
/// A value of 1 gives the round, uncontrolled curve. Larger values pull the
/// control points in toward their knots. When `at_least` is set the value is
/// a floor: the control points are additionally kept from overshooting the
/// triangle formed by the chord and the two tangents.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tension {
    /// The tension multiplier.
    pub value: f64,
    /// Whether `value` is a lower bound rather than an exact multiplier.
    pub at_least: bool,
}

impl Tension {
    /// The default tension: exactly 1.
    pub const DEFAULT: Tension = Tension::new(1.0);

    /// An exact tension.
    #[inline]
    pub const fn new(value: f64) -> Tension {
        Tension {
            value,
            at_least: false,
        }
    }

    /// A tension of at least `value`.
    #[inline]
    pub const fn at_least(value: f64) -> Tension {
        Tension {
            value,
            at_least: true,
        }
    }

    /// Is this the default tension?
    #[inline]
    pub fn is_default(self) -> bool {
        self.value == 1.0 && !self.at_least
    }
}

impl Default for Tension {
    #[inline]
    fn default() -> Tension {
        Tension::DEFAULT
    }
}

impl From<f64> for Tension {
    #[inline]
    fn from(value: f64) -> Tension {
        Tension::new(value)
    }
}

impl fmt::Display for Tension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.at_least {
            write!(f, "tension atleast {}", self.value)
        } else {
            write!(f, "tension {}", self.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one() {
        assert!(Tension::default().is_default());
        assert!(!Tension::new(1.5).is_default());
        assert!(!Tension::at_least(1.0).is_default());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Tension::new(1.5)), "tension 1.5");
        assert_eq!(format!("{}", Tension::at_least(2.0)), "tension atleast 2");
    }
}
