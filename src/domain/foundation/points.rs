//! Points value object for weighted option scores.
//!
//! Option weights may be fractional (half points on multi-select questions),
//! so this wraps an f64 and keeps full precision through accumulation.
//! Rounding, if any, is a presentation concern.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use super::ValidationError;

/// A non-negative, possibly fractional score amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Points(f64);

impl Points {
    /// Zero points.
    pub const ZERO: Self = Self(0.0);

    /// Creates Points from a raw value.
    ///
    /// Negative and non-finite values clamp to zero; use `try_new` to
    /// surface them as errors instead.
    pub fn new(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            Self::ZERO
        }
    }

    /// Creates Points, returning an error for negative or non-finite values.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format("points", "not a finite number"));
        }
        if value < 0.0 {
            return Err(ValidationError::invalid_format(
                "points",
                format!("must be non-negative, got {}", value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the smaller of two point amounts.
    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }

    /// Clamps to an upper bound, used for multi-select score caps.
    pub fn capped_at(self, cap: Self) -> Self {
        self.min(cap)
    }
}

impl Default for Points {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Points {
        Points(self.0 + rhs.0)
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Points) {
        self.0 += rhs.0;
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Points {
        iter.fold(Points::ZERO, Add::add)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
