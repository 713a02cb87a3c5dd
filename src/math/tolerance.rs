use std::cmp::Ordering;

use super::{Point2, DEFAULT_TOLERANCE};
use crate::error::{GeometryError, Result};

/// Absolute tolerance shared by every coincidence check of one query.
///
/// Two scalars within `eps` of each other compare equal, and two points whose
/// Euclidean distance is at most `eps` are the same point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    eps: f64,
}

impl Tolerance {
    /// Creates a tolerance of magnitude `eps`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidTolerance` if `eps` is not finite or not
    /// strictly positive.
    pub fn new(eps: f64) -> Result<Self> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(GeometryError::InvalidTolerance(eps).into());
        }
        Ok(Self { eps })
    }

    /// Returns the tolerance magnitude.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Three-way comparison of `a` against `b`.
    ///
    /// Values closer than `eps` are `Equal`.
    #[must_use]
    pub fn compare(&self, a: f64, b: f64) -> Ordering {
        let d = a - b;
        if d > self.eps {
            Ordering::Greater
        } else if d < -self.eps {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }

    /// Returns `true` if the two points are within `eps` of each other.
    #[must_use]
    pub fn points_equal(&self, a: &Point2, b: &Point2) -> bool {
        (a - b).norm() <= self.eps
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            eps: DEFAULT_TOLERANCE,
        }
    }
}
