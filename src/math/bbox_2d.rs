use std::cmp::Ordering;

use super::tolerance::Tolerance;
use super::{Planar, Point2};

/// An axis-aligned bounding box in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb2 {
    /// Computes the bounding box of a point sequence.
    ///
    /// Returns `None` for an empty sequence.
    #[must_use]
    pub fn from_points<P: Planar>(points: &[P]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let first = first.xy();
        let mut min = first;
        let mut max = first;
        for p in rest {
            let p = p.xy();
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self { min, max })
    }

    /// Extent along X.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along Y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns `true` unless `point` lies beyond the box by more than the
    /// tolerance on some side.
    #[must_use]
    pub fn contains(&self, point: &Point2, tol: &Tolerance) -> bool {
        tol.compare(point.x, self.max.x) != Ordering::Greater
            && tol.compare(point.x, self.min.x) != Ordering::Less
            && tol.compare(point.y, self.max.y) != Ordering::Greater
            && tol.compare(point.y, self.min.y) != Ordering::Less
    }
}
