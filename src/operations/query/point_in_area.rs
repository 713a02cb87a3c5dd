use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::math::bbox_2d::Aabb2;
use crate::math::distance_2d::point_on_segment;
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::polygon_2d::ClosedRing;
use crate::math::tolerance::Tolerance;
use crate::math::{Planar, Point2};

/// Fixed part of the distance the ray reaches past the bounding box.
const RAY_MARGIN: f64 = 10.0;

/// Where a query point lies relative to a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// Strictly inside.
    Inside,
    /// Within the tolerance of a vertex or an edge.
    OnBoundary,
    /// Outside, or the polygon has fewer than three vertices.
    Outside,
}

impl Containment {
    /// `true` for `Inside` and `OnBoundary`.
    #[must_use]
    pub fn is_inside_or_on(self) -> bool {
        self != Self::Outside
    }
}

/// Position of a ray/edge intersection along the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayHit {
    /// Strictly between the endpoints.
    Interior,
    /// At the edge's first vertex.
    AtStart,
    /// At the edge's second vertex.
    AtEnd,
}

impl RayHit {
    /// Classifies `hit` against the endpoints of edge `p1`–`p2`.
    #[must_use]
    pub fn classify(hit: &Point2, p1: &Point2, p2: &Point2, tol: &Tolerance) -> Self {
        if tol.points_equal(hit, p1) {
            Self::AtStart
        } else if tol.points_equal(hit, p2) {
            Self::AtEnd
        } else {
            Self::Interior
        }
    }

    /// Whether this hit counts as a ray crossing of the ray at `ray_y`.
    ///
    /// A hit on a vertex counts only when the edge spans the ray line, with a
    /// vertex exactly on the line taken as below it. For a vertex on the ray
    /// this means the other endpoint lies strictly above, so a vertex shared by
    /// two edges is counted once when the boundary crosses the ray and zero or
    /// two times when it only touches it. A vertex snapped onto the ray from
    /// within the tolerance keeps the side it is really on.
    #[must_use]
    pub fn counts(self, p1_y: f64, p2_y: f64, ray_y: f64) -> bool {
        let (vertex_y, other_y) = match self {
            Self::Interior => return true,
            Self::AtStart => (p1_y, p2_y),
            Self::AtEnd => (p2_y, p1_y),
        };
        (vertex_y > ray_y) != (other_y > ray_y)
    }
}

/// Tests whether a point lies inside or on the boundary of a polygon on the
/// XY plane.
///
/// The polygon need not repeat its first vertex; it is treated as closed.
/// Z coordinates, if any, are ignored.
pub struct PointInArea<'a, P> {
    point: Point2,
    polygon: &'a [P],
    tolerance: Tolerance,
}

impl<'a, P: Planar> PointInArea<'a, P> {
    /// Creates a new `PointInArea` query with the default tolerance.
    #[must_use]
    pub fn new(point: &impl Planar, polygon: &'a [P]) -> Self {
        Self {
            point: point.xy(),
            polygon,
            tolerance: Tolerance::default(),
        }
    }

    /// Replaces the tolerance used for every coincidence check.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the query, returning `true` if the point is inside or on the
    /// boundary.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFiniteCoordinate` if the point or any vertex
    /// has a NaN or infinite coordinate, and `GeometryError::ExtentOverflow` if
    /// the polygon is too large to cast a ray across in `f64`.
    pub fn execute(&self) -> Result<bool> {
        self.classify().map(Containment::is_inside_or_on)
    }

    /// Executes the query, returning where the point lies.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFiniteCoordinate` if the point or any vertex
    /// has a NaN or infinite coordinate, and `GeometryError::ExtentOverflow` if
    /// the polygon is too large to cast a ray across in `f64`.
    pub fn classify(&self) -> Result<Containment> {
        let pt = self.point;
        let tol = &self.tolerance;

        if self.polygon.len() < 3 {
            trace!(vertices = self.polygon.len(), "degenerate polygon");
            return Ok(Containment::Outside);
        }

        check_finite(&pt, "query point")?;
        for v in self.polygon {
            check_finite(&v.xy(), "polygon vertex")?;
        }

        let Some(bbox) = Aabb2::from_points(self.polygon) else {
            return Ok(Containment::Outside);
        };
        if !bbox.contains(&pt, tol) {
            trace!(x = pt.x, y = pt.y, "rejected by bounding box");
            return Ok(Containment::Outside);
        }

        let far = Point2::new(bbox.max.x + ray_margin(&bbox), pt.y);
        check_extent(&bbox, far.x)?;
        let ring = ClosedRing::new(self.polygon, tol);
        trace!(wraps = ring.wraps(), edges = ring.edge_count(), "closed ring");

        let mut crossings = 0usize;
        for (p1, p2) in ring.edges() {
            if tol.points_equal(&pt, &p1) {
                debug!(x = p1.x, y = p1.y, "point on vertex");
                return Ok(Containment::OnBoundary);
            }
            if point_on_segment(&pt, &p1, &p2, tol) {
                debug!(?p1, ?p2, "point on edge");
                return Ok(Containment::OnBoundary);
            }
            let Some((hit, _, _)) = segment_segment_intersect_2d(&pt, &far, &p1, &p2, tol) else {
                continue;
            };
            // A hit snapped onto an endpoint behind the ray origin is not on the ray.
            if hit.x < pt.x {
                trace!(x = hit.x, y = hit.y, "hit behind query point");
                continue;
            }
            let kind = RayHit::classify(&hit, &p1, &p2, tol);
            if kind.counts(p1.y, p2.y, pt.y) {
                crossings += 1;
            }
            trace!(?kind, x = hit.x, y = hit.y, crossings, "ray hit");
        }

        let result = if crossings % 2 == 1 {
            Containment::Inside
        } else {
            Containment::Outside
        };
        debug!(crossings, ?result, "ray cast finished");
        Ok(result)
    }
}

/// Returns `true` if `point` is inside or on the boundary of `polygon`, using
/// the default tolerance.
///
/// Polygons with fewer than three vertices, inputs with NaN or infinite
/// coordinates and polygons too large to ray cast yield `false`.
#[must_use]
pub fn is_point_in_area<P: Planar>(point: &impl Planar, polygon: &[P]) -> bool {
    PointInArea::new(point, polygon).execute().unwrap_or(false)
}

/// Classifies `point` against `polygon` using the given tolerance.
///
/// # Errors
///
/// Returns `GeometryError::NonFiniteCoordinate` if the point or any vertex
/// has a NaN or infinite coordinate, and `GeometryError::ExtentOverflow` if
/// the polygon is too large to cast a ray across in `f64`.
pub fn classify_point<P: Planar>(
    point: &impl Planar,
    polygon: &[P],
    tolerance: Tolerance,
) -> Result<Containment> {
    PointInArea::new(point, polygon)
        .with_tolerance(tolerance)
        .classify()
}

/// Distance the ray extends past `bbox.max.x`.
///
/// Grows with the box width and with the magnitude of `max.x`, so the far end
/// always clears the box in floating point.
fn ray_margin(bbox: &Aabb2) -> f64 {
    RAY_MARGIN + bbox.width() + bbox.max.x.abs() * 16.0 * f64::EPSILON
}

/// Rejects boxes whose ray and edge arithmetic would overflow: squared
/// lengths and cross products of the ray and any edge must stay finite.
fn check_extent(bbox: &Aabb2, far_x: f64) -> Result<()> {
    let reach = (far_x - bbox.min.x).max(bbox.height());
    if (2.0 * reach * reach).is_finite() {
        Ok(())
    } else {
        Err(GeometryError::ExtentOverflow {
            width: bbox.width(),
            height: bbox.height(),
        }
        .into())
    }
}

fn check_finite(p: &Point2, what: &'static str) -> Result<()> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFiniteCoordinate { what, x: p.x, y: p.y }.into())
    }
}
