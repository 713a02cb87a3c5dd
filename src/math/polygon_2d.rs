use super::tolerance::Tolerance;
use super::{Planar, Point2};

/// Read-only closed view over a vertex sequence.
///
/// If the last vertex differs from the first by more than the tolerance, an
/// implicit closing edge from the last vertex back to the first is visited.
/// The underlying slice is never modified.
#[derive(Debug, Clone, Copy)]
pub struct ClosedRing<'a, P> {
    vertices: &'a [P],
    wraps: bool,
}

impl<'a, P: Planar> ClosedRing<'a, P> {
    /// Builds a closed view of `vertices`.
    #[must_use]
    pub fn new(vertices: &'a [P], tol: &Tolerance) -> Self {
        let wraps = match (vertices.first(), vertices.last()) {
            (Some(first), Some(last)) if vertices.len() > 1 => {
                !tol.points_equal(&first.xy(), &last.xy())
            }
            _ => false,
        };
        Self { vertices, wraps }
    }

    /// Returns `true` if the closing edge is implicit.
    #[must_use]
    pub fn wraps(&self) -> bool {
        self.wraps
    }

    /// Number of edges visited by [`ClosedRing::edges`].
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let n = self.vertices.len();
        if self.wraps {
            n
        } else {
            n.saturating_sub(1)
        }
    }

    /// Iterates the edges `(p1, p2)` in vertex order, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + 'a {
        let vertices = self.vertices;
        let n = vertices.len();
        (0..self.edge_count()).map(move |i| (vertices[i].xy(), vertices[(i + 1) % n].xy()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point3;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn open_square_gets_closing_edge() {
        let pts = square();
        let ring = ClosedRing::new(&pts, &Tolerance::default());
        assert!(ring.wraps());
        let edges: Vec<_> = ring.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (Point2::new(0.0, 1.0), Point2::new(0.0, 0.0)));
        assert_eq!(pts.len(), 4);
    }

    #[test]
    fn closed_square_has_no_extra_edge() {
        let mut pts = square();
        pts.push(Point2::new(0.001, 0.0));
        let ring = ClosedRing::new(&pts, &Tolerance::default());
        assert!(!ring.wraps());
        assert_eq!(ring.edges().count(), 4);
    }

    #[test]
    fn empty_and_single_have_no_edges() {
        let tol = Tolerance::default();
        assert_eq!(ClosedRing::<Point2>::new(&[], &tol).edge_count(), 0);
        assert_eq!(ClosedRing::new(&[Point2::new(1.0, 1.0)], &tol).edge_count(), 0);
    }

    #[test]
    fn edges_are_flattened() {
        let pts = [
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(1.0, 0.0, -5.0),
            Point3::new(1.0, 1.0, 2.0),
        ];
        let ring = ClosedRing::new(&pts, &Tolerance::default());
        let edges: Vec<_> = ring.edges().collect();
        assert_eq!(edges[2], (Point2::new(1.0, 1.0), Point2::new(0.0, 0.0)));
    }
}
