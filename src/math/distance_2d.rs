use super::tolerance::Tolerance;
use super::Point2;

/// Returns the minimum distance from `p` to the closed segment `a`–`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (p - a).norm();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    let closest = a + d * t;

    (p - closest).norm()
}

/// Returns `true` if `p` lies within the tolerance of the segment `a`–`b`,
/// endpoints included.
#[must_use]
pub fn point_on_segment(p: &Point2, a: &Point2, b: &Point2, tol: &Tolerance) -> bool {
    point_to_segment_dist(p, a, b) <= tol.eps()
}
