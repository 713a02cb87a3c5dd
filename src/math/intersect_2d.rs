use super::tolerance::Tolerance;
use super::Point2;

/// Below this sine of the angle between two segments they are treated as parallel.
const PARALLEL_SIN: f64 = 1e-12;

/// Bounded segment-segment intersection in 2D with an absolute tolerance.
///
/// Segments that touch at an endpoint, or miss each other by no more than the
/// tolerance along either segment, intersect. Parallel, collinear and
/// zero-length segments do not.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are the clamped
/// parameters in `[0, 1]` on `a0`–`a1` and `b0`–`b1`. The point is taken on
/// `b0`–`b1`, so a touch at `b0` or `b1` reports that endpoint.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    tol: &Tolerance,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;
    let len_a = da.norm();
    let len_b = db.norm();
    if len_a < f64::MIN_POSITIVE || len_b < f64::MIN_POSITIVE {
        return None;
    }

    let cross = da.perp(&db);
    if cross.abs() <= PARALLEL_SIN * len_a * len_b {
        return None;
    }

    let d = b0 - a0;
    let t = d.perp(&db) / cross;
    let u = d.perp(&da) / cross;

    let eps_t = tol.eps() / len_a;
    let eps_u = tol.eps() / len_b;
    if t >= -eps_t && t <= 1.0 + eps_t && u >= -eps_u && u <= 1.0 + eps_u {
        let u_clamped = u.clamp(0.0, 1.0);
        let pt = b0 + db * u_clamped;
        Some((pt, t.clamp(0.0, 1.0), u_clamped))
    } else {
        None
    }
}
