pub mod bbox_2d;
pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;
pub mod tolerance;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type. Only X and Y take part in planar queries.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default absolute tolerance for point and edge coincidence.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// A point that can be flattened onto the XY plane.
pub trait Planar {
    /// Returns the XY projection of the point.
    fn xy(&self) -> Point2;
}

impl Planar for Point2 {
    #[inline]
    fn xy(&self) -> Point2 {
        *self
    }
}

impl Planar for Point3 {
    #[inline]
    fn xy(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}
