pub mod error;
pub mod math;
pub mod operations;

pub use error::{GeometryError, InareaError, Result};
pub use math::tolerance::Tolerance;
pub use operations::query::{classify_point, is_point_in_area, Containment, PointInArea};
