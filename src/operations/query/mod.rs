mod point_in_area;

pub use point_in_area::{classify_point, is_point_in_area, Containment, PointInArea, RayHit};
