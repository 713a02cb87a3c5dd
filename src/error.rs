use thiserror::Error;

/// Top-level error type for the point-in-area crate.
#[derive(Debug, Error)]
pub enum InareaError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to geometric input.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("non-finite coordinate in {what}: ({x}, {y})")]
    NonFiniteCoordinate { what: &'static str, x: f64, y: f64 },

    #[error("polygon extent {width} x {height} is too large for the ray cast")]
    ExtentOverflow { width: f64, height: f64 },

    #[error("tolerance must be finite and positive, got {0}")]
    InvalidTolerance(f64),
}

/// Convenience type alias for results using [`InareaError`].
pub type Result<T> = std::result::Result<T, InareaError>;
