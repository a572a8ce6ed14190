use crate::geometry::GeometryKind;

/// Errors raised while constructing or accessing geometries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// A coordinate or point index past the end of the geometry.
    #[error("index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("expected {expected} coordinates, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("linestring needs at least {required} points, found {found}")]
    TooFewPoints { required: usize, found: usize },

    /// The minimum corner lies above the maximum corner on `axis`.
    #[error("box minimum exceeds maximum on axis {axis}")]
    InvalidBox { axis: usize },

    #[error("{0} geometry cannot be used as a path")]
    NotAPath(GeometryKind),
}
