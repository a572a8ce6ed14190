//! Error types for pathbox.

pub use pathbox_types::GeometryError;

/// Errors surfaced by the index, configuration and geometry constructors.
///
/// The intersection engine itself never fails; only the outer surfaces that
/// accept untrusted input report errors.
#[derive(Debug, thiserror::Error)]
pub enum PathboxError {
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PathboxError>;
