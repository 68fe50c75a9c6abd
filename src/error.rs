/// Convenience result type used across bootanim.
pub type BootanimResult<T> = Result<T, BootanimError>;

/// Top-level error taxonomy used by builder APIs.
#[derive(thiserror::Error, Debug)]
pub enum BootanimError {
    /// Invalid user-provided configuration (dimensions, fit, fps).
    #[error("validation error: {0}")]
    Validation(String),

    /// The input could not be decoded as an animated image.
    #[error("decode error: {0}")]
    Decode(String),

    /// Errors while writing or reading the boot-animation archive.
    #[error("archive error: {0}")]
    Archive(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BootanimError {
    /// Build a [`BootanimError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BootanimError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`BootanimError::Archive`] value.
    pub fn archive(msg: impl Into<String>) -> Self {
        Self::Archive(msg.into())
    }
}
