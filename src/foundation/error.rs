use crate::border::BorderId;

/// Convenience result alias used across the crate.
pub type WavyframeResult<T> = Result<T, WavyframeError>;

/// Top-level error type.
#[derive(thiserror::Error, Debug)]
pub enum WavyframeError {
    /// A border parameter fell outside its documented range (or was not finite).
    #[error("invalid parameter `{name}`: {value} is outside {min}..={max}")]
    InvalidParameter {
        /// Field name as it appears in [`crate::BorderSpec`].
        name: &'static str,
        /// Rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// No border with this id exists in the stack.
    #[error("unknown border id {0}")]
    UnknownBorder(BorderId),

    /// Two borders in one list share an id.
    #[error("duplicate border id {0}")]
    DuplicateBorder(BorderId),

    /// The source image could not be decoded.
    #[error("image decode error: {0}")]
    ImageDecode(String),

    /// The surface could not be encoded or written.
    #[error("export error: {0}")]
    Export(String),

    /// Rasterization failed (surface size mismatch, oversized canvas, ...).
    #[error("render error: {0}")]
    Render(String),

    /// A border document could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WavyframeError {
    /// Build an [`WavyframeError::InvalidParameter`].
    pub fn invalid_parameter(name: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::InvalidParameter {
            name,
            value,
            min,
            max,
        }
    }

    /// Build an [`WavyframeError::ImageDecode`].
    pub fn image_decode(msg: impl Into<String>) -> Self {
        Self::ImageDecode(msg.into())
    }

    /// Build an [`WavyframeError::Export`].
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build an [`WavyframeError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`WavyframeError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
