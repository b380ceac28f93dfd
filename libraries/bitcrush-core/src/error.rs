/// Core error types for Bitcrush
use thiserror::Error;

/// Result type alias using `BitcrushError`
pub type Result<T> = std::result::Result<T, BitcrushError>;

/// Core error type for Bitcrush
#[derive(Error, Debug)]
pub enum BitcrushError {
    /// Input path does not resolve to a readable asset
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// Asset exists but cannot be parsed as a supported waveform format
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid transform parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Audio output device unavailable or playback failed
    #[error("Playback error: {0}")]
    Playback(String),

    /// Waveform rendering failed
    #[error("Render error: {0}")]
    Render(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BitcrushError {
    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a playback error
    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }

    /// Create a render error
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
