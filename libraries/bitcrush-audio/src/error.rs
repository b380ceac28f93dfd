/// Audio-specific errors
use bitcrush_core::BitcrushError;
use thiserror::Error;

/// Result type alias using `AudioError`
pub type Result<T> = std::result::Result<T, AudioError>;

/// Audio error types
#[derive(Error, Debug)]
pub enum AudioError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Symphonia error
    #[error("Symphonia error: {0}")]
    Symphonia(String),

    /// No audio output device available
    #[error("No audio output device found")]
    DeviceNotFound,

    /// Output stream could not be built for the requested configuration
    #[error("Failed to build output stream: {0}")]
    StreamBuild(String),

    /// Playback error
    #[error("Playback error: {0}")]
    Playback(String),

    /// Waveform rendering error
    #[error("Render error: {0}")]
    Render(String),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<AudioError> for BitcrushError {
    fn from(err: AudioError) -> Self {
        match err {
            AudioError::FileNotFound(path) => BitcrushError::AssetNotFound(path),
            AudioError::UnsupportedFormat(msg)
            | AudioError::DecodeError(msg)
            | AudioError::Symphonia(msg) => BitcrushError::Decode(msg),
            AudioError::DeviceNotFound => BitcrushError::playback("no audio output device found"),
            AudioError::StreamBuild(msg) | AudioError::Playback(msg) => {
                BitcrushError::Playback(msg)
            }
            AudioError::Render(msg) => BitcrushError::Render(msg),
            AudioError::Io(e) => BitcrushError::Io(e),
        }
    }
}
