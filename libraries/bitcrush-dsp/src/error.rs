/// DSP-specific errors
use bitcrush_core::BitcrushError;
use thiserror::Error;

/// Result type alias using `DspError`
pub type Result<T> = std::result::Result<T, DspError>;

/// DSP error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DspError {
    /// Decimation target must be strictly below the source rate
    #[error(
        "Invalid resample target: {target} Hz (source is {original} Hz, target must be in 1..{original})"
    )]
    InvalidResampleTarget {
        /// Requested output rate in Hz
        target: u32,
        /// Source rate in Hz
        original: u32,
    },

    /// Quantizer needs at least two amplitude levels
    #[error("Invalid level count: {0} (must be >= 2)")]
    InvalidLevelCount(u32),
}

impl From<DspError> for BitcrushError {
    fn from(err: DspError) -> Self {
        BitcrushError::invalid_input(err.to_string())
    }
}
