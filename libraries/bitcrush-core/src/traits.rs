/// Collaborator seams for Bitcrush
use crate::error::Result;
use crate::types::{AudioAsset, SampleRate};
use std::path::Path;

/// Audio decoder trait
///
/// Implementers decode a waveform file into an `AudioAsset` holding the
/// raw, unscaled PCM amplitudes.
pub trait AudioDecoder: Send {
    /// Decode an audio file from the given path (loads the entire file)
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or decoded
    fn decode(&mut self, path: &Path) -> Result<AudioAsset>;

    /// Check if the decoder supports the given file format
    fn supports_format(&self, path: &Path) -> bool;
}

/// Blocking audio output trait
///
/// Implementers render a mono, normalized buffer at the requested rate and
/// return only once the device has drained it. The device is acquired for
/// the duration of the call and released when it returns, so consecutive
/// calls play strictly in sequence.
pub trait BlockingOutput: Send {
    /// Play a buffer to completion
    ///
    /// # Errors
    /// Returns an error if no device is available, the device rejects the
    /// requested rate, or the stream fails mid-playback
    fn play(&mut self, samples: &[f32], rate: SampleRate) -> Result<()>;
}
