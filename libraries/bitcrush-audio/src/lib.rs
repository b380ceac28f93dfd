//! Bitcrush Audio
//!
//! The external collaborators of the Bitcrush pipeline:
//! - WAV decoding via Symphonia ([`WavDecoder`])
//! - Blocking playback via CPAL ([`CpalOutput`])
//! - Waveform plotting to PNG ([`waveform::render_png`])
//!
//! # Example: Decoding a WAV file
//!
//! ```rust,no_run
//! use bitcrush_audio::WavDecoder;
//! use bitcrush_core::AudioDecoder;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut decoder = WavDecoder::new();
//! let asset = decoder.decode(Path::new("/audio/voice.wav"))?;
//!
//! println!("Decoded {} samples at {}", asset.len(), asset.sample_rate);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod decoder;
mod error;
mod output;
pub mod waveform;

pub use decoder::WavDecoder;
pub use error::{AudioError, Result};
pub use output::CpalOutput;
