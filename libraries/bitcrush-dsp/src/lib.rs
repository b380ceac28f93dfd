//! Bitcrush DSP
//!
//! The numeric transformation pipeline behind the Bitcrush demo. Every
//! function here is a pure, one-shot transform: slice in, freshly allocated
//! buffer out, no shared state between stages.
//!
//! - [`mono::first_channel`] - collapse interleaved frames to channel 0
//! - [`normalize::peak`] - peak normalization to [-1.0, 1.0]
//! - [`decimate::decimate`] - every-Nth-sample rate reduction, no anti-alias
//!   filter (deliberately aliasing-prone)
//! - [`quantize::quantize`] - amplitude quantization to a coarse level grid
//!
//! # Example
//!
//! ```rust
//! use bitcrush_core::SampleRate;
//! use bitcrush_dsp::{decimate, normalize, quantize};
//!
//! # fn example() -> Result<(), bitcrush_dsp::DspError> {
//! let normalized = normalize::peak(&[2.0, -8.0, 4.0]);
//! assert_eq!(normalized, vec![0.25, -1.0, 0.5]);
//!
//! let low = decimate::decimate(&normalized, SampleRate::new(8_000), SampleRate::new(4_000))?;
//! let crushed = quantize::quantize(&low.samples, quantize::EIGHT_BIT_LEVELS)?;
//! # let _ = crushed;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod decimate;
mod error;
pub mod mono;
pub mod normalize;
pub mod quantize;

pub use decimate::Decimated;
pub use error::{DspError, Result};
