//! Naive decimation
//!
//! Reduces the sample rate by keeping every Nth sample with no anti-alias
//! filter in front of the selection. Content above the new Nyquist folds
//! back into the audible band, which is the artifact this demo exists to
//! make audible.

use crate::error::{DspError, Result};
use bitcrush_core::SampleRate;

/// Result of a decimation pass
#[derive(Debug, Clone, PartialEq)]
pub struct Decimated {
    /// Every `stride`-th sample of the input, starting at index 0
    pub samples: Vec<f32>,

    /// The rate actually achieved: `original / stride`. Integer division
    /// means this can differ from the requested target; callers must use
    /// this rate for playback and duration math, not the one they asked for.
    pub actual_rate: SampleRate,

    /// The integer stride that was applied
    pub stride: usize,
}

impl Decimated {
    /// Duration of the decimated signal in seconds
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / f64::from(self.actual_rate.as_hz())
    }
}

/// Decimate `samples` from `original` towards `target`.
///
/// The stride is `original / target` in integer division. A target of zero
/// would make the stride division fault, and a target at or above the
/// original rate would produce a stride of 0 or 1 (no decimation at all);
/// both are rejected up front as invalid parameters.
pub fn decimate(samples: &[f32], original: SampleRate, target: SampleRate) -> Result<Decimated> {
    if target.as_hz() == 0 || target >= original {
        return Err(DspError::InvalidResampleTarget {
            target: target.as_hz(),
            original: original.as_hz(),
        });
    }

    let stride = (original.as_hz() / target.as_hz()) as usize;
    debug_assert!(stride >= 1);

    let decimated: Vec<f32> = samples.iter().step_by(stride).copied().collect();
    let actual_rate = SampleRate::new(original.as_hz() / stride as u32);

    Ok(Decimated {
        samples: decimated,
        actual_rate,
        stride,
    })
}
