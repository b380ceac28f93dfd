//! Amplitude quantization
//!
//! Maps normalized samples onto a coarse integer grid and back, simulating
//! a reduced bit depth. 256 levels is an 8-bit simulation. There is no
//! dither, so the rounding error is deterministic and correlates with the
//! signal; at low levels it is audible as harmonic distortion rather than
//! broadband noise.

use crate::error::{DspError, Result};

/// Level count simulating 8-bit storage
pub const EIGHT_BIT_LEVELS: u32 = 256;

/// Quantize a normalized buffer to `levels` discrete amplitude values.
///
/// Each sample in [-1.0, 1.0] maps to `round((s + 1) * (levels - 1) / 2)`,
/// clamped to the valid grid, then back to a normalized amplitude. The
/// reconstruction error per sample is bounded by `1 / (levels - 1)`, and
/// re-quantizing at the same level count is a no-op.
pub fn quantize(samples: &[f32], levels: u32) -> Result<Vec<f32>> {
    if levels < 2 {
        return Err(DspError::InvalidLevelCount(levels));
    }

    let max_level = (levels - 1) as f32;
    let half_span = max_level / 2.0;

    Ok(samples
        .iter()
        .map(|s| {
            let level = ((s + 1.0) * half_span).round().clamp(0.0, max_level);
            level / half_span - 1.0
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_maps_near_zero_at_eight_bits() {
        // level = round(127.5) lands on 127 or 128 depending on the
        // rounding rule; either reconstructs within one step of 0.0
        let out = quantize(&[0.0], EIGHT_BIT_LEVELS).unwrap();
        assert!(out[0].abs() <= 1.0 / 255.0 + 1e-6);
    }

    #[test]
    fn extremes_are_exact() {
        let out = quantize(&[-1.0, 1.0], EIGHT_BIT_LEVELS).unwrap();
        assert_eq!(out, vec![-1.0, 1.0]);
    }

    #[test]
    fn error_is_bounded_by_one_step() {
        let input: Vec<f32> = (0..1000).map(|i| (i as f32 / 500.0) - 1.0).collect();
        let out = quantize(&input, EIGHT_BIT_LEVELS).unwrap();
        let bound = 1.0 / 255.0 + 1e-6;
        for (s, q) in input.iter().zip(&out) {
            assert!((s - q).abs() <= bound, "sample {s} quantized to {q}");
        }
    }

    #[test]
    fn idempotent_at_same_level_count() {
        let input = [0.9, -0.3, 0.123, -0.999, 0.0];
        let once = quantize(&input, EIGHT_BIT_LEVELS).unwrap();
        let twice = quantize(&once, EIGHT_BIT_LEVELS).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn two_levels_is_a_one_bit_signal() {
        let out = quantize(&[-0.9, -0.1, 0.1, 0.9], 2).unwrap();
        assert_eq!(out, vec![-1.0, -1.0, 1.0, 1.0]);
    }

    #[test]
    fn out_of_range_input_is_clamped_to_the_grid() {
        let out = quantize(&[1.5, -2.0], EIGHT_BIT_LEVELS).unwrap();
        assert_eq!(out, vec![1.0, -1.0]);
    }

    #[test]
    fn fewer_than_two_levels_is_rejected() {
        assert_eq!(quantize(&[0.0], 1).unwrap_err(), DspError::InvalidLevelCount(1));
        assert_eq!(quantize(&[0.0], 0).unwrap_err(), DspError::InvalidLevelCount(0));
    }
}
