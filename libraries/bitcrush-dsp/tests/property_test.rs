//! Property-based tests for the transformation pipeline
//!
//! These tests use proptest to verify invariants across many random inputs.

use bitcrush_core::SampleRate;
use bitcrush_dsp::{decimate, mono, normalize, quantize};
use proptest::prelude::*;

// Helper: Check if buffer contains only finite values
fn all_finite(buffer: &[f32]) -> bool {
    buffer.iter().all(|s| s.is_finite())
}

// Helper: Calculate peak
fn peak(buffer: &[f32]) -> f32 {
    buffer.iter().map(|s| s.abs()).fold(0.0f32, f32::max)
}

proptest! {
    /// Property: non-silent input normalizes to a peak of exactly 1.0
    #[test]
    fn normalization_reaches_unit_peak(
        samples in prop::collection::vec(-32768.0f32..32768.0, 1..1000)
    ) {
        prop_assume!(peak(&samples) > 0.0);

        let normalized = normalize::peak(&samples);

        prop_assert!(all_finite(&normalized), "normalization produced NaN or Inf");
        prop_assert!((peak(&normalized) - 1.0).abs() < 1e-5);
        prop_assert!(normalized.iter().all(|s| s.abs() <= 1.0 + 1e-6));
    }

    /// Property: normalization preserves the sign of every sample
    #[test]
    fn normalization_preserves_signs(
        samples in prop::collection::vec(-1000.0f32..1000.0, 1..500)
    ) {
        let normalized = normalize::peak(&samples);

        for (a, b) in samples.iter().zip(&normalized) {
            prop_assert!(a.signum() * b.signum() >= 0.0);
        }
    }

    /// Property: quantization error never exceeds one grid step
    #[test]
    fn quantization_error_is_bounded(
        samples in prop::collection::vec(-1.0f32..1.0, 1..1000),
        levels in 2u32..4096
    ) {
        let quantized = quantize::quantize(&samples, levels).unwrap();
        let bound = 1.0 / (levels - 1) as f32 + 1e-5;

        for (s, q) in samples.iter().zip(&quantized) {
            prop_assert!((s - q).abs() <= bound, "|{} - {}| > {}", s, q, bound);
        }
    }

    /// Property: quantizing twice at the same level count changes nothing
    #[test]
    fn quantization_is_idempotent(
        samples in prop::collection::vec(-1.0f32..1.0, 1..500),
        levels in 2u32..1024
    ) {
        let once = quantize::quantize(&samples, levels).unwrap();
        let twice = quantize::quantize(&once, levels).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Property: decimation by stride k yields ceil(n / k) samples and a
    /// rate consistent with the stride
    #[test]
    fn decimation_length_and_rate(
        samples in prop::collection::vec(-1.0f32..1.0, 0..2000),
        original in 8_000u32..96_000,
        divisor in 2u32..16
    ) {
        let target = original / divisor;
        prop_assume!(target > 0);

        let out = decimate::decimate(
            &samples,
            SampleRate::new(original),
            SampleRate::new(target),
        ).unwrap();

        prop_assert_eq!(out.samples.len(), samples.len().div_ceil(out.stride));
        prop_assert_eq!(out.actual_rate.as_hz(), original / out.stride as u32);
        prop_assert!(out.actual_rate.as_hz() >= target);
    }

    /// Property: channel reduction keeps exactly the frame count
    #[test]
    fn first_channel_length_matches_frames(
        frames in 0usize..500,
        channels in 1u16..8
    ) {
        let samples = vec![0.25f32; frames * usize::from(channels)];
        let reduced = mono::first_channel(&samples, channels);
        prop_assert_eq!(reduced.len(), frames);
    }
}
