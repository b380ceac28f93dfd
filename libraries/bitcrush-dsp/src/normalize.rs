//! Peak normalization
//!
//! Rescales a buffer so its maximum absolute amplitude is exactly 1.0.
//! This is peak normalization: it guarantees no clipping but says nothing
//! about perceived loudness (no RMS, no LUFS).

/// Normalize a buffer to the [-1.0, 1.0] range based on its measured peak.
///
/// Normalization is unconditional on the measured peak regardless of how
/// the source stored its samples; an input whose peak is already 1.0 comes
/// back unchanged. A silent buffer (peak == 0) stays all-zero rather than
/// dividing by zero.
pub fn peak(samples: &[f32]) -> Vec<f32> {
    let peak = peak_amplitude(samples);
    if peak == 0.0 {
        return vec![0.0; samples.len()];
    }
    samples.iter().map(|s| s / peak).collect()
}

/// Maximum absolute amplitude over the buffer
pub fn peak_amplitude(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0f32, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_pcm_amplitudes_are_scaled_by_peak() {
        // Raw 16-bit style amplitudes: peak = 8
        let normalized = peak(&[2.0, -8.0, 4.0]);
        assert_eq!(normalized, vec![0.25, -1.0, 0.5]);
    }

    #[test]
    fn already_normalized_buffer_is_unchanged() {
        let input = [1.0, -0.5, 0.0, 0.25];
        assert_eq!(peak(&input), input.to_vec());
    }

    #[test]
    fn silent_input_stays_silent() {
        let normalized = peak(&[0.0, 0.0, 0.0]);
        assert_eq!(normalized, vec![0.0, 0.0, 0.0]);
        assert!(normalized.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn output_peak_is_one() {
        let normalized = peak(&[0.1, -0.3, 0.2]);
        let peak_out = peak_amplitude(&normalized);
        assert!((peak_out - 1.0).abs() < 1e-6);
    }

    #[test]
    fn signs_are_preserved() {
        let input = [3.0, -7.0, 0.0, 5.0];
        let normalized = peak(&input);
        for (a, b) in input.iter().zip(&normalized) {
            assert!(a.signum() * b.signum() >= 0.0);
            assert_eq!(*a == 0.0, *b == 0.0);
        }
    }

    #[test]
    fn empty_buffer() {
        assert!(peak(&[]).is_empty());
    }
}
