//! Channel reduction
//!
//! Collapses interleaved multi-channel frames to a single channel by
//! selecting channel 0 of every frame. This deliberately discards the
//! other channels; it is a selection, not a mixdown.

/// Select the first channel from an interleaved buffer.
///
/// A mono buffer passes through as a copy. For `channels == 2` and an
/// interleaved layout `[L, R, L, R, ...]` the result is `[L, L, ...]`.
/// Trailing partial frames are dropped.
pub fn first_channel(samples: &[f32], channels: u16) -> Vec<f32> {
    let channels = usize::from(channels.max(1));
    if channels == 1 {
        return samples.to_vec();
    }
    samples
        .chunks_exact(channels)
        .map(|frame| frame[0])
        .collect()
}
