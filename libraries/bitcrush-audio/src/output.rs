/// CPAL-based blocking audio output
use crate::error::{AudioError, Result};
use bitcrush_core::{BlockingOutput, SampleRate};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, StreamConfig};
use crossbeam_channel::bounded;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// CPAL audio output
///
/// Implements `BlockingOutput` using CPAL. Unlike a streaming player there
/// is no resident audio thread: each `play` call acquires the default
/// output device, builds a stream at the requested rate, blocks until the
/// buffer has drained, and drops the stream again. Consecutive calls
/// therefore play strictly back to back, which is exactly the demo's
/// top-to-bottom script flow.
///
/// The requested rate is handed to the device as-is; playing the same
/// buffer at half or double the source rate is how the demo produces its
/// slow/low and fast/high renditions. A device that rejects the rate
/// surfaces as a per-stage playback error.
pub struct CpalOutput;

impl CpalOutput {
    /// Create a new CPAL output, verifying that a default device exists
    ///
    /// # Errors
    /// Returns an error if no audio output device is found
    pub fn new() -> Result<Self> {
        let host = cpal::default_host();
        host.default_output_device()
            .ok_or(AudioError::DeviceNotFound)?;
        Ok(Self)
    }

    fn default_device() -> Result<Device> {
        cpal::default_host()
            .default_output_device()
            .ok_or(AudioError::DeviceNotFound)
    }
}

impl BlockingOutput for CpalOutput {
    fn play(&mut self, samples: &[f32], rate: SampleRate) -> bitcrush_core::Result<()> {
        if samples.is_empty() {
            return Ok(());
        }

        let device = Self::default_device()?;

        // Keep the device's preferred channel count and duplicate the mono
        // signal across channels; only the rate is forced to the caller's.
        let channels = device
            .default_output_config()
            .map_err(|e| AudioError::StreamBuild(e.to_string()))?
            .channels();
        let config = StreamConfig {
            channels,
            sample_rate: rate.as_hz(),
            buffer_size: cpal::BufferSize::Default,
        };

        let buffer: Arc<Vec<f32>> = Arc::new(samples.to_vec());
        let position = Arc::new(AtomicUsize::new(0));
        let (done_tx, done_rx) = bounded::<()>(1);
        let (err_tx, err_rx) = bounded::<String>(1);

        let stream = {
            let buffer = Arc::clone(&buffer);
            let position = Arc::clone(&position);
            let done_tx = done_tx.clone();
            let channels = usize::from(channels);

            device
                .build_output_stream(
                    &config,
                    move |data: &mut [f32], _info| {
                        let mut pos = position.load(Ordering::Relaxed);
                        for frame in data.chunks_mut(channels) {
                            let sample = buffer.get(pos).copied().unwrap_or(0.0);
                            for out in frame.iter_mut() {
                                *out = sample;
                            }
                            if pos < buffer.len() {
                                pos += 1;
                            }
                        }
                        position.store(pos, Ordering::Relaxed);
                        if pos >= buffer.len() {
                            // Buffer drained; wake the blocked caller. The
                            // channel holds one token, later sends are no-ops.
                            let _ = done_tx.try_send(());
                        }
                    },
                    move |e| {
                        let _ = err_tx.try_send(e.to_string());
                    },
                    None,
                )
                .map_err(|e| AudioError::StreamBuild(e.to_string()))?
        };

        stream
            .play()
            .map_err(|e| AudioError::Playback(e.to_string()))?;

        tracing::debug!(samples = buffer.len(), rate = rate.as_hz(), "playback started");

        // Block until the callback reports the buffer drained or the
        // stream errors out. No timeout: playback is deliberately blocking.
        crossbeam_channel::select! {
            recv(done_rx) -> _ => {}
            recv(err_rx) -> msg => {
                let msg = msg.unwrap_or_else(|_| "output stream closed".to_string());
                return Err(AudioError::Playback(msg).into());
            }
        }

        // Give the device a moment to flush its last hardware buffer
        // before the stream is dropped.
        std::thread::sleep(std::time::Duration::from_millis(50));
        drop(stream);

        tracing::debug!("playback finished");
        Ok(())
    }
}
