/// WAV decoder implementation using Symphonia
use crate::error::{AudioError, Result};
use bitcrush_core::{AudioAsset, AudioDecoder as AudioDecoderTrait, SampleFormat, SampleRate};
use std::path::Path;
use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::{Decoder, DecoderOptions};
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// WAV decoder using Symphonia
///
/// Decodes an uncompressed waveform container into an `AudioAsset` holding
/// the *raw* PCM amplitudes as f32: no full-scale division is applied, so a
/// 16-bit sample of -8 arrives as -8.0. Peak normalization is a separate
/// pipeline stage and needs the true magnitudes to work from.
///
/// Unsigned sources are centered around zero (an 8-bit sample of 128 arrives
/// as 0.0) so that peak normalization is not dominated by the DC offset of
/// the unsigned encoding.
///
/// All channels are kept and interleaved; channel reduction is the DSP
/// layer's job, not the decoder's.
pub struct WavDecoder;

impl WavDecoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self
    }

    /// Convert a decoded Symphonia buffer into raw interleaved amplitudes,
    /// appending to `out`
    fn append_raw(decoded: &AudioBufferRef, out: &mut Vec<f32>) {
        match decoded {
            AudioBufferRef::F32(buf) => Self::interleave(buf, out, |s| s),
            AudioBufferRef::F64(buf) => Self::interleave(buf, out, |s| s as f32),
            AudioBufferRef::S8(buf) => Self::interleave(buf, out, f32::from),
            AudioBufferRef::S16(buf) => Self::interleave(buf, out, f32::from),
            AudioBufferRef::S24(buf) => Self::interleave(buf, out, |s| s.inner() as f32),
            AudioBufferRef::S32(buf) => Self::interleave(buf, out, |s| s as f32),
            // Unsigned PCM stores silence at mid-scale; recenter around zero
            AudioBufferRef::U8(buf) => Self::interleave(buf, out, |s| f32::from(s) - 128.0),
            AudioBufferRef::U16(buf) => Self::interleave(buf, out, |s| f32::from(s) - 32_768.0),
            AudioBufferRef::U24(buf) => {
                Self::interleave(buf, out, |s| s.inner() as f32 - 8_388_608.0);
            }
            AudioBufferRef::U32(buf) => {
                Self::interleave(buf, out, |s| s as f32 - 2_147_483_648.0);
            }
        }
    }

    /// Interleave a planar Symphonia buffer, converting each sample with `raw`
    fn interleave<T, F>(
        buf: &symphonia::core::audio::AudioBuffer<T>,
        out: &mut Vec<f32>,
        raw: F,
    ) where
        T: symphonia::core::sample::Sample + Copy,
        F: Fn(T) -> f32,
    {
        let channels = buf.spec().channels.count();
        let frames = buf.frames();
        out.reserve(frames * channels);
        for i in 0..frames {
            for c in 0..channels {
                out.push(raw(buf.chan(c)[i]));
            }
        }
    }

    /// Map the decoded buffer variant to the reported storage format
    fn storage_format(decoded: &AudioBufferRef) -> SampleFormat {
        match decoded {
            AudioBufferRef::U8(_) | AudioBufferRef::S8(_) => SampleFormat::U8,
            AudioBufferRef::U16(_) | AudioBufferRef::S16(_) => SampleFormat::I16,
            AudioBufferRef::U24(_) | AudioBufferRef::S24(_) => SampleFormat::I24,
            AudioBufferRef::U32(_) | AudioBufferRef::S32(_) => SampleFormat::I32,
            AudioBufferRef::F32(_) | AudioBufferRef::F64(_) => SampleFormat::F32,
        }
    }
}

impl Default for WavDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioDecoderTrait for WavDecoder {
    fn decode(&mut self, path: &Path) -> bitcrush_core::Result<AudioAsset> {
        // Check if file exists
        if !path.exists() {
            return Err(AudioError::FileNotFound(path.display().to_string()).into());
        }

        // Open the file
        let file = std::fs::File::open(path).map_err(AudioError::Io)?;

        // Create media source
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        // Create a hint to help the format registry guess the format
        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        // Probe the media source
        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| AudioError::Symphonia(format!("Failed to probe file: {}", e)))?;

        let mut format = probed.format;

        // Find the default track
        let track = format
            .default_track()
            .ok_or_else(|| AudioError::DecodeError("No audio tracks found".to_string()))?;

        let sample_rate = track.codec_params.sample_rate.unwrap_or(44_100);
        let channels = track
            .codec_params
            .channels
            .map(|c| c.count() as u16)
            .unwrap_or(1);
        let track_id = track.id;

        // Create decoder
        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(|e| AudioError::Symphonia(format!("Failed to create decoder: {}", e)))?;

        // Decode all packets and collect into a single buffer
        let mut all_samples = Vec::new();
        let mut storage = None;

        loop {
            // Get the next packet
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(symphonia::core::errors::Error::IoError(e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(e) => {
                    return Err(
                        AudioError::Symphonia(format!("Error reading packet: {}", e)).into()
                    );
                }
            };

            // Skip packets that are not for the default track
            if packet.track_id() != track_id {
                continue;
            }

            // Decode the packet
            let decoded = decoder
                .decode(&packet)
                .map_err(|e| AudioError::DecodeError(format!("Decode error: {}", e)))?;

            if storage.is_none() {
                storage = Some(Self::storage_format(&decoded));
            }
            Self::append_raw(&decoded, &mut all_samples);
        }

        tracing::debug!(
            path = %path.display(),
            samples = all_samples.len(),
            channels,
            sample_rate,
            "decoded waveform asset"
        );

        Ok(AudioAsset::new(
            all_samples,
            SampleRate::new(sample_rate),
            channels,
            storage.unwrap_or(SampleFormat::I16),
        ))
    }

    fn supports_format(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"))
    }
}
