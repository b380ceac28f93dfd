//! End-to-end decode tests against synthesized WAV fixtures

use bitcrush_audio::WavDecoder;
use bitcrush_core::{AudioDecoder, SampleFormat};
use hound::{WavSpec, WavWriter};
use std::path::Path;

/// Write a stereo 16-bit sine fixture
fn create_test_wav(
    path: &Path,
    sample_rate: u32,
    duration_secs: f32,
    frequency: f32,
) -> anyhow::Result<()> {
    let spec = WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;

    let num_samples = (sample_rate as f32 * duration_secs) as usize;
    for i in 0..num_samples {
        let t = i as f32 / sample_rate as f32;
        let sample = (t * frequency * 2.0 * std::f32::consts::PI).sin();
        let amplitude = (i16::MAX as f32 * 0.5 * sample) as i16;
        writer.write_sample(amplitude)?;
        writer.write_sample(amplitude)?;
    }

    writer.finalize()?;
    Ok(())
}

#[test]
fn decodes_stereo_16bit_wav() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("tone.wav");
    create_test_wav(&path, 8_000, 1.0, 440.0)?;

    let mut decoder = WavDecoder::new();
    let asset = decoder.decode(&path)?;

    assert_eq!(asset.channels, 2);
    assert_eq!(asset.sample_rate.as_hz(), 8_000);
    assert_eq!(asset.format, SampleFormat::I16);
    assert_eq!(asset.frames(), 8_000);
    assert!((asset.duration_secs() - 1.0).abs() < 0.01);
    Ok(())
}

#[test]
fn decoded_amplitudes_are_raw_not_full_scale() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("tone.wav");
    create_test_wav(&path, 8_000, 0.5, 440.0)?;

    let mut decoder = WavDecoder::new();
    let asset = decoder.decode(&path)?;

    // Fixture peaks near i16::MAX / 2; raw decode must preserve that
    // magnitude instead of pre-scaling into [-1, 1]
    let peak = asset.samples.iter().map(|s| s.abs()).fold(0.0f32, f32::max);
    assert!(peak > 1_000.0, "peak {peak} looks pre-normalized");
    assert!(peak <= f32::from(i16::MAX));
    Ok(())
}

#[test]
fn channels_are_interleaved_not_dropped() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("lr.wav");

    // Left channel carries a ramp, right channel is silent
    let spec = WavSpec {
        channels: 2,
        sample_rate: 8_000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = WavWriter::create(&path, spec)?;
    for i in 0i16..100 {
        writer.write_sample(i + 1)?;
        writer.write_sample(0i16)?;
    }
    writer.finalize()?;

    let mut decoder = WavDecoder::new();
    let asset = decoder.decode(&path)?;

    assert_eq!(asset.len(), 200);
    assert_eq!(asset.samples[0], 1.0);
    assert_eq!(asset.samples[1], 0.0);
    assert_eq!(asset.samples[2], 2.0);
    assert_eq!(asset.samples[3], 0.0);
    Ok(())
}

#[test]
fn decode_garbage_file_returns_decode_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("not_audio.wav");
    std::fs::write(&path, b"this is not a waveform container")?;

    let mut decoder = WavDecoder::new();
    let err = decoder.decode(&path).unwrap_err();
    assert!(matches!(err, bitcrush_core::BitcrushError::Decode(_)));
    Ok(())
}
