/// Time-domain waveform rendering to PNG
use crate::error::{AudioError, Result};
use bitcrush_core::SampleRate;
use std::path::Path;

/// Canvas width in pixels
const WIDTH: u32 = 1200;
/// Canvas height in pixels
const HEIGHT: u32 = 400;

const BACKGROUND: [u8; 4] = [255, 255, 255, 255];
const AXIS: [u8; 4] = [200, 200, 200, 255];
const TRACE: [u8; 4] = [30, 80, 180, 255];

/// Render an amplitude-vs-time plot of a normalized mono signal as a PNG.
///
/// Each pixel column covers a contiguous bin of samples and is drawn as a
/// vertical bar from the bin's minimum to its maximum amplitude, the way
/// audio editors draw peak waveforms. Amplitude -1.0 maps to the bottom
/// row, +1.0 to the top. The sample rate only matters for the debug log;
/// the horizontal axis is simply the full duration of the buffer.
pub fn render_png(samples: &[f32], rate: SampleRate, path: &Path) -> Result<()> {
    let mut pixels = vec![0u8; (WIDTH * HEIGHT * 4) as usize];
    fill(&mut pixels, BACKGROUND);

    // Zero-amplitude axis
    let mid = HEIGHT / 2;
    for x in 0..WIDTH {
        put(&mut pixels, x, mid, AXIS);
    }

    if !samples.is_empty() {
        for x in 0..WIDTH {
            let start = (x as usize * samples.len()) / WIDTH as usize;
            let end = (((x as usize + 1) * samples.len()) / WIDTH as usize).max(start + 1);
            let bin = &samples[start..end.min(samples.len())];

            let lo = bin.iter().copied().fold(f32::INFINITY, f32::min);
            let hi = bin.iter().copied().fold(f32::NEG_INFINITY, f32::max);

            let y_top = amplitude_to_row(hi);
            let y_bottom = amplitude_to_row(lo);
            for y in y_top..=y_bottom {
                put(&mut pixels, x, y, TRACE);
            }
        }
    }

    let file = std::fs::File::create(path).map_err(AudioError::Io)?;
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), WIDTH, HEIGHT);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| AudioError::Render(format!("PNG encode error: {}", e)))?;
    writer
        .write_image_data(&pixels)
        .map_err(|e| AudioError::Render(format!("PNG encode error: {}", e)))?;

    tracing::debug!(
        samples = samples.len(),
        rate = rate.as_hz(),
        path = %path.display(),
        "waveform rendered"
    );
    Ok(())
}

/// Map a normalized amplitude to a pixel row (top row is +1.0)
fn amplitude_to_row(amplitude: f32) -> u32 {
    let clamped = amplitude.clamp(-1.0, 1.0);
    let t = (1.0 - clamped) / 2.0;
    ((t * (HEIGHT - 1) as f32).round() as u32).min(HEIGHT - 1)
}

fn fill(pixels: &mut [u8], color: [u8; 4]) {
    for px in pixels.chunks_exact_mut(4) {
        px.copy_from_slice(&color);
    }
}

fn put(pixels: &mut [u8], x: u32, y: u32, color: [u8; 4]) {
    let offset = ((y * WIDTH + x) * 4) as usize;
    pixels[offset..offset + 4].copy_from_slice(&color);
}
