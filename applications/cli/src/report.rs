//! Console reporting for the demo run
//!
//! The user-facing report goes to stdout with `println!`; diagnostics go
//! through `tracing`. The narration lines are deliberately short: they
//! state what each stage is about to demonstrate, not a DSP lecture.

use bitcrush_core::{SampleFormat, SampleRate};

/// Print the post-normalization summary of the loaded signal
pub fn print_summary(
    samples: &[f32],
    rate: SampleRate,
    format: SampleFormat,
    channels: u16,
    shown: usize,
) {
    println!("--- Signal vector (first {} samples) ---", shown.min(samples.len()));
    println!("{}", format_leading_samples(samples, shown));
    println!();
    println!("Total samples:   {}", samples.len());
    println!("Sample rate:     {}", rate);
    println!("Source format:   {} ({} channel{})", format, channels, plural(channels));
    println!("Duration:        {} s", format_duration_secs(samples.len(), rate));
}

/// Format the first `shown` samples, eight per line
pub fn format_leading_samples(samples: &[f32], shown: usize) -> String {
    if samples.is_empty() {
        return "[]".to_string();
    }
    let mut out = String::from("[");
    for (i, s) in samples.iter().take(shown).enumerate() {
        if i > 0 {
            out.push_str(if i % 8 == 0 { ",\n " } else { ", " });
        }
        out.push_str(&format!("{s:.6}"));
    }
    if samples.len() > shown {
        out.push_str(", ...");
    }
    out.push(']');
    out
}

/// Duration to two decimal places, as the reference reports it
pub fn format_duration_secs(sample_count: usize, rate: SampleRate) -> String {
    let secs = sample_count as f64 / f64::from(rate.as_hz());
    format!("{secs:.2}")
}

/// Narration before the rate-modified playbacks
pub fn narrate_rate_change() {
    println!();
    println!("--- Changing the playback sample rate ---");
    println!("The same samples read out at a lower rate stretch over more time:");
    println!("the signal plays slower and sounds lower. At a higher rate it");
    println!("plays faster and sounds higher.");
}

/// Narration before the degraded playback
pub fn narrate_degradation(levels: u32) {
    println!();
    println!("--- Degrading the signal (decimation + quantization) ---");
    println!("Decimation keeps only every Nth sample with no anti-alias filter,");
    println!("so high-frequency content folds back into the audible band.");
    println!("Quantization to {levels} amplitude levels rounds every sample onto a");
    println!("coarse grid, adding deterministic distortion.");
}

fn plural(n: u16) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
