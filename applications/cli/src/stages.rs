//! Per-stage result collection
//!
//! The reference handles every playback with its own try/report block and
//! keeps going after a failure. Here that pattern is an explicit value: each
//! side-effecting stage produces a `StageResult`, the caller collects them
//! and prints one summary at the end. Only decode failures abort the run.

use bitcrush_core::{BitcrushError, BlockingOutput, SampleRate};

/// Outcome of one side-effecting stage of the demo
pub struct StageResult {
    /// Human-readable stage name
    pub name: String,
    /// What happened
    pub outcome: Result<(), BitcrushError>,
}

impl StageResult {
    pub fn ok(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: Ok(()),
        }
    }

    pub fn failed(name: impl Into<String>, err: BitcrushError) -> Self {
        Self {
            name: name.into(),
            outcome: Err(err),
        }
    }
}

/// Play one buffer to completion as a recorded stage.
///
/// The device is acquired inside `output.play` and released when it
/// returns, so a failure here leaves nothing held for the next stage.
pub fn play_stage(
    output: &mut dyn BlockingOutput,
    name: &str,
    samples: &[f32],
    rate: SampleRate,
) -> StageResult {
    println!();
    println!("--- Playing: {} ({}) ---", name, rate);
    match output.play(samples, rate) {
        Ok(()) => {
            println!("Finished: {}", name);
            StageResult::ok(name)
        }
        Err(e) => {
            tracing::warn!(stage = name, error = %e, "playback stage failed");
            println!("Playback failed for {}: {}", name, e);
            StageResult::failed(name, e)
        }
    }
}

/// Print the collected stage outcomes
pub fn print_outcomes(results: &[StageResult]) {
    println!();
    println!("--- Stage summary ---");
    for result in results {
        match &result.outcome {
            Ok(()) => println!("  ok      {}", result.name),
            Err(e) => println!("  FAILED  {} ({})", result.name, e),
        }
    }
}
