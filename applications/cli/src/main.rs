/// Bitcrush - audible tour of naive decimation and bit-depth quantization
use bitcrush_audio::{waveform, CpalOutput, WavDecoder};
use bitcrush_core::{AudioDecoder, BitcrushError, BlockingOutput, SampleRate};
use bitcrush_dsp::{decimate, mono, normalize, quantize};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod report;
mod stages;

use stages::{play_stage, print_outcomes, StageResult};

#[derive(Parser)]
#[command(name = "bitcrush")]
#[command(about = "Load a WAV file, normalize it, and hear what decimation and quantization do to it", long_about = None)]
struct Cli {
    /// Path to the WAV file to process
    input: PathBuf,

    /// Amplitude levels for the quantizer (256 simulates 8-bit storage)
    #[arg(long, default_value_t = bitcrush_dsp::quantize::EIGHT_BIT_LEVELS)]
    levels: u32,

    /// Target rate in Hz for the decimator (default: half the source rate)
    #[arg(long)]
    target_rate: Option<u32>,

    /// Where to write the waveform plot
    #[arg(long, default_value = "waveform.png")]
    plot: PathBuf,

    /// Number of leading samples to print in the report
    #[arg(long, default_value_t = 50)]
    samples_shown: usize,

    /// Skip all audio playback (report and plot only)
    #[arg(long)]
    no_playback: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bitcrush=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    // Decode. This is the one stage whose failure aborts the run: without
    // an asset there is nothing left to demonstrate.
    let mut decoder = WavDecoder::new();
    if !decoder.supports_format(&cli.input) {
        tracing::warn!(path = %cli.input.display(), "input does not look like a WAV file, trying anyway");
    }
    let asset = decoder.decode(&cli.input)?;
    println!("Loaded '{}'.", cli.input.display());

    // Reduce to one channel, then peak-normalize into [-1.0, 1.0]
    let mono_samples = mono::first_channel(&asset.samples, asset.channels);
    let normalized = normalize::peak(&mono_samples);

    report::print_summary(
        &normalized,
        asset.sample_rate,
        asset.format,
        asset.channels,
        cli.samples_shown,
    );

    let mut results: Vec<StageResult> = Vec::new();

    // Plot before any playback starts, as the reference does
    match waveform::render_png(&normalized, asset.sample_rate, &cli.plot) {
        Ok(()) => {
            println!();
            println!("Waveform plot written to '{}'.", cli.plot.display());
            results.push(StageResult::ok("waveform plot"));
        }
        Err(e) => {
            let e: BitcrushError = e.into();
            println!();
            println!("Waveform plot failed: {}", e);
            results.push(StageResult::failed("waveform plot", e));
        }
    }

    if cli.no_playback {
        tracing::info!("playback skipped (--no-playback)");
        print_outcomes(&results);
        return Ok(());
    }

    let rate = asset.sample_rate;
    let mut output: Box<dyn BlockingOutput> = match CpalOutput::new() {
        Ok(output) => Box::new(output),
        Err(e) => {
            let e: BitcrushError = e.into();
            println!();
            println!("No audio output available: {}", e);
            results.push(StageResult::failed("audio output", e));
            print_outcomes(&results);
            return Ok(());
        }
    };

    // 1. Original normalized signal at its own rate
    results.push(play_stage(
        output.as_mut(),
        "original signal",
        &normalized,
        rate,
    ));

    // 2 & 3. Same samples, read out at half and double the rate
    report::narrate_rate_change();
    results.push(play_stage(
        output.as_mut(),
        "half rate (slower, lower)",
        &normalized,
        rate.halved(),
    ));
    results.push(play_stage(
        output.as_mut(),
        "double rate (faster, higher)",
        &normalized,
        rate.doubled(),
    ));

    // 4. Decimated and quantized rendition at the achieved rate
    report::narrate_degradation(cli.levels);
    let target = cli
        .target_rate
        .map_or_else(|| rate.halved(), SampleRate::new);
    match degrade(&normalized, rate, target, cli.levels) {
        Ok((crushed, actual_rate)) => {
            println!(
                "Decimated {} -> {} (requested {}), {} quantization levels.",
                rate, actual_rate, target, cli.levels
            );
            results.push(play_stage(
                output.as_mut(),
                "degraded signal",
                &crushed,
                actual_rate,
            ));
        }
        Err(e) => {
            println!("Degradation failed: {}", e);
            results.push(StageResult::failed("degraded signal", e));
        }
    }

    print_outcomes(&results);
    Ok(())
}

/// Decimate towards `target`, then quantize to `levels` amplitude steps
fn degrade(
    normalized: &[f32],
    rate: SampleRate,
    target: SampleRate,
    levels: u32,
) -> Result<(Vec<f32>, SampleRate), BitcrushError> {
    let decimated = decimate::decimate(normalized, rate, target)?;
    let crushed = quantize::quantize(&decimated.samples, levels)?;
    Ok((crushed, decimated.actual_rate))
}
