//! Replays a recorded hand-tracking stream through the pointer pipeline and
//! prints the resulting control intents.

use anyhow::{Context, Result};
use clap::Parser;
use hand_pointer::{
    config::{Config, EXAMPLE_CONFIG},
    control_mapper::{IntentSink, LogSink},
    filters::FilterKind,
    pipeline::HandPipeline,
    replay::load_recording,
};
use log::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Recorded frame stream (YAML), `-` for stdin
    #[arg(default_value = "-")]
    input: String,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Filter override (none, sma[:w], dma[:w], mdma[:w], exp[:alpha], dexp[:alpha[:gamma]])
    #[arg(short, long)]
    filter: Option<String>,

    /// Clamp pointer coordinates into [0, 65535] before printing
    #[arg(long)]
    clamp: bool,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    // Load configuration if provided
    let config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    let mut pipeline = HandPipeline::from_config(&config).context("Invalid configuration")?;

    if let Some(filter) = &args.filter {
        let kind: FilterKind = filter.parse().with_context(|| format!("Invalid filter '{filter}'"))?;
        pipeline.set_filter_kind(kind)?;
    }
    info!("Using filter {}", pipeline.filter_kind());

    let frames = load_recording(&args.input).with_context(|| format!("Failed to read {}", args.input))?;
    info!("Replaying {} frame(s)", frames.len());

    let mut sink = LogSink;
    let mut intent_count = 0usize;
    let mut absent = 0usize;
    for (index, frame) in frames.iter().enumerate() {
        if frame.is_none() {
            absent += 1;
        }
        let output = pipeline.process_frame(frame.as_ref());
        for intent in output.intents {
            let intent = if args.clamp { intent.clamped() } else { intent };
            sink.submit(intent)?;
            println!("frame {index}: {intent}");
            intent_count += 1;
        }
    }

    info!(
        "Processed {} frame(s) ({} without a tracked body), emitted {} intent(s)",
        pipeline.frames_processed(),
        absent,
        intent_count
    );

    Ok(())
}
