//! Glide CLI
//!
//! Inspect slider geometry and replay scripted gestures against the core.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glide_core::{Geometry, Length, SlotLayout, SliderConfig};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod driver;
mod script;

use driver::{ClockMode, ReplayFrame};
use script::Script;

#[derive(Parser)]
#[command(name = "glide")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Glide slider CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the slide grid for a viewport
    Geometry {
        /// Viewport extent along the slider axis, in pixels
        #[arg(short, long)]
        width: f32,

        /// Number of slides
        #[arg(short, long)]
        slides: usize,

        /// Slides visible at once
        #[arg(long, default_value = "1")]
        visible: usize,

        /// Gap between slides (CSS length, e.g. 10px, 1rem, 5%)
        #[arg(short, long, default_value = "10px")]
        gap: String,
    },

    /// Replay a gesture script
    Replay {
        /// Script file (TOML)
        script: PathBuf,

        /// Print every frame as JSON lines
        #[arg(long)]
        json: bool,

        /// Sleep between frames instead of running on a virtual clock
        #[arg(long)]
        realtime: bool,
    },

    /// Print the default slider configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Geometry {
            width,
            slides,
            visible,
            gap,
        } => cmd_geometry(width, slides, visible, &gap),

        Commands::Replay {
            script,
            json,
            realtime,
        } => cmd_replay(&script, json, realtime),

        Commands::Config => cmd_config(),
    }
}

fn cmd_geometry(width: f32, slides: usize, visible: usize, gap: &str) -> Result<()> {
    let gap = Length::parse(gap).with_context(|| format!("Invalid gap '{}'", gap))?;
    let config = SliderConfig::horizontal()
        .visible_count(visible)
        .gap(gap)
        .normalized();

    let geometry = Geometry::new(width, slides, config.visible_count);
    let slot = SlotLayout::new(config.axis, config.visible_count, config.gap, width);

    println!("Slide unit:      {:.2}px", geometry.slide_unit());
    println!("Max translation: {:.2}px", geometry.max_translation());
    println!("Positions:       {}", geometry.step_count() + 1);
    println!("Slot:            {}: {}", slot.css_property(), slot.css_value());
    if let Some(extent) = slot.extent_px {
        println!("Slot extent:     {:.2}px", extent);
    }
    Ok(())
}

fn cmd_replay(path: &Path, json: bool, realtime: bool) -> Result<()> {
    let script = Script::load(path)?;
    info!(
        "Replaying {} ({} events, {} slides in {}x{})",
        path.display(),
        script.events.len(),
        script.viewport.slides,
        script.viewport.width,
        script.viewport.height
    );

    let mode = if realtime {
        ClockMode::Realtime
    } else {
        ClockMode::Virtual
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start runtime")?;

    let mut output_error = None;
    let summary = runtime.block_on(driver::replay(&script, mode, |frame| {
        if json {
            match serde_json::to_string(frame) {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    output_error.get_or_insert(e);
                }
            }
        } else {
            print_frame(frame);
        }
    }));
    if let Some(e) = output_error {
        return Err(e).context("Failed to encode frame");
    }

    info!(
        "Replayed {} events in {}ms, resting on slide {} at {:.1}px",
        summary.events_applied,
        summary.elapsed.as_millis(),
        summary.final_frame.current_slide,
        summary.final_frame.offset.x + summary.final_frame.offset.y
    );
    Ok(())
}

fn print_frame(frame: &ReplayFrame) {
    let f = &frame.frame;
    println!(
        "{:>6}ms  {:<11} {:<9} slide {}/{}  {}  prev={} next={}",
        frame.at_ms,
        frame.label,
        format!("{:?}", f.state),
        f.current_slide,
        f.slide_count,
        f.wrapper.transform_css(),
        f.has_prev,
        f.has_next
    );
}

fn cmd_config() -> Result<()> {
    let config = SliderConfig::default().to_toml_string()?;
    print!("{}", config);
    Ok(())
}
