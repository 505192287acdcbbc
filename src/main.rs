//! hexweather CLI - procedural terrain banner generator.
//!
//! Renders an animated hex-grid terrain with weather sweeping across it
//! and writes a looping GIF (or a single PNG still).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use hexweather::animation::render_animation;
use hexweather::config::BannerConfig;
use hexweather::export::{
    export_frame_png, export_gif, GifExportOptions, PngExportOptions,
};
use hexweather::render::FrameRenderer;
use hexweather::terrain::generate_terrain;

/// Procedural hex-terrain weather banner generator.
#[derive(Parser)]
#[command(name = "hexweather")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the animated banner.
    Render {
        /// Random seed for reproducible terrain.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Canvas width in pixels.
        #[arg(long)]
        width: Option<u32>,

        /// Canvas height in pixels.
        #[arg(long)]
        height: Option<u32>,

        /// Hex circumradius (center to vertex) in pixels.
        #[arg(long)]
        hex_size: Option<f32>,

        /// Number of animation frames.
        #[arg(short, long)]
        frames: Option<u32>,

        /// Per-frame display duration in milliseconds.
        #[arg(long)]
        delay_ms: Option<u32>,

        /// Title line drawn over the banner.
        #[arg(long)]
        title: Option<String>,

        /// Subtitle line drawn under the title.
        #[arg(long)]
        subtitle: Option<String>,

        /// TOML config file used as the base configuration.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file path.
        #[arg(short, long, default_value = "docs/hero.gif")]
        output: PathBuf,

        /// Export format.
        #[arg(long, value_enum, default_value = "gif")]
        format: OutputFormat,

        /// Frame index to render when exporting a still.
        #[arg(long, default_value = "0")]
        still_frame: u32,
    },

    /// Display information about a banner configuration.
    Info {
        /// Canvas width in pixels.
        #[arg(long)]
        width: Option<u32>,

        /// Canvas height in pixels.
        #[arg(long)]
        height: Option<u32>,

        /// Hex circumradius (center to vertex) in pixels.
        #[arg(long)]
        hex_size: Option<f32>,

        /// Number of animation frames.
        #[arg(short, long)]
        frames: Option<u32>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Looping animated GIF.
    Gif,
    /// Single still frame as PNG.
    Png,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            seed,
            width,
            height,
            hex_size,
            frames,
            delay_ms,
            title,
            subtitle,
            config,
            output,
            format,
            still_frame,
        } => {
            let config = build_config(
                config, seed, width, height, hex_size, frames, delay_ms, title, subtitle,
            );
            run_render(&config, &output, format, still_frame);
        }
        Commands::Info {
            width,
            height,
            hex_size,
            frames,
        } => {
            let config = build_config(
                None, None, width, height, hex_size, frames, None, None, None,
            );
            run_info(&config);
        }
    }
}

/// Builds the effective configuration: an optional TOML file as the base,
/// with CLI flags overriding individual fields.
fn build_config(
    config_file: Option<PathBuf>,
    seed: Option<u64>,
    width: Option<u32>,
    height: Option<u32>,
    hex_size: Option<f32>,
    frames: Option<u32>,
    delay_ms: Option<u32>,
    title: Option<String>,
    subtitle: Option<String>,
) -> BannerConfig {
    let mut config = match config_file {
        Some(path) => BannerConfig::from_file(&path).unwrap_or_else(|e| {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }),
        None => BannerConfig::default(),
    };

    if let Some(seed) = seed {
        config.seed = seed;
    }
    if let Some(width) = width {
        config.width = width;
    }
    if let Some(height) = height {
        config.height = height;
    }
    if let Some(hex_size) = hex_size {
        config.hex_size = hex_size;
    }
    if let Some(frames) = frames {
        config.frames = frames;
    }
    if let Some(delay_ms) = delay_ms {
        config.delay_ms = delay_ms;
    }
    if let Some(title) = title {
        config.title = title;
    }
    if let Some(subtitle) = subtitle {
        config.subtitle = subtitle;
    }

    config.validate().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    config
}

fn run_render(config: &BannerConfig, output: &PathBuf, format: OutputFormat, still_frame: u32) {
    println!("hexweather - procedural banner generator");
    println!("========================================");
    println!("Canvas: {}x{} px", config.width, config.height);
    println!("Grid: {}x{} hexes (size={})", config.cols(), config.rows(), config.hex_size);
    println!("Seed: {}", config.seed);
    println!("Output: {}", output.display());

    let start = Instant::now();

    match format {
        OutputFormat::Gif => {
            println!("\nRendering {} frames...", config.frames);
            let animation = render_animation(config, |done, total| {
                if done % 12 == 0 || done == total {
                    println!("  Frame {}/{}", done, total);
                }
            });

            export_gif(&animation, output, &GifExportOptions::default()).unwrap_or_else(|e| {
                eprintln!("Error exporting GIF: {}", e);
                std::process::exit(1);
            });
        }
        OutputFormat::Png => {
            if still_frame >= config.frames {
                eprintln!(
                    "Error: still frame index {} out of range (frames: {})",
                    still_frame, config.frames
                );
                std::process::exit(1);
            }

            println!("\nRendering still frame {}...", still_frame);
            let grid = generate_terrain(&config.terrain_config());
            let frame = FrameRenderer::new(config).render(&grid, still_frame);

            export_frame_png(&frame, output, &PngExportOptions::default()).unwrap_or_else(|e| {
                eprintln!("Error exporting PNG: {}", e);
                std::process::exit(1);
            });
        }
    }

    let elapsed = start.elapsed();
    let size_kb = std::fs::metadata(output).map(|m| m.len() / 1024).unwrap_or(0);
    println!("\nWrote {} ({} KB) in {:.2?}", output.display(), size_kb, elapsed);
}

fn run_info(config: &BannerConfig) {
    let cols = config.cols();
    let rows = config.rows();
    let cells = (cols as u64) * (rows as u64);
    let frame_bytes = config.width as u64 * config.height as u64 * 4;
    let sequence_bytes = config.frame_sequence_bytes();

    println!("hexweather - Banner Configuration Info");
    println!("======================================");
    println!();
    println!("Canvas: {}x{} px", config.width, config.height);
    println!("Hex size: {} px (pointy-top)", config.hex_size);
    println!();
    println!("Grid:");
    println!("  Columns:   {:>8}", cols);
    println!("  Rows:      {:>8}", rows);
    println!("  Cells:     {:>8}", cells);
    println!();
    println!("Animation:");
    println!("  Frames:    {:>8}", config.frames);
    println!("  Delay:     {:>8} ms/frame", config.delay_ms);
    println!(
        "  Duration:  {:>8.1} s/loop",
        config.frames as f64 * config.delay_ms as f64 / 1000.0
    );
    println!();
    println!("Memory usage (in-memory, RGBA):");
    println!(
        "  Per frame: {:>12} bytes ({:.2} MB)",
        frame_bytes,
        frame_bytes as f64 / 1024.0 / 1024.0
    );
    println!(
        "  Sequence:  {:>12} bytes ({:.2} MB)",
        sequence_bytes,
        sequence_bytes as f64 / 1024.0 / 1024.0
    );
}
