use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use northlight::imaging;
use northlight::models::ReduceConfig;
use northlight::services::FramePipeline;
use palette_reducer::palette::preload;
use palette_reducer::{ColorMetric, DitherAlgorithm, PaletteAnalyzer, PaletteTable, Raster};

#[derive(Parser)]
#[command(name = "northlight")]
#[command(about = "Northlight - palette reduction and APNG export for pixel art")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce one PNG to a palette
    Reduce {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        options: PaletteArgs,
    },
    /// Reduce PNG frames to one shared palette and write an animated PNG
    Animate {
        /// Output APNG file
        #[arg(short, long)]
        output: PathBuf,

        /// Input PNG frames, in playback order
        #[arg(required = true)]
        frames: Vec<PathBuf>,

        /// Frames per second
        #[arg(long)]
        fps: Option<u16>,

        /// Write rows bottom-up
        #[arg(long)]
        flip_y: bool,

        /// zlib level, 0 (store) to 9 (smallest)
        #[arg(long)]
        compression: Option<u32>,

        /// Encode the frames as they are, without palette reduction
        #[arg(long)]
        no_reduce: bool,

        #[command(flatten)]
        options: PaletteArgs,
    },
    /// Print the palette analyzed from a PNG
    Analyze {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Minimum distance between picked colors when over budget
        #[arg(long)]
        threshold: Option<f64>,

        /// Largest palette to produce (2-256)
        #[arg(long)]
        max_colors: Option<usize>,

        /// Color metric for the lookup table (basic, lab, lab-rough, ycwcm)
        #[arg(long)]
        metric: Option<String>,

        /// Also write the palette's lookup table to this file
        #[arg(long)]
        preload: Option<PathBuf>,

        /// Print JSON instead of one color per line
        #[arg(long)]
        json: bool,
    },
    /// Build a lookup table for a palette and save it for fast loading
    Preload {
        /// Palette as comma-separated hex colors (e.g. "#00000000,#000,#FFF")
        #[arg(short, long)]
        palette: String,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Color metric (basic, lab, lab-rough, ycwcm)
        #[arg(long)]
        metric: Option<String>,

        /// Write a Rust string literal instead of the raw table bytes
        #[arg(long)]
        rust: bool,
    },
}

/// Palette and dithering options shared by `reduce` and `animate`
#[derive(Args, Debug, Default)]
struct PaletteArgs {
    /// YAML config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Palette as comma-separated hex colors (e.g. "#00000000,#000,#FFF")
    #[arg(short, long)]
    palette: Option<String>,

    /// Dither algorithm (solid, sierra-lite, floyd-steinberg, burkes, noise,
    /// roberts, roberts-mul, roberts-edit, shader-mimic)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Dither strength, 1.0 is normal and 0 disables dithering
    #[arg(short, long)]
    strength: Option<f32>,

    /// Color metric (basic, lab, lab-rough, ycwcm)
    #[arg(short, long)]
    metric: Option<String>,
}

impl PaletteArgs {
    /// Load the config file if given, then apply flag overrides.
    fn resolve(&self) -> anyhow::Result<ReduceConfig> {
        let mut config = match &self.config {
            Some(path) => ReduceConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ReduceConfig::default(),
        };
        if let Some(palette) = &self.palette {
            config.palette = split_palette(palette);
        }
        if let Some(algorithm) = &self.algorithm {
            config.algorithm = algorithm.clone();
        }
        if let Some(strength) = self.strength {
            config.dither_strength = strength;
        }
        if let Some(metric) = &self.metric {
            config.metric = metric.clone();
        }
        config.validate().context("Invalid settings")?;
        Ok(config)
    }
}

fn split_palette(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Reduce {
            input,
            output,
            options,
        }) => {
            init_tracing();
            run_reduce_command(&input, &output, &options)
        }
        Some(Commands::Animate {
            output,
            frames,
            fps,
            flip_y,
            compression,
            no_reduce,
            options,
        }) => {
            init_tracing();
            run_animate_command(
                &output,
                &frames,
                fps,
                flip_y,
                compression,
                no_reduce,
                &options,
            )
        }
        Some(Commands::Analyze {
            input,
            threshold,
            max_colors,
            metric,
            preload,
            json,
        }) => {
            init_tracing();
            run_analyze_command(&input, threshold, max_colors, metric, preload, json)
        }
        Some(Commands::Preload {
            palette,
            output,
            metric,
            rust,
        }) => {
            init_tracing();
            run_preload_command(&palette, &output, metric, rust)
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "northlight=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Reduce a single PNG
fn run_reduce_command(input: &Path, output: &Path, args: &PaletteArgs) -> anyhow::Result<()> {
    let config = args.resolve()?;
    let mut image = imaging::load_png(input)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    let mut pipeline = FramePipeline::new(config, Some(&image))?;
    pipeline.reduce_frame(&mut image);
    pipeline
        .write_still(output, &image)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Reduced {} to {} colors -> {}",
        input.display(),
        pipeline.palette().len(),
        output.display()
    );
    Ok(())
}

/// Reduce frames to a shared palette and write an APNG
fn run_animate_command(
    output: &Path,
    frames: &[PathBuf],
    fps: Option<u16>,
    flip_y: bool,
    compression: Option<u32>,
    no_reduce: bool,
    args: &PaletteArgs,
) -> anyhow::Result<()> {
    let mut config = args.resolve()?;
    if let Some(fps) = fps {
        config.fps = fps;
    }
    if flip_y {
        config.flip_y = true;
    }
    if let Some(level) = compression {
        config.compression = level;
    }
    config.validate().context("Invalid settings")?;

    let mut images = imaging::load_frames(frames).context("Failed to load frames")?;

    // All frames share the palette analyzed from the first one
    let sample = if no_reduce {
        None
    } else {
        images.first().map(|frame| frame as &dyn Raster)
    };
    let mut pipeline = FramePipeline::new(config, sample)?;
    if !no_reduce {
        pipeline.reduce_all(&mut images);
    }
    pipeline
        .write_animation(output, &images)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Wrote {} frames at {} fps -> {}",
        images.len(),
        pipeline.config().fps,
        output.display()
    );
    Ok(())
}

/// Analyze a PNG and print its palette
fn run_analyze_command(
    input: &Path,
    threshold: Option<f64>,
    max_colors: Option<usize>,
    metric: Option<String>,
    preload_path: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let image = imaging::load_png(input)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    let mut analyzer = PaletteAnalyzer::new();
    if let Some(threshold) = threshold {
        analyzer = analyzer.threshold(threshold);
    }
    if let Some(max_colors) = max_colors {
        analyzer = analyzer.max_colors(max_colors);
    }
    if let Some(metric) = metric {
        analyzer = analyzer.metric(metric.parse::<ColorMetric>()?);
    }

    let table = analyzer.analyze(&image);
    let colors: Vec<String> = table.colors().iter().map(|c| c.to_string()).collect();

    if json {
        let report = serde_json::json!({
            "input": input.display().to_string(),
            "count": colors.len(),
            "transparent": table.has_transparent(),
            "colors": colors,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for color in &colors {
            println!("{color}");
        }
    }

    if let Some(path) = preload_path {
        write_preload(&path, &table, false)?;
    }
    Ok(())
}

/// Build a table for an explicit palette and save it
fn run_preload_command(
    palette: &str,
    output: &Path,
    metric: Option<String>,
    rust: bool,
) -> anyhow::Result<()> {
    let config = ReduceConfig {
        palette: split_palette(palette),
        metric: metric.unwrap_or_else(|| ColorMetric::default().to_string()),
        ..ReduceConfig::default()
    };
    config.validate().context("Invalid palette")?;
    let table = PaletteTable::new(&config.palette_colors()?, config.color_metric()?);
    write_preload(output, &table, rust)?;
    println!(
        "Wrote lookup table for {} colors -> {}",
        table.len(),
        output.display()
    );
    Ok(())
}

fn write_preload(path: &Path, table: &PaletteTable, rust: bool) -> anyhow::Result<()> {
    // Plain output is the ISO-8859-1 text itself: one byte per entry
    let result = if rust {
        std::fs::write(path, preload::to_rust_literal(&table.mapping()[..]))
    } else {
        std::fs::write(path, &table.mapping()[..])
    };
    result.with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), colors = table.len(), "Wrote preload table");
    Ok(())
}

/// Show version and usage
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Northlight v{VERSION}");
    println!("Palette reduction and APNG export for pixel art\n");

    println!("Dither algorithms:");
    for algorithm in DitherAlgorithm::ALL {
        let marker = if algorithm == DitherAlgorithm::default() {
            " (default)"
        } else {
            ""
        };
        println!("  {algorithm}{marker}");
    }

    println!("\nColor metrics:");
    for metric in ColorMetric::ALL {
        let marker = if metric == ColorMetric::default() {
            " (default)"
        } else {
            ""
        };
        println!("  {metric}{marker}");
    }

    println!("\nCommands:");
    println!("  northlight reduce    Reduce a PNG to a palette");
    println!("  northlight animate   Reduce frames and write an animated PNG");
    println!("  northlight analyze   Print the palette of a PNG");
    println!("  northlight preload   Save a palette's lookup table");
    println!("\nRun 'northlight --help' for more details.");
}
