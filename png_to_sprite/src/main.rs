/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use png_to_sprite::{ConvertOptions, convert_grid, report, source, top_colors};

/// Convert an image into an RGB565 C array.
///
/// Pixels with alpha below 128 are written as 0xF8FF.
#[derive(Parser, Debug)]
#[command(name = "png_to_sprite")]
#[command(version, about)]
struct Args {
    /// Input image (PNG, or anything else the decoder understands)
    #[arg(value_name = "IMAGE")]
    input: PathBuf,

    /// Array identifier, used verbatim
    #[arg(value_name = "NAME")]
    name: String,

    /// Output file [default: <NAME>.c]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show the most used colors
    #[arg(long)]
    preview: bool,

    /// Number of colors shown by --preview
    #[arg(
        long,
        default_value = "10",
        value_parser = clap::value_parser!(u32).range(1..=65536)
    )]
    preview_colors: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let args = Args::parse();

    if !source::has_png_extension(&args.input) {
        tracing::warn!("{:?} does not have a .png extension, continuing anyway", args.input);
    }

    tracing::info!("Converting {:?} to sprite {}", args.input, args.name);

    let grid = source::load_grid(&args.input)
        .with_context(|| format!("Failed to load {:?}", args.input))?;

    if args.preview {
        let colors = top_colors(&grid, args.preview_colors as usize);
        tracing::info!("Most used colors:");
        for line in report::histogram_lines(&colors) {
            tracing::info!("  {line}");
        }
    }

    let options = ConvertOptions {
        input: args.input.clone(),
        name: args.name.clone(),
        output: args.output,
    };
    let conversion = convert_grid(grid, &options)
        .with_context(|| format!("Failed to convert {:?}", args.input))?;

    let sprite = &conversion.sprite;
    tracing::info!("Wrote sprite to {:?}", conversion.output);
    for line in report::conversion_summary(sprite) {
        tracing::info!("  {line}");
    }

    tracing::info!("Usage in C:");
    for line in report::usage_snippet(sprite) {
        tracing::info!("  {line}");
    }

    tracing::info!("Array preview:");
    for line in report::array_preview(&sprite.text, 6) {
        tracing::info!("  {line}");
    }

    Ok(())
}
