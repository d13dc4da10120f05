/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::path::PathBuf;

use crate::encode::{EncodedSprite, encode_sprite};
use crate::error::Result;
use crate::grid::PixelGrid;
use crate::output::{default_output_path, write_sprite_file};
use crate::source::load_grid;

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    /// Array identifier, also the default output file stem.
    pub name: String,
    /// Defaults to `<name>.c`.
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Conversion {
    /// Decoded input, kept for the color preview.
    pub grid: PixelGrid,
    pub sprite: EncodedSprite,
    pub output: PathBuf,
}

/// Decode, encode and write one image. Nothing is written unless every
/// step succeeds.
pub fn convert_image(options: &ConvertOptions) -> Result<Conversion> {
    let grid = load_grid(&options.input)?;
    convert_grid(grid, options)
}

/// Encode and write an already decoded image.
pub fn convert_grid(grid: PixelGrid, options: &ConvertOptions) -> Result<Conversion> {
    tracing::debug!("Encoding {}x{} grid as {}", grid.width(), grid.height(), options.name);

    let sprite = encode_sprite(&grid, &options.name);

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&options.name));
    write_sprite_file(&output, &sprite, &options.input)?;

    Ok(Conversion {
        grid,
        sprite,
        output,
    })
}
