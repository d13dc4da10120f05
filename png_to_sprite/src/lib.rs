/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Converts images into RGB565 `uint16_t` arrays that can be compiled
//! straight into a C program.

pub mod color;
pub mod convert;
pub mod encode;
pub mod error;
pub mod grid;
pub mod histogram;
pub mod output;
pub mod report;
pub mod source;

pub use color::{OPACITY_THRESHOLD, Pixel, TRANSPARENT_COLOR, rgb565_to_rgb888, rgb888_to_rgb565};
pub use convert::{Conversion, ConvertOptions, convert_grid, convert_image};
pub use encode::{ELEMENT_TYPE, EncodedSprite, SpriteStats, encode_sprite};
pub use error::{Error, Result};
pub use grid::PixelGrid;
pub use histogram::{ColorCount, color_histogram, top_colors};
