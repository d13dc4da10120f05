/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Serializes a [`PixelGrid`] into a C array literal.
//!
//! ```text
//! uint16_t Name[2 * 2] = {
//!     0xF800, 0x07E0,
//!     0x001F, 0xF8FF
//! };
//! ```

use std::fmt::Write;

use hashbrown::HashSet;

use crate::color::Pixel;
use crate::grid::PixelGrid;

/// C type of every array element.
pub const ELEMENT_TYPE: &str = "uint16_t";

const ROW_INDENT: &str = "    ";

/// Counters gathered during encoding. They never affect the emitted text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpriteStats {
    /// Distinct packed values among opaque pixels.
    pub unique_colors: usize,
    pub transparent_pixels: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSprite {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub text: String,
    pub stats: SpriteStats,
}

impl EncodedSprite {
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Size of the array in the compiled program.
    pub fn byte_size(&self) -> u64 {
        self.pixel_count() * size_of::<u16>() as u64
    }
}

/// Encode `grid` as an array named `name`. The name is emitted verbatim.
pub fn encode_sprite(grid: &PixelGrid, name: &str) -> EncodedSprite {
    let (width, height) = (grid.width(), grid.height());

    // "0xHHHH, " per pixel plus indentation per row
    let mut text = String::with_capacity(
        64 + name.len() + grid.len() * 8 + height as usize * (ROW_INDENT.len() + 1),
    );
    let mut colors = HashSet::new();
    let mut transparent_pixels = 0;

    let _ = writeln!(text, "{ELEMENT_TYPE} {name}[{width} * {height}] = {{");

    for (y, row) in grid.rows().enumerate() {
        if y > 0 {
            text.push_str(",\n");
        }
        text.push_str(ROW_INDENT);

        for (x, &sample) in row.iter().enumerate() {
            let pixel = Pixel::from_sample(sample);
            if pixel.is_transparent() {
                transparent_pixels += 1;
            } else {
                colors.insert(pixel.packed());
            }

            if x > 0 {
                text.push_str(", ");
            }
            let _ = write!(text, "0x{:04X}", pixel.packed());
        }
    }

    if !grid.is_empty() {
        text.push('\n');
    }
    text.push_str("};\n");

    EncodedSprite {
        name: name.to_owned(),
        width,
        height,
        text,
        stats: SpriteStats {
            unique_colors: colors.len(),
            transparent_pixels,
        },
    }
}
