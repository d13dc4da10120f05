/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! RGB888 <-> RGB565 packing and the alpha policy.
//!
//! Layout of a packed color: red in bits 15-11, green in 10-5, blue in 4-0.

/// Written in place of any pixel whose alpha is below [`OPACITY_THRESHOLD`].
///
/// Shares its bit pattern with the opaque color RGB(255, 28, 255) once
/// packed, so the two cannot be told apart in the output array.
pub const TRANSPARENT_COLOR: u16 = 0xF8FF;

/// Alpha values strictly below this are transparent.
pub const OPACITY_THRESHOLD: u8 = 128;

/// Pack an 8-bit-per-channel color by truncating to 5/6/5 bits.
#[inline]
pub const fn rgb888_to_rgb565(r: u8, g: u8, b: u8) -> u16 {
    let r5 = (r >> 3) as u16 & 0x1F;
    let g6 = (g >> 2) as u16 & 0x3F;
    let b5 = (b >> 3) as u16 & 0x1F;

    (r5 << 11) | (g6 << 5) | b5
}

/// Widen a packed color back to 8 bits per channel.
///
/// Low bits are filled by replicating each field's high bits, so 0x1F maps
/// to 255 and 0 maps to 0. Only used to show colors to a human.
#[inline]
pub const fn rgb565_to_rgb888(color: u16) -> [u8; 3] {
    let r5 = ((color >> 11) & 0x1F) as u8;
    let g6 = ((color >> 5) & 0x3F) as u8;
    let b5 = (color & 0x1F) as u8;

    [(r5 << 3) | (r5 >> 2), (g6 << 2) | (g6 >> 4), (b5 << 3) | (b5 >> 2)]
}

/// A single quantized sprite pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {
    Opaque(u16),
    Transparent,
}

impl Pixel {
    /// Classify and pack an `[r, g, b, a]` sample.
    #[inline]
    pub const fn from_sample(sample: [u8; 4]) -> Self {
        let [r, g, b, a] = sample;
        if a < OPACITY_THRESHOLD {
            Pixel::Transparent
        } else {
            Pixel::Opaque(rgb888_to_rgb565(r, g, b))
        }
    }

    /// The value stored in the sprite array.
    #[inline]
    pub const fn packed(self) -> u16 {
        match self {
            Pixel::Opaque(color) => color,
            Pixel::Transparent => TRANSPARENT_COLOR,
        }
    }

    #[inline]
    pub const fn is_transparent(self) -> bool {
        matches!(self, Pixel::Transparent)
    }
}
