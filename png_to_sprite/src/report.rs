/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Human-readable text about a conversion. Nothing here is printed directly;
//! the binary decides where the lines go.

use crate::color::rgb565_to_rgb888;
use crate::encode::EncodedSprite;
use crate::histogram::ColorCount;

pub fn conversion_summary(sprite: &EncodedSprite) -> Vec<String> {
    vec![
        format!("Size: {}x{} pixels", sprite.width, sprite.height),
        format!("Total pixels: {}", sprite.pixel_count()),
        format!("Array size: {} bytes", sprite.byte_size()),
        format!("Unique colors: {}", sprite.stats.unique_colors),
        format!("Transparent pixels: {}", sprite.stats.transparent_pixels),
    ]
}

/// One ranked line per color, with the color widened back to RGB888.
pub fn histogram_lines(colors: &[ColorCount]) -> Vec<String> {
    colors
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let [r, g, b] = rgb565_to_rgb888(entry.color);
            format!(
                "{}. 0x{:04X} - RGB({:3}, {:3}, {:3}) - {} pixels",
                i + 1,
                entry.color,
                r,
                g,
                b,
                entry.count
            )
        })
        .collect()
}

/// How to hook the array up to an entity in C.
pub fn usage_snippet(sprite: &EncodedSprite) -> Vec<String> {
    vec![
        format!("entity->sprite = {};", sprite.name),
        format!("entity->spriteWidth = {};", sprite.width),
        format!("entity->spriteHeight = {};", sprite.height),
    ]
}

/// The first `max_lines` lines of the array text, plus a trailer counting
/// whatever was cut.
pub fn array_preview(text: &str, max_lines: usize) -> Vec<String> {
    let total = text.lines().count();
    let mut preview: Vec<String> = text.lines().take(max_lines).map(str::to_owned).collect();

    if total > max_lines {
        preview.push(format!("... ({} more lines)", total - max_lines));
    }
    preview
}
