/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use hashbrown::HashMap;

use crate::color::Pixel;
use crate::grid::PixelGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCount {
    pub color: u16,
    pub count: usize,
}

/// Frequency of every packed color among the opaque pixels, most frequent
/// first.
///
/// Colors with equal counts stay in the order they were first seen in the
/// row-major scan. That tie order is incidental and callers should not rely
/// on it.
pub fn color_histogram(grid: &PixelGrid) -> Vec<ColorCount> {
    let mut index = HashMap::<u16, usize>::new();
    let mut counts = Vec::<ColorCount>::new();

    for pixel in grid.pixels() {
        let Pixel::Opaque(color) = pixel else {
            continue;
        };

        match index.get(&color) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(color, counts.len());
                counts.push(ColorCount { color, count: 1 });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The `limit` most frequent colors of [`color_histogram`].
pub fn top_colors(grid: &PixelGrid, limit: usize) -> Vec<ColorCount> {
    let mut counts = color_histogram(grid);
    counts.truncate(limit);
    counts
}
