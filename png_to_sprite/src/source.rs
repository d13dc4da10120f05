/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Image decoding. Any format the `image` crate understands is accepted and
//! normalized to RGBA8.

use std::path::Path;

use crate::error::{Error, Result};
use crate::grid::PixelGrid;

pub fn load_grid(path: &Path) -> Result<PixelGrid> {
    let img = image::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?
        .decode()
        .map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        "Decoded {:?}: {}x{} {:?}",
        path,
        img.width(),
        img.height(),
        img.color()
    );

    Ok(PixelGrid::from_rgba_image(&img.to_rgba8()))
}

pub fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_png_extension() {
        assert!(has_png_extension(Path::new("turtle.png")));
        assert!(has_png_extension(Path::new("dir/PLAYER.PNG")));
        assert!(!has_png_extension(Path::new("player.jpg")));
        assert!(!has_png_extension(Path::new("png")));
        assert!(!has_png_extension(Path::new("noext")));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_grid(Path::new("definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
    }

    #[test]
    fn test_load_roundtrips_rgba_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sprite.png");
        let img = image::RgbaImage::from_fn(2, 2, |x, y| {
            image::Rgba([(x * 255) as u8, (y * 255) as u8, 7, if x == y { 255 } else { 0 }])
        });
        img.save(&path).unwrap();

        let grid = load_grid(&path).unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 2));
        assert_eq!(
            grid.samples(),
            [[0, 0, 7, 255], [255, 0, 7, 0], [0, 255, 7, 0], [255, 255, 7, 255]]
        );
    }

    #[test]
    fn test_load_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\nnot really").unwrap();

        let err = load_grid(&path).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }
}
