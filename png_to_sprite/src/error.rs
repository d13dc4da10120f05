/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Errors raised while turning an image into a sprite file.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file could not be opened or read.
    #[error("failed to open image {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file was read but is not a decodable image.
    #[error("failed to decode image {path:?}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Sample count does not match the declared dimensions.
    #[error("{width}x{height} grid does not match {actual} samples")]
    GridSizeMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },

    /// The sprite file could not be written.
    #[error("failed to write sprite file {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
