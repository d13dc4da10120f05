/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::encode::EncodedSprite;
use crate::error::{Error, Result};

/// `<name>.c` in the current directory.
pub fn default_output_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{name}.c"))
}

/// Comment block written above the array, ending with a blank line.
pub fn sprite_header(sprite: &EncodedSprite, source: &Path) -> String {
    format!(
        "// Sprite: {}\n\
         // Size: {}x{} pixels\n\
         // Source: {}\n\
         // Format: RGB565 hexadecimal\n\
         // Generated by {} {}\n\n",
        sprite.name,
        sprite.width,
        sprite.height,
        source.display(),
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )
}

/// Write the header and array to `path`.
///
/// The file is staged next to `path` and renamed into place once fully
/// flushed, so a failed write leaves no partial sprite behind.
pub fn write_sprite_file(path: &Path, sprite: &EncodedSprite, source: &Path) -> Result<()> {
    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // An existing sprite keeps its mode; a new one gets the umask default
    let existing = std::fs::metadata(path).ok().map(|meta| meta.permissions());

    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let staged = builder.tempfile_in(dir).map_err(write_err)?;
    if let Some(permissions) = existing {
        staged.as_file().set_permissions(permissions).map_err(write_err)?;
    }

    let mut writer = BufWriter::new(staged);
    writer
        .write_all(sprite_header(sprite, source).as_bytes())
        .and_then(|_| writer.write_all(sprite.text.as_bytes()))
        .map_err(write_err)?;

    let staged = writer.into_inner().map_err(|e| write_err(e.into_error()))?;
    staged.as_file().sync_all().map_err(write_err)?;
    staged.persist(path).map_err(|e| write_err(e.error))?;

    tracing::debug!("Wrote {} bytes to {:?}", sprite.text.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_sprite;
    use crate::grid::PixelGrid;

    fn red_sprite() -> EncodedSprite {
        let grid = PixelGrid::new(2, 1, vec![[255, 0, 0, 255]; 2]).unwrap();
        encode_sprite(&grid, "Red")
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(default_output_path("TurtleSprite"), PathBuf::from("TurtleSprite.c"));
    }

    #[test]
    fn test_sprite_header() {
        let header = sprite_header(&red_sprite(), Path::new("art/red.png"));
        let lines: Vec<_> = header.lines().collect();

        assert_eq!(lines[0], "// Sprite: Red");
        assert_eq!(lines[1], "// Size: 2x1 pixels");
        assert_eq!(lines[2], "// Source: art/red.png");
        assert_eq!(lines[3], "// Format: RGB565 hexadecimal");
        assert!(lines[4].starts_with("// Generated by png_to_sprite"));
        assert!(header.ends_with("\n\n"));
    }

    #[test]
    fn test_write_sprite_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Red.c");
        let sprite = red_sprite();

        write_sprite_file(&path, &sprite, Path::new("red.png")).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("// Sprite: Red\n"));
        assert!(written.ends_with("uint16_t Red[2 * 1] = {\n    0xF800, 0xF800\n};\n"));
        // only the sprite, no staging leftovers
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Red.c");
        std::fs::write(&path, "stale").unwrap();

        write_sprite_file(&path, &red_sprite(), Path::new("red.png")).unwrap();
        assert!(!std::fs::read_to_string(&path).unwrap().contains("stale"));
    }

    #[cfg(unix)]
    #[test]
    fn test_new_sprite_gets_default_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Red.c");
        let plain = dir.path().join("plain.c");
        std::fs::write(&plain, "").unwrap();

        write_sprite_file(&path, &red_sprite(), Path::new("red.png")).unwrap();

        let mode = |p: &Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), mode(&plain));
    }

    #[cfg(unix)]
    #[test]
    fn test_replaced_sprite_keeps_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Red.c");
        std::fs::write(&path, "stale").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();

        write_sprite_file(&path, &red_sprite(), Path::new("red.png")).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[test]
    fn test_write_into_missing_dir_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("Red.c");

        let err = write_sprite_file(&path, &red_sprite(), Path::new("red.png")).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
        assert!(!path.exists());
    }
}
