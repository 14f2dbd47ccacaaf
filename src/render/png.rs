//! PNG output for rendered canvases.

use std::fs::File;
use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tempfile::NamedTempFile;

use crate::error::{IdenticonError, Result};

use super::Canvas;

/// Encode a canvas as PNG bytes.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    canvas
        .as_image()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| IdenticonError::Encode {
            message: format!("Failed to encode PNG: {}", e),
        })?;
    Ok(bytes)
}

/// Write a canvas to a PNG file, returning the path written.
///
/// The image is encoded in memory, written to a temporary file next to
/// `path`, then renamed into place. On failure `path` is left as it was.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<PathBuf> {
    let bytes = encode_png(canvas)?;

    persist(path, |file| file.write_all(&bytes))?;

    log::debug!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(path.to_path_buf())
}

/// Fill a temporary file in the target directory with `write`, then
/// rename it onto `path`. The temporary file is removed on any failure.
fn persist(path: &Path, write: impl FnOnce(&mut File) -> io::Result<()>) -> Result<()> {
    let write_error = |e: io::Error| IdenticonError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_error)?;
    write(temp.as_file_mut()).map_err(write_error)?;
    temp.as_file().sync_all().map_err(write_error)?;
    temp.persist(path).map_err(|e| write_error(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use crate::types::{Colour, PixelRegion, Point};
    use tempfile::tempdir;

    fn sample() -> Canvas {
        let region = PixelRegion::new(Point::new(2, 2), Point::new(48, 48));
        Canvas::render(Colour::rgb(255, 0, 0), &[region])
    }

    #[test]
    fn test_encode_png_signature() {
        let bytes = encode_png(&sample()).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_write_png_readback() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sample.png");

        let written = write_png(&sample(), &path).unwrap();
        assert_eq!(written, path);

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 250);
        assert_eq!(img.height(), 250);
        assert_eq!(img.get_pixel(2, 2).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_write_png_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("sample.png");

        let err = write_png(&sample(), &path).unwrap_err();
        match err {
            IdenticonError::Write { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_write_png_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sample.png");
        fs::write(&path, b"stale").unwrap();

        write_png(&sample(), &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(2, 2).0, [255, 0, 0, 255]);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_failed_write_keeps_previous_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sample.png");
        fs::write(&path, b"keep").unwrap();

        // Fails after some bytes are already written, as a full disk would.
        let err = persist(&path, |file| {
            file.write_all(&[0x89, b'P', b'N', b'G'])?;
            Err(io::Error::new(io::ErrorKind::Other, "File too large"))
        })
        .unwrap_err();

        match err {
            IdenticonError::Write { path: failed, message } => {
                assert_eq!(failed, path);
                assert!(message.contains("File too large"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(fs::read(&path).unwrap(), b"keep");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_failed_write_leaves_no_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fresh.png");

        let result = persist(&path, |_| Err(io::Error::new(io::ErrorKind::Other, "boom")));

        assert!(matches!(result, Err(IdenticonError::Write { .. })));
        assert!(!path.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
