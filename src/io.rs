//! I/O helpers for images, directories, and JSON reports.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned 8-bit RGB buffer.
//! - `save_rgb_image`: encode a buffer to the format implied by the path's
//!   extension, writing atomically via a temp sibling plus rename.
//! - `ensure_dirs`: idempotently create any number of directories.
//! - `write_json_file`: pretty-print a serializable value to disk.

use crate::error::{OverlayError, Result};
use image::{ImageFormat, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Load an image from disk and convert to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| match e {
        image::ImageError::IoError(source) => OverlayError::ImageOpen {
            path: path.to_path_buf(),
            source,
        },
        source => OverlayError::ImageDecode {
            path: path.to_path_buf(),
            source,
        },
    })?;
    Ok(img.into_rgb8())
}

/// Save an RGB buffer to `path` in the format implied by its extension.
///
/// Parent directories are created as needed. The buffer is encoded to a
/// temp sibling first and renamed over the destination, so a failed write
/// leaves no partial file behind.
pub fn save_rgb_image(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dirs(&[parent])?;
        }
    }

    let format = ImageFormat::from_path(path).map_err(|e| OverlayError::WriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let tmp = temp_sibling(path);
    image.save_with_format(&tmp, format).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        OverlayError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        OverlayError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })
}

/// Create zero or more directories, tolerating pre-existing ones.
///
/// Missing ancestors are created too. Calling this twice on the same paths
/// is a no-op.
pub fn ensure_dirs<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path).map_err(|e| OverlayError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dirs(&[parent])?;
        }
    }
    let json = serde_json::to_string_pretty(value).map_err(|e| OverlayError::WriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    fs::write(path, json).map_err(|e| OverlayError::WriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
