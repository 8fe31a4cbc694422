//! TuSimple-style lane annotation records.

use crate::error::{OverlayError, Result};
use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Sentinel x-value marking "no detection at this height sample".
pub const NO_DETECTION: i32 = -2;

/// One annotation record: a source image plus per-lane x-coordinates sampled
/// at shared row heights.
///
/// The k-th entry of every lane pairs positionally with the k-th entry of
/// `h_samples`. Entries equal to [`NO_DETECTION`] carry no point.
#[derive(Clone, Debug, Deserialize)]
pub struct LaneRecord {
    /// Path to the source image, absolute or relative to the annotation file.
    #[serde(alias = "image_reference")]
    pub raw_file: String,
    /// Per-lane x-coordinates, one inner list per lane.
    pub lanes: Vec<Vec<i32>>,
    /// Row heights (y-coordinates) shared by all lanes.
    pub h_samples: Vec<i32>,
}

/// Reads and parses an annotation JSON file.
///
/// Any read or parse failure, including missing required fields, surfaces as
/// [`OverlayError::MalformedRecord`] before any image I/O happens.
pub fn load_record(path: &Path) -> Result<LaneRecord> {
    let data = fs::read_to_string(path).map_err(|e| OverlayError::MalformedRecord {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let record: LaneRecord =
        serde_json::from_str(&data).map_err(|e| OverlayError::MalformedRecord {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    for (i, lane) in record.lanes.iter().enumerate() {
        if lane.len() != record.h_samples.len() {
            warn!(
                "lane {i}: {} x-values for {} height samples; unpaired entries are ignored",
                lane.len(),
                record.h_samples.len()
            );
        }
    }

    Ok(record)
}

impl LaneRecord {
    /// Valid `(x, y)` points of lane `index`: positional pairing against
    /// `h_samples` with sentinel entries dropped.
    ///
    /// Pairing stops at the shorter of the two lists, so a lane can never
    /// yield more points than there are height samples.
    pub fn lane_points(&self, index: usize) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.lanes[index]
            .iter()
            .zip(self.h_samples.iter())
            .filter(|&(&x, _)| x != NO_DETECTION)
            .map(|(&x, &y)| (x, y))
    }

    /// Resolves `raw_file` against the directory containing the annotation
    /// file. Absolute paths pass through untouched.
    pub fn resolve_image_path(&self, annotation_path: &Path) -> PathBuf {
        let raw = Path::new(&self.raw_file);
        if raw.is_absolute() {
            return raw.to_path_buf();
        }
        match annotation_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(raw),
            _ => raw.to_path_buf(),
        }
    }
}
