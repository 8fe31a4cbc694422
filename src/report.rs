//! Serializable summary of one render run.

use crate::render::RenderStats;
use serde::Serialize;
use std::path::PathBuf;

/// Written next to the output image when the config asks for a report.
#[derive(Clone, Debug, Serialize)]
pub struct RenderReport {
    /// Annotation file the record was read from.
    pub annotation: PathBuf,
    /// Resolved source image path.
    pub image: PathBuf,
    /// Destination the composite was written to.
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub marker_radius: i32,
    pub palette_len: usize,
    pub lane_count: usize,
    pub stats: RenderStats,
}
