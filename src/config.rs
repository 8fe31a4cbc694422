//! Runtime configuration for the `lane_viz` binary.

use crate::error::{OverlayError, Result};
use crate::palette::DEFAULT_PALETTE;
use crate::render::MarkerStyle;
use image::Rgb;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct OverlayToolConfig {
    /// Annotation JSON holding `raw_file`, `lanes` and `h_samples`.
    pub annotation: PathBuf,
    pub output: OutputConfig,
    #[serde(default)]
    pub marker: MarkerStyle,
    /// Optional palette override as `[r, g, b]` triples.
    pub palette: Option<Vec<[u8; 3]>>,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Destination image; parent directories are created as needed.
    pub image: PathBuf,
    /// Optional JSON render report.
    pub report_json: Option<PathBuf>,
}

impl OverlayToolConfig {
    /// Palette to render with: the override when present, else the default.
    pub fn palette(&self) -> Vec<Rgb<u8>> {
        match &self.palette {
            Some(colors) => colors.iter().map(|&c| Rgb(c)).collect(),
            None => DEFAULT_PALETTE.to_vec(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<OverlayToolConfig> {
    let data = fs::read_to_string(path).map_err(|e| OverlayError::InvalidConfig {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let config: OverlayToolConfig =
        serde_json::from_str(&data).map_err(|e| OverlayError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if let Some(colors) = &config.palette {
        if colors.is_empty() {
            return Err(OverlayError::InvalidConfig {
                path: path.to_path_buf(),
                reason: "palette override must list at least one color".to_string(),
            });
        }
    }
    if config.marker.radius < 0 {
        return Err(OverlayError::InvalidConfig {
            path: path.to_path_buf(),
            reason: format!("marker radius must be non-negative, got {}", config.marker.radius),
        });
    }

    Ok(config)
}
