#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod error;
pub mod io;
pub mod palette;
pub mod record;
pub mod render;
pub mod report;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{OverlayError, Result};
pub use crate::record::{load_record, LaneRecord, NO_DETECTION};
pub use crate::render::{draw_lanes, MarkerStyle, RenderStats};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lane_viz::prelude::*;
/// use std::path::Path;
///
/// # fn main() -> lane_viz::Result<()> {
/// let annotation = Path::new("annotation.json");
/// let record = load_record(annotation)?;
///
/// let mut image = load_rgb_image(&record.resolve_image_path(annotation))?;
/// let stats = draw_lanes(&mut image, &record, &DEFAULT_PALETTE, MarkerStyle::default());
/// save_rgb_image(&image, Path::new("out/visual.png"))?;
///
/// println!("drew {} points", stats.points_drawn);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::io::{load_rgb_image, save_rgb_image};
    pub use crate::palette::DEFAULT_PALETTE;
    pub use crate::{draw_lanes, load_record, LaneRecord, MarkerStyle};
}
