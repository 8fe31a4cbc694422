//! Overlay rendering of lane points onto an RGB image.

use crate::palette;
use crate::record::LaneRecord;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;
use log::debug;
use serde::{Deserialize, Serialize};

/// Marker appearance options.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    /// Radius of the filled circular marker in pixels.
    pub radius: i32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self { radius: 3 }
    }
}

/// Draw counters for a single lane.
#[derive(Clone, Debug, Default, Serialize)]
pub struct LaneStats {
    pub lane: usize,
    pub points_drawn: usize,
    /// Sentinel entries excluded from the point set.
    pub points_skipped: usize,
    /// Points whose center fell outside the image.
    pub points_clipped: usize,
}

/// Aggregate counters for one render pass.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RenderStats {
    pub lanes: Vec<LaneStats>,
    pub points_drawn: usize,
    pub points_skipped: usize,
    pub points_clipped: usize,
}

/// Draws every valid lane point onto `image`, mutating it in place.
///
/// Lane `i` uses `colors[i % colors.len()]`. A point whose center lies
/// outside the image is skipped and counted; a marker that merely overlaps
/// the border is clipped to the canvas. Pixels are overwritten directly,
/// without blending.
pub fn draw_lanes(
    image: &mut RgbImage,
    record: &LaneRecord,
    colors: &[Rgb<u8>],
    style: MarkerStyle,
) -> RenderStats {
    let width = image.width() as i32;
    let height = image.height() as i32;

    let mut stats = RenderStats::default();
    for i in 0..record.lanes.len() {
        let color = palette::lane_color(colors, i);
        let paired = record.lanes[i].len().min(record.h_samples.len());

        let mut lane_stats = LaneStats {
            lane: i,
            ..Default::default()
        };
        for (x, y) in record.lane_points(i) {
            if x < 0 || x >= width || y < 0 || y >= height {
                debug!("lane {i}: point ({x}, {y}) outside {width}x{height} image, skipped");
                lane_stats.points_clipped += 1;
                continue;
            }
            draw_filled_circle_mut(image, (x, y), style.radius, color);
            lane_stats.points_drawn += 1;
        }
        lane_stats.points_skipped = paired - lane_stats.points_drawn - lane_stats.points_clipped;

        stats.points_drawn += lane_stats.points_drawn;
        stats.points_skipped += lane_stats.points_skipped;
        stats.points_clipped += lane_stats.points_clipped;
        stats.lanes.push(lane_stats);
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::DEFAULT_PALETTE;

    fn record(lanes: Vec<Vec<i32>>, h_samples: Vec<i32>) -> LaneRecord {
        LaneRecord {
            raw_file: "frame.png".to_string(),
            lanes,
            h_samples,
        }
    }

    #[test]
    fn draws_one_marker_per_valid_point() {
        let rec = record(vec![vec![10, -2, 30], vec![5, 15, -2]], vec![10, 20, 30]);
        let mut image = RgbImage::new(64, 64);

        let stats = draw_lanes(&mut image, &rec, &DEFAULT_PALETTE, MarkerStyle::default());

        assert_eq!(stats.points_drawn, 4);
        assert_eq!(stats.points_skipped, 2);
        assert_eq!(stats.points_clipped, 0);
        assert_eq!(image.get_pixel(10, 10), &DEFAULT_PALETTE[0]);
        assert_eq!(image.get_pixel(30, 30), &DEFAULT_PALETTE[0]);
        assert_eq!(image.get_pixel(5, 10), &DEFAULT_PALETTE[1]);
        assert_eq!(image.get_pixel(15, 20), &DEFAULT_PALETTE[1]);
    }

    #[test]
    fn all_sentinel_lane_draws_nothing() {
        let rec = record(vec![vec![-2, -2, -2]], vec![10, 20, 30]);
        let mut image = RgbImage::new(16, 16);
        let before = image.clone();

        let stats = draw_lanes(&mut image, &rec, &DEFAULT_PALETTE, MarkerStyle::default());

        assert_eq!(stats.points_drawn, 0);
        assert_eq!(stats.points_skipped, 3);
        assert_eq!(image, before);
    }

    #[test]
    fn out_of_bounds_center_is_skipped_not_drawn() {
        let rec = record(vec![vec![100, 5]], vec![5, 200]);
        let mut image = RgbImage::new(16, 16);

        let stats = draw_lanes(&mut image, &rec, &DEFAULT_PALETTE, MarkerStyle::default());

        assert_eq!(stats.points_drawn, 0);
        assert_eq!(stats.points_clipped, 2);
        assert_eq!(stats.points_skipped, 0);
    }

    #[test]
    fn marker_overlapping_border_is_clipped() {
        let rec = record(vec![vec![0]], vec![0]);
        let mut image = RgbImage::new(16, 16);

        let stats = draw_lanes(&mut image, &rec, &DEFAULT_PALETTE, MarkerStyle::default());

        assert_eq!(stats.points_drawn, 1);
        assert_eq!(image.get_pixel(0, 0), &DEFAULT_PALETTE[0]);
    }

    #[test]
    fn lanes_beyond_palette_reuse_colors() {
        let lanes = vec![vec![4], vec![12], vec![20], vec![28]];
        let rec = record(lanes, vec![8]);
        let mut image = RgbImage::new(40, 16);

        draw_lanes(&mut image, &rec, &DEFAULT_PALETTE, MarkerStyle::default());

        // lane 3 wraps to palette[0]
        assert_eq!(image.get_pixel(4, 8), image.get_pixel(28, 8));
    }
}
