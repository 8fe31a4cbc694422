use lane_viz::config::load_config;
use lane_viz::io::{load_rgb_image, save_rgb_image, write_json_file};
use lane_viz::record::load_record;
use lane_viz::render::draw_lanes;
use lane_viz::report::RenderReport;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> lane_viz::Result<()> {
    let Some(config_path) = env::args().nth(1) else {
        eprintln!("{}", usage());
        std::process::exit(2);
    };
    let config = load_config(Path::new(&config_path))?;

    let record = load_record(&config.annotation)?;
    let image_path = record.resolve_image_path(&config.annotation);
    let mut image = load_rgb_image(&image_path)?;

    let colors = config.palette();
    let stats = draw_lanes(&mut image, &record, &colors, config.marker);

    save_rgb_image(&image, &config.output.image)?;
    println!(
        "Saved overlay image to {} ({} points across {} lanes)",
        config.output.image.display(),
        stats.points_drawn,
        record.lanes.len()
    );

    if let Some(report_path) = &config.output.report_json {
        let report = RenderReport {
            annotation: config.annotation.clone(),
            image: image_path,
            output: config.output.image.clone(),
            width: image.width(),
            height: image.height(),
            marker_radius: config.marker.radius,
            palette_len: colors.len(),
            lane_count: record.lanes.len(),
            stats,
        };
        write_json_file(report_path, &report)?;
        println!("Render report written to {}", report_path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: lane_viz <config.json>".to_string()
}
