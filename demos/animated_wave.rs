//! Animated wave mesh next to an animated point cloud riding the same wave.
//!
//! Run with: cargo run --example animated_wave

use anyhow::Result;
use glam::Vec3;
use multiscene::{demo, document, MultiScene, PointCloudData, Timeline};

const FRAMES: usize = 48;

fn main() -> Result<()> {
    env_logger::init();

    let mut scene = MultiScene::new(1, 2).with_animation(FRAMES as i32, 42);

    let wave = demo::wave_mesh(32, FRAMES, 1.5);
    scene.add_mesh(0, 0, wave.clone(), false)?;

    // Sample every 16th wave vertex per frame as a floating marker.
    let marker_frames: Vec<Vec<Vec3>> = wave
        .positions
        .frames()
        .iter()
        .map(|frame| {
            frame
                .iter()
                .step_by(16)
                .map(|p| *p + Vec3::new(0.0, 0.0, 0.3))
                .collect()
        })
        .collect();
    let markers = PointCloudData::new(Timeline::Animated(marker_frames)).with_radius(0.15);
    scene.add_point_cloud(0, 1, markers, false)?;

    let html = scene.make()?;
    document::write_html("animated_wave.html", &html)?;
    println!("Wrote animated_wave.html with {} frames", FRAMES);
    Ok(())
}
