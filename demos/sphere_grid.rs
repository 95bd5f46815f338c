//! 2x2 grid: the same sphere with a wrapped texture, scalar colors, plain
//! shading, and as a point cloud, for eyeballing the preparation pipeline.
//!
//! Run with: cargo run --example sphere_grid

use anyhow::Result;
use multiscene::{demo, document, MeshAttributes, MultiScene, PointCloudData, Timeline};

fn main() -> Result<()> {
    env_logger::init();

    let mut scene = MultiScene::new(2, 2);

    // Wrapped cylindrical mapping; the seam faces get unwrapped.
    scene.add_mesh(0, 0, demo::uv_sphere(24, 48, 1.0), true)?;

    // Same geometry, scalar colors from the y coordinate.
    let sphere = demo::uv_sphere(24, 48, 1.0);
    let scalars: Vec<f32> = sphere.positions.frames()[0]
        .iter()
        .map(|p| (p.y + 1.0) / 2.0)
        .collect();
    let colored = multiscene::MeshData::new(
        sphere.positions.clone(),
        sphere.faces.clone(),
        sphere.normals.clone(),
    )
    .with_scalars(Timeline::Static(scalars));
    scene.add_mesh(0, 1, colored, true)?;

    // Plain shading.
    let mut plain = demo::uv_sphere(24, 48, 1.0);
    plain.attributes = MeshAttributes::Plain;
    scene.add_mesh(1, 0, plain, true)?;

    // Sphere vertices as a point cloud.
    let cloud = PointCloudData::new(demo::uv_sphere(12, 24, 1.0).positions.clone())
        .with_radius(0.04);
    scene.add_point_cloud(1, 1, cloud, true)?;

    let html = scene.make()?;
    document::write_html("sphere_grid.html", &html)?;
    println!("Wrote sphere_grid.html");
    Ok(())
}
