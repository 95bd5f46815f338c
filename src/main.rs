use anyhow::Result;
use clap::Parser;

use multiscene::cli::Cli;
use multiscene::{demo, document, loaders, MultiScene};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut scene = MultiScene::new(cli.rows, cli.cols)
        .with_animation(cli.num_frames as i32, cli.frame_length);

    for row in 0..cli.rows {
        for col in 0..cli.cols {
            match (row * cli.cols + col) % 4 {
                0 => {
                    if let Some(path) = (row == 0 && col == 0)
                        .then_some(cli.gltf.as_ref())
                        .flatten()
                    {
                        for mesh in loaders::load_gltf_meshes(path)? {
                            scene.add_mesh(row, col, mesh, true)?;
                        }
                    } else {
                        scene.add_mesh(row, col, demo::uv_sphere(24, 48, 1.0), true)?;
                    }
                }
                1 => scene.add_mesh(row, col, demo::wave_mesh(32, cli.num_frames, 1.5), false)?,
                2 => scene.add_point_cloud(row, col, demo::scatter_cloud(500, 4.0), true)?,
                _ => {
                    scene.add_curve(row, col, demo::helix_curve(5, 64, 1.0), true)?;
                    scene.add_curve(row, col, demo::circle_curve(96, 1.4), true)?;
                }
            }
        }
    }

    let html = scene.make()?;
    document::write_html(&cli.output, &html)?;
    println!(
        "Wrote {} object(s) across {} scene(s) to {:?}",
        scene.objects().len(),
        cli.rows * cli.cols,
        cli.output
    );

    Ok(())
}
