//! Final document assembly: the descriptor payload serialized as JSON and
//! embedded, together with the viewer bootstrap script, into one
//! self-contained HTML page.

use std::path::Path;

use crate::error::Error;
use crate::scene::MultiScene;

const BABYLON_CDN: &str = "https://cdn.babylonjs.com/babylon.js";
const BABYLON_GUI_CDN: &str = "https://cdn.babylonjs.com/gui/babylon.gui.js";

/// Viewer bootstrap, shipped with the crate and embedded verbatim.
const RENDER_SCRIPT: &str = include_str!("../assets/render.js");

/// Serializes the scene's descriptor list plus camera and animation
/// parameters into the HTML document consumed by the external renderer.
pub fn render_document(scene: &MultiScene) -> Result<String, Error> {
    let payload = serde_json::to_string(scene.objects())?;
    let layout = scene.layout();

    // One hidden engine canvas plus a flex row of viewport canvases per grid
    // row. Viewports split the window evenly; integer division keeps the
    // original sizing.
    let canvas_row = format!(
        r#"<div class="row">{}</div>"#,
        r#"<canvas class="sceneCanvas"></canvas>"#.repeat(layout.num_cols())
    );
    let canvas_grid = canvas_row.repeat(layout.num_rows());

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <style>
        canvas#engineCanvas {{ width: 0; height: 0 }}
        div.row {{ display: flex }}
        canvas.sceneCanvas {{ width: {width}vw; height: {height}vh }}
    </style>
    <script src="{babylon}"></script>
    <script src="{babylon_gui}"></script>
</head>
<body>
    <canvas id="engineCanvas"></canvas>
    {canvas_grid}
    <script>
{render_script}
renderMultiScene({payload}, {alpha}, {beta}, {num_frames}, {frame_length});
    </script>
</body>
</html>
"#,
        width = 100 / layout.num_cols(),
        height = 100 / layout.num_rows(),
        babylon = BABYLON_CDN,
        babylon_gui = BABYLON_GUI_CDN,
        canvas_grid = canvas_grid,
        render_script = RENDER_SCRIPT,
        payload = payload,
        alpha = scene.alpha(),
        beta = scene.beta(),
        num_frames = scene.num_frames(),
        frame_length = scene.frame_length(),
    ))
}

/// Writes a produced document to disk.
pub fn write_html(path: impl AsRef<Path>, html: &str) -> Result<(), Error> {
    std::fs::write(path.as_ref(), html)?;
    Ok(())
}
