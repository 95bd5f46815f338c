// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "multiscene")]
#[command(about = "Prepare demo geometry for a multi-viewport Babylon.js viewer", long_about = None)]
pub struct Cli {
    /// Output HTML file
    #[arg(short, long, default_value = "scenes.html")]
    pub output: PathBuf,

    /// Number of viewport rows
    #[arg(long, default_value_t = 2)]
    pub rows: usize,

    /// Number of viewport columns
    #[arg(long, default_value_t = 2)]
    pub cols: usize,

    /// Frame count for animated demo scenes
    #[arg(long, default_value_t = 48)]
    pub num_frames: usize,

    /// Frame length in milliseconds
    #[arg(long, default_value_t = 42)]
    pub frame_length: i32,

    /// Load a glTF file into the first scene instead of the demo sphere
    #[arg(long)]
    pub gltf: Option<PathBuf>,
}
