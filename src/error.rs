use thiserror::Error;

/// Errors surfaced by the geometry-preparation pipeline. Every failure is
/// reported eagerly, before any descriptor is built.
#[derive(Debug, Error)]
pub enum Error {
    #[error("array length mismatch for {name}: expected {expected}, got {actual}")]
    ShapeMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("frame count mismatch for {name}: expected {expected}, got {actual}")]
    FrameCountMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("face index {index} out of range for {vertex_count} vertices")]
    FaceIndexOutOfRange { index: u32, vertex_count: usize },

    #[error("animated data must have at least one frame ({name})")]
    NoFrames { name: &'static str },

    #[error("grid position ({row}, {col}) outside {num_rows}x{num_cols} layout")]
    GridPositionOutOfRange {
        row: usize,
        col: usize,
        num_rows: usize,
        num_cols: usize,
    },

    #[error("failed to serialize scene payload")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write document")]
    Io(#[from] std::io::Error),
}
