pub mod cli;
pub mod demo;
pub mod descriptor;
pub mod document;
pub mod error;
pub mod frames;
pub mod layout;
pub mod loaders;
pub mod math;
pub mod scene;
pub mod seam;
pub mod types;

pub use descriptor::ObjectDescriptor;
pub use error::Error;
pub use frames::{FramePayload, Timeline};
pub use layout::GridLayout;
pub use scene::{MultiScene, Scene, DEFAULT_ALPHA, DEFAULT_BETA};
pub use types::{CurveData, MeshAttributes, MeshData, PointCloudData, DEFAULT_RADIUS};
