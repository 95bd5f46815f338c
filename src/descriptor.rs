use glam::{Vec2, Vec3};
use serde::Serialize;

use crate::frames::FramePayload;

/// Renderer-facing record for one object, tagged by kind. Serialized with
/// camelCase keys to match what the viewer bootstrap expects. Created once
/// per `add_*` call and immutable thereafter.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ObjectDescriptor {
    #[serde(rename = "mesh", rename_all = "camelCase")]
    Mesh {
        scene_id: usize,
        positions: FramePayload<Vec<f32>>,
        indices: FramePayload<Vec<u32>>,
        normals: FramePayload<Vec<f32>>,
        has_uvs: bool,
        has_colors: bool,
        is_animated: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        uvs: Option<FramePayload<Vec<f32>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        wrap_us: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        colors: Option<FramePayload<Vec<f32>>>,
    },
    #[serde(rename = "pointCloud", rename_all = "camelCase")]
    PointCloud {
        scene_id: usize,
        num_points: usize,
        positions: FramePayload<Vec<[f32; 3]>>,
        radii: f32,
        has_colors: bool,
        is_animated: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        colors: Option<FramePayload<Vec<[f32; 3]>>>,
    },
    #[serde(rename = "curve", rename_all = "camelCase")]
    Curve {
        scene_id: usize,
        positions: FramePayload<Vec<[f32; 3]>>,
        radius: f32,
        has_colors: bool,
        is_animated: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        colors: Option<FramePayload<[f32; 3]>>,
    },
}

impl ObjectDescriptor {
    pub fn scene_id(&self) -> usize {
        match self {
            ObjectDescriptor::Mesh { scene_id, .. }
            | ObjectDescriptor::PointCloud { scene_id, .. }
            | ObjectDescriptor::Curve { scene_id, .. } => *scene_id,
        }
    }

    pub fn is_animated(&self) -> bool {
        match self {
            ObjectDescriptor::Mesh { is_animated, .. }
            | ObjectDescriptor::PointCloud { is_animated, .. }
            | ObjectDescriptor::Curve { is_animated, .. } => *is_animated,
        }
    }
}

// Wire arrays: meshes are flattened component lists, point clouds and curves
// keep nested triples.

pub(crate) fn flatten_points(points: &[Vec3]) -> Vec<f32> {
    points.iter().flat_map(|p| [p.x, p.y, p.z]).collect()
}

pub(crate) fn flatten_uvs(uvs: &[Vec2]) -> Vec<f32> {
    uvs.iter().flat_map(|uv| [uv.x, uv.y]).collect()
}

pub(crate) fn flatten_faces(faces: &[[u32; 3]]) -> Vec<u32> {
    faces.iter().flatten().copied().collect()
}

pub(crate) fn flatten_colors(colors: &[[f32; 3]]) -> Vec<f32> {
    colors.iter().flatten().copied().collect()
}

pub(crate) fn point_triples(points: &[Vec3]) -> Vec<[f32; 3]> {
    points.iter().map(|p| p.to_array()).collect()
}
