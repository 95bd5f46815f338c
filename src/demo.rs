//! Procedural demo geometry for the CLI, examples, and benches.
//!
//! The sphere uses a shared-vertex cylindrical mapping, so the faces closing
//! the last segment back to the first genuinely cross the texture seam; the
//! wave plane is authored z-up to exercise the axis converter.

use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

use crate::frames::Timeline;
use crate::types::{CurveData, MeshData, PointCloudData};

/// UV sphere of the given resolution with a cylindrical texture mapping that
/// wraps U around the equator. Authored y-up.
pub fn uv_sphere(rings: usize, segments: usize, radius: f32) -> MeshData {
    let mut positions = Vec::with_capacity((rings + 1) * segments);
    let mut normals = Vec::with_capacity((rings + 1) * segments);
    let mut uvs = Vec::with_capacity((rings + 1) * segments);

    for ring in 0..=rings {
        let theta = PI * ring as f32 / rings as f32;
        let v = 1.0 - ring as f32 / rings as f32;
        for segment in 0..segments {
            let phi = TAU * segment as f32 / segments as f32;
            let normal = Vec3::new(theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin());
            positions.push(normal * radius);
            normals.push(normal);
            uvs.push(Vec2::new(segment as f32 / segments as f32, v));
        }
    }

    let index = |ring: usize, segment: usize| (ring * segments + segment % segments) as u32;
    let mut faces = Vec::with_capacity(rings * segments * 2);
    for ring in 0..rings {
        for segment in 0..segments {
            let a = index(ring, segment);
            let b = index(ring + 1, segment);
            let c = index(ring + 1, segment + 1);
            let d = index(ring, segment + 1);
            faces.push([a, b, c]);
            faces.push([a, c, d]);
        }
    }

    MeshData::new(
        Timeline::Static(positions),
        faces,
        Timeline::Static(normals),
    )
    .with_uvs(Timeline::Static(uvs), true)
}

/// Animated wave plane with per-vertex scalar colors tracking the surface
/// height. Authored z-up (x forward, y right, z up).
pub fn wave_mesh(resolution: usize, num_frames: usize, amplitude: f32) -> MeshData {
    let side = resolution + 1;
    let frequency = TAU / resolution as f32 * 2.0;

    let mut position_frames = Vec::with_capacity(num_frames);
    let mut normal_frames = Vec::with_capacity(num_frames);
    let mut scalar_frames = Vec::with_capacity(num_frames);

    for frame in 0..num_frames {
        let phase = TAU * frame as f32 / num_frames as f32;
        let mut positions = Vec::with_capacity(side * side);
        let mut normals = Vec::with_capacity(side * side);
        let mut scalars = Vec::with_capacity(side * side);
        for row in 0..side {
            for col in 0..side {
                let x = row as f32 - resolution as f32 / 2.0;
                let y = col as f32 - resolution as f32 / 2.0;
                let height = amplitude * (frequency * x + phase).sin() * (frequency * y).cos();
                let dx = amplitude * frequency * (frequency * x + phase).cos() * (frequency * y).cos();
                let dy = -amplitude * frequency * (frequency * x + phase).sin() * (frequency * y).sin();
                positions.push(Vec3::new(x, y, height));
                normals.push(Vec3::new(-dx, -dy, 1.0).normalize());
                scalars.push((height / amplitude + 1.0) / 2.0);
            }
        }
        position_frames.push(positions);
        normal_frames.push(normals);
        scalar_frames.push(scalars);
    }

    let mut faces = Vec::with_capacity(resolution * resolution * 2);
    for row in 0..resolution {
        for col in 0..resolution {
            let a = (row * side + col) as u32;
            let b = a + 1;
            let c = a + side as u32;
            let d = c + 1;
            faces.push([a, c, d]);
            faces.push([a, d, b]);
        }
    }

    MeshData::new(
        Timeline::Animated(position_frames),
        faces,
        Timeline::Animated(normal_frames),
    )
    .with_scalars(Timeline::Animated(scalar_frames))
}

/// Helix curve colored by a single scalar.
pub fn helix_curve(turns: usize, points_per_turn: usize, radius: f32) -> CurveData {
    let total = turns * points_per_turn;
    let positions: Vec<Vec3> = (0..=total)
        .map(|i| {
            let angle = TAU * i as f32 / points_per_turn as f32;
            let height = 2.0 * i as f32 / total as f32 - 1.0;
            Vec3::new(radius * angle.cos(), height, radius * angle.sin())
        })
        .collect();
    CurveData::new(Timeline::Static(positions))
        .with_radius(0.05)
        .with_scalar(Timeline::Static(0.8))
}

/// Closed circle curve.
pub fn circle_curve(segments: usize, radius: f32) -> CurveData {
    let positions: Vec<Vec3> = (0..segments)
        .map(|i| {
            let angle = TAU * i as f32 / segments as f32;
            Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
        })
        .collect();
    CurveData::new(Timeline::Static(positions))
        .looped()
        .with_radius(0.05)
}

/// Deterministically scattered point cloud colored by distance from the
/// origin.
pub fn scatter_cloud(count: usize, extent: f32) -> PointCloudData {
    use std::collections::hash_map::RandomState;
    use std::hash::{BuildHasher, Hash, Hasher};

    let hasher_builder = RandomState::new();
    let mut positions = Vec::with_capacity(count);
    let mut scalars = Vec::with_capacity(count);
    for i in 0..count {
        let mut hasher = hasher_builder.build_hasher();
        i.hash(&mut hasher);
        let hash = hasher.finish();

        let x = ((hash % 1000) as f32 / 1000.0 - 0.5) * extent;
        let y = (((hash >> 16) % 1000) as f32 / 1000.0 - 0.5) * extent;
        let z = (((hash >> 32) % 1000) as f32 / 1000.0 - 0.5) * extent;
        let point = Vec3::new(x, y, z);
        positions.push(point);
        scalars.push((point.length() / (extent * 0.866)).min(1.0));
    }

    PointCloudData::new(Timeline::Static(positions))
        .with_radius(0.05)
        .with_scalars(Timeline::Static(scalars))
}
