//! Texture seam unwrapping.
//!
//! A cylindrical or spherical UV mapping wraps U from 1 back to 0 somewhere
//! on the surface. Faces straddling that seam interpolate across nearly the
//! whole texture and smear it. The fix is per face: duplicate the vertices of
//! every straddling face, shift the wrapped U values past 1, and remap the
//! doubled U range back into [0, 1].

use glam::{Vec2, Vec3};

/// A face whose U values spread wider than this is treated as crossing the
/// wrap seam rather than as legitimate high-frequency texture detail.
pub const SEAM_SPREAD_THRESHOLD: f32 = 0.75;

/// U values below this split point on a crossing face belong to the wrapped
/// side of the seam and are shifted up by a full texture width.
pub const SEAM_WRAP_SPLIT: f32 = 0.5;

/// One frame of mesh data after seam resolution. Positions, normals, and UVs
/// carry the duplicated vertex block at the end; the face list references it
/// with fresh indices.
#[derive(Debug, Clone)]
pub struct UnwrappedFrame {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub faces: Vec<[u32; 3]>,
}

fn face_u_values(face: &[u32; 3], uvs: &[Vec2]) -> [f32; 3] {
    [
        uvs[face[0] as usize].x,
        uvs[face[1] as usize].x,
        uvs[face[2] as usize].x,
    ]
}

/// A face crosses the seam iff the maximum pairwise absolute difference of
/// its U values exceeds [`SEAM_SPREAD_THRESHOLD`].
pub fn face_crosses_seam(us: [f32; 3]) -> bool {
    let max = us[0].max(us[1]).max(us[2]);
    let min = us[0].min(us[1]).min(us[2]);
    max - min > SEAM_SPREAD_THRESHOLD
}

/// True if any face of the frame crosses the seam.
pub fn any_crossing_face(faces: &[[u32; 3]], uvs: &[Vec2]) -> bool {
    faces
        .iter()
        .any(|face| face_crosses_seam(face_u_values(face, uvs)))
}

/// Resolves the seam for one frame.
///
/// Non-crossing faces pass through with their original indices. Crossing
/// faces get their three vertices duplicated into a trailing block, with
/// wrapped U values (strictly below [`SEAM_WRAP_SPLIT`]) shifted up by 1.
/// Every U, original and duplicated, is then halved so the doubled range maps
/// back onto [0, 1]; the renderer compensates by tiling the texture twice
/// along U. Fresh indices for duplicated faces start at one past the maximum
/// original face index and run sequentially in groups of three.
pub fn unwrap_frame(
    positions: &[Vec3],
    normals: &[Vec3],
    uvs: &[Vec2],
    faces: &[[u32; 3]],
) -> UnwrappedFrame {
    let crossing: Vec<bool> = faces
        .iter()
        .map(|face| face_crosses_seam(face_u_values(face, uvs)))
        .collect();

    let mut out_positions = positions.to_vec();
    let mut out_normals = normals.to_vec();
    let mut out_uvs = uvs.to_vec();
    let mut out_faces: Vec<[u32; 3]> = Vec::with_capacity(faces.len());

    for (face, crosses) in faces.iter().zip(&crossing) {
        if !crosses {
            out_faces.push(*face);
        }
    }

    let mut next_index = faces.iter().flatten().copied().max().map_or(0, |i| i + 1);
    let mut duplicated = 0usize;
    for (face, crosses) in faces.iter().zip(&crossing) {
        if !crosses {
            continue;
        }
        let mut new_face = [0u32; 3];
        for (slot, &vertex) in new_face.iter_mut().zip(face) {
            let v = vertex as usize;
            out_positions.push(positions[v]);
            out_normals.push(normals[v]);
            let mut uv = uvs[v];
            if uv.x < SEAM_WRAP_SPLIT {
                uv.x += 1.0;
            }
            out_uvs.push(uv);
            *slot = next_index;
            next_index += 1;
        }
        out_faces.push(new_face);
        duplicated += 1;
    }

    for uv in &mut out_uvs {
        uv.x /= 2.0;
    }

    log::debug!(
        "seam unwrap: {} of {} faces duplicated",
        duplicated,
        faces.len()
    );

    UnwrappedFrame {
        positions: out_positions,
        normals: out_normals,
        uvs: out_uvs,
        faces: out_faces,
    }
}
