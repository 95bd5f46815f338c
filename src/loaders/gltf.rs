use anyhow::{Context, Result};
use glam::{Mat4, Vec2, Vec3};
use std::path::Path;

use crate::frames::Timeline;
use crate::types::{MeshAttributes, MeshData};

/// Loads every mesh primitive of a glTF file as static [`MeshData`], with
/// node transforms baked into the vertex data. Primitives with a UV set keep
/// it (seam wrapping off; flip it with [`MeshData::with_uvs`] if the mapping
/// wraps); normals are synthesized when the file omits them.
pub fn load_gltf_meshes(path: impl AsRef<Path>) -> Result<Vec<MeshData>> {
    let path = path.as_ref();
    let (gltf, buffers, _images) =
        gltf::import(path).context(format!("Failed to load glTF file: {:?}", path))?;

    let mut meshes = Vec::new();
    for scene in gltf.scenes() {
        for node in scene.nodes() {
            process_node(&node, &buffers, &Mat4::IDENTITY, &mut meshes)?;
        }
    }

    println!("Loaded {} mesh primitive(s) from {:?}", meshes.len(), path);
    Ok(meshes)
}

fn process_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent_transform: &Mat4,
    meshes: &mut Vec<MeshData>,
) -> Result<()> {
    let local_transform = Mat4::from_cols_array_2d(&node.transform().matrix());
    let global_transform = *parent_transform * local_transform;

    if let Some(mesh) = node.mesh() {
        process_mesh(&mesh, buffers, &global_transform, meshes)?;
    }

    for child in node.children() {
        process_node(&child, buffers, &global_transform, meshes)?;
    }

    Ok(())
}

fn process_mesh(
    mesh: &gltf::Mesh,
    buffers: &[gltf::buffer::Data],
    transform: &Mat4,
    meshes: &mut Vec<MeshData>,
) -> Result<()> {
    for primitive in mesh.primitives() {
        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

        let positions: Vec<Vec3> = reader
            .read_positions()
            .context("Mesh primitive has no positions")?
            .map(|pos| transform.transform_point3(Vec3::from_array(pos)))
            .collect();

        if positions.is_empty() {
            continue;
        }

        let faces: Vec<[u32; 3]> = match reader.read_indices() {
            Some(indices) => triples(indices.into_u32().collect()),
            // No index buffer: a plain triangle list.
            None => triples((0..positions.len() as u32).collect()),
        };

        let normal_transform = transform.inverse().transpose();
        let normals: Vec<Vec3> = match reader.read_normals() {
            Some(normals) => normals
                .map(|n| {
                    normal_transform
                        .transform_vector3(Vec3::from_array(n))
                        .normalize_or_zero()
                })
                .collect(),
            None => vertex_normals(&positions, &faces),
        };

        let uvs: Option<Vec<Vec2>> = reader
            .read_tex_coords(0)
            .map(|coords| coords.into_f32().map(Vec2::from_array).collect());

        let mut data = MeshData::new(
            Timeline::Static(positions),
            faces,
            Timeline::Static(normals),
        );
        data.attributes = MeshAttributes::resolve(uvs.map(Timeline::Static), false, None);
        meshes.push(data);
    }

    Ok(())
}

fn triples(indices: Vec<u32>) -> Vec<[u32; 3]> {
    indices
        .chunks_exact(3)
        .map(|chunk| [chunk[0], chunk[1], chunk[2]])
        .collect()
}

/// Area-weighted vertex normals from face geometry, for files without a
/// normal attribute.
fn vertex_normals(positions: &[Vec3], faces: &[[u32; 3]]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for face in faces {
        let a = positions[face[0] as usize];
        let b = positions[face[1] as usize];
        let c = positions[face[2] as usize];
        // Cross product magnitude carries the face area, so larger faces
        // weigh more.
        let face_normal = (b - a).cross(c - a);
        for &index in face {
            normals[index as usize] += face_normal;
        }
    }
    for normal in &mut normals {
        *normal = normal.normalize_or_zero();
    }
    normals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_normals_of_flat_triangle() {
        let positions = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
        let faces = vec![[0u32, 1, 2]];
        let normals = vertex_normals(&positions, &faces);
        for normal in normals {
            assert!((normal - Vec3::Z).length() < 1e-6);
        }
    }

    #[test]
    fn test_triples_groups_indices() {
        assert_eq!(triples(vec![0, 1, 2, 3, 4, 5]), vec![[0, 1, 2], [3, 4, 5]]);
    }
}
