use glam::{Vec2, Vec3};

use crate::frames::Timeline;

/// Default sphere/tube radius for point clouds and curves.
pub const DEFAULT_RADIUS: f32 = 0.1;

/// Surface attributes of a mesh. UV coordinates and scalar colors are
/// mutually exclusive by construction; the precedence rule (UVs win) lives in
/// [`MeshAttributes::resolve`] and the `with_*` builders instead of being a
/// runtime branch over optional fields.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshAttributes {
    Plain,
    Uvs {
        uvs: Timeline<Vec<Vec2>>,
        wrap_us: bool,
    },
    Scalars(Timeline<Vec<f32>>),
}

impl MeshAttributes {
    /// Resolves optional UV and scalar data into the canonical variant. When
    /// both are supplied the UVs take precedence and the scalars are dropped.
    pub fn resolve(
        uvs: Option<Timeline<Vec<Vec2>>>,
        wrap_us: bool,
        scalars: Option<Timeline<Vec<f32>>>,
    ) -> Self {
        match (uvs, scalars) {
            (Some(uvs), _) => MeshAttributes::Uvs { uvs, wrap_us },
            (None, Some(scalars)) => MeshAttributes::Scalars(scalars),
            (None, None) => MeshAttributes::Plain,
        }
    }
}

/// Triangle mesh: per-frame vertex data plus frame-invariant topology.
#[derive(Debug, Clone)]
pub struct MeshData {
    pub positions: Timeline<Vec<Vec3>>,
    pub faces: Vec<[u32; 3]>,
    pub normals: Timeline<Vec<Vec3>>,
    pub attributes: MeshAttributes,
}

impl MeshData {
    pub fn new(
        positions: Timeline<Vec<Vec3>>,
        faces: Vec<[u32; 3]>,
        normals: Timeline<Vec<Vec3>>,
    ) -> Self {
        Self {
            positions,
            faces,
            normals,
            attributes: MeshAttributes::Plain,
        }
    }

    /// Attaches UV coordinates. Replaces any scalar colors (UVs take
    /// precedence).
    pub fn with_uvs(mut self, uvs: Timeline<Vec<Vec2>>, wrap_us: bool) -> Self {
        self.attributes = MeshAttributes::Uvs { uvs, wrap_us };
        self
    }

    /// Attaches per-vertex scalar colors. Ignored if UVs are already present
    /// (UVs take precedence).
    pub fn with_scalars(mut self, scalars: Timeline<Vec<f32>>) -> Self {
        if !matches!(self.attributes, MeshAttributes::Uvs { .. }) {
            self.attributes = MeshAttributes::Scalars(scalars);
        }
        self
    }
}

/// Point cloud: positions with a single global sphere radius and optional
/// per-point scalar colors.
#[derive(Debug, Clone)]
pub struct PointCloudData {
    pub positions: Timeline<Vec<Vec3>>,
    pub radius: f32,
    pub scalars: Option<Timeline<Vec<f32>>>,
}

impl PointCloudData {
    pub fn new(positions: Timeline<Vec<Vec3>>) -> Self {
        Self {
            positions,
            radius: DEFAULT_RADIUS,
            scalars: None,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_scalars(mut self, scalars: Timeline<Vec<f32>>) -> Self {
        self.scalars = Some(scalars);
        self
    }
}

/// Ordered polyline rendered as a tube, optionally closed into a loop and
/// optionally colored by a single scalar (one per frame when animated).
#[derive(Debug, Clone)]
pub struct CurveData {
    pub positions: Timeline<Vec<Vec3>>,
    pub looped: bool,
    pub radius: f32,
    pub scalar: Option<Timeline<f32>>,
}

impl CurveData {
    pub fn new(positions: Timeline<Vec<Vec3>>) -> Self {
        Self {
            positions,
            looped: false,
            radius: DEFAULT_RADIUS,
            scalar: None,
        }
    }

    pub fn looped(mut self) -> Self {
        self.looped = true;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_scalar(mut self, scalar: Timeline<f32>) -> Self {
        self.scalar = Some(scalar);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_uvs_over_scalars() {
        let uvs = Timeline::Static(vec![Vec2::ZERO]);
        let scalars = Timeline::Static(vec![0.5]);
        let attributes = MeshAttributes::resolve(Some(uvs.clone()), true, Some(scalars));
        assert_eq!(attributes, MeshAttributes::Uvs { uvs, wrap_us: true });
    }

    #[test]
    fn test_with_scalars_does_not_displace_uvs() {
        let mesh = MeshData::new(
            Timeline::Static(vec![Vec3::ZERO]),
            vec![],
            Timeline::Static(vec![Vec3::Y]),
        )
        .with_uvs(Timeline::Static(vec![Vec2::ZERO]), false)
        .with_scalars(Timeline::Static(vec![0.5]));
        assert!(matches!(mesh.attributes, MeshAttributes::Uvs { .. }));
    }
}
