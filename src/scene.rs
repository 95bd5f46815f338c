use glam::{Vec2, Vec3};

use crate::descriptor::{
    flatten_colors, flatten_faces, flatten_points, flatten_uvs, point_triples, ObjectDescriptor,
};
use crate::document;
use crate::error::Error;
use crate::frames::{collapse, Timeline};
use crate::layout::GridLayout;
use crate::math::{convert_points, turbo};
use crate::seam;
use crate::types::{CurveData, MeshAttributes, MeshData, PointCloudData};

/// Default camera azimuth for every scene.
pub const DEFAULT_ALPHA: f32 = -std::f32::consts::FRAC_PI_4;
/// Default camera polar angle for every scene.
pub const DEFAULT_BETA: f32 = 1.25;

/// A grid of viewports with synchronized cameras. Objects are added to a
/// (row, col) position and accumulated as renderer-ready descriptors;
/// [`MultiScene::make`] assembles the final self-contained document.
#[derive(Debug, Clone)]
pub struct MultiScene {
    layout: GridLayout,
    alpha: f32,
    beta: f32,
    num_frames: i32,
    frame_length: i32,
    objects: Vec<ObjectDescriptor>,
}

impl MultiScene {
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            layout: GridLayout::new(num_rows, num_cols),
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            num_frames: -1,
            frame_length: -1,
            objects: Vec::new(),
        }
    }

    pub fn with_camera(mut self, alpha: f32, beta: f32) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    /// Animation playback parameters; `-1` means "not animated / renderer
    /// default".
    pub fn with_animation(mut self, num_frames: i32, frame_length: i32) -> Self {
        self.num_frames = num_frames;
        self.frame_length = frame_length;
        self
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn objects(&self) -> &[ObjectDescriptor] {
        &self.objects
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn beta(&self) -> f32 {
        self.beta
    }

    pub fn num_frames(&self) -> i32 {
        self.num_frames
    }

    pub fn frame_length(&self) -> i32 {
        self.frame_length
    }

    /// Adds a mesh to the scene at (row, col).
    ///
    /// `y_up` states whether the data is already in the viewer convention
    /// (x right, y up, z forward); otherwise positions are remapped from
    /// x forward, y right, z up.
    pub fn add_mesh(
        &mut self,
        row: usize,
        col: usize,
        mesh: MeshData,
        y_up: bool,
    ) -> Result<(), Error> {
        let scene_id = self.layout.scene_id(row, col)?;
        validate_mesh(&mesh)?;

        let is_animated = mesh.positions.is_animated();
        let positions = mesh.positions.map(|points| convert_points(points, y_up));
        let normals = mesh.normals;
        let faces = mesh.faces;

        let descriptor = match mesh.attributes {
            MeshAttributes::Uvs { uvs, wrap_us } => {
                // The doubled-U remap only happens when a seam actually gets
                // resolved somewhere in the timeline; wrapUs tells the
                // renderer whether U space was doubled.
                let wraps = wrap_us
                    && uvs
                        .frames()
                        .iter()
                        .any(|frame_uvs| seam::any_crossing_face(&faces, frame_uvs));
                if wraps {
                    build_unwrapped_mesh(scene_id, is_animated, &positions, &normals, &uvs, &faces)
                } else {
                    build_textured_mesh(scene_id, is_animated, &positions, &normals, &uvs, &faces)
                }
            }
            MeshAttributes::Scalars(scalars) => {
                build_colored_mesh(scene_id, is_animated, &positions, &normals, &scalars, &faces)
            }
            MeshAttributes::Plain => {
                build_plain_mesh(scene_id, is_animated, &positions, &normals, &faces)
            }
        };

        self.objects.push(descriptor);
        Ok(())
    }

    /// Adds a point cloud to the scene at (row, col). See [`Self::add_mesh`]
    /// for the `y_up` convention.
    pub fn add_point_cloud(
        &mut self,
        row: usize,
        col: usize,
        cloud: PointCloudData,
        y_up: bool,
    ) -> Result<(), Error> {
        let scene_id = self.layout.scene_id(row, col)?;
        validate_point_cloud(&cloud)?;

        let is_animated = cloud.positions.is_animated();
        let num_points = cloud.positions.frames()[0].len();
        let position_frames: Vec<Vec<[f32; 3]>> = cloud
            .positions
            .frames()
            .iter()
            .map(|points| point_triples(&convert_points(points, y_up)))
            .collect();
        let colors = cloud.scalars.as_ref().map(|scalars| {
            let frames: Vec<Vec<[f32; 3]>> = scalars
                .frames()
                .iter()
                .map(|frame| frame.iter().map(|&s| turbo(s)).collect())
                .collect();
            collapse(is_animated, frames)
        });

        self.objects.push(ObjectDescriptor::PointCloud {
            scene_id,
            num_points,
            positions: collapse(is_animated, position_frames),
            radii: cloud.radius,
            has_colors: colors.is_some(),
            is_animated,
            colors,
        });
        Ok(())
    }

    /// Adds a tube curve to the scene at (row, col). Looped curves are closed
    /// by repeating their first two vertices, which the tube miter needs to
    /// join the final segment smoothly. See [`Self::add_mesh`] for the `y_up`
    /// convention.
    pub fn add_curve(
        &mut self,
        row: usize,
        col: usize,
        curve: CurveData,
        y_up: bool,
    ) -> Result<(), Error> {
        let scene_id = self.layout.scene_id(row, col)?;
        validate_curve(&curve)?;

        let is_animated = curve.positions.is_animated();
        let position_frames: Vec<Vec<[f32; 3]>> = curve
            .positions
            .frames()
            .iter()
            .map(|points| {
                let mut converted = convert_points(points, y_up);
                if curve.looped {
                    converted.push(converted[0]);
                    converted.push(converted[1]);
                }
                point_triples(&converted)
            })
            .collect();
        let colors = curve.scalar.as_ref().map(|scalar| {
            let frames: Vec<[f32; 3]> = scalar.frames().iter().map(|&s| turbo(s)).collect();
            collapse(is_animated, frames)
        });

        self.objects.push(ObjectDescriptor::Curve {
            scene_id,
            positions: collapse(is_animated, position_frames),
            radius: curve.radius,
            has_colors: colors.is_some(),
            is_animated,
            colors,
        });
        Ok(())
    }

    /// Produces the self-contained HTML document for the accumulated scene
    /// grid.
    pub fn make(&self) -> Result<String, Error> {
        log::info!(
            "assembling document: {} object(s) across {} scene(s)",
            self.objects.len(),
            self.layout.num_scenes()
        );
        document::render_document(self)
    }
}

/// A single viewport; convenience wrapper over a 1x1 [`MultiScene`].
#[derive(Debug, Clone)]
pub struct Scene {
    inner: MultiScene,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            inner: MultiScene::new(1, 1),
        }
    }

    pub fn with_camera(mut self, alpha: f32, beta: f32) -> Self {
        self.inner = self.inner.with_camera(alpha, beta);
        self
    }

    pub fn with_animation(mut self, num_frames: i32, frame_length: i32) -> Self {
        self.inner = self.inner.with_animation(num_frames, frame_length);
        self
    }

    pub fn add_mesh(&mut self, mesh: MeshData, y_up: bool) -> Result<(), Error> {
        self.inner.add_mesh(0, 0, mesh, y_up)
    }

    pub fn add_point_cloud(&mut self, cloud: PointCloudData, y_up: bool) -> Result<(), Error> {
        self.inner.add_point_cloud(0, 0, cloud, y_up)
    }

    pub fn add_curve(&mut self, curve: CurveData, y_up: bool) -> Result<(), Error> {
        self.inner.add_curve(0, 0, curve, y_up)
    }

    pub fn objects(&self) -> &[ObjectDescriptor] {
        self.inner.objects()
    }

    pub fn make(&self) -> Result<String, Error> {
        self.inner.make()
    }
}

// === Mesh descriptor assembly ===

fn build_unwrapped_mesh(
    scene_id: usize,
    is_animated: bool,
    positions: &Timeline<Vec<Vec3>>,
    normals: &Timeline<Vec<Vec3>>,
    uvs: &Timeline<Vec<Vec2>>,
    faces: &[[u32; 3]],
) -> ObjectDescriptor {
    let frame_count = positions.frame_count();
    let mut out_positions = Vec::with_capacity(frame_count);
    let mut out_indices = Vec::with_capacity(frame_count);
    let mut out_normals = Vec::with_capacity(frame_count);
    let mut out_uvs = Vec::with_capacity(frame_count);

    for ((frame_positions, frame_normals), frame_uvs) in positions
        .frames()
        .iter()
        .zip(normals.frames())
        .zip(uvs.frames())
    {
        let unwrapped = seam::unwrap_frame(frame_positions, frame_normals, frame_uvs, faces);
        out_positions.push(flatten_points(&unwrapped.positions));
        out_indices.push(flatten_faces(&unwrapped.faces));
        out_normals.push(flatten_points(&unwrapped.normals));
        out_uvs.push(flatten_uvs(&unwrapped.uvs));
    }

    ObjectDescriptor::Mesh {
        scene_id,
        positions: collapse(is_animated, out_positions),
        indices: collapse(is_animated, out_indices),
        normals: collapse(is_animated, out_normals),
        has_uvs: true,
        has_colors: false,
        is_animated,
        uvs: Some(collapse(is_animated, out_uvs)),
        wrap_us: Some(true),
        colors: None,
    }
}

fn build_textured_mesh(
    scene_id: usize,
    is_animated: bool,
    positions: &Timeline<Vec<Vec3>>,
    normals: &Timeline<Vec<Vec3>>,
    uvs: &Timeline<Vec<Vec2>>,
    faces: &[[u32; 3]],
) -> ObjectDescriptor {
    let indices = flatten_faces(faces);
    ObjectDescriptor::Mesh {
        scene_id,
        positions: collapse(
            is_animated,
            positions.frames().iter().map(|f| flatten_points(f)).collect(),
        ),
        indices: collapse(
            is_animated,
            positions.frames().iter().map(|_| indices.clone()).collect(),
        ),
        normals: collapse(
            is_animated,
            normals.frames().iter().map(|f| flatten_points(f)).collect(),
        ),
        has_uvs: true,
        has_colors: false,
        is_animated,
        uvs: Some(collapse(
            is_animated,
            uvs.frames().iter().map(|f| flatten_uvs(f)).collect(),
        )),
        wrap_us: Some(false),
        colors: None,
    }
}

fn build_colored_mesh(
    scene_id: usize,
    is_animated: bool,
    positions: &Timeline<Vec<Vec3>>,
    normals: &Timeline<Vec<Vec3>>,
    scalars: &Timeline<Vec<f32>>,
    faces: &[[u32; 3]],
) -> ObjectDescriptor {
    let indices = flatten_faces(faces);
    let color_frames: Vec<Vec<f32>> = scalars
        .frames()
        .iter()
        .map(|frame| {
            let rgb: Vec<[f32; 3]> = frame.iter().map(|&s| turbo(s)).collect();
            flatten_colors(&rgb)
        })
        .collect();
    ObjectDescriptor::Mesh {
        scene_id,
        positions: collapse(
            is_animated,
            positions.frames().iter().map(|f| flatten_points(f)).collect(),
        ),
        indices: collapse(
            is_animated,
            positions.frames().iter().map(|_| indices.clone()).collect(),
        ),
        normals: collapse(
            is_animated,
            normals.frames().iter().map(|f| flatten_points(f)).collect(),
        ),
        has_uvs: false,
        has_colors: true,
        is_animated,
        uvs: None,
        wrap_us: None,
        colors: Some(collapse(is_animated, color_frames)),
    }
}

fn build_plain_mesh(
    scene_id: usize,
    is_animated: bool,
    positions: &Timeline<Vec<Vec3>>,
    normals: &Timeline<Vec<Vec3>>,
    faces: &[[u32; 3]],
) -> ObjectDescriptor {
    let indices = flatten_faces(faces);
    ObjectDescriptor::Mesh {
        scene_id,
        positions: collapse(
            is_animated,
            positions.frames().iter().map(|f| flatten_points(f)).collect(),
        ),
        indices: collapse(
            is_animated,
            positions.frames().iter().map(|_| indices.clone()).collect(),
        ),
        normals: collapse(
            is_animated,
            normals.frames().iter().map(|f| flatten_points(f)).collect(),
        ),
        has_uvs: false,
        has_colors: false,
        is_animated,
        uvs: None,
        wrap_us: None,
        colors: None,
    }
}

// === Eager validation ===
//
// The pipeline has no partial-failure semantics; everything is checked before
// the first array is transformed.

fn ensure_frames_match<T, U>(
    name: &'static str,
    reference: &Timeline<T>,
    other: &Timeline<U>,
) -> Result<(), Error> {
    if reference.is_animated() != other.is_animated()
        || reference.frame_count() != other.frame_count()
    {
        return Err(Error::FrameCountMismatch {
            name,
            expected: reference.frame_count(),
            actual: other.frame_count(),
        });
    }
    Ok(())
}

fn ensure_frame_lengths<T>(
    name: &'static str,
    frames: &[Vec<T>],
    expected: usize,
) -> Result<(), Error> {
    for frame in frames {
        if frame.len() != expected {
            return Err(Error::ShapeMismatch {
                name,
                expected,
                actual: frame.len(),
            });
        }
    }
    Ok(())
}

fn validate_mesh(mesh: &MeshData) -> Result<(), Error> {
    mesh.positions.ensure_nonempty("positions")?;
    let vertex_count = mesh.positions.frames()[0].len();
    ensure_frame_lengths("positions", mesh.positions.frames(), vertex_count)?;

    ensure_frames_match("normals", &mesh.positions, &mesh.normals)?;
    ensure_frame_lengths("normals", mesh.normals.frames(), vertex_count)?;

    for &index in mesh.faces.iter().flatten() {
        if index as usize >= vertex_count {
            return Err(Error::FaceIndexOutOfRange {
                index,
                vertex_count,
            });
        }
    }

    match &mesh.attributes {
        MeshAttributes::Plain => {}
        MeshAttributes::Uvs { uvs, .. } => {
            ensure_frames_match("uvs", &mesh.positions, uvs)?;
            ensure_frame_lengths("uvs", uvs.frames(), vertex_count)?;
        }
        MeshAttributes::Scalars(scalars) => {
            ensure_frames_match("colors", &mesh.positions, scalars)?;
            ensure_frame_lengths("colors", scalars.frames(), vertex_count)?;
        }
    }
    Ok(())
}

fn validate_point_cloud(cloud: &PointCloudData) -> Result<(), Error> {
    cloud.positions.ensure_nonempty("positions")?;
    let point_count = cloud.positions.frames()[0].len();
    ensure_frame_lengths("positions", cloud.positions.frames(), point_count)?;
    if let Some(scalars) = &cloud.scalars {
        ensure_frames_match("colors", &cloud.positions, scalars)?;
        ensure_frame_lengths("colors", scalars.frames(), point_count)?;
    }
    Ok(())
}

fn validate_curve(curve: &CurveData) -> Result<(), Error> {
    curve.positions.ensure_nonempty("positions")?;
    let point_count = curve.positions.frames()[0].len();
    ensure_frame_lengths("positions", curve.positions.frames(), point_count)?;
    if curve.looped && point_count < 2 {
        return Err(Error::ShapeMismatch {
            name: "looped curve positions",
            expected: 2,
            actual: point_count,
        });
    }
    if let Some(scalar) = &curve.scalar {
        ensure_frames_match("colors", &curve.positions, scalar)?;
    }
    Ok(())
}
