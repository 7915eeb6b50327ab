use glam::{Mat4, Quat, Vec3};
use rollsim::{HeightField, RigidSphere, SurfaceMeshData};

use super::target::{DrawTarget, MeshKind};
use crate::app::uniforms::ModelUniforms;

/// UV sphere tessellation used for every ball.
const SPHERE_SEGMENTS: u32 = 24;
const SPHERE_RINGS: u32 = 16;

const SURFACE_COLOR: [f32; 4] = [0.35, 0.55, 0.3, 1.0];
pub const BALL_COLOR: [f32; 4] = [0.85, 0.2, 0.15, 1.0];
pub const RAIN_COLOR: [f32; 4] = [0.3, 0.5, 0.95, 1.0];

/// Scene entity that can be initialized once, repositioned and drawn.
pub trait Drawable {
    fn init(&mut self);
    fn update_transform(&mut self);
    fn draw(&self, target: &mut dyn DrawTarget);
}

/// Static triangle mesh of the height field.
pub struct SurfaceMesh {
    mesh: SurfaceMeshData,
    model: Mat4,
    initialized: bool,
}

impl SurfaceMesh {
    pub fn new(surface: &HeightField) -> Self {
        Self {
            mesh: surface.mesh(),
            model: Mat4::IDENTITY,
            initialized: false,
        }
    }

    pub fn mesh(&self) -> &SurfaceMeshData {
        &self.mesh
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl Drawable for SurfaceMesh {
    fn init(&mut self) {
        log::debug!(
            "Surface mesh: {} vertices, {} triangles",
            self.mesh.positions.len(),
            self.mesh.indices.len() / 3
        );
        self.initialized = true;
    }

    fn update_transform(&mut self) {
        // The field never moves
        self.model = Mat4::IDENTITY;
    }

    fn draw(&self, target: &mut dyn DrawTarget) {
        if !self.initialized {
            return;
        }
        target.draw(
            MeshKind::Surface,
            &ModelUniforms::new(self.model, SURFACE_COLOR),
            self.mesh.indices.len() as u32,
        );
    }
}

/// Render proxy for one [`RigidSphere`].
#[derive(Clone, Debug)]
pub struct SphereModel {
    position: Vec3,
    radius: f32,
    orientation: Quat,
    model: Mat4,
    color: [f32; 4],
    initialized: bool,
}

impl SphereModel {
    pub fn new(body: &RigidSphere, color: [f32; 4]) -> Self {
        Self {
            position: body.position,
            radius: body.radius,
            orientation: body.orientation,
            model: body.model_matrix(),
            color,
            initialized: false,
        }
    }

    /// Copy the body's pose; takes effect on the next `update_transform`.
    pub fn sync(&mut self, body: &RigidSphere) {
        self.position = body.position;
        self.radius = body.radius;
        self.orientation = body.orientation;
    }

    pub fn model(&self) -> Mat4 {
        self.model
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn element_count() -> u32 {
        SPHERE_SEGMENTS * SPHERE_RINGS * 6
    }
}

impl Drawable for SphereModel {
    fn init(&mut self) {
        self.initialized = true;
    }

    fn update_transform(&mut self) {
        self.model = Mat4::from_scale_rotation_translation(
            Vec3::splat(self.radius),
            self.orientation,
            self.position,
        );
    }

    fn draw(&self, target: &mut dyn DrawTarget) {
        if !self.initialized {
            return;
        }
        target.draw(
            MeshKind::Sphere,
            &ModelUniforms::new(self.model, self.color),
            Self::element_count(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::target::RecordingTarget;
    use crate::app::uniforms::ViewUniforms;
    use glam::Vec2;

    #[test]
    fn test_uninitialized_drawables_are_skipped() {
        let surface = HeightField::flat(3, 3, 1.0, Vec2::ZERO, 0.0).unwrap();
        let mut mesh = SurfaceMesh::new(&surface);
        let mut target = RecordingTarget::new();
        let view = ViewUniforms::from_camera(&crate::app::FlyCamera::new());

        target.begin_frame(&view);
        mesh.draw(&mut target);
        mesh.init();
        mesh.draw(&mut target);
        target.present();

        let frame = target.last_frame().unwrap();
        assert_eq!(frame.draws.len(), 1);
        assert_eq!(frame.draws[0].element_count, 24);
    }

    #[test]
    fn test_sphere_model_tracks_body() {
        let mut body = RigidSphere::new(Vec3::ZERO, 0.5);
        let mut model = SphereModel::new(&body, BALL_COLOR);
        body.position = Vec3::new(1.0, 2.0, 3.0);

        model.sync(&body);
        assert_eq!(model.model().w_axis.truncate(), Vec3::ZERO);
        model.update_transform();
        assert_eq!(model.model(), body.model_matrix());
    }
}
