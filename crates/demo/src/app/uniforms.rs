use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use super::camera::FlyCamera;

/// Per-frame camera block shared by every draw.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ViewUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 3],
    pub _pad: f32,
}

impl ViewUniforms {
    pub fn from_camera(camera: &FlyCamera) -> Self {
        let view = camera.view_matrix();
        let proj = camera.projection_matrix();

        Self {
            view_proj: (proj * view).to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            camera_pos: camera.position.to_array(),
            _pad: 0.0,
        }
    }
}

/// Per-draw block: model transform and flat color.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ModelUniforms {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl ModelUniforms {
    pub fn new(model: Mat4, color: [f32; 4]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }

    pub fn translation(&self) -> glam::Vec3 {
        self.model_matrix().w_axis.truncate()
    }
}
