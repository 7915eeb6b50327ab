//! Render sink for drawables.

use crate::app::uniforms::{ModelUniforms, ViewUniforms};

/// Geometry a draw call refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Surface,
    Sphere,
}

/// Receives one frame of draw calls.
pub trait DrawTarget {
    fn begin_frame(&mut self, view: &ViewUniforms);
    fn draw(&mut self, mesh: MeshKind, model: &ModelUniforms, element_count: u32);
    fn present(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
    pub mesh: MeshKind,
    pub model: ModelUniforms,
    pub element_count: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedFrame {
    pub view: ViewUniforms,
    pub draws: Vec<DrawCall>,
}

impl RecordedFrame {
    pub fn count(&self, mesh: MeshKind) -> usize {
        self.draws.iter().filter(|d| d.mesh == mesh).count()
    }
}

/// Headless target that keeps the last presented frame.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    current: Option<RecordedFrame>,
    last_frame: Option<RecordedFrame>,
    frames_presented: u64,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.last_frame.as_ref()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl DrawTarget for RecordingTarget {
    fn begin_frame(&mut self, view: &ViewUniforms) {
        if self.current.is_some() {
            log::warn!("begin_frame called twice; dropping unpresented frame");
        }
        self.current = Some(RecordedFrame {
            view: *view,
            draws: Vec::new(),
        });
    }

    fn draw(&mut self, mesh: MeshKind, model: &ModelUniforms, element_count: u32) {
        match &mut self.current {
            Some(frame) => frame.draws.push(DrawCall {
                mesh,
                model: *model,
                element_count,
            }),
            None => log::warn!("draw({:?}) outside a frame ignored", mesh),
        }
    }

    fn present(&mut self) {
        if let Some(frame) = self.current.take() {
            self.last_frame = Some(frame);
            self.frames_presented += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;

    #[test]
    fn test_records_presented_frame() {
        let mut target = RecordingTarget::new();
        let model = ModelUniforms::new(Mat4::IDENTITY, [1.0; 4]);

        target.draw(MeshKind::Sphere, &model, 6);
        let view: ViewUniforms = bytemuck::Zeroable::zeroed();
        target.begin_frame(&view);
        target.draw(MeshKind::Surface, &model, 12);
        target.draw(MeshKind::Sphere, &model, 6);
        assert!(target.last_frame().is_none());
        target.present();

        let frame = target.last_frame().unwrap();
        assert_eq!(frame.draws.len(), 2);
        assert_eq!(frame.count(MeshKind::Sphere), 1);
        assert_eq!(target.frames_presented(), 1);
    }

    #[test]
    fn test_present_without_frame_is_noop() {
        let mut target = RecordingTarget::new();
        target.present();
        assert_eq!(target.frames_presented(), 0);
    }
}
