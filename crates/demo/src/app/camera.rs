use glam::{Mat4, Vec3};

/// Discrete camera translation along a world axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraMove {
    /// +Z
    Forward,
    /// -Z
    Back,
    /// -X
    Left,
    /// +X
    Right,
    /// -Y
    Down,
    /// +Y
    Up,
}

impl CameraMove {
    pub fn direction(self) -> Vec3 {
        match self {
            CameraMove::Forward => Vec3::Z,
            CameraMove::Back => Vec3::NEG_Z,
            CameraMove::Left => Vec3::NEG_X,
            CameraMove::Right => Vec3::X,
            CameraMove::Down => Vec3::NEG_Y,
            CameraMove::Up => Vec3::Y,
        }
    }
}

/// Look-at camera with a perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct FlyCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// World units per [`CameraMove`].
    pub step: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 8.0, -15.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: std::f32::consts::FRAC_PI_2, // 90 degrees
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 3000.0,
            step: 1.0,
        }
    }
}

impl FlyCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, pos: Vec3) -> Self {
        self.position = pos;
        self
    }

    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    pub fn look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.position = eye;
        self.target = target;
        self.up = up;
    }

    pub fn perspective(&mut self, fov_y: f32, aspect: f32, near: f32, far: f32) {
        self.fov_y = fov_y;
        self.aspect = aspect;
        self.near = near;
        self.far = far;
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        // Eye on the target or looking along `up` would yield NaNs
        let mut dir = self.forward();
        if dir == Vec3::ZERO {
            dir = Vec3::Z;
        }
        let mut up = self.up.normalize_or_zero();
        if up == Vec3::ZERO || dir.cross(up).length_squared() < 1e-8 {
            up = if dir.y.abs() < 0.99 { Vec3::Y } else { Vec3::Z };
        }
        Mat4::look_at_rh(self.position, self.position + dir, up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Move the eye one step; the target stays put.
    pub fn translate(&mut self, movement: CameraMove) {
        self.position += movement.direction() * self.step;
    }

    /// Aim at `target`, typically the ball.
    pub fn follow(&mut self, target: Vec3) {
        if target.is_finite() {
            self.target = target;
        }
    }
}
