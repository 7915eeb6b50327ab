//! The owned scene aggregate: surface, bodies, camera and drawables.

pub mod drawable;
pub mod target;

pub use drawable::{Drawable, SphereModel, SurfaceMesh};
pub use target::{DrawCall, DrawTarget, MeshKind, RecordedFrame, RecordingTarget};

use rollsim::{
    generate_surface, step, BodySet, HeightField, PhysicsParams, RainConfig, RainToggle,
    RigidSphere, StepReport, SurfaceError,
};

use crate::app::camera::FlyCamera;
use crate::app::input::Action;
use crate::app::uniforms::ViewUniforms;
use crate::config::DemoConfig;
use drawable::{BALL_COLOR, RAIN_COLOR};

pub struct Scene {
    pub surface: HeightField,
    pub bodies: BodySet,
    pub camera: FlyCamera,
    pub params: PhysicsParams,
    surface_mesh: SurfaceMesh,
    ball_model: SphereModel,
    /// One model per raindrop, same order as `bodies.rain()`.
    rain_models: Vec<SphereModel>,
    initialized: bool,
}

impl Scene {
    /// Assemble a scene; the rain spawns around the surface center.
    pub fn new(
        surface: HeightField,
        ball: RigidSphere,
        rain: RainConfig,
        params: PhysicsParams,
        camera: FlyCamera,
    ) -> Self {
        let bodies = BodySet::new(ball, rain, surface.center());
        let surface_mesh = SurfaceMesh::new(&surface);
        let ball_model = SphereModel::new(bodies.ball(), BALL_COLOR);

        Self {
            surface,
            bodies,
            camera,
            params,
            surface_mesh,
            ball_model,
            rain_models: Vec::new(),
            initialized: false,
        }
    }

    pub fn from_config(config: &DemoConfig) -> Result<Self, SurfaceError> {
        let surface = generate_surface(&config.surface)?;
        let ball = RigidSphere::new(config.ball.start, config.ball.radius);
        let camera = config.camera.build(ball.position);

        Ok(Self::new(
            surface,
            ball,
            config.rain.clone(),
            config.physics.clone(),
            camera,
        ))
    }

    /// Initialize every drawable. Returns false if already done.
    pub fn init(&mut self) -> bool {
        if self.initialized {
            return false;
        }

        self.surface_mesh.init();
        self.ball_model.init();
        for model in &mut self.rain_models {
            model.init();
        }
        self.initialized = true;
        self.update_transforms();

        log::info!(
            "Scene initialized: {}x{} surface, {} bodies",
            self.surface.width,
            self.surface.depth,
            self.bodies.len()
        );
        true
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn step(&mut self, dt: f32) -> StepReport {
        step(&mut self.bodies, &self.surface, &self.params, dt)
    }

    /// Pull body poses into the drawables and aim the camera at the ball.
    pub fn update_transforms(&mut self) {
        self.sync_rain_models();

        self.camera.follow(self.bodies.ball().position);

        self.surface_mesh.update_transform();
        self.ball_model.sync(self.bodies.ball());
        self.ball_model.update_transform();
        for (model, drop) in self.rain_models.iter_mut().zip(self.bodies.rain()) {
            model.sync(drop);
            model.update_transform();
        }
    }

    /// Emit one frame: view block, surface, ball, then raindrops.
    pub fn render(&self, target: &mut dyn DrawTarget) {
        target.begin_frame(&ViewUniforms::from_camera(&self.camera));
        for drawable in self.drawables() {
            drawable.draw(target);
        }
        target.present();
    }

    pub fn drawables(&self) -> impl Iterator<Item = &dyn Drawable> {
        [&self.surface_mesh as &dyn Drawable, &self.ball_model as &dyn Drawable]
            .into_iter()
            .chain(self.rain_models.iter().map(|m| m as &dyn Drawable))
    }

    pub fn drawable_count(&self) -> usize {
        2 + self.rain_models.len()
    }

    /// Apply an input action. `Quit` is the scheduler's business and is
    /// ignored here.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::MoveCamera(movement) => self.camera.translate(movement),
            Action::ToggleRain => {
                self.toggle_rain();
            }
            Action::Quit => {}
        }
    }

    pub fn toggle_rain(&mut self) -> RainToggle {
        let toggle = self.bodies.toggle_rain();
        match toggle {
            RainToggle::Spawned(n) => log::info!("Rain on: {} drops", n),
            RainToggle::Cleared(n) => log::info!("Rain off: {} drops removed", n),
        }
        self.sync_rain_models();
        toggle
    }

    /// Match the number of rain models to the live raindrops. Poses are
    /// synced by index every frame, so only the count matters.
    fn sync_rain_models(&mut self) {
        let drops = self.bodies.rain();
        if self.rain_models.len() > drops.len() {
            self.rain_models.truncate(drops.len());
        }
        for drop in &drops[self.rain_models.len()..] {
            let mut model = SphereModel::new(drop, RAIN_COLOR);
            if self.initialized {
                model.init();
            }
            self.rain_models.push(model);
        }
    }
}
