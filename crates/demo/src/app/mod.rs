//! Frame loop infrastructure shared by the binary and the tests.
//!
//! The scheduler owns the scene and a draw target; everything runs on one
//! thread and input is applied between ticks.

pub mod camera;
pub mod input;
pub mod runner;
pub mod stats;
pub mod uniforms;

pub use camera::{CameraMove, FlyCamera};
pub use input::{Action, Key};
pub use runner::{FixedStepDriver, FrameScheduler, PacedDriver, SchedulerState, TickOutcome};
pub use stats::{FrameReport, FrameStats};
pub use uniforms::{ModelUniforms, ViewUniforms};
