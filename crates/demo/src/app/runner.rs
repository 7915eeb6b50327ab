use std::collections::VecDeque;
use std::time::{Duration, Instant};

use rollsim::constants::TICK_PERIOD_MS;
use rollsim::StepReport;

use super::input::{Action, Key};
use super::stats::{FrameReport, FrameStats};
use crate::scene::{DrawTarget, Scene};

/// Lifecycle of a [`FrameScheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    /// Never exposed yet.
    Stopped,
    Running,
    /// Hidden; ticks are ignored until exposed again.
    Paused,
    /// Terminal.
    Shutdown,
}

/// Result of one executed tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickOutcome {
    pub step: StepReport,
    /// Set on every `stats_interval`-th tick.
    pub report: Option<FrameReport>,
}

/// Drives the scene at a fixed period: step, refresh transforms, render.
pub struct FrameScheduler<T: DrawTarget> {
    scene: Scene,
    target: T,
    state: SchedulerState,
    period: Duration,
    stats: FrameStats,
    pending: VecDeque<Action>,
}

impl<T: DrawTarget> FrameScheduler<T> {
    pub fn new(scene: Scene, target: T) -> Self {
        Self {
            scene,
            target,
            state: SchedulerState::Stopped,
            period: Duration::from_millis(TICK_PERIOD_MS),
            stats: FrameStats::default(),
            pending: VecDeque::new(),
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period.max(Duration::from_millis(1));
        self
    }

    pub fn with_stats_interval(mut self, interval: u32) -> Self {
        self.stats = FrameStats::new(interval);
        self
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Window exposure changed. The first visible exposure initializes the
    /// scene; later ones only resume.
    pub fn on_exposed(&mut self, visible: bool) {
        if self.state == SchedulerState::Shutdown {
            return;
        }
        if !visible {
            self.on_hidden();
            return;
        }

        if self.scene.init() {
            log::info!("Starting frame loop at {:?} per tick", self.period);
        }
        if self.state != SchedulerState::Running {
            self.stats.restart(Instant::now());
        }
        self.state = SchedulerState::Running;
    }

    pub fn on_hidden(&mut self) {
        if self.state == SchedulerState::Running {
            self.state = SchedulerState::Paused;
            self.pending.clear();
        }
    }

    pub fn shutdown(&mut self) {
        if self.state != SchedulerState::Shutdown {
            log::info!("Frame loop shut down after {} ticks", self.stats.frames());
            self.state = SchedulerState::Shutdown;
            self.pending.clear();
        }
    }

    /// Queue an action for the start of the next tick. Input that arrives
    /// while not running is dropped.
    pub fn queue(&mut self, action: Action) {
        if self.is_running() {
            self.pending.push_back(action);
        } else {
            log::debug!("Ignoring {:?} while {:?}", action, self.state);
        }
    }

    pub fn handle_key(&mut self, key: Key) -> Option<Action> {
        let action = key.action()?;
        self.queue(action);
        Some(action)
    }

    /// Run one tick of `dt` seconds. Returns `None` if the scheduler isn't
    /// running (or a queued `Quit` just stopped it).
    pub fn tick(&mut self, dt: f32) -> Option<TickOutcome> {
        if !self.is_running() {
            return None;
        }

        while let Some(action) = self.pending.pop_front() {
            if action == Action::Quit {
                self.shutdown();
                return None;
            }
            self.scene.apply(action);
        }

        let report = self.stats.tick_started(Instant::now());
        if let Some(report) = &report {
            log::info!("{}", report.format_summary());
        }

        let step = self.scene.step(dt);
        self.scene.update_transforms();
        self.scene.render(&mut self.target);

        Some(TickOutcome { step, report })
    }
}

/// Deterministic driver: a fixed number of ticks, no sleeping.
#[derive(Clone, Copy, Debug)]
pub struct FixedStepDriver {
    pub dt: f32,
}

impl Default for FixedStepDriver {
    fn default() -> Self {
        Self {
            dt: rollsim::constants::TICK_DT,
        }
    }
}

impl FixedStepDriver {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }

    /// Returns the number of ticks actually executed.
    pub fn run<T: DrawTarget>(&self, scheduler: &mut FrameScheduler<T>, ticks: usize) -> usize {
        let mut executed = 0;
        for _ in 0..ticks {
            if scheduler.tick(self.dt).is_none() {
                break;
            }
            executed += 1;
        }
        executed
    }
}

/// Real-time driver: sleeps so ticks start one period apart.
#[derive(Clone, Copy, Debug)]
pub struct PacedDriver {
    period: Duration,
}

impl PacedDriver {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn for_scheduler<T: DrawTarget>(scheduler: &FrameScheduler<T>) -> Self {
        Self::new(scheduler.period())
    }

    /// Tick for roughly `duration` of wall time, or until the scheduler
    /// stops running. Returns the number of ticks executed.
    pub fn run_for<T: DrawTarget>(
        &self,
        scheduler: &mut FrameScheduler<T>,
        duration: Duration,
    ) -> usize {
        let dt = self.period.as_secs_f32();
        let start = Instant::now();
        let mut executed = 0;

        while start.elapsed() < duration {
            let tick_start = Instant::now();
            if scheduler.tick(dt).is_none() {
                break;
            }
            executed += 1;

            if let Some(remaining) = self.period.checked_sub(tick_start.elapsed()) {
                std::thread::sleep(remaining);
            } else {
                log::debug!("Tick overran the {:?} period", self.period);
            }
        }
        executed
    }
}
