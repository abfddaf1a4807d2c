//! The tick-driven animation loop.
//!
//! The loop has a single "running" state. Its owner polls it with the current
//! time; at most one tick runs per poll, and only once the frame interval has
//! elapsed since the previous tick.

use crate::config::AnimationConfig;
use crate::error::DotsError;
use crate::render::{FrameCompositor, RasterSurface, RenderSettings, SkiaSurface};
use crate::simulation::Scene;
use crate::types::{Connection, InputEvent};
use std::time::{Duration, Instant};

/// Decides when the next tick is due.
///
/// Times are seconds on any monotonic clock. Late polls run a single tick;
/// missed intervals are neither caught up nor counted.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameTicker {
    interval: f64,
    last_tick: Option<f64>,
}

impl FrameTicker {
    /// Creates a ticker firing every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.as_secs_f64(),
            last_tick: None,
        }
    }

    /// Returns `true` and records the tick if one is due at `now`.
    pub fn poll(&mut self, now: f64) -> bool {
        let due = match self.last_tick {
            None => true,
            Some(last) => now - last >= self.interval,
        };
        if due {
            self.last_tick = Some(now);
        }
        due
    }

    /// Time left until the next tick is due at `now`.
    pub fn time_until_next(&self, now: f64) -> Duration {
        match self.last_tick {
            None => Duration::ZERO,
            Some(last) => Duration::from_secs_f64((last + self.interval - now).max(0.0)),
        }
    }

    /// The configured interval.
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(self.interval)
    }
}

/// Owns the scene, the compositor and the ticker, and runs them in order.
pub struct AnimationLoop<S: RasterSurface = SkiaSurface> {
    scene: Scene,
    compositor: FrameCompositor<S>,
    ticker: FrameTicker,
    pending: Vec<InputEvent>,
    connections: Vec<Connection>,
}

impl AnimationLoop<SkiaSurface> {
    /// Validates the configuration and builds a loop drawing into a
    /// tiny-skia surface of canvas size.
    pub fn new(config: AnimationConfig) -> Result<Self, DotsError> {
        config.validate()?;
        let surface = SkiaSurface::new(
            config.canvas_width as u32,
            config.canvas_height as u32,
        )?;
        log::info!(
            "Starting animation: {} dots on {}x{}, {:?}, tick every {} ms",
            config.dot_count,
            surface.width(),
            surface.height(),
            config.render_mode,
            config.frame_interval_ms
        );
        Ok(Self::from_parts(Scene::new(config), surface))
    }
}

impl<S: RasterSurface> AnimationLoop<S> {
    /// Assembles a loop from an existing scene and surface.
    pub fn from_parts(scene: Scene, surface: S) -> Self {
        let config = scene.config();
        let settings = RenderSettings::from(config);
        let ticker = FrameTicker::new(Duration::from_millis(config.frame_interval_ms));
        Self {
            compositor: FrameCompositor::new(surface, settings),
            scene,
            ticker,
            pending: Vec::new(),
            connections: Vec::new(),
        }
    }

    /// Queues an input event for the next tick.
    pub fn queue_input(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Runs a tick if one is due at `now`. Returns whether a new frame was
    /// produced.
    pub fn poll(&mut self, now: f64) -> bool {
        if !self.ticker.poll(now) {
            return false;
        }
        self.tick();
        true
    }

    /// Runs one tick unconditionally: apply input, step, select, render.
    pub fn tick(&mut self) {
        let started = Instant::now();

        for event in self.pending.drain(..) {
            self.scene.apply_input(event);
        }
        self.connections = self.scene.step();
        self.compositor.render(self.scene.dots(), &self.connections);

        let elapsed = started.elapsed();
        if elapsed > self.ticker.interval() {
            log::debug!(
                "Frame {} took {:?}, longer than the {:?} interval",
                self.scene.frame(),
                elapsed,
                self.ticker.interval()
            );
        } else {
            log::trace!(
                "Frame {}: {} connections in {:?}",
                self.scene.frame(),
                self.connections.len(),
                elapsed
            );
        }
    }

    /// Time until the next tick is due.
    pub fn time_until_next_tick(&self, now: f64) -> Duration {
        self.ticker.time_until_next(now)
    }

    /// The simulated scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Connections drawn in the latest frame.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// The surface holding the latest frame.
    pub fn surface(&self) -> &S {
        self.compositor.surface()
    }

    /// Frames rendered so far.
    pub fn frames_rendered(&self) -> u64 {
        self.compositor.frames_rendered()
    }

    /// Input events waiting for the next tick, in arrival order.
    pub fn pending_inputs(&self) -> &[InputEvent] {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use crate::types::{Dot, Point, Rgb};

    #[test]
    fn test_ticker_fires_first_poll_then_every_interval() {
        let mut ticker = FrameTicker::new(Duration::from_millis(20));
        assert!(ticker.poll(1.0));
        assert!(!ticker.poll(1.010));
        assert!(ticker.poll(1.020));
        assert!(!ticker.poll(1.030));
        assert!(ticker.poll(1.045));
    }

    #[test]
    fn test_ticker_does_not_catch_up_after_stall() {
        let mut ticker = FrameTicker::new(Duration::from_millis(20));
        assert!(ticker.poll(0.0));
        assert!(ticker.poll(1.0));
        assert!(!ticker.poll(1.001));
    }

    #[test]
    fn test_time_until_next() {
        let mut ticker = FrameTicker::new(Duration::from_millis(20));
        assert_eq!(ticker.time_until_next(0.0), Duration::ZERO);
        ticker.poll(2.0);
        let wait = ticker.time_until_next(2.005);
        assert!(wait > Duration::from_millis(14) && wait <= Duration::from_millis(16));
        assert_eq!(ticker.time_until_next(3.0), Duration::ZERO);
    }

    #[test]
    fn test_loop_renders_only_when_due() {
        let mut animation = AnimationLoop::new(AnimationConfig::default()).unwrap();
        assert!(animation.poll(0.0));
        assert!(!animation.poll(0.005));
        assert!(animation.poll(0.025));
        assert_eq!(animation.frames_rendered(), 2);
        assert_eq!(animation.scene().frame(), 2);
    }

    #[test]
    fn test_queued_input_applies_on_next_tick() {
        let config = AnimationConfig {
            boost_speed: 9.0,
            ..AnimationConfig::default()
        };
        let scene = Scene::with_seed(config, 8);
        let surface = SkiaSurface::new(800, 600).unwrap();
        let mut animation = AnimationLoop::from_parts(scene, surface);

        animation.queue_input(InputEvent::Boost);
        assert_eq!(animation.pending_inputs(), &[InputEvent::Boost]);
        assert!(animation.scene().dots().iter().all(|d| d.speed == 1.0));

        animation.tick();

        assert!(animation.pending_inputs().is_empty());
        assert!(animation.scene().dots().iter().all(|d| d.speed == 9.0));
    }

    #[test]
    fn test_frame_shows_dots_at_their_positions() {
        let config = AnimationConfig {
            canvas_width: 60.0,
            canvas_height: 40.0,
            dot_size: 10.0,
            speed: 0.0,
            blur_radius: 0.0,
            ..AnimationConfig::preset(Preset::Glow)
        };
        let red = Rgb::new(250, 0, 0);
        let dot = Dot {
            position: Point::new(20.0, 10.0),
            direction: Point::new(1.0, 0.0),
            speed: 0.0,
            color: red,
            target_color: Rgb::new(0, 250, 0),
        };
        let scene = Scene::from_dots(config, vec![dot], 0);
        let surface = SkiaSurface::new(60, 40).unwrap();
        let mut animation = AnimationLoop::from_parts(scene, surface);

        animation.tick();

        let [r, g, _, a] = animation.surface().pixel(25, 15).unwrap();
        assert_eq!(a, 255);
        assert!(r > 200 && g < 20);
        assert!(animation.connections().is_empty());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = AnimationConfig {
            color_change_speed: 2.0,
            ..AnimationConfig::default()
        };
        assert!(matches!(
            AnimationLoop::new(config),
            Err(DotsError::InvalidConfig(_))
        ));
    }
}
