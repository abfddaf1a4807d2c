//! Simulation state and per-frame stepping.
//!
//! The [`Scene`] owns every dot, the random source and the configuration,
//! and advances all of them by one frame at a time.

use crate::color;
use crate::config::AnimationConfig;
use crate::connections::select_connections;
use crate::kinematics::{self, Bounds};
use crate::types::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The animated dot population.
///
/// The population size is fixed at construction; dot indices stay valid for
/// the lifetime of the scene.
pub struct Scene {
    config: AnimationConfig,
    dots: Vec<Dot>,
    rng: StdRng,
    frame: u64,
}

impl Scene {
    /// Creates a scene with randomly placed dots, seeded from OS entropy.
    pub fn new(config: AnimationConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a reproducible scene from a seed.
    pub fn with_seed(config: AnimationConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Creates a scene from explicit dots.
    pub fn from_dots(config: AnimationConfig, dots: Vec<Dot>, seed: u64) -> Self {
        Self {
            config,
            dots,
            rng: StdRng::seed_from_u64(seed),
            frame: 0,
        }
    }

    fn with_rng(config: AnimationConfig, mut rng: StdRng) -> Self {
        let dots = (0..config.dot_count)
            .map(|_| spawn_dot(&config, &mut rng))
            .collect();
        Self {
            config,
            dots,
            rng,
            frame: 0,
        }
    }

    /// All dots, indexed by identity.
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// The configuration the scene runs with.
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Number of frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Movement limits for dots in this scene.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.config.canvas_width,
            self.config.canvas_height,
            self.config.dot_size,
        )
    }

    /// Dot centers in index order.
    pub fn centers(&self) -> Vec<Point> {
        self.dots
            .iter()
            .map(|dot| dot.center(self.config.dot_size))
            .collect()
    }

    /// Applies one input event to every affected dot.
    pub fn apply_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Boost => {
                log::debug!("Boosting {} dots", self.dots.len());
                for dot in &mut self.dots {
                    kinematics::boost(dot, self.config.boost_speed, &mut self.rng);
                }
            }
            InputEvent::Deflect(origin) => {
                let mut affected = 0;
                for dot in &mut self.dots {
                    if kinematics::deflect(
                        dot,
                        origin,
                        self.config.deflect_radius,
                        self.config.boost_speed,
                        self.config.dot_size,
                        &mut self.rng,
                    ) {
                        affected += 1;
                    }
                }
                log::debug!(
                    "Deflected {affected} dots away from ({:.1}, {:.1})",
                    origin.x,
                    origin.y
                );
            }
        }
    }

    /// Advances the scene by one frame.
    ///
    /// Moves every dot, eases its color, then returns the connections to
    /// draw between the updated centers.
    pub fn step(&mut self) -> Vec<Connection> {
        let bounds = self.bounds();
        let rate = self.config.color_change_speed;
        let palette = self.config.palette;

        for dot in &mut self.dots {
            kinematics::advance(dot, bounds);
            if let Some(decay) = &self.config.speed_decay {
                kinematics::decay_speed(dot, decay);
            }
            if color::update(dot, rate, palette, &mut self.rng) {
                log::trace!("new target color {}", dot.target_color);
            }
        }

        self.frame += 1;
        select_connections(
            &self.centers(),
            self.config.max_line_distance,
            self.config.max_connections,
        )
    }
}

/// Creates a dot at a random position with a random heading and colors.
fn spawn_dot<R: Rng + ?Sized>(config: &AnimationConfig, rng: &mut R) -> Dot {
    let bounds = Bounds::new(config.canvas_width, config.canvas_height, config.dot_size);
    Dot {
        position: Point::new(
            rng.gen_range(0.0..=bounds.max_x),
            rng.gen_range(0.0..=bounds.max_y),
        ),
        direction: kinematics::random_unit(rng),
        speed: config.speed,
        color: config.palette.sample(rng),
        target_color: config.palette.sample(rng),
    }
}
