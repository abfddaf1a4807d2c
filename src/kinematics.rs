//! Dot movement: wall reflection, speed decay and input-driven boosts.
//!
//! Directions are kept unit-length at all times. Reflection only negates a
//! component, and every freshly computed heading goes through
//! [`normalize_or_random`].

use crate::config::SpeedDecay;
use crate::types::{Dot, Point};
use rand::Rng;
use std::f32::consts::TAU;

/// Vectors shorter than this cannot be normalized reliably.
const MIN_NORMALIZABLE_LENGTH: f32 = 1e-6;

/// Limits of a dot's top-left corner: `[0, max_x] x [0, max_y]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Canvas width minus dot diameter
    pub max_x: f32,
    /// Canvas height minus dot diameter
    pub max_y: f32,
}

impl Bounds {
    /// Bounds for a canvas and dot diameter.
    pub fn new(canvas_width: f32, canvas_height: f32, dot_size: f32) -> Self {
        Self {
            max_x: (canvas_width - dot_size).max(0.0),
            max_y: (canvas_height - dot_size).max(0.0),
        }
    }

    /// Whether a position lies inside the bounds.
    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.max_x).contains(&p.x) && (0.0..=self.max_y).contains(&p.y)
    }
}

/// Samples a uniformly distributed unit vector.
pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Point {
    let angle = rng.gen_range(0.0..TAU);
    Point::new(angle.cos(), angle.sin())
}

/// Normalizes `v`, substituting a random unit vector when `v` has no usable
/// length (zero, subnormal or non-finite).
pub fn normalize_or_random<R: Rng + ?Sized>(v: Point, rng: &mut R) -> Point {
    let len = v.length();
    if len.is_finite() && len > MIN_NORMALIZABLE_LENGTH {
        Point::new(v.x / len, v.y / len)
    } else {
        log::trace!("degenerate heading ({}, {}), using a random one", v.x, v.y);
        random_unit(rng)
    }
}

/// Advances one dot by one frame.
///
/// An axis whose tentative coordinate would touch or cross a wall has its
/// direction component negated before the move; the result is then clamped
/// into `bounds`.
pub fn advance(dot: &mut Dot, bounds: Bounds) {
    let speed = dot.speed;

    let next_x = dot.position.x + dot.direction.x * speed;
    if next_x <= 0.0 || next_x >= bounds.max_x {
        dot.direction.x = -dot.direction.x;
    }
    let next_y = dot.position.y + dot.direction.y * speed;
    if next_y <= 0.0 || next_y >= bounds.max_y {
        dot.direction.y = -dot.direction.y;
    }

    dot.position.x = (dot.position.x + dot.direction.x * speed).clamp(0.0, bounds.max_x);
    dot.position.y = (dot.position.y + dot.direction.y * speed).clamp(0.0, bounds.max_y);
}

/// Applies one frame of speed decay: `max(min_speed, speed * factor)`.
///
/// A dot already at or below the floor is left alone so decay never raises
/// a speed.
pub fn decay_speed(dot: &mut Dot, decay: &SpeedDecay) {
    if dot.speed > decay.min_speed {
        dot.speed = (dot.speed * decay.factor).max(decay.min_speed);
    }
}

/// Sends a dot off in a random direction at `boost_speed`.
pub fn boost<R: Rng + ?Sized>(dot: &mut Dot, boost_speed: f32, rng: &mut R) {
    dot.direction = random_unit(rng);
    dot.speed = boost_speed;
}

/// Pushes a dot away from `origin` if its center lies within `radius`.
///
/// # Arguments
///
/// * `dot` - The dot to deflect
/// * `origin` - Canvas position of the pointer press
/// * `radius` - Reach of the deflection, inclusive
/// * `boost_speed` - Speed given to deflected dots
/// * `dot_size` - Dot diameter, used to find the dot's center
/// * `rng` - Source for the fallback heading when the center sits on `origin`
///
/// # Returns
///
/// `true` if the dot was within reach and got a new heading.
pub fn deflect<R: Rng + ?Sized>(
    dot: &mut Dot,
    origin: Point,
    radius: f32,
    boost_speed: f32,
    dot_size: f32,
    rng: &mut R,
) -> bool {
    let center = dot.center(dot_size);
    if center.distance(origin) > radius {
        return false;
    }
    dot.direction = normalize_or_random(center.sub(origin), rng);
    dot.speed = boost_speed;
    true
}
