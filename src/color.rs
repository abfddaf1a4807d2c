//! Per-frame color easing.
//!
//! Each dot's color creeps towards a target color; once it gets close on all
//! three channels a new target is drawn, so colors drift forever.

use crate::config::Palette;
use crate::constants::{COLOR_CONVERGENCE_THRESHOLD, VIVID_CHANNEL_MIN};
use crate::types::{Dot, Rgb};
use rand::Rng;

/// Eases one channel towards its target.
///
/// The blended value is truncated towards zero. When truncation would stall a
/// channel that has not reached its target, it moves by one unit instead, so
/// easing always makes progress and never overshoots (`rate` is in `(0, 1]`).
pub fn ease_channel(current: u8, target: u8, rate: f32) -> u8 {
    let c = current as i32;
    let t = target as i32;
    let blended = c as f32 + (t - c) as f32 * rate;
    let mut next = blended.trunc() as i32;
    if next == c && t != c {
        next += (t - c).signum();
    }
    next.clamp(0, 255) as u8
}

/// Eases every channel of `current` towards `target`.
pub fn ease(current: Rgb, target: Rgb, rate: f32) -> Rgb {
    let [r, g, b] = current.channels();
    let [tr, tg, tb] = target.channels();
    Rgb::new(
        ease_channel(r, tr, rate),
        ease_channel(g, tg, rate),
        ease_channel(b, tb, rate),
    )
}

/// Whether every channel is strictly closer than the convergence threshold.
pub fn has_converged(current: Rgb, target: Rgb) -> bool {
    current
        .channels()
        .iter()
        .zip(target.channels().iter())
        .all(|(&c, &t)| (c as i32 - t as i32).abs() < COLOR_CONVERGENCE_THRESHOLD)
}

impl Palette {
    /// Draws a random color from this palette.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> Rgb {
        let low = match self {
            Palette::Full => 0,
            Palette::Vivid => VIVID_CHANNEL_MIN,
        };
        Rgb::new(
            rng.gen_range(low..=255),
            rng.gen_range(low..=255),
            rng.gen_range(low..=255),
        )
    }
}

/// Runs one easing step on a dot. Returns `true` when the target was
/// replaced.
///
/// A dot that is already converged only gets a new target; its color is
/// left untouched for this frame.
pub fn update<R: Rng + ?Sized>(dot: &mut Dot, rate: f32, palette: Palette, rng: &mut R) -> bool {
    if has_converged(dot.color, dot.target_color) {
        dot.target_color = palette.sample(rng);
        return true;
    }

    dot.color = ease(dot.color, dot.target_color, rate);

    if has_converged(dot.color, dot.target_color) {
        dot.target_color = palette.sample(rng);
        return true;
    }
    false
}
