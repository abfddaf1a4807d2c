//! # Random Dots
//!
//! A generative screensaver-style animation: colored dots drift across a
//! canvas, bounce off its walls, slowly change color, link up with nearby
//! dots and glow through a Gaussian-blur post-process.
//!
//! ## Features
//! - Wall reflection with unit-length headings and optional boost decay
//! - Endless color drift towards randomly re-drawn targets
//! - Greedy, degree-capped proximity lines (solid or color-blended)
//! - Transient or trail-preserving compositing with blur and optional glow
//! - Key press boosts every dot; pointer press scatters nearby dots
//! - Named presets or a JSON configuration document

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod animation;
mod color;
mod config;
mod connections;
mod constants;
mod error;
mod kinematics;
mod render;
mod simulation;
mod types;
mod ui;

// Re-export public types and functions
pub use animation::{AnimationLoop, FrameTicker};
pub use color::{ease, ease_channel, has_converged};
pub use config::*;
pub use connections::select_connections;
pub use constants::*;
pub use error::DotsError;
pub use kinematics::{advance, decay_speed, deflect, normalize_or_random, random_unit, Bounds};
pub use render::*;
pub use simulation::*;
pub use types::*;
pub use ui::DotsApp;

/// Runs the animation with the classic preset.
///
/// # Example
///
/// ```no_run
/// use random_dots::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    run_app_with(AnimationConfig::default())
}

/// Runs the animation with the given configuration.
///
/// Opens a fixed-size window matching the canvas and blocks until it is
/// closed.
pub fn run_app_with(config: AnimationConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([config.canvas_width, config.canvas_height])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(DotsApp::new(config)?))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene() {
        let scene = Scene::with_seed(AnimationConfig::default(), 0);
        assert_eq!(scene.dots().len(), DOT_COUNT);
        assert_eq!(scene.frame(), 0);
    }

    #[test]
    fn test_app_creation_rejects_bad_config() {
        let config = AnimationConfig {
            canvas_width: 0.0,
            ..AnimationConfig::default()
        };
        assert!(DotsApp::new(config).is_err());
    }
}
