//! Application state for the animation window.

use crate::animation::AnimationLoop;
use crate::config::AnimationConfig;
use crate::error::DotsError;
use eframe::egui;

/// The main application structure: the animation loop plus the texture the
/// latest frame is presented through.
pub struct DotsApp {
    /// Scene, compositor and ticker
    pub(super) animation: AnimationLoop,
    /// GPU texture holding the presented frame, created on first present
    pub(super) frame_texture: Option<egui::TextureHandle>,
    /// Canvas size in pixels, used to map pointer positions
    pub(super) canvas_size: egui::Vec2,
    /// Background shown around the canvas
    pub(super) background: egui::Color32,
    /// Number of frames uploaded to the texture
    pub(super) presented_frames: u64,
}

impl DotsApp {
    /// Builds the application for a configuration.
    pub fn new(config: AnimationConfig) -> Result<Self, DotsError> {
        let canvas_size = egui::vec2(config.canvas_width, config.canvas_height);
        let bg = config.background;
        let background = egui::Color32::from_rgb(bg.r, bg.g, bg.b);
        Ok(Self {
            animation: AnimationLoop::new(config)?,
            frame_texture: None,
            canvas_size,
            background,
            presented_frames: 0,
        })
    }

    /// Number of frames presented so far.
    pub fn presented_frames(&self) -> u64 {
        self.presented_frames
    }
}
