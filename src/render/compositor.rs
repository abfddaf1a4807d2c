//! Frame compositing: fade or clear, blur, and draw dots and lines.

use super::surface::RasterSurface;
use crate::config::{AnimationConfig, GlowConfig, LineStyle, RenderMode};
use crate::types::{Connection, Dot, Point, Rgb};

/// Rendering knobs extracted from [`AnimationConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Surface handling between frames
    pub mode: RenderMode,
    /// Canvas background
    pub background: Rgb,
    /// Dot diameter
    pub dot_size: f32,
    /// Line coloring
    pub line_style: LineStyle,
    /// Line width
    pub line_width: f32,
    /// Blur standard deviation
    pub blur_radius: f32,
    /// Optional halo
    pub glow: Option<GlowConfig>,
}

impl From<&AnimationConfig> for RenderSettings {
    fn from(config: &AnimationConfig) -> Self {
        Self {
            mode: config.render_mode,
            background: config.background,
            dot_size: config.dot_size,
            line_style: config.line_style,
            line_width: config.line_width,
            blur_radius: config.blur_radius,
            glow: config.glow,
        }
    }
}

/// Owns the offscreen surface and turns simulation state into frames.
pub struct FrameCompositor<S: RasterSurface> {
    surface: S,
    settings: RenderSettings,
    frames_rendered: u64,
}

impl<S: RasterSurface> FrameCompositor<S> {
    /// Wraps a surface, starting from a clean background.
    pub fn new(mut surface: S, settings: RenderSettings) -> Self {
        surface.clear(settings.background);
        Self {
            surface,
            settings,
            frames_rendered: 0,
        }
    }

    /// The surface holding the most recent frame.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Number of frames rendered so far.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Renders one frame and returns the surface to present.
    pub fn render(&mut self, dots: &[Dot], connections: &[Connection]) -> &S {
        match self.settings.mode {
            RenderMode::Transient => {
                self.surface.clear(self.settings.background);
                self.draw_connections(dots, connections);
                self.draw_dots(dots);
                self.surface.blur(self.settings.blur_radius);
            }
            RenderMode::TrailPreserving { fade_opacity } => {
                if fade_opacity > 0.0 {
                    self.surface.fade(self.settings.background, fade_opacity);
                }
                self.surface.blur(self.settings.blur_radius);
                self.draw_connections(dots, connections);
                self.draw_dots(dots);
            }
        }
        self.frames_rendered += 1;
        &self.surface
    }

    fn draw_connections(&mut self, dots: &[Dot], connections: &[Connection]) {
        let size = self.settings.dot_size;
        let width = self.settings.line_width;

        for connection in connections {
            let (Some(first), Some(second)) = (dots.get(connection.a), dots.get(connection.b))
            else {
                continue;
            };
            let from = first.center(size);
            let to = second.center(size);

            match self.settings.line_style {
                LineStyle::Solid { color } => {
                    self.surface.stroke_line(from, to, width, color, 255);
                }
                LineStyle::Interpolated { segments } => {
                    let segments = segments.max(1);
                    for k in 0..segments {
                        let t0 = k as f32 / segments as f32;
                        let t1 = (k + 1) as f32 / segments as f32;
                        let blend = if segments == 1 {
                            0.5
                        } else {
                            k as f32 / (segments - 1) as f32
                        };
                        let color = first.color.lerp(second.color, blend);
                        self.surface
                            .stroke_line(from.lerp(to, t0), from.lerp(to, t1), width, color, 255);
                    }
                }
            }
        }
    }

    fn draw_dots(&mut self, dots: &[Dot]) {
        let radius = self.settings.dot_size / 2.0;
        for dot in dots {
            let center = dot.center(self.settings.dot_size);
            if let Some(glow) = self.settings.glow {
                draw_glow(&mut self.surface, &glow, center, radius, dot.color);
            }
            self.surface.fill_circle(center, radius, dot.color, 255);
        }
    }
}

/// Draws concentric halo rings, outermost (faintest) first.
///
/// Skipped entirely when the glow has no size or no layers, since the
/// falloff divides by the size.
fn draw_glow<S: RasterSurface>(
    surface: &mut S,
    glow: &GlowConfig,
    center: Point,
    radius: f32,
    color: Rgb,
) {
    if !(glow.size > 0.0) || glow.layers == 0 {
        return;
    }
    let step = glow.size / glow.layers as f32;
    for layer in (1..=glow.layers).rev() {
        let extent = step * layer as f32;
        let falloff = 1.0 - (extent - step) / glow.size;
        let alpha = (glow.intensity * falloff * 255.0).round().clamp(0.0, 255.0) as u8;
        surface.fill_circle(center, radius + extent, color, alpha);
    }
}
