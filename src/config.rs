//! Animation configuration: the fixed set of tunable knobs.
//!
//! A configuration is picked once at startup, either from a named [`Preset`]
//! or from a JSON document, and never changes afterwards.

use crate::constants::*;
use crate::error::DotsError;
use crate::types::Rgb;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the compositor treats the surface between frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderMode {
    /// Start from an empty background every frame and blur everything drawn
    Transient,
    /// Keep the previous frame, fade it towards the background and blur it,
    /// then draw the new frame crisp on top
    TrailPreserving {
        /// Opacity of the background layer composited over the old frame
        fade_opacity: f32,
    },
}

/// How connection lines are colored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineStyle {
    /// A single color for every line
    Solid {
        /// Line color
        color: Rgb,
    },
    /// Blend from one endpoint's color to the other's over equal sub-segments
    Interpolated {
        /// Number of sub-segments per line
        segments: u32,
    },
}

/// Which part of color space new target colors are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    /// Every channel uniform over `0..=255`
    Full,
    /// Every channel uniform over `VIVID_CHANNEL_MIN..=255`
    Vivid,
}

/// Exponential speed decay after a boost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedDecay {
    /// Multiplier applied to the speed once per frame
    pub factor: f32,
    /// Floor the speed never decays below
    pub min_speed: f32,
}

/// Bloom-like halo drawn behind each dot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlowConfig {
    /// Extra radius of the outermost halo ring, in pixels
    pub size: f32,
    /// Number of concentric rings
    pub layers: u32,
    /// Opacity of the innermost ring, `0.0..=1.0`
    pub intensity: f32,
}

/// All tunable parameters of the animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Canvas width in pixels
    pub canvas_width: f32,
    /// Canvas height in pixels
    pub canvas_height: f32,
    /// Number of dots
    pub dot_count: usize,
    /// Dot diameter in pixels
    pub dot_size: f32,
    /// Initial speed of every dot
    pub speed: f32,
    /// Speed decay after boosts; `None` keeps speeds constant
    pub speed_decay: Option<SpeedDecay>,
    /// Speed set by boost and deflection events
    pub boost_speed: f32,
    /// Radius of pointer deflection
    pub deflect_radius: f32,
    /// Maximum connection distance between dot centers
    pub max_line_distance: f32,
    /// Maximum connections per dot
    pub max_connections: usize,
    /// Connection line coloring
    pub line_style: LineStyle,
    /// Connection line width
    pub line_width: f32,
    /// Color easing blend factor
    pub color_change_speed: f32,
    /// Target color palette
    pub palette: Palette,
    /// Surface handling between frames
    pub render_mode: RenderMode,
    /// Gaussian blur radius; `0` disables the blur
    pub blur_radius: f32,
    /// Optional halo behind dots
    pub glow: Option<GlowConfig>,
    /// Canvas background color
    pub background: Rgb,
    /// Milliseconds between ticks
    pub frame_interval_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::preset(Preset::Classic)
    }
}

/// Named parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Few small dots, white lines, blurred trails that never fade
    Classic,
    /// Glowing dots with color-blended lines on a freshly cleared canvas
    Glow,
    /// Vivid dots leaving fading trails, with boost decay and pointer scatter
    Trails,
}

impl FromStr for Preset {
    type Err = DotsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Preset::Classic),
            "glow" => Ok(Preset::Glow),
            "trails" => Ok(Preset::Trails),
            other => Err(DotsError::UnknownPreset(other.to_string())),
        }
    }
}

impl AnimationConfig {
    /// Builds the configuration for a named preset.
    pub fn preset(preset: Preset) -> Self {
        let classic = Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            dot_count: DOT_COUNT,
            dot_size: DOT_SIZE,
            speed: DOT_SPEED,
            speed_decay: None,
            boost_speed: BOOST_SPEED,
            deflect_radius: DEFLECT_RADIUS,
            max_line_distance: MAX_LINE_DISTANCE,
            max_connections: MAX_CONNECTIONS,
            line_style: LineStyle::Solid { color: Rgb::WHITE },
            line_width: LINE_WIDTH,
            color_change_speed: COLOR_CHANGE_SPEED,
            palette: Palette::Full,
            render_mode: RenderMode::TrailPreserving { fade_opacity: 0.0 },
            blur_radius: BLUR_RADIUS,
            glow: None,
            background: Rgb::BLACK,
            frame_interval_ms: FRAME_INTERVAL_MS,
        };

        match preset {
            Preset::Classic => classic,
            Preset::Glow => Self {
                dot_count: 40,
                dot_size: 8.0,
                speed: 1.5,
                max_line_distance: 150.0,
                max_connections: 3,
                line_style: LineStyle::Interpolated { segments: 12 },
                line_width: 2.0,
                render_mode: RenderMode::Transient,
                blur_radius: 1.5,
                glow: Some(GlowConfig {
                    size: 10.0,
                    layers: 5,
                    intensity: 0.35,
                }),
                frame_interval_ms: 16,
                ..classic
            },
            Preset::Trails => Self {
                dot_count: 60,
                dot_size: 6.0,
                speed: 1.0,
                speed_decay: Some(SpeedDecay {
                    factor: 0.96,
                    min_speed: 1.0,
                }),
                boost_speed: 10.0,
                max_line_distance: 120.0,
                max_connections: 2,
                line_style: LineStyle::Interpolated { segments: 8 },
                color_change_speed: 0.05,
                palette: Palette::Vivid,
                render_mode: RenderMode::TrailPreserving { fade_opacity: 0.08 },
                blur_radius: 1.0,
                frame_interval_ms: 16,
                ..classic
            },
        }
    }

    /// Parses a JSON document and validates it. Missing fields take the
    /// classic preset's values.
    pub fn from_json(json: &str) -> Result<Self, DotsError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to pretty JSON.
    pub fn to_json(&self) -> Result<String, DotsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Horizontal limit of a dot's top-left corner.
    pub fn max_x(&self) -> f32 {
        self.canvas_width - self.dot_size
    }

    /// Vertical limit of a dot's top-left corner.
    pub fn max_y(&self) -> f32 {
        self.canvas_height - self.dot_size
    }

    /// Checks every knob against its allowed range.
    pub fn validate(&self) -> Result<(), DotsError> {
        let fail = |msg: String| Err(DotsError::InvalidConfig(msg));

        let mut knobs = vec![
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("dot_size", self.dot_size),
            ("speed", self.speed),
            ("boost_speed", self.boost_speed),
            ("deflect_radius", self.deflect_radius),
            ("max_line_distance", self.max_line_distance),
            ("line_width", self.line_width),
            ("color_change_speed", self.color_change_speed),
            ("blur_radius", self.blur_radius),
        ];
        if let Some(decay) = &self.speed_decay {
            knobs.push(("speed_decay.factor", decay.factor));
            knobs.push(("speed_decay.min_speed", decay.min_speed));
        }
        if let Some(glow) = &self.glow {
            knobs.push(("glow.size", glow.size));
            knobs.push(("glow.intensity", glow.intensity));
        }
        if let Some((name, value)) = knobs.iter().find(|(_, v)| !v.is_finite()) {
            return fail(format!("{name} must be finite, got {value}"));
        }

        if !(self.canvas_width >= 1.0 && self.canvas_height >= 1.0) {
            return fail(format!(
                "canvas must be at least 1x1, got {}x{}",
                self.canvas_width, self.canvas_height
            ));
        }
        if self.canvas_width.fract() != 0.0 || self.canvas_height.fract() != 0.0 {
            return fail(format!(
                "canvas size must be whole pixels, got {}x{}",
                self.canvas_width, self.canvas_height
            ));
        }
        if !(self.dot_size >= 0.0 && self.max_x() > 0.0 && self.max_y() > 0.0) {
            return fail(format!(
                "dot_size {} does not fit a {}x{} canvas",
                self.dot_size, self.canvas_width, self.canvas_height
            ));
        }
        if !(self.speed >= 0.0 && self.boost_speed >= 0.0) {
            return fail("speeds must be non-negative".to_string());
        }
        if let Some(decay) = &self.speed_decay {
            if !(decay.factor > 0.0 && decay.factor <= 1.0) {
                return fail(format!("speed decay factor {} not in (0, 1]", decay.factor));
            }
            if !(decay.min_speed >= 0.0) {
                return fail("speed decay floor must be non-negative".to_string());
            }
        }
        if !(self.color_change_speed > 0.0 && self.color_change_speed <= 1.0) {
            return fail(format!(
                "color_change_speed {} not in (0, 1]",
                self.color_change_speed
            ));
        }
        if !(self.max_line_distance >= 0.0 && self.line_width > 0.0) {
            return fail("line distance must be non-negative and width positive".to_string());
        }
        if let LineStyle::Interpolated { segments: 0 } = self.line_style {
            return fail("interpolated lines need at least one segment".to_string());
        }
        if let RenderMode::TrailPreserving { fade_opacity } = self.render_mode {
            if !(0.0..=1.0).contains(&fade_opacity) {
                return fail(format!("fade_opacity {fade_opacity} not in [0, 1]"));
            }
        }
        if !(self.blur_radius >= 0.0 && self.deflect_radius >= 0.0) {
            return fail("blur and deflection radii must be non-negative".to_string());
        }
        if self.blur_radius > MAX_BLUR_RADIUS {
            return fail(format!(
                "blur_radius {} exceeds {MAX_BLUR_RADIUS}",
                self.blur_radius
            ));
        }
        if let Some(glow) = &self.glow {
            if !(0.0..=1.0).contains(&glow.intensity) {
                return fail(format!("glow intensity {} not in [0, 1]", glow.intensity));
            }
        }
        if self.frame_interval_ms == 0 {
            return fail("frame_interval_ms must be positive".to_string());
        }
        Ok(())
    }
}

/// Environment variable holding a path to a JSON configuration file.
pub const CONFIG_PATH_VAR: &str = "RANDOM_DOTS_CONFIG";
/// Environment variable holding a preset name.
pub const PRESET_VAR: &str = "RANDOM_DOTS_PRESET";

/// Resolves the startup configuration from the environment.
///
/// A config file named by `RANDOM_DOTS_CONFIG` wins over a preset named by
/// `RANDOM_DOTS_PRESET`; with neither set the classic preset is used.
pub fn load_config_from_env() -> Result<AnimationConfig, DotsError> {
    load_config_with(|name| std::env::var(name).ok())
}

/// Resolves the startup configuration, reading variables through `lookup`.
pub fn load_config_with(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<AnimationConfig, DotsError> {
    if let Some(path) = lookup(CONFIG_PATH_VAR) {
        log::info!("Loading configuration from {path}");
        let json = std::fs::read_to_string(&path)
            .map_err(|source| DotsError::ConfigIo { path, source })?;
        return AnimationConfig::from_json(&json);
    }

    let preset = match lookup(PRESET_VAR) {
        Some(name) => name.parse()?,
        None => Preset::Classic,
    };
    log::info!("Using {preset:?} preset");
    let config = AnimationConfig::preset(preset);
    config.validate()?;
    Ok(config)
}
