//! Core data types shared by the simulation and the compositor.
//!
//! This module defines the colors, points, dots and connections that flow
//! through every animation tick.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque 8-bit-per-channel color.
///
/// Serialized as `#rrggbb` text so configuration documents stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Creates a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the channels as an array, in `r, g, b` order.
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Linearly interpolates between two colors; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("expected a #rrggbb color, got `{s}`"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| format!("bad color `{s}`: {e}"))
        };
        Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// A 2D point or vector in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal component
    pub x: f32,
    /// Vertical component
    pub y: f32,
}

impl Point {
    /// The origin / zero vector.
    pub const ZERO: Point = Point::new(0.0, 0.0);

    /// Creates a point from its components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length when used as a vector.
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Component-wise difference `self - other`.
    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Point at fraction `t` along the segment from `self` to `other`.
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// A single animated dot.
///
/// Dots are stored in one `Vec` for the lifetime of the process; their index
/// is their identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    /// Top-left corner of the dot's bounding box
    pub position: Point,
    /// Unit-length heading
    pub direction: Point,
    /// Distance travelled per frame
    pub speed: f32,
    /// Color drawn this frame
    pub color: Rgb,
    /// Color currently being eased towards
    pub target_color: Rgb,
}

impl Dot {
    /// Center of the dot for a given diameter.
    pub fn center(&self, dot_size: f32) -> Point {
        Point::new(
            self.position.x + dot_size / 2.0,
            self.position.y + dot_size / 2.0,
        )
    }
}

/// An unordered pair of dot indices, stored with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    /// Lower index
    pub a: usize,
    /// Higher index
    pub b: usize,
}

impl Connection {
    /// Creates a connection, normalizing the index order.
    pub fn new(i: usize, j: usize) -> Self {
        Self {
            a: i.min(j),
            b: i.max(j),
        }
    }

    /// Whether the connection touches the given dot.
    pub fn involves(&self, index: usize) -> bool {
        self.a == index || self.b == index
    }
}

/// Input events delivered by the display collaborator between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key was pressed: every dot gets a random heading and boost speed
    Boost,
    /// The pointer was clicked at a canvas position: nearby dots scatter away
    Deflect(Point),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex_roundtrip() {
        let color = Rgb::new(0x12, 0xab, 0xff);
        assert_eq!(color.to_string(), "#12abff");
        assert_eq!("#12abff".parse::<Rgb>().unwrap(), color);
        assert_eq!("12ABFF".parse::<Rgb>().unwrap(), color);
    }

    #[test]
    fn test_rgb_rejects_malformed_text() {
        assert!("#12ab".parse::<Rgb>().is_err());
        assert!("#zzzzzz".parse::<Rgb>().is_err());
        assert!("#ééé".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_rgb_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::WHITE).unwrap();
        assert_eq!(json, "\"#ffffff\"");
        let back: Rgb = serde_json::from_str("\"#000000\"").unwrap();
        assert_eq!(back, Rgb::BLACK);
    }

    #[test]
    fn test_rgb_lerp_endpoints() {
        let a = Rgb::new(0, 100, 200);
        let b = Rgb::new(200, 100, 0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(100, 100, 100));
    }

    #[test]
    fn test_connection_normalizes_order() {
        let c = Connection::new(7, 2);
        assert_eq!((c.a, c.b), (2, 7));
        assert!(c.involves(7));
        assert!(!c.involves(3));
    }

    #[test]
    fn test_dot_center() {
        let dot = Dot {
            position: Point::new(10.0, 20.0),
            direction: Point::new(1.0, 0.0),
            speed: 1.0,
            color: Rgb::BLACK,
            target_color: Rgb::WHITE,
        };
        assert_eq!(dot.center(10.0), Point::new(15.0, 25.0));
    }
}
