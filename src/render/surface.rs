//! Raster surface capability and its tiny-skia implementation.
//!
//! The compositor only talks to [`RasterSurface`]; pixel work (shape
//! rasterization, alpha compositing, blur) lives behind it.

use crate::constants::{MAX_BLUR_RADIUS, MIN_BLUR_RADIUS};
use crate::error::DotsError;
use crate::types::{Point, Rgb};
use image::{imageops, ImageBuffer, Rgba};
use tiny_skia::{
    Color, FillRule, LineCap, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

/// Drawing operations the compositor needs from a pixel buffer.
pub trait RasterSurface {
    /// Width in pixels.
    fn width(&self) -> u32;
    /// Height in pixels.
    fn height(&self) -> u32;
    /// Replaces every pixel with an opaque color.
    fn clear(&mut self, color: Rgb);
    /// Composites `color` at `opacity` over the whole surface.
    fn fade(&mut self, color: Rgb, opacity: f32);
    /// Fills a circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb, alpha: u8);
    /// Strokes a straight line segment with round caps.
    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Rgb, alpha: u8);
    /// Gaussian-blurs the whole surface; `radius` is the standard deviation.
    fn blur(&mut self, radius: f32);
    /// Premultiplied RGBA8 pixel data, row-major.
    fn data(&self) -> &[u8];
    /// Premultiplied RGBA of one pixel, or `None` outside the surface.
    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]>;
}

/// A [`RasterSurface`] backed by a `tiny_skia::Pixmap`.
pub struct SkiaSurface {
    pixmap: Pixmap,
}

impl SkiaSurface {
    /// Allocates a transparent surface.
    pub fn new(width: u32, height: u32) -> Result<Self, DotsError> {
        let pixmap = Pixmap::new(width, height).ok_or(DotsError::Surface { width, height })?;
        Ok(Self { pixmap })
    }

    fn paint(color: Rgb, alpha: u8) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, alpha);
        paint.anti_alias = true;
        paint
    }
}

impl RasterSurface for SkiaSurface {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn clear(&mut self, color: Rgb) {
        self.pixmap
            .fill(Color::from_rgba8(color.r, color.g, color.b, 255));
    }

    fn fade(&mut self, color: Rgb, opacity: f32) {
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        if alpha == 0 {
            return;
        }
        let Some(rect) = Rect::from_xywh(0.0, 0.0, self.width() as f32, self.height() as f32)
        else {
            return;
        };
        let mut paint = Self::paint(color, alpha);
        paint.anti_alias = false;
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb, alpha: u8) {
        if radius <= 0.0 || alpha == 0 {
            return;
        }
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
            self.pixmap.fill_path(
                &path,
                &Self::paint(color, alpha),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Rgb, alpha: u8) {
        if alpha == 0 {
            return;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(from.x, from.y);
        pb.line_to(to.x, to.y);
        let Some(path) = pb.finish() else {
            return;
        };
        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &Self::paint(color, alpha),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    fn blur(&mut self, radius: f32) {
        if !(radius.is_finite() && radius > MIN_BLUR_RADIUS) {
            return;
        }
        let (w, h) = (self.width(), self.height());
        let blurred = {
            let Some(image) = ImageBuffer::<Rgba<u8>, &[u8]>::from_raw(w, h, self.pixmap.data())
            else {
                return;
            };
            // Every channel goes through the same kernel, so `c <= a` holds.
            imageops::blur(&image, radius.min(MAX_BLUR_RADIUS))
        };
        self.pixmap.data_mut().copy_from_slice(blurred.as_raw());
    }

    fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let p = self.pixmap.pixel(x, y)?;
        Some([p.red(), p.green(), p.blue(), p.alpha()])
    }
}
