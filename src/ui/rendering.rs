//! Presenting composited frames.
//!
//! Each finished frame is uploaded into one texture in a single call, so the
//! window always shows a whole frame.

use super::state::DotsApp;
use crate::render::RasterSurface;
use eframe::egui;

impl DotsApp {
    /// Polls the animation loop and presents the frame if a tick ran.
    pub fn advance_animation(&mut self, ctx: &egui::Context, now: f64) {
        if self.animation.poll(now) {
            self.present_frame(ctx);
        }
    }

    /// Uploads the compositor's surface into the frame texture.
    fn present_frame(&mut self, ctx: &egui::Context) {
        let surface = self.animation.surface();
        let size = [surface.width() as usize, surface.height() as usize];
        let image = egui::ColorImage::from_rgba_premultiplied(size, surface.data());

        match &mut self.frame_texture {
            Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
            None => {
                self.frame_texture =
                    Some(ctx.load_texture("dots-frame", image, egui::TextureOptions::LINEAR));
            }
        }
        self.presented_frames += 1;
    }

    /// Paints the latest frame over the whole available area and routes
    /// pointer presses on it.
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (canvas_rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

        if let Some(texture) = &self.frame_texture {
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            ui.painter()
                .image(texture.id(), canvas_rect, uv, egui::Color32::WHITE);
        }

        self.handle_canvas_press(ui, canvas_rect, &response);
    }
}
