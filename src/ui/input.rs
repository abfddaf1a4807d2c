//! Translation of toolkit input into animation events.
//!
//! Any key press boosts every dot (Escape closes the window instead); a
//! primary press on the canvas deflects the dots around the press point.

use super::state::DotsApp;
use crate::types::{InputEvent, Point};
use eframe::egui;

impl DotsApp {
    /// Maps a screen position inside `canvas_rect` to canvas pixels.
    pub fn screen_to_canvas(&self, canvas_rect: egui::Rect, screen_pos: egui::Pos2) -> Point {
        let local = screen_pos - canvas_rect.min;
        let scale_x = self.canvas_size.x / canvas_rect.width().max(1.0);
        let scale_y = self.canvas_size.y / canvas_rect.height().max(1.0);
        Point::new(local.x * scale_x, local.y * scale_y)
    }

    /// Queues a boost for every fresh key press this frame.
    pub fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let presses: Vec<egui::Key> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } => Some(*key),
                    _ => None,
                })
                .collect()
        });

        for key in presses {
            if key == egui::Key::Escape {
                log::info!("Escape pressed, closing");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            } else {
                log::debug!("Key {key:?} pressed, boosting");
                self.animation.queue_input(InputEvent::Boost);
            }
        }
    }

    /// Queues a deflection when the primary button goes down over the canvas.
    pub fn handle_canvas_press(
        &mut self,
        ui: &egui::Ui,
        canvas_rect: egui::Rect,
        response: &egui::Response,
    ) {
        if !response.contains_pointer() {
            return;
        }
        let press = ui.input(|i| {
            if i.pointer.primary_pressed() {
                i.pointer.press_origin()
            } else {
                None
            }
        });
        if let Some(pos) = press {
            let point = self.screen_to_canvas(canvas_rect, pos);
            log::debug!("Pointer pressed at canvas ({:.1}, {:.1})", point.x, point.y);
            self.animation.queue_input(InputEvent::Deflect(point));
        }
    }
}
