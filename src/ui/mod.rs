//! User interface shell around the animation.
//!
//! This module owns everything that touches the windowing toolkit: polling
//! the animation loop from the repaint cycle, presenting frames and turning
//! keyboard and pointer input into animation events.
//!
//! # Module Organization
//!
//! - `state` - The `DotsApp` application struct
//! - `input` - Keyboard and pointer handling
//! - `rendering` - Frame upload and canvas painting

mod input;
mod rendering;
mod state;

#[cfg(test)]
mod tests;

pub use state::DotsApp;

use eframe::egui;

impl eframe::App for DotsApp {
    /// Runs once per repaint: collect input, tick if due, paint, and schedule
    /// the next repaint for when the following tick is due.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);

        let now = ctx.input(|i| i.time);
        self.advance_animation(ctx, now);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.background))
            .show(ctx, |ui| {
                self.draw_canvas(ui);
            });

        ctx.request_repaint_after(self.animation.time_until_next_tick(now));
    }
}
