use super::*;
use crate::config::AnimationConfig;
use crate::types::{InputEvent, Point};
use eframe::egui;

/// Run a single headless egui frame with the provided input events and closure.
fn run_ui_with(
    ctx: &egui::Context,
    events: Vec<egui::Event>,
    mut f: impl FnMut(&egui::Context),
) -> egui::FullOutput {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(800.0, 600.0),
    ));
    raw.events = events;
    ctx.run(raw, |ctx| f(ctx))
}

fn key_press(key: egui::Key) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: Some(key),
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::NONE,
    }
}

fn draw(app: &mut DotsApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            app.draw_canvas(ui);
        });
}

#[test]
fn first_frame_is_presented_as_texture() {
    let mut app = DotsApp::new(AnimationConfig::default()).unwrap();
    let ctx = egui::Context::default();

    let _ = run_ui_with(&ctx, vec![], |ctx| {
        app.advance_animation(ctx, 0.0);
        draw(&mut app, ctx);
    });

    assert!(app.frame_texture.is_some());
    assert_eq!(app.presented_frames(), 1);
    let texture = app.frame_texture.as_ref().unwrap();
    assert_eq!(texture.size(), [800, 600]);
}

#[test]
fn frames_are_presented_only_when_a_tick_is_due() {
    let mut app = DotsApp::new(AnimationConfig::default()).unwrap();
    let ctx = egui::Context::default();

    for now in [0.0, 0.005, 0.010, 0.021, 0.030, 0.045] {
        let _ = run_ui_with(&ctx, vec![], |ctx| {
            app.advance_animation(ctx, now);
        });
    }

    // Ticks at 0.0, 0.021 and 0.045.
    assert_eq!(app.presented_frames(), 3);
    assert_eq!(app.animation.scene().frame(), 3);
}

#[test]
fn key_press_queues_boost() {
    let mut app = DotsApp::new(AnimationConfig::default()).unwrap();
    let ctx = egui::Context::default();

    let _ = run_ui_with(&ctx, vec![key_press(egui::Key::Space)], |ctx| {
        app.handle_keyboard(ctx);
    });

    assert_eq!(app.animation.pending_inputs(), &[InputEvent::Boost]);
}

#[test]
fn boost_is_applied_on_next_tick() {
    let config = AnimationConfig {
        boost_speed: 12.0,
        ..AnimationConfig::default()
    };
    let mut app = DotsApp::new(config).unwrap();
    let ctx = egui::Context::default();

    let _ = run_ui_with(&ctx, vec![key_press(egui::Key::B)], |ctx| {
        app.handle_keyboard(ctx);
        app.advance_animation(ctx, 0.0);
    });

    assert!(app.animation.pending_inputs().is_empty());
    assert!(app
        .animation
        .scene()
        .dots()
        .iter()
        .all(|dot| dot.speed == 12.0));
}

#[test]
fn escape_does_not_boost() {
    let mut app = DotsApp::new(AnimationConfig::default()).unwrap();
    let ctx = egui::Context::default();

    let _ = run_ui_with(&ctx, vec![key_press(egui::Key::Escape)], |ctx| {
        app.handle_keyboard(ctx);
    });

    assert!(app.animation.pending_inputs().is_empty());
}

#[test]
fn pressing_canvas_queues_deflection_at_canvas_point() {
    let mut app = DotsApp::new(AnimationConfig::default()).unwrap();
    let ctx = egui::Context::default();
    let click_pos = egui::pos2(320.0, 240.0);

    // First frame: move the pointer over the canvas to establish hover
    let _ = run_ui_with(&ctx, vec![egui::Event::PointerMoved(click_pos)], |ctx| {
        draw(&mut app, ctx);
    });
    assert!(app.animation.pending_inputs().is_empty());

    // Second frame: press the primary button
    let events = vec![
        egui::Event::PointerMoved(click_pos),
        egui::Event::PointerButton {
            pos: click_pos,
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        },
    ];
    let _ = run_ui_with(&ctx, events, |ctx| {
        draw(&mut app, ctx);
    });

    assert_eq!(
        app.animation.pending_inputs(),
        &[InputEvent::Deflect(Point::new(320.0, 240.0))]
    );
}

#[test]
fn screen_positions_scale_into_canvas() {
    let app = DotsApp::new(AnimationConfig::default()).unwrap();
    // Canvas shown at half size, offset by (10, 20).
    let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(400.0, 300.0));

    let point = app.screen_to_canvas(rect, egui::pos2(210.0, 170.0));

    assert_eq!(point, Point::new(400.0, 300.0));
}
