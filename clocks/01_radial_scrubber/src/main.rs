//! Radial Scrubber
//!
//! A circular drag control that sets a time of day one minute per drag
//! sample. Drag around the ring to scrub; tap the date or time to minimize.

mod drawing;
mod ui;

use std::path::Path;

use nannou::prelude::*;
use nannou::winit::event::{TouchPhase as WinitTouchPhase, WindowEvent};
use nannou_egui::{self, Egui};
use scrubber_core::{
    config_path, export_svg, load_config, render_document, ConfigError, Hit, InputMode,
    RadialScrubber, ScrubberConfig, ScrubberOverrides,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::drawing::{colors, draw_scrubber, CanvasFrame};
use crate::ui::draw_telemetry_panel;

const APP_NAME: &str = "radial_scrubber";
const PANEL_HEIGHT: f32 = 96.0;
const MIN_WINDOW_WIDTH: f32 = 360.0;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "radial_scrubber=info,scrubber_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    nannou::app(model).update(update).run();
}

/// Application state
struct Model {
    scrubber: RadialScrubber,
    /// A drag that started on one of the arcs is in progress
    dragging: bool,
    /// Loaded inner circle image, if the file was found
    background: Option<wgpu::Texture>,
    /// egui integration
    egui: Egui,
}

impl Model {
    fn frame(&self, window_rect: Rect) -> CanvasFrame {
        CanvasFrame::calculate(window_rect, &self.scrubber, PANEL_HEIGHT)
    }

    /// Start a drag or toggle the display mode depending on what was hit
    fn press(&mut self, canvas: (f64, f64)) {
        match self.scrubber.hit_test(canvas.0, canvas.1) {
            Some(Hit::Arc) => self.dragging = true,
            Some(Hit::Label(_)) => {
                self.scrubber.toggle_minimize();
            }
            None => {}
        }
    }

    fn drag_to(&mut self, canvas: (f64, f64)) {
        if !self.dragging {
            return;
        }
        self.scrubber.scrub(canvas.0, canvas.1);
        self.scrubber.track_velocity(canvas.0);
    }

    fn export(&self) {
        let svg = render_document(&self.scrubber);
        let file_name = format!("{}.svg", self.scrubber.config().container_id);
        if let Err(e) = export_svg(APP_NAME, &file_name, &svg) {
            tracing::error!("Failed to export svg: {}", e);
        }
    }
}

fn fail(err: &ConfigError) -> ! {
    tracing::error!(
        path = ?config_path(APP_NAME),
        "Invalid scrubber configuration: {}",
        err
    );
    std::process::exit(1);
}

fn resolve_config() -> ScrubberConfig {
    let overrides: ScrubberOverrides = match load_config(APP_NAME) {
        Ok(overrides) => overrides.unwrap_or_default(),
        Err(e) => fail(&e),
    };
    ScrubberConfig::resolve(overrides).unwrap_or_else(|e| fail(&e))
}

fn load_background(app: &App, href: &Path) -> Option<wgpu::Texture> {
    let path = if href.is_absolute() {
        href.to_path_buf()
    } else {
        app.assets_path()
            .map(|assets| assets.join(href))
            .unwrap_or_else(|_| href.to_path_buf())
    };

    match wgpu::Texture::from_path(app, &path) {
        Ok(texture) => Some(texture),
        Err(e) => {
            tracing::warn!(path = %path.display(), "Skipping inner circle background: {}", e);
            None
        }
    }
}

fn model(app: &App) -> Model {
    let config = resolve_config();
    let scrubber = RadialScrubber::new(config).unwrap_or_else(|e| fail(&e));

    let width = (scrubber.config().canvas_width as f32).max(MIN_WINDOW_WIDTH);
    let height = scrubber.config().canvas_height as f32 + PANEL_HEIGHT;

    // Create window
    let window_id = app
        .new_window()
        .title(format!("Radial Scrubber · {}", scrubber.config().container_id))
        .size(width as u32, height as u32)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .mouse_moved(mouse_moved)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let background = load_background(app, &scrubber.config().inner_circle_background);

    tracing::info!(
        input = ?scrubber.input_mode(),
        date = %scrubber.date_text(),
        time = %scrubber.time_text(),
        "Radial scrubber ready"
    );

    Model {
        scrubber,
        dragging: false,
        background,
        egui,
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();

    let result = draw_telemetry_panel(&ctx, &model.scrubber, PANEL_HEIGHT);

    // Apply UI results after the egui frame is done
    drop(ctx);

    if result.toggle_mode {
        model.scrubber.toggle_minimize();
    }
    if result.export_svg {
        model.export();
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    draw.background().color(colors::BACKGROUND);

    let canvas = model.frame(window_rect);
    draw_scrubber(&draw, &model.scrubber, &canvas, model.background.as_ref());

    draw.to_frame(app, &frame).unwrap();
    model.egui.draw_to_frame(&frame).unwrap();
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::M => {
            model.scrubber.toggle_minimize();
        }
        Key::E => model.export(),
        _ => {}
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left || model.scrubber.input_mode() != InputMode::Pointer {
        return;
    }
    let canvas = model.frame(app.window_rect()).to_canvas(app.mouse.position());
    model.press(canvas);
}

fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.dragging = false;
    }
}

fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    if model.scrubber.input_mode() != InputMode::Pointer {
        return;
    }
    let canvas = model.frame(app.window_rect()).to_canvas(pos);
    model.drag_to(canvas);
}

fn raw_window_event(app: &App, model: &mut Model, event: &WindowEvent) {
    // Let egui handle raw events for keyboard and mouse input
    model.egui.handle_raw_event(event);

    let WindowEvent::Touch(touch) = event else {
        return;
    };
    if model.scrubber.input_mode() != InputMode::Touch {
        return;
    }

    // Convert touch position to nannou coordinates
    let window_rect = app.window_rect();
    let pos = pt2(
        touch.location.x as f32 - window_rect.w() / 2.0,
        window_rect.h() / 2.0 - touch.location.y as f32,
    );
    let canvas = model.frame(window_rect).to_canvas(pos);

    match touch.phase {
        WinitTouchPhase::Started => model.press(canvas),
        WinitTouchPhase::Moved => model.drag_to(canvas),
        WinitTouchPhase::Ended | WinitTouchPhase::Cancelled => model.dragging = false,
    }
}
