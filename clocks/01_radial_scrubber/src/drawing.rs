//! Drawing module - renders the scrubber model with nannou's Draw API
//!
//! The model lives in canvas space (origin top-left, y down). `CanvasFrame`
//! maps between that and nannou's centred, y-up window coordinates.

use nannou::prelude::*;
use scrubber_core::{Color, Glow, RadialScrubber};

/// Segments per full turn when flattening arcs into polylines
const ARC_SEGMENTS_PER_TURN: f64 = 180.0;

/// How strongly a glow's opacity shows through its halo
const GLOW_ALPHA_SCALE: f64 = 0.35;

/// Color palette for the window chrome
pub mod colors {
    use nannou::prelude::*;

    pub const BACKGROUND: Srgb<u8> = Srgb {
        red: 34,
        green: 30,
        blue: 44,
        standard: std::marker::PhantomData,
    };
    pub const CANVAS: Srgb<u8> = Srgb {
        red: 46,
        green: 40,
        blue: 58,
        standard: std::marker::PhantomData,
    };
}

/// Placement of the widget canvas inside the window
#[derive(Debug, Clone, Copy)]
pub struct CanvasFrame {
    rect: Rect,
}

impl CanvasFrame {
    /// Centre the canvas in the window area above the telemetry panel
    pub fn calculate(window_rect: Rect, scrubber: &RadialScrubber, panel_height: f32) -> Self {
        let config = scrubber.config();
        let center = pt2(window_rect.x(), window_rect.y() + panel_height / 2.0);
        let size = vec2(config.canvas_width as f32, config.canvas_height as f32);
        Self {
            rect: Rect::from_xy_wh(center, size),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Window point to canvas coordinates
    pub fn to_canvas(&self, p: Point2) -> (f64, f64) {
        (
            (p.x - self.rect.left()) as f64,
            (self.rect.top() - p.y) as f64,
        )
    }

    /// Canvas coordinates to window point
    pub fn to_window(&self, (x, y): (f64, f64)) -> Point2 {
        pt2(self.rect.left() + x as f32, self.rect.top() - y as f32)
    }
}

fn to_srgb(color: Color) -> Srgb<u8> {
    srgb(color.red, color.green, color.blue)
}

fn glow_color(glow: &Glow) -> Srgba<u8> {
    let alpha = (glow.opacity * GLOW_ALPHA_SCALE * 255.0).clamp(0.0, 255.0) as u8;
    srgba(glow.color.red, glow.color.green, glow.color.blue, alpha)
}

/// Draw the whole widget: backdrop, image, arcs with glows, labels
pub fn draw_scrubber(
    draw: &Draw,
    scrubber: &RadialScrubber,
    frame: &CanvasFrame,
    background: Option<&wgpu::Texture>,
) {
    draw.rect().xy(frame.rect().xy()).wh(frame.rect().wh()).color(colors::CANVAS);

    if let Some(texture) = background {
        let bg = scrubber.background();
        let top_left = frame.to_window((bg.x, bg.y));
        let size = vec2(bg.width as f32, bg.height as f32);
        draw.texture(texture)
            .xy(top_left + vec2(size.x / 2.0, -size.y / 2.0))
            .wh(size);
    }

    for layer in scrubber.layers() {
        let arc = scrubber.arc(layer);
        let segments = (ARC_SEGMENTS_PER_TURN * arc.sweep / 360.0).ceil().max(1.0) as usize;
        let points: Vec<Point2> = arc
            .sample(segments)
            .into_iter()
            .map(|p| frame.to_window(p))
            .collect();

        // Halo sits under the stroke
        draw.polyline()
            .weight((layer.stroke_width + layer.glow.width) as f32)
            .caps_round()
            .join_round()
            .color(glow_color(&layer.glow))
            .points(points.clone());

        draw.polyline()
            .weight(layer.stroke_width as f32)
            .caps_round()
            .join_round()
            .color(to_srgb(layer.color))
            .points(points);
    }

    let text_width = frame.rect().w();
    for label in scrubber.labels() {
        draw.text(&label.text)
            .xy(frame.to_window(label.position))
            .color(to_srgb(label.color))
            .font_size(label.font_size as u32)
            .w(text_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrubber_core::{InputMode, ScrubberConfig, ScrubberOverrides};

    fn scrubber() -> RadialScrubber {
        let config = ScrubberConfig::resolve(ScrubberOverrides {
            start_time: Some(0),
            time_zone: Some("UTC".to_string()),
            ..Default::default()
        })
        .unwrap();
        RadialScrubber::with_input_mode(config, InputMode::Pointer).unwrap()
    }

    #[test]
    fn test_canvas_center_maps_to_frame_center() {
        let window = Rect::from_w_h(400.0, 420.0);
        let frame = CanvasFrame::calculate(window, &scrubber(), 120.0);
        assert_eq!(frame.rect().xy(), pt2(0.0, 60.0));
        assert_eq!(frame.to_canvas(pt2(0.0, 60.0)), (150.0, 150.0));
        assert_eq!(frame.to_window((150.0, 150.0)), pt2(0.0, 60.0));
    }

    #[test]
    fn test_canvas_y_points_down() {
        let window = Rect::from_w_h(300.0, 300.0);
        let frame = CanvasFrame::calculate(window, &scrubber(), 0.0);
        assert_eq!(frame.to_canvas(pt2(-150.0, 150.0)), (0.0, 0.0));
        assert_eq!(frame.to_canvas(pt2(0.0, 50.0)), (150.0, 100.0));
    }
}
