//! Standalone SVG document of the current widget state

use std::fmt::Write as _;

use crate::geometry::fmt_coord;
use crate::scrubber::RadialScrubber;

/// Render the background image, glows, arcs and labels in draw order.
pub fn render_document(scrubber: &RadialScrubber) -> String {
    let config = scrubber.config();
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" id="{}" width="{}" height="{}">"#,
        escape(&config.container_id),
        fmt_coord(config.canvas_width),
        fmt_coord(config.canvas_height),
    );

    let bg = scrubber.background();
    let _ = writeln!(
        out,
        r#"  <image href="{}" x="{}" y="{}" width="{}" height="{}"/>"#,
        escape(&bg.href.to_string_lossy()),
        fmt_coord(bg.x),
        fmt_coord(bg.y),
        fmt_coord(bg.width),
        fmt_coord(bg.height),
    );

    for layer in scrubber.layers() {
        let d = scrubber.arc(layer).to_svg_data();
        let _ = writeln!(
            out,
            r#"  <path d="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}" stroke-linecap="round"/>"#,
            d,
            layer.glow.color,
            fmt_coord(layer.glow.opacity),
            fmt_coord(layer.stroke_width + layer.glow.width),
        );
        let _ = writeln!(
            out,
            r#"  <path id="{}" d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
            escape(&layer.id),
            d,
            layer.color,
            fmt_coord(layer.stroke_width),
        );
    }

    for label in scrubber.labels() {
        let _ = writeln!(
            out,
            r#"  <text id="{}" x="{}" y="{}" fill="{}" font-size="{}px" text-anchor="middle" dominant-baseline="middle" style="cursor: pointer">{}</text>"#,
            escape(&label.id),
            fmt_coord(label.position.0),
            fmt_coord(label.position.1),
            label.color,
            fmt_coord(label.font_size),
            escape(&label.text),
        );
    }

    out.push_str("</svg>\n");
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
