//! Geometry engine - pointer angles and arc paths
//!
//! All coordinates are canvas space: origin top-left, y pointing down.
//! Angles are degrees measured clockwise from 12 o'clock.

use std::f64::consts::PI;

/// Full turn in degrees
pub const FULL_CIRCLE: f64 = 360.0;

/// Largest sweep a single SVG arc command can draw unambiguously
const MAX_SWEEP: f64 = 359.0;

/// Angle of `(x, y)` around `(center_x, center_y)`, in `[0, 360)`.
///
/// A point exactly at the center has no direction; it maps to 90°, the value
/// `atan2(0, 0)` produces after the quarter-turn rotation.
pub fn pointer_to_angle(x: f64, y: f64, center_x: f64, center_y: f64) -> f64 {
    let dx = x - center_x;
    let dy = y - center_y;
    if dx == 0.0 && dy == 0.0 {
        return 90.0;
    }

    let angle = dy.atan2(dx).to_degrees() + 90.0;
    let normalized = if angle < 0.0 { angle + FULL_CIRCLE } else { angle };
    // Tiny negative angles round up to a full turn
    if normalized >= FULL_CIRCLE {
        0.0
    } else {
        normalized
    }
}

/// Parameters an arc path is derived from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    pub value_angle: f64,
    pub total: f64,
    pub radius: f64,
}

impl ArcSpec {
    pub fn new(value_angle: f64, radius: f64) -> Self {
        Self {
            value_angle,
            total: FULL_CIRCLE,
            radius,
        }
    }
}

/// A single clockwise arc starting at 12 o'clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPath {
    pub center: (f64, f64),
    pub radius: f64,
    /// Sweep in degrees, never more than 359
    pub sweep: f64,
    pub start: (f64, f64),
    pub end: (f64, f64),
    pub large_arc: bool,
}

/// Build the arc for `spec` around `center`.
pub fn value_to_arc_path(spec: ArcSpec, center: (f64, f64)) -> ArcPath {
    let ArcSpec {
        value_angle,
        total,
        radius,
    } = spec;
    let alpha = if value_angle >= FULL_CIRCLE {
        MAX_SWEEP
    } else {
        FULL_CIRCLE / total * value_angle
    };

    let (cx, cy) = center;
    let a = (90.0 - alpha) * PI / 180.0;
    let end = (cx + radius * a.cos(), cy - radius * a.sin());

    ArcPath {
        center,
        radius,
        sweep: alpha,
        start: (cx, cy - radius),
        end,
        large_arc: alpha > 180.0,
    }
}

impl ArcPath {
    /// SVG path data: a move-to the top of the circle and one clockwise arc
    pub fn to_svg_data(&self) -> String {
        format!(
            "M{},{} A{},{} 0 {},1 {},{}",
            fmt_coord(self.start.0),
            fmt_coord(self.start.1),
            fmt_coord(self.radius),
            fmt_coord(self.radius),
            u8::from(self.large_arc),
            fmt_coord(self.end.0),
            fmt_coord(self.end.1),
        )
    }

    /// Points along the arc for renderers without an arc primitive.
    ///
    /// Returns `segments + 1` points from start to end; at least one segment.
    pub fn sample(&self, segments: usize) -> Vec<(f64, f64)> {
        let segments = segments.max(1);
        let (cx, cy) = self.center;
        (0..=segments)
            .map(|i| {
                let deg = self.sweep * i as f64 / segments as f64;
                let a = (90.0 - deg) * PI / 180.0;
                (cx + self.radius * a.cos(), cy - self.radius * a.sin())
            })
            .collect()
    }
}

/// Round to three decimals and drop trailing zeros
pub(crate) fn fmt_coord(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    // Avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn point_at(angle: f64, r: f64, c: (f64, f64)) -> (f64, f64) {
        let rad = angle.to_radians();
        (c.0 + r * rad.sin(), c.1 - r * rad.cos())
    }

    #[test]
    fn test_cardinal_angles() {
        let c = (150.0, 150.0);
        assert!((pointer_to_angle(150.0, 50.0, c.0, c.1) - 0.0).abs() < EPS);
        assert!((pointer_to_angle(250.0, 150.0, c.0, c.1) - 90.0).abs() < EPS);
        assert!((pointer_to_angle(150.0, 250.0, c.0, c.1) - 180.0).abs() < EPS);
        assert!((pointer_to_angle(50.0, 150.0, c.0, c.1) - 270.0).abs() < EPS);
    }

    #[test]
    fn test_angle_range() {
        let c = (150.0, 150.0);
        for i in 0..720 {
            let (x, y) = point_at(i as f64 * 0.5, 80.0, c);
            let angle = pointer_to_angle(x, y, c.0, c.1);
            assert!((0.0..360.0).contains(&angle), "angle {} out of range", angle);
        }
        // Far outside the canvas still yields a valid angle
        let angle = pointer_to_angle(-1.0e6, -3.0e6, c.0, c.1);
        assert!((0.0..360.0).contains(&angle));
    }

    #[test]
    fn test_center_point_is_ninety() {
        assert_eq!(pointer_to_angle(150.0, 150.0, 150.0, 150.0), 90.0);
        assert_eq!(pointer_to_angle(-0.0, -0.0, 0.0, 0.0), 90.0);
    }

    #[test]
    fn test_full_circle_clamps_to_359() {
        let arc = value_to_arc_path(ArcSpec::new(360.0, 95.0), (150.0, 150.0));
        assert_eq!(arc.sweep, 359.0);
        assert!(arc.large_arc);
        // End lands just left of the start, not on it
        assert!(arc.end.0 < arc.start.0);
        assert!((arc.end.1 - arc.start.1).abs() < 0.1);
    }

    #[test]
    fn test_quarter_arc_path() {
        let arc = value_to_arc_path(ArcSpec::new(90.0, 95.0), (150.0, 150.0));
        assert_eq!(arc.start, (150.0, 55.0));
        assert!((arc.end.0 - 245.0).abs() < EPS);
        assert!((arc.end.1 - 150.0).abs() < EPS);
        assert!(!arc.large_arc);
        assert_eq!(arc.to_svg_data(), "M150,55 A95,95 0 0,1 245,150");
    }

    #[test]
    fn test_large_arc_flag() {
        let c = (150.0, 150.0);
        assert!(!value_to_arc_path(ArcSpec::new(180.0, 95.0), c).large_arc);
        assert!(value_to_arc_path(ArcSpec::new(180.5, 95.0), c).large_arc);
    }

    #[test]
    fn test_sample_endpoints() {
        let arc = value_to_arc_path(ArcSpec::new(45.0, 95.0), (150.0, 150.0));
        let points = arc.sample(16);
        assert_eq!(points.len(), 17);
        assert!((points[0].0 - arc.start.0).abs() < EPS);
        assert!((points[0].1 - arc.start.1).abs() < EPS);
        assert!((points[16].0 - arc.end.0).abs() < EPS);
        assert!((points[16].1 - arc.end.1).abs() < EPS);
        for (x, y) in points {
            let r = ((x - 150.0).powi(2) + (y - 150.0).powi(2)).sqrt();
            assert!((r - 95.0).abs() < 1e-6);
        }
    }
}
