//! RadialScrubber - the widget model
//!
//! Owns the clock value, the three arc layers (track, unread, read), the two
//! text labels and the display mode. Rendering backends read layers and
//! labels from here; input backends feed canvas-space pointer positions into
//! [`RadialScrubber::scrub`] and [`RadialScrubber::track_velocity`].

use std::path::PathBuf;
use std::time::Instant;

use crate::clock_state::{ClockState, Direction};
use crate::color::Color;
use crate::config::ScrubberConfig;
use crate::error::ConfigError;
use crate::geometry::{pointer_to_angle, value_to_arc_path, ArcPath, ArcSpec, FULL_CIRCLE};
use crate::velocity::VelocityTracker;

/// Ring radius while minimized
pub const MINIMIZED_RADIUS: f64 = 65.0;
const MINIMIZED_TRACK_WIDTH: f64 = 15.0;
const MINIMIZED_BAR_WIDTH: f64 = 10.0;

const INITIAL_UNREAD_ANGLE: f64 = 90.0;
const INITIAL_READ_ANGLE: f64 = 45.0;

pub const DATE_FONT_SIZE: f64 = 12.0;
pub const TIME_FONT_SIZE: f64 = 38.0;

/// Offset of the background image from the canvas corner, past the track
const BACKGROUND_INSET: f64 = 17.0;

/// Presentation state, toggled by tapping a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Normal,
    Minimized,
}

/// How the host delivers drag input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Pointer,
    Touch,
}

impl InputMode {
    /// Touch on mobile targets, pointer everywhere else
    pub fn detect() -> Self {
        if cfg!(any(target_os = "android", target_os = "ios")) {
            InputMode::Touch
        } else {
            InputMode::Pointer
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Track,
    Unread,
    Read,
}

impl LayerKind {
    fn suffix(self) -> &'static str {
        match self {
            LayerKind::Track => "track",
            LayerKind::Unread => "unread",
            LayerKind::Read => "read",
        }
    }
}

/// Soft halo drawn under a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: Color,
    pub opacity: f64,
    pub width: f64,
}

impl Glow {
    const fn new(color: Color, opacity: f64, width: f64) -> Self {
        Self {
            color,
            opacity,
            width,
        }
    }
}

/// One stroked arc
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub kind: LayerKind,
    /// Element id, unique per container
    pub id: String,
    pub color: Color,
    /// Stored value in degrees; survives minimize/maximize
    pub value_angle: f64,
    pub stroke_width: f64,
    pub glow: Glow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Date,
    Time,
}

/// A text element centred on `position`
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub kind: LabelKind,
    pub id: String,
    pub text: String,
    pub position: (f64, f64),
    pub font_size: f64,
    pub color: Color,
}

impl Label {
    /// Approximate bounding box as `(left, top, right, bottom)`
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let half_w = self.text.chars().count() as f64 * self.font_size * 0.3;
        let half_h = self.font_size * 0.6;
        let (x, y) = self.position;
        (x - half_w, y - half_h, x + half_w, y + half_h)
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        let (left, top, right, bottom) = self.bounds();
        (left..=right).contains(&x) && (top..=bottom).contains(&y)
    }
}

/// The image filling the ring's centre
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundImage {
    pub href: PathBuf,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// What a canvas point lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Any of the three arcs; starts a scrub
    Arc,
    /// A text label; toggles the display mode
    Label(LabelKind),
}

#[derive(Debug, Clone)]
pub struct RadialScrubber {
    config: ScrubberConfig,
    center: (f64, f64),
    radius: f64,
    clock: ClockState,
    last_val: f64,
    velocity: VelocityTracker,
    mode: DisplayMode,
    input_mode: InputMode,
    track: Layer,
    unread: Layer,
    read: Layer,
}

impl RadialScrubber {
    pub fn new(config: ScrubberConfig) -> Result<Self, ConfigError> {
        Self::with_input_mode(config, InputMode::detect())
    }

    pub fn with_input_mode(
        config: ScrubberConfig,
        input_mode: InputMode,
    ) -> Result<Self, ConfigError> {
        let clock = ClockState::from_epoch_millis(config.start_time, config.time_zone)?;
        let id = |kind: LayerKind| format!("{}-{}", config.container_id, kind.suffix());

        let track = Layer {
            kind: LayerKind::Track,
            id: id(LayerKind::Track),
            color: config.track_color,
            value_angle: FULL_CIRCLE,
            stroke_width: config.track_width,
            glow: Glow::new(Color::WHITE, 1.0, 20.0),
        };
        let unread = Layer {
            kind: LayerKind::Unread,
            id: id(LayerKind::Unread),
            color: config.unread_bar_color,
            value_angle: INITIAL_UNREAD_ANGLE,
            stroke_width: config.stroke_width,
            glow: Glow::new(Color::BLACK, 1.0, 12.0),
        };
        let read = Layer {
            kind: LayerKind::Read,
            id: id(LayerKind::Read),
            color: config.read_bar_color,
            value_angle: INITIAL_READ_ANGLE,
            stroke_width: config.stroke_width,
            glow: Glow::new(Color::BLACK, 0.9, 12.0),
        };

        tracing::debug!(
            container = %config.container_id,
            ?input_mode,
            date = %clock.format_date(),
            time = %clock.format_time(),
            "scrubber created"
        );

        Ok(Self {
            center: (config.canvas_width / 2.0, config.canvas_height / 2.0),
            radius: config.inner_radius,
            clock,
            last_val: 0.0,
            velocity: VelocityTracker::default(),
            mode: DisplayMode::Normal,
            input_mode,
            track,
            unread,
            read,
            config,
        })
    }

    pub fn config(&self) -> &ScrubberConfig {
        &self.config
    }

    pub fn clock(&self) -> &ClockState {
        &self.clock
    }

    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// Value the next scrub compares against to pick a direction
    pub fn last_value(&self) -> f64 {
        self.last_val
    }

    /// Layers in draw order
    pub fn layers(&self) -> [&Layer; 3] {
        [&self.track, &self.unread, &self.read]
    }

    pub fn layer(&self, kind: LayerKind) -> &Layer {
        match kind {
            LayerKind::Track => &self.track,
            LayerKind::Unread => &self.unread,
            LayerKind::Read => &self.read,
        }
    }

    /// Arc geometry of `layer` at the current radius
    pub fn arc(&self, layer: &Layer) -> ArcPath {
        value_to_arc_path(ArcSpec::new(layer.value_angle, self.radius), self.center)
    }

    pub fn date_text(&self) -> String {
        self.clock.format_date()
    }

    pub fn time_text(&self) -> String {
        self.clock.format_time()
    }

    /// Labels in draw order
    pub fn labels(&self) -> [Label; 2] {
        let (cx, cy) = self.center;
        [
            Label {
                kind: LabelKind::Time,
                id: format!("{}-time", self.config.container_id),
                text: self.time_text(),
                position: (cx, cy + self.config.text_offset),
                font_size: TIME_FONT_SIZE,
                color: Color::WHITE,
            },
            Label {
                kind: LabelKind::Date,
                id: format!("{}-date", self.config.container_id),
                text: self.date_text(),
                position: (cx, cy - self.config.text_offset),
                font_size: DATE_FONT_SIZE,
                color: Color::WHITE,
            },
        ]
    }

    pub fn background(&self) -> BackgroundImage {
        let inset = self.config.track_width + BACKGROUND_INSET;
        BackgroundImage {
            href: self.config.inner_circle_background.clone(),
            x: inset,
            y: inset,
            width: self.config.canvas_width / 2.0 - 15.0,
            height: self.config.canvas_height / 2.0 - 15.0,
        }
    }

    /// Step the clock one minute, forward when the pointer angle grew since the
    /// last sample and backward when it shrank.
    pub fn scrub(&mut self, x: f64, y: f64) -> Direction {
        let (cx, cy) = self.center;
        let raw = (y - cy).atan2(x - cx).to_degrees() + 90.0;
        let val = pointer_to_angle(x, y, cx, cy);

        let direction = if val < self.last_val {
            Direction::Backward
        } else {
            Direction::Forward
        };
        if self.clock.step(direction) {
            tracing::debug!(date = %self.clock.format_date(), "day rolled over");
        }
        tracing::debug!(angle = val, ?direction, time = %self.clock.format_time(), "scrub");

        // Samples on the wrap boundary would flip the next direction
        if val == 0.0 || raw > 359.0 {
            return direction;
        }
        self.last_val = val;
        direction
    }

    /// Record the horizontal pointer position for the velocity readout
    pub fn track_velocity(&mut self, x: f64) -> f64 {
        self.velocity.record(x)
    }

    pub fn track_velocity_at(&mut self, x: f64, now: Instant) -> f64 {
        self.velocity.record_at(x, now)
    }

    /// `floor(|px per ms| * 100)` of the last drag
    pub fn velocity_display(&self) -> i64 {
        self.velocity.display()
    }

    pub fn minimize(&mut self) {
        self.mode = DisplayMode::Minimized;
        self.radius = MINIMIZED_RADIUS;
        self.track.stroke_width = MINIMIZED_TRACK_WIDTH;
        self.track.glow = Glow::new(Color::WHITE, 1.0, 10.0);
        for bar in [&mut self.unread, &mut self.read] {
            bar.stroke_width = MINIMIZED_BAR_WIDTH;
            bar.glow = Glow::new(Color::BLACK, 0.8, 3.0);
        }
        tracing::info!(container = %self.config.container_id, "minimized");
    }

    pub fn maximize(&mut self) {
        self.mode = DisplayMode::Normal;
        self.radius = self.config.inner_radius;
        self.track.stroke_width = self.config.track_width;
        self.track.glow = Glow::new(Color::WHITE, 1.0, 20.0);
        for bar in [&mut self.unread, &mut self.read] {
            bar.stroke_width = self.config.stroke_width;
            bar.glow = Glow::new(Color::BLACK, 0.8, 12.0);
        }
        tracing::info!(container = %self.config.container_id, "maximized");
    }

    pub fn toggle_minimize(&mut self) -> DisplayMode {
        match self.mode {
            DisplayMode::Normal => self.minimize(),
            DisplayMode::Minimized => self.maximize(),
        }
        self.mode
    }

    pub fn set_read_angle(&mut self, angle: f64) {
        let glow = self.bar_glow();
        self.read.value_angle = angle;
        self.read.glow = glow;
    }

    pub fn set_unread_angle(&mut self, angle: f64) {
        let glow = self.bar_glow();
        self.unread.value_angle = angle;
        self.unread.glow = glow;
    }

    fn bar_glow(&self) -> Glow {
        let width = match self.mode {
            DisplayMode::Minimized => 3.0,
            DisplayMode::Normal => 12.0,
        };
        Glow::new(Color::BLACK, 1.0, width)
    }

    /// What the canvas point `(x, y)` lands on, labels first
    pub fn hit_test(&self, x: f64, y: f64) -> Option<Hit> {
        if let Some(label) = self.labels().iter().find(|label| label.contains(x, y)) {
            return Some(Hit::Label(label.kind));
        }

        let half_width = self
            .layers()
            .iter()
            .map(|layer| layer.stroke_width)
            .fold(0.0_f64, f64::max)
            / 2.0;
        let (cx, cy) = self.center;
        let distance = (x - cx).hypot(y - cy);
        if (distance - self.radius).abs() <= half_width {
            Some(Hit::Arc)
        } else {
            None
        }
    }
}
