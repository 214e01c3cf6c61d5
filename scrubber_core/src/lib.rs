//! Radial scrubber widget model
//!
//! Framework-independent core of a circular drag control that edits a
//! time-of-day value one minute per drag sample, drawn as track, unread and
//! read arcs with date and time labels.

pub mod clock_state;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod scrubber;
pub mod svg;
pub mod velocity;

pub use clock_state::{ClockState, Direction, MONTH_NAMES};
pub use color::Color;
pub use config::{config_path, export_svg, load_config, ScrubberConfig, ScrubberOverrides};
pub use error::{ColorError, ConfigError};
pub use geometry::{pointer_to_angle, value_to_arc_path, ArcPath, ArcSpec};
pub use scrubber::{
    BackgroundImage, DisplayMode, Glow, Hit, InputMode, Label, LabelKind, Layer, LayerKind,
    RadialScrubber,
};
pub use svg::render_document;
pub use velocity::VelocityTracker;
