//! Error types for scrubber configuration and persistence

use std::io;

use thiserror::Error;

/// A malformed color literal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The literal does not start with `#`
    #[error("color {0:?} must start with '#'")]
    MissingHash(String),
    /// The literal is neither `#RGB` nor `#RRGGBB`
    #[error("color {0:?} must have 3 or 6 hex digits")]
    BadLength(String),
    /// The literal contains a non-hex digit
    #[error("color {0:?} contains a non-hex digit")]
    BadDigit(String),
}

/// Error type for configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to determine config directory
    #[error("could not determine config directory")]
    NoConfigDir,
    /// IO error while reading or writing
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Failed to parse config file
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// A size option is zero, negative or not finite
    #[error("{name} must be a positive finite number, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },
    /// A color option is malformed
    #[error("{name}: {source}")]
    InvalidColor {
        name: &'static str,
        #[source]
        source: ColorError,
    },
    /// The ring and its track stroke overflow the canvas
    #[error("inner radius {radius} with track width {track_width} does not fit a {width}x{height} canvas")]
    RadiusTooLarge {
        radius: f64,
        track_width: f64,
        width: f64,
        height: f64,
    },
    /// Element ids are derived from the container id, so it cannot be empty
    #[error("container id must not be empty")]
    EmptyContainerId,
    /// The start timestamp is outside the representable range
    #[error("start time {0} ms is out of range")]
    InvalidStartTime(i64),
    /// The time zone is not a known IANA name
    #[error("unknown time zone {0:?}")]
    UnknownTimeZone(String),
}
