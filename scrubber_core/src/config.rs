//! Scrubber configuration: defaults, caller overrides, validation and
//! on-disk persistence.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use chrono_tz::Tz;
use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::color::Color;
use crate::error::ConfigError;

pub const DEFAULT_CONTAINER_ID: &str = "scrubber-container";
pub const DEFAULT_UNREAD_BAR_COLOR: &str = "#9E00FD";
pub const DEFAULT_READ_BAR_COLOR: &str = "#D300EB";
pub const DEFAULT_TRACK_COLOR: &str = "#FFFFFF";
pub const DEFAULT_BACKGROUND: &str = "center-bg.png";

/// Caller-supplied options. Anything left `None` falls back to the default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrubberOverrides {
    pub container_id: Option<String>,
    pub canvas_width: Option<f64>,
    pub canvas_height: Option<f64>,
    pub inner_radius: Option<f64>,
    pub unread_bar_color: Option<String>,
    pub read_bar_color: Option<String>,
    pub track_color: Option<String>,
    pub stroke_width: Option<f64>,
    pub track_width: Option<f64>,
    pub inner_circle_background: Option<PathBuf>,
    pub text_offset: Option<f64>,
    /// Epoch milliseconds
    pub start_time: Option<i64>,
    /// IANA zone name; system local time when absent
    pub time_zone: Option<String>,
}

/// Fully resolved, validated configuration. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrubberConfig {
    pub container_id: String,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub inner_radius: f64,
    pub unread_bar_color: Color,
    pub read_bar_color: Color,
    pub track_color: Color,
    pub stroke_width: f64,
    pub track_width: f64,
    pub inner_circle_background: PathBuf,
    pub text_offset: f64,
    pub start_time: i64,
    pub time_zone: Option<Tz>,
}

impl Default for ScrubberConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            canvas_width: 300.0,
            canvas_height: 300.0,
            inner_radius: 95.0,
            unread_bar_color: Color::rgb(0x9e, 0x00, 0xfd),
            read_bar_color: Color::rgb(0xd3, 0x00, 0xeb),
            track_color: Color::WHITE,
            stroke_width: 60.0,
            track_width: 65.0,
            inner_circle_background: PathBuf::from(DEFAULT_BACKGROUND),
            text_offset: 15.0,
            start_time: Utc::now().timestamp_millis(),
            time_zone: None,
        }
    }
}

impl ScrubberConfig {
    /// Merge `overrides` onto the defaults (caller values win) and validate.
    pub fn resolve(overrides: ScrubberOverrides) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let color = |name: &'static str, value: Option<String>, fallback: Color| match value {
            Some(s) => s
                .parse::<Color>()
                .map_err(|source| ConfigError::InvalidColor { name, source }),
            None => Ok(fallback),
        };

        let time_zone = match overrides.time_zone {
            Some(name) => Some(
                name.parse::<Tz>()
                    .map_err(|_| ConfigError::UnknownTimeZone(name))?,
            ),
            None => None,
        };

        let config = Self {
            container_id: overrides.container_id.unwrap_or(defaults.container_id),
            canvas_width: overrides.canvas_width.unwrap_or(defaults.canvas_width),
            canvas_height: overrides.canvas_height.unwrap_or(defaults.canvas_height),
            inner_radius: overrides.inner_radius.unwrap_or(defaults.inner_radius),
            unread_bar_color: color(
                "unread_bar_color",
                overrides.unread_bar_color,
                defaults.unread_bar_color,
            )?,
            read_bar_color: color(
                "read_bar_color",
                overrides.read_bar_color,
                defaults.read_bar_color,
            )?,
            track_color: color("track_color", overrides.track_color, defaults.track_color)?,
            stroke_width: overrides.stroke_width.unwrap_or(defaults.stroke_width),
            track_width: overrides.track_width.unwrap_or(defaults.track_width),
            inner_circle_background: overrides
                .inner_circle_background
                .unwrap_or(defaults.inner_circle_background),
            text_offset: overrides.text_offset.unwrap_or(defaults.text_offset),
            start_time: overrides.start_time.unwrap_or(defaults.start_time),
            time_zone,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.container_id.trim().is_empty() {
            return Err(ConfigError::EmptyContainerId);
        }

        for (name, value) in [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("inner_radius", self.inner_radius),
            ("stroke_width", self.stroke_width),
            ("track_width", self.track_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }
        if !self.text_offset.is_finite() {
            return Err(ConfigError::InvalidDimension {
                name: "text_offset",
                value: self.text_offset,
            });
        }

        let half = self.canvas_width.min(self.canvas_height) / 2.0;
        if self.inner_radius + self.track_width / 2.0 > half {
            return Err(ConfigError::RadiusTooLarge {
                radius: self.inner_radius,
                track_width: self.track_width,
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }

        if chrono::DateTime::from_timestamp_millis(self.start_time).is_none() {
            return Err(ConfigError::InvalidStartTime(self.start_time));
        }
        Ok(())
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "radial-scrubber", "scrubbers")
}

/// Get the base configuration directory for all scrubbers
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the configuration file path for a specific app
pub fn config_path(app_name: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(format!("{}.toml", app_name)))
}

/// Load configuration for a specific app
///
/// Returns `None` if the config file doesn't exist yet.
/// Returns an error if the file exists but can't be parsed.
pub fn load_config<T: DeserializeOwned>(app_name: &str) -> Result<Option<T>, ConfigError> {
    let path = config_path(app_name).ok_or(ConfigError::NoConfigDir)?;

    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)?;
    let config: T = toml::from_str(&contents)?;
    Ok(Some(config))
}

/// Write an exported SVG document under the data directory and return its path
pub fn export_svg(app_name: &str, file_name: &str, contents: &str) -> Result<PathBuf, ConfigError> {
    let dir = project_dirs()
        .map(|dirs| dirs.data_dir().join(app_name))
        .ok_or(ConfigError::NoConfigDir)?;
    fs::create_dir_all(&dir)?;

    let path = dir.join(file_name);
    fs::write(&path, contents)?;
    tracing::info!(path = %path.display(), "exported svg");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path() {
        let path = config_path("test_scrubber");
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("test_scrubber.toml"));
    }

    #[test]
    fn test_resolve_defaults() {
        let config = ScrubberConfig::resolve(ScrubberOverrides::default()).unwrap();
        assert_eq!(config.container_id, DEFAULT_CONTAINER_ID);
        assert_eq!(config.canvas_width, 300.0);
        assert_eq!(config.inner_radius, 95.0);
        assert_eq!(config.unread_bar_color.to_hex(), DEFAULT_UNREAD_BAR_COLOR);
        assert_eq!(config.read_bar_color.to_hex(), DEFAULT_READ_BAR_COLOR);
        assert_eq!(config.track_color.to_hex(), DEFAULT_TRACK_COLOR);
        assert_eq!(config.stroke_width, 60.0);
        assert_eq!(config.track_width, 65.0);
        assert_eq!(config.text_offset, 15.0);
        assert!(config.time_zone.is_none());
    }

    #[test]
    fn test_overrides_win() {
        let overrides: ScrubberOverrides = toml::from_str(
            r##"
            container_id = "inbox"
            canvas_width = 400
            canvas_height = 400
            inner_radius = 120
            read_bar_color = "#00ff00"
            start_time = 0
            time_zone = "Europe/London"
            "##,
        )
        .unwrap();

        let config = ScrubberConfig::resolve(overrides).unwrap();
        assert_eq!(config.container_id, "inbox");
        assert_eq!(config.canvas_width, 400.0);
        assert_eq!(config.inner_radius, 120.0);
        assert_eq!(config.read_bar_color, Color::rgb(0, 255, 0));
        assert_eq!(config.unread_bar_color.to_hex(), DEFAULT_UNREAD_BAR_COLOR);
        assert_eq!(config.start_time, 0);
        assert_eq!(config.time_zone, Some(chrono_tz::Europe::London));
    }

    #[test]
    fn test_unknown_option_rejected() {
        let parsed = toml::from_str::<ScrubberOverrides>("bar_colour = \"#fff\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_invalid_color_names_option() {
        let overrides = ScrubberOverrides {
            track_color: Some("white".to_string()),
            ..Default::default()
        };
        let err = ScrubberConfig::resolve(overrides).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidColor {
                name: "track_color",
                ..
            }
        ));
        assert!(err.to_string().starts_with("track_color"));
    }

    #[test]
    fn test_non_positive_dimension_rejected() {
        let overrides = ScrubberOverrides {
            stroke_width: Some(0.0),
            ..Default::default()
        };
        assert!(matches!(
            ScrubberConfig::resolve(overrides),
            Err(ConfigError::InvalidDimension {
                name: "stroke_width",
                ..
            })
        ));

        let overrides = ScrubberOverrides {
            canvas_height: Some(f64::NAN),
            ..Default::default()
        };
        assert!(matches!(
            ScrubberConfig::resolve(overrides),
            Err(ConfigError::InvalidDimension {
                name: "canvas_height",
                ..
            })
        ));
    }

    #[test]
    fn test_radius_must_fit_canvas() {
        let overrides = ScrubberOverrides {
            inner_radius: Some(140.0),
            ..Default::default()
        };
        assert!(matches!(
            ScrubberConfig::resolve(overrides),
            Err(ConfigError::RadiusTooLarge { .. })
        ));
    }

    #[test]
    fn test_empty_container_id_rejected() {
        let overrides = ScrubberOverrides {
            container_id: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            ScrubberConfig::resolve(overrides),
            Err(ConfigError::EmptyContainerId)
        ));
    }

    #[test]
    fn test_bad_time_inputs_rejected() {
        let overrides = ScrubberOverrides {
            time_zone: Some("Mars/Olympus_Mons".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            ScrubberConfig::resolve(overrides),
            Err(ConfigError::UnknownTimeZone(_))
        ));

        let overrides = ScrubberOverrides {
            start_time: Some(i64::MAX),
            ..Default::default()
        };
        assert!(matches!(
            ScrubberConfig::resolve(overrides),
            Err(ConfigError::InvalidStartTime(i64::MAX))
        ));
    }
}
