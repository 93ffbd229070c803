//! Rendering configuration.
//!
//! [`StyleConfig`] is the resolved, validated set of knobs the layout
//! engine works from. [`AppConfig`] is its on-disk counterpart: a TOML
//! document with every field optional, merged over the defaults by
//! [`AppConfig::resolve`]. Front ends apply their own overrides on top
//! through the [`StyleConfig`] setters.

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use penstock_core::color::Color;

/// Millimetres per CSS pixel at 90 dpi.
const MM_PER_PX: f32 = 3.543307;

/// Configuration errors reported before any layout work starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field} `{value}`: {message}")]
    InvalidColor {
        field: &'static str,
        value: String,
        message: String,
    },
    #[error("unknown unit `{0}`, expected `px` or `mm`")]
    UnknownUnit(String),
    #[error("unknown canvas policy `{0}`, expected `fixed` or `auto`")]
    UnknownCanvasPolicy(String),
    #[error("opacity {0} is outside the range [0.0, 1.0]")]
    OpacityOutOfRange(f32),
    #[error("horizontal space {0} is outside the range [0.0, 1.0]")]
    HorizontalSpaceOutOfRange(f32),
    #[error("storage path max length {0} is too short to keep both path ends, the minimum is 5")]
    StoragePathTooShort(usize),
}

/// Parse a CSS color string, tagging failures with the config field name.
pub fn parse_color(field: &'static str, value: &str) -> Result<Color, ConfigError> {
    Color::new(value).map_err(|message| ConfigError::InvalidColor {
        field,
        value: value.to_string(),
        message,
    })
}

/// Length unit for the declared canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    Px,
    Mm,
}

impl Unit {
    /// Pixels per one unit, for converting declared lengths into user space.
    pub fn scale(self) -> f32 {
        match self {
            Unit::Px => 1.0,
            Unit::Mm => MM_PER_PX,
        }
    }

    /// Suffix appended to SVG length attributes.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Mm => "mm",
        }
    }
}

impl FromStr for Unit {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "px" => Ok(Unit::Px),
            "mm" => Ok(Unit::Mm),
            _ => Err(ConfigError::UnknownUnit(s.to_string())),
        }
    }
}

/// How the SVG viewport is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanvasPolicy {
    /// Use the configured width and height; content may overflow.
    #[default]
    Fixed,
    /// Ignore the configured size and fit the viewport around the content.
    Auto,
}

impl FromStr for CanvasPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(CanvasPolicy::Fixed),
            "auto" => Ok(CanvasPolicy::Auto),
            _ => Err(ConfigError::UnknownCanvasPolicy(s.to_string())),
        }
    }
}

/// Resolved rendering configuration.
///
/// Every knob carries a default, so `StyleConfig::default()` renders a
/// sensible diagram without any configuration at all:
///
/// | field                     | default     |
/// |---------------------------|-------------|
/// | `font_size`               | `7.0`       |
/// | `box_color`               | `mistyrose` |
/// | `opacity`                 | `0.3`       |
/// | `canvas_width`            | `700.0`     |
/// | `canvas_height`           | `354.0`     |
/// | `unit`                    | `px`        |
/// | `horizontal_space`        | `0.07`      |
/// | `storage_path_max_length` | off         |
/// | `marker_padding`          | `5.0`       |
/// | `key_color`               | `darkgreen` |
/// | `value_color`             | `navy`      |
/// | `canvas_policy`           | `fixed`     |
#[derive(Debug, Clone)]
pub struct StyleConfig {
    font_size: f32,
    box_color: Color,
    opacity: f32,
    canvas_width: f32,
    canvas_height: f32,
    unit: Unit,
    horizontal_space: f32,
    storage_path_max_length: Option<usize>,
    marker_padding: f32,
    key_color: Color,
    value_color: Color,
    canvas_policy: CanvasPolicy,
}

impl StyleConfig {
    /// Create a configuration with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check all range constraints, reporting the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ConfigError::OpacityOutOfRange(self.opacity));
        }
        if !(0.0..=1.0).contains(&self.horizontal_space) {
            return Err(ConfigError::HorizontalSpaceOutOfRange(self.horizontal_space));
        }
        if let Some(max_length) = self.storage_path_max_length {
            if max_length < 5 {
                return Err(ConfigError::StoragePathTooShort(max_length));
            }
        }
        Ok(())
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
    }

    pub fn box_color(&self) -> Color {
        self.box_color
    }

    pub fn set_box_color(&mut self, box_color: Color) {
        self.box_color = box_color;
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    pub fn canvas_width(&self) -> f32 {
        self.canvas_width
    }

    pub fn set_canvas_width(&mut self, canvas_width: f32) {
        self.canvas_width = canvas_width;
    }

    pub fn canvas_height(&self) -> f32 {
        self.canvas_height
    }

    pub fn set_canvas_height(&mut self, canvas_height: f32) {
        self.canvas_height = canvas_height;
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }

    pub fn horizontal_space(&self) -> f32 {
        self.horizontal_space
    }

    pub fn set_horizontal_space(&mut self, horizontal_space: f32) {
        self.horizontal_space = horizontal_space;
    }

    pub fn storage_path_max_length(&self) -> Option<usize> {
        self.storage_path_max_length
    }

    pub fn set_storage_path_max_length(&mut self, max_length: Option<usize>) {
        self.storage_path_max_length = max_length;
    }

    pub fn marker_padding(&self) -> f32 {
        self.marker_padding
    }

    pub fn set_marker_padding(&mut self, marker_padding: f32) {
        self.marker_padding = marker_padding;
    }

    pub fn key_color(&self) -> Color {
        self.key_color
    }

    pub fn set_key_color(&mut self, key_color: Color) {
        self.key_color = key_color;
    }

    pub fn value_color(&self) -> Color {
        self.value_color
    }

    pub fn set_value_color(&mut self, value_color: Color) {
        self.value_color = value_color;
    }

    pub fn canvas_policy(&self) -> CanvasPolicy {
        self.canvas_policy
    }

    pub fn set_canvas_policy(&mut self, canvas_policy: CanvasPolicy) {
        self.canvas_policy = canvas_policy;
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_size: 7.0,
            box_color: Color::new("mistyrose").expect("'mistyrose' is a valid CSS color"),
            opacity: 0.3,
            canvas_width: 700.0,
            canvas_height: 354.0,
            unit: Unit::Px,
            horizontal_space: 0.07,
            storage_path_max_length: None,
            marker_padding: 5.0,
            key_color: Color::new("darkgreen").expect("'darkgreen' is a valid CSS color"),
            value_color: Color::new("navy").expect("'navy' is a valid CSS color"),
            canvas_policy: CanvasPolicy::Fixed,
        }
    }
}

/// Application configuration as read from a TOML file.
///
/// Every field is optional so a file only has to mention the knobs it
/// wants to change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    canvas: CanvasSection,
    #[serde(default)]
    style: StyleSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CanvasSection {
    policy: Option<String>,
    width: Option<f32>,
    height: Option<f32>,
    unit: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StyleSection {
    font_size: Option<f32>,
    box_color: Option<String>,
    opacity: Option<f32>,
    horizontal_space: Option<f32>,
    marker_padding: Option<f32>,
    key_color: Option<String>,
    value_color: Option<String>,
    storage_path_max_length: Option<usize>,
}

impl AppConfig {
    /// Merge this file over the defaults, producing a resolved [`StyleConfig`].
    ///
    /// String-typed fields (colors, unit, policy) are parsed here so a bad
    /// file is rejected before any rendering starts.
    pub fn resolve(&self) -> Result<StyleConfig, ConfigError> {
        let mut config = StyleConfig::default();

        if let Some(policy) = &self.canvas.policy {
            config.set_canvas_policy(policy.parse()?);
        }
        if let Some(width) = self.canvas.width {
            config.set_canvas_width(width);
        }
        if let Some(height) = self.canvas.height {
            config.set_canvas_height(height);
        }
        if let Some(unit) = &self.canvas.unit {
            config.set_unit(unit.parse()?);
        }

        if let Some(font_size) = self.style.font_size {
            config.set_font_size(font_size);
        }
        if let Some(box_color) = &self.style.box_color {
            config.set_box_color(parse_color("box color", box_color)?);
        }
        if let Some(opacity) = self.style.opacity {
            config.set_opacity(opacity);
        }
        if let Some(horizontal_space) = self.style.horizontal_space {
            config.set_horizontal_space(horizontal_space);
        }
        if let Some(marker_padding) = self.style.marker_padding {
            config.set_marker_padding(marker_padding);
        }
        if let Some(key_color) = &self.style.key_color {
            config.set_key_color(parse_color("key color", key_color)?);
        }
        if let Some(value_color) = &self.style.value_color {
            config.set_value_color(parse_color("value color", value_color)?);
        }
        if let Some(max_length) = self.style.storage_path_max_length {
            config.set_storage_path_max_length(Some(max_length));
        }

        Ok(config)
    }
}
