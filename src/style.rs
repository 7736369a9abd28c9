//! Colors and the style of a sparkline.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::marker::MarkerStyle;

/// Color used by every default style entry: `#222222`
pub const DEFAULT_COLOR: Color = Color::rgb(0x22, 0x22, 0x22);

/// Default stroke width of the line
pub const DEFAULT_THICKNESS: f64 = 2.0;

/// Default smoothing factor
pub const DEFAULT_BEZIER: f64 = 0.5;

/// Default split ratio
pub const DEFAULT_SPLIT_RATIO: f64 = 0.5;

/// An sRGB color with alpha.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel
    pub r: u8,

    /// Green channel
    pub g: u8,

    /// Blue channel
    pub b: u8,

    /// Alpha channel, `255` is opaque
    pub a: u8,
}

impl Color {
    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Color with alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// `#rrggbb` without the alpha channel
    pub fn rgb_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha channel as a number between `0` and `1`
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// css notation `rgba(r, g, b, a)`
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.opacity())
    }
}

impl Default for Color {
    fn default() -> Self {
        DEFAULT_COLOR
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parses `#RGB`, `#RRGGBB` or `#AARRGGBB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::Digits(s.to_string()));
        }
        // only ascii from here on, so byte offsets are char offsets
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        let parsed = match digits.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17);
                (nibble(0), nibble(1), nibble(2), Ok(255))
            }
            6 => (channel(0), channel(2), channel(4), Ok(255)),
            8 => (channel(2), channel(4), channel(6), channel(0)),
            n => return Err(ColorError::Length(s.to_string(), n)),
        };
        match parsed {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Color { r, g, b, a }),
            _ => Err(ColorError::Digits(s.to_string())),
        }
    }
}

impl Display for Color {
    /// Writes `#rrggbb` for opaque colors and `#aarrggbb` otherwise.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.a == 255 {
            write!(f, "{}", self.rgb_hex())
        } else {
            write!(f, "#{:02x}{}", self.a, &self.rgb_hex()[1..])
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// How the line is colored
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineMode {
    /// One path in the primary color
    #[default]
    Single,

    /// One path with a horizontal gradient from the primary to the secondary color
    Gradient,

    /// Two paths divided at the split ratio, each in its own color
    Split,
}

/// Everything about a sparkline's look.
///
/// Values are taken as given; [`StyleConfig::clamped`] corrects out of range entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Line color, also the gradient's start
    pub line_color: Color,

    /// Gradient end color
    pub line_second_color: Color,

    /// Stroke width of the line
    pub line_thickness: f64,

    /// Smoothing factor between `0` (straight lines) and `1`
    pub bezier: f64,

    /// Coloring of the line
    pub mode: LineMode,

    /// Horizontal position of the split between `0` and `1`
    pub split_ratio: f64,

    /// Color left of the split
    pub split_left_color: Color,

    /// Color right of the split
    pub split_right_color: Color,

    /// Markers drawn on every sample
    pub marker: MarkerStyle,

    /// Scale large samples down by powers of ten before building the curve
    pub normalize_magnitude: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            line_color: DEFAULT_COLOR,
            line_second_color: DEFAULT_COLOR,
            line_thickness: DEFAULT_THICKNESS,
            bezier: DEFAULT_BEZIER,
            mode: LineMode::Single,
            split_ratio: DEFAULT_SPLIT_RATIO,
            split_left_color: DEFAULT_COLOR,
            split_right_color: DEFAULT_COLOR,
            marker: MarkerStyle::default(),
            normalize_magnitude: true,
        }
    }
}

impl StyleConfig {
    /// Copy with the smoothing factor and split ratio forced into `0..=1`.
    ///
    /// `nan` falls back to the default value.
    pub fn clamped(&self) -> StyleConfig {
        StyleConfig {
            bezier: clamp_unit("bezier", self.bezier, DEFAULT_BEZIER),
            split_ratio: clamp_unit("split_ratio", self.split_ratio, DEFAULT_SPLIT_RATIO),
            ..self.clone()
        }
    }

    /// Inset keeping markers and the line's stroke inside the drawing rectangle
    pub fn padding(&self) -> f64 {
        self.marker.extent() + self.line_thickness.max(0.0)
    }
}

fn clamp_unit(name: &str, value: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        log::debug!("{} is nan, using {}", name, fallback);
        return fallback;
    }
    let clamped = num::clamp(value, 0.0, 1.0);
    if clamped != value {
        log::debug!("{} {} out of range, clamped to {}", name, value, clamped);
    }
    clamped
}
