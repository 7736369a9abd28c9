//! Render requests stored as toml.
//!
//! ```toml
//! samples = [298, 46, 87, 178, 446]
//! width = 360
//! height = 120
//!
//! [style]
//! mode = "split"
//! split_ratio = 0.3
//! split_left_color = "#ff0000"
//!
//! [style.marker]
//! shape = { type = "circle" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::render::{self, RenderPlan, Sparkline};
use crate::style::StyleConfig;

/// Width used when a request does not name one
pub const DEFAULT_WIDTH: f64 = 360.0;

/// Height used when a request does not name one
pub const DEFAULT_HEIGHT: f64 = 120.0;

/// Samples, drawing rectangle and style of one sparkline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SparklineConfig {
    /// Values in drawing order
    pub samples: Vec<f64>,
    /// Width of the drawing rectangle
    pub width: f64,
    /// Height of the drawing rectangle
    pub height: f64,
    /// Explicit padding, derived from the style when missing
    pub padding: Option<f64>,
    /// Look of the sparkline
    pub style: StyleConfig,
}

impl Default for SparklineConfig {
    fn default() -> Self {
        SparklineConfig {
            samples: Vec::new(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            padding: None,
            style: StyleConfig::default(),
        }
    }
}

impl SparklineConfig {
    /// Parses and validates a toml document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SparklineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a toml file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::info!(
            "loaded {} samples from {}",
            config.samples.len(),
            path.display()
        );
        Ok(config)
    }

    /// Rejects values the geometry cannot work with.
    ///
    /// Style values are not checked here, they are clamped when rendering.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some((index, &value)) = self
            .samples
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite())
        {
            return Err(ConfigError::NonFiniteSample { index, value });
        }
        let dimensions = [
            ("width", Some(self.width)),
            ("height", Some(self.height)),
            ("padding", self.padding),
        ];
        for (name, value) in dimensions {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(ConfigError::Dimension { name, value });
                }
            }
        }
        Ok(())
    }

    /// Computes the render plan for this request.
    pub fn plan(&self) -> RenderPlan {
        match self.padding {
            Some(padding) => render::configure_with_padding(
                &self.samples,
                &self.style,
                self.width,
                self.height,
                padding,
            ),
            None => render::configure(&self.samples, &self.style, self.width, self.height),
        }
    }

    /// Host side sparkline initialised from this request.
    pub fn into_sparkline(self) -> Sparkline {
        let mut sparkline = Sparkline::new(self.width, self.height);
        sparkline.set_samples(self.samples);
        sparkline.set_style(self.style);
        sparkline.set_padding(self.padding);
        sparkline
    }
}
