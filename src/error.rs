//! Errors raised while reading render requests.
//!
//! Geometry itself never fails; degenerate input has a defined rendering instead.

use std::path::PathBuf;

/// A color string which is not `#RGB`, `#RRGGBB` or `#AARRGGBB`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The string does not start with `#`
    #[error("color `{0}` does not start with `#`")]
    MissingHash(String),

    /// Wrong number of hex digits
    #[error("color `{0}` has {1} hex digits, expected 3, 6 or 8")]
    Length(String, usize),

    /// Characters other than hex digits after the `#`
    #[error("color `{0}` contains characters which are not hex digits")]
    Digits(String),
}

/// Failure to load a [`SparklineConfig`](crate::config::SparklineConfig)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File which was requested
        path: PathBuf,

        /// Underlying io error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid toml or does not match the expected layout
    #[error("invalid sparkline config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A sample is `nan` or infinite
    #[error("sample {index} is {value}, samples have to be finite")]
    NonFiniteSample {
        /// Position of the offending sample
        index: usize,

        /// The offending value
        value: f64,
    },

    /// Width, height or padding is negative or not finite
    #[error("{name} has to be a finite, non-negative number, got {value}")]
    Dimension {
        /// Name of the field
        name: &'static str,

        /// The offending value
        value: f64,
    },
}
