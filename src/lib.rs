#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod config;
pub mod curve;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod marker;
pub mod path;
pub mod render;
pub mod scale;
pub mod split;
pub mod style;

pub use crate::config::SparklineConfig;
pub use crate::draw::DrawingSurface;
pub use crate::geometry::{BezierSegment, Point};
pub use crate::path::Path;
pub use crate::render::{configure, RenderPlan, Sparkline};
pub use crate::style::{Color, LineMode, StyleConfig};
