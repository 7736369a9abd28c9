//! Markers on top of every sample.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::scale::Frame;
use crate::style::{Color, DEFAULT_COLOR};

/// Shape drawn at every sample
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MarkerShape {
    /// No markers at all
    None,

    /// Circle with a diameter of the marker's width
    Circle,

    /// Rectangle of the marker's width and height, optionally with rounded corners
    Rect {
        /// Radius of the corners, `0` for sharp corners
        #[serde(default)]
        corner_radius: f64,
    },
}

impl Default for MarkerShape {
    fn default() -> Self {
        MarkerShape::Rect { corner_radius: 0.0 }
    }
}

/// Look of the markers
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    /// Drawn shape
    pub shape: MarkerShape,
    /// Width, also the circle's diameter
    pub width: f64,
    /// Height, ignored by circles
    pub height: f64,
    /// Fill color
    pub background: Color,
    /// Border color
    pub border_color: Color,

    /// Stroke width of the border; zero or less draws no border
    pub border_size: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        MarkerStyle {
            shape: MarkerShape::default(),
            width: 3.0,
            height: 3.0,
            background: DEFAULT_COLOR,
            border_color: DEFAULT_COLOR,
            border_size: 1.0,
        }
    }
}

impl MarkerStyle {
    /// Largest side of the marker, `0` if markers are disabled
    pub fn extent(&self) -> f64 {
        match self.shape {
            MarkerShape::None => 0.0,
            MarkerShape::Circle | MarkerShape::Rect { .. } => self.width.max(self.height).max(0.0),
        }
    }

    /// Stroke width of the border if one should be drawn
    pub fn border(&self) -> Option<f64> {
        (self.border_size > 0.0).then(|| self.border_size)
    }

    /// Geometry of a marker centered at `center`, `None` if markers are disabled
    pub fn geometry(&self, center: Point) -> Option<MarkerGeometry> {
        let half = Point::new(self.width / 2.0, self.height / 2.0);
        match self.shape {
            MarkerShape::None => None,
            MarkerShape::Circle => Some(MarkerGeometry::Circle {
                center,
                radius: half.x,
            }),
            MarkerShape::Rect { corner_radius } => Some(MarkerGeometry::Rect {
                min: center - half,
                max: center + half,
                corner_radius,
            }),
        }
    }
}

/// Resolved marker outline in screen space
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkerGeometry {
    /// Circle around a center
    Circle {
        /// Center of the circle
        center: Point,

        /// Radius of the circle
        radius: f64,
    },

    /// Axis aligned rectangle
    Rect {
        /// Top left corner
        min: Point,

        /// Bottom right corner
        max: Point,

        /// Radius of the corners
        corner_radius: f64,
    },
}

impl MarkerGeometry {
    /// Center of the marker
    pub fn center(&self) -> Point {
        match *self {
            MarkerGeometry::Circle { center, .. } => center,
            MarkerGeometry::Rect { min, max, .. } => (min + max) / 2.0,
        }
    }
}

/// Screen position of every sample.
///
/// Uses the same mapping as [`curve::build_in`](crate::curve::build_in), so every position
/// lies exactly on the curve.
pub fn place(samples: &[f64], frame: &Frame) -> Vec<Point> {
    samples
        .iter()
        .enumerate()
        .map(|(i, &v)| frame.point(i, v))
        .collect()
}

/// Marker outlines at the given positions.
pub fn outlines(points: &[Point], style: &MarkerStyle) -> Vec<MarkerGeometry> {
    points.iter().filter_map(|&p| style.geometry(p)).collect()
}
