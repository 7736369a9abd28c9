//! Defines the [`DrawingSurface`] a sparkline is painted on and the paints it is painted with.
//!
//! The renderer only produces geometry and paints. Hosts implement [`DrawingSurface`] on
//! whatever 2D canvas they have; two implementations ship with this crate:
//! - [`record::Recorder`] collects the calls as plain values
//! - [`svg::SvgDocument`] writes an svg document (crate feature `draw-svg`)
use crate::geometry::Point;
use crate::marker::MarkerGeometry;
use crate::path::Path;
use crate::style::Color;

pub mod record;
#[cfg(feature = "draw-svg")]
pub mod svg;

/// Source of color for a paint
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shader {
    /// A single color
    Solid(Color),

    /// Linear gradient between two points, clamped beyond them
    LinearGradient {
        /// Where `start` is reached
        from: Point,

        /// Where `end` is reached
        to: Point,

        /// Color at `from`
        start: Color,

        /// Color at `to`
        end: Color,
    },
}

/// Shape of a stroke's ends
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cap {
    /// Ends exactly at the end point
    Butt,

    /// Half circle around the end point
    Round,
}

/// Whether a shape is filled or outlined
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PaintStyle {
    /// Fill the shape's interior
    Fill,

    /// Outline the shape
    Stroke {
        /// Stroke width
        width: f64,

        /// Line caps
        cap: Cap,
    },
}

/// Everything a surface needs to know to paint a shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Paint {
    /// Color source
    pub shader: Shader,

    /// Fill or stroke
    pub style: PaintStyle,
}

impl Paint {
    /// Solid fill
    pub fn fill(color: Color) -> Self {
        Paint {
            shader: Shader::Solid(color),
            style: PaintStyle::Fill,
        }
    }

    /// Solid stroke with butt caps
    pub fn stroke(color: Color, width: f64) -> Self {
        Paint {
            shader: Shader::Solid(color),
            style: PaintStyle::Stroke {
                width,
                cap: Cap::Butt,
            },
        }
    }

    /// Solid stroke with round caps, used for lines
    pub fn line(color: Color, width: f64) -> Self {
        Paint {
            shader: Shader::Solid(color),
            style: PaintStyle::Stroke {
                width,
                cap: Cap::Round,
            },
        }
    }

    /// Same paint with a different shader
    pub fn with_shader(self, shader: Shader) -> Self {
        Paint { shader, ..self }
    }
}

/// A 2D canvas the renderer can paint on.
pub trait DrawingSurface {
    /// Paints a path.
    ///
    /// Walk [`Path::commands`] to translate it into the surface's move-to / cubic-to calls.
    fn draw_path(&mut self, path: &Path, paint: &Paint);

    /// Paints a circle.
    fn draw_circle(&mut self, center: Point, radius: f64, paint: &Paint);

    /// Paints an axis aligned rectangle between `min` and `max`.
    ///
    /// `corner_radius` rounds the corners, `0` keeps them sharp.
    fn draw_rect(&mut self, min: Point, max: Point, corner_radius: f64, paint: &Paint);

    /// Paints a marker by dispatching to [`draw_circle`] or [`draw_rect`].
    ///
    /// [`draw_circle`]: DrawingSurface::draw_circle
    /// [`draw_rect`]: DrawingSurface::draw_rect
    fn draw_marker(&mut self, marker: &MarkerGeometry, paint: &Paint) {
        match *marker {
            MarkerGeometry::Circle { center, radius } => self.draw_circle(center, radius, paint),
            MarkerGeometry::Rect {
                min,
                max,
                corner_radius,
            } => self.draw_rect(min, max, corner_radius, paint),
        }
    }
}
