//! A surface which only remembers what it was asked to draw.

use crate::draw::{DrawingSurface, Paint};
use crate::geometry::Point;
use crate::path::{Path, PathCommand};

/// A single call to a [`DrawingSurface`]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`DrawingSurface::draw_path`]
    Path {
        /// The path's move-to and cubic-to instructions
        commands: Vec<PathCommand>,

        /// Paint it was drawn with
        paint: Paint,
    },

    /// [`DrawingSurface::draw_circle`]
    Circle {
        /// Center of the circle
        center: Point,

        /// Radius of the circle
        radius: f64,

        /// Paint it was drawn with
        paint: Paint,
    },

    /// [`DrawingSurface::draw_rect`]
    Rect {
        /// Top left corner
        min: Point,

        /// Bottom right corner
        max: Point,

        /// Radius of the corners
        corner_radius: f64,

        /// Paint it was drawn with
        paint: Paint,
    },
}

/// Records every draw call in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recorder {
    /// Calls received so far
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    /// Empty recorder
    pub fn new() -> Self {
        Recorder::default()
    }

    /// Recorded paths
    pub fn paths(&self) -> impl Iterator<Item = (&[PathCommand], &Paint)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Path { commands, paint } => Some((commands.as_slice(), paint)),
            _ => None,
        })
    }
}

impl DrawingSurface for Recorder {
    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        self.commands.push(DrawCommand::Path {
            commands: path.commands().collect(),
            paint: *paint,
        });
    }

    fn draw_circle(&mut self, center: Point, radius: f64, paint: &Paint) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            paint: *paint,
        });
    }

    fn draw_rect(&mut self, min: Point, max: Point, corner_radius: f64, paint: &Paint) {
        self.commands.push(DrawCommand::Rect {
            min,
            max,
            corner_radius,
            paint: *paint,
        });
    }
}
