//! Draw a sparkline into an svg document

use crate::draw::{Cap, DrawingSurface, Paint, PaintStyle, Shader};
use crate::geometry::Point;
use crate::path::{Path, PathCommand};
use crate::style::Color;
use std::fmt::{Display, Formatter, Write};
use std::marker::PhantomData;

/// Helper trait implemented by [`Absolute`] and [`Relative`] to choose
/// how the coordinates are interpreted in the svg's path.
///
/// This effectively toggles between lower and upper case letters for the path commands.
pub trait CoordRepr {
    /// Character to use for the MoveTo command
    const M: &'static str;

    /// Character to use for the Cubic Bezier Curve command
    const C: &'static str;

    /// Whether coordinates are written relative to the current point
    const RELATIVE: bool;
}

/// Interpret the svg path's coordinates as absolute.
pub struct Absolute;
impl CoordRepr for Absolute {
    const M: &'static str = "M";
    const C: &'static str = "C";
    const RELATIVE: bool = false;
}

/// Interpret the svg path's coordinates as relative.
pub struct Relative;
impl CoordRepr for Relative {
    const M: &'static str = "m";
    const C: &'static str = "c";
    const RELATIVE: bool = true;
}

/// This type wraps a mutable String reference and writes paths to it
/// using the path commands used in a svg `<path>`'s d attribute
///
/// ```
/// # use sparkline::geometry::{BezierSegment, Point};
/// # use sparkline::path::Path;
/// use sparkline::draw::svg::SVGAbsolutePath;
///
/// let mut path = Path::new(Point::new(0.0, 1.0));
/// path.push(BezierSegment::line(Point::new(0.0, 1.0), Point::new(2.0, 3.0)));
/// let mut d = String::new();
/// SVGAbsolutePath::from(&mut d).add_path(&path);
/// assert_eq!(d, "M 0,1 C 0,1 2,3 2,3");
/// ```
pub struct SVGPath<'s, R: CoordRepr>(&'s mut String, PhantomData<&'s R>);

/// Wrapper for writing a path using absolute coordinates
pub type SVGAbsolutePath<'s> = SVGPath<'s, Absolute>;

/// Wrapper for writing a path using relative coordinates
pub type SVGRelativePath<'s> = SVGPath<'s, Relative>;

impl<'s, R: CoordRepr> From<&'s mut String> for SVGPath<'s, R> {
    fn from(string: &'s mut String) -> Self {
        SVGPath(string, PhantomData)
    }
}

impl<'s, R: CoordRepr> SVGPath<'s, R> {
    /// Appends the path's commands to the string.
    ///
    /// The path's move-to is always absolute, only a leading one uses `R::M` which svg
    /// reads as absolute anyway.
    pub fn add_path(&mut self, path: &Path) {
        let leading = self.0.is_empty();
        let mut current = Point::zeros();
        for command in path.commands() {
            if !self.0.is_empty() {
                self.0.push(' ');
            }
            let origin = if R::RELATIVE { current } else { Point::zeros() };
            match command {
                PathCommand::MoveTo(p) => {
                    let m = if leading { R::M } else { Absolute::M };
                    let _ = write!(self.0, "{} {},{}", m, p.x, p.y);
                }
                PathCommand::CubicTo(c1, c2, e) => {
                    let (c1, c2, e) = (c1 - origin, c2 - origin, e - origin);
                    let _ = write!(
                        self.0,
                        "{} {},{} {},{} {},{}",
                        R::C,
                        c1.x,
                        c1.y,
                        c2.x,
                        c2.y,
                        e.x,
                        e.y
                    );
                }
            }
            current = match command {
                PathCommand::MoveTo(p) | PathCommand::CubicTo(_, _, p) => p,
            };
        }
    }
}

struct PathElement {
    d: String,
    paint: String,
}

impl Display for PathElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "<path d=\"{}\"{}/>", self.d, self.paint)
    }
}

struct Circle {
    center: Point,
    radius: f64,
    paint: String,
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}/>",
            self.center.x, self.center.y, self.radius, self.paint
        )
    }
}

struct Rect {
    min: Point,
    max: Point,
    corner_radius: f64,
    paint: String,
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let size = self.max - self.min;
        write!(
            f,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
            self.min.x, self.min.y, size.x, size.y
        )?;
        if self.corner_radius > 0.0 {
            write!(f, " rx=\"{}\"", self.corner_radius)?;
        }
        writeln!(f, "{}/>", self.paint)
    }
}

struct LinearGradient {
    id: String,
    from: Point,
    to: Point,
    start: Color,
    end: Color,
}

impl Display for LinearGradient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<linearGradient id=\"{}\" gradientUnits=\"userSpaceOnUse\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\">",
            self.id, self.from.x, self.from.y, self.to.x, self.to.y
        )?;
        for (offset, color) in [(0, self.start), (1, self.end)] {
            writeln!(
                f,
                "<stop offset=\"{}\" stop-color=\"{}\" stop-opacity=\"{}\"/>",
                offset,
                color.rgb_hex(),
                color.opacity()
            )?;
        }
        writeln!(f, "</linearGradient>")
    }
}

/// An svg document collecting everything drawn onto it.
///
/// Its [`Display`] implementation writes the complete `<svg>` element.
pub struct SvgDocument {
    /// Width and height of the view box
    pub size: (f64, f64),
    defs: Vec<Box<dyn Display>>,
    elements: Vec<Box<dyn Display>>,
}

impl SvgDocument {
    /// Empty document with a view box of `width` x `height`
    pub fn new(width: f64, height: f64) -> Self {
        SvgDocument {
            size: (width, height),
            defs: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Number of drawn elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if nothing was drawn yet
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn add_elem<E: Display + 'static>(&mut self, elem: E) {
        self.elements.push(Box::new(elem));
    }

    /// Turns a paint into attributes, registering gradients in the defs.
    fn paint_attributes(&mut self, paint: &Paint) -> String {
        let color = match paint.shader {
            Shader::Solid(color) => (color.rgb_hex(), color.opacity()),
            Shader::LinearGradient {
                from,
                to,
                start,
                end,
            } => {
                let id = format!("sparkline-gradient-{}", self.defs.len());
                let reference = format!("url(#{})", id);
                self.defs.push(Box::new(LinearGradient {
                    id,
                    from,
                    to,
                    start,
                    end,
                }));
                (reference, 1.0)
            }
        };

        let (value, opacity) = color;
        match paint.style {
            PaintStyle::Fill => {
                let mut attributes = format!(" fill=\"{}\" stroke=\"none\"", value);
                if opacity < 1.0 {
                    let _ = write!(attributes, " fill-opacity=\"{}\"", opacity);
                }
                attributes
            }
            PaintStyle::Stroke { width, cap } => {
                let mut attributes =
                    format!(" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"", value, width);
                if opacity < 1.0 {
                    let _ = write!(attributes, " stroke-opacity=\"{}\"", opacity);
                }
                if cap == Cap::Round {
                    attributes.push_str(" stroke-linecap=\"round\"");
                }
                attributes
            }
        }
    }
}

impl DrawingSurface for SvgDocument {
    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        let mut d = String::new();
        SVGAbsolutePath::from(&mut d).add_path(path);
        let paint = self.paint_attributes(paint);
        self.add_elem(PathElement { d, paint });
    }

    fn draw_circle(&mut self, center: Point, radius: f64, paint: &Paint) {
        let paint = self.paint_attributes(paint);
        self.add_elem(Circle {
            center,
            radius,
            paint,
        });
    }

    fn draw_rect(&mut self, min: Point, max: Point, corner_radius: f64, paint: &Paint) {
        let paint = self.paint_attributes(paint);
        self.add_elem(Rect {
            min,
            max,
            corner_radius,
            paint,
        });
    }
}

impl Display for SvgDocument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<svg viewBox=\"0 0 {} {}\" width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">",
            self.size.0, self.size.1, self.size.0, self.size.1
        )?;
        if !self.defs.is_empty() {
            writeln!(f, "<defs>")?;
            for def in self.defs.iter() {
                def.fmt(f)?;
            }
            writeln!(f, "</defs>")?;
        }
        for elem in self.elements.iter() {
            elem.fmt(f)?;
        }
        writeln!(f, "</svg>")?;
        Ok(())
    }
}
