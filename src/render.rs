//! Turning samples and a style into something to draw.
//!
//! [`configure`] is a pure function of its inputs and is simply rerun whenever the samples,
//! the style or the drawing rectangle change. Nothing derived from a previous run is kept,
//! so a stale path can never be drawn.

use smallvec::SmallVec;

use crate::curve;
use crate::draw::{DrawingSurface, Paint, Shader};
use crate::geometry::Point;
use crate::marker::{self, MarkerGeometry};
use crate::path::Path;
use crate::scale::{self, Frame};
use crate::split;
use crate::style::{LineMode, StyleConfig};

/// A path together with the paint it is stroked with
#[derive(Clone, Debug, PartialEq)]
pub struct StrokedPath {
    /// Geometry
    pub path: Path,

    /// Stroke paint
    pub paint: Paint,
}

/// A marker with its fill and optional border
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacedMarker {
    /// Outline in screen space
    pub geometry: MarkerGeometry,

    /// Paint for the marker's interior
    pub fill: Paint,

    /// Paint for the marker's border, `None` if no border is drawn
    pub border: Option<Paint>,
}

/// Everything needed to draw one sparkline.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderPlan {
    /// Measurements the geometry was computed in
    pub frame: Frame,

    /// Style after clamping
    pub style: StyleConfig,

    /// One path in single and gradient mode, `[left, right]` in split mode.
    /// Paths without segments are kept but never drawn.
    pub lines: SmallVec<[StrokedPath; 2]>,

    /// Screen position of every sample
    pub points: Vec<Point>,

    /// Markers in sample order
    pub markers: Vec<PlacedMarker>,
}

/// Computes the plan for `samples` in a `width` x `height` rectangle.
///
/// The padding is derived from the marker size and line thickness.
pub fn configure(samples: &[f64], style: &StyleConfig, width: f64, height: f64) -> RenderPlan {
    let style = style.clamped();
    let padding = style.padding();
    plan(samples, style, width, height, padding)
}

/// Same as [`configure`] with an explicit padding.
pub fn configure_with_padding(
    samples: &[f64],
    style: &StyleConfig,
    width: f64,
    height: f64,
    padding: f64,
) -> RenderPlan {
    plan(samples, style.clamped(), width, height, padding)
}

fn plan(samples: &[f64], style: StyleConfig, width: f64, height: f64, padding: f64) -> RenderPlan {
    let normalized;
    let samples = if style.normalize_magnitude {
        normalized = scale::normalize_magnitude(samples);
        &normalized[..]
    } else {
        samples
    };

    let frame = Frame::new(samples, width, height, padding);
    let path = curve::build_in(&frame, samples, style.bezier);
    let lines = line_paths(path, &frame, &style);

    let points = marker::place(samples, &frame);
    let fill = Paint::fill(style.marker.background);
    let border = style
        .marker
        .border()
        .map(|size| Paint::stroke(style.marker.border_color, size));
    let markers = marker::outlines(&points, &style.marker)
        .into_iter()
        .map(|geometry| PlacedMarker {
            geometry,
            fill,
            border,
        })
        .collect::<Vec<_>>();

    log::trace!(
        "planned {} samples into {} line(s) and {} marker(s)",
        samples.len(),
        lines.len(),
        markers.len()
    );

    RenderPlan {
        frame,
        style,
        lines,
        points,
        markers,
    }
}

fn line_paths(path: Path, frame: &Frame, style: &StyleConfig) -> SmallVec<[StrokedPath; 2]> {
    let mut lines = SmallVec::new();
    match style.mode {
        LineMode::Single => lines.push(StrokedPath {
            path,
            paint: Paint::line(style.line_color, style.line_thickness),
        }),
        LineMode::Gradient => {
            let paint = Paint::line(style.line_color, style.line_thickness);
            let paint = if style.line_color == style.line_second_color {
                paint
            } else {
                paint.with_shader(Shader::LinearGradient {
                    from: Point::new(0.0, 0.0),
                    to: Point::new(frame.width, 0.0),
                    start: style.line_color,
                    end: style.line_second_color,
                })
            };
            lines.push(StrokedPath { path, paint });
        }
        LineMode::Split => {
            let [left, right] = split::split(&path, style.split_ratio, frame.span(), frame.x_step);
            lines.push(StrokedPath {
                path: left,
                paint: Paint::line(style.split_left_color, style.line_thickness),
            });
            lines.push(StrokedPath {
                path: right,
                paint: Paint::line(style.split_right_color, style.line_thickness),
            });
        }
    }
    lines
}

impl RenderPlan {
    /// Paints lines first and markers on top of them.
    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        for line in self.lines.iter().filter(|line| !line.path.is_empty()) {
            surface.draw_path(&line.path, &line.paint);
        }
        for marker in &self.markers {
            surface.draw_marker(&marker.geometry, &marker.fill);
            if let Some(border) = &marker.border {
                surface.draw_marker(&marker.geometry, border);
            }
        }
    }

    /// The complete unsplit curve.
    ///
    /// Its vertices match [`points`](RenderPlan::points) for one or more samples.
    /// Without samples the path still has its start vertex, the frame's bottom left inner
    /// corner, while `points` is empty.
    pub fn curve(&self) -> Path {
        let mut lines = self.lines.iter();
        let first = match lines.next() {
            Some(line) => line.path.clone(),
            None => {
                let corner = Point::new(self.frame.padding, self.frame.height - self.frame.padding);
                return Path::new(corner);
            }
        };
        lines.fold(first, |joined, line| joined.concat(&line.path))
    }
}

/// A sparkline owned by a host UI.
///
/// Setters only store the new input and flag the sparkline for redrawing.
/// Geometry is computed while drawing, from the current inputs only.
#[derive(Clone, Debug)]
pub struct Sparkline {
    samples: Vec<f64>,
    style: StyleConfig,
    size: (f64, f64),
    padding: Option<f64>,
    dirty: bool,
}

impl Sparkline {
    /// Sparkline without samples
    pub fn new(width: f64, height: f64) -> Self {
        Sparkline {
            samples: Vec::new(),
            style: StyleConfig::default(),
            size: (width, height),
            padding: None,
            dirty: true,
        }
    }

    /// Replaces the samples
    pub fn set_samples<I: IntoIterator<Item = f64>>(&mut self, samples: I) {
        self.samples = samples.into_iter().collect();
        self.dirty = true;
    }

    /// Replaces the style
    pub fn set_style(&mut self, style: StyleConfig) {
        self.style = style;
        self.dirty = true;
    }

    /// Changes the style in place
    pub fn update_style<F: FnOnce(&mut StyleConfig)>(&mut self, update: F) {
        update(&mut self.style);
        self.dirty = true;
    }

    /// Overrides the padding derived from the style, `None` restores it
    pub fn set_padding(&mut self, padding: Option<f64>) {
        self.padding = padding;
        self.dirty = true;
    }

    /// Resizes the drawing rectangle
    pub fn resize(&mut self, width: f64, height: f64) {
        if self.size != (width, height) {
            self.size = (width, height);
            self.dirty = true;
        }
    }

    /// Current samples
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Current style, as set
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Whether an input changed since the last [`draw`](Sparkline::draw)
    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Computes the plan for the current inputs.
    pub fn plan(&self) -> RenderPlan {
        let (width, height) = self.size;
        match self.padding {
            Some(padding) => {
                configure_with_padding(&self.samples, &self.style, width, height, padding)
            }
            None => configure(&self.samples, &self.style, width, height),
        }
    }

    /// Draws the current inputs onto `surface`.
    pub fn draw<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) {
        self.plan().draw(surface);
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::record::{DrawCommand, Recorder};
    use crate::marker::MarkerShape;
    use crate::style::Color;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    fn style(mode: LineMode) -> StyleConfig {
        StyleConfig {
            mode,
            line_color: RED,
            line_second_color: BLUE,
            split_left_color: RED,
            split_right_color: BLUE,
            ..Default::default()
        }
    }

    #[test]
    fn single_line() {
        let plan = configure(&[1.0, 4.0, 2.0, 8.0], &style(LineMode::Single), 100.0, 30.0);
        assert_eq!(plan.lines.len(), 1);
        assert_eq!(plan.lines[0].path.len(), 3);
        assert_eq!(plan.lines[0].paint, Paint::line(RED, 2.0));
        assert_eq!(plan.markers.len(), 4);
        assert_eq!(plan.frame.padding, 5.0);
    }

    #[test]
    fn gradient_line() {
        let plan = configure(&[1.0, 4.0, 2.0], &style(LineMode::Gradient), 100.0, 30.0);
        assert_eq!(
            plan.lines[0].paint.shader,
            Shader::LinearGradient {
                from: Point::new(0.0, 0.0),
                to: Point::new(100.0, 0.0),
                start: RED,
                end: BLUE,
            }
        );

        let same = StyleConfig {
            line_second_color: RED,
            ..style(LineMode::Gradient)
        };
        let plan = configure(&[1.0, 4.0, 2.0], &same, 100.0, 30.0);
        assert_eq!(plan.lines[0].paint.shader, Shader::Solid(RED));
    }

    #[test]
    fn split_line() {
        let plan = configure(&[1.0, 4.0, 2.0, 8.0, 3.0], &style(LineMode::Split), 100.0, 30.0);
        assert_eq!(plan.lines.len(), 2);
        let (left, right) = (&plan.lines[0], &plan.lines[1]);
        assert_eq!(left.paint, Paint::line(RED, 2.0));
        assert_eq!(right.paint, Paint::line(BLUE, 2.0));
        assert_eq!(left.path.end(), right.path.start());
        assert_eq!(left.path.len() + right.path.len(), 4);
        assert_eq!(plan.curve().len(), 4);
    }

    #[test]
    fn split_ratio_is_clamped() {
        let style = StyleConfig {
            split_ratio: 4.0,
            ..style(LineMode::Split)
        };
        let plan = configure(&[1.0, 4.0, 2.0], &style, 100.0, 30.0);
        assert_eq!(plan.style.split_ratio, 1.0);
        assert_eq!(plan.lines[0].path.len(), 2);
        assert!(plan.lines[1].path.is_empty());

        let mut recorder = Recorder::new();
        plan.draw(&mut recorder);
        assert_eq!(recorder.paths().count(), 1);
    }

    #[test]
    fn short_samples_draw_markers_only() {
        let mut recorder = Recorder::new();
        configure(&[], &StyleConfig::default(), 50.0, 20.0).draw(&mut recorder);
        assert!(recorder.commands.is_empty());

        let mut recorder = Recorder::new();
        configure(&[12.0], &StyleConfig::default(), 50.0, 20.0).draw(&mut recorder);
        assert_eq!(recorder.paths().count(), 0);
        // fill and border
        assert_eq!(recorder.commands.len(), 2);
    }

    #[test]
    fn curve_without_samples() {
        let plan = configure(&[], &style(LineMode::Split), 50.0, 20.0);
        assert!(plan.points.is_empty());
        let curve = plan.curve();
        assert!(curve.is_empty());
        assert_eq!(curve.vertices().collect::<Vec<_>>(), vec![Point::new(5.0, 15.0)]);

        let plan = configure(&[12.0], &style(LineMode::Split), 50.0, 20.0);
        assert_eq!(plan.curve().vertices().collect::<Vec<_>>(), plan.points);
    }

    #[test]
    fn marker_border_suppressed() {
        let mut style = StyleConfig::default();
        style.marker.shape = MarkerShape::Circle;
        style.marker.border_size = 0.0;

        let mut recorder = Recorder::new();
        configure(&[1.0, 2.0], &style, 50.0, 20.0).draw(&mut recorder);
        let circles: Vec<_> = recorder
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .collect();
        assert_eq!(circles.len(), 2);
        for circle in circles {
            match circle {
                DrawCommand::Circle { paint, radius, .. } => {
                    assert_eq!(*paint, Paint::fill(style.marker.background));
                    assert_eq!(*radius, 1.5);
                }
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn draw_order() {
        let mut recorder = Recorder::new();
        configure(&[1.0, 2.0, 0.5], &StyleConfig::default(), 50.0, 20.0).draw(&mut recorder);
        assert!(matches!(recorder.commands[0], DrawCommand::Path { .. }));
        assert!(recorder.commands[1..]
            .iter()
            .all(|c| matches!(c, DrawCommand::Rect { .. })));
        assert_eq!(recorder.commands.len(), 1 + 3 * 2);
    }

    #[test]
    fn normalization_keeps_positions() {
        let samples = [298.0, 46.0, 87.0, 1855.0];
        let mut raw = StyleConfig::default();
        raw.normalize_magnitude = false;
        let normalized = configure(&samples, &StyleConfig::default(), 200.0, 50.0);
        let raw = configure(&samples, &raw, 200.0, 50.0);
        for (a, b) in normalized.points.iter().zip(raw.points.iter()) {
            approx::assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
        }
    }

    #[test]
    fn sparkline_redraw_flag() {
        let mut sparkline = Sparkline::new(80.0, 20.0);
        assert!(sparkline.needs_redraw());

        sparkline.set_samples([1.0, 3.0, 2.0]);
        let mut recorder = Recorder::new();
        sparkline.draw(&mut recorder);
        assert!(!sparkline.needs_redraw());
        assert_eq!(recorder.paths().count(), 1);

        sparkline.resize(80.0, 20.0);
        assert!(!sparkline.needs_redraw());
        sparkline.resize(90.0, 20.0);
        assert!(sparkline.needs_redraw());

        sparkline.draw(&mut Recorder::new());
        sparkline.update_style(|style| style.mode = LineMode::Split);
        assert!(sparkline.needs_redraw());
        assert_eq!(sparkline.plan().lines.len(), 2);
    }

    #[test]
    fn explicit_padding() {
        let mut sparkline = Sparkline::new(80.0, 20.0);
        sparkline.set_samples([1.0, 3.0]);
        sparkline.set_padding(Some(0.0));
        let plan = sparkline.plan();
        assert_eq!(plan.points[0], Point::new(0.0, 20.0));
        assert_eq!(plan.points[1], Point::new(80.0, 0.0));
    }
}
