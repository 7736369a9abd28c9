//! Continuous chains of cubic bezier segments.

use smallvec::SmallVec;

use crate::geometry::{BezierSegment, Point};

/// Inline capacity for path segments.
///
/// Most sparklines show a handful of samples, longer ones spill onto the heap.
pub const INLINE_SEGMENTS: usize = 16;

/// Storage used for the segments of a [`Path`]
pub type Segments = SmallVec<[BezierSegment; INLINE_SEGMENTS]>;

/// Drawing instruction produced by walking a [`Path`]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Start a new sub path at the given point
    MoveTo(Point),

    /// Cubic curve from the current point using two control points and an end point
    CubicTo(Point, Point, Point),
}

/// Ordered sequence of bezier segments with an explicit start point.
///
/// Segment `i`'s end point is segment `i + 1`'s start point.
/// An empty path still carries a start point, which is where a following segment would begin.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    start: Point,
    segments: Segments,
}

impl Path {
    /// Creates a path without any segments starting at `start`.
    pub fn new(start: Point) -> Self {
        Path {
            start,
            segments: SmallVec::new(),
        }
    }

    /// Creates a path from segments.
    ///
    /// The start point is taken from the first segment or `fallback` if there are none.
    pub fn from_segments<I: IntoIterator<Item = BezierSegment>>(
        segments: I,
        fallback: Point,
    ) -> Self {
        let segments: Segments = segments.into_iter().collect();
        let start = segments.first().map(|s| s.p0).unwrap_or(fallback);
        debug_assert!(
            segments.windows(2).all(|w| w[0].p1 == w[1].p0),
            "path segments must be continuous"
        );
        Path { start, segments }
    }

    /// Appends a segment.
    ///
    /// The segment has to start where the path currently ends.
    pub fn push(&mut self, segment: BezierSegment) {
        debug_assert_eq!(self.end(), segment.p0, "path segments must be continuous");
        self.segments.push(segment);
    }

    /// Point the path starts at
    pub fn start(&self) -> Point {
        self.start
    }

    /// Point the path ends at, which is the start for an empty path
    pub fn end(&self) -> Point {
        self.segments.last().map(|s| s.p1).unwrap_or(self.start)
    }

    /// Segments in drawing order
    pub fn segments(&self) -> &[BezierSegment] {
        &self.segments
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments and therefore nothing to stroke.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Start point followed by every segment's end point.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.start).chain(self.segments.iter().map(|s| s.p1))
    }

    /// Drawing instructions for this path: one `MoveTo` followed by a `CubicTo` per segment.
    pub fn commands(&self) -> impl Iterator<Item = PathCommand> + '_ {
        std::iter::once(PathCommand::MoveTo(self.start)).chain(
            self.segments
                .iter()
                .map(|s| PathCommand::CubicTo(s.c1, s.c2, s.p1)),
        )
    }

    /// Joins `other` to the end of this path.
    ///
    /// `other` has to start where this path ends.
    pub fn concat(&self, other: &Path) -> Path {
        debug_assert_eq!(self.end(), other.start(), "concatenated paths must touch");
        let mut segments = self.segments.clone();
        segments.extend_from_slice(&other.segments);
        Path {
            start: self.start,
            segments,
        }
    }

    /// Evaluates the path at a global parameter `u` between `0` and `len()`.
    ///
    /// The integer part selects the segment, the fractional part is the segment's local `t`.
    /// Returns `None` for an empty path.
    pub fn eval(&self, u: f64) -> Option<Point> {
        let last = self.segments.len().checked_sub(1)?;
        let u = num::clamp(u, 0.0, self.segments.len() as f64);
        let index = (u.floor() as usize).min(last);
        Some(self.segments[index].castlejau_eval(u - index as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag() -> Path {
        let mut path = Path::new(Point::new(0.0, 0.0));
        path.push(BezierSegment::line(Point::new(0.0, 0.0), Point::new(1.0, 1.0)));
        path.push(BezierSegment::line(Point::new(1.0, 1.0), Point::new(2.0, 0.0)));
        path
    }

    #[test]
    fn empty_path() {
        let path = Path::new(Point::new(3.0, 4.0));
        assert!(path.is_empty());
        assert_eq!(path.end(), Point::new(3.0, 4.0));
        assert_eq!(path.eval(0.5), None);
        assert_eq!(
            path.commands().collect::<Vec<_>>(),
            vec![PathCommand::MoveTo(Point::new(3.0, 4.0))]
        );
    }

    #[test]
    fn commands_and_vertices() {
        let path = zigzag();
        let commands: Vec<_> = path.commands().collect();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], PathCommand::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(
            commands[2],
            PathCommand::CubicTo(Point::new(1.0, 1.0), Point::new(2.0, 0.0), Point::new(2.0, 0.0))
        );
        let vertices: Vec<_> = path.vertices().collect();
        assert_eq!(
            vertices,
            vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)]
        );
    }

    #[test]
    fn eval_global_parameter() {
        let path = zigzag();
        assert_eq!(path.eval(0.0), Some(Point::new(0.0, 0.0)));
        assert_eq!(path.eval(1.0), Some(Point::new(1.0, 1.0)));
        assert_eq!(path.eval(2.0), Some(Point::new(2.0, 0.0)));
        assert_eq!(path.eval(7.0), Some(Point::new(2.0, 0.0)));
    }

    #[test]
    fn concat_paths() {
        let path = zigzag();
        let [a, b] = path.segments()[1].split(0.5);
        let left = Path::from_segments([path.segments()[0], a], Point::zeros());
        let right = Path::from_segments([b], Point::zeros());
        let joined = left.concat(&right);
        assert_eq!(joined.len(), 3);
        assert_eq!(joined.start(), path.start());
        assert_eq!(joined.end(), path.end());
    }
}
