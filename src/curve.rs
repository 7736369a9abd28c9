//! Smooth curve through a sequence of samples.
//!
//! Every pair of neighbouring samples is joined by one cubic segment.
//! The control points follow the local slope of the data: the first control point leans
//! along the slope arriving at the segment's end sample, the second one along the slope
//! leaving it. The last sample has no successor and stands in for it, which flattens the
//! tangent at the right edge instead of extrapolating.

use crate::geometry::{BezierSegment, Point};
use crate::path::Path;
use crate::scale::Frame;

/// Builds the curve for `samples` inside a `width` x `height` rectangle.
///
/// `bezier` is the smoothing factor: `0` yields straight lines, `1` full slope tangents.
/// Fewer than two samples produce an empty path.
pub fn build(samples: &[f64], width: f64, height: f64, bezier: f64, padding: f64) -> Path {
    let frame = Frame::new(samples, width, height, padding);
    build_in(&frame, samples, bezier)
}

/// Builds the curve for `samples` in an already measured frame.
///
/// `frame` has to be measured from the same samples.
pub fn build_in(frame: &Frame, samples: &[f64], bezier: f64) -> Path {
    debug_assert_eq!(frame.count, samples.len());
    let start = samples
        .first()
        .map(|&v| frame.point(0, v))
        .unwrap_or_else(|| Point::new(frame.padding, frame.height - frame.padding));

    if samples.len() < 2 {
        log::debug!("{} sample(s), nothing to connect", samples.len());
        return Path::new(start);
    }

    let segments = (1..samples.len()).map(|i| segment(frame, samples, i, bezier));
    Path::from_segments(segments, start)
}

/// Segment ending at sample `i`, starting at sample `i - 1`.
///
/// The last sample has no successor and serves as its own next neighbour.
fn segment(frame: &Frame, samples: &[f64], i: usize, bezier: f64) -> BezierSegment {
    let k = i - 1;
    let prev = samples[k];
    let current = samples[i];
    let next = samples.get(i + 1).copied().unwrap_or(current);

    let prev_d = Point::new(frame.x_step * bezier, (current - prev) * bezier);
    let cur_d = Point::new(frame.x_step * bezier, (next - current) * bezier);

    let c1 = Point::new(frame.x(k) + prev_d.x, frame.y(prev) - prev_d.y);
    let c2 = Point::new(frame.x(i) - cur_d.x, frame.y(current) + cur_d.y);

    BezierSegment::new(frame.point(k, prev), c1, c2, frame.point(i, current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn segment_count() {
        assert_eq!(build(&[], 100.0, 40.0, 0.5, 4.0).len(), 0);
        assert_eq!(build(&[3.0], 100.0, 40.0, 0.5, 4.0).len(), 0);
        assert_eq!(build(&[3.0, 4.0], 100.0, 40.0, 0.5, 4.0).len(), 1);
        assert_eq!(build(&[3.0, 4.0, 1.0, 8.0], 100.0, 40.0, 0.5, 4.0).len(), 3);
    }

    #[test]
    fn single_sample_start() {
        let path = build(&[3.0], 100.0, 40.0, 0.5, 4.0);
        assert!(path.is_empty());
        assert_eq!(path.start(), Point::new(4.0, 36.0));
    }

    #[test]
    fn zero_bezier_is_linear() {
        let path = build(&[1.0, 9.0, 4.0], 100.0, 40.0, 0.0, 2.0);
        for s in path.segments() {
            assert_eq!(s.c1, s.p0);
            assert_eq!(s.c2, s.p1);
        }
    }

    #[test]
    fn control_points() {
        // x_step = 48, y_step = 36 / 8 = 4.5
        let path = build(&[0.0, 8.0, 4.0], 100.0, 40.0, 0.5, 2.0);
        let [first, second] = [path.segments()[0], path.segments()[1]];

        assert_abs_diff_eq!(first.p0, Point::new(2.0, 38.0));
        assert_abs_diff_eq!(first.c1, Point::new(26.0, 34.0));
        assert_abs_diff_eq!(first.c2, Point::new(26.0, 0.0));
        assert_abs_diff_eq!(first.p1, Point::new(50.0, 2.0));

        assert_abs_diff_eq!(second.c1, Point::new(74.0, 4.0));
        // last sample is its own next neighbour
        assert_abs_diff_eq!(second.c2, Point::new(74.0, 20.0));
        assert_abs_diff_eq!(second.p1, Point::new(98.0, 20.0));
    }

    #[test]
    fn flat_data() {
        let path = build(&[5.0, 5.0, 5.0, 5.0], 100.0, 40.0, 1.0, 4.0);
        assert_eq!(path.len(), 3);
        for s in path.segments() {
            for p in [s.p0, s.c1, s.c2, s.p1] {
                assert_eq!(p.y, 36.0);
            }
        }
    }

    #[test]
    fn deterministic() {
        let samples = [2.0, -1.0, 7.5, 7.5, 0.0, 3.25];
        let a = build(&samples, 220.0, 60.0, 0.7, 3.0);
        let b = build(&samples, 220.0, 60.0, 0.7, 3.0);
        assert_eq!(a, b);
    }
}
