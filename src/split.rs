//! Dividing a curve into a left and a right part at a horizontal ratio.
//!
//! The cut is exact: the segment containing the split position is subdivided with
//! de castlejau's algorithm, so both parts together retrace the original curve.

use crate::path::Path;

/// Distance in segment units below which a cut position counts as a vertex
const VERTEX_EPSILON: f64 = 1e-9;

/// Where a path is cut: segment `index` at its local parameter `t`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SplitPoint {
    /// Index of the segment containing the cut
    pub index: usize,

    /// Local parameter inside that segment, between `0` and `1`
    pub t: f64,
}

/// Finds the segment and local parameter at `ratio` of the curve's horizontal extent.
///
/// `total_width` is the horizontal extent of the curve and `x_step` the width of a single
/// segment. A ratio of `0` lands at the very start, `1` at the very end.
pub fn locate(segment_count: usize, ratio: f64, total_width: f64, x_step: f64) -> SplitPoint {
    let last = match segment_count.checked_sub(1) {
        Some(last) => last,
        None => return SplitPoint { index: 0, t: 0.0 },
    };
    if ratio <= 0.0 {
        return SplitPoint { index: 0, t: 0.0 };
    }
    if ratio >= 1.0 {
        return SplitPoint { index: last, t: 1.0 };
    }

    let position = if x_step > 0.0 {
        total_width * ratio / x_step
    } else {
        // zero width curve, fall back to splitting by segment count
        segment_count as f64 * ratio
    };
    let position = num::clamp(position, 0.0, segment_count as f64);

    // cuts within rounding noise of a vertex land on it
    let vertex = position.round();
    if (position - vertex).abs() < VERTEX_EPSILON {
        let vertex = vertex as usize;
        return if vertex > last {
            SplitPoint { index: last, t: 1.0 }
        } else {
            SplitPoint { index: vertex, t: 0.0 }
        };
    }

    let index = (position.floor() as usize).min(last);
    SplitPoint {
        index,
        t: num::clamp(position - index as f64, 0.0, 1.0),
    }
}

/// Splits `path` at `ratio` of its horizontal extent.
///
/// Returns `[left, right]`. The left part ends exactly where the right part starts.
/// Ratio `0` leaves the left part without segments, ratio `1` the right part.
/// A cut landing on a vertex divides the path between two segments without subdividing.
pub fn split(path: &Path, ratio: f64, total_width: f64, x_step: f64) -> [Path; 2] {
    let segments = path.segments();
    let SplitPoint { index, t } = locate(segments.len(), ratio, total_width, x_step);
    log::trace!("splitting {} segments at segment {} t={}", segments.len(), index, t);

    if t > 0.0 && t < 1.0 {
        let [lower, upper] = segments[index].split(t);

        let mut left = Path::from_segments(segments[..index].iter().copied(), path.start());
        left.push(lower);

        let mut right = Path::new(upper.p0);
        right.push(upper);
        for &segment in &segments[index + 1..] {
            right.push(segment);
        }
        return [left, right];
    }

    // cut lands on a vertex
    let cut = if t <= 0.0 { index } else { index + 1 };
    let (before, after) = segments.split_at(cut);
    let left = Path::from_segments(before.iter().copied(), path.start());
    let boundary = after.first().map(|s| s.p0).unwrap_or_else(|| path.end());
    let right = Path::from_segments(after.iter().copied(), boundary);
    [left, right]
}
