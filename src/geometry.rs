//! Points, linear interpolation and single cubic bezier segments.

use nalgebra::Vector2;

/// Screen space coordinate.
///
/// The y axis points down, like on every canvas this crate draws to.
pub type Point = Vector2<f64>;

/// Linear interpolation between `a` and `b`.
///
/// `t = 0` yields `a` and `t = 1` yields `b`.
pub fn lerp(a: Point, b: Point, t: f64) -> Point {
    (b - a) * t + a
}

/// A cubic bezier curve between two points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BezierSegment {
    /// Start point
    pub p0: Point,

    /// First control point, pulling away from `p0`
    pub c1: Point,

    /// Second control point, pulling into `p1`
    pub c2: Point,

    /// End point
    pub p1: Point,
}

impl BezierSegment {
    /// Constructs a segment from its four control points.
    pub fn new(p0: Point, c1: Point, c2: Point, p1: Point) -> Self {
        BezierSegment { p0, c1, c2, p1 }
    }

    /// Straight line from `a` to `b` expressed as a cubic.
    pub fn line(a: Point, b: Point) -> Self {
        BezierSegment::new(a, a, b, b)
    }

    /// Splits the segment into two parts
    ///
    /// The first part is the same shape as the original segment between 0 and t and the second
    /// part as the segment between t and 1. Both parts share the point at `t`.
    /// This method assumes `t` to be between 0 and 1 but doesn't check it.
    pub fn split(&self, t: f64) -> [Self; 2] {
        let p12 = lerp(self.p0, self.c1, t);
        let p23 = lerp(self.c1, self.c2, t);
        let p34 = lerp(self.c2, self.p1, t);

        let p123 = lerp(p12, p23, t);
        let p234 = lerp(p23, p34, t);

        let p1234 = lerp(p123, p234, t);

        [
            BezierSegment::new(self.p0, p12, p123, p1234),
            BezierSegment::new(p1234, p234, p34, self.p1),
        ]
    }

    /// Get the point on the segment at position `t`.
    ///
    /// This uses de castlejau's algorithm, i.e. the same interpolation steps as [`split`].
    ///
    /// [`split`]: BezierSegment::split
    pub fn castlejau_eval(&self, t: f64) -> Point {
        let p12 = lerp(self.p0, self.c1, t);
        let p23 = lerp(self.c1, self.c2, t);
        let p34 = lerp(self.c2, self.p1, t);
        lerp(lerp(p12, p23, t), lerp(p23, p34, t), t)
    }

    /// Evaluates the bernstein form directly.
    ///
    /// Numerically independent of [`castlejau_eval`] which makes it useful to cross check splits.
    ///
    /// [`castlejau_eval`]: BezierSegment::castlejau_eval
    pub fn bernstein_eval(&self, t: f64) -> Point {
        let s = 1.0 - t;
        self.p0 * (s * s * s)
            + self.c1 * (3.0 * s * s * t)
            + self.c2 * (3.0 * s * t * t)
            + self.p1 * (t * t * t)
    }

    /// Returns `true` if all four points are equal.
    pub fn is_degenerate(&self) -> bool {
        self.p0 == self.c1 && self.c1 == self.c2 && self.c2 == self.p1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn curve() -> BezierSegment {
        BezierSegment::new(
            Point::new(50.0, 0.0),
            Point::new(200.0, 33.0),
            Point::new(0.0, 66.0),
            Point::new(50.0, 100.0),
        )
    }

    #[test]
    fn lerp_endpoints() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(5.0, -2.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, 0.5), Point::new(3.0, 0.0));
    }

    #[test]
    fn line_split() {
        let line = BezierSegment::line(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let [l, u] = line.split(0.5);
        assert_eq!(l.p1, Point::new(0.5, 0.5));
        assert_eq!(u.p0, Point::new(0.5, 0.5));
        assert_eq!(l.p0, line.p0);
        assert_eq!(u.p1, line.p1);
    }

    #[test]
    fn split_matches_original() {
        let curve = curve();
        let [lower, upper] = curve.split(0.7);
        assert_eq!(lower.p1, upper.p0);
        for i in 0..=20 {
            let s = i as f64 / 20.0;
            let expected = curve.bernstein_eval(0.7 * s);
            assert_abs_diff_eq!(lower.bernstein_eval(s), expected, epsilon = 1e-9);

            let expected = curve.bernstein_eval(0.7 + 0.3 * s);
            assert_abs_diff_eq!(upper.bernstein_eval(s), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn split_at_ends() {
        let curve = curve();
        let [lower, upper] = curve.split(0.0);
        assert!(lower.is_degenerate());
        assert_eq!(upper, curve);

        let [lower, upper] = curve.split(1.0);
        assert_eq!(lower, curve);
        assert!(upper.is_degenerate());
    }

    #[test]
    fn eval_agree() {
        let curve = curve();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert_abs_diff_eq!(curve.castlejau_eval(t), curve.bernstein_eval(t), epsilon = 1e-9);
        }
    }
}
