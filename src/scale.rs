//! Mapping from sample values to screen coordinates.

use crate::geometry::Point;

/// Largest sample value left untouched by [`magnitude_factor`]
pub const MAGNITUDE_LIMIT: f64 = 100.0;

/// Maximum number of decimal shifts [`magnitude_factor`] performs
const MAGNITUDE_STEPS: usize = 8;

/// Picks a power of ten which brings the largest sample below [`MAGNITUDE_LIMIT`].
///
/// Samples up to the limit keep a factor of `1`.
/// Otherwise the factor starts at `0.1` and shrinks by another tenth until
/// `max * factor < 100` or eight steps were taken.
pub fn magnitude_factor(max: f64) -> f64 {
    if max <= MAGNITUDE_LIMIT {
        return 1.0;
    }
    let mut factor = 0.1;
    for _ in 0..MAGNITUDE_STEPS {
        if max * factor < MAGNITUDE_LIMIT {
            break;
        }
        factor *= 0.1;
    }
    factor
}

/// Scales every sample by [`magnitude_factor`] of their maximum.
pub fn normalize_magnitude(samples: &[f64]) -> Vec<f64> {
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let factor = magnitude_factor(max);
    samples.iter().map(|v| v * factor).collect()
}

/// Geometry of one render pass: drawing rectangle, padding and the data range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    /// Width of the drawing rectangle
    pub width: f64,

    /// Height of the drawing rectangle
    pub height: f64,

    /// Inset on every side, keeping markers and strokes inside the rectangle
    pub padding: f64,

    /// Horizontal distance between two samples, `0` for fewer than two samples
    pub x_step: f64,

    /// Screen units per sample unit, `0` for flat data
    pub y_step: f64,

    /// Smallest sample
    pub data_min: f64,

    /// Largest sample
    pub data_max: f64,

    /// Number of samples
    pub count: usize,
}

impl Frame {
    /// Measures `samples` for a `width` x `height` rectangle.
    pub fn new(samples: &[f64], width: f64, height: f64, padding: f64) -> Self {
        debug_assert!(
            samples.iter().all(|v| v.is_finite()),
            "samples must be finite"
        );
        let count = samples.len();
        let (data_min, data_max) = samples
            .iter()
            .fold(None, |range: Option<(f64, f64)>, &v| match range {
                None => Some((v, v)),
                Some((min, max)) => Some((min.min(v), max.max(v))),
            })
            .unwrap_or((0.0, 0.0));

        let x_step = if count < 2 {
            0.0
        } else {
            (width - 2.0 * padding) / (count - 1) as f64
        };

        let y_step = if data_max == data_min {
            if count > 1 {
                log::debug!("flat data at {}, drawing a horizontal line", data_min);
            }
            0.0
        } else {
            (height - 2.0 * padding) / (data_max - data_min)
        };

        Frame {
            width,
            height,
            padding,
            x_step,
            y_step,
            data_min,
            data_max,
            count,
        }
    }

    /// Horizontal extent covered by the curve
    pub fn span(&self) -> f64 {
        self.x_step * self.count.saturating_sub(1) as f64
    }

    /// Screen x of sample `index`
    pub fn x(&self, index: usize) -> f64 {
        self.padding + index as f64 * self.x_step
    }

    /// Screen y of a sample value
    pub fn y(&self, value: f64) -> f64 {
        (self.height - self.padding) - (value - self.data_min) * self.y_step
    }

    /// Screen position of the sample `value` at `index`
    pub fn point(&self, index: usize, value: f64) -> Point {
        Point::new(self.x(index), self.y(value))
    }
}
