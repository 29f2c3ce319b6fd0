use crate::error::{GridLutError, Result};

/// A regularly spaced sequence of `row_count` x-coordinates.
///
/// `x_step` and its reciprocal are computed once so that locating a point
/// costs one subtraction, one multiplication and a floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    x_min: f64,
    x_max: f64,
    x_step: f64,
    inv_step: f64,
    row_count: usize,
}

impl Grid {
    /// Grid spanning `[x_min, x_max]` with `row_count` points, both ends included.
    pub fn new(x_min: f64, x_max: f64, row_count: usize) -> Result<Self> {
        let invalid = GridLutError::InvalidDomain {
            x_min,
            x_max,
            row_count,
        };
        if row_count < 2 || !x_min.is_finite() || !x_max.is_finite() || x_max <= x_min {
            return Err(invalid);
        }
        let x_step = (x_max - x_min) / (row_count - 1) as f64;
        let inv_step = 1.0 / x_step;
        if !x_step.is_finite() || x_step <= 0.0 || !inv_step.is_finite() {
            return Err(invalid);
        }
        Ok(Grid {
            x_min,
            x_max,
            x_step,
            inv_step,
            row_count,
        })
    }

    /// Grid rebuilt from its origin and spacing, as stored in a
    /// [`TableRecord`](gridlut_data::TableRecord).
    pub fn with_step(x_min: f64, x_step: f64, row_count: usize) -> Result<Self> {
        let x_max = x_min + x_step * row_count.saturating_sub(1) as f64;
        let inv_step = 1.0 / x_step;
        if row_count < 2
            || !x_min.is_finite()
            || !x_step.is_finite()
            || x_step <= 0.0
            || !x_max.is_finite()
            || !inv_step.is_finite()
        {
            return Err(GridLutError::InvalidDomain {
                x_min,
                x_max,
                row_count,
            });
        }
        Ok(Grid {
            x_min,
            x_max,
            x_step,
            inv_step,
            row_count,
        })
    }

    #[inline]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[inline]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[inline]
    pub fn x_step(&self) -> f64 {
        self.x_step
    }

    #[inline]
    pub fn inv_step(&self) -> f64 {
        self.inv_step
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Coordinate of grid row `k`. The last row is exactly `x_max`.
    #[inline]
    pub fn x_at(&self, k: usize) -> f64 {
        if k + 1 == self.row_count {
            self.x_max
        } else {
            self.x_min + k as f64 * self.x_step
        }
    }

    /// All grid coordinates in ascending order, computed on the fly.
    pub fn x_values(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.row_count).map(move |k| self.x_at(k))
    }

    /// Resolves `x` to its grid interval.
    ///
    /// Points outside `[x_min, x_max]` are clamped onto the first or last
    /// interval; this never fails and never extrapolates. Callers that need
    /// strict bounds must check `x` themselves.
    #[inline]
    pub fn resolve(&self, x: f64) -> TableLocation {
        let max_lower = self.row_count - 2;
        // `(x_max - x_min) * inv_step` can round to just below the last row.
        if x >= self.x_max {
            return TableLocation {
                lower_index: max_lower,
                fraction: 1.0,
            };
        }
        let k = (x - self.x_min) * self.inv_step;
        let lower_index = if k >= 0.0 {
            (k.floor() as usize).min(max_lower)
        } else {
            0
        };
        TableLocation {
            lower_index,
            fraction: (k - lower_index as f64).clamp(0.0, 1.0),
        }
    }
}

/// A resolved position on a table's grid: the interval's lower row and the
/// normalized offset inside it.
///
/// Only meaningful for the table (or grid) that produced it. It holds no
/// reference back, so reusing it on a table with a different grid is not
/// detected unless the row index does not fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableLocation {
    lower_index: usize,
    fraction: f64,
}

impl TableLocation {
    #[inline]
    pub fn lower_index(&self) -> usize {
        self.lower_index
    }

    /// Offset in `[0, 1]` from `lower_index` toward `lower_index + 1`.
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Blends `lo` and `hi`; exact at both ends of the interval.
    #[inline]
    pub fn interpolate(&self, lo: f64, hi: f64) -> f64 {
        lo * (1.0 - self.fraction) + hi * self.fraction
    }
}
