use crate::error::{GridLutError, Result};
use crate::grid::Grid;
use crate::search::lower_bound_from;

/// Linearly resamples `(x, y)` onto every point of `grid`.
///
/// `x` must be strictly increasing with at least two points. Grid points
/// outside `[x[0], x[m-1]]` take the nearest endpoint value.
pub fn resample(x: &[f64], y: &[f64], grid: &Grid) -> Result<Vec<f64>> {
    let mut out = vec![0.0; grid.row_count()];
    resample_into(x, y, grid, &mut out)?;
    Ok(out)
}

/// Like [`resample`], writing into `out` (which must hold `grid.row_count()` values).
///
/// `out` is left untouched when the samples are rejected.
pub fn resample_into(x: &[f64], y: &[f64], grid: &Grid, out: &mut [f64]) -> Result<()> {
    validate_samples(x, y)?;
    if out.len() != grid.row_count() {
        return Err(GridLutError::InvalidInput(format!(
            "output holds {} values, grid has {} rows",
            out.len(),
            grid.row_count()
        )));
    }

    let last = x.len() - 1;
    // Grid points ascend, so each bracket search can resume where the
    // previous one ended.
    let mut start = 1;
    for (k, slot) in out.iter_mut().enumerate() {
        let g = grid.x_at(k);
        *slot = if g <= x[0] {
            y[0]
        } else if g >= x[last] {
            y[last]
        } else {
            let hi = lower_bound_from(x, g, start).unwrap_or(last);
            start = hi;
            if x[hi] == g {
                y[hi]
            } else {
                let lo = hi - 1;
                y[lo] + (y[hi] - y[lo]) * (g - x[lo]) / (x[hi] - x[lo])
            }
        };
    }
    Ok(())
}

fn validate_samples(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(GridLutError::InvalidInput(format!(
            "x has {} samples but y has {}",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(GridLutError::InvalidInput(format!(
            "need at least 2 samples, got {}",
            x.len()
        )));
    }
    if let Some(i) = x.windows(2).position(|w| !(w[0] < w[1])) {
        return Err(GridLutError::InvalidInput(format!(
            "x is not strictly increasing at index {}",
            i + 1
        )));
    }
    Ok(())
}
