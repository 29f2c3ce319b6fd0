use crate::error::{GridLutError, Result};
use crate::grid::{Grid, TableLocation};
use crate::resample::resample_into;
use crate::search::lower_bound_adaptive;

/// A precomputed table of columns sampled on a regular grid, read back by
/// linear interpolation.
///
/// Values are stored twice: column-major (`values_by_column`, one column
/// contiguous) for single-column reads and column writes, and row-major
/// (`values_by_row`, one row of every column contiguous) so that reading all
/// columns at one x touches two adjacent slices. Every mutation updates both
/// before returning.
///
/// Lookups outside `[x_min, x_max]` are clamped to the edge interval; they
/// do not fail and do not extrapolate.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTable {
    grid: Grid,
    col_count: usize,
    values_by_column: Vec<f64>,
    values_by_row: Vec<f64>,
}

impl LookupTable {
    /// Creates a table over `[x_min, x_max]` with `col_count` zero-filled columns.
    pub fn new(x_min: f64, x_max: f64, row_count: usize, col_count: usize) -> Result<Self> {
        let grid = Grid::new(x_min, x_max, row_count)?;
        Self::zeroed(grid, col_count)
    }

    /// Creates a table on an existing grid with `col_count` zero-filled columns.
    pub fn zeroed(grid: Grid, col_count: usize) -> Result<Self> {
        let len = checked_len(grid.row_count(), col_count)?;
        log::debug!(
            "creating lookup table: [{}, {}] x {} rows, {} columns",
            grid.x_min(),
            grid.x_max(),
            grid.row_count(),
            col_count
        );
        Ok(LookupTable {
            grid,
            col_count,
            values_by_column: vec![0.0; len],
            values_by_row: vec![0.0; len],
        })
    }

    /// Tabulates `f` on `row_count` points of `[x_min, x_max]` as a single column.
    pub fn from_fn<F>(x_min: f64, x_max: f64, row_count: usize, f: F) -> Result<Self>
    where
        F: Fn(f64) -> f64,
    {
        let grid = Grid::new(x_min, x_max, row_count)?;
        let values: Vec<f64> = grid.x_values().map(f).collect();
        Self::from_column_major(grid, 1, values)
    }

    /// Builds a table from column-major values already on `grid`.
    pub fn from_column_major(grid: Grid, col_count: usize, values: Vec<f64>) -> Result<Self> {
        let rows = grid.row_count();
        let len = checked_len(rows, col_count)?;
        if values.len() != len {
            return Err(GridLutError::InvalidSize(format!(
                "expected {len} values for {rows} rows x {col_count} columns, got {}",
                values.len()
            )));
        }

        let mut values_by_row = vec![0.0; len];
        for (col, column) in values.chunks_exact(rows).enumerate() {
            for (row, &v) in column.iter().enumerate() {
                values_by_row[row * col_count + col] = v;
            }
        }

        Ok(LookupTable {
            grid,
            col_count,
            values_by_column: values,
            values_by_row,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.grid.row_count()
    }

    #[inline]
    pub fn col_count(&self) -> usize {
        self.col_count
    }

    #[inline]
    pub fn x_min(&self) -> f64 {
        self.grid.x_min()
    }

    #[inline]
    pub fn x_max(&self) -> f64 {
        self.grid.x_max()
    }

    #[inline]
    pub fn x_step(&self) -> f64 {
        self.grid.x_step()
    }

    /// Grid coordinates, computed on demand.
    pub fn x_values(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.grid.x_values()
    }

    /// Appends a zero-filled column and returns its index.
    pub fn add_column(&mut self) -> usize {
        let rows = self.row_count();
        let old = self.col_count;
        let new = old + 1;

        self.values_by_column.resize(rows * new, 0.0);

        let mut values_by_row = Vec::with_capacity(rows * new);
        for row in 0..rows {
            values_by_row.extend_from_slice(&self.values_by_row[row * old..(row + 1) * old]);
            values_by_row.push(0.0);
        }
        self.values_by_row = values_by_row;
        self.col_count = new;

        log::debug!("added column {old} ({new} columns total)");
        old
    }

    /// Resamples `(x, y)` onto the grid and stores it as column `index`.
    ///
    /// The samples are resampled before either layout is touched, so on error
    /// the table is unchanged.
    pub fn set_column(&mut self, index: usize, x: &[f64], y: &[f64]) -> Result<()> {
        self.check_column(index)?;
        let mut staged = vec![0.0; self.row_count()];
        resample_into(x, y, &self.grid, &mut staged)?;
        self.write_column(index, &staged);
        log::debug!("set column {index} from {} samples", x.len());
        Ok(())
    }

    /// Stores `values`, already on the grid, as column `index`.
    pub fn set_column_values(&mut self, index: usize, values: &[f64]) -> Result<()> {
        self.check_column(index)?;
        if values.len() != self.row_count() {
            return Err(GridLutError::InvalidSize(format!(
                "column needs {} values, got {}",
                self.row_count(),
                values.len()
            )));
        }
        self.write_column(index, values);
        log::debug!("set column {index} from gridded values");
        Ok(())
    }

    /// Resolves `x` against this table's grid. See [`Grid::resolve`] for the
    /// clamping rules.
    #[inline]
    pub fn resolve_location(&self, x: f64) -> TableLocation {
        self.grid.resolve(x)
    }

    /// Interpolated value of column `col` at `x`.
    #[inline]
    pub fn get_column(&self, col: usize, x: f64) -> Result<f64> {
        self.get_column_at(col, self.resolve_location(x))
    }

    /// Interpolated value of column `col` at a previously resolved location.
    #[inline]
    pub fn get_column_at(&self, col: usize, loc: TableLocation) -> Result<f64> {
        self.check_column(col)?;
        self.check_location(loc)?;
        let column = self.column_slice(col);
        let lower = loc.lower_index();
        Ok(loc.interpolate(column[lower], column[lower + 1]))
    }

    /// Interpolated values of every column at `x`.
    pub fn get_all_columns(&self, x: f64) -> Vec<f64> {
        let mut out = vec![0.0; self.col_count];
        self.interpolate_rows(self.resolve_location(x), &mut out);
        out
    }

    /// Interpolated values of every column at `x`, written into `out`.
    pub fn get_all_columns_into(&self, x: f64, out: &mut [f64]) -> Result<()> {
        self.check_output(out)?;
        self.interpolate_rows(self.resolve_location(x), out);
        Ok(())
    }

    /// Interpolated values of every column at a previously resolved location.
    pub fn get_all_columns_at(&self, loc: TableLocation) -> Result<Vec<f64>> {
        self.check_location(loc)?;
        let mut out = vec![0.0; self.col_count];
        self.interpolate_rows(loc, &mut out);
        Ok(out)
    }

    /// Like [`get_all_columns_at`](Self::get_all_columns_at), writing into `out`.
    pub fn get_all_columns_at_into(&self, loc: TableLocation, out: &mut [f64]) -> Result<()> {
        self.check_location(loc)?;
        self.check_output(out)?;
        self.interpolate_rows(loc, out);
        Ok(())
    }

    /// First grid row whose coordinate is at or above `x`, if any.
    ///
    /// Grid coordinates are not stored, so this collects them before
    /// searching and costs one `row_count` allocation per call. Use
    /// [`resolve_location`](Self::resolve_location) on hot paths.
    pub fn row_at_or_above(&self, x: f64) -> Option<usize> {
        let xs: Vec<f64> = self.grid.x_values().collect();
        lower_bound_adaptive(&xs, x)
    }

    /// All values, one column after another.
    #[inline]
    pub fn values_by_column(&self) -> &[f64] {
        &self.values_by_column
    }

    /// All values, one row after another.
    #[inline]
    pub fn values_by_row(&self) -> &[f64] {
        &self.values_by_row
    }

    /// The `row_count` stored values of column `col`.
    pub fn column(&self, col: usize) -> Result<&[f64]> {
        self.check_column(col)?;
        Ok(self.column_slice(col))
    }

    /// The `col_count` stored values at grid row `row`.
    pub fn row(&self, row: usize) -> Result<&[f64]> {
        if row >= self.row_count() {
            return Err(GridLutError::IndexOutOfRange {
                index: row,
                len: self.row_count(),
            });
        }
        let cols = self.col_count;
        Ok(&self.values_by_row[row * cols..(row + 1) * cols])
    }

    #[inline]
    fn column_slice(&self, col: usize) -> &[f64] {
        let rows = self.row_count();
        &self.values_by_column[col * rows..(col + 1) * rows]
    }

    fn write_column(&mut self, col: usize, values: &[f64]) {
        let rows = self.row_count();
        let cols = self.col_count;
        self.values_by_column[col * rows..(col + 1) * rows].copy_from_slice(values);
        for (row, &v) in values.iter().enumerate() {
            self.values_by_row[row * cols + col] = v;
        }
    }

    #[inline]
    fn interpolate_rows(&self, loc: TableLocation, out: &mut [f64]) {
        let cols = self.col_count;
        let lower = loc.lower_index();
        let lo = &self.values_by_row[lower * cols..(lower + 1) * cols];
        let hi = &self.values_by_row[(lower + 1) * cols..(lower + 2) * cols];
        for ((o, &a), &b) in out.iter_mut().zip(lo).zip(hi) {
            *o = loc.interpolate(a, b);
        }
    }

    #[inline]
    fn check_column(&self, col: usize) -> Result<()> {
        if col < self.col_count {
            Ok(())
        } else {
            Err(GridLutError::IndexOutOfRange {
                index: col,
                len: self.col_count,
            })
        }
    }

    #[inline]
    fn check_location(&self, loc: TableLocation) -> Result<()> {
        let intervals = self.row_count() - 1;
        if loc.lower_index() < intervals {
            Ok(())
        } else {
            Err(GridLutError::IndexOutOfRange {
                index: loc.lower_index(),
                len: intervals,
            })
        }
    }

    fn check_output(&self, out: &[f64]) -> Result<()> {
        if out.len() == self.col_count {
            Ok(())
        } else {
            Err(GridLutError::InvalidSize(format!(
                "output holds {} values, table has {} columns",
                out.len(),
                self.col_count
            )))
        }
    }
}

fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols).ok_or_else(|| {
        GridLutError::InvalidSize(format!("{rows} rows x {cols} columns overflows"))
    })
}
