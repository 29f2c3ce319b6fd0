#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// A lookup table in its persisted form.
///
/// Holds everything needed to rebuild a table exactly: the grid header and
/// the value grid in column-major order (all `row_count` values of column 0,
/// then column 1, ...). The row-major layout is derived on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRecord {
    pub row_count: u32,
    pub col_count: u32,
    pub x_min: f64,
    pub x_step: f64,
    pub values: Vec<f64>,
}

impl TableRecord {
    /// Number of values the header says `values` should hold.
    pub fn expected_len(&self) -> Option<usize> {
        (self.row_count as usize).checked_mul(self.col_count as usize)
    }
}
