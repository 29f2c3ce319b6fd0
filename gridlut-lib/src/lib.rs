pub mod error;
pub mod grid;
pub mod persist;
pub mod resample;
pub mod search;
pub mod table;

pub use error::{GridLutError, Result};
pub use grid::{Grid, TableLocation};
pub use resample::{resample, resample_into};
pub use search::{
    ADAPTIVE_LINEAR_THRESHOLD, SearchStrategy, lower_bound_adaptive, lower_bound_binary,
    lower_bound_from, lower_bound_linear,
};
pub use table::LookupTable;
pub use gridlut_data;
pub use gridlut_data::TableRecord;
