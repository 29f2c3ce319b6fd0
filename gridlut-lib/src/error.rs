use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GridLutError {
    InvalidDomain {
        x_min: f64,
        x_max: f64,
        row_count: usize,
    },
    InvalidSize(String),
    IndexOutOfRange { index: usize, len: usize },
    InvalidInput(String),
    DataError(String),
}

pub type Result<T> = std::result::Result<T, GridLutError>;

impl fmt::Display for GridLutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDomain {
                x_min,
                x_max,
                row_count,
            } => write!(
                f,
                "invalid grid domain [{x_min}, {x_max}] with {row_count} rows"
            ),
            Self::InvalidSize(msg) => write!(f, "invalid size: {msg}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::DataError(msg) => write!(f, "data error: {msg}"),
        }
    }
}

impl std::error::Error for GridLutError {}
