use gridlut_data::TableRecord;

use crate::error::{GridLutError, Result};
use crate::grid::Grid;
use crate::table::LookupTable;

impl LookupTable {
    /// Snapshot of the grid header and column-major values.
    pub fn to_record(&self) -> Result<TableRecord> {
        let row_count = u32::try_from(self.row_count())
            .map_err(|_| GridLutError::InvalidSize(format!("{} rows", self.row_count())))?;
        let col_count = u32::try_from(self.col_count())
            .map_err(|_| GridLutError::InvalidSize(format!("{} columns", self.col_count())))?;
        Ok(TableRecord {
            row_count,
            col_count,
            x_min: self.x_min(),
            x_step: self.x_step(),
            values: self.values_by_column().to_vec(),
        })
    }

    /// Rebuilds a table from a record. The values are already gridded, so
    /// nothing is resampled.
    pub fn from_record(record: TableRecord) -> Result<Self> {
        let grid = Grid::with_step(record.x_min, record.x_step, record.row_count as usize)?;
        let expected = record.expected_len().ok_or_else(|| {
            GridLutError::InvalidSize(format!(
                "{} rows x {} columns overflows",
                record.row_count, record.col_count
            ))
        })?;
        if record.values.len() != expected {
            return Err(GridLutError::InvalidSize(format!(
                "record header needs {expected} values, found {}",
                record.values.len()
            )));
        }
        log::debug!(
            "loading lookup table: {} rows, {} columns",
            record.row_count,
            record.col_count
        );
        LookupTable::from_column_major(grid, record.col_count as usize, record.values)
    }

    /// Serializes the table with postcard.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let record = self.to_record()?;
        postcard::to_allocvec(&record).map_err(|e| GridLutError::DataError(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let record: TableRecord =
            postcard::from_bytes(bytes).map_err(|e| GridLutError::DataError(e.to_string()))?;
        Self::from_record(record)
    }

    /// Postcard bytes wrapped in a zstd frame.
    #[cfg(feature = "compression")]
    pub fn to_compressed_bytes(&self) -> Result<Vec<u8>> {
        use ruzstd::encoding::{CompressionLevel, compress_to_vec};

        let raw = self.to_bytes()?;
        let compressed = compress_to_vec(&raw[..], CompressionLevel::Fastest);
        log::debug!(
            "compressed lookup table: {} -> {} bytes",
            raw.len(),
            compressed.len()
        );
        Ok(compressed)
    }

    #[cfg(feature = "compression")]
    pub fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
        let mut decoder = ruzstd::decoding::StreamingDecoder::new(bytes)
            .map_err(|e| GridLutError::DataError(format!("zstd frame: {e:?}")))?;
        let mut raw = Vec::new();
        std::io::Read::read_to_end(&mut decoder, &mut raw)
            .map_err(|e| GridLutError::DataError(format!("zstd decode: {e}")))?;
        Self::from_bytes(&raw)
    }
}
