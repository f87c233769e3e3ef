//! Loading a source CSV together with its fingerprint.

use log::debug;

use crate::api::DatasetInfo;
use crate::error::DatasetResult;
use crate::models::RawRecord;
use crate::parsing::{calculate_checksum, read_csv_file, DataSource};

/// A parsed CSV file and where it came from.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub info: DatasetInfo,
    pub records: Vec<RawRecord>,
}

/// Locate and parse `source`.
///
/// The file is read from disk on every call.
pub fn load_dataset(source: &DataSource) -> DatasetResult<Dataset> {
    let path = source.locate()?;
    let (content, table) = read_csv_file(&path)?;
    let checksum = calculate_checksum(&content);

    debug!(
        "Loaded {} ({} rows, sha256 {})",
        path.display(),
        table.records.len(),
        &checksum[..12]
    );

    Ok(Dataset {
        info: DatasetInfo {
            path,
            rows: table.records.len(),
            checksum,
        },
        records: table.records,
    })
}
