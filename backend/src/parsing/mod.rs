//! Readers and writers for the planet CSV datasets.
//!
//! - [`csv_parser`]: quote-aware CSV text parsing into [`RawRecord`](crate::models::RawRecord)s
//! - [`discovery`]: locate a data file among prioritized candidate paths
//! - [`export`]: serialize flat records back to CSV text
//! - [`checksum`]: content fingerprint of a loaded file

pub mod checksum;
pub mod csv_parser;
pub mod discovery;
pub mod export;


pub use checksum::calculate_checksum;
pub use csv_parser::{parse_csv, parse_csv_table, read_csv_file, split_csv_line, CsvTable};
pub use discovery::DataSource;
pub use export::to_csv;
