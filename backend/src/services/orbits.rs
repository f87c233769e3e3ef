//! Orbit scatter rows from the raw archive export.

use log::debug;

use super::statistics::to_number;
use crate::api::OrbitPoint;
use crate::models::RawRecord;

const NAME_COLUMNS: [&str; 3] = ["pl_name", "planet_name", "name"];
const SEMI_MAJOR_AXIS_COLUMNS: [&str; 4] = ["pl_orbsmax", "a", "semimajor_axis", "semi-major axis"];
const INSOLATION_COLUMNS: [&str; 4] = ["pl_insol", "insolation", "flux", "stellar flux"];

/// One point per row with a name and finite orbit values.
///
/// Column names vary between exports, so each field is read from the first
/// alias that exists in the row. A blank value in that column drops the row
/// rather than falling through to later aliases.
pub fn extract_orbit_points(records: &[RawRecord]) -> Vec<OrbitPoint> {
    let points: Vec<OrbitPoint> = records
        .iter()
        .filter_map(|record| {
            let name = record.first_column(&NAME_COLUMNS)?.trim();
            if name.is_empty() {
                return None;
            }
            let semi_major_axis = record
                .first_column(&SEMI_MAJOR_AXIS_COLUMNS)
                .and_then(to_number)?;
            let insolation = record.first_column(&INSOLATION_COLUMNS).and_then(to_number)?;
            Some(OrbitPoint {
                name: name.to_string(),
                semi_major_axis,
                insolation,
            })
        })
        .collect();

    debug!("Extracted {} orbit points from {} rows", points.len(), records.len());
    points
}
