//! Planet-level domain types: raw archive rows, aggregated profiles and
//! synthetic variants.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::metric::{MetricKey, PerMetric};

/// An ordered list of `(column, value)` pairs, the shape used for CSV export.
pub type FlatRecord = Vec<(String, String)>;

/// One CSV row keyed by column name.
///
/// Values are kept exactly as parsed (quotes stripped, no trimming).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: HashMap<String, String>,
}

impl RawRecord {
    /// Raw value of `column`, if the column exists.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Trimmed value of `column`; empty when the column is absent.
    pub fn trimmed(&self, column: &str) -> &str {
        self.get(column).map(str::trim).unwrap_or("")
    }

    /// Trimmed value of the first of `columns` that exists in the row.
    ///
    /// A present but blank column still wins over later aliases.
    pub fn first_column<'a>(&'a self, columns: &[&str]) -> Option<&'a str> {
        columns
            .iter()
            .find_map(|column| self.get(column))
            .map(str::trim)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

}

impl FromIterator<(String, String)> for RawRecord {
    /// Later pairs overwrite earlier pairs with the same column name.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Summary statistics for one metric of one planet.
///
/// When `samples` is empty every scalar is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricStat {
    pub median: Option<f64>,
    pub p05: Option<f64>,
    pub p95: Option<f64>,
    pub samples: Vec<f64>,
}

/// A planet and its aggregated measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetProfile {
    pub pl_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    pub metrics: PerMetric<MetricStat>,
}

impl PlanetProfile {
    pub fn median(&self, key: MetricKey) -> Option<f64> {
        self.metrics[key].median
    }

    /// Medians for every metric, or `None` if any is missing.
    pub fn complete_medians(&self) -> Option<PerMetric<f64>> {
        let mut out = PerMetric::<f64>::default();
        for key in MetricKey::ALL {
            out[key] = self.median(key)?;
        }
        Some(out)
    }
}

/// A generated variant of a real planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticPlanet {
    /// `"<source>#<index>"`
    pub id: String,
    pub source: String,
    /// 1-based position in the generated cohort.
    pub index: usize,
    #[serde(flatten)]
    pub values: PerMetric<Option<f64>>,
}

impl SyntheticPlanet {
    pub fn to_flat_record(&self) -> FlatRecord {
        let mut record = vec![
            ("id".to_string(), self.id.clone()),
            ("source".to_string(), self.source.clone()),
            ("index".to_string(), self.index.to_string()),
        ];
        for (key, value) in self.values.iter() {
            let text = value.map(|v| v.to_string()).unwrap_or_default();
            record.push((key.column().to_string(), text));
        }
        record
    }
}
