//! The country table built from one fetch.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, info_span};

use atlas_ingest::FetchOutcome;
use atlas_model::{Column, CountryRecord};

use crate::normalize::normalize_record;

/// Ordered, immutable collection of normalized countries.
///
/// Row order is the order of the source records. A refresh builds a new
/// `Dataset`; rows are never added or changed after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<CountryRecord>,
}

impl Dataset {
    /// Normalize raw records in order. An empty slice gives an empty table.
    #[must_use]
    pub fn from_raw(raw: &[Value]) -> Self {
        let span = info_span!("normalize", records = raw.len());
        let _guard = span.enter();
        let rows: Vec<CountryRecord> = raw.iter().map(normalize_record).collect();
        debug!(rows = rows.len(), "built country dataset");
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[CountryRecord] {
        &self.rows
    }

    /// The fixed table schema.
    #[must_use]
    pub fn columns(&self) -> &'static [Column] {
        &Column::ALL
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row indices grouped by the display value of `column`.
    ///
    /// Keys are sorted; indices within a group ascend.
    #[must_use]
    pub fn group_by(&self, column: Column) -> BTreeMap<String, Vec<usize>> {
        let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (idx, row) in self.rows.iter().enumerate() {
            groups.entry(row.cell(column)).or_default().push(idx);
        }
        groups
    }

    /// Display values of one column, in row order.
    #[must_use]
    pub fn column_values(&self, column: Column) -> Vec<String> {
        self.rows.iter().map(|row| row.cell(column)).collect()
    }
}

/// Build the dataset for one fetch. A failed fetch yields an empty dataset.
#[must_use]
pub fn load_dataset(outcome: &FetchOutcome) -> Dataset {
    Dataset::from_raw(&outcome.records)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn group_by_collects_indices_per_value() {
        let raw = vec![
            json!({"region": "Europe"}),
            json!({"region": "Asia"}),
            json!({"region": "Europe"}),
            json!({}),
        ];
        let dataset = Dataset::from_raw(&raw);
        let groups = dataset.group_by(Column::Region);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups["Europe"], vec![0, 2]);
        assert_eq!(groups["Asia"], vec![1]);
        assert_eq!(groups["N/A"], vec![3]);
    }

    #[test]
    fn empty_dataset_groups_to_nothing() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.group_by(Column::Region).is_empty());
        assert_eq!(dataset.columns().len(), 8);
    }
}
