//! Aggregation views over a [`Dataset`].
//!
//! Every view is recomputed from the dataset on each call.

use std::collections::HashMap;

use atlas_model::{Column, Measure, RegionSummary, RegionTotal, TokenCount, TokenField, split_tokens};

use crate::dataset::Dataset;

/// Sum a measure per region. Missing values contribute zero.
///
/// Regions are ordered by name.
#[must_use]
pub fn sum_by_region(dataset: &Dataset, measure: Measure) -> Vec<RegionTotal> {
    let rows = dataset.rows();
    dataset
        .group_by(Column::Region)
        .into_iter()
        .map(|(region, indices)| {
            let mut total = 0.0;
            let mut counted = 0;
            for idx in &indices {
                if let Some(value) = measure.value(&rows[*idx]) {
                    total += value;
                    counted += 1;
                }
            }
            RegionTotal {
                region,
                total,
                counted,
                missing: indices.len() - counted,
            }
        })
        .collect()
}

/// Country count plus population and area totals per region.
#[must_use]
pub fn region_summaries(dataset: &Dataset) -> Vec<RegionSummary> {
    let rows = dataset.rows();
    dataset
        .group_by(Column::Region)
        .into_iter()
        .map(|(region, indices)| {
            let total = |measure: Measure| -> f64 {
                indices
                    .iter()
                    .filter_map(|idx| measure.value(&rows[*idx]))
                    .sum()
            };
            RegionSummary {
                countries: indices.len(),
                population: total(Measure::Population),
                area: total(Measure::Area),
                region,
            }
        })
        .collect()
}

/// Count each language or currency across all rows.
///
/// Ordered by descending count; ties keep the order in which tokens were
/// first seen.
#[must_use]
pub fn token_frequency(dataset: &Dataset, field: TokenField) -> Vec<TokenCount> {
    let mut counts: Vec<TokenCount> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    for row in dataset.rows() {
        let display = row.cell(field.column());
        for token in split_tokens(&display) {
            match positions.get(token) {
                Some(&pos) => counts[pos].count += 1,
                None => {
                    positions.insert(token.to_string(), counts.len());
                    counts.push(TokenCount {
                        token: token.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn region_summary_counts_rows() {
        let dataset = Dataset::from_raw(&[
            json!({"region": "Europe", "population": 10, "area": 1.5}),
            json!({"region": "Europe", "area": 2.5}),
            json!({"region": "Africa", "population": 7}),
        ]);
        let summaries = region_summaries(&dataset);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].region, "Africa");
        assert_eq!(summaries[0].countries, 1);
        assert_eq!(summaries[0].area, 0.0);
        assert_eq!(summaries[1].region, "Europe");
        assert_eq!(summaries[1].countries, 2);
        assert_eq!(summaries[1].population, 10.0);
        assert_eq!(summaries[1].area, 4.0);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let dataset = Dataset::from_raw(&[
            json!({"languages": {"b": "Beta", "a": "Alpha"}}),
            json!({"languages": {"a": "Alpha", "c": "Gamma"}}),
        ]);
        let counts = token_frequency(&dataset, TokenField::Languages);
        let tokens: Vec<(&str, usize)> = counts
            .iter()
            .map(|entry| (entry.token.as_str(), entry.count))
            .collect();
        assert_eq!(tokens, vec![("Alpha", 2), ("Beta", 1), ("Gamma", 1)]);
    }
}
