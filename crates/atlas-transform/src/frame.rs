//! DataFrame construction for the country table.

use polars::prelude::{Column as FrameColumn, DataFrame, NamedFrom, Series};

use atlas_model::{AtlasError, Column, Result};

use crate::dataset::Dataset;

/// Build a DataFrame with one column per schema column.
///
/// Text columns hold display strings; `Population` is `UInt64` and `Area`
/// is `Float64`, both null where the source had no value.
pub fn to_frame(dataset: &Dataset) -> Result<DataFrame> {
    let rows = dataset.rows();
    let mut columns: Vec<FrameColumn> = Vec::with_capacity(dataset.columns().len());
    for column in dataset.columns() {
        let name = column.label().into();
        let series = match column {
            Column::Population => {
                let values: Vec<Option<u64>> = rows.iter().map(|row| row.population).collect();
                Series::new(name, values)
            }
            Column::Area => {
                let values: Vec<Option<f64>> = rows.iter().map(|row| row.area).collect();
                Series::new(name, values)
            }
            _ => Series::new(name, dataset.column_values(*column)),
        };
        columns.push(series.into());
    }
    DataFrame::new(columns).map_err(|error| AtlasError::Frame(error.to_string()))
}

#[cfg(test)]
mod tests {
    use polars::prelude::DataType;
    use serde_json::json;

    use super::*;

    #[test]
    fn numeric_columns_are_typed_with_nulls() {
        let dataset = Dataset::from_raw(&[
            json!({"name": {"common": "A"}, "population": 5, "area": 1.5}),
            json!({"name": {"common": "B"}}),
        ]);
        let df = to_frame(&dataset).expect("build frame");
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 8);
        let population = df.column("Population").expect("population column");
        assert_eq!(population.dtype(), &DataType::UInt64);
        assert_eq!(population.null_count(), 1);
        let area = df.column("Area").expect("area column");
        assert_eq!(area.dtype(), &DataType::Float64);
    }

    #[test]
    fn empty_dataset_gives_empty_frame() {
        let df = to_frame(&Dataset::default()).expect("build frame");
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 8);
    }
}
