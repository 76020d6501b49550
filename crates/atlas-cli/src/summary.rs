//! Terminal tables for the country dataset and its views.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use atlas_model::{
    Column, Describe, Measure, RegionSummary, RegionTotal, SENTINEL, TokenCount, TokenField,
    format_numeric,
};
use atlas_transform::Dataset;

/// The normalized table, optionally cut to the first `limit` rows.
#[must_use]
pub fn dataset_table(dataset: &Dataset, limit: Option<usize>) -> Table {
    let mut table = Table::new();
    table.set_header(
        dataset
            .columns()
            .iter()
            .map(|column| header_cell(column.label()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for (index, column) in dataset.columns().iter().enumerate() {
        if column.is_numeric() {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }
    let limit = limit.unwrap_or(dataset.len());
    for row in dataset.rows().iter().take(limit) {
        table.add_row(
            dataset
                .columns()
                .iter()
                .map(|column| value_cell(row.cell(*column), *column))
                .collect::<Vec<_>>(),
        );
    }
    table
}

/// Countries, population and area per region, with a total row.
#[must_use]
pub fn region_summary_table(summaries: &[RegionSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Region"),
        header_cell("Countries"),
        header_cell("Population"),
        header_cell("Area (km²)"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut countries = 0usize;
    let mut population = 0.0;
    let mut area = 0.0;
    for summary in summaries {
        countries += summary.countries;
        population += summary.population;
        area += summary.area;
        table.add_row(vec![
            region_cell(&summary.region),
            Cell::new(summary.countries),
            Cell::new(format_numeric(summary.population)),
            Cell::new(format_numeric(summary.area)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(countries).add_attribute(Attribute::Bold),
        Cell::new(format_numeric(population)).add_attribute(Attribute::Bold),
        Cell::new(format_numeric(area)).add_attribute(Attribute::Bold),
    ]);
    table
}

/// One measure summed per region, with the rows that had no value.
#[must_use]
pub fn region_total_table(measure: Measure, totals: &[RegionTotal]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Region"),
        header_cell(measure.column().label()),
        header_cell("Counted"),
        header_cell("Missing"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for total in totals {
        table.add_row(vec![
            region_cell(&total.region),
            Cell::new(format_numeric(total.total)),
            Cell::new(total.counted),
            count_cell(total.missing, Color::Yellow),
        ]);
    }
    table
}

#[must_use]
pub fn token_table(field: TokenField, counts: &[TokenCount], top: Option<usize>) -> Table {
    let mut table = Table::new();
    let label = match field {
        TokenField::Languages => "Language",
        TokenField::Currencies => "Currency",
    };
    table.set_header(vec![header_cell(label), header_cell("Countries")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let limit = top.unwrap_or(counts.len());
    for entry in counts.iter().take(limit) {
        table.add_row(vec![Cell::new(&entry.token), Cell::new(entry.count)]);
    }
    table
}

/// Population and area statistics side by side.
#[must_use]
pub fn describe_table(population: &Describe, area: &Describe) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Statistic"),
        header_cell(Measure::Population.column().label()),
        header_cell(Measure::Area.column().label()),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let rows: [(&str, fn(&Describe) -> Option<f64>); 7] = [
        ("mean", |stats| stats.mean),
        ("std", |stats| stats.std),
        ("min", |stats| stats.min),
        ("25%", |stats| stats.p25),
        ("50%", |stats| stats.median),
        ("75%", |stats| stats.p75),
        ("max", |stats| stats.max),
    ];
    table.add_row(vec![
        Cell::new("count"),
        Cell::new(population.count),
        Cell::new(area.count),
    ]);
    table.add_row(vec![
        Cell::new("missing"),
        count_cell(population.missing, Color::Yellow),
        count_cell(area.missing, Color::Yellow),
    ]);
    for (name, statistic) in rows {
        table.add_row(vec![
            Cell::new(name),
            statistic_cell(statistic(population)),
            statistic_cell(statistic(area)),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 8 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::UpperBoundary(Width::Fixed(18)),
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Fixed(18)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
        ]);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn region_cell(region: &str) -> Cell {
    if region == SENTINEL {
        dim_cell(region)
    } else {
        Cell::new(region)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn value_cell(value: String, column: Column) -> Cell {
    if value == SENTINEL || value.is_empty() {
        return dim_cell(if value.is_empty() { "-" } else { SENTINEL });
    }
    if column == Column::Name {
        Cell::new(value).add_attribute(Attribute::Bold)
    } else {
        Cell::new(value)
    }
}

fn statistic_cell(value: Option<f64>) -> Cell {
    match value {
        Some(number) => Cell::new(format!("{number:.2}")),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
