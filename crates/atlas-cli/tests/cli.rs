//! Tests for argument parsing and table rendering.

use clap::Parser;
use serde_json::json;

use atlas_cli::cli::{Cli, Command, MeasureArg, TokenFieldArg};
use atlas_cli::summary::{
    dataset_table, describe_table, region_summary_table, region_total_table, token_table,
};
use atlas_ingest::DEFAULT_ENDPOINT;
use atlas_model::{Measure, TokenField};
use atlas_transform::{
    Dataset, describe, region_summaries, sum_by_region, token_frequency,
};

fn scenario_dataset() -> Dataset {
    Dataset::from_raw(&[
        json!({
            "name": {"common": "Testland"},
            "capital": ["Test City"],
            "region": "TestRegion",
            "population": 100,
            "area": 50.5,
            "languages": {"tst": "Testish"},
            "currencies": {"TST": {"name": "Test Dollar"}}
        }),
        json!({"name": {"common": "Emptyland"}}),
    ])
}

#[test]
fn parses_defaults() {
    let cli = Cli::try_parse_from(["country-atlas", "describe"]).expect("parse args");
    assert!(matches!(cli.command, Command::Describe));
    assert_eq!(cli.source.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(cli.source.timeout_secs, 30);
    assert!(cli.source.input.is_none());
    assert_eq!(cli.source.describe(), DEFAULT_ENDPOINT);
    assert!(cli.source.fetch_config().use_system_proxy);
    assert!(!cli.log_spans);
}

#[test]
fn parses_global_source_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "country-atlas",
        "tokens",
        "--field",
        "currencies",
        "--top",
        "5",
        "--input",
        "countries.json",
        "--timeout",
        "3",
        "--no-proxy",
        "--log-spans",
    ])
    .expect("parse args");
    match cli.command {
        Command::Tokens { field, top } => {
            assert_eq!(field, TokenFieldArg::Currencies);
            assert_eq!(top, Some(5));
            assert_eq!(TokenField::from(field), TokenField::Currencies);
        }
        _ => panic!("expected tokens command"),
    }
    assert_eq!(cli.source.describe(), "countries.json");
    let config = cli.source.fetch_config();
    assert_eq!(config.timeout_secs, 3);
    assert!(!config.use_system_proxy);
    assert!(cli.log_spans);
}

#[test]
fn parses_regions_measure() {
    let cli = Cli::try_parse_from(["country-atlas", "regions", "--measure", "area"])
        .expect("parse args");
    match cli.command {
        Command::Regions { measure } => {
            assert_eq!(measure, Some(MeasureArg::Area));
            assert_eq!(measure.map(Measure::from), Some(Measure::Area));
        }
        _ => panic!("expected regions command"),
    }
}

#[test]
fn parses_export_defaults() {
    let cli = Cli::try_parse_from(["country-atlas", "export"]).expect("parse args");
    match cli.command {
        Command::Export(args) => {
            assert_eq!(args.output_dir, std::path::PathBuf::from("output"));
            assert_eq!(args.bins, 30);
        }
        _ => panic!("expected export command"),
    }
}

#[test]
fn rejects_out_of_range_bins() {
    for bins in ["0", "1001", "18446744073709551615", "many"] {
        assert!(
            Cli::try_parse_from(["country-atlas", "export", "--bins", bins]).is_err(),
            "accepted --bins {bins}"
        );
    }
    let cli = Cli::try_parse_from(["country-atlas", "export", "--bins", "1000"])
        .expect("parse args");
    assert!(matches!(cli.command, Command::Export(args) if args.bins == 1000));
}

#[test]
fn rejects_unknown_field() {
    assert!(Cli::try_parse_from(["country-atlas", "tokens", "--field", "flags"]).is_err());
}

#[test]
fn dataset_table_lists_rows() {
    let rendered = dataset_table(&scenario_dataset(), None).to_string();
    assert!(rendered.contains("Testland"));
    assert!(rendered.contains("Emptyland"));
    assert!(rendered.contains("Population"));

    let limited = dataset_table(&scenario_dataset(), Some(1)).to_string();
    assert!(limited.contains("Testland"));
    assert!(!limited.contains("Emptyland"));
}

#[test]
fn region_tables_include_sentinel_group() {
    let dataset = scenario_dataset();
    let rendered = region_summary_table(&region_summaries(&dataset)).to_string();
    assert!(rendered.contains("TestRegion"));
    assert!(rendered.contains("N/A"));
    assert!(rendered.contains("TOTAL"));

    let totals = sum_by_region(&dataset, Measure::Area);
    let rendered = region_total_table(Measure::Area, &totals).to_string();
    assert!(rendered.contains("50.5"));
    assert!(rendered.contains("Missing"));
}

#[test]
fn token_and_describe_tables_render() {
    let dataset = scenario_dataset();
    let counts = token_frequency(&dataset, TokenField::Currencies);
    let rendered = token_table(TokenField::Currencies, &counts, None).to_string();
    assert!(rendered.contains("Test Dollar"));
    assert!(rendered.contains("Currency"));

    let rendered = describe_table(
        &describe(&dataset, Measure::Population),
        &describe(&dataset, Measure::Area),
    )
    .to_string();
    assert!(rendered.contains("100.00"));
    assert!(rendered.contains("50.50"));
}

#[test]
fn empty_dataset_tables_render() {
    let dataset = Dataset::default();
    assert!(!dataset_table(&dataset, None).to_string().is_empty());
    assert!(
        region_summary_table(&region_summaries(&dataset))
            .to_string()
            .contains("TOTAL")
    );
}
