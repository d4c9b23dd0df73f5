// tests/store_merge_export.rs
//
// Store round-trip, page merge policy, and export shapes.

use std::fs;
use std::path::PathBuf;

use cbsl_scrape::config::options::{ExportFormat, ExportOptions, ExportType};
use cbsl_scrape::file::{export_dataset, to_export_string, write_export_per_series};
use cbsl_scrape::gui::pages::{distinct_values, merge_by_key};
use cbsl_scrape::store::DataSet;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("cbsl_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

fn policy_ds() -> DataSet {
    DataSet::new(
        row(&["Date", "Rate", "Value"]),
        vec![
            row(&["2025-05-01", "SDFR", "7.75"]),
            row(&["2025-05-01", "SLFR", "8.75"]),
            row(&["2025-07-01", "SDFR", "7.25"]),
        ],
    )
}

#[test]
fn merge_upserts_by_composite_key_and_sorts() {
    let mut into = policy_ds();
    let fresh = DataSet::new(
        row(&["Date", "Rate", "Value"]),
        vec![
            // overwrite one existing observation…
            row(&["2025-07-01", "SDFR", "7.50"]),
            // …and add a new earlier one
            row(&["2025-03-01", "SDFR", "8.00"]),
        ],
    );

    merge_by_key(&mut into, fresh, &[0, 1]);

    assert_eq!(into.row_count(), 4);
    // Sorted by (Date, Rate)
    assert_eq!(into.rows[0], row(&["2025-03-01", "SDFR", "8.00"]));
    assert_eq!(into.rows[1], row(&["2025-05-01", "SDFR", "7.75"]));
    assert_eq!(into.rows[2], row(&["2025-05-01", "SLFR", "8.75"]));
    assert_eq!(into.rows[3], row(&["2025-07-01", "SDFR", "7.50"]));

    // Merging the same thing again changes nothing.
    let again = into.clone();
    merge_by_key(&mut into, again.clone(), &[0, 1]);
    assert_eq!(into, again);
}

#[test]
fn dataset_column_lookup_and_distinct() {
    let ds = policy_ds();
    assert_eq!(ds.column("rate"), Some(1));
    assert_eq!(ds.column("Nope"), None);
    assert_eq!(distinct_values(&ds.rows, 1), vec!["SDFR", "SLFR"]);
}

#[test]
fn export_string_respects_format_and_headers() {
    let ds = policy_ds();

    let mut export = ExportOptions::default();
    export.format = ExportFormat::Tsv;
    export.include_headers = true;
    let tsv = to_export_string(&export, &ds.headers, &ds.rows);
    assert!(tsv.starts_with("Date\tRate\tValue\n"));

    export.include_headers = false;
    export.format = ExportFormat::Csv;
    let csv = to_export_string(&export, &ds.headers, &ds.rows);
    assert!(csv.starts_with("2025-05-01,SDFR,7.75\n"));

    // Cells containing the delimiter get quoted.
    let tricky = DataSet::new(
        row(&["Date", "Indicator", "Value"]),
        vec![row(&["2025-05-01", "Reserves, gross", "1.0"])],
    );
    let out = to_export_string(&export, &tricky.headers, &tricky.rows);
    assert!(out.contains("\"Reserves, gross\""));
}

#[test]
fn export_single_writes_selected_extension() {
    let dir = tmp_dir("single");
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Csv;
    export.set_path(dir.join("rates.csv").to_str().unwrap());

    let ds = policy_ds();
    let written = export_dataset(&export, &ds.headers, &ds.rows, None).unwrap();
    assert_eq!(written.len(), 1);
    let content = fs::read_to_string(&written[0]).unwrap();
    assert!(content.starts_with("Date,Rate,Value\n"));
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn export_per_series_groups_by_column() {
    let dir = tmp_dir("per_series");
    let mut export = ExportOptions::default();
    export.export_type = ExportType::PerSeries;
    export.set_path(dir.to_str().unwrap());

    let ds = policy_ds();
    let written = write_export_per_series(&export, &ds.headers, &ds.rows, 1).unwrap();
    assert_eq!(written.len(), 2);

    let sdfr = written
        .iter()
        .find(|p| p.file_name().unwrap().to_string_lossy().contains("SDFR"))
        .unwrap();
    let content = fs::read_to_string(sdfr).unwrap();
    assert!(content.contains("2025-05-01"));
    assert!(content.contains("2025-07-01"));
    assert!(!content.contains("SLFR"));
}

#[test]
fn store_round_trip_preserves_quoting() {
    use cbsl_scrape::config::options::PageKind;
    use cbsl_scrape::store;

    // The store writes under a relative data/ dir; run from a scratch cwd.
    let dir = tmp_dir("store_rt");
    std::env::set_current_dir(&dir).unwrap();

    let ds = DataSet::new(
        row(&["Date", "Indicator", "Value"]),
        vec![
            row(&["2025-05-01", "Reserves, gross (USD mn)", "5000.1"]),
            row(&["2025-05-02", "Currency in \"circulation\"", "1200"]),
        ],
    );
    let path = store::save_dataset(&PageKind::MoneySupply, &ds).unwrap();
    assert!(path.ends_with("data/money_supply.csv"));

    let loaded = store::load_dataset(&PageKind::MoneySupply).unwrap();
    assert_eq!(loaded, ds);
}
