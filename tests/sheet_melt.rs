// tests/sheet_melt.rs
//
// Date-column detection and wide→long melting for downloaded spreadsheets.

use cbsl_scrape::core::xls::XlsCell;
use cbsl_scrape::specs::prices_wages::{detect_date_column, melt_sheet};
use chrono::NaiveDate;

fn t(s: &str) -> XlsCell {
    XlsCell::Text(s.to_string())
}
fn n(v: f64) -> XlsCell {
    XlsCell::Number(v)
}
fn d(y: i32, m: u32, day: u32) -> XlsCell {
    XlsCell::Date(NaiveDate::from_ymd_opt(y, m, day).unwrap())
}

#[test]
fn detects_typed_date_column() {
    let header = vec![t("Period"), t("Nominal wage index"), t("Real wage index")];
    let data = vec![
        vec![d(2024, 1, 31), n(214.3), n(101.2)],
        vec![d(2024, 2, 29), n(216.0), n(101.9)],
        vec![t("Notes: provisional"), XlsCell::Empty, XlsCell::Empty],
    ];
    assert_eq!(detect_date_column(&header, &data), Some(0));
}

#[test]
fn name_hint_breaks_ties_on_text_dates() {
    let header = vec![t("Month"), t("Index")];
    let data = vec![
        vec![t("January 2024"), t("214.3")],
        vec![t("February 2024"), t("216.0")],
    ];
    assert_eq!(detect_date_column(&header, &data), Some(0));
}

#[test]
fn no_date_column_means_no_rows() {
    let header = vec![t("Category"), t("Weight")];
    let data = vec![
        vec![t("Food"), n(32.0)],
        vec![t("Housing"), n(18.0)],
    ];
    assert_eq!(detect_date_column(&header, &data), None);

    let mut cells = vec![header];
    cells.extend(data);
    assert!(melt_sheet(&cells, "weights").is_empty());
}

#[test]
fn melts_numeric_columns_to_long_rows() {
    let cells = vec![
        vec![t("Date"), t("Nominal wage index"), t("Real wage index"), t("Remarks")],
        vec![d(2024, 1, 31), n(214.3), n(101.2), t("provisional")],
        vec![d(2024, 2, 29), t("216.0"), XlsCell::Empty, t("")],
        vec![t("Source: CBSL"), XlsCell::Empty, XlsCell::Empty, XlsCell::Empty],
    ];

    let rows = melt_sheet(&cells, "wages_2024");
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[0],
        vec!["2024-01-31", "Nominal wage index", "214.3", "wages_2024"]
    );
    assert_eq!(
        rows[1],
        vec!["2024-01-31", "Real wage index", "101.2", "wages_2024"]
    );
    // Numeric text still counts; the empty and textual cells don't.
    assert_eq!(
        rows[2],
        vec!["2024-02-29", "Nominal wage index", "216", "wages_2024"]
    );
}
