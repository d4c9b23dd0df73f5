// tests/eresearch_grid.rs
//
// WebForms plumbing and result-grid reshaping, offline.

use cbsl_scrape::core::html::{checkbox_names_with_suffix, hidden_inputs, input_name_by_id};
use cbsl_scrape::specs::{eresearch, money_supply};
use scraper::Html;

const WIZARD_PAGE: &str = r#"
<html><body><form method="post" action="./">
  <input type="hidden" name="__VIEWSTATE" value="dDwtMTA4" />
  <input type="hidden" name="__VIEWSTATEGENERATOR" value="CA0B0334" />
  <input type="hidden" name="__EVENTVALIDATION" value="/wEWAgL" />
  <input type="hidden" name="__EVENTTARGET" value="" />
  <input id="ContentPlaceHolder1_grdSubjects_MonitorySector_chkIsSelect_0"
         type="checkbox"
         name="ctl00$ContentPlaceHolder1$grdSubjects_MonitorySector$ctl02$chkIsSelect" />
  <input id="ContentPlaceHolder1_grdResult_ctl02_chkSelect" type="checkbox"
         name="ctl00$ContentPlaceHolder1$grdResult$ctl02$chkSelect" />
  <input id="ContentPlaceHolder1_grdResult_ctl03_chkSelect" type="checkbox"
         name="ctl00$ContentPlaceHolder1$grdResult$ctl03$chkSelect" />
</form></body></html>"#;

#[test]
fn wizard_state_fields_and_control_names() {
    let doc = Html::parse_document(WIZARD_PAGE);

    let hidden = hidden_inputs(&doc);
    let names: Vec<&str> = hidden.iter().map(|(k, _)| k.as_str()).collect();
    assert!(names.contains(&"__VIEWSTATE"));
    assert!(names.contains(&"__EVENTVALIDATION"));

    // Control names come from the live form, not from id arithmetic.
    assert_eq!(
        input_name_by_id(&doc, "ContentPlaceHolder1_grdSubjects_MonitorySector_chkIsSelect_0"),
        Some("ctl00$ContentPlaceHolder1$grdSubjects_MonitorySector$ctl02$chkIsSelect".to_string())
    );

    let series = checkbox_names_with_suffix(&doc, "$chkSelect");
    assert_eq!(series.len(), 2);
    assert!(series.iter().all(|n| n.ends_with("$chkSelect")));
}

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

#[test]
fn melt_grid_drops_non_numeric_cells() {
    let g = grid(&[
        &["", "2025-06-30", "2025-07-01"],
        &["Reserve Money", "1,520.5", "1,530.0"],
        &["Currency in Circulation", "n/a", "880.25"],
        &["", "1.0", "2.0"], // unnamed row is ignored
    ]);

    let triples = eresearch::melt_grid(&g);
    assert_eq!(triples.len(), 3);
    assert_eq!(triples[0].1, "Reserve Money");
    assert_eq!(triples[0].2, 1520.5); // thousands separator parses
    // The n/a cell is gone; only the dated quote survives.
    assert_eq!(
        triples
            .iter()
            .filter(|(_, s, _)| s == "Currency in Circulation")
            .count(),
        1
    );
}

#[test]
fn money_supply_melts_long_and_sorted() {
    let g = grid(&[
        &["", "2025-07-01", "2025-06-30"],
        &["Reserve Money", "1,530.0", "1,520.5"],
    ]);

    let bundle = money_supply::melt(&g);
    assert_eq!(
        bundle.headers.as_deref(),
        Some(["Date", "Indicator", "Value"].map(String::from).as_slice())
    );
    // Sorted by date even though the grid listed columns newest-first.
    assert_eq!(bundle.rows[0][0], "2025-06-30");
    assert_eq!(bundle.rows[0][2], "1520.5");
    assert_eq!(bundle.rows[1][0], "2025-07-01");
}
