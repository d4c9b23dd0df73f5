// tests/specs_parse.rs
//
// Offline parsing tests: fixed sample HTML/text in, expected rows out.

use cbsl_scrape::specs::{exchange_rates, inflation, policy_rates, prices_wages, prosperity};

#[test]
fn plrates_table_yields_opr_and_srr() {
    let body = r#"
    <html><body><div id="container">
      <table>
        <tr><td>Overnight Policy Rate (OPR)</td><td>7.75</td></tr>
        <tr><td>Statutory Reserve Ratio (SRR)</td><td>2.00</td></tr>
        <tr><td>Some other heading</td><td>ignored</td></tr>
        <tr><td>Only one cell</td></tr>
      </table>
    </div></body></html>"#;

    let rates = policy_rates::parse_plrates(body);
    assert_eq!(rates.len(), 2);
    assert_eq!(rates[0], ("OPR".to_string(), 7.75));
    assert_eq!(rates[1], ("SRR".to_string(), 2.0));
}

#[test]
fn standing_rates_from_page_text() {
    let body = r#"
    <html><body><p>
      Standing Deposit Facility Rate (SDFR) | 7.25
      Standing Lending Facility Rate (SLFR) | 8.25
    </p></body></html>"#;

    let rates = policy_rates::parse_standing_rates(body);
    assert_eq!(rates.len(), 2);
    assert!(rates.contains(&("SDFR".to_string(), 7.25)));
    assert!(rates.contains(&("SLFR".to_string(), 8.25)));
}

#[test]
fn standing_rates_table_fallback() {
    // No "(SDFR)"-style text markers; values live in a table instead.
    let body = r#"
    <html><body><table>
      <tr><th>Rate</th><th>%</th></tr>
      <tr><td>Standing Deposit Facility Rate</td><td>7.25 %</td></tr>
      <tr><td>Standing Lending Facility Rate</td><td>8.25 %</td></tr>
    </table></body></html>"#;

    let rates = policy_rates::parse_standing_rates(body);
    assert!(rates.contains(&("SDFR".to_string(), 7.25)));
    assert!(rates.contains(&("SLFR".to_string(), 8.25)));
}

#[test]
fn inflation_window_parses_year_blocks_and_gaps() {
    // Unicode minus on the CCPI figure, NCPI still unpublished for February.
    let text = "Inflation window\n2025\nJanuary \u{2212}4.0 1.2 -4.0 -0.2\nFebruary -3.1 0.8 -- --\n2024\nDecember 1.5 2.0 1.1 0.9\n";

    let rows = inflation::parse_window_text(text);
    assert_eq!(rows.len(), 3);

    // Sorted ascending by date.
    assert_eq!(rows[0].date.to_string(), "2024-12-01");
    assert_eq!(rows[1].date.to_string(), "2025-01-01");
    assert_eq!(rows[2].date.to_string(), "2025-02-01");

    assert_eq!(rows[1].ccpi_headline, -4.0);
    assert_eq!(rows[1].ncpi_core, Some(-0.2));
    assert_eq!(rows[2].ncpi_headline, None);
    assert_eq!(rows[2].ncpi_core, None);
}

#[test]
fn inflation_press_links_filter_and_resolve() {
    let body = r#"
    <html><body>
      <a href="/sites/default/files/inflation_jan_2025.pdf">Inflation in January 2025 - CCPI</a>
      <a href="https://www.cbsl.gov.lk/notes/other.pdf">Some other note</a>
      <a href="/sites/default/files/inflation_feb_2025.htm">Inflation in February 2025 - CCPI</a>
    </body></html>"#;

    let bundle = inflation::parse_press_links(body, "https://www.cbsl.gov.lk/en/measures-of-consumer-price-inflation");
    assert_eq!(bundle.rows.len(), 1);
    assert_eq!(bundle.rows[0][0], "2025");
    assert_eq!(bundle.rows[0][1], "January");
    assert_eq!(
        bundle.rows[0][2],
        "https://www.cbsl.gov.lk/sites/default/files/inflation_jan_2025.pdf"
    );
}

#[test]
fn tt_rates_grid_pivots_wide() {
    // eResearch result grid shape: indicator rows, date columns.
    let grid: Vec<Vec<String>> = vec![
        vec!["Indicator", "2025-01-02", "2025-01-03"],
        vec!["TT Rates - Buying USD", "295.10", "296.25"],
        vec!["TT Rates - Selling USD", "303.50", ""],
        vec!["Average Weighted Call Money Rate", "8.0", "8.1"],
    ]
    .into_iter()
    .map(|r| r.into_iter().map(|c| c.to_string()).collect())
    .collect();

    let bundle = exchange_rates::pivot_tt_rates(&grid);
    let headers = bundle.headers.expect("headers");
    assert_eq!(
        headers,
        vec!["Date", "TT Rates - Buying USD", "TT Rates - Selling USD"]
    );
    assert_eq!(bundle.rows.len(), 2);
    assert_eq!(bundle.rows[0], vec!["2025-01-02", "295.1", "303.5"]);
    // Missing selling quote stays an empty cell.
    assert_eq!(bundle.rows[1], vec!["2025-01-03", "296.25", ""]);
}

#[test]
fn currency_code_from_caption() {
    assert_eq!(
        exchange_rates::currency_of("TT Rates - Buying USD"),
        Some("USD".to_string())
    );
    assert_eq!(
        exchange_rates::currency_of("TT Rates -Selling EUR"),
        Some("EUR".to_string())
    );
    assert_eq!(exchange_rates::currency_of("Date"), None);
    assert!(exchange_rates::is_buying("TT Rates - Buying USD"));
    assert!(!exchange_rates::is_buying("TT Rates - Selling USD"));
}

#[test]
fn spreadsheet_links_found_and_deduped() {
    let body = r#"
    <html><body>
      <a href="/statistics/wages_public.xlsx">Wages (public sector)</a>
      <a href="/statistics/wages_public.xlsx">Wages again</a>
      <a href="/statistics/ccpi_history.xls?download=1">CCPI history</a>
      <a href="/statistics/notes.pdf">Notes</a>
      <a href="mailto:stats@cbsl.lk">Contact</a>
    </body></html>"#;

    let links = prices_wages::find_file_links(body, "https://www.cbsl.gov.lk/en/statistics/statistical-tables/real-sector/prices-wages-employment");
    assert_eq!(
        links,
        vec![
            "https://www.cbsl.gov.lk/statistics/ccpi_history.xls?download=1".to_string(),
            "https://www.cbsl.gov.lk/statistics/wages_public.xlsx".to_string(),
        ]
    );
}

#[test]
fn slpi_note_patterns_in_order() {
    // Pattern 1: index name followed by previous + current value.
    let t1 = "The Sri Lanka Prosperity Index improved to 0.793 0.812 in the review year.";
    assert_eq!(prosperity::extract_slpi_note(t1, 2019), Some(0.812));

    // Pattern 2: "<value> in <year>".
    let t2 = "The index recorded 0.766 in 2017 compared to the previous year.";
    assert_eq!(prosperity::extract_slpi_note(t2, 2017), Some(0.766));

    // Pattern 3: "<year> <value>".
    let t3 = "Index by year: 2016 0.720";
    assert_eq!(prosperity::extract_slpi_note(t3, 2016), Some(0.72));

    assert_eq!(prosperity::extract_slpi_note("no numbers here", 2018), None);
}

#[test]
fn prosperity_page_title_and_reports() {
    let body = r#"
    <html><body>
      <div class="field-item odd">
        <h1>Sri Lanka Prosperity Index - 2021</h1>
        <ul>
          <li>Sri Lanka Prosperity Index - 2021</li>
          <li>Sri Lanka Prosperity Index - 2020</li>
        </ul>
      </div>
    </body></html>"#;

    let (title, reports) = prosperity::parse_page_summary(body);
    assert_eq!(title, "Sri Lanka Prosperity Index - 2021");
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[1], "Sri Lanka Prosperity Index - 2020");
}

#[test]
fn slpi_press_value_is_bounded() {
    let t = "The Sri Lanka Prosperity Index (SLPI) 2021 declined with an index value of 0.779 in 2021.";
    assert_eq!(prosperity::extract_slpi_press(t), Some(0.779));

    // Implausible levels are rejected.
    let t2 = "recorded an index value of 77.9 in 2021";
    assert_eq!(prosperity::extract_slpi_press(t2), None);
}
