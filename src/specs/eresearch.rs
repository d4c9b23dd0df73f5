// src/specs/eresearch.rs
//! Client for the CBSL eResearch portal (`www.cbsl.lk/eResearch/`), an
//! ASP.NET WebForms wizard. The browser flow is: tick a subject, pick a
//! frequency and date range, Next, "show all", tick every series, Next,
//! read the result grid. Here the same flow is replayed as plain postbacks:
//! every POST carries the session cookie plus the `__VIEWSTATE` /
//! `__EVENTVALIDATION` hidden fields scraped from the previous response.
//!
//! Checkbox/input *names* are read from the live form (never derived from
//! ids) so control-tree renumbering on the server side doesn't break us.

use std::error::Error;

use chrono::NaiveDate;
use reqwest::blocking::Client;
use scraper::Html;
use tracing::debug;

use crate::config::consts::ERESEARCH_URL;
use crate::core::html::{
    checkbox_names_with_suffix, find_table, hidden_inputs, input_name_by_id, table_rows,
};
use crate::core::net::{http_get, http_post_form};
use crate::core::sanitize::parse_number;
use crate::core::dates::parse_date;

// Stable control names on the first wizard page.
const FREQUENCY: &str = "ctl00$ContentPlaceHolder1$drpFrequency";
const DATE_FROM: &str = "ctl00$ContentPlaceHolder1$txtDateFrom";
const DATE_TO: &str = "ctl00$ContentPlaceHolder1$txtDateTo";
const BTN_NEXT2: &str = "ctl00$ContentPlaceHolder1$btnNext2";
const BTN_NEXT: &str = "ctl00$ContentPlaceHolder1$btnNext";
const CHK_SHOW_ALL: &str = "ctl00$ContentPlaceHolder1$chkshowAll";
const RESULT_GRID: &str = r#"table[id="ContentPlaceHolder1_grdResult"]"#;
const SELECT_SUFFIX: &str = "$chkSelect";

/// One step of the wizard: the current page body plus the state fields the
/// next postback must echo.
struct WizardPage {
    html: String,
    hidden: Vec<(String, String)>,
}

impl WizardPage {
    fn from_body(html: String) -> Self {
        let hidden = hidden_inputs(&Html::parse_document(&html));
        Self { html, hidden }
    }

    fn doc(&self) -> Html {
        Html::parse_document(&self.html)
    }

    /// Postback with the given visible fields. `event_target`, when set,
    /// emulates an autopostback control (e.g. the "show all" checkbox).
    fn post(
        &self,
        client: &Client,
        fields: &[(&str, &str)],
        event_target: Option<&str>,
    ) -> Result<WizardPage, Box<dyn Error>> {
        let mut form: Vec<(String, String)> = Vec::with_capacity(self.hidden.len() + fields.len());
        for (k, v) in &self.hidden {
            match k.as_str() {
                "__EVENTTARGET" | "__EVENTARGUMENT" => {}
                _ => form.push((k.clone(), v.clone())),
            }
        }
        form.push((
            "__EVENTTARGET".to_string(),
            event_target.unwrap_or("").to_string(),
        ));
        form.push(("__EVENTARGUMENT".to_string(), String::new()));
        for (k, v) in fields {
            form.push((k.to_string(), v.to_string()));
        }
        let body = http_post_form(client, ERESEARCH_URL, &form)?;
        Ok(WizardPage::from_body(body))
    }
}

/// Walk the wizard for one subject checkbox (by element id) and return the
/// result grid as raw cell rows: header row first (label + date columns),
/// then one row per series.
pub fn fetch_grid(
    client: &Client,
    subject_id: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
    let landing = WizardPage::from_body(http_get(client, ERESEARCH_URL)?);

    let subject_name = input_name_by_id(&landing.doc(), subject_id)
        .ok_or_else(|| format!("eResearch: subject checkbox {} not found", subject_id))?;

    // Subject + frequency + date range, then Next.
    let from_s = from.format("%Y-%m-%d").to_string();
    let to_s = to.format("%Y-%m-%d").to_string();
    let selection = landing.post(
        client,
        &[
            (subject_name.as_str(), "on"),
            (FREQUENCY, "D"),
            (DATE_FROM, from_s.as_str()),
            (DATE_TO, to_s.as_str()),
            (BTN_NEXT2, "Next"),
        ],
        None,
    )?;

    // "Show all" is an autopostback; it expands the series list.
    let expanded = selection.post(client, &[(CHK_SHOW_ALL, "on")], Some(CHK_SHOW_ALL))?;

    // Tick every series checkbox and move on.
    let series = checkbox_names_with_suffix(&expanded.doc(), SELECT_SUFFIX);
    if series.is_empty() {
        return Err("eResearch: no series checkboxes on selection page".into());
    }
    debug!(count = series.len(), "eResearch series selected");

    let mut fields: Vec<(&str, &str)> = series.iter().map(|n| (n.as_str(), "on")).collect();
    fields.push((CHK_SHOW_ALL, "on"));
    fields.push((BTN_NEXT, "Next"));
    let mut page = expanded.post(client, &fields, None)?;

    // A confirmation step may sit between selection and results; one more
    // Next gets past it.
    if find_table(&page.doc(), RESULT_GRID).is_none() {
        page = page.post(client, &[(BTN_NEXT, "Next")], None)?;
    }

    let doc = page.doc();
    let grid = find_table(&doc, RESULT_GRID)
        .ok_or("eResearch: result grid not found; portal markup may have changed")?;
    Ok(table_rows(grid))
}

/// Melt a wide result grid (first column = series caption, remaining
/// columns = dates) into `(date, series, value)` triples. Cells that don't
/// parse as numbers are dropped.
pub fn melt_grid(rows: &[Vec<String>]) -> Vec<(NaiveDate, String, f64)> {
    let Some(header) = rows.first() else {
        return Vec::new();
    };
    let dates: Vec<Option<NaiveDate>> = header.iter().map(|h| parse_date(h)).collect();

    let mut out = Vec::new();
    for row in &rows[1..] {
        let Some(series) = row.first() else { continue };
        if series.is_empty() {
            continue;
        }
        for (ci, cell) in row.iter().enumerate().skip(1) {
            let (Some(Some(date)), Some(value)) = (dates.get(ci), parse_number(cell)) else {
                continue;
            };
            out.push((*date, series.clone(), value));
        }
    }
    out
}
