// src/specs/policy_rates.rs
//! Policy interest rates, in two halves:
//!
//! 1. **Live rates**: OPR and SRR from the `plrates.php` container table,
//!    SDFR and SLFR from the policy-rates page (regex over the rendered
//!    text, falling back to scanning every table's two-cell rows).
//! 2. **History**: the published XLSX: sheet `Historical Policy Rates`
//!    (Date, SDFR, SLFR in columns B:D below three banner rows) and sheet
//!    `SRR` (Date, SRR in columns B:C).
//!
//! Output is long form `[Date, Rate, Value]` with Rate ∈ OPR/SRR/SDFR/SLFR.
//! Either half may fail independently; partial results are kept.

use std::error::Error;

use chrono::Local;
use regex::Regex;
use reqwest::blocking::Client;
use scraper::Html;
use tracing::warn;

use super::TableBundle;
use crate::config::consts::{HISTORICAL_RATES_XLSX_URL, PLRATES_URL, POLICY_RATES_URL};
use crate::core::dates::to_iso;
use crate::core::html::{document_text, element_text, sel};
use crate::core::net::{http_get, http_get_bytes};
use crate::core::sanitize::{format_value, parse_number};
use crate::core::xls::xlsx_sheet;

pub const RATE_OPR: &str = "OPR";
pub const RATE_SRR: &str = "SRR";
pub const RATE_SDFR: &str = "SDFR";
pub const RATE_SLFR: &str = "SLFR";

pub const HEADERS: [&str; 3] = ["Date", "Rate", "Value"];

/// Spreadsheet layout: three banner rows, then a header row, data below.
const XLSX_DATA_START: usize = 4;

pub fn fetch(client: &Client) -> Result<TableBundle, Box<dyn Error>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    let today = to_iso(Local::now().date_naive());
    match fetch_live(client) {
        Ok(live) => {
            for (rate, value) in live {
                rows.push(vec![today.clone(), rate, format_value(value)]);
            }
        }
        Err(e) => errors.push(format!("live rates: {e}")),
    }

    match fetch_history(client) {
        Ok(mut hist) => rows.append(&mut hist),
        Err(e) => errors.push(format!("history: {e}")),
    }

    if rows.is_empty() {
        return Err(errors.join("; ").into());
    }
    for e in &errors {
        warn!("policy rates: partial failure ({e})");
    }

    Ok(TableBundle {
        headers: Some(HEADERS.iter().map(|s| s.to_string()).collect()),
        rows,
    })
}

/* ---------- live rates ---------- */

fn fetch_live(client: &Client) -> Result<Vec<(String, f64)>, Box<dyn Error>> {
    let mut out: Vec<(String, f64)> = Vec::new();

    // plrates.php: OPR + SRR as label/value rows in the #container table.
    match http_get(client, PLRATES_URL) {
        Ok(body) => out.extend(parse_plrates(&body)),
        Err(e) => warn!("policy rates: plrates fetch failed ({e})"),
    }

    // policy-rates page: SDFR + SLFR.
    match http_get(client, POLICY_RATES_URL) {
        Ok(body) => out.extend(parse_standing_rates(&body)),
        Err(e) => warn!("policy rates: standing-rates fetch failed ({e})"),
    }

    if out.is_empty() {
        return Err("no live rates found on either page".into());
    }
    Ok(out)
}

/// Two-cell rows under `#container`; label text decides the rate.
pub fn parse_plrates(body: &str) -> Vec<(String, f64)> {
    let doc = Html::parse_document(body);
    let row_sel = sel("#container tr");
    let cell_sel = sel("td");

    let mut out = Vec::new();
    for row in doc.select(&row_sel) {
        let cells: Vec<String> = row.select(&cell_sel).map(element_text).collect();
        if cells.len() != 2 {
            continue;
        }
        let Some(value) = parse_number(&cells[1]) else { continue };
        if cells[0].contains("Overnight Policy Rate") {
            out.push((RATE_OPR.to_string(), value));
        } else if cells[0].contains("Statutory Reserve Ratio") {
            out.push((RATE_SRR.to_string(), value));
        }
    }
    out
}

/// SDFR/SLFR from the rendered page text, with a table-scan fallback when
/// the text layout shifts.
pub fn parse_standing_rates(body: &str) -> Vec<(String, f64)> {
    let doc = Html::parse_document(body);
    let text = document_text(&doc);

    let sdfr_re = Regex::new(
        r"Standing Deposit Facility Rate \(SDFR\)[\s|:]*([\d.]+)",
    )
    .expect("static regex");
    let slfr_re = Regex::new(
        r"Standing Lending Facility Rate \(SLFR\)[\s|:]*([\d.]+)",
    )
    .expect("static regex");

    let mut out = Vec::new();
    if let Some(v) = sdfr_re
        .captures(&text)
        .and_then(|c| c[1].parse::<f64>().ok())
    {
        out.push((RATE_SDFR.to_string(), v));
    }
    if let Some(v) = slfr_re
        .captures(&text)
        .and_then(|c| c[1].parse::<f64>().ok())
    {
        out.push((RATE_SLFR.to_string(), v));
    }

    if out.len() == 2 {
        return out;
    }

    // Fallback: any table row whose first cell names the rate.
    let num_re = Regex::new(r"[\d.]+").expect("static regex");
    let row_sel = sel("table tr");
    let cell_sel = sel("td, th");
    for row in doc.select(&row_sel) {
        let cells: Vec<String> = row.select(&cell_sel).map(element_text).collect();
        if cells.len() < 2 {
            continue;
        }
        let value = num_re
            .find(&cells[1])
            .and_then(|m| m.as_str().parse::<f64>().ok());
        let Some(value) = value else { continue };

        let name = &cells[0];
        if (name.contains("Standing Deposit Facility Rate") || name.contains("SDFR"))
            && !out.iter().any(|(r, _)| r == RATE_SDFR)
        {
            out.push((RATE_SDFR.to_string(), value));
        } else if (name.contains("Standing Lending Facility Rate") || name.contains("SLFR"))
            && !out.iter().any(|(r, _)| r == RATE_SLFR)
        {
            out.push((RATE_SLFR.to_string(), value));
        }
    }
    out
}

/* ---------- history (XLSX) ---------- */

fn fetch_history(client: &Client) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
    let bytes = http_get_bytes(client, HISTORICAL_RATES_XLSX_URL)?;
    let mut out = parse_history_sheet(&bytes)?;
    match parse_srr_sheet(&bytes) {
        Ok(mut srr) => out.append(&mut srr),
        Err(e) => warn!("policy rates: SRR sheet failed ({e})"),
    }
    Ok(out)
}

/// Sheet "Historical Policy Rates": B=Date, C=SDFR, D=SLFR.
fn parse_history_sheet(bytes: &[u8]) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
    let sheet = xlsx_sheet(bytes, "Historical Policy Rates")?;
    let mut out = Vec::new();
    for row in sheet.iter().skip(XLSX_DATA_START) {
        let Some(date) = row.get(1).and_then(|c| c.as_date()) else {
            continue; // banner/footer rows
        };
        let iso = to_iso(date);
        if let Some(v) = row.get(2).and_then(|c| c.as_number()) {
            out.push(vec![iso.clone(), RATE_SDFR.to_string(), format_value(v)]);
        }
        if let Some(v) = row.get(3).and_then(|c| c.as_number()) {
            out.push(vec![iso, RATE_SLFR.to_string(), format_value(v)]);
        }
    }
    Ok(out)
}

/// Sheet "SRR": B=Date, C=ratio.
fn parse_srr_sheet(bytes: &[u8]) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
    let sheet = xlsx_sheet(bytes, "SRR")?;
    let mut out = Vec::new();
    for row in sheet.iter().skip(XLSX_DATA_START) {
        let Some(date) = row.get(1).and_then(|c| c.as_date()) else {
            continue;
        };
        if let Some(v) = row.get(2).and_then(|c| c.as_number()) {
            out.push(vec![to_iso(date), RATE_SRR.to_string(), format_value(v)]);
        }
    }
    Ok(out)
}
