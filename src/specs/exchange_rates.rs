// src/specs/exchange_rates.rs
//! Daily telegraphic-transfer exchange rates from the eResearch portal.
//!
//! The wizard is walked with the External Sector → Exchange Rates subject
//! over the last 30 days; the result grid keeps only "TT Rates" series
//! (buying/selling per currency) and is pivoted to one row per date with
//! one column per series, caption kept verbatim. The dashboard recovers
//! currency codes from the trailing token of each caption.

use std::collections::BTreeMap;
use std::error::Error;

use chrono::{Duration, Local, NaiveDate};
use reqwest::blocking::Client;

use super::{eresearch, TableBundle};
use crate::config::consts::{EXCHANGE_SUBJECT_ID, EXCHANGE_WINDOW_DAYS};
use crate::core::dates::to_iso;
use crate::core::sanitize::format_value;

pub const DATE_HEADER: &str = "Date";

pub fn fetch(client: &Client) -> Result<TableBundle, Box<dyn Error>> {
    let to = Local::now().date_naive();
    let from = to - Duration::days(EXCHANGE_WINDOW_DAYS);
    let grid = eresearch::fetch_grid(client, EXCHANGE_SUBJECT_ID, from, to)?;
    let bundle = pivot_tt_rates(&grid);
    if bundle.rows.is_empty() {
        return Err("eResearch returned no TT rate series".into());
    }
    Ok(bundle)
}

/// Keep "TT Rates" series only and pivot `(date, series, value)` to a wide
/// table sorted by date.
pub fn pivot_tt_rates(grid: &[Vec<String>]) -> TableBundle {
    let triples = eresearch::melt_grid(grid);

    // Column order: first appearance in the grid.
    let mut columns: Vec<String> = Vec::new();
    let mut by_date: BTreeMap<NaiveDate, BTreeMap<usize, f64>> = BTreeMap::new();

    for (date, series, value) in triples {
        if !series.contains("TT Rates") {
            continue;
        }
        let ci = match columns.iter().position(|c| *c == series) {
            Some(i) => i,
            None => {
                columns.push(series);
                columns.len() - 1
            }
        };
        by_date.entry(date).or_default().insert(ci, value);
    }

    let mut headers = Vec::with_capacity(columns.len() + 1);
    headers.push(DATE_HEADER.to_string());
    headers.extend(columns.iter().cloned());

    let rows = by_date
        .into_iter()
        .map(|(date, cells)| {
            let mut row = Vec::with_capacity(columns.len() + 1);
            row.push(to_iso(date));
            for ci in 0..columns.len() {
                row.push(cells.get(&ci).map(|v| format_value(*v)).unwrap_or_default());
            }
            row
        })
        .collect();

    TableBundle { headers: Some(headers), rows }
}

/// Currency code of a TT column caption ("TT Rates - Buying U.S. Dollar USD"
/// → "USD"): the trailing token, which must look like an uppercase code.
pub fn currency_of(column: &str) -> Option<String> {
    let token = column.split_whitespace().last()?;
    if !(2..=4).contains(&token.len()) {
        return None;
    }
    if !token
        .chars()
        .all(|c| c.is_ascii_alphabetic() && c.is_ascii_uppercase())
    {
        return None;
    }
    Some(token.to_string())
}

/// True for buying-side captions.
pub fn is_buying(column: &str) -> bool {
    column.to_ascii_lowercase().contains("buying")
}
