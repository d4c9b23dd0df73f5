// src/specs/money_supply.rs
//! Monetary-sector series from the eResearch portal, melted to long form
//! `[Date, Indicator, Value]` over a 180-day window. Non-numeric grid
//! cells (footnotes, blanks) are dropped.

use std::error::Error;

use chrono::{Duration, Local};
use reqwest::blocking::Client;

use super::{eresearch, TableBundle};
use crate::config::consts::{MONEY_SUBJECT_ID, MONEY_WINDOW_DAYS};
use crate::core::dates::to_iso;
use crate::core::sanitize::format_value;

pub const HEADERS: [&str; 3] = ["Date", "Indicator", "Value"];

pub fn fetch(client: &Client) -> Result<TableBundle, Box<dyn Error>> {
    let to = Local::now().date_naive();
    let from = to - Duration::days(MONEY_WINDOW_DAYS);
    let grid = eresearch::fetch_grid(client, MONEY_SUBJECT_ID, from, to)?;
    let bundle = melt(&grid);
    if bundle.rows.is_empty() {
        return Err("eResearch returned no monetary series".into());
    }
    Ok(bundle)
}

pub fn melt(grid: &[Vec<String>]) -> TableBundle {
    let mut rows: Vec<Vec<String>> = eresearch::melt_grid(grid)
        .into_iter()
        .map(|(date, indicator, value)| vec![to_iso(date), indicator, format_value(value)])
        .collect();
    rows.sort();

    TableBundle {
        headers: Some(HEADERS.iter().map(|s| s.to_string()).collect()),
        rows,
    }
}
