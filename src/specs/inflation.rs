// src/specs/inflation.rs
//! CCPI / NCPI year-over-year inflation from the CBSL "inflation window".
//!
//! The window is a rendered text block, not a table: year headings followed
//! by month rows with four figures (CCPI headline, CCPI core, NCPI headline,
//! NCPI core). NCPI lags a month and shows `--` until published. The page
//! mixes several unicode minus variants; everything is normalized before
//! matching.
//!
//! A second fetch collects the monthly press-release PDF links from the
//! measures-of-consumer-price-inflation page.

use std::error::Error;

use chrono::NaiveDate;
use regex::Regex;
use reqwest::blocking::Client;
use scraper::Html;

use super::TableBundle;
use crate::config::consts::{INFLATION_PRESS_URL, INFLATION_WINDOW_URL};
use crate::core::dates::{month_number, to_iso};
use crate::core::html::{document_text, element_text, resolve_link, sel};
use crate::core::net::http_get;
use crate::core::sanitize::normalize_minus;

pub const HEADERS: [&str; 5] = [
    "Date",
    "CCPI Headline (YoY %)",
    "CCPI Core (YoY %)",
    "NCPI Headline (YoY %)",
    "NCPI Core (YoY %)",
];

pub const PRESS_HEADERS: [&str; 3] = ["Year", "Month", "PDF"];

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|November|December";

#[derive(Clone, Debug, PartialEq)]
pub struct InflationRow {
    pub date: NaiveDate,
    pub ccpi_headline: f64,
    pub ccpi_core: Option<f64>,
    pub ncpi_headline: Option<f64>,
    pub ncpi_core: Option<f64>,
}

pub fn fetch(client: &Client) -> Result<TableBundle, Box<dyn Error>> {
    let body = http_get(client, INFLATION_WINDOW_URL)?;
    let text = document_text(&Html::parse_document(&body));
    let rows = parse_window_text(&text);
    if rows.is_empty() {
        return Err("inflation window: no month rows matched; page layout may have changed".into());
    }
    Ok(to_bundle(rows))
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map(|x| format!("{:.1}", x)).unwrap_or_default()
}

fn to_bundle(rows: Vec<InflationRow>) -> TableBundle {
    let out = rows
        .into_iter()
        .map(|r| {
            vec![
                to_iso(r.date),
                format!("{:.1}", r.ccpi_headline),
                fmt_opt(r.ccpi_core),
                fmt_opt(r.ncpi_headline),
                fmt_opt(r.ncpi_core),
            ]
        })
        .collect();
    TableBundle {
        headers: Some(HEADERS.iter().map(|s| s.to_string()).collect()),
        rows: out,
    }
}

/// Parse the window's rendered text into one row per (year, month).
/// Year headings open a block; a month row carries four figures where the
/// NCPI pair may be `--`. Duplicate months keep the first occurrence
/// (the page lists newest years first).
pub fn parse_window_text(text: &str) -> Vec<InflationRow> {
    let text = normalize_minus(text);

    let year_re = Regex::new(r"\b(20\d{2})\b").expect("static regex");
    let month_re = Regex::new(&format!(
        r"(?P<mon>{MONTHS})\s+(?P<a>-?\d+\.?\d*|--)\s+(?P<b>-?\d+\.?\d*|--)\s+(?P<c>-?\d+\.?\d*|--)\s+(?P<d>-?\d+\.?\d*|--)"
    ))
    .expect("static regex");

    // Year heading positions delimit blocks.
    let marks: Vec<(usize, i32)> = year_re
        .captures_iter(&text)
        .filter_map(|c| {
            let m = c.get(1)?;
            Some((m.start(), m.as_str().parse::<i32>().ok()?))
        })
        .collect();

    let mut out: Vec<InflationRow> = Vec::new();
    for (i, (start, year)) in marks.iter().enumerate() {
        let end = marks.get(i + 1).map(|(s, _)| *s).unwrap_or(text.len());
        let block = &text[*start..end];

        for cap in month_re.captures_iter(block) {
            let Some(month) = month_number(&cap["mon"]) else { continue };
            let Some(date) = NaiveDate::from_ymd_opt(*year, month, 1) else { continue };
            if out.iter().any(|r| r.date == date) {
                continue;
            }
            let Some(ccpi_headline) = field(&cap["a"]) else { continue };
            out.push(InflationRow {
                date,
                ccpi_headline,
                ccpi_core: field(&cap["b"]),
                ncpi_headline: field(&cap["c"]),
                ncpi_core: field(&cap["d"]),
            });
        }
    }

    out.sort_by_key(|r| r.date);
    out
}

fn field(s: &str) -> Option<f64> {
    if s == "--" {
        return None;
    }
    s.parse::<f64>().ok()
}

/* ---------- press-release links ---------- */

/// Anchors titled "Inflation in <Month> <Year> - CCPI" that point at PDFs.
pub fn fetch_press_links(client: &Client) -> Result<TableBundle, Box<dyn Error>> {
    let body = http_get(client, INFLATION_PRESS_URL)?;
    Ok(parse_press_links(&body, INFLATION_PRESS_URL))
}

pub fn parse_press_links(body: &str, base_url: &str) -> TableBundle {
    let doc = Html::parse_document(body);
    let a_sel = sel("a[href]");
    let title_re =
        Regex::new(&format!(r"^Inflation in ({MONTHS}) (\d{{4}}) - CCPI")).expect("static regex");

    let mut rows: Vec<Vec<String>> = Vec::new();
    for a in doc.select(&a_sel) {
        let text = element_text(a);
        let Some(cap) = title_re.captures(&text) else { continue };
        let Some(href) = a.value().attr("href") else { continue };
        let Some(url) = resolve_link(base_url, href) else { continue };
        if !url.to_ascii_lowercase().ends_with(".pdf") {
            continue;
        }
        rows.push(vec![cap[2].to_string(), cap[1].to_string(), url]);
    }
    rows.sort();
    rows.dedup();

    TableBundle {
        headers: Some(PRESS_HEADERS.iter().map(|s| s.to_string()).collect()),
        rows,
    }
}
