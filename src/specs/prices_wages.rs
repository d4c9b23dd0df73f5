// src/specs/prices_wages.rs
//! Prices, wages and employment series from the real-sector statistical
//! tables page. The page is a link farm: every spreadsheet link
//! (.xls/.xlsx/.xlsm/.csv) is downloaded into the data directory, each
//! sheet gets its date column detected by scoring, and the numeric columns
//! are melted into long rows `[Date, Series, Value, Source]` where Source
//! is the sanitized file stem.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use scraper::Html;
use tracing::warn;
use url::Url;

use super::TableBundle;
use crate::config::consts::{DATA_DIR, DOWNLOADS_SUBDIR, PRICES_WAGES_URL, REQUEST_PAUSE_MS};
use crate::core::dates::to_iso;
use crate::core::html::{resolve_link, sel};
use crate::core::net::{http_get, http_get_bytes};
use crate::core::sanitize::{format_value, sanitize_filename};
use crate::core::xls::{workbook_sheets, XlsCell};
use crate::progress::Progress;

pub const HEADERS: [&str; 4] = ["Date", "Series", "Value", "Source"];

const FILE_EXTS: [&str; 4] = [".xls", ".xlsx", ".xlsm", ".csv"];

/// Date-column score must clear this to count as detected.
const DATE_SCORE_MIN: f64 = 0.35;

pub fn fetch(
    client: &Client,
    mut progress: Option<&mut dyn Progress>,
) -> Result<TableBundle, Box<dyn Error>> {
    let body = http_get(client, PRICES_WAGES_URL)?;
    let links = find_file_links(&body, PRICES_WAGES_URL);
    if links.is_empty() {
        return Err("no spreadsheet links found on the page".into());
    }
    if let Some(p) = progress.as_deref_mut() {
        p.begin(links.len());
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    for link in &links {
        let stem = file_stem_of(link);
        match fetch_one(client, link, &stem) {
            Ok(mut file_rows) => rows.append(&mut file_rows),
            Err(e) => warn!("prices & wages: {link} skipped ({e})"),
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&stem);
        }
        thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS));
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    if rows.is_empty() {
        return Err("no dated numeric series found in any spreadsheet".into());
    }
    rows.sort();
    rows.dedup();

    Ok(TableBundle {
        headers: Some(HEADERS.iter().map(|s| s.to_string()).collect()),
        rows,
    })
}

fn fetch_one(client: &Client, url: &str, stem: &str) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
    let bytes = http_get_bytes(client, url)?;

    // Keep a copy of the raw download next to the cache.
    let dir = PathBuf::from(DATA_DIR).join(DOWNLOADS_SUBDIR);
    if fs::create_dir_all(&dir).is_ok() {
        let name = sanitize_filename(
            Url::parse(url)
                .ok()
                .and_then(|u| {
                    u.path_segments()
                        .and_then(|s| s.last().map(|p| p.to_string()))
                })
                .as_deref()
                .unwrap_or("file"),
        );
        let _ = fs::write(dir.join(name), &bytes);
    }

    let sheets: Vec<(String, Vec<Vec<XlsCell>>)> = if url.to_ascii_lowercase().contains(".csv") {
        vec![("csv".to_string(), csv_cells(&bytes)?)]
    } else {
        workbook_sheets(&bytes)?
    };

    let mut out = Vec::new();
    for (_name, cells) in sheets {
        out.append(&mut melt_sheet(&cells, stem));
    }
    Ok(out)
}

fn csv_cells(bytes: &[u8]) -> Result<Vec<Vec<XlsCell>>, Box<dyn Error>> {
    let mut r = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);
    let mut rows = Vec::new();
    for rec in r.records() {
        let rec = rec?;
        rows.push(
            rec.iter()
                .map(|c| {
                    let t = c.trim();
                    if t.is_empty() {
                        XlsCell::Empty
                    } else {
                        XlsCell::Text(t.to_string())
                    }
                })
                .collect(),
        );
    }
    Ok(rows)
}

/// Spreadsheet links on the page, absolute, deduped, query strings ignored
/// for the extension check.
pub fn find_file_links(body: &str, base_url: &str) -> Vec<String> {
    let doc = Html::parse_document(body);
    let a_sel = sel("a[href]");

    let mut links: Vec<String> = doc
        .select(&a_sel)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| resolve_link(base_url, href))
        .filter(|u| {
            let bare = u.split('?').next().unwrap_or(u).to_ascii_lowercase();
            FILE_EXTS.iter().any(|ext| bare.ends_with(ext))
        })
        .collect();
    links.sort();
    links.dedup();
    links
}

fn file_stem_of(url: &str) -> String {
    let bare = url.split('?').next().unwrap_or(url);
    let name = bare.rsplit('/').next().unwrap_or(bare);
    let stem = name.rsplit_once('.').map(|(s, _)| s).unwrap_or(name);
    sanitize_filename(stem)
}

/* ---------- sheet → long rows ---------- */

/// First row is the header row; the date column is detected by scoring
/// (parse fraction + header-name hint + year-like integers). Numeric cells
/// in the remaining columns become one long row each.
pub fn melt_sheet(cells: &[Vec<XlsCell>], source: &str) -> Vec<Vec<String>> {
    if cells.len() < 2 {
        return Vec::new();
    }
    let header = &cells[0];
    let data = &cells[1..];

    let Some(date_col) = detect_date_column(header, data) else {
        return Vec::new();
    };
    let width = header.len().max(
        data.iter().map(|r| r.len()).max().unwrap_or(0),
    );

    let mut out = Vec::new();
    for row in data {
        let Some(date) = row.get(date_col).and_then(|c| c.as_date()) else {
            continue;
        };
        let iso = to_iso(date);
        for ci in 0..width {
            if ci == date_col {
                continue;
            }
            let Some(value) = row.get(ci).and_then(|c| c.as_number()) else {
                continue;
            };
            let series = header
                .get(ci)
                .map(|c| c.as_text())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| format!("Column {}", ci + 1));
            out.push(vec![
                iso.clone(),
                series,
                format_value(value),
                source.to_string(),
            ]);
        }
    }
    out
}

/// Score every column as a date candidate; best column wins if it clears
/// the threshold.
pub fn detect_date_column(header: &[XlsCell], data: &[Vec<XlsCell>]) -> Option<usize> {
    let width = header.len().max(
        data.iter().map(|r| r.len()).max().unwrap_or(0),
    );
    if width == 0 || data.is_empty() {
        return None;
    }

    let mut best: Option<(usize, f64)> = None;
    for ci in 0..width {
        let mut parsed = 0usize;
        let mut year_like = false;
        for row in data {
            match row.get(ci) {
                Some(cell) if cell.as_date().is_some() => parsed += 1,
                _ => {}
            }
            if let Some(n) = row.get(ci).and_then(|c| c.as_number()) {
                if (1900.0..=2100.0).contains(&n) && n.fract() == 0.0 {
                    year_like = true;
                }
            }
        }
        let frac = parsed as f64 / data.len() as f64;

        let name = header.get(ci).map(|c| c.as_text()).unwrap_or_default();
        let lname = name.to_ascii_lowercase();
        let name_hint = ["date", "month", "year", "period", "time"]
            .iter()
            .any(|k| lname.contains(k));

        let score = frac + if name_hint { 0.3 } else { 0.0 } + if year_like { 0.2 } else { 0.0 };
        if score >= DATE_SCORE_MIN && best.map(|(_, s)| score > s).unwrap_or(true) {
            best = Some((ci, score));
        }
    }
    best.map(|(ci, _)| ci)
}
