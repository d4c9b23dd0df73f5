// src/specs/prosperity.rs
//! Sri Lanka Prosperity Index (SLPI), one overall value per year.
//!
//! CBSL never published the index as a table: 2015–2020 live in annual
//! note PDFs, 2021 in a press-release PDF. Each PDF's text is extracted and
//! the overall value located with ordered patterns (the notes repeat the
//! previous and current value after the index name; the press release
//! spells out "index value of X in 2021"). A year whose PDF is missing or
//! unparseable yields a row with an empty value.

use std::error::Error;
use std::thread;
use std::time::Duration;

use regex::Regex;
use reqwest::blocking::Client;
use scraper::Html;
use tracing::warn;

use super::TableBundle;
use crate::config::consts::{
    PROSPERITY_PAGE_URL, PROSPERITY_PDF_2021_URL, PROSPERITY_PDF_BASE_URL, REQUEST_PAUSE_MS,
    SLPI_FIRST_YEAR, SLPI_LAST_NOTE_YEAR, SLPI_PRESS_YEAR,
};
use crate::core::html::{element_text, sel};
use crate::core::net::{http_get, http_get_bytes};
use crate::core::sanitize::{format_value, normalize_ws};
use crate::progress::Progress;

pub const HEADERS: [&str; 2] = ["Year", "SLPI"];

pub fn fetch(
    client: &Client,
    mut progress: Option<&mut dyn Progress>,
) -> Result<TableBundle, Box<dyn Error>> {
    let years: Vec<i32> = (SLPI_FIRST_YEAR..=SLPI_PRESS_YEAR).collect();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(years.len());
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut found = 0usize;

    for year in years {
        let value = match slpi_for_year(client, year) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("prosperity: {year} unavailable ({e})");
                None
            }
        };
        if value.is_some() {
            found += 1;
        }
        rows.push(vec![
            year.to_string(),
            value.map(format_value).unwrap_or_default(),
        ]);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&year.to_string());
        }
        thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS));
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    if found == 0 {
        return Err("no SLPI value could be extracted for any year".into());
    }

    Ok(TableBundle {
        headers: Some(HEADERS.iter().map(|s| s.to_string()).collect()),
        rows,
    })
}

fn slpi_for_year(client: &Client, year: i32) -> Result<f64, Box<dyn Error>> {
    let (url, from_press) = if year <= SLPI_LAST_NOTE_YEAR {
        (PROSPERITY_PDF_BASE_URL.replace("{}", &year.to_string()), false)
    } else {
        (PROSPERITY_PDF_2021_URL.to_string(), true)
    };
    let bytes = http_get_bytes(client, &url)?;
    let text = pdf_extract::extract_text_from_mem(&bytes)?;

    let value = if from_press {
        extract_slpi_press(&text)
    } else {
        extract_slpi_note(&text, year)
    };
    value.ok_or_else(|| format!("SLPI not found in {url}").into())
}

/// Annual note PDFs (2015–2020): the first page quotes previous and current
/// value after the index name, or "<value> in <year>" / "<year> <value>".
pub fn extract_slpi_note(text: &str, year: i32) -> Option<f64> {
    let t = normalize_ws(text);

    let pair = Regex::new(r"(?i)Sri Lanka Prosperity Index[^\d]+(\d+\.\d+)\s+(\d+\.\d+)")
        .expect("static regex");
    if let Some(c) = pair.captures(&t) {
        return c[2].parse().ok();
    }

    let in_year =
        Regex::new(&format!(r"(?i)(\d+\.\d+)\s+in\s+{year}")).expect("static regex");
    if let Some(c) = in_year.captures(&t) {
        return c[1].parse().ok();
    }

    let year_val = Regex::new(&format!(r"{year}\s+(\d+\.\d+)")).expect("static regex");
    year_val.captures(&t).and_then(|c| c[1].parse().ok())
}

/// 2021 press release. Only values in (0, 10) are plausible index levels.
pub fn extract_slpi_press(text: &str) -> Option<f64> {
    let t = normalize_ws(text);
    // Strip "(SLPI) 2021"-style artifacts that confuse the number patterns.
    let t = Regex::new(r"(?i)\(\s*SLPI\s*\)\s*\d+")
        .expect("static regex")
        .replace_all(&t, "(SLPI)")
        .into_owned();

    const NUM: &str = r"(\d+(?:\s*[.,]\s*\d+)?)";
    let patterns = [
        format!(r"(?i)index\s+value\s+of\s+{NUM}\s+in\s*2021"),
        format!(r"(?i){NUM}\s+(?:index\s*points?\s+)?in\s*2021"),
        format!(r"(?i)(?:in|for)\s*2021.{{0,80}}?(?:slpi|prosperity\s+index).{{0,40}}?{NUM}"),
    ];

    for p in &patterns {
        let re = Regex::new(p).expect("static regex");
        if let Some(c) = re.captures(&t) {
            let raw = c[1].replace(' ', "").replace(',', ".");
            if let Ok(v) = raw.parse::<f64>() {
                if v > 0.0 && v < 10.0 {
                    return Some(v);
                }
            }
        }
    }
    None
}

/* ---------- page summary ---------- */

/// Heading and report bullet list from the prosperity-index page, shown
/// above the table in the dashboard.
pub fn page_summary(client: &Client) -> Result<(String, Vec<String>), Box<dyn Error>> {
    let body = http_get(client, PROSPERITY_PAGE_URL)?;
    Ok(parse_page_summary(&body))
}

pub fn parse_page_summary(body: &str) -> (String, Vec<String>) {
    let doc = Html::parse_document(body);

    let title = doc
        .select(&sel("div.field-item h1"))
        .next()
        .or_else(|| doc.select(&sel("h1")).next())
        .map(element_text)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Sri Lanka Prosperity Index".to_string());

    let reports: Vec<String> = doc
        .select(&sel("div.field-item li"))
        .map(element_text)
        .filter(|t| !t.is_empty())
        .collect();

    (title, reports)
}
