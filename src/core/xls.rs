// src/core/xls.rs

// Spreadsheet reading (calamine). CBSL publishes history as .xlsx and the
// statistical tables as legacy .xls; both land here as in-memory bytes.

use std::error::Error;
use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader, Xlsx};
use chrono::NaiveDate;

use super::dates::parse_date;

#[derive(Clone, Debug, PartialEq)]
pub enum XlsCell {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl XlsCell {
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            XlsCell::Date(d) => Some(*d),
            XlsCell::Text(s) => parse_date(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            XlsCell::Number(n) => Some(*n),
            XlsCell::Text(s) => crate::core::sanitize::parse_number(s),
            _ => None,
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            XlsCell::Empty => String::new(),
            XlsCell::Text(s) => s.clone(),
            XlsCell::Number(n) => crate::core::sanitize::format_value(*n),
            XlsCell::Date(d) => super::dates::to_iso(*d),
        }
    }
}

fn convert(d: &Data) -> XlsCell {
    match d {
        Data::Empty => XlsCell::Empty,
        Data::String(s) => {
            let t = crate::core::sanitize::normalize_ws(s);
            if t.is_empty() {
                XlsCell::Empty
            } else {
                XlsCell::Text(t)
            }
        }
        Data::Float(f) => XlsCell::Number(*f),
        Data::Int(i) => XlsCell::Number(*i as f64),
        Data::Bool(b) => XlsCell::Number(if *b { 1.0 } else { 0.0 }),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => XlsCell::Date(ndt.date()),
            None => XlsCell::Empty,
        },
        Data::DateTimeIso(s) => match parse_date(s) {
            Some(d) => XlsCell::Date(d),
            None => XlsCell::Text(s.clone()),
        },
        Data::DurationIso(s) => XlsCell::Text(s.clone()),
        Data::Error(_) => XlsCell::Empty,
    }
}

/// One named sheet of an .xlsx as cell rows.
pub fn xlsx_sheet(bytes: &[u8], sheet: &str) -> Result<Vec<Vec<XlsCell>>, Box<dyn Error>> {
    let mut wb: Xlsx<_> = Xlsx::new(Cursor::new(bytes.to_vec()))?;
    let range = wb.worksheet_range(sheet)?;
    Ok(range
        .rows()
        .map(|r| r.iter().map(convert).collect())
        .collect())
}

/// Every sheet of any supported workbook format (.xls, .xlsx, .xlsm).
pub fn workbook_sheets(bytes: &[u8]) -> Result<Vec<(String, Vec<Vec<XlsCell>>)>, Box<dyn Error>> {
    let mut wb = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
    let names = wb.sheet_names().to_vec();
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        let range = wb.worksheet_range(&name)?;
        let rows: Vec<Vec<XlsCell>> = range
            .rows()
            .map(|r| r.iter().map(convert).collect())
            .collect();
        out.push((name, rows));
    }
    Ok(out)
}
