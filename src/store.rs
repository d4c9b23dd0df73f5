// src/store.rs

// Flat-file cache: one CSV per page kind under the data directory.
// Overwrite on save; no versioning. Every page dataset carries a header row.

use std::error::Error;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::config::consts::DATA_DIR;
use crate::config::options::PageKind;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers: Some(headers), rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a header by name (case-insensitive), if present.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers
            .as_ref()?
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
    }
}

pub fn data_path(kind: &PageKind) -> PathBuf {
    PathBuf::from(DATA_DIR).join(format!("{}.csv", kind.slug()))
}

pub fn named_path(file_name: &str) -> PathBuf {
    PathBuf::from(DATA_DIR).join(file_name)
}

pub fn save_dataset(kind: &PageKind, ds: &DataSet) -> io::Result<PathBuf> {
    let path = data_path(kind);
    write_csv(&path, ds)?;
    Ok(path)
}

pub fn load_dataset(kind: &PageKind) -> Result<DataSet, Box<dyn Error>> {
    read_csv(&data_path(kind))
}

/// Side datasets (e.g. press-release links) live next to the page caches.
pub fn save_named(file_name: &str, ds: &DataSet) -> io::Result<PathBuf> {
    let path = named_path(file_name);
    write_csv(&path, ds)?;
    Ok(path)
}

pub fn load_named(file_name: &str) -> Result<DataSet, Box<dyn Error>> {
    read_csv(&named_path(file_name))
}

fn write_csv(path: &PathBuf, ds: &DataSet) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut w = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    if let Some(h) = &ds.headers {
        w.write_record(h)?;
    }
    for row in &ds.rows {
        w.write_record(row)?;
    }
    w.flush()?;
    Ok(())
}

fn read_csv(path: &PathBuf) -> Result<DataSet, Box<dyn Error>> {
    let mut r = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for rec in r.records() {
        let rec = rec?;
        let cells: Vec<String> = rec.iter().map(|c| c.to_string()).collect();
        if cells.iter().all(|c| c.is_empty()) {
            continue;
        }
        if headers.is_none() {
            headers = Some(cells);
        } else {
            rows.push(cells);
        }
    }
    Ok(DataSet { headers, rows })
}
