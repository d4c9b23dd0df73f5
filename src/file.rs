// src/file.rs

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::options::{ExportOptions, ExportType};
use crate::core::sanitize::sanitize_filename;

/// Render headers + rows in the selected format. Used for clipboard copy
/// and as the single write path for exports.
pub fn to_export_string(
    export: &ExportOptions,
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
) -> String {
    let mut w = csv::WriterBuilder::new()
        .delimiter(export.format.delim())
        .flexible(true)
        .from_writer(Vec::new());

    if export.include_headers {
        if let Some(h) = headers {
            let _ = w.write_record(h);
        }
    }
    for r in rows {
        let _ = w.write_record(r);
    }

    match w.into_inner() {
        Ok(buf) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => String::new(),
    }
}

/// Write a single export file based on ExportOptions (path, headers policy,
/// delimiter). Returns the final path written to.
pub fn write_export_single(
    export: &ExportOptions,
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(&path, to_export_string(export, headers, rows))?;
    Ok(path)
}

/// Write one file per distinct value of `series_col` into the directory
/// implied by `export.out_path()` (export_type must be PerSeries).
pub fn write_export_per_series(
    export: &ExportOptions,
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    series_col: usize,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let outdir = export.out_path();
    ensure_directory(&outdir)?;

    let mut by_series: HashMap<String, Vec<Vec<String>>> = HashMap::new();
    for r in rows {
        if let Some(series) = r.get(series_col) {
            by_series.entry(series.clone()).or_default().push(r.clone());
        }
    }

    // Dedup stems within this run
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::with_capacity(by_series.len());
    let ext = export.format.ext();

    for (series, series_rows) in by_series {
        let stem = sanitize_filename(&series);
        let path = resolve_series_filename(&outdir, &stem, &mut seen, ext);
        fs::write(&path, to_export_string(export, headers, &series_rows))?;
        written.push(path);
    }

    written.sort();
    Ok(written)
}

/// Dispatch on the export type; `series_col` is the page's grouping column.
pub fn export_dataset(
    export: &ExportOptions,
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    series_col: Option<usize>,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    match (&export.export_type, series_col) {
        (ExportType::SingleFile, _) | (ExportType::PerSeries, None) => {
            write_export_single(export, headers, rows).map(|p| vec![p])
        }
        (ExportType::PerSeries, Some(col)) => {
            write_export_per_series(export, headers, rows, col)
        }
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Duplicate handling **only within this run**
fn resolve_series_filename(
    dir: &Path,
    stem: &str,
    seen_names: &mut HashMap<String, usize>,
    ext: &str,
) -> PathBuf {
    let count = seen_names.entry(stem.to_string()).or_insert(0);
    // First occurrence: "<stem>.ext"; subsequent: "<stem> (N).ext" from 2
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };
    *count += 1;
    dir.join(filename)
}
