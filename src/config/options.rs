// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    PolicyRates,
    ExchangeRates,
    Inflation,
    MoneySupply,
    ProsperityIndex,
    PricesWages,
}

impl PageKind {
    pub const ALL: [PageKind; 6] = [
        PageKind::PolicyRates,
        PageKind::ExchangeRates,
        PageKind::Inflation,
        PageKind::MoneySupply,
        PageKind::ProsperityIndex,
        PageKind::PricesWages,
    ];

    /// Short name used for CLI `--page` and cache file stems.
    pub fn slug(&self) -> &'static str {
        match self {
            PageKind::PolicyRates => "policy_rates",
            PageKind::ExchangeRates => "exchange_rates",
            PageKind::Inflation => "inflation",
            PageKind::MoneySupply => "money_supply",
            PageKind::ProsperityIndex => "prosperity_index",
            PageKind::PricesWages => "prices_wages",
        }
    }

    pub fn from_slug(s: &str) -> Option<PageKind> {
        PageKind::ALL
            .iter()
            .copied()
            .find(|k| k.slug().eq_ignore_ascii_case(s))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub page: PageKind,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self { page: PageKind::PolicyRates }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportType {
    SingleFile,
    PerSeries,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }
    pub fn delim(&self) -> u8 {
        match self {
            ExportFormat::Csv => b',',
            ExportFormat::Tsv => b'\t',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub export_type: ExportType,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            export_type: ExportType::SingleFile,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        match self.export_type {
            ExportType::SingleFile => {
                let stem = self.out_path.file_stem.to_string_lossy();
                path.push(format!("{}.{}", stem, self.format.ext()));
            }
            ExportType::PerSeries => { /* directory only */ }
        }
        path
    }

    /// Parse GUI text into dir + stem. Ignores pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        match self.export_type {
            ExportType::SingleFile => {
                let p = Path::new(s);
                if let Some(parent) = p.parent() {
                    self.out_path.dir = parent.to_path_buf();
                }
                if let Some(stem) = p.file_stem() {
                    self.out_path.file_stem = stem.to_os_string();
                }
            }
            ExportType::PerSeries => {
                self.out_path.dir = PathBuf::from(s);
            }
        }
    }

    pub fn default_dir_for(kind: PageKind) -> PathBuf {
        PathBuf::from(DEFAULT_OUT_DIR).join(kind.slug())
    }

    pub fn set_default_dir_for_page(&mut self, kind: PageKind) {
        self.out_path.dir = Self::default_dir_for(kind);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: ExportOptions::default_dir_for(PageKind::PolicyRates),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
