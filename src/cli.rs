// src/cli.rs
use std::env;
use std::error::Error;

use crate::config::options::{ExportFormat, ExportType, PageKind, ScrapeOptions};
use crate::file;
use crate::gui::pages::Page;
use crate::gui::router;
use crate::progress::Progress;
use crate::scrape;
use crate::store;

struct Args {
    pages: Vec<PageKind>,
    all: bool,
    list_pages: bool,
    out: Option<String>,
    format: ExportFormat,
    include_headers: bool,
    per_series: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            pages: Vec::new(),
            all: false,
            list_pages: false,
            out: None,
            format: ExportFormat::Csv,
            include_headers: true,
            per_series: false,
        }
    }
}

/// Prints scrape progress to stderr.
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        if self.total == 0 {
            eprintln!("  fetched {label}");
        } else {
            eprintln!("  fetched {label} ({}/{})", self.done, self.total);
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_cli()?;

    if args.list_pages {
        for kind in PageKind::ALL {
            println!("{}\t{}", kind.slug(), router::page_for(&kind).title());
        }
        return Ok(());
    }

    let pages: Vec<PageKind> = if args.all {
        PageKind::ALL.to_vec()
    } else if !args.pages.is_empty() {
        args.pages.clone()
    } else {
        return Err("Specify --page <name> or --all (see --help)".into());
    };

    for kind in pages {
        let page = router::page_for(&kind);
        eprintln!("Scraping {}…", page.title());

        let mut prog = CliProgress { done: 0, total: 0 };
        let new_ds = scrape::run(&ScrapeOptions { page: kind }, Some(&mut prog))?;

        // Merge into the cache like the GUI does, so CLI runs upsert
        // instead of clobbering history.
        let mut ds = store::load_dataset(&kind).unwrap_or_default();
        if ds.is_empty() || !page.validate_cache(&ds) {
            ds = store::DataSet::default();
        }
        page.merge(&mut ds, new_ds);
        let path = store::save_dataset(&kind, &ds)?;
        eprintln!("  cached {} rows → {}", ds.row_count(), path.display());

        if args.out.is_some() {
            let mut export = crate::config::options::ExportOptions::default();
            export.format = args.format.clone();
            export.include_headers = args.include_headers;
            export.export_type = if args.per_series {
                ExportType::PerSeries
            } else {
                ExportType::SingleFile
            };
            export.set_default_dir_for_page(kind);
            if let Some(out) = &args.out {
                export.set_path(out);
            }

            let series_col = if args.per_series { page.series_column() } else { None };
            let written = file::export_dataset(&export, &ds.headers, &ds.rows, series_col)?;
            for p in &written {
                println!("{}", p.display());
            }
        }
    }

    Ok(())
}

fn parse_cli() -> Result<Args, Box<dyn Error>> {
    let mut out = Args::default();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--page" | "-p" => {
                let v = args.next().ok_or("Missing value for --page")?;
                let kind = PageKind::from_slug(&v)
                    .ok_or_else(|| format!("Unknown page: {} (try --list-pages)", v))?;
                out.pages.push(kind);
            }
            "--all" | "-a" => out.all = true,
            "--list-pages" => out.list_pages = true,
            "-o" | "--out" => {
                out.out = Some(args.next().ok_or("Missing output path")?);
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                out.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--no-headers" => out.include_headers = false,
            "--per-series" => out.per_series = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(out)
}
