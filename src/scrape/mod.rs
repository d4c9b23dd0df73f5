// src/scrape/mod.rs

// Dispatch layer between frontends and the page specs: builds the shared
// HTTP client, reports progress, converts spec bundles into datasets, and
// caches side datasets (press links) best-effort. Synchronous by design:
// one request at a time, on the caller's thread.

use std::error::Error;

use crate::config::consts::{PRESS_LINKS_FILE, PROSPERITY_REPORTS_FILE};
use crate::config::options::{PageKind, ScrapeOptions};
use crate::core::net;
use crate::progress::Progress;
use crate::specs::{self, TableBundle};
use crate::store::{self, DataSet};

fn to_dataset(bundle: TableBundle) -> DataSet {
    DataSet { headers: bundle.headers, rows: bundle.rows }
}

pub fn run(
    scrape: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<DataSet, Box<dyn Error>> {
    match scrape.page {
        PageKind::PolicyRates => collect_policy_rates(progress),
        PageKind::ExchangeRates => collect_exchange_rates(progress),
        PageKind::Inflation => collect_inflation(progress),
        PageKind::MoneySupply => collect_money_supply(progress),
        PageKind::ProsperityIndex => collect_prosperity(progress),
        PageKind::PricesWages => collect_prices_wages(progress),
    }
}

pub fn collect_policy_rates(
    mut progress: Option<&mut dyn Progress>,
) -> Result<DataSet, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching policy rates…");
    }
    let client = net::client()?;
    let ds = to_dataset(specs::policy_rates::fetch(&client)?);
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(ds)
}

pub fn collect_exchange_rates(
    mut progress: Option<&mut dyn Progress>,
) -> Result<DataSet, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Walking the eResearch wizard (exchange rates)…");
    }
    let client = net::client()?;
    let ds = to_dataset(specs::exchange_rates::fetch(&client)?);
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(ds)
}

pub fn collect_inflation(
    mut progress: Option<&mut dyn Progress>,
) -> Result<DataSet, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching inflation window…");
    }
    let client = net::client()?;
    let ds = to_dataset(specs::inflation::fetch(&client)?);

    // Press links ride along; an IO error here never fails the scrape.
    if let Ok(links) = specs::inflation::fetch_press_links(&client) {
        let _ = store::save_named(PRESS_LINKS_FILE, &to_dataset(links));
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(ds)
}

pub fn collect_money_supply(
    mut progress: Option<&mut dyn Progress>,
) -> Result<DataSet, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Walking the eResearch wizard (monetary sector)…");
    }
    let client = net::client()?;
    let ds = to_dataset(specs::money_supply::fetch(&client)?);
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(ds)
}

pub fn collect_prosperity(
    mut progress: Option<&mut dyn Progress>,
) -> Result<DataSet, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching prosperity index notes…");
    }
    let client = net::client()?;
    let ds = to_dataset(specs::prosperity::fetch(&client, progress)?);

    // The page's report list rides along, same as the press links.
    if let Ok((_title, reports)) = specs::prosperity::page_summary(&client) {
        let side = DataSet::new(
            vec!["Report".to_string()],
            reports.into_iter().map(|r| vec![r]).collect(),
        );
        let _ = store::save_named(PROSPERITY_REPORTS_FILE, &side);
    }

    Ok(ds)
}

pub fn collect_prices_wages(
    mut progress: Option<&mut dyn Progress>,
) -> Result<DataSet, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Scanning statistical tables for spreadsheets…");
    }
    let client = net::client()?;
    let ds = to_dataset(specs::prices_wages::fetch(&client, progress)?);
    Ok(ds)
}
