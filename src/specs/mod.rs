// src/specs/mod.rs
//! # Page-specific scraping specs
//!
//! One module per CBSL page/endpoint. Each spec encodes *where the ground
//! truth lives* on its page and *how to extract it robustly*:
//!
//! - **Pure fetching + parsing** for one remote page (HTML table, rendered
//!   text block, WebForms result grid, spreadsheet, or PDF note).
//! - **Selector choice & precedence** (e.g. policy rates prefer the page-text
//!   regex, then fall back to scanning every table's two-cell rows).
//! - **Normalization** through `core::sanitize` / `core::dates` so every spec
//!   emits ISO dates and plain decimal strings.
//! - **Light shaping** into a `TableBundle` (headers + string rows).
//!
//! What does **not** live here:
//! - Caching/persistence (`store::save_dataset` / `store::load_dataset`);
//!   handled by `scrape::collect_*` and the GUI pages.
//! - GUI concerns, filtering, or export formatting.
//! - Cross-page merging; merge policy lives with the page owner
//!   (`Page::merge` implementations).
//!
//! Typical call chain:
//! ```text
//! GUI / CLI → scrape::collect_* → specs::<page>::fetch()
//!                              ↘ returns TableBundle
//!                  store::save_dataset (outside of specs)
//! ```
//!
//! Specs are testable offline: the parsing halves take plain strings/bytes
//! and are exercised against captured fixtures in `tests/`.

pub mod eresearch;
pub mod exchange_rates;
pub mod inflation;
pub mod money_supply;
pub mod policy_rates;
pub mod prices_wages;
pub mod prosperity;

/// Raw scraped table: headers + string rows, store-compatible.
pub struct TableBundle {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}
