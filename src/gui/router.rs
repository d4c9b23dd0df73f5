// src/gui/router.rs
use crate::config::options::PageKind::{self, *};

use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::policy_rates::PAGE,
    &pages::exchange_rates::PAGE,
    &pages::inflation::PAGE,
    &pages::money_supply::PAGE,
    &pages::prosperity::PAGE,
    &pages::prices_wages::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: &PageKind) -> &'static dyn Page {
    match kind {
        PolicyRates => &pages::policy_rates::PAGE,
        ExchangeRates => &pages::exchange_rates::PAGE,
        Inflation => &pages::inflation::PAGE,
        MoneySupply => &pages::money_supply::PAGE,
        ProsperityIndex => &pages::prosperity::PAGE,
        PricesWages => &pages::prices_wages::PAGE,
    }
}
