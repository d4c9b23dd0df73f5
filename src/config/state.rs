// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PriceIndex {
    Ccpi,
    Ncpi,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InflationMeasure {
    Headline,
    Core,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active page index into router::PAGES
    pub current_page_index: usize,

    // Policy Rates page
    pub policy_show_sdfr: bool,
    pub policy_show_slfr: bool,
    pub policy_show_srr: bool,

    // Exchange Rates page
    pub fx_currency: String,

    // Inflation page
    pub inflation_index: PriceIndex,
    pub inflation_measure: InflationMeasure,

    // Money Supply page
    pub money_indicator: String,

    // Prices & Wages page
    pub wages_series: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            current_page_index: 0,
            policy_show_sdfr: true,
            policy_show_slfr: true,
            policy_show_srr: false,
            fx_currency: String::new(),
            inflation_index: PriceIndex::Ccpi,
            inflation_measure: InflationMeasure::Headline,
            money_indicator: String::new(),
            wages_series: String::new(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
