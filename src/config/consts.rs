// src/config/consts.rs

// Net config
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/120 Safari/537.36";
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// CBSL pages
pub const PLRATES_URL: &str = "https://www.cbsl.gov.lk/cbsl_custom/param/plrates.php";
pub const POLICY_RATES_URL: &str = "https://www.cbsl.gov.lk/en/rates-and-indicators/policy-rates";
pub const HISTORICAL_RATES_XLSX_URL: &str = "https://www.cbsl.gov.lk/sites/default/files/cbslweb_documents/about/20250522_historical_policy_interest_rates.xlsx";
pub const INFLATION_WINDOW_URL: &str =
    "https://www.cbsl.gov.lk/cbsl_custom/inflation/inflationwindow.php";
pub const INFLATION_PRESS_URL: &str =
    "https://www.cbsl.gov.lk/en/measures-of-consumer-price-inflation";
pub const PROSPERITY_PAGE_URL: &str =
    "https://www.cbsl.gov.lk/statistics/economic-indicators/srilanka-prosperity-index";
pub const PROSPERITY_PDF_BASE_URL: &str = "https://www.cbsl.gov.lk/sites/default/files/cbslweb_documents/statistics/note_sri_lanka_prosperity_index_{}_e.pdf";
pub const PROSPERITY_PDF_2021_URL: &str = "https://www.cbsl.gov.lk/sites/default/files/cbslweb_documents/press/pr/press_20221230_sri_lanka_prosperity_index_2021_e.pdf";
pub const PRICES_WAGES_URL: &str =
    "https://www.cbsl.gov.lk/en/statistics/statistical-tables/real-sector/prices-wages-employment";

// eResearch portal (WebForms wizard)
pub const ERESEARCH_URL: &str = "https://www.cbsl.lk/eResearch/";
pub const EXCHANGE_SUBJECT_ID: &str =
    "ContentPlaceHolder1_grdSubjects_ExternalSector_chkIsSelect_4";
pub const MONEY_SUBJECT_ID: &str =
    "ContentPlaceHolder1_grdSubjects_MonitorySector_chkIsSelect_0";
pub const EXCHANGE_WINDOW_DAYS: i64 = 30;
pub const MONEY_WINDOW_DAYS: i64 = 180;

// Prosperity index coverage
pub const SLPI_FIRST_YEAR: i32 = 2015;
pub const SLPI_LAST_NOTE_YEAR: i32 = 2020;
pub const SLPI_PRESS_YEAR: i32 = 2021;

// Local cache
pub const DATA_DIR: &str = "data";
pub const DOWNLOADS_SUBDIR: &str = "downloads";
pub const PRESS_LINKS_FILE: &str = "inflation_press_links.csv";
pub const PROSPERITY_REPORTS_FILE: &str = "prosperity_reports.csv";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "all";

// Scrape
pub const REQUEST_PAUSE_MS: u64 = 500; // be polite between file downloads
