// src/core/dates.rs

// Day-first date parsing across the formats CBSL actually publishes:
// spreadsheet cells ("22/05/2025", "22-May-2025"), eResearch grid headers
// ("2025-05-22", "22 May 2025"), inflation window ("January 2025"),
// prosperity notes (bare years).

use chrono::NaiveDate;

use super::sanitize::normalize_ws;

const DMY_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%d %B %Y",
];

const MONTH_FORMATS: [&str; 2] = ["%b %Y", "%B %Y"];

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let t = normalize_ws(s);
    if t.is_empty() {
        return None;
    }
    for f in DMY_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(&t, f) {
            return Some(d);
        }
    }
    // Month-year strings map to the first of the month.
    for f in MONTH_FORMATS {
        let padded = format!("1 {}", t);
        if let Ok(d) = NaiveDate::parse_from_str(&padded, &format!("%d {}", f)) {
            return Some(d);
        }
    }
    // Bare year → Jan 1.
    if let Ok(y) = t.parse::<i32>() {
        if (1900..=2100).contains(&y) {
            return NaiveDate::from_ymd_opt(y, 1, 1);
        }
    }
    None
}

pub fn month_number(name: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name.trim()))
        .map(|i| i as u32 + 1)
}

/// ISO storage form.
pub fn to_iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dayfirst_variants() {
        let expect = NaiveDate::from_ymd_opt(2025, 5, 22).unwrap();
        for s in ["2025-05-22", "22/05/2025", "22-05-2025", "22-May-2025", "22 May 2025"] {
            assert_eq!(parse_date(s), Some(expect), "{}", s);
        }
    }

    #[test]
    fn parses_month_year_and_bare_year() {
        assert_eq!(
            parse_date("January 2025"),
            NaiveDate::from_ymd_opt(2025, 1, 1)
        );
        assert_eq!(parse_date("2019"), NaiveDate::from_ymd_opt(2019, 1, 1));
        assert_eq!(parse_date("totals"), None);
    }
}
