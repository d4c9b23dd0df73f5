// src/core/sanitize.rs

/// Collapse runs of whitespace (incl. NBSP) to single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() || ch == '\u{a0}' {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Replace the unicode minus/dash variants CBSL pages mix in with ASCII '-'.
pub fn normalize_minus(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\u{2212}' | '\u{2013}' | '\u{2014}' | '\u{2012}' | '\u{fe63}' | '\u{ff0d}' => {
                out.push('-')
            }
            '\u{a0}' => out.push(' '),
            _ => out.push(ch),
        }
    }
    out
}

/// Parse a numeric cell: tolerates thousands separators, a trailing '%',
/// and unicode minus. `--`, `—`, empty and other placeholders are None.
pub fn parse_number(s: &str) -> Option<f64> {
    let t = normalize_ws(&normalize_minus(s));
    if t.is_empty() || t == "--" || t == "-" || t.eq_ignore_ascii_case("n/a") {
        return None;
    }
    let t = t.trim_end_matches('%').replace(',', "");
    let t = t.trim();
    t.parse::<f64>().ok()
}

/// File-system-safe stem for a downloaded file or series name.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '.' || ch == '-' || ch == '(' || ch == ')' {
            out.push(ch);
            last_us = false;
        } else if !last_us {
            out.push('_');
            last_us = true;
        }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() {
        "file".to_string()
    } else {
        out.chars().take(200).collect()
    }
}

/// Format a float the way the store keeps values: no trailing zeros noise,
/// up to 4 decimal places.
pub fn format_value(v: f64) -> String {
    let s = format!("{:.4}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_with_noise() {
        assert_eq!(parse_number("1,520.5"), Some(1520.5));
        assert_eq!(parse_number(" 7.75 % "), Some(7.75));
        assert_eq!(parse_number("\u{2212}4.0"), Some(-4.0));
        assert_eq!(parse_number("--"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("n/a"), None);
    }

    #[test]
    fn value_formatting_drops_trailing_zeros() {
        assert_eq!(format_value(295.10), "295.1");
        assert_eq!(format_value(216.0), "216");
        assert_eq!(format_value(-0.25), "-0.25");
    }
}
