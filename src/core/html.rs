// src/core/html.rs

// Small helpers over the `scraper` crate shared by the page specs.
// Selectors here are the generic ones; page-specific selectors live with
// the spec that owns them.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::sanitize::normalize_ws;

/// Parse a CSS selector known at compile time.
/// Only call with literals that are valid CSS; invalid input is a programmer error.
pub fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Flattened, whitespace-normalized text of an element.
pub fn element_text(el: ElementRef) -> String {
    normalize_ws(&el.text().collect::<Vec<_>>().join(" "))
}

/// Flattened text of the whole document, one line per text node.
/// Mirrors what a rendered-text scrape sees (the inflation window is a text
/// blob, not a table).
pub fn document_text(doc: &Html) -> String {
    let mut out = String::new();
    for t in doc.root_element().text() {
        let t = t.trim();
        if t.is_empty() {
            continue;
        }
        out.push_str(t);
        out.push('\n');
    }
    out
}

/// All `<table>` elements matching `css`, as rows of cell texts
/// (both `<td>` and `<th>` count as cells).
pub fn table_rows(table: ElementRef) -> Vec<Vec<String>> {
    let tr = sel("tr");
    let cell = sel("td, th");
    let mut rows = Vec::new();
    for row in table.select(&tr) {
        let cells: Vec<String> = row.select(&cell).map(element_text).collect();
        if !cells.is_empty() {
            rows.push(cells);
        }
    }
    rows
}

/// First table in `doc` matching `css`, if any.
pub fn find_table<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    doc.select(&sel(css)).next()
}

/// Resolve `href` against `base`, dropping fragments. None for
/// javascript:/mailto:/tel: pseudo links.
pub fn resolve_link(base: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty()
        || href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
    {
        return None;
    }
    let base = Url::parse(base).ok()?;
    let mut joined = base.join(href).ok()?;
    joined.set_fragment(None);
    Some(joined.to_string())
}

/// Hidden form inputs (name, value): the WebForms state fields.
pub fn hidden_inputs(doc: &Html) -> Vec<(String, String)> {
    let input = sel(r#"input[type="hidden"]"#);
    doc.select(&input)
        .filter_map(|el| {
            let name = el.value().attr("name")?;
            let value = el.value().attr("value").unwrap_or("");
            Some((name.to_string(), value.to_string()))
        })
        .collect()
}

/// `name` attribute of the input with the given `id`, if present.
pub fn input_name_by_id(doc: &Html, id: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"input[id="{}"]"#, id)).ok()?;
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("name"))
        .map(|s| s.to_string())
}

/// Names of all checkbox inputs whose name ends with `suffix`
/// (the wizard's per-series selection boxes).
pub fn checkbox_names_with_suffix(doc: &Html, suffix: &str) -> Vec<String> {
    let cb = sel(r#"input[type="checkbox"]"#);
    doc.select(&cb)
        .filter_map(|el| el.value().attr("name"))
        .filter(|n| n.ends_with(suffix))
        .map(|n| n.to_string())
        .collect()
}
