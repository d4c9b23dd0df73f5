// benches/inflation.rs
//
// The inflation-window parser runs over a few KB of rendered text on every
// refresh; keep an eye on regex cost.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cbsl_scrape::specs::inflation::parse_window_text;

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

fn fixture() -> String {
    let mut out = String::from("CCPI and NCPI based headline and core inflation\n");
    for year in (2020..=2025).rev() {
        out.push_str(&format!("{year}\n"));
        for (i, m) in MONTHS.iter().enumerate() {
            let v = (i as f64) - 4.0;
            out.push_str(&format!(
                "{m} {:.1} {:.1} {:.1} {:.1}\n",
                v,
                v * 0.5,
                v + 0.3,
                v * 0.4
            ));
        }
    }
    out
}

fn bench_parse_window(c: &mut Criterion) {
    let text = fixture();
    c.bench_function("parse_window_text", |b| {
        b.iter(|| parse_window_text(black_box(&text)))
    });
}

criterion_group!(benches, bench_parse_window);
criterion_main!(benches);
