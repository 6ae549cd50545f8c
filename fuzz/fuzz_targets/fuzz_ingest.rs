#![no_main]

use hgss_breed::ingest::ingest_save;
use hgss_breed::roster::{format_roster_rows, parse_roster, ROSTER_HEADER};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic, only degrade to fewer parents
    let parents = ingest_save(data, &[]);

    // Whatever was ingested must survive the roster format
    let breaks_csv = |s: &str| s.contains([',', '\n', '\r']);
    if parents.iter().any(|p| {
        breaks_csv(&p.species) || breaks_csv(&p.ability) || p.language.as_deref().is_some_and(breaks_csv)
    }) {
        return;
    }
    let text = format!("{ROSTER_HEADER}\n{}", format_roster_rows(&parents));
    if let Ok(reloaded) = parse_roster(&text) {
        assert!(reloaded.len() <= parents.len());
    }

    // The CSV parser must also tolerate raw input
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_roster(text);
    }
});
