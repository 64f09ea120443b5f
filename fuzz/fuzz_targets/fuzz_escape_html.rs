//! Fuzz target: HTML escaping of API-provided text.
//!
//! Escaped output must never contain a raw markup character.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let escaped = roster_core::escape_html(&text);
    assert!(
        !escaped.contains(['<', '>', '"', '\'']),
        "escaped text leaked markup: {escaped:?}"
    );
});
