//! Fuzz target for the Luhn checksum.
//!
//! Tests that the checksum never panics and maintains invariants.

#![no_main]

use cardcheck::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Raw strings must never panic
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = luhn::is_valid(s);
    }

    // Clamp values to valid digit range
    let digits: String = data.iter().map(|&b| (b'0' + b % 10) as char).collect();
    if digits.is_empty() || digits.len() > 18 {
        return;
    }

    let valid = (0..10)
        .filter(|d| luhn::is_valid(&format!("{}{}", digits, d)))
        .count();
    assert_eq!(valid, 1, "exactly one check digit should complete {}", digits);

    let tainted = format!("{}x", digits);
    assert!(!luhn::is_valid(&tainted), "non-digit should fail the check");
});
