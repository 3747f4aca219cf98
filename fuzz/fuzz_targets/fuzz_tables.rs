//! Fuzz target for table loading and classification.

#![no_main]

use cardcheck::{classify, BrandTable, IssuerTable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (table, number) = data;

    let brands = BrandTable::parse(table).expect("in-memory source cannot fail");
    let issuers = IssuerTable::parse(table).expect("in-memory source cannot fail");

    for (_, prefix) in brands.iter() {
        assert!(!prefix.is_empty());
    }

    let first = classify(number, &brands, &issuers);
    let second = classify(number, &brands, &issuers);
    assert_eq!(first, second);
});
