//! Fuzz target for template parsing.

#![no_main]

use cardcheck::Template;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(template) = Template::parse(data) {
        assert!(!template.prefix().contains('*'));
        assert!(data.trim().ends_with("****"));
    }
});
