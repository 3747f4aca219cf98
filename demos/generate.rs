//! Template generation example.
//!
//! Run with: `cargo run --example generate`

use cardcheck::generate::{rng_from_seed, Template};
use cardcheck::is_valid;

fn main() {
    println!("=== Template Generation ===\n");

    // -------------------------------------------------------------------------
    // Expand a template
    // -------------------------------------------------------------------------
    println!("--- All Completions ---\n");

    let template = Template::parse("453201511283****").unwrap();
    let numbers = template.completions();
    println!("  Prefix: {}", template.prefix());
    println!("  Valid completions: {} of 10000", numbers.len());
    for number in numbers.iter().take(5) {
        println!("    {} (valid: {})", number, if is_valid(number) { "yes" } else { "no" });
    }
    println!("    ...\n");

    // -------------------------------------------------------------------------
    // Random pick (seeded for reproducible output)
    // -------------------------------------------------------------------------
    println!("--- Seeded Pick ---\n");

    for seed in [1, 2, 3] {
        let picked = template.pick(&mut rng_from_seed(Some(seed)));
        println!("  seed {}: {}", seed, picked.unwrap_or_default());
    }
    println!();

    // -------------------------------------------------------------------------
    // Malformed templates
    // -------------------------------------------------------------------------
    println!("--- Malformed Templates ---\n");

    for input in ["1234", "1234***", "12*4****"] {
        match Template::parse(input) {
            Ok(_) => println!("  {:10} accepted", input),
            Err(e) => println!("  {:10} {}", input, e),
        }
    }
}
