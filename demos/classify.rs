//! Brand and issuer classification example.
//!
//! Run with: `cargo run --example classify`

use cardcheck::{BrandTable, Classifier, IssuerTable};

const BRANDS: &str = "\
VISA: 4
MASTERCARD: 51
AMEX: 34
";

const ISSUERS: &str = "\
Kaspi Gold: 440043
Halyk Bonus: 440563
Halyk Bonus: 4405639
Forte Blue: 517792
";

fn main() {
    println!("=== Classification ===\n");

    let brands = BrandTable::parse(BRANDS).unwrap();
    let issuers = IssuerTable::parse(ISSUERS).unwrap();
    println!("  Loaded {} brands, {} issuers\n", brands.len(), issuers.len());

    let classifier = Classifier::new(&brands, &issuers);
    let numbers = [
        "4400430180300003",
        "4400430180300004",
        "79927398713",
        "4532015112830366",
    ];

    for number in numbers {
        println!("{}", number);
        println!("{}\n", classifier.classify(number));
    }
}
