//! Card classification against brand and issuer tables.
//!
//! A number that fails the Luhn check is never looked up. Otherwise the
//! brand is the first brand whose prefix matches, and the issuer is the owner
//! of the longest matching issuer prefix. All matching is a literal prefix
//! test on the raw string.

use std::fmt;

use crate::luhn;
use crate::tables::{BrandTable, IssuerTable};

/// Label printed when no brand or issuer matches.
pub const NO_MATCH: &str = "-";

/// Classification of a single number.
///
/// # Example
///
/// ```
/// use cardcheck::classify::classify;
/// use cardcheck::tables::{BrandTable, IssuerTable};
///
/// let brands = BrandTable::parse("VISA: 4").unwrap();
/// let issuers = IssuerTable::parse("Kaspi Gold: 440043").unwrap();
///
/// let info = classify("4400430180300003", &brands, &issuers);
/// assert!(info.valid);
/// assert_eq!(info.brand_label(), "VISA");
/// assert_eq!(info.issuer_label(), "Kaspi Gold");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct CardInfo {
    /// Whether the number passed the Luhn check.
    pub valid: bool,
    /// Matching brand, if any.
    pub brand: Option<String>,
    /// Matching issuer, if any.
    pub issuer: Option<String>,
}

impl CardInfo {
    /// The brand name, or `-` if none matched.
    pub fn brand_label(&self) -> &str {
        self.brand.as_deref().unwrap_or(NO_MATCH)
    }

    /// The issuer name, or `-` if none matched.
    pub fn issuer_label(&self) -> &str {
        self.issuer.as_deref().unwrap_or(NO_MATCH)
    }
}

impl fmt::Display for CardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Correct: {}\nCard Brand: {}\nCard Issuer: {}",
            if self.valid { "yes" } else { "no" },
            self.brand_label(),
            self.issuer_label()
        )
    }
}

/// Classifies `number` against the given tables.
pub fn classify(number: &str, brands: &BrandTable, issuers: &IssuerTable) -> CardInfo {
    if !luhn::is_valid(number) {
        return CardInfo::default();
    }

    CardInfo {
        valid: true,
        brand: brands.match_prefix(number).map(str::to_string),
        issuer: issuers.longest_match(number).map(str::to_string),
    }
}

/// Tables bundled for repeated classification.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    brands: &'a BrandTable,
    issuers: &'a IssuerTable,
}

impl<'a> Classifier<'a> {
    /// Creates a classifier over the given tables.
    pub fn new(brands: &'a BrandTable, issuers: &'a IssuerTable) -> Self {
        Self { brands, issuers }
    }

    /// Classifies a single number.
    pub fn classify(&self, number: &str) -> CardInfo {
        classify(number, self.brands, self.issuers)
    }

    /// Classifies each number, in order.
    pub fn classify_all<S: AsRef<str>>(&self, numbers: &[S]) -> Vec<CardInfo> {
        numbers.iter().map(|n| self.classify(n.as_ref())).collect()
    }
}
