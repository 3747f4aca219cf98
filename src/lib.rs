//! # cardcheck
//!
//! Luhn validation, templated test-number generation and prefix-based
//! brand/issuer classification for card-like numbers. Meant for exercising
//! card-handling code paths in tests, not for payment processing.
//!
//! ## Features
//!
//! - Luhn checksum over raw strings
//! - Batch validation with a minimum-length policy
//! - Expansion of `****` templates into every Luhn-valid completion
//! - Brand (first match) and issuer (longest prefix) classification from
//!   `name: prefix` tables
//! - Command-line tool (`cli` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use cardcheck::{is_valid, validate_batch};
//!
//! assert!(is_valid("4532015112830366"));
//! assert!(!is_valid("4532015112830367"));
//!
//! // Numbers shorter than 13 characters are rejected even if they pass Luhn.
//! assert_eq!(validate_batch(&["4532015112830366", "123"]), vec![true, false]);
//! ```
//!
//! ## Template Generation
//!
//! ```rust
//! use cardcheck::Template;
//!
//! let template = Template::parse("453201511283****").unwrap();
//! for number in template.completions() {
//!     assert!(number.starts_with("453201511283"));
//!     assert!(cardcheck::is_valid(&number));
//! }
//!
//! assert!(Template::parse("1234").is_err());
//! ```
//!
//! ## Classification
//!
//! ```rust
//! use cardcheck::{classify, BrandTable, IssuerTable};
//!
//! let brands = BrandTable::parse("VISA: 4\nMASTERCARD: 51\n").unwrap();
//! let issuers = IssuerTable::parse("A: 400\nB: 4000\n").unwrap();
//!
//! let info = classify("4000123456789017", &brands, &issuers);
//! assert_eq!(info.brand_label(), "VISA");
//! assert_eq!(info.issuer_label(), "B");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `json` | `serde::Serialize` for [`CardInfo`] |
//! | `cli` | Command-line tool (enabled by default) |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod classify;
pub mod error;
pub mod generate;
pub mod input;
pub mod luhn;
pub mod tables;

#[cfg(feature = "cli")]
pub mod commands;

// Re-export main types at crate root
pub use batch::{validate_batch, BatchValidator, MIN_LENGTH};
pub use classify::{classify, CardInfo, Classifier};
pub use error::{Error, TableError, TemplateError};
pub use generate::{Generated, Template};
pub use luhn::is_valid;
pub use tables::{BrandTable, IssuerTable};
