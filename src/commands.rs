//! The command-line operations.
//!
//! Each command writes its report to the given writers and returns an
//! [`Outcome`]; fatal conditions come back as [`Error`]. Turning either into
//! a process exit status is left to the binary.
//!
//! Requires the `cli` feature.

use std::io::{self, Write};
use std::path::Path;

use rand::Rng;
use serde::Serialize;

use crate::batch::BatchValidator;
use crate::classify::{CardInfo, Classifier};
use crate::error::Error;
use crate::generate::{self, Generated};
use crate::tables::{BrandTable, IssuerTable};

/// Marker printed for an accepted number.
pub const VALID_MARKER: &str = "OK";

/// Marker printed for a rejected number.
pub const INVALID_MARKER: &str = "INCORRECT";

/// Notice printed when a pick finds nothing to choose from.
pub const NO_VALID_NUMBERS: &str = "No valid numbers generated.";

/// How a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Everything checked out.
    Success,
    /// The command ran, but at least one input was rejected.
    Failure,
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

/// Output format for `information`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Four labelled lines per number.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Validates each number, writing a valid marker to `out` or an invalid
/// marker to `err`, in input order.
pub fn validate<S, W, E>(
    numbers: &[S],
    validator: &BatchValidator,
    out: &mut W,
    err: &mut E,
) -> Result<Outcome, Error>
where
    S: AsRef<str>,
    W: Write,
    E: Write,
{
    let mut outcome = Outcome::Success;

    for valid in validator.validate_all(numbers) {
        if valid {
            writeln!(out, "{}", VALID_MARKER)?;
        } else {
            writeln!(err, "{}", INVALID_MARKER)?;
            outcome = Outcome::Failure;
        }
    }

    tracing::debug!(count = numbers.len(), ?outcome, "validated numbers");
    Ok(outcome)
}

/// Expands a template and writes either every valid completion or one
/// random pick.
pub fn generate<W, R>(template: &str, pick: bool, rng: &mut R, out: &mut W) -> Result<Outcome, Error>
where
    W: Write,
    R: Rng + ?Sized,
{
    write_generated(generate::generate(template, pick, rng)?, out)?;
    Ok(Outcome::Success)
}

/// Loads the brand and issuer tables.
pub fn load_tables(
    brands: impl AsRef<Path>,
    issuers: impl AsRef<Path>,
) -> Result<(BrandTable, IssuerTable), Error> {
    let brands = BrandTable::from_file(brands)?;
    let issuers = IssuerTable::from_file(issuers)?;
    tracing::info!(brands = brands.len(), issuers = issuers.len(), "loaded tables");
    Ok((brands, issuers))
}

#[derive(Serialize)]
struct InformationRecord<'a> {
    number: &'a str,
    #[serde(flatten)]
    info: &'a CardInfo,
}

/// Classifies each number and writes a report for it.
pub fn information<S, W>(
    numbers: &[S],
    brands: &BrandTable,
    issuers: &IssuerTable,
    format: OutputFormat,
    out: &mut W,
) -> Result<Outcome, Error>
where
    S: AsRef<str>,
    W: Write,
{
    if numbers.is_empty() {
        return Err(Error::NoNumbers);
    }

    let classifier = Classifier::new(brands, issuers);

    for number in numbers {
        let number = number.as_ref();
        let info = classifier.classify(number);

        match format {
            OutputFormat::Text => {
                writeln!(out, "{}", number)?;
                writeln!(out, "{}", info)?;
            }
            OutputFormat::Json => {
                let record = InformationRecord {
                    number,
                    info: &info,
                };
                serde_json::to_writer(&mut *out, &record).map_err(io::Error::from)?;
                writeln!(out)?;
            }
        }
    }

    Ok(Outcome::Success)
}

/// Generates numbers for a brand after checking that the issuer exists.
///
/// The brand's stored prefix is used as the template, so it must itself end
/// in four wildcards.
pub fn issue<W, R>(
    brands: &BrandTable,
    issuers: &IssuerTable,
    brand: &str,
    issuer: &str,
    pick: bool,
    rng: &mut R,
    out: &mut W,
) -> Result<Outcome, Error>
where
    W: Write,
    R: Rng + ?Sized,
{
    let prefix = brands
        .get(brand)
        .ok_or_else(|| Error::UnknownBrand(brand.to_string()))?;

    if !issuers.contains(issuer) {
        return Err(Error::UnknownIssuer(issuer.to_string()));
    }

    tracing::info!(brand, issuer, prefix, "issuing numbers");
    generate(prefix, pick, rng, out)
}

fn write_generated<W: Write>(generated: Generated, out: &mut W) -> io::Result<()> {
    match generated {
        Generated::All(numbers) => {
            for number in numbers {
                writeln!(out, "{}", number)?;
            }
        }
        Generated::Picked(Some(number)) => writeln!(out, "{}", number)?,
        Generated::Picked(None) => writeln!(out, "{}", NO_VALID_NUMBERS)?,
    }
    Ok(())
}
