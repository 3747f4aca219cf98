//! Brand and issuer classification tables.
//!
//! Both tables are loaded from plain text with one `name: prefix` entry per
//! line. Whitespace around each part is trimmed. Lines that do not split into
//! exactly two non-empty parts are skipped.
//!
//! Tables keep entries in load order, which decides tie-breaking during
//! classification.
//!
//! # Example
//!
//! ```
//! use cardcheck::tables::{BrandTable, IssuerTable};
//!
//! let brands = BrandTable::parse("VISA: 4\nMASTERCARD: 51\n").unwrap();
//! assert_eq!(brands.get("VISA"), Some("4"));
//!
//! let issuers = IssuerTable::parse("Kaspi: 440043\nKaspi: 440044\n").unwrap();
//! assert_eq!(issuers.get("Kaspi").unwrap().len(), 2);
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::TableError;

/// Brand name to single prefix, in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandTable {
    entries: Vec<(String, String)>,
}

impl BrandTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a brand table from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| TableError::io(Some(path.to_path_buf()), e))?;
        Self::load(file, Some(path))
    }

    /// Loads a brand table from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        Self::load(reader, None)
    }

    /// Loads a brand table from a string.
    pub fn parse(text: &str) -> Result<Self, TableError> {
        Self::from_reader(text.as_bytes())
    }

    fn load<R: Read>(reader: R, path: Option<&Path>) -> Result<Self, TableError> {
        let mut table = Self::new();
        for_each_entry(reader, path, |name, prefix| {
            tracing::debug!(brand = name, prefix, "loaded brand");
            table.insert(name, prefix);
        })?;
        Ok(table)
    }

    /// Sets the prefix for a brand.
    ///
    /// A brand that is already present keeps its position and takes the
    /// new prefix. An empty name or prefix is ignored, since an empty prefix
    /// would match every number.
    pub fn insert(&mut self, name: impl Into<String>, prefix: impl Into<String>) {
        let name = name.into();
        let prefix = prefix.into();
        if name.is_empty() || prefix.is_empty() {
            tracing::trace!(brand = name.as_str(), "ignoring brand with empty field");
            return;
        }
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = prefix,
            None => self.entries.push((name, prefix)),
        }
    }

    /// Returns the prefix registered for a brand.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p.as_str())
    }

    /// Returns the first brand, in load order, whose prefix starts `number`.
    pub fn match_prefix(&self, number: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, prefix)| {
                tracing::trace!(brand = name.as_str(), prefix = prefix.as_str(), "checking brand");
                number.starts_with(prefix.as_str())
            })
            .map(|(name, _)| name.as_str())
    }

    /// Iterates over `(brand, prefix)` pairs in load order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), p.as_str()))
    }

    /// Number of brands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no brands are loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for BrandTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, prefix) in iter {
            table.insert(name, prefix);
        }
        table
    }
}

/// Issuer name to its prefixes, in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssuerTable {
    entries: Vec<(String, Vec<String>)>,
}

impl IssuerTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads an issuer table from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| TableError::io(Some(path.to_path_buf()), e))?;
        Self::load(file, Some(path))
    }

    /// Loads an issuer table from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        Self::load(reader, None)
    }

    /// Loads an issuer table from a string.
    pub fn parse(text: &str) -> Result<Self, TableError> {
        Self::from_reader(text.as_bytes())
    }

    fn load<R: Read>(reader: R, path: Option<&Path>) -> Result<Self, TableError> {
        let mut table = Self::new();
        for_each_entry(reader, path, |name, prefix| {
            tracing::debug!(issuer = name, prefix, "loaded issuer");
            table.insert(name, prefix);
        })?;
        Ok(table)
    }

    /// Appends a prefix to an issuer's list. Duplicates are kept; an empty
    /// name or prefix is ignored.
    pub fn insert(&mut self, name: impl Into<String>, prefix: impl Into<String>) {
        let name = name.into();
        let prefix = prefix.into();
        if name.is_empty() || prefix.is_empty() {
            tracing::trace!(issuer = name.as_str(), "ignoring issuer with empty field");
            return;
        }
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1.push(prefix),
            None => self.entries.push((name, vec![prefix])),
        }
    }

    /// Returns the prefixes registered for an issuer.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p.as_slice())
    }

    /// Returns true if the issuer is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the issuer owning the longest prefix that starts `number`.
    ///
    /// Length is measured on the raw prefix string. Among equally long
    /// matches the first one in load order wins. A zero-length prefix never
    /// matches.
    pub fn longest_match(&self, number: &str) -> Option<&str> {
        let mut best = None;
        let mut best_len = 0;

        for (issuer, prefixes) in &self.entries {
            for prefix in prefixes {
                tracing::trace!(issuer = issuer.as_str(), prefix = prefix.as_str(), "checking issuer");
                if !number.starts_with(prefix.as_str()) {
                    continue;
                }
                if prefix.len() > best_len {
                    best = Some(issuer.as_str());
                    best_len = prefix.len();
                }
            }
        }

        best
    }

    /// Iterates over `(issuer, prefixes)` pairs in load order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(n, p)| (n.as_str(), p.as_slice()))
    }

    /// Number of issuers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no issuers are loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for IssuerTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, prefix) in iter {
            table.insert(name, prefix);
        }
        table
    }
}

/// Feeds every well-formed `name: prefix` line to `f`.
///
/// Only I/O failures are errors; malformed lines are skipped.
fn for_each_entry<R, F>(reader: R, path: Option<&Path>, mut f: F) -> Result<(), TableError>
where
    R: Read,
    F: FnMut(&str, &str),
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b':')
        .quoting(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    for result in csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => match err.into_kind() {
                csv::ErrorKind::Io(e) => {
                    return Err(TableError::io(path.map(Path::to_path_buf), e));
                }
                kind => {
                    tracing::trace!(error = ?kind, "skipping unreadable line");
                    continue;
                }
            },
        };

        if record.len() != 2 || record[0].is_empty() || record[1].is_empty() {
            tracing::trace!(line = ?record, "skipping malformed line");
            continue;
        }

        f(&record[0], &record[1]);
    }

    Ok(())
}
