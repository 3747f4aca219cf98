//! Test number generation from templates.
//!
//! A template is a partial number whose last four characters are `*`
//! wildcards, e.g. `"453201511283****"`. Generation tries every one of the
//! 10,000 possible endings and keeps the ones that pass the Luhn check.
//!
//! # Example
//!
//! ```
//! use cardcheck::generate::Template;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let template = Template::parse("453201511283****").unwrap();
//! let all = template.completions();
//! assert!(all.iter().all(|n| cardcheck::is_valid(n)));
//!
//! // Picks are reproducible with a seeded generator.
//! let mut rng = StdRng::seed_from_u64(7);
//! let picked = template.pick(&mut rng).unwrap();
//! assert!(all.contains(&picked));
//! ```
//!
//! # Note
//!
//! Generated numbers pass Luhn but are not connected to real accounts.
//! They should only be used for testing.

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::TemplateError;
use crate::luhn;

/// The wildcard marker.
pub const WILDCARD: char = '*';

/// Number of trailing wildcards a template must have.
pub const WILDCARD_COUNT: usize = 4;

/// Number of endings tried per template (10^WILDCARD_COUNT).
const SEARCH_SPACE: u32 = 10_000;

/// A validated generation template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    prefix: String,
}

impl Template {
    /// Parses a template.
    ///
    /// # Arguments
    ///
    /// * `input` - The template text. Surrounding whitespace is trimmed.
    ///
    /// # Returns
    ///
    /// The template with its fixed prefix, or a [`TemplateError`] if the
    /// trimmed text does not end in exactly four `*` characters
    /// ([`TemplateError::WildcardCount`]) or has a `*` anywhere else
    /// ([`TemplateError::MisplacedWildcard`]).
    ///
    /// A prefix containing non-digits is accepted; it simply has no valid
    /// completions.
    ///
    /// # Example
    ///
    /// ```
    /// use cardcheck::{Template, TemplateError};
    ///
    /// let template = Template::parse(" 440043018030**** ").unwrap();
    /// assert_eq!(template.prefix(), "440043018030");
    ///
    /// assert_eq!(
    ///     Template::parse("4400***").unwrap_err(),
    ///     TemplateError::WildcardCount { found: 3 }
    /// );
    /// assert_eq!(
    ///     Template::parse("44*0****").unwrap_err(),
    ///     TemplateError::MisplacedWildcard { position: 2 }
    /// );
    /// ```
    pub fn parse(input: &str) -> Result<Self, TemplateError> {
        let trimmed = input.trim();
        let prefix = trimmed.trim_end_matches(WILDCARD);
        let found = trimmed.len() - prefix.len();

        if found != WILDCARD_COUNT {
            return Err(TemplateError::WildcardCount { found });
        }

        if let Some(position) = prefix.find(WILDCARD) {
            return Err(TemplateError::MisplacedWildcard { position });
        }

        tracing::info!(template = trimmed, prefix, "parsed card template");

        Ok(Self {
            prefix: prefix.to_string(),
        })
    }

    /// Returns the fixed part of the template.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Iterates over every valid completion in ascending order of the
    /// filled-in ending.
    pub fn iter_completions(&self) -> impl Iterator<Item = String> + '_ {
        (0..SEARCH_SPACE)
            .map(move |i| format!("{}{:04}", self.prefix, i))
            .filter(|candidate| luhn::is_valid(candidate))
    }

    /// Returns every valid completion in ascending order.
    ///
    /// May be empty, e.g. when the prefix contains non-digit characters.
    pub fn completions(&self) -> Vec<String> {
        self.iter_completions().collect()
    }

    /// Picks one valid completion uniformly at random.
    ///
    /// Returns `None` when no completion is valid.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        self.completions().choose(rng).cloned()
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Result of a generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    /// Every valid completion, in ascending order.
    All(Vec<String>),
    /// A single randomly chosen completion, or `None` if there were none.
    Picked(Option<String>),
}

/// Parses `template` and either lists all valid completions or picks one.
///
/// # Example
///
/// ```
/// use cardcheck::generate::{generate, Generated};
///
/// let mut rng = cardcheck::generate::time_seeded_rng();
/// match generate("453201511283****", false, &mut rng).unwrap() {
///     Generated::All(numbers) => assert!(!numbers.is_empty()),
///     Generated::Picked(_) => unreachable!(),
/// }
///
/// assert!(generate("1234", false, &mut rng).is_err());
/// ```
pub fn generate<R: Rng + ?Sized>(
    template: &str,
    pick: bool,
    rng: &mut R,
) -> Result<Generated, TemplateError> {
    let template = Template::parse(template)?;

    if pick {
        Ok(Generated::Picked(template.pick(rng)))
    } else {
        Ok(Generated::All(template.completions()))
    }
}

/// Creates a generator seeded from the current wall-clock time.
pub fn time_seeded_rng() -> StdRng {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    StdRng::seed_from_u64(nanos)
}

/// Creates a generator from an explicit seed, or from the clock if `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => time_seeded_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_valid;

    const TEMPLATE: &str = "453201511283****";

    #[test]
    fn test_parse_strips_wildcards() {
        let template = Template::parse(TEMPLATE).unwrap();
        assert_eq!(template.prefix(), "453201511283");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let template = Template::parse("  4532****\n").unwrap();
        assert_eq!(template.prefix(), "4532");
    }

    #[test]
    fn test_parse_from_str() {
        let template: Template = "4000****".parse().unwrap();
        assert_eq!(template.prefix(), "4000");
    }

    #[test]
    fn test_missing_wildcards() {
        assert_eq!(
            Template::parse("1234").unwrap_err(),
            TemplateError::WildcardCount { found: 0 }
        );
    }

    #[test]
    fn test_wrong_wildcard_count() {
        assert_eq!(
            Template::parse("1234***").unwrap_err(),
            TemplateError::WildcardCount { found: 3 }
        );
        assert_eq!(
            Template::parse("1234*****").unwrap_err(),
            TemplateError::WildcardCount { found: 5 }
        );
    }

    #[test]
    fn test_wildcard_elsewhere() {
        assert_eq!(
            Template::parse("12*4****").unwrap_err(),
            TemplateError::MisplacedWildcard { position: 2 }
        );
    }

    #[test]
    fn test_all_wildcards_is_valid_template() {
        let template = Template::parse("****").unwrap();
        assert_eq!(template.prefix(), "");
        assert!(!template.completions().is_empty());
    }

    #[test]
    fn test_completions_are_valid_and_ordered() {
        let template = Template::parse(TEMPLATE).unwrap();
        let numbers = template.completions();

        assert!(!numbers.is_empty());
        assert!(numbers
            .iter()
            .all(|n| is_valid(n) && n.starts_with("453201511283") && n.len() == 16));
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_completion_count_matches_brute_force() {
        let expected = (0..10_000)
            .filter(|i| is_valid(&format!("453201511283{:04}", i)))
            .count();
        let template = Template::parse(TEMPLATE).unwrap();
        assert_eq!(template.completions().len(), expected);
    }

    #[test]
    fn test_known_completion_present() {
        let template = Template::parse(TEMPLATE).unwrap();
        assert!(template.completions().contains(&"4532015112830366".to_string()));
    }

    #[test]
    fn test_non_digit_prefix_has_no_completions() {
        let template = Template::parse("4532abc****").unwrap();
        assert!(template.completions().is_empty());

        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(template.pick(&mut rng), None);
    }

    #[test]
    fn test_pick_is_member_of_valid_set() {
        let template = Template::parse(TEMPLATE).unwrap();
        let all = template.completions();
        let mut rng = time_seeded_rng();
        for _ in 0..5 {
            let picked = template.pick(&mut rng).unwrap();
            assert!(all.contains(&picked));
        }
    }

    #[test]
    fn test_seeded_pick_is_reproducible() {
        let template = Template::parse(TEMPLATE).unwrap();
        let first = template.pick(&mut rng_from_seed(Some(42)));
        let second = template.pick(&mut rng_from_seed(Some(42)));
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_modes() {
        let mut rng = StdRng::seed_from_u64(3);

        match generate(TEMPLATE, false, &mut rng).unwrap() {
            Generated::All(numbers) => assert!(!numbers.is_empty()),
            other => panic!("expected all completions, got {:?}", other),
        }

        match generate(TEMPLATE, true, &mut rng).unwrap() {
            Generated::Picked(Some(n)) => assert!(is_valid(&n)),
            other => panic!("expected a pick, got {:?}", other),
        }

        assert_eq!(
            generate("1234", true, &mut rng).unwrap_err(),
            TemplateError::WildcardCount { found: 0 }
        );
    }
}
