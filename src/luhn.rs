//! Luhn checksum engine.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula used to validate card numbers and other identification numbers.
//!
//! [`is_valid`] works on raw strings and treats any non-digit character as a
//! failed check rather than an error.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Checks a raw string against the Luhn checksum.
///
/// # Arguments
///
/// * `s` - The candidate number, exactly as received. No whitespace or
///   separators are stripped.
///
/// # Returns
///
/// `true` if every character is an ASCII digit and the checksum is valid.
/// A non-digit character anywhere, or an empty string, yields `false`;
/// this is a negative verdict, not an error.
///
/// # Algorithm
///
/// 1. Starting from the rightmost digit (check digit), moving left
/// 2. Double every second digit, leaving the rightmost one as is
/// 3. If doubling results in a number > 9, subtract 9
/// 4. Sum all digits
/// 5. If the sum is divisible by 10, the number is valid
///
/// # Example
///
/// ```
/// use cardcheck::luhn::is_valid;
///
/// assert!(is_valid("4532015112830366"));
/// assert!(!is_valid("4532015112830367"));
/// assert!(!is_valid("4532-0151-1283-0366"));
/// ```
pub fn is_valid(s: &str) -> bool {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    checksum(s.bytes().map(|b| b - b'0')) % 10 == 0
}

/// Luhn sum (not reduced modulo 10) of digits given left to right.
#[inline]
fn checksum<I>(digits: I) -> u32
where
    I: DoubleEndedIterator<Item = u8>,
{
    // Rightmost digit is position 0 (kept), position 1 is doubled, etc.
    digits
        .rev()
        .enumerate()
        .map(|(i, digit)| {
            if i % 2 == 1 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum()
}
