//! Reading card numbers from text input.

use std::io::{self, BufRead};

/// Reads every whitespace-separated token from `reader`, line by line.
///
/// # Example
///
/// ```
/// use cardcheck::input::read_tokens;
///
/// let tokens = read_tokens("4111111111111111  123\n\n 5500000000000004\n".as_bytes()).unwrap();
/// assert_eq!(tokens, vec!["4111111111111111", "123", "5500000000000004"]);
/// ```
pub fn read_tokens<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        tokens.extend(line?.split_whitespace().map(str::to_string));
    }
    Ok(tokens)
}

/// Collects numbers given as arguments, followed by those read from `stdin`
/// when `read_stdin` is set.
pub fn collect_numbers<R: BufRead>(
    args: Vec<String>,
    read_stdin: bool,
    stdin: R,
) -> io::Result<Vec<String>> {
    let mut numbers = args;
    if read_stdin {
        numbers.extend(read_tokens(stdin)?);
    }
    Ok(numbers)
}
