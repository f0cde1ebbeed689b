//! The 29-letter Swedish alphabet and conversions between text and symbol indices

use crate::error::{Result, VigenereError};

/// Ordered alphabet; a symbol's index is its position in this string.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzåäö";

/// Number of symbols in [`ALPHABET`].
pub const ALPHABET_SIZE: usize = 29;

const SYMBOLS: [char; ALPHABET_SIZE] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'å', 'ä', 'ö',
];

/// Returns the index of `symbol` in the alphabet.
///
/// # Errors
///
/// [`VigenereError::InvalidSymbol`] if `symbol` is not one of the 29 lower-case letters.
pub fn index(symbol: char) -> Result<u8> {
    match symbol {
        'a'..='z' => Ok(symbol as u8 - b'a'),
        'å' => Ok(26),
        'ä' => Ok(27),
        'ö' => Ok(28),
        _ => Err(VigenereError::InvalidSymbol(symbol)),
    }
}

/// Returns the letter at position `index`.
pub fn symbol(index: usize) -> Result<char> {
    SYMBOLS
        .get(index)
        .copied()
        .ok_or(VigenereError::InvalidIndex(index))
}

/// Lower-cases `text` and keeps only the letters of the alphabet.
///
/// Never fails: everything else (digits, punctuation, whitespace, foreign letters) is dropped.
pub fn normalize(text: &str) -> Vec<u8> {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter_map(|c| index(c).ok())
        .collect()
}

/// Converts every character of `text`, failing on the first one outside the alphabet.
pub fn encode_strict(text: &str) -> Result<Vec<u8>> {
    text.chars().map(index).collect()
}

/// Turns a symbol sequence back into text.
pub fn render(symbols: &[u8]) -> Result<String> {
    symbols.iter().map(|&s| symbol(s as usize)).collect()
}
