//! Additive Vigenère cipher over alphabet indices

use crate::alphabet::{self, ALPHABET_SIZE};
use crate::error::{Result, VigenereError};

/// Direction in which the key stream is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// `(text + key) mod 29`
    Encrypt,
    /// `(text - key) mod 29`
    Decrypt,
}

/// Applies the repeating `key` to `text`.
///
/// # Arguments
///
/// * `text` - Symbol indices, each in `0..29`.
/// * `key` - Key indices; position `i` of the text uses `key[i % key.len()]`.
/// * `direction` - Whether to add or subtract the key.
///
/// # Errors
///
/// [`VigenereError::InvalidKey`] if `key` is empty.
pub fn apply(text: &[u8], key: &[u8], direction: Direction) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(VigenereError::InvalidKey);
    }

    let modulus = ALPHABET_SIZE as u8;
    let result = text
        .iter()
        .zip(key.iter().cycle())
        .map(|(&t, &k)| match direction {
            Direction::Encrypt => (t + k % modulus) % modulus,
            // Adding the complement keeps the arithmetic in u8
            Direction::Decrypt => (t + modulus - k % modulus) % modulus,
        })
        .collect();

    Ok(result)
}

pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    apply(plaintext, key, Direction::Encrypt)
}

pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    apply(ciphertext, key, Direction::Decrypt)
}

/// Encrypts a text, dropping whitespace first.
///
/// Every remaining character must belong to the alphabet; the key is read the same way.
pub fn encrypt_text(plaintext: &str, key: &str) -> Result<String> {
    let stripped: String = plaintext.chars().filter(|c| !c.is_whitespace()).collect();
    let symbols = alphabet::encode_strict(&stripped)?;
    let key = alphabet::encode_strict(key)?;
    alphabet::render(&encrypt(&symbols, &key)?)
}

/// Decrypts a text that consists of alphabet letters only.
pub fn decrypt_text(ciphertext: &str, key: &str) -> Result<String> {
    let symbols = alphabet::encode_strict(ciphertext)?;
    let key = alphabet::encode_strict(key)?;
    alphabet::render(&decrypt(&symbols, &key)?)
}
