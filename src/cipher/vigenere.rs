//! Polyalphabetic (Vigenère) cipher.
//!
//! Letters are shifted by the alphabet index of the current key letter and
//! keep their case. Any other character is copied and leaves the key cursor
//! where it was.

use log::debug;

use super::alphabet::{self, ALPHABET_LEN};
use crate::error::{CipherError, Result};
use crate::model::{KeyWrap, Mode, Scheme};

pub fn vigenere(mode: Mode, message: &str, key: &str, wrap: KeyWrap) -> Result<String> {
    let shifts = key_shifts(key)?;
    let period = match wrap {
        KeyWrap::KeyLength => shifts.len(),
        KeyWrap::Fixed(0) => {
            return Err(CipherError::invalid_key(
                Scheme::Vigenere,
                "key wrap length must be at least 1",
            ))
        }
        KeyWrap::Fixed(n) => n,
    };
    if period != shifts.len() {
        debug!(
            "vigenere cursor wraps every {} letters, key has {}",
            period,
            shifts.len()
        );
    }

    let mut out = String::with_capacity(message.len());
    let mut cursor = 0;
    for c in message.chars() {
        let Some(index) = alphabet::index_of(c) else {
            out.push(c);
            continue;
        };
        let shift = shifts[cursor % shifts.len()];
        let shifted = match mode {
            Mode::Encrypt => index + shift,
            Mode::Decrypt => index + ALPHABET_LEN - shift,
        };
        out.push(alphabet::letter_like(shifted, c));
        cursor = (cursor + 1) % period;
    }
    Ok(out)
}

fn key_shifts(key: &str) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(CipherError::invalid_key(Scheme::Vigenere, "key is empty"));
    }
    key.chars()
        .map(|c| {
            alphabet::index_of(c).ok_or_else(|| {
                CipherError::invalid_key(Scheme::Vigenere, format!("'{}' is not a letter", c))
            })
        })
        .collect()
}
