//! Simple substitution over the mirrored alphabet (`a` <-> `z`).
//!
//! The table is its own inverse, but encryption and decryption are not
//! symmetric: encryption drops spaces and newlines, decryption keeps every
//! character and refuses anything that is not a table letter.

use super::alphabet::{self, Table};
use crate::error::{CipherError, Result};
use crate::model::Mode;

const ENCRYPT: Table = alphabet::reflected();
const DECRYPT: Table = alphabet::inverted(&ENCRYPT);

/// Maps one lowercase letter through the encryption table.
pub fn encode_letter(c: char) -> Option<char> {
    alphabet::lookup(&ENCRYPT, c)
}

/// Maps one lowercase letter through the decryption table.
pub fn decode_letter(c: char) -> Option<char> {
    alphabet::lookup(&DECRYPT, c)
}

pub fn substitute(mode: Mode, message: &str) -> Result<String> {
    match mode {
        Mode::Encrypt => Ok(encrypt(&message.to_lowercase())),
        Mode::Decrypt => decrypt(message),
    }
}

fn encrypt(message: &str) -> String {
    message
        .chars()
        .filter(|&c| c != ' ' && c != '\n')
        .map(|c| encode_letter(c).unwrap_or(c))
        .collect()
}

/// Lower-cases as it goes so a failure `position` indexes the caller's
/// text, even where lower-casing yields more than one char.
fn decrypt(message: &str) -> Result<String> {
    let mut out = String::with_capacity(message.len());
    for (position, original) in message.chars().enumerate() {
        for character in original.to_lowercase() {
            let plain = decode_letter(character).ok_or(CipherError::DecodeFailure {
                character,
                position,
            })?;
            out.push(plain);
        }
    }
    Ok(out)
}
