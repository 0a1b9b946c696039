//! Columnar transposition.
//!
//! The message is laid out row by row in `key` columns and read back one
//! column at a time. When the length is not a multiple of `key` the last
//! row is short, which decryption recovers from the same column layout.

use super::grid;
use crate::error::{CipherError, Result};
use crate::model::{Mode, Scheme};

pub fn transpose(mode: Mode, message: &str, key: usize) -> Result<String> {
    if key == 0 {
        return Err(CipherError::invalid_key(Scheme::Transposition, "must be at least 1"));
    }
    let chars: Vec<char> = message.chars().collect();
    if chars.is_empty() {
        return Ok(String::new());
    }
    if key > chars.len() {
        return Err(CipherError::invalid_key(
            Scheme::Transposition,
            format!("{} exceeds the message length {}", key, chars.len()),
        ));
    }

    let order = grid::columnar_order(chars.len(), key);
    Ok(match mode {
        Mode::Encrypt => grid::gather(&chars, &order),
        Mode::Decrypt => grid::scatter(&chars, &order),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: &str = "WEAREDISCOVEREDFLEEATONCE";
    const CIPHER: &str = "WRIORFEOEEESVELANADCEDETC";

    /// Rebuilds the plaintext grid cell by cell, leaving the shaded cells at
    /// the bottom of the last column empty.
    fn shaded_grid_decrypt(cipher: &str, key: usize) -> String {
        let len = cipher.chars().count();
        let columns = len.div_ceil(key);
        let shaded = columns * key - len;
        let mut plain = vec![String::new(); columns];
        let (mut col, mut row) = (0, 0);
        for c in cipher.chars() {
            plain[col].push(c);
            col += 1;
            if col == columns || (col == columns - 1 && row >= key - shaded) {
                col = 0;
                row += 1;
            }
        }
        plain.concat()
    }

    #[test]
    fn classic_three_column_vector() {
        assert_eq!(transpose(Mode::Encrypt, PLAIN, 3).unwrap(), CIPHER);
        assert_eq!(transpose(Mode::Decrypt, CIPHER, 3).unwrap(), PLAIN);
    }

    #[test]
    fn short_last_row() {
        assert_eq!(transpose(Mode::Encrypt, "abcdefgh", 3).unwrap(), "adgbehcf");
        assert_eq!(transpose(Mode::Decrypt, "adgbehcf", 3).unwrap(), "abcdefgh");
    }

    #[test]
    fn key_one_and_full_length_are_identity() {
        assert_eq!(transpose(Mode::Encrypt, "hello", 1).unwrap(), "hello");
        assert_eq!(transpose(Mode::Encrypt, "hello", 5).unwrap(), "hello");
    }

    #[test]
    fn agrees_with_shaded_grid_reconstruction() {
        let message = "Common sense is not so common.";
        let len = message.chars().count();
        for key in 1..=len {
            let cipher = transpose(Mode::Encrypt, message, key).unwrap();
            assert_eq!(
                transpose(Mode::Decrypt, &cipher, key).unwrap(),
                shaded_grid_decrypt(&cipher, key),
                "key {}",
                key
            );
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        let cipher = transpose(Mode::Encrypt, "héllo wörld", 4).unwrap();
        assert_eq!(transpose(Mode::Decrypt, &cipher, 4).unwrap(), "héllo wörld");
        assert!(transpose(Mode::Encrypt, "héllo", 5).is_ok());
    }

    #[test]
    fn rejects_out_of_range_keys() {
        assert!(matches!(
            transpose(Mode::Encrypt, "abc", 0),
            Err(CipherError::InvalidKey { .. })
        ));
        assert!(matches!(
            transpose(Mode::Decrypt, "abc", 4),
            Err(CipherError::InvalidKey { .. })
        ));
    }

    #[test]
    fn empty_message() {
        assert_eq!(transpose(Mode::Encrypt, "", 3).unwrap(), "");
        assert_eq!(transpose(Mode::Decrypt, "", 3).unwrap(), "");
    }
}
