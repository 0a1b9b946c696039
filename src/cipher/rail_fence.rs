//! Rail fence cipher.
//!
//! Characters are written diagonally down and up across `rails` rows and
//! read back one rail at a time. One rail is the identity; more rails than
//! characters simply leaves some rails empty.

use super::grid;
use crate::error::{CipherError, Result};
use crate::model::{Mode, Scheme};

pub fn rail_fence(mode: Mode, message: &str, rails: usize) -> Result<String> {
    if rails == 0 {
        return Err(CipherError::invalid_key(Scheme::RailFence, "must be at least 1"));
    }
    let chars: Vec<char> = message.chars().collect();
    let order = grid::rail_order(chars.len(), rails);
    Ok(match mode {
        Mode::Encrypt => grid::gather(&chars, &order),
        Mode::Decrypt => grid::scatter(&chars, &order),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_rail_vector() {
        let plain = "WEAREDISCOVEREDFLEEATONCE";
        let cipher = "WECRLTEERDSOEEFEAOCAIVDEN";
        assert_eq!(rail_fence(Mode::Encrypt, plain, 3).unwrap(), cipher);
        assert_eq!(rail_fence(Mode::Decrypt, cipher, 3).unwrap(), plain);
    }

    #[test]
    fn keeps_spaces_and_punctuation() {
        let cipher = rail_fence(Mode::Encrypt, "Hello, World!", 4).unwrap();
        assert_eq!(cipher, "H !e,Wdloollr");
        assert_eq!(rail_fence(Mode::Decrypt, &cipher, 4).unwrap(), "Hello, World!");
    }

    #[test]
    fn one_rail_is_identity() {
        assert_eq!(rail_fence(Mode::Encrypt, "unchanged", 1).unwrap(), "unchanged");
        assert_eq!(rail_fence(Mode::Decrypt, "unchanged", 1).unwrap(), "unchanged");
    }

    #[test]
    fn more_rails_than_characters() {
        assert_eq!(rail_fence(Mode::Encrypt, "abc", 10).unwrap(), "abc");
        assert_eq!(rail_fence(Mode::Decrypt, "abc", 10).unwrap(), "abc");
    }

    #[test]
    fn huge_rail_count_does_not_overflow() {
        assert_eq!(rail_fence(Mode::Encrypt, "abc", usize::MAX).unwrap(), "abc");
        assert_eq!(rail_fence(Mode::Decrypt, "abc", usize::MAX).unwrap(), "abc");
    }

    #[test]
    fn zero_rails_is_rejected() {
        assert!(matches!(
            rail_fence(Mode::Encrypt, "abc", 0),
            Err(CipherError::InvalidKey { .. })
        ));
    }

    #[test]
    fn empty_message() {
        assert_eq!(rail_fence(Mode::Encrypt, "", 3).unwrap(), "");
        assert_eq!(rail_fence(Mode::Decrypt, "", 3).unwrap(), "");
    }
}
