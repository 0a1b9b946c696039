//! Caesar cipher with the classical fixed shift of three.

use super::alphabet::{self, Table};
use crate::model::Mode;

pub const SHIFT: u8 = 3;

const ENCRYPT: Table = alphabet::shifted(SHIFT);
const DECRYPT: Table = alphabet::inverted(&ENCRYPT);

/// Lower-cases `message` and shifts each letter by [`SHIFT`]. Everything
/// that is not an ASCII letter is copied through.
pub fn caesar(mode: Mode, message: &str) -> String {
    let table = match mode {
        Mode::Encrypt => &ENCRYPT,
        Mode::Decrypt => &DECRYPT,
    };
    message
        .to_lowercase()
        .chars()
        .map(|c| alphabet::lookup(table, c).unwrap_or(c))
        .collect()
}
