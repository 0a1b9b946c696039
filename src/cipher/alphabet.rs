//! The 26-letter Latin alphabet and the fixed lookup tables built over it.
//!
//! Tables map a lowercase letter's index to the lowercase letter it becomes.
//! They are `const`, so every table exists before the first call and is never
//! written to.

pub(crate) const ALPHABET_LEN: u8 = 26;

/// A letter-to-letter table over `a..=z`.
pub(crate) type Table = [u8; ALPHABET_LEN as usize];

/// Table that moves every letter `shift` places forward, wrapping at `z`.
pub(crate) const fn shifted(shift: u8) -> Table {
    let mut table = [0u8; ALPHABET_LEN as usize];
    let mut i = 0;
    while i < ALPHABET_LEN as usize {
        table[i] = b'a' + (i as u8 + shift) % ALPHABET_LEN;
        i += 1;
    }
    table
}

/// Table that mirrors the alphabet: `a` with `z`, `b` with `y`, and so on.
pub(crate) const fn reflected() -> Table {
    let mut table = [0u8; ALPHABET_LEN as usize];
    let mut i = 0;
    while i < ALPHABET_LEN as usize {
        table[i] = b'z' - i as u8;
        i += 1;
    }
    table
}

/// Inverse of a bijective table.
pub(crate) const fn inverted(table: &Table) -> Table {
    let mut inverse = [0u8; ALPHABET_LEN as usize];
    let mut i = 0;
    while i < ALPHABET_LEN as usize {
        inverse[(table[i] - b'a') as usize] = b'a' + i as u8;
        i += 1;
    }
    inverse
}

/// Looks a lowercase ASCII letter up in `table`; anything else has no entry.
pub(crate) fn lookup(table: &Table, c: char) -> Option<char> {
    if c.is_ascii_lowercase() {
        Some(table[(c as u8 - b'a') as usize] as char)
    } else {
        None
    }
}

/// Zero-based alphabet index of an ASCII letter of either case.
pub(crate) fn index_of(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Letter at `index` (reduced mod 26), in the case of `like`.
pub(crate) fn letter_like(index: u8, like: char) -> char {
    let base = if like.is_ascii_uppercase() { b'A' } else { b'a' };
    (base + index % ALPHABET_LEN) as char
}
