//! Index arithmetic shared by the two transposition ciphers.
//!
//! Each layout is a pure function from `(length, key)` to a permutation:
//! entry `i` is the plaintext index that lands at ciphertext position `i`.
//! Encryption gathers through the permutation and decryption scatters back
//! through the very same one, so the two directions cannot drift apart.

/// Column-major read of a grid `key` columns wide, filled row by row.
pub(crate) fn columnar_order(len: usize, key: usize) -> Vec<usize> {
    debug_assert!(key > 0);
    (0..key)
        .flat_map(|col| (col..len).step_by(key))
        .collect()
}

/// Rail a character at position `n` is written to in a zig-zag over `rails`.
pub(crate) fn rail_of(n: usize, rails: usize) -> usize {
    if rails < 2 {
        return 0;
    }
    let period = (rails - 1).saturating_mul(2);
    let phase = n % period;
    if phase < rails {
        phase
    } else {
        period - phase
    }
}

/// Rail-by-rail read of a zig-zag over `rails`, left to right within a rail.
pub(crate) fn rail_order(len: usize, rails: usize) -> Vec<usize> {
    // rails beyond the length stay empty
    let rails = rails.min(len.max(1));
    let mut order: Vec<usize> = (0..len).collect();
    // stable: within a rail, positions keep their original order
    order.sort_by_key(|&n| rail_of(n, rails));
    order
}

pub(crate) fn gather(chars: &[char], order: &[usize]) -> String {
    order.iter().map(|&src| chars[src]).collect()
}

pub(crate) fn scatter(chars: &[char], order: &[usize]) -> String {
    let mut out = vec!['\0'; chars.len()];
    for (&dst, &c) in order.iter().zip(chars) {
        out[dst] = c;
    }
    out.into_iter().collect()
}
