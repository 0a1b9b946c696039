//! The five classical ciphers and the engine that dispatches between them.
//!
//! Every operation is a pure function of its arguments. Nothing here reads
//! or writes files, and the only state an engine carries is the Vigenère
//! cursor wrap setting.

pub(crate) mod alphabet;
pub mod caesar;
pub(crate) mod grid;
pub mod rail_fence;
pub mod substitution;
pub mod transposition;
pub mod vigenere;

use log::debug;

use crate::error::{CipherError, Result};
use crate::model::{Key, KeyWrap, Mode, Scheme};

/// Entry point to every cipher.
#[derive(Debug, Clone, Copy, Default)]
pub struct CipherEngine {
    key_wrap: KeyWrap,
}

impl CipherEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_wrap(key_wrap: KeyWrap) -> Self {
        Self { key_wrap }
    }

    pub fn key_wrap(&self) -> KeyWrap {
        self.key_wrap
    }

    pub fn caesar(&self, mode: Mode, message: &str) -> String {
        caesar::caesar(mode, message)
    }

    pub fn substitute(&self, mode: Mode, message: &str) -> Result<String> {
        substitution::substitute(mode, message)
    }

    pub fn vigenere(&self, mode: Mode, message: &str, key: &str) -> Result<String> {
        vigenere::vigenere(mode, message, key, self.key_wrap)
    }

    pub fn transpose(&self, mode: Mode, message: &str, key: usize) -> Result<String> {
        transposition::transpose(mode, message, key)
    }

    pub fn rail_fence(&self, mode: Mode, message: &str, rails: usize) -> Result<String> {
        rail_fence::rail_fence(mode, message, rails)
    }

    /// Runs `scheme` over `message` with a key from [`Scheme::parse_key`].
    pub fn transform(
        &self,
        scheme: Scheme,
        mode: Mode,
        message: &str,
        key: &Key,
    ) -> Result<String> {
        debug!(
            "{} {} over {} characters",
            mode,
            scheme,
            message.chars().count()
        );
        match (scheme, key) {
            (Scheme::Caesar, Key::None) => Ok(self.caesar(mode, message)),
            (Scheme::Substitution, Key::None) => self.substitute(mode, message),
            (Scheme::Vigenere, Key::Text(key)) => self.vigenere(mode, message, key),
            (Scheme::Transposition, Key::Integer(key)) => self.transpose(mode, message, *key),
            (Scheme::RailFence, Key::Integer(rails)) => self.rail_fence(mode, message, *rails),
            (scheme, key) => Err(CipherError::invalid_key(
                scheme,
                format!("expected a {:?} key, got {:?}", scheme.key_kind(), key),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_each_scheme() {
        let engine = CipherEngine::new();
        let cases = [
            (Scheme::Caesar, Key::None, "abc", "def"),
            (Scheme::Substitution, Key::None, "abc", "zyx"),
            (Scheme::Vigenere, Key::Text("B".into()), "abc", "bcd"),
            (Scheme::Transposition, Key::Integer(2), "abcd", "acbd"),
            (Scheme::RailFence, Key::Integer(2), "abcd", "acbd"),
        ];
        for (scheme, key, plain, cipher) in cases {
            assert_eq!(
                engine.transform(scheme, Mode::Encrypt, plain, &key).unwrap(),
                cipher,
                "{}",
                scheme
            );
            assert_eq!(
                engine.transform(scheme, Mode::Decrypt, cipher, &key).unwrap(),
                plain,
                "{}",
                scheme
            );
        }
    }

    #[test]
    fn mismatched_key_shape_is_rejected() {
        let engine = CipherEngine::new();
        let err = engine
            .transform(Scheme::RailFence, Mode::Encrypt, "abc", &Key::Text("x".into()))
            .unwrap_err();
        assert!(matches!(err, CipherError::InvalidKey { scheme: Scheme::RailFence, .. }));
    }

    #[test]
    fn key_wrap_is_carried_into_vigenere() {
        let engine = CipherEngine::with_key_wrap(KeyWrap::Fixed(1));
        assert_eq!(engine.key_wrap(), KeyWrap::Fixed(1));
        assert_eq!(engine.vigenere(Mode::Encrypt, "aaa", "BCD").unwrap(), "bbb");
    }
}
