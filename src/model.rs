use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{CipherError, Result};

/// Direction of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl FromStr for Mode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encrypt" => Ok(Mode::Encrypt),
            "decrypt" => Ok(Mode::Decrypt),
            _ => Err(CipherError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Encrypt => write!(f, "encrypt"),
            Mode::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// The five supported ciphers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Caesar,
    Substitution,
    Vigenere,
    Transposition,
    RailFence,
}

/// Shape of key a scheme expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    None,
    Text,
    Integer,
}

/// A key already validated for one scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    None,
    Text(String),
    Integer(usize),
}

impl Scheme {
    pub fn key_kind(self) -> KeyKind {
        match self {
            Scheme::Caesar | Scheme::Substitution => KeyKind::None,
            Scheme::Vigenere => KeyKind::Text,
            Scheme::Transposition | Scheme::RailFence => KeyKind::Integer,
        }
    }

    /// Validates the raw command-line key for this scheme.
    ///
    /// This is the only place a key string is interpreted; the cipher
    /// functions receive the typed [`Key`] and never parse anything.
    pub fn parse_key(self, raw: Option<&str>) -> Result<Key> {
        match (self.key_kind(), raw) {
            (KeyKind::None, None) => Ok(Key::None),
            (KeyKind::None, Some(_)) if self == Scheme::Substitution => {
                Err(CipherError::UnexpectedKey(self))
            }
            (KeyKind::None, Some(raw)) => {
                warn!("ignoring key '{}': the {} cipher uses a fixed shift", raw, self);
                Ok(Key::None)
            }
            (_, None) => Err(CipherError::MissingKey(self)),
            (KeyKind::Text, Some(raw)) => parse_text_key(self, raw),
            (KeyKind::Integer, Some(raw)) => parse_integer_key(self, raw),
        }
    }
}

fn parse_text_key(scheme: Scheme, raw: &str) -> Result<Key> {
    if raw.is_empty() {
        return Err(CipherError::invalid_key(scheme, "key is empty"));
    }
    if let Some(bad) = raw.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(CipherError::invalid_key(
            scheme,
            format!("'{}' is not a letter", bad),
        ));
    }
    Ok(Key::Text(raw.to_string()))
}

fn parse_integer_key(scheme: Scheme, raw: &str) -> Result<Key> {
    let value: usize = raw
        .trim()
        .parse()
        .map_err(|_| CipherError::invalid_key(scheme, format!("'{}' is not an integer", raw)))?;
    if value == 0 {
        return Err(CipherError::invalid_key(scheme, "must be at least 1"));
    }
    Ok(Key::Integer(value))
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scheme::Caesar => "Caesar",
            Scheme::Substitution => "simple substitution",
            Scheme::Vigenere => "polyalphabetic",
            Scheme::Transposition => "transposition",
            Scheme::RailFence => "rail fence",
        };
        f.write_str(name)
    }
}

/// How far the Vigenère key cursor runs before wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyWrap {
    /// Wrap after the last letter of the supplied key.
    #[default]
    KeyLength,
    /// Wrap after a fixed number of letters, whatever the key length.
    Fixed(usize),
}
