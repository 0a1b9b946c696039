//! Classical ciphers: Caesar, simple substitution, Vigenère, columnar
//! transposition and rail fence.
//!
//! None of these offer any security. They exist for teaching and puzzles.
//!
//! ```
//! use scytale::{CipherEngine, Key, Mode, Scheme};
//!
//! let engine = CipherEngine::new();
//! let key = Scheme::RailFence.parse_key(Some("3")).unwrap();
//! let cipher = engine
//!     .transform(Scheme::RailFence, Mode::Encrypt, "WEAREDISCOVERED", &key)
//!     .unwrap();
//! assert_eq!(cipher, "WECRERDSOEEAIVD");
//!
//! let plain = engine.rail_fence(Mode::Decrypt, &cipher, 3).unwrap();
//! assert_eq!(plain, "WEAREDISCOVERED");
//! assert_eq!(key, Key::Integer(3));
//! ```

pub mod cipher;
pub mod config;
pub mod error;
pub mod fs;
pub mod model;

pub use cipher::CipherEngine;
pub use error::{CipherError, Result};
pub use model::{Key, KeyKind, KeyWrap, Mode, Scheme};
