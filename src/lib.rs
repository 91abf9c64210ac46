//! classicrypt - Classical Text Ciphers
//!
//! Pure, stateless implementations of pre-modern ciphers. None of them
//! provide any security; they are for puzzles, teaching and history.
//!
//! ## Methods
//!
//! - **Rail Fence**: zig-zag transposition over N rails
//! - **Caesar**: fixed shift of every Latin letter
//! - **Vigenère**: repeating letter key, advancing on letters only
//! - **Polybios**: letters to (row, column) digits in a key-derived 5x5 square
//! - **Tapir**: fixed German code table with letter/figure modes
//! - **Table Shift**: keyed modular shift over an 87-symbol table
//!
//! Caesar and rail fence also support bulk decryption, which tries every
//! key of their small keyspace and returns all candidates.
//!
//! ## Example
//!
//! ```
//! use classicrypt::{transform, Direction, Method, TransformOptions};
//!
//! let opts = TransformOptions::for_method(Method::Vigenere).with_key("LEMON");
//! let secret = transform(Direction::Encrypt, &opts, "Attack at dawn").unwrap();
//! assert_eq!(secret, "Lxfopv ef rnhr");
//!
//! let plain = transform(Direction::Decrypt, &opts, &secret).unwrap();
//! assert_eq!(plain, "Attack at dawn");
//!
//! let report = classicrypt::bulk::bulk_caesar_decrypt("Khoor");
//! assert_eq!(report.find(3), Some("Hello"));
//! ```

pub mod bulk;
pub mod cipher;
pub mod cli;
pub mod error;
pub mod keygen;
pub mod method;
pub mod options;

pub use bulk::{bulk_caesar_decrypt, bulk_decrypt, bulk_rail_fence_decrypt, BulkOutcome, BulkReport};
pub use cipher::{transform, Cipher, TextCipher};
pub use error::{CipherError, Result};
pub use method::Method;
pub use options::{Direction, TransformOptions};
