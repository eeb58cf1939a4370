//! HTML character reference codec
//!
//! Decoding is delegated to a standards-compliant unescaper. Encoding uses
//! a deterministic [`EncodeMap`] built once per process from the bundled
//! name tables and the encoding policy.
//!
//! ```rust
//! use etpgrf_core::entities::{decode, encode, EncodeMode};
//!
//! assert_eq!(encode("\u{AD}", EncodeMode::Mnemonic), "&shy;");
//! assert_eq!(encode("Привет", EncodeMode::Mnemonic), "Привет");
//! assert_eq!(decode("&lt;&shy;"), "<\u{AD}");
//! ```

mod codec;
mod policy;
mod tables;

pub use codec::{decode, encode, encode_with_mode_name, EncodeMap, EncodeMode};
pub use policy::{is_mixed_safe, EncodePolicy, MIXED_SAFE};
