//! TLS wire constants (cipher suites, extension types, signature schemes,
//! supported groups) used to build ClientHello signature templates.
//!
//! Values are sourced from the IANA TLS Parameters registry, last checked
//! against the March 2023 revision.

pub mod cipher_suites;
pub mod extensions;
pub mod signature_schemes;
pub mod supported_groups;

pub use cipher_suites::*;
pub use extensions::*;
pub use signature_schemes::*;
// supported_groups::GREASE_PLACEHOLDER collides with cipher_suites::GREASE_PLACEHOLDER,
// so only the curve IDs are re-exported here; reach the rest via the module path.
pub use supported_groups::{CURVE_P256, CURVE_P384, SECP256R1, SECP384R1, SECP521R1, X25519, X25519_MLKEM768, X448};
