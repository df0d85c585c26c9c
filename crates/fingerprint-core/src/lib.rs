//! # fingerprint-core
//!
//! Shared primitives for the fingerprint generation pipeline: the seeded RNG,
//! namespaced hashing, the result cache, TLS wire constants, GREASE handling,
//! JA3/JA4 computation, the shared error type, and the vocabulary types
//! (`BrowserType`, `DeviceType`, `PlatformName`) every other crate in this
//! workspace builds on.
//!
//! This crate performs no I/O and holds no global state beyond what each type
//! owns directly; every other crate in the pipeline depends on it, and it
//! depends on nothing else in the workspace.

pub mod cache;
pub mod dicttls;
pub mod error;
pub mod grease;
pub mod hashing;
pub mod ja3;
pub mod ja4;
pub mod rng;
pub mod types;

pub use cache::{CacheStats, ResultCache};
pub use dicttls::*;
pub use error::{FingerprintError, Result};
pub use grease::{filter_grease_values, is_grease_value, TLS_GREASE_VALUES};
pub use hashing::{
    deterministic_index, namespaced_hash, namespaced_hash_hex, namespaced_hash_hex_truncated,
    sha256_hex_truncated,
};
pub use ja3::JA3;
pub use ja4::JA4;
pub use rng::SeededRng;
pub use types::{BrowserType, DeviceType, PlatformName};
