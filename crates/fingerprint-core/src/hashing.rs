//! Namespaced SHA-256 hashing.
//!
//! The canvas/WebGL/audio/font derivation modules all hash strings of the
//! form `"{category}:{subcategory}:{key}"` (e.g. `"canvas:text:chrome|120|windows|desktop"`).
//! Keeping the namespacing in one place means every module spells it the same
//! way, which matters because the namespace prefix is part of what keeps
//! hashes comparable across independent implementations.

use sha2::{Digest, Sha256};

/// SHA-256 of `"{category}:{key}"`, returned as raw bytes.
pub fn namespaced_hash(category: &str, key: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(category.as_bytes());
    hasher.update(b":");
    hasher.update(key.as_bytes());
    hasher.finalize().into()
}

/// SHA-256 of `"{category}:{key}"`, hex-encoded.
pub fn namespaced_hash_hex(category: &str, key: &str) -> String {
    hex::encode(namespaced_hash(category, key))
}

/// The first `len` hex characters of `namespaced_hash_hex`.
pub fn namespaced_hash_hex_truncated(category: &str, key: &str, len: usize) -> String {
    let full = namespaced_hash_hex(category, key);
    full[..len.min(full.len())].to_string()
}

/// The first `len` hex characters of a plain SHA-256 over `input`, with no
/// namespace prefix. The base profile's `fingerprint_hash` uses this: its
/// preimage is the bare `"{browser}:{version}:..."` identity string.
pub fn sha256_hex_truncated(input: &str, len: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let full = hex::encode(hasher.finalize());
    full[..len.min(full.len())].to_string()
}

/// Fold the first 4 bytes of a hash into a deterministic index in `[0, modulo)`.
/// Used to pick a GPU profile or sample-rate entry without an RNG draw, so the
/// choice only depends on the key, not on draw order.
pub fn deterministic_index(category: &str, key: &str, modulo: usize) -> usize {
    if modulo == 0 {
        return 0;
    }
    let digest = namespaced_hash(category, key);
    let folded = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    (folded as usize) % modulo
}
