//! JA4 TLS ClientHello fingerprint.
//!
//! Format: `t13d1516h2_{cipher_hash}_{extension_hash}_{signature_hash}`. Unlike JA3,
//! JA4's component hashes are SHA-256 truncations, not a non-cryptographic hash —
//! that choice is part of the published spec, since JA4 values from independent
//! implementations are meant to compare equal.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A computed JA4 TLS fingerprint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JA4 {
    /// Transport byte: `t` for TCP, `q` for QUIC.
    pub transport: char,
    /// Two-digit TLS version code, e.g. `"13"` for TLS 1.3.
    pub version: String,
    /// `d` if SNI was present (domain), `i` if not (IP).
    pub destination: char,
    /// Cipher-suite count after GREASE removal, capped at 99.
    pub cipher_count: usize,
    /// Extension count after GREASE removal, capped at 99.
    pub extension_count: usize,
    /// First two characters of the negotiated ALPN, or `"00"`.
    pub alpn: String,
    /// First 12 hex chars of SHA-256 over the sorted, GREASE-free cipher list.
    pub cipher_hash: String,
    /// First 12 hex chars of SHA-256 over the sorted, GREASE-free extension list.
    pub extension_hash: String,
    /// First 4 hex chars of SHA-256 over the signature-algorithm list.
    pub signature_hash: String,
}

impl JA4 {
    pub fn generate(
        transport: char,
        version: &str,
        has_sni: bool,
        ciphers: &[u16],
        extensions: &[u16],
        alpn: Option<&str>,
        signature_algorithms: &[u16],
    ) -> Self {
        let version_code = match version {
            "1.3" => "13",
            "1.2" => "12",
            "1.1" => "11",
            "1.0" => "10",
            _ => "00",
        };
        let destination = if has_sni { 'd' } else { 'i' };

        let mut filtered_ciphers = crate::grease::filter_grease_values(ciphers);
        filtered_ciphers.sort_unstable();
        let cipher_count = filtered_ciphers.len().min(99);

        let mut filtered_extensions = crate::grease::filter_grease_values(extensions);
        filtered_extensions.sort_unstable();
        let extension_count = filtered_extensions.len().min(99);

        let raw_alpn = alpn.unwrap_or("00");
        let alpn_id = raw_alpn.get(0..2).unwrap_or(raw_alpn).to_string();

        let cipher_hash = truncated_sha256(&filtered_ciphers, 12);
        let extension_hash = truncated_sha256(&filtered_extensions, 12);
        let signature_hash = truncated_sha256(signature_algorithms, 4);

        Self {
            transport,
            version: version_code.to_string(),
            destination,
            cipher_count,
            extension_count,
            alpn: alpn_id,
            cipher_hash,
            extension_hash,
            signature_hash,
        }
    }

    pub fn to_fingerprint_string(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for JA4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{:02}{:02}{}_{}_{}_{}",
            self.transport,
            self.version,
            self.destination,
            self.cipher_count,
            self.extension_count,
            self.alpn,
            self.cipher_hash,
            self.extension_hash,
            self.signature_hash
        )
    }
}

fn truncated_sha256(values: &[u16], hex_len: usize) -> String {
    let joined = values
        .iter()
        .map(|v| format!("{:04x}", v))
        .collect::<Vec<_>>()
        .join(",");
    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)[..hex_len].to_string()
}
