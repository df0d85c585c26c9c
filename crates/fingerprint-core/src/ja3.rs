//! JA3 TLS ClientHello fingerprint.
//!
//! Format: `MD5(SSLVersion,Ciphers,Extensions,EllipticCurves,EllipticCurvePointFormats)`.
//! GREASE values (RFC 8701) are stripped from every list before hashing.

use serde::{Deserialize, Serialize};

/// A computed JA3 fingerprint and the components it was built from.
///
/// ```
/// use fingerprint_core::ja3::JA3;
///
/// let ja3 = JA3::generate(
///     771,
///     &[0x1301, 0x1302, 0x1303],
///     &[0, 10, 11, 13],
///     &[23, 24, 25],
///     &[0],
/// );
/// assert_eq!(ja3.fingerprint.len(), 32);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JA3 {
    pub ssl_version: u16,
    pub ciphers: String,
    pub extensions: String,
    pub elliptic_curves: String,
    pub ec_point_formats: String,
    pub ja3_string: String,
    pub fingerprint: String,
}

impl JA3 {
    /// Build the JA3 string from a ClientHello's raw fields and MD5-hash it.
    pub fn generate(
        ssl_version: u16,
        ciphers: &[u16],
        extensions: &[u16],
        elliptic_curves: &[u16],
        ec_point_formats: &[u8],
    ) -> Self {
        let ciphers_str = join_u16(&crate::grease::filter_grease_values(ciphers));
        let extensions_str = join_u16(&crate::grease::filter_grease_values(extensions));
        let curves_str = join_u16(&crate::grease::filter_grease_values(elliptic_curves));
        let formats_str = ec_point_formats
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join("-");

        let ja3_string = format!(
            "{},{},{},{},{}",
            ssl_version, ciphers_str, extensions_str, curves_str, formats_str
        );
        let fingerprint = format!("{:x}", md5::compute(ja3_string.as_bytes()));

        Self {
            ssl_version,
            ciphers: ciphers_str,
            extensions: extensions_str,
            elliptic_curves: curves_str,
            ec_point_formats: formats_str,
            ja3_string,
            fingerprint,
        }
    }
}

impl std::fmt::Display for JA3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fingerprint)
    }
}

fn join_u16(values: &[u16]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_32_char_md5_digest() {
        let ja3 = JA3::generate(
            771,
            &[0x1301, 0x1302, 0x1303, 0xc02b, 0xc02f],
            &[0, 10, 11, 13, 16, 23],
            &[23, 24, 25],
            &[0],
        );
        assert_eq!(ja3.fingerprint.len(), 32);
        assert_eq!(ja3.ssl_version, 771);
    }

    #[test]
    fn strips_grease_before_hashing() {
        let ja3 = JA3::generate(
            771,
            &[0x0a0a, 0x1301, 0x1a1a],
            &[0x0a0a, 0, 10],
            &[0x0a0a, 23],
            &[0],
        );
        assert!(!ja3.ciphers.contains("2570"));
        assert!(!ja3.extensions.contains("2570"));
        assert!(!ja3.elliptic_curves.contains("2570"));
    }

    #[test]
    fn empty_lists_still_hash() {
        let ja3 = JA3::generate(771, &[], &[], &[], &[]);
        assert!(!ja3.fingerprint.is_empty());
        assert_eq!(ja3.ciphers, "");
    }

    #[test]
    fn display_matches_fingerprint() {
        let ja3 = JA3::generate(771, &[0x1301], &[0], &[23], &[0]);
        assert_eq!(format!("{}", ja3), ja3.fingerprint);
    }

    #[test]
    fn is_deterministic() {
        let a = JA3::generate(771, &[0xc02b, 0xc02f], &[0, 10], &[23, 24], &[0]);
        let b = JA3::generate(771, &[0xc02b, 0xc02f], &[0, 10], &[23, 24], &[0]);
        assert_eq!(a.fingerprint, b.fingerprint);
    }
}
