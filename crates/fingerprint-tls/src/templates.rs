//! Per-`{browser, major_version}` ClientHelloSpec lookup with a
//! fallback-to-latest-Chrome policy and bounded cipher-suite shuffling.
//! One template function per browser family, adapting by version only where
//! the wire format actually changed (post-quantum key share at Chrome 131+),
//! rather than one frozen spec per literal release.

use crate::error::{Result, TlsError};
use crate::spec::{chromium_template, firefox_template, safari_template, ClientHelloSpec};
use fingerprint_core::types::BrowserType;
use fingerprint_core::SeededRng;

/// Resolve the ClientHelloSpec for a browser/version pair. Versions outside
/// a family's known range fall back to the latest template this crate
/// declares for that family, since the wire-level shape of a TLS ClientHello
/// is far more stable release-to-release than the browser's own version
/// number.
pub fn template_for(browser: BrowserType, major_version: u32) -> ClientHelloSpec {
    match browser {
        BrowserType::Chrome | BrowserType::Edge | BrowserType::Opera => {
            chromium_template(major_version)
        }
        BrowserType::Firefox => firefox_template(major_version),
        BrowserType::Safari => safari_template(major_version),
    }
}

/// Nudge the cipher suite order within its fixed first-slot bound: the
/// first entry (GREASE, for Chromium, or the AEAD-256 preference for
/// Firefox/Safari) never moves, since real browsers hold their most
/// preferred suite in place release to release. Only two or three of the
/// remaining positions change; a full reshuffle would stand out as much as
/// no shuffle at all.
pub fn shuffle_ciphers(spec: &mut ClientHelloSpec, rng: &mut SeededRng) {
    if spec.cipher_suites.len() <= 2 {
        return;
    }
    let tail = &mut spec.cipher_suites[1..];
    let i = rng.next_range_inclusive(0, tail.len() as i64 - 1) as usize;
    let j = rng.next_range_inclusive(0, tail.len() as i64 - 1) as usize;
    tail.swap(i, j);
    if tail.len() >= 3 && rng.next_bool(0.5) {
        let k = rng.next_range_inclusive(0, tail.len() as i64 - 2) as usize;
        tail.swap(k, k + 1);
    }
}

/// Validate that a spec is internally consistent enough to hash: non-empty
/// cipher/extension lists and a sane version range.
pub fn validate(spec: &ClientHelloSpec) -> Result<()> {
    if spec.cipher_suites.is_empty() {
        return Err(TlsError::EmptyCipherList);
    }
    if spec.extensions.is_empty() {
        return Err(TlsError::EmptyExtensionList);
    }
    if spec.tls_vers_min > spec.tls_vers_max {
        return Err(TlsError::InvalidVersionRange {
            min: spec.tls_vers_min,
            max: spec.tls_vers_max,
        });
    }
    Ok(())
}
