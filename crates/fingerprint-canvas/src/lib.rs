//! # fingerprint-canvas
//!
//! Canvas 2D fingerprint generation: namespaced-hash values standing in for
//! what a real `<canvas>` text/shape/image/gradient/composite render would
//! produce for a given sampled browser/platform/device combination. The
//! same identity always renders the same output, so the derivation is a
//! pure hash of the identity key rather than any kind of rasterization.

use fingerprint_core::cache::ResultCache;
use fingerprint_core::hashing::namespaced_hash_hex_truncated;
use fingerprint_core::types::{BrowserType, DeviceType, PlatformName};
use std::sync::OnceLock;

/// The six namespaced hashes a canvas fingerprint exposes, one per drawing
/// primitive real anti-fingerprinting research treats as independently
/// distinguishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasFingerprint {
    pub text_hash: String,
    pub shapes_hash: String,
    pub image_hash: String,
    pub gradient_hash: String,
    pub composite_hash: String,
    pub root_hash: String,
}

fn key(browser: BrowserType, major_version: u32, platform: PlatformName, device: DeviceType) -> String {
    format!("{browser}|{major_version}|{platform}|{device}")
}

fn cache() -> &'static ResultCache<CanvasFingerprint> {
    static CACHE: OnceLock<ResultCache<CanvasFingerprint>> = OnceLock::new();
    CACHE.get_or_init(|| ResultCache::new(256))
}

/// Derive the canvas fingerprint for a sampled identity, caching by
/// `{browser}|{version}|{platform}|{device}` since the same identity always
/// renders the same canvas output.
pub fn generate_canvas_fingerprint(
    browser: BrowserType,
    major_version: u32,
    platform: PlatformName,
    device: DeviceType,
) -> CanvasFingerprint {
    let cache_key = key(browser, major_version, platform, device);
    if let Some(hit) = cache().get(&cache_key) {
        return hit;
    }

    let fp = CanvasFingerprint {
        text_hash: namespaced_hash_hex_truncated("canvas:text", &cache_key, 16),
        shapes_hash: namespaced_hash_hex_truncated("canvas:shapes", &cache_key, 16),
        image_hash: namespaced_hash_hex_truncated("canvas:image", &cache_key, 16),
        gradient_hash: namespaced_hash_hex_truncated("canvas:gradient", &cache_key, 16),
        composite_hash: namespaced_hash_hex_truncated("canvas:composite", &cache_key, 16),
        // The root hash carries no subcategory: it hashes "canvas:{key}".
        root_hash: namespaced_hash_hex_truncated("canvas", &cache_key, 16),
    };
    cache().put(cache_key, fp.clone());
    fp
}
