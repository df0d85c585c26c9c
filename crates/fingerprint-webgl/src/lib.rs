//! # fingerprint-webgl
//!
//! WebGL fingerprint generation: GPU vendor/renderer selection, shader-hash
//! and GL-parameter derivation for a sampled browser/platform/device
//! combination.
//!
//! The GPU profile is picked out of a platform-keyed table with
//! `fingerprint_core::hashing::deterministic_index`, so the same identity
//! always selects the same GPU without consuming an RNG draw; shader hashes
//! and GL parameters are then derived from that choice.

use fingerprint_core::cache::ResultCache;
use fingerprint_core::hashing::{deterministic_index, namespaced_hash_hex_truncated};
use fingerprint_core::types::{BrowserType, DeviceType, PlatformName};
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebGlFingerprint {
    pub gpu_vendor: String,
    pub gpu_renderer: String,
    pub gpu_memory_mb: u32,
    pub vertex_shader_hash: String,
    pub fragment_shader_hash: String,
    /// GL capability constants by name, e.g. `MAX_TEXTURE_SIZE`.
    pub parameters: HashMap<&'static str, u32>,
    pub extensions: Vec<String>,
}

struct GpuProfile {
    vendor: &'static str,
    renderer: &'static str,
    memory_mb: u32,
    max_texture_size: u32,
    extensions: &'static [&'static str],
}

const DESKTOP_WINDOWS_LINUX: &[GpuProfile] = &[
    GpuProfile {
        vendor: "Google Inc. (NVIDIA)",
        renderer: "ANGLE (NVIDIA, NVIDIA GeForce RTX 3060 Direct3D11 vs_5_0 ps_5_0, D3D11)",
        memory_mb: 12288,
        max_texture_size: 16384,
        extensions: &["EXT_color_buffer_float", "OES_texture_float_linear", "WEBGL_debug_renderer_info"],
    },
    GpuProfile {
        vendor: "Google Inc. (AMD)",
        renderer: "ANGLE (AMD, AMD Radeon RX 6600 Direct3D11 vs_5_0 ps_5_0, D3D11)",
        memory_mb: 8192,
        max_texture_size: 16384,
        extensions: &["EXT_color_buffer_float", "OES_texture_float_linear", "WEBGL_compressed_texture_s3tc"],
    },
    GpuProfile {
        vendor: "Google Inc. (Intel)",
        renderer: "ANGLE (Intel, Intel(R) UHD Graphics 630 Direct3D11 vs_5_0 ps_5_0, D3D11)",
        memory_mb: 2048,
        max_texture_size: 8192,
        extensions: &["EXT_color_buffer_float", "WEBGL_debug_renderer_info"],
    },
];

const DESKTOP_MAC: &[GpuProfile] = &[
    GpuProfile {
        vendor: "Apple Inc.",
        renderer: "Apple M2",
        memory_mb: 8192,
        max_texture_size: 16384,
        extensions: &["EXT_color_buffer_float", "OES_texture_float_linear"],
    },
    GpuProfile {
        vendor: "Apple Inc.",
        renderer: "Apple M1 Pro",
        memory_mb: 16384,
        max_texture_size: 16384,
        extensions: &["EXT_color_buffer_float", "OES_texture_float_linear"],
    },
];

const MOBILE: &[GpuProfile] = &[
    GpuProfile {
        vendor: "Qualcomm",
        renderer: "Adreno (TM) 740",
        memory_mb: 4096,
        max_texture_size: 8192,
        extensions: &["OES_texture_float_linear"],
    },
    GpuProfile {
        vendor: "ARM",
        renderer: "Mali-G715-Immortalis MC11",
        memory_mb: 4096,
        max_texture_size: 8192,
        extensions: &["OES_texture_float_linear"],
    },
    GpuProfile {
        vendor: "Apple Inc.",
        renderer: "Apple GPU",
        memory_mb: 6144,
        max_texture_size: 8192,
        extensions: &["EXT_color_buffer_float"],
    },
];

fn cache() -> &'static ResultCache<WebGlFingerprint> {
    static CACHE: OnceLock<ResultCache<WebGlFingerprint>> = OnceLock::new();
    CACHE.get_or_init(|| ResultCache::new(64))
}

fn table_for(platform: PlatformName, device: DeviceType) -> &'static [GpuProfile] {
    if matches!(device, DeviceType::Mobile | DeviceType::Tablet) {
        return MOBILE;
    }
    match platform {
        PlatformName::MacOS | PlatformName::Ios => DESKTOP_MAC,
        _ => DESKTOP_WINDOWS_LINUX,
    }
}

/// Select a GPU profile deterministically from `{platform}:{device}` and
/// derive shader hashes and GL parameters from the full identity key, so
/// two browsers on the same GPU still report distinct shader output.
pub fn generate_webgl_fingerprint(
    browser: BrowserType,
    major_version: u32,
    platform: PlatformName,
    device: DeviceType,
) -> WebGlFingerprint {
    let key = format!("{browser}|{major_version}|{platform}|{device}");
    if let Some(hit) = cache().get(&key) {
        return hit;
    }

    let table = table_for(platform, device);
    let gpu_key = format!("{platform}:{device}");
    let idx = deterministic_index("webgl:gpu", &gpu_key, table.len());
    let profile = &table[idx];

    let vertex_shader_hash = namespaced_hash_hex_truncated("webgl:vertex", &key, 16);
    let fragment_shader_hash = namespaced_hash_hex_truncated("webgl:fragment", &key, 16);

    let mut parameters = HashMap::new();
    parameters.insert("MAX_TEXTURE_SIZE", profile.max_texture_size);
    parameters.insert("MAX_VIEWPORT_DIMS", profile.max_texture_size);
    parameters.insert("MAX_VERTEX_ATTRIBS", 16);
    parameters.insert(
        "MAX_COMBINED_TEXTURE_IMAGE_UNITS",
        if profile.max_texture_size >= 16384 { 64 } else { 32 },
    );

    let fp = WebGlFingerprint {
        gpu_vendor: profile.vendor.to_string(),
        gpu_renderer: profile.renderer.to_string(),
        gpu_memory_mb: profile.memory_mb,
        vertex_shader_hash,
        fragment_shader_hash,
        parameters,
        extensions: profile.extensions.iter().map(|s| s.to_string()).collect(),
    };
    cache().put(key, fp.clone());
    fp
}
