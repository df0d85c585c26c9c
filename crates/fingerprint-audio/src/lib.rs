//! # fingerprint-audio
//!
//! AudioContext fingerprint generation: sample-rate selection and
//! oscillator/noise/compressor hash derivation for a sampled browser/
//! platform/device combination. The sample rate is picked deterministically
//! from a per-device-class table, and the per-node hashes are namespaced
//! hashes of the sampled identity.

use fingerprint_core::hashing::{deterministic_index, namespaced_hash_hex_truncated};
use fingerprint_core::types::{DeviceType, PlatformName};

/// AudioContext feature availability gated on browser version. Real browsers
/// before Web Audio API v2 (roughly major version 60 across engines) expose a
/// narrower context surface, which this crate models as `disabled` so callers
/// know not to report AudioWorklet-era fields for old versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioContextFeatures {
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFingerprint {
    pub sample_rate: u32,
    pub channel_count: u32,
    pub oscillator_hash: String,
    pub noise_hash: String,
    pub compressor_hash: String,
    pub context_features: AudioContextFeatures,
}

/// Desktops occasionally run pro-audio interfaces at 96kHz; phone DACs don't.
const DESKTOP_SAMPLE_RATES: &[u32] = &[44100, 48000, 96000];
const MOBILE_SAMPLE_RATES: &[u32] = &[44100, 48000];

fn sample_rate_for(platform: PlatformName, device: DeviceType, key: &str) -> u32 {
    let table = if matches!(device, DeviceType::Mobile | DeviceType::Tablet) || platform == PlatformName::Ios {
        MOBILE_SAMPLE_RATES
    } else {
        DESKTOP_SAMPLE_RATES
    };
    table[deterministic_index("audio:sample_rate", key, table.len())]
}

/// The version below which this crate models AudioContext as feature-limited,
/// matching the rough era Web Audio's modern API surface stabilized across
/// Chromium, Gecko, and WebKit.
const AUDIO_CONTEXT_MODERN_SINCE: u32 = 60;

pub fn generate_audio_fingerprint(
    browser: fingerprint_core::types::BrowserType,
    major_version: u32,
    platform: PlatformName,
    device: DeviceType,
) -> AudioFingerprint {
    let key = format!("{browser}|{major_version}|{platform}|{device}");
    let sample_rate = sample_rate_for(platform, device, &key);
    let channel_count = if matches!(device, DeviceType::Mobile) { 1 } else { 2 };

    AudioFingerprint {
        sample_rate,
        channel_count,
        oscillator_hash: namespaced_hash_hex_truncated("audio:oscillator", &key, 16),
        noise_hash: namespaced_hash_hex_truncated("audio:noise", &key, 16),
        compressor_hash: namespaced_hash_hex_truncated("audio:compressor", &key, 16),
        context_features: AudioContextFeatures {
            disabled: major_version < AUDIO_CONTEXT_MODERN_SINCE,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fingerprint_core::types::BrowserType;

    #[test]
    fn same_identity_is_deterministic() {
        let a = generate_audio_fingerprint(BrowserType::Chrome, 120, PlatformName::Windows, DeviceType::Desktop);
        let b = generate_audio_fingerprint(BrowserType::Chrome, 120, PlatformName::Windows, DeviceType::Desktop);
        assert_eq!(a, b);
    }

    #[test]
    fn old_browser_versions_disable_modern_context_features() {
        let fp = generate_audio_fingerprint(BrowserType::Firefox, 45, PlatformName::Windows, DeviceType::Desktop);
        assert!(fp.context_features.disabled);
    }

    #[test]
    fn modern_browser_versions_enable_context_features() {
        let fp = generate_audio_fingerprint(BrowserType::Firefox, 119, PlatformName::Windows, DeviceType::Desktop);
        assert!(!fp.context_features.disabled);
    }

    #[test]
    fn mobile_devices_are_mono() {
        let fp = generate_audio_fingerprint(BrowserType::Safari, 17, PlatformName::Ios, DeviceType::Mobile);
        assert_eq!(fp.channel_count, 1);
    }

    #[test]
    fn mobile_sample_rates_never_reach_96khz() {
        for version in [60, 100, 120] {
            let fp = generate_audio_fingerprint(BrowserType::Chrome, version, PlatformName::Android, DeviceType::Mobile);
            assert!(MOBILE_SAMPLE_RATES.contains(&fp.sample_rate));
        }
    }
}
