//! The base-profile builder: turns a sampled [`Assignment`] into a
//! [`Fingerprint`] by parsing the resolution label, composing the user-agent,
//! and deriving the hardware fields the assignment implies.

use crate::fingerprint::{
    BrowserInfo, DeviceInfo, Fingerprint, MultimediaDevices, PlatformInfo, PluginInfo,
    ScreenInfo, TimezoneInfo,
};
use crate::useragent::compose_user_agent;
use fingerprint_core::error::{FingerprintError, Result};
use fingerprint_core::types::{BrowserType, DeviceType, PlatformName};
use fingerprint_core::{sha256_hex_truncated, SeededRng};
use fingerprint_network::Assignment;

/// Default OS version advertised per platform. Real browsers lag the
/// latest OS release by months, so these track "current enough to be
/// unremarkable" rather than bleeding-edge.
fn default_os_version(platform: PlatformName) -> &'static str {
    match platform {
        PlatformName::Windows => "10",
        PlatformName::MacOS => "14.0",
        PlatformName::Linux => "",
        PlatformName::Ios => "17.0",
        PlatformName::Android => "13",
    }
}

fn device_memory_for(hardware_concurrency: u32) -> u32 {
    match hardware_concurrency {
        0..=2 => 4,
        3..=4 => 8,
        5..=6 => 12,
        7..=8 => 16,
        9..=12 => 24,
        13.. => 32,
    }
}

fn default_plugins(browser: BrowserType) -> Vec<PluginInfo> {
    if browser.is_chromium_family() {
        vec![PluginInfo {
            name: "Chrome PDF Plugin".to_string(),
            description: "Portable Document Format".to_string(),
            filename: "internal-pdf-viewer".to_string(),
            version: String::new(),
        }]
    } else {
        Vec::new()
    }
}

fn required(assignment: &Assignment, node: &str) -> Result<String> {
    assignment
        .get(node)
        .cloned()
        .ok_or_else(|| FingerprintError::InvalidEvidence {
            node: node.to_string(),
            value: "<absent>".to_string(),
        })
}

/// Parse a `"WxH"` screen-resolution label into `(width, height)`.
fn parse_resolution(label: &str) -> Result<(u32, u32)> {
    let (w, h) = label.split_once('x').ok_or_else(|| FingerprintError::InvalidEvidence {
        node: "screen_resolution".to_string(),
        value: label.to_string(),
    })?;
    let width: u32 = w.parse().map_err(|_| FingerprintError::InvalidEvidence {
        node: "screen_resolution".to_string(),
        value: label.to_string(),
    })?;
    let height: u32 = h.parse().map_err(|_| FingerprintError::InvalidEvidence {
        node: "screen_resolution".to_string(),
        value: label.to_string(),
    })?;
    Ok((width, height))
}

/// Build the base [`Fingerprint`] from a fully-sampled network [`Assignment`].
///
/// `rng` is used only for the cosmetic fields the network doesn't declare
/// nodes for (pixel ratio, color depth); everything the network assigned is
/// taken verbatim rather than re-sampled.
pub fn build_fingerprint(assignment: &Assignment, rng: &mut SeededRng) -> Result<Fingerprint> {
    let browser_label = required(assignment, "browser")?;
    let browser = BrowserType::from_label(&browser_label).ok_or_else(|| FingerprintError::InvalidEvidence {
        node: "browser".to_string(),
        value: browser_label.clone(),
    })?;

    let platform_label = required(assignment, "platform")?;
    let platform = PlatformName::from_label(&platform_label).ok_or_else(|| FingerprintError::InvalidEvidence {
        node: "platform".to_string(),
        value: platform_label.clone(),
    })?;

    let device_label = required(assignment, "device")?;
    let device_type = DeviceType::from_label(&device_label).ok_or_else(|| FingerprintError::InvalidEvidence {
        node: "device".to_string(),
        value: device_label.clone(),
    })?;

    let browser_version_label = required(assignment, "browser_version")?;
    let version: u32 = browser_version_label
        .parse()
        .map_err(|_| FingerprintError::InvalidEvidence {
            node: "browser_version".to_string(),
            value: browser_version_label.clone(),
        })?;

    let hardware_concurrency_label = required(assignment, "hardware_concurrency")?;
    let hardware_concurrency: u32 = hardware_concurrency_label
        .parse()
        .map_err(|_| FingerprintError::InvalidEvidence {
            node: "hardware_concurrency".to_string(),
            value: hardware_concurrency_label.clone(),
        })?;

    let resolution_label = assignment
        .get("screen_resolution")
        .cloned()
        .unwrap_or_else(|| "1920x1080".to_string());
    let (width, height) = parse_resolution(&resolution_label)?;

    let os_version = default_os_version(platform);
    let user_agent = compose_user_agent(browser, version, platform, os_version);

    let pixel_ratio = match device_type {
        DeviceType::Desktop => 1.0,
        DeviceType::Mobile | DeviceType::Tablet => {
            if rng.next_bool(0.6) {
                2.0
            } else {
                3.0
            }
        }
    };

    let color_depth = 24;
    let device_memory = device_memory_for(hardware_concurrency);

    let architecture = match platform {
        PlatformName::Windows | PlatformName::Linux => "x86_64",
        PlatformName::MacOS => "arm64",
        PlatformName::Ios | PlatformName::Android => "arm64",
    };

    // The hash preimage is the bare identity string, no namespace prefix.
    let fingerprint_hash = sha256_hex_truncated(
        &format!("{browser}:{version}:{device_type}:{platform}:{resolution_label}:en-US"),
        16,
    );

    Ok(Fingerprint {
        user_agent,
        browser: BrowserInfo {
            name: browser,
            version,
            major_version: version,
        },
        device: DeviceInfo {
            device_type,
            platform: PlatformInfo {
                name: platform,
                version: os_version.to_string(),
                architecture: architecture.to_string(),
            },
            screen: ScreenInfo {
                width,
                height,
                color_depth,
                pixel_ratio,
            },
            hardware_concurrency,
            device_memory,
        },
        locale: "en-US".to_string(),
        timezone: TimezoneInfo {
            name: "America/New_York",
            offset_minutes: -300,
            dst_observed: true,
        },
        languages: vec!["en-US".to_string(), "en".to_string()],
        cookies_enabled: true,
        plugins: default_plugins(browser),
        multimedia_devices: MultimediaDevices::default(),
        fingerprint_hash,
    })
}
