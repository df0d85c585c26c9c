//! Shared vocabulary types used across the generation pipeline: browser
//! family, device class, and platform identity. Kept in `fingerprint-core` so
//! the network, profile builder, and all three derivation modules agree on
//! the same value sets without circular crate dependencies.

use serde::{Deserialize, Serialize};

/// Browser family. Matches the `browser` node's legal value set in the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrowserType {
    Chrome,
    Firefox,
    Safari,
    Opera,
    Edge,
}

impl BrowserType {
    /// Named `from_label` rather than `from_str` to avoid colliding with the
    /// std `FromStr` trait while still exposing a plain associated function.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "chrome" => Some(Self::Chrome),
            "firefox" => Some(Self::Firefox),
            "safari" => Some(Self::Safari),
            "opera" => Some(Self::Opera),
            "edge" => Some(Self::Edge),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Firefox => "firefox",
            Self::Safari => "safari",
            Self::Opera => "opera",
            Self::Edge => "edge",
        }
    }

    /// Chromium-family browsers share Client Hints, `accept-encoding: br`,
    /// and HTTP/2 settings tables.
    pub fn is_chromium_family(&self) -> bool {
        matches!(self, Self::Chrome | Self::Opera | Self::Edge)
    }
}

impl std::fmt::Display for BrowserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Device class. Matches the `device` node's legal value set in the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceType {
    Desktop,
    Mobile,
    Tablet,
}

impl DeviceType {
    pub fn from_label(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "desktop" => Some(Self::Desktop),
            "mobile" => Some(Self::Mobile),
            "tablet" => Some(Self::Tablet),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
        }
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Platform (operating system) family. Matches the `platform` node's legal
/// value set in the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformName {
    Windows,
    MacOS,
    Linux,
    Ios,
    Android,
}

impl PlatformName {
    pub fn from_label(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "windows" => Some(Self::Windows),
            "macos" => Some(Self::MacOS),
            "linux" => Some(Self::Linux),
            "ios" => Some(Self::Ios),
            "android" => Some(Self::Android),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::MacOS => "macos",
            Self::Linux => "linux",
            Self::Ios => "ios",
            Self::Android => "android",
        }
    }

    /// The UA-embedded platform token for a given OS version string, e.g.
    /// `"Windows"` + `"11"` -> `"Windows NT 10.0; Win64; x64"` (Windows 11
    /// still reports NT 10.0 in the UA string, matching real browsers),
    /// `"MacOS"` + `"14.0"` -> `"Macintosh; Intel Mac OS X 14_0_0"`.
    pub fn ua_token(&self, os_version: &str) -> String {
        match self {
            Self::Windows => "Windows NT 10.0; Win64; x64".to_string(),
            Self::MacOS => {
                let underscored = os_version.replace('.', "_");
                format!("Macintosh; Intel Mac OS X {underscored}_0")
            }
            Self::Linux => "X11; Linux x86_64".to_string(),
            Self::Ios => format!(
                "iPhone; CPU iPhone OS {} like Mac OS X",
                os_version.replace('.', "_")
            ),
            Self::Android => format!("Linux; Android {os_version}"),
        }
    }
}

impl std::fmt::Display for PlatformName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
