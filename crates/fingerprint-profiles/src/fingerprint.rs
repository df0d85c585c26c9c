//! The `Fingerprint` record: the base profile produced by
//! [`crate::builder::build_fingerprint`], before the headers/TLS/canvas
//! derivation modules attach their own sub-records. Those sub-records are
//! deliberately NOT fields here; this crate has no dependency on
//! fingerprint-headers/-tls/-canvas/-webgl/-audio/-fonts, so the facade crate
//! owns the fully enriched result type and merges everything together.

use fingerprint_core::types::{BrowserType, DeviceType, PlatformName};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BrowserInfo {
    pub name: BrowserType,
    pub version: u32,
    pub major_version: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlatformInfo {
    pub name: PlatformName,
    pub version: String,
    pub architecture: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ScreenInfo {
    pub width: u32,
    pub height: u32,
    pub color_depth: u32,
    pub pixel_ratio: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DeviceInfo {
    pub device_type: DeviceType,
    pub platform: PlatformInfo,
    pub screen: ScreenInfo,
    pub hardware_concurrency: u32,
    pub device_memory: u32,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TimezoneInfo {
    pub name: &'static str,
    pub offset_minutes: i32,
    pub dst_observed: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct PluginInfo {
    pub name: String,
    pub description: String,
    pub filename: String,
    pub version: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MultimediaDevices {
    pub speakers: u32,
    pub microphones: u32,
    pub webcams: u32,
}

impl Default for MultimediaDevices {
    fn default() -> Self {
        Self {
            speakers: 2,
            microphones: 1,
            webcams: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Fingerprint {
    pub user_agent: String,
    pub browser: BrowserInfo,
    pub device: DeviceInfo,
    pub locale: String,
    pub timezone: TimezoneInfo,
    pub languages: Vec<String>,
    pub cookies_enabled: bool,
    pub plugins: Vec<PluginInfo>,
    pub multimedia_devices: MultimediaDevices,
    /// First 16 hex chars of SHA-256 over the base assignment.
    pub fingerprint_hash: String,
}
