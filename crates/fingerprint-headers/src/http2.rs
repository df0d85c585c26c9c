//! HTTP/2 SETTINGS tables per browser family. Dispatches on `BrowserType`
//! rather than one function per browser name, since Edge and Opera share
//! Chrome's Chromium-derived settings table exactly.

use fingerprint_core::types::BrowserType;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Http2SettingId {
    HeaderTableSize = 1,
    EnablePush = 2,
    MaxConcurrentStreams = 3,
    InitialWindowSize = 4,
    MaxFrameSize = 5,
    MaxHeaderListSize = 6,
}

impl Http2SettingId {
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }
}

pub type Http2Settings = HashMap<u16, u32>;

/// Per-browser HTTP/2 SETTINGS frame values.
pub fn http2_settings(browser: BrowserType) -> Http2Settings {
    use Http2SettingId::*;
    let mut settings = HashMap::new();
    let initial_window_size: u32 = match browser {
        BrowserType::Chrome | BrowserType::Opera | BrowserType::Edge => 6_291_456,
        BrowserType::Firefox => 131_072,
        BrowserType::Safari => 65_535,
    };
    let max_concurrent_streams: u32 = if matches!(browser, BrowserType::Safari) {
        100
    } else {
        1000
    };
    let max_frame_size: u32 = if matches!(browser, BrowserType::Safari) {
        16_777_215
    } else {
        16_384
    };

    settings.insert(HeaderTableSize.as_u16(), 65536);
    settings.insert(EnablePush.as_u16(), 0);
    settings.insert(MaxConcurrentStreams.as_u16(), max_concurrent_streams);
    settings.insert(InitialWindowSize.as_u16(), initial_window_size);
    settings.insert(MaxFrameSize.as_u16(), max_frame_size);
    settings.insert(MaxHeaderListSize.as_u16(), 262_144);

    settings
}
