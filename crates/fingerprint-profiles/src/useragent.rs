//! Parametric user-agent composition.
//!
//! A fixed string table keyed by profile name (`"chrome_120"` and so on)
//! doesn't compose with a sampled `(browser, version, platform, os_version)`
//! tuple, so the string is built directly from those parts; the platform
//! token comes from [`PlatformName::ua_token`] rather than a separately
//! maintained OS table.

use fingerprint_core::types::{BrowserType, PlatformName};

/// Compose a `user-agent` string for the given browser/version/platform.
pub fn compose_user_agent(
    browser: BrowserType,
    version: u32,
    platform: PlatformName,
    os_version: &str,
) -> String {
    let platform_token = platform.ua_token(os_version);
    match browser {
        BrowserType::Chrome => format!(
            "Mozilla/5.0 ({platform_token}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version}.0.0.0 Safari/537.36"
        ),
        BrowserType::Edge => format!(
            "Mozilla/5.0 ({platform_token}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version}.0.0.0 Safari/537.36 Edg/{version}.0.0.0"
        ),
        BrowserType::Opera => format!(
            "Mozilla/5.0 ({platform_token}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{chrome_version}.0.0.0 Safari/537.36 OPR/{version}.0.0.0",
            chrome_version = version + 14,
        ),
        BrowserType::Firefox => format!(
            "Mozilla/5.0 ({platform_token}; rv:{version}.0) Gecko/20100101 Firefox/{version}.0"
        ),
        BrowserType::Safari => {
            let webkit_patch = 15 + (version % 5);
            match platform {
                PlatformName::Ios => format!(
                    "Mozilla/5.0 ({platform_token}) AppleWebKit/605.1.{webkit_patch} (KHTML, like Gecko) Version/{version}.0 Mobile/15E148 Safari/604.1"
                ),
                _ => format!(
                    "Mozilla/5.0 ({platform_token}) AppleWebKit/605.1.{webkit_patch} (KHTML, like Gecko) Version/{version}.0 Safari/605.1.{webkit_patch}"
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_ua_embeds_version_twice() {
        let ua = compose_user_agent(BrowserType::Chrome, 120, PlatformName::Windows, "10");
        assert_eq!(ua.matches("Chrome/120.0.0.0").count(), 1);
        assert!(ua.contains("Windows NT 10.0"));
    }

    #[test]
    fn edge_ua_carries_both_chrome_and_edge_tokens() {
        let ua = compose_user_agent(BrowserType::Edge, 120, PlatformName::Windows, "10");
        assert!(ua.contains("Chrome/120.0.0.0"));
        assert!(ua.contains("Edg/120.0.0.0"));
    }

    #[test]
    fn firefox_ua_has_no_webkit_token() {
        let ua = compose_user_agent(BrowserType::Firefox, 119, PlatformName::Linux, "");
        assert!(!ua.contains("AppleWebKit"));
        assert!(ua.contains("Firefox/119.0"));
    }

    #[test]
    fn safari_ios_ua_differs_from_desktop() {
        let ios = compose_user_agent(BrowserType::Safari, 17, PlatformName::Ios, "17.0");
        let mac = compose_user_agent(BrowserType::Safari, 17, PlatformName::MacOS, "14.0");
        assert!(ios.contains("Mobile/15E148"));
        assert!(!mac.contains("Mobile/15E148"));
    }
}
