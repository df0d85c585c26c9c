//! HTTP header derivation: request-type-aware Accept/Accept-Language/
//! Accept-Encoding/Sec-Fetch-*/Client-Hints composition, with per-browser
//! literal tables for the values that differ across engines.

use fingerprint_core::types::BrowserType;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    Navigation,
    XhrFetch,
    Subresource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Document,
    Image,
    Script,
    Stylesheet,
    Font,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVersion {
    Http1,
    Http2,
}

#[derive(Debug, Clone)]
pub struct HeaderOptions {
    pub request_type: RequestType,
    pub resource_type: ResourceType,
    pub include_client_hints: bool,
    pub include_dnt: bool,
    pub http_version: HttpVersion,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            request_type: RequestType::Navigation,
            resource_type: ResourceType::Document,
            include_client_hints: true,
            include_dnt: false,
            http_version: HttpVersion::Http2,
        }
    }
}

/// Standard HTTP request headers for one request. Empty fields are omitted
/// from the map `to_map` produces.
#[derive(Debug, Clone, Default)]
pub struct HTTPHeaders {
    pub accept: String,
    pub accept_language: String,
    pub accept_encoding: String,
    pub user_agent: String,
    pub sec_fetch_site: String,
    pub sec_fetch_mode: String,
    pub sec_fetch_user: String,
    pub sec_fetch_dest: String,
    pub sec_ch_ua: String,
    pub sec_ch_ua_mobile: String,
    pub sec_ch_ua_platform: String,
    pub upgrade_insecure_requests: String,
    pub dnt: String,
    pub custom: HashMap<String, String>,
}

impl HTTPHeaders {
    pub fn to_map(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        let mut insert = |k: &str, v: &str| {
            if !v.is_empty() {
                headers.insert(k.to_string(), v.to_string());
            }
        };
        insert("Accept", &self.accept);
        insert("Accept-Language", &self.accept_language);
        insert("Accept-Encoding", &self.accept_encoding);
        insert("User-Agent", &self.user_agent);
        insert("Sec-Fetch-Site", &self.sec_fetch_site);
        insert("Sec-Fetch-Mode", &self.sec_fetch_mode);
        insert("Sec-Fetch-User", &self.sec_fetch_user);
        insert("Sec-Fetch-Dest", &self.sec_fetch_dest);
        insert("Sec-CH-UA", &self.sec_ch_ua);
        insert("Sec-CH-UA-Mobile", &self.sec_ch_ua_mobile);
        insert("Sec-CH-UA-Platform", &self.sec_ch_ua_platform);
        insert("Upgrade-Insecure-Requests", &self.upgrade_insecure_requests);
        insert("DNT", &self.dnt);
        for (k, v) in &self.custom {
            if !v.is_empty() {
                headers.insert(k.clone(), v.clone());
            }
        }
        headers
    }
}

fn accept_for(browser: BrowserType, resource_type: ResourceType) -> &'static str {
    match resource_type {
        ResourceType::Document => match browser {
            BrowserType::Chrome | BrowserType::Opera | BrowserType::Edge => {
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7"
            }
            BrowserType::Firefox => {
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8"
            }
            BrowserType::Safari => "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        },
        ResourceType::Image => "image/avif,image/webp,image/apng,image/svg+xml,image/*,*/*;q=0.8",
        ResourceType::Stylesheet => "text/css,*/*;q=0.1",
        ResourceType::Script => "*/*",
        ResourceType::Font => "*/*",
    }
}

/// Firefox gained Brotli over HTTPS in release 44.
const FIREFOX_BROTLI_SINCE: u32 = 44;

/// Every Chromium-family browser offers `br`/`zstd`; Safari never advertises
/// Brotli over plain HTTP regardless of version.
fn accept_encoding_for(browser: BrowserType, major_version: u32) -> &'static str {
    match browser {
        BrowserType::Chrome | BrowserType::Opera | BrowserType::Edge => "gzip, deflate, br, zstd",
        BrowserType::Firefox if major_version >= FIREFOX_BROTLI_SINCE => "gzip, deflate, br",
        BrowserType::Firefox => "gzip, deflate",
        BrowserType::Safari => "gzip, deflate",
    }
}

/// `accept-language` value: the first language bare, the rest with q-values
/// stepping down from 0.9 in 0.1 decrements, floored at 0.1.
fn accept_language_for(languages: &[String]) -> String {
    languages
        .iter()
        .enumerate()
        .map(|(i, lang)| {
            if i == 0 {
                lang.clone()
            } else {
                let q = (0.9 - 0.1 * (i as f64 - 1.0)).max(0.1);
                format!("{lang};q={q:.1}")
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn sec_ch_ua(browser: BrowserType, major_version: u32) -> String {
    match browser {
        BrowserType::Chrome => format!(
            r#""Not(A:Brand";v="99", "Google Chrome";v="{major_version}", "Chromium";v="{major_version}""#
        ),
        BrowserType::Edge => format!(
            r#""Not(A:Brand";v="99", "Microsoft Edge";v="{major_version}", "Chromium";v="{major_version}""#
        ),
        BrowserType::Opera => format!(
            r#""Opera";v="{major_version}", "Chromium";v="{chromium}", "Not A(Brand";v="8""#,
            chromium = major_version + 14,
        ),
        BrowserType::Firefox | BrowserType::Safari => String::new(),
    }
}

/// Builds the standard request headers for a sampled fingerprint hitting a
/// given resource: Client Hints are Chromium-only, Safari never advertises
/// `br`, `Sec-Fetch-*` only appears on navigations and HTTP/2+ subresource
/// loads, DNT is opt-in.
///
/// Returns the header set plus any non-fatal validation warnings (e.g. the
/// caller asked for Client Hints on a non-Chromium browser).
pub fn generate_headers(
    browser: BrowserType,
    major_version: u32,
    platform_sec_ch_ua: &str,
    is_mobile: bool,
    user_agent: &str,
    languages: &[String],
    options: &HeaderOptions,
) -> (HTTPHeaders, Vec<String>) {
    let mut warnings = Vec::new();
    let mut headers = HTTPHeaders {
        user_agent: user_agent.to_string(),
        accept: accept_for(browser, options.resource_type).to_string(),
        accept_encoding: accept_encoding_for(browser, major_version).to_string(),
        accept_language: accept_language_for(languages),
        ..Default::default()
    };

    if matches!(options.request_type, RequestType::Navigation) {
        headers.sec_fetch_site = "none".to_string();
        headers.sec_fetch_mode = "navigate".to_string();
        headers.sec_fetch_user = "?1".to_string();
        headers.sec_fetch_dest = "document".to_string();
        if !matches!(browser, BrowserType::Firefox) {
            headers.upgrade_insecure_requests = "1".to_string();
        }
    } else if matches!(options.http_version, HttpVersion::Http2) {
        headers.sec_fetch_site = "same-origin".to_string();
        headers.sec_fetch_mode = match options.request_type {
            RequestType::XhrFetch => "cors".to_string(),
            _ => "no-cors".to_string(),
        };
        headers.sec_fetch_dest = match options.resource_type {
            ResourceType::Image => "image".to_string(),
            ResourceType::Script => "script".to_string(),
            ResourceType::Stylesheet => "style".to_string(),
            ResourceType::Font => "font".to_string(),
            ResourceType::Document => "empty".to_string(),
        };
    }

    if options.include_client_hints {
        if browser.is_chromium_family() {
            headers.sec_ch_ua = sec_ch_ua(browser, major_version);
            headers.sec_ch_ua_mobile = if is_mobile { "?1" } else { "?0" }.to_string();
            headers.sec_ch_ua_platform = platform_sec_ch_ua.to_string();
        } else {
            warnings.push(format!(
                "Client Hints requested for non-Chromium browser `{browser}`; ignored"
            ));
        }
    }

    if options.include_dnt {
        headers.dnt = "1".to_string();
    }

    (headers, warnings)
}
