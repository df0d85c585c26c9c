//! Quality/uniqueness/consistency/bypass-confidence scoring: many small
//! validators, each returning `(score, warnings)`, averaged into the four
//! headline numbers a caller sees on every `GenerationResult`.

use crate::result::EnrichedFingerprint;
use fingerprint_core::types::PlatformName;

/// The label a real browser sends in `Sec-CH-UA-Platform`, which follows the
/// Client Hints spec's display names rather than the lowercase node labels
/// used internally (`PlatformName::as_str`). Shared with the orchestrator so
/// the header it generates and the check here never drift apart.
pub(crate) fn client_hints_platform_label(platform: PlatformName) -> &'static str {
    match platform {
        PlatformName::Windows => "Windows",
        PlatformName::MacOS => "macOS",
        PlatformName::Linux => "Linux",
        PlatformName::Ios => "iOS",
        PlatformName::Android => "Android",
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// User-agent/client-hints/required-header consistency.
fn validate_headers(enriched: &EnrichedFingerprint) -> (f64, Vec<String>) {
    let mut warnings = Vec::new();
    let Some(headers) = enriched.headers.as_ref() else {
        return (0.6, warnings);
    };

    let mut score: f64 = 1.0;

    match headers.get("User-Agent") {
        Some(ua) if ua == &enriched.base.user_agent => {}
        Some(_) => {
            warnings.push("header user-agent does not match fingerprint.user_agent".to_string());
            score -= 0.3;
        }
        None => {
            warnings.push("missing required header: user-agent".to_string());
            score -= 0.4;
        }
    }

    for required in ["Accept", "Accept-Language", "Accept-Encoding"] {
        if !headers.contains_key(required) {
            warnings.push(format!("missing required header: {required}"));
            score -= 0.2;
        }
    }

    if let Some(platform_hint) = headers.get("Sec-CH-UA-Platform") {
        let expected = format!("\"{}\"", client_hints_platform_label(enriched.base.device.platform.name));
        if platform_hint != &expected {
            warnings.push(format!(
                "sec-ch-ua-platform `{platform_hint}` does not match device platform `{}`",
                enriched.base.device.platform.name
            ));
            score -= 0.3;
        }
    }

    if headers.contains_key("Sec-CH-UA") && !headers.contains_key("Sec-CH-UA-Mobile") {
        warnings.push("sec-ch-ua present without sec-ch-ua-mobile".to_string());
        score -= 0.2;
    }

    if let Some(accept_language) = headers.get("Accept-Language") {
        if !accept_language_q_values_well_formed(accept_language) {
            warnings.push(format!("malformed q-value in accept-language `{accept_language}`"));
            score -= 0.2;
        }
    }

    (score.max(0.0), warnings)
}

/// Every `;q=` parameter in an `accept-language` value must parse as a float
/// in `(0, 1]`.
fn accept_language_q_values_well_formed(value: &str) -> bool {
    value.split(',').all(|entry| match entry.split_once(";q=") {
        Some((_, q)) => q.parse::<f64>().map_or(false, |q| q > 0.0 && q <= 1.0),
        None => true,
    })
}

/// The first release of each family that negotiated TLS 1.3 by default.
fn tls13_since(browser: fingerprint_core::types::BrowserType) -> u32 {
    use fingerprint_core::types::BrowserType;
    match browser {
        BrowserType::Chrome => 70,
        BrowserType::Edge => 79,
        BrowserType::Opera => 57,
        BrowserType::Firefox => 63,
        BrowserType::Safari => 12,
    }
}

/// TLS-version/ALPN consistency with the browser's major version.
fn validate_tls(enriched: &EnrichedFingerprint) -> (f64, Vec<String>) {
    let mut warnings = Vec::new();
    let Some(tls) = enriched.tls.as_ref() else {
        return (0.6, warnings);
    };

    let mut score: f64 = 1.0;
    if !tls.alpn.iter().any(|p| p == "h2") {
        warnings.push("TLS record lacks h2 in ALPN for a browser where HTTP/2 is standard".to_string());
        score -= 0.4;
    }

    let browser = enriched.base.browser.name;
    let major = enriched.base.browser.major_version;
    let advertises_tls13 = tls.supported_versions.iter().any(|v| v == "TLS 1.3");
    if advertises_tls13 && major < tls13_since(browser) {
        warnings.push(format!(
            "TLS 1.3 advertised but {browser} {major} predates TLS 1.3 support"
        ));
        score -= 0.3;
    }

    (score.max(0.0), warnings)
}

/// Canvas color-depth/pixel-ratio/hardware-acceleration consistency with the
/// device's own screen and device class.
fn validate_canvas(enriched: &EnrichedFingerprint) -> (f64, Vec<String>) {
    let mut warnings = Vec::new();
    let Some(canvas) = enriched.canvas.as_ref() else {
        return (0.6, warnings);
    };

    let mut score: f64 = 1.0;
    if canvas.rendering_quality.color_depth != enriched.base.device.screen.color_depth {
        warnings.push("canvas color depth does not match device screen color depth".to_string());
        score -= 0.3;
    }
    if (canvas.rendering_quality.pixel_ratio - enriched.base.device.screen.pixel_ratio).abs() > f64::EPSILON {
        warnings.push("canvas pixel ratio does not match device screen pixel ratio".to_string());
        score -= 0.3;
    }
    (score.max(0.0), warnings)
}

/// Browser/platform combinations the sampler never produces on its own but
/// an override can still force.
fn incompatible_browser_platform(enriched: &EnrichedFingerprint) -> Option<String> {
    use fingerprint_core::types::{BrowserType, PlatformName};
    let browser = enriched.base.browser.name;
    let platform = enriched.base.device.platform.name;
    let incompatible = matches!(
        (browser, platform),
        (BrowserType::Safari, PlatformName::Windows)
            | (BrowserType::Safari, PlatformName::Linux)
            | (BrowserType::Safari, PlatformName::Android)
    );
    incompatible.then(|| format!("{browser} does not ship on {platform}"))
}

pub struct Scores {
    pub quality: f64,
    pub uniqueness: f64,
    pub consistency: f64,
    pub bypass_confidence: f64,
    pub warnings: Vec<String>,
}

pub fn score(enriched: &EnrichedFingerprint) -> Scores {
    const BASE_QUALITY: f64 = 0.9;

    let mut warnings = Vec::new();

    let (headers_score, headers_warnings) = validate_headers(enriched);
    let (tls_score, tls_warnings) = validate_tls(enriched);
    let (canvas_score, canvas_warnings) = validate_canvas(enriched);
    warnings.extend(headers_warnings);
    warnings.extend(tls_warnings.clone());
    warnings.extend(canvas_warnings);

    let tls_present = if enriched.tls.is_some() { 1.0 } else { 0.6 };
    let quality = mean(&[BASE_QUALITY, headers_score, tls_present, canvas_score]);

    let hash_present = if enriched.base.fingerprint_hash.is_empty() { 0.6 } else { 1.0 };
    let header_uniqueness = if enriched
        .headers
        .as_ref()
        .map(|h| h.contains_key("Sec-CH-UA"))
        .unwrap_or(false)
    {
        0.95
    } else if enriched.headers.is_some() {
        0.8
    } else {
        0.6
    };
    let ja3_present = enriched
        .tls
        .as_ref()
        .map(|t| if t.ja3_hash.is_empty() { 0.6 } else { 1.0 })
        .unwrap_or(0.6);
    let uniqueness = mean(&[hash_present, header_uniqueness, ja3_present]);

    let mut consistency = mean(&[headers_score, tls_score, canvas_score]);
    if let Some(reason) = incompatible_browser_platform(enriched) {
        warnings.push(reason);
        consistency = consistency.min(0.79);
    }

    let bypass_confidence = 0.3 * quality + 0.4 * uniqueness + 0.3 * consistency;

    Scores {
        quality: quality.clamp(0.0, 1.0),
        uniqueness: uniqueness.clamp(0.0, 1.0),
        consistency: consistency.clamp(0.0, 1.0),
        bypass_confidence: bypass_confidence.clamp(0.0, 1.0),
        warnings,
    }
}
