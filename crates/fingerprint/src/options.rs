//! The orchestrator's public request shape: `GenerationOptions` and the
//! partial `FingerprintOverrides` merged onto a sampled profile. A bag of
//! optional restrictions with documented defaults, validated eagerly before
//! the expensive work runs.

use fingerprint_headers::HeaderOptions;
use fingerprint_network::BrowserConstraint;

/// A requested browser, optionally with a version range to draw from.
#[derive(Debug, Clone)]
pub struct BrowserSpec {
    pub name: String,
    pub min_version: Option<u32>,
    pub max_version: Option<u32>,
}

impl BrowserSpec {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), min_version: None, max_version: None }
    }
}

impl From<&BrowserSpec> for BrowserConstraint {
    fn from(spec: &BrowserSpec) -> Self {
        BrowserConstraint {
            name: spec.name.clone(),
            min_version: spec.min_version,
            max_version: spec.max_version,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OperatingSystemSpec {
    pub name: String,
    pub version: Option<String>,
    pub architecture: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ScreenResolutionSpec {
    pub width: u32,
    pub height: u32,
    pub color_depth: Option<u32>,
}

impl ScreenResolutionSpec {
    pub fn label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVersionOption {
    Http1,
    Http2,
}

/// A partial `Fingerprint`, merged onto the sampled base profile after the
/// network has run. Only the fields named here are overridable; everything
/// else the sampler produced is kept.
#[derive(Debug, Clone, Default)]
pub struct FingerprintOverrides {
    pub browser: Option<String>,
    pub browser_version: Option<u32>,
    pub platform: Option<String>,
    pub locale: Option<String>,
    pub languages: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub browsers: Vec<BrowserSpec>,
    pub devices: Vec<String>,
    pub operating_systems: Vec<OperatingSystemSpec>,
    pub screen_resolutions: Vec<ScreenResolutionSpec>,
    pub locales: Vec<String>,
    pub http_version: HttpVersionOption,
    pub include_headers: bool,
    pub include_tls: bool,
    pub include_canvas: bool,
    pub header_options: HeaderOptions,
    pub overrides: Option<FingerprintOverrides>,
    pub force_regenerate: bool,
    pub random_seed: Option<u64>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            browsers: Vec::new(),
            devices: Vec::new(),
            operating_systems: Vec::new(),
            screen_resolutions: Vec::new(),
            locales: Vec::new(),
            http_version: HttpVersionOption::Http2,
            include_headers: true,
            include_tls: true,
            include_canvas: true,
            header_options: HeaderOptions::default(),
            overrides: None,
            force_regenerate: false,
            random_seed: None,
        }
    }
}

impl GenerationOptions {
    /// A stable textual key for the result cache. `GenerationOptions` carries
    /// no maps, so field-order concatenation is already canonical; unlike a
    /// `HashMap`-backed encoding, there is no iteration-order hazard to
    /// normalize away.
    pub fn cache_key(&self) -> String {
        let browsers: Vec<String> = self
            .browsers
            .iter()
            .map(|b| format!("{}:{:?}:{:?}", b.name, b.min_version, b.max_version))
            .collect();
        let resolutions: Vec<String> = self.screen_resolutions.iter().map(|r| r.label()).collect();
        let oses: Vec<String> = self
            .operating_systems
            .iter()
            .map(|o| format!("{}:{:?}:{:?}", o.name, o.version, o.architecture))
            .collect();
        let overrides = self
            .overrides
            .as_ref()
            .map(|o| {
                format!(
                    "{:?}:{:?}:{:?}:{:?}:{:?}",
                    o.browser, o.browser_version, o.platform, o.locale, o.languages
                )
            })
            .unwrap_or_default();
        format!(
            "b=[{}]|d=[{}]|os=[{}]|sr=[{}]|loc=[{}]|http={:?}|h={}|t={}|c={}|ho={:?}|ov=[{overrides}]|seed={:?}",
            browsers.join(","),
            self.devices.join(","),
            oses.join(","),
            resolutions.join(","),
            self.locales.join(","),
            self.http_version,
            self.include_headers,
            self.include_tls,
            self.include_canvas,
            self.header_options,
            self.random_seed,
        )
    }
}
