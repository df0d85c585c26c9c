//! Caller-supplied restrictions, realized into evidence before sampling.

use fingerprint_core::SeededRng;
use std::collections::HashMap;

/// A requested browser, optionally with a version range to draw from
/// uniformly rather than letting the network pick its own version.
#[derive(Debug, Clone)]
pub struct BrowserConstraint {
    pub name: String,
    pub min_version: Option<u32>,
    pub max_version: Option<u32>,
}

impl BrowserConstraint {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_version: None,
            max_version: None,
        }
    }
}

/// The realized form of `GenerationOptions`' `browsers`/`devices`/
/// `operating_systems`/`screen_resolutions` fields, restricted to the
/// fields the network's nodes can constrain.
#[derive(Debug, Clone, Default)]
pub struct FingerprintConstraints {
    pub browsers: Vec<BrowserConstraint>,
    pub devices: Vec<String>,
    pub platforms: Vec<String>,
    pub screen_resolutions: Vec<String>,
}

impl FingerprintConstraints {
    /// Resolve each non-empty list into a single evidence entry, using the
    /// RNG for tie-breaking among equally-eligible choices.
    pub fn realize(&self, rng: &mut SeededRng) -> HashMap<String, String> {
        let mut evidence = HashMap::new();

        if !self.browsers.is_empty() {
            let idx = rng.next_range_inclusive(0, self.browsers.len() as i64 - 1) as usize;
            let chosen = &self.browsers[idx];
            evidence.insert("browser".to_string(), chosen.name.clone());
            if let (Some(min), Some(max)) = (chosen.min_version, chosen.max_version) {
                let version = rng.next_range_inclusive(min as i64, max as i64);
                evidence.insert("browser_version".to_string(), version.to_string());
            }
        }

        if !self.devices.is_empty() {
            let idx = rng.next_range_inclusive(0, self.devices.len() as i64 - 1) as usize;
            evidence.insert("device".to_string(), self.devices[idx].clone());
        }

        if !self.platforms.is_empty() {
            let idx = rng.next_range_inclusive(0, self.platforms.len() as i64 - 1) as usize;
            evidence.insert("platform".to_string(), self.platforms[idx].clone());
        }

        if !self.screen_resolutions.is_empty() {
            let idx = rng.next_range_inclusive(0, self.screen_resolutions.len() as i64 - 1) as usize;
            evidence.insert(
                "screen_resolution".to_string(),
                self.screen_resolutions[idx].clone(),
            );
        }

        evidence
    }
}
