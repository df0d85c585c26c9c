//! # fingerprint-fonts
//!
//! Installed-font fingerprint generation: per-platform system font
//! availability and web font probe results for a sampled identity, plus a
//! signature hash over the resulting set.
//!
//! Availability is probabilistic rather than constant: each candidate system
//! font is present with probability 0.8, each candidate web font with
//! probability 0.5, matching how real font-probe fingerprinting observes
//! partial, noisy availability rather than an all-or-nothing set.

use fingerprint_core::hashing::namespaced_hash_hex_truncated;
use fingerprint_core::rng::SeededRng;
use fingerprint_core::types::PlatformName;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFingerprint {
    pub system_fonts: Vec<String>,
    pub web_fonts: Vec<String>,
    pub font_signature: String,
}

/// Probability that any given candidate system font is actually installed.
const SYSTEM_FONT_PRESENCE: f64 = 0.8;
/// Probability that any given candidate web font is actually installed
/// (e.g. bundled by a creative suite or office package).
const WEB_FONT_PRESENCE: f64 = 0.5;

/// The system fonts a probe page would test for on each platform.
pub fn system_candidates(platform: PlatformName) -> &'static [&'static str] {
    match platform {
        PlatformName::Windows => &[
            "Arial", "Times New Roman", "Courier New", "Verdana", "Georgia",
            "Trebuchet MS", "Comic Sans MS", "Impact", "Calibri", "Cambria",
        ],
        PlatformName::MacOS | PlatformName::Ios => &[
            "Helvetica", "Helvetica Neue", "Times", "Courier", "Verdana",
            "Georgia", "Avenir", "San Francisco", "Menlo", "Monaco",
        ],
        PlatformName::Linux => &[
            "DejaVu Sans", "DejaVu Serif", "Liberation Sans", "Liberation Serif",
            "Noto Sans", "Ubuntu", "Cantarell", "FreeSans",
        ],
        PlatformName::Android => &["Roboto", "Noto Sans", "Droid Sans", "Droid Serif"],
    }
}

/// The web fonts a probe page would test for, platform-independent.
pub fn web_candidates() -> &'static [&'static str] {
    &["Roboto", "Open Sans", "Lato", "Montserrat", "Source Sans Pro", "Oswald"]
}

/// Keep each candidate independently; if the draw leaves a category empty,
/// fall back to the first candidate so no identity reports zero fonts.
fn sample_present(candidates: &[&str], presence: f64, rng: &mut SeededRng) -> Vec<String> {
    let present: Vec<String> = candidates
        .iter()
        .filter(|_| rng.next_bool(presence))
        .map(|f| f.to_string())
        .collect();
    if present.is_empty() {
        candidates.iter().take(1).map(|f| f.to_string()).collect()
    } else {
        present
    }
}

/// Sample the set of system and web fonts an identity reports as installed,
/// and derive a signature hash over the sorted union of the two sets.
pub fn generate_font_fingerprint(platform: PlatformName, rng: &mut SeededRng) -> FontFingerprint {
    let system_fonts = sample_present(system_candidates(platform), SYSTEM_FONT_PRESENCE, rng);
    let web_fonts = sample_present(web_candidates(), WEB_FONT_PRESENCE, rng);

    let mut all: Vec<&str> = system_fonts
        .iter()
        .chain(web_fonts.iter())
        .map(String::as_str)
        .collect();
    all.sort_unstable();
    all.dedup();
    let font_signature = namespaced_hash_hex_truncated("fonts:signature", &all.join("|"), 16);

    FontFingerprint { system_fonts, web_fonts, font_signature }
}
