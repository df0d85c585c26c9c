//! # fingerprint
//!
//! Statistical browser fingerprint synthesis: samples a probabilistic model
//! of the browser/platform/device population, builds a base profile from
//! the draw, and derives HTTP headers, a TLS ClientHello signature, and
//! canvas/WebGL/audio/font artifacts consistent with that identity.
//!
//! This crate is the facade over the rest of the workspace
//! (`fingerprint-network`, `fingerprint-profiles`, `fingerprint-headers`,
//! `fingerprint-tls`, `fingerprint-canvas`, `fingerprint-webgl`,
//! `fingerprint-audio`, `fingerprint-fonts`): [`generate`] and
//! [`generate_batch`] are the only entry points most callers need.

pub mod options;
pub mod orchestrator;
pub mod result;
pub mod scoring;

pub use options::{
    BrowserSpec, FingerprintOverrides, GenerationOptions, HttpVersionOption, OperatingSystemSpec,
    ScreenResolutionSpec,
};
pub use orchestrator::{generate, generate_batch, update_probabilities};
pub use result::{
    AudioContextFeaturesRecord, AudioRecord, BatchResult, BatchSummary, CanvasRecord,
    EnrichedFingerprint, FontsRecord, GenerationResult, GpuInfo, Http2SettingsRecord,
    RenderingQuality, ShapeRendering, TextRendering, TlsRecord, WebglRecord,
};

pub use fingerprint_profiles::Fingerprint;

#[cfg(test)]
mod tests {
    use super::*;

    fn chrome_desktop_windows() -> GenerationOptions {
        GenerationOptions {
            browsers: vec![BrowserSpec::named("chrome")],
            devices: vec!["desktop".to_string()],
            operating_systems: vec![OperatingSystemSpec {
                name: "windows".to_string(),
                version: None,
                architecture: None,
            }],
            random_seed: Some(42),
            ..GenerationOptions::default()
        }
    }

    #[test]
    fn s1_chrome_desktop_windows_has_client_hints_and_h2() {
        let result = generate(&chrome_desktop_windows()).unwrap();
        let fp = &result.fingerprint;
        assert_eq!(fp.base.browser.name.as_str(), "chrome");
        assert_eq!(fp.base.device.device_type.as_str(), "desktop");
        assert_eq!(fp.base.device.platform.name.as_str(), "windows");
        assert!(fp.tls.as_ref().unwrap().alpn.iter().any(|p| p == "h2"));
        assert!(!fp.headers.as_ref().unwrap().get("Sec-CH-UA").unwrap().is_empty());
        assert!(result.quality_score >= 0.85, "quality_score was {}", result.quality_score);
    }

    #[test]
    fn s2_same_seed_and_options_is_deterministic() {
        let options = chrome_desktop_windows();
        let a = generate(&options).unwrap();
        let b = generate(&options).unwrap();
        assert_eq!(a.fingerprint.base.fingerprint_hash, b.fingerprint.base.fingerprint_hash);
        assert_eq!(
            a.fingerprint.tls.as_ref().unwrap().ja3_hash,
            b.fingerprint.tls.as_ref().unwrap().ja3_hash
        );
    }

    #[test]
    fn s3_firefox_mobile_android_has_no_client_hints() {
        let options = GenerationOptions {
            browsers: vec![BrowserSpec::named("firefox")],
            devices: vec!["mobile".to_string()],
            operating_systems: vec![OperatingSystemSpec {
                name: "android".to_string(),
                version: None,
                architecture: None,
            }],
            random_seed: Some(7),
            ..GenerationOptions::default()
        };
        let result = generate(&options).unwrap();
        let fp = &result.fingerprint;
        assert_eq!(fp.base.device.device_type.as_str(), "mobile");
        assert!(fp.headers.as_ref().unwrap().get("Sec-CH-UA").is_none());
        assert!(fp.base.user_agent.contains("Firefox"));
        assert!(fp.base.user_agent.contains("Android"));
    }

    #[test]
    fn s4_safari_mobile_ios_user_agent_names_iphone() {
        let options = GenerationOptions {
            browsers: vec![BrowserSpec::named("safari")],
            devices: vec!["mobile".to_string()],
            operating_systems: vec![OperatingSystemSpec {
                name: "ios".to_string(),
                version: None,
                architecture: None,
            }],
            random_seed: Some(3),
            ..GenerationOptions::default()
        };
        let result = generate(&options).unwrap();
        let fp = &result.fingerprint;
        assert!(fp.base.user_agent.contains("Safari"));
        assert!(fp.base.user_agent.contains("iPhone"));
    }

    #[test]
    fn s5_batch_of_three_browsers_is_diverse() {
        let options = GenerationOptions {
            browsers: vec![
                BrowserSpec::named("chrome"),
                BrowserSpec::named("firefox"),
                BrowserSpec::named("edge"),
            ],
            devices: vec!["desktop".to_string()],
            random_seed: Some(100),
            ..GenerationOptions::default()
        };
        let batch = generate_batch(200, &options).unwrap();
        assert_eq!(batch.results.len(), 200);
        assert!(batch.summary.mean_quality_score > 0.8, "{}", batch.summary.mean_quality_score);
        for r in &batch.results {
            assert!(matches!(
                r.fingerprint.base.browser.name.as_str(),
                "chrome" | "firefox" | "edge"
            ));
        }
        let distinct: std::collections::HashSet<_> = batch
            .results
            .iter()
            .map(|r| r.fingerprint.base.fingerprint_hash.clone())
            .collect();
        assert!(distinct.len() > 20, "only {} distinct hashes", distinct.len());
    }

    #[test]
    fn s6_safari_on_windows_is_rejected_or_flagged() {
        let options = GenerationOptions {
            browsers: vec![BrowserSpec::named("safari")],
            operating_systems: vec![OperatingSystemSpec {
                name: "windows".to_string(),
                version: None,
                architecture: None,
            }],
            random_seed: Some(9),
            ..GenerationOptions::default()
        };
        match generate(&options) {
            Err(fingerprint_core::error::FingerprintError::InvalidConstraint { .. }) => {}
            Ok(result) => {
                assert!(result.consistency_score < 0.8);
                assert!(result
                    .warnings
                    .iter()
                    .any(|w| w.to_lowercase().contains("safari") && w.to_lowercase().contains("windows")));
            }
            Err(other) => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn screen_resolution_constraints_are_honored() {
        let options = GenerationOptions {
            screen_resolutions: vec![ScreenResolutionSpec {
                width: 800,
                height: 600,
                color_depth: None,
            }],
            random_seed: Some(5),
            ..GenerationOptions::default()
        };
        let result = generate(&options).unwrap();
        let screen = &result.fingerprint.base.device.screen;
        assert_eq!((screen.width, screen.height), (800, 600));
    }

    #[test]
    fn locale_pool_overrides_the_sampled_locale() {
        let options = GenerationOptions {
            locales: vec!["de-DE".to_string()],
            random_seed: Some(11),
            ..GenerationOptions::default()
        };
        let result = generate(&options).unwrap();
        assert_eq!(result.fingerprint.base.locale, "de-DE");
        assert_eq!(
            result.fingerprint.base.languages,
            vec!["de-DE".to_string(), "de".to_string()]
        );
    }

    #[test]
    fn all_four_scores_stay_in_range() {
        let result = generate(&chrome_desktop_windows()).unwrap();
        for score in [
            result.quality_score,
            result.uniqueness_score,
            result.consistency_score,
            result.bypass_confidence,
        ] {
            assert!((0.0..=1.0).contains(&score), "score {score} out of range");
        }
        assert!(result.generation_time_ms >= 1);
    }

    #[test]
    fn force_regenerate_bypasses_the_cache_but_keeps_determinism() {
        let mut options = chrome_desktop_windows();
        options.force_regenerate = true;
        let a = generate(&options).unwrap();
        let b = generate(&options).unwrap();
        assert_eq!(a.fingerprint.base.fingerprint_hash, b.fingerprint.base.fingerprint_hash);
    }

    #[test]
    fn update_probabilities_never_errors() {
        assert!(update_probabilities(&[]).is_ok());
    }
}
