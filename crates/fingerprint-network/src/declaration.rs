//! The concrete six-node network: `browser`, `platform`, `device`,
//! `browser_version`, `screen_resolution`, `hardware_concurrency`.
//!
//! Probabilities track rough current market-share shape rather than any
//! precise survey; what matters downstream is the dependency structure
//! (platform conditioned on browser, device on platform, and so on), which is
//! what keeps impossible combinations out of the sample space.

use crate::distribution::{ConditionalTable, Distribution};
use crate::graph::Network;
use crate::node::Node;
use fingerprint_core::error::Result;

pub fn build_default_network() -> Result<Network> {
    let browser = Node::root(
        "browser",
        Distribution::Categorical {
            labels: vec!["chrome", "firefox", "safari", "edge", "opera"],
            probabilities: vec![0.65, 0.12, 0.12, 0.08, 0.03],
        },
    );

    let platform = Node::conditional(
        "platform",
        vec!["browser"],
        ConditionalTable::new(vec![
            (
                "chrome",
                Distribution::Categorical {
                    labels: vec!["windows", "macos", "linux", "android", "ios"],
                    probabilities: vec![0.45, 0.20, 0.10, 0.20, 0.05],
                },
            ),
            (
                "firefox",
                Distribution::Categorical {
                    labels: vec!["windows", "macos", "linux", "android"],
                    probabilities: vec![0.45, 0.20, 0.15, 0.20],
                },
            ),
            (
                "safari",
                Distribution::Categorical {
                    labels: vec!["macos", "ios"],
                    probabilities: vec![0.45, 0.55],
                },
            ),
            (
                "edge",
                Distribution::Categorical {
                    labels: vec!["windows", "macos"],
                    probabilities: vec![0.85, 0.15],
                },
            ),
            (
                "opera",
                Distribution::Categorical {
                    labels: vec!["windows", "macos", "linux", "android"],
                    probabilities: vec![0.65, 0.20, 0.10, 0.05],
                },
            ),
        ]),
    );

    let device = Node::conditional(
        "device",
        vec!["platform"],
        ConditionalTable::new(vec![
            ("windows", Distribution::Categorical { labels: vec!["desktop"], probabilities: vec![1.0] }),
            ("macos", Distribution::Categorical { labels: vec!["desktop"], probabilities: vec![1.0] }),
            ("linux", Distribution::Categorical { labels: vec!["desktop"], probabilities: vec![1.0] }),
            (
                "android",
                Distribution::Categorical {
                    labels: vec!["mobile", "tablet"],
                    probabilities: vec![0.7, 0.3],
                },
            ),
            (
                "ios",
                Distribution::Categorical {
                    labels: vec!["mobile", "tablet"],
                    probabilities: vec![0.75, 0.25],
                },
            ),
        ]),
    );

    let browser_version = Node::conditional(
        "browser_version",
        vec!["browser"],
        ConditionalTable::new(vec![
            ("chrome", Distribution::Gaussian { mean: 120.0, variance: 9.0, min: 90, max: 130 }),
            ("firefox", Distribution::Gaussian { mean: 119.0, variance: 9.0, min: 90, max: 125 }),
            ("safari", Distribution::Gaussian { mean: 17.0, variance: 1.0, min: 14, max: 18 }),
            ("edge", Distribution::Gaussian { mean: 120.0, variance: 9.0, min: 90, max: 130 }),
            ("opera", Distribution::Gaussian { mean: 105.0, variance: 16.0, min: 80, max: 110 }),
        ]),
    );

    let screen_resolution = Node::conditional(
        "screen_resolution",
        vec!["device"],
        ConditionalTable::new(vec![
            (
                "desktop",
                Distribution::Categorical {
                    labels: vec!["1920x1080", "2560x1440", "1366x768", "3840x2160"],
                    probabilities: vec![0.5, 0.2, 0.2, 0.1],
                },
            ),
            (
                "mobile",
                Distribution::Categorical {
                    labels: vec!["390x844", "412x915", "360x800"],
                    probabilities: vec![0.4, 0.35, 0.25],
                },
            ),
            (
                "tablet",
                Distribution::Categorical {
                    labels: vec!["810x1080", "800x1280"],
                    probabilities: vec![0.6, 0.4],
                },
            ),
        ]),
    );

    let hardware_concurrency = Node::conditional(
        "hardware_concurrency",
        vec!["device"],
        ConditionalTable::new(vec![
            ("desktop", Distribution::Gaussian { mean: 8.0, variance: 9.0, min: 2, max: 32 }),
            ("mobile", Distribution::Gaussian { mean: 6.0, variance: 4.0, min: 2, max: 12 }),
            ("tablet", Distribution::Gaussian { mean: 6.0, variance: 4.0, min: 2, max: 12 }),
        ]),
    );

    Network::build(vec![
        browser,
        platform,
        device,
        browser_version,
        screen_resolution,
        hardware_concurrency,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use fingerprint_core::SeededRng;
    use std::collections::HashMap;

    #[test]
    fn builds_without_error() {
        assert!(build_default_network().is_ok());
    }

    #[test]
    fn sampling_is_deterministic_for_a_fixed_seed() {
        let network = build_default_network().unwrap();
        let mut rng_a = SeededRng::new(42);
        let mut rng_b = SeededRng::new(42);
        let (a, _) = network.sample(&HashMap::new(), &mut rng_a).unwrap();
        let (b, _) = network.sample(&HashMap::new(), &mut rng_b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn every_node_is_assigned() {
        let network = build_default_network().unwrap();
        let mut rng = SeededRng::new(1);
        let (assignment, _) = network.sample(&HashMap::new(), &mut rng).unwrap();
        for name in network.node_names() {
            assert!(assignment.contains_key(name), "missing assignment for {name}");
        }
    }

    #[test]
    fn evidence_is_honored() {
        let network = build_default_network().unwrap();
        let mut rng = SeededRng::new(1);
        let mut evidence = HashMap::new();
        evidence.insert("browser".to_string(), "safari".to_string());
        let (assignment, _) = network.sample(&evidence, &mut rng).unwrap();
        assert_eq!(assignment.get("browser"), Some(&"safari".to_string()));
        assert!(matches!(assignment.get("platform").map(String::as_str), Some("macos") | Some("ios")));
    }

    #[test]
    fn desktop_platforms_never_sample_a_mobile_device() {
        let network = build_default_network().unwrap();
        for seed in 0..50u64 {
            let mut rng = SeededRng::new(seed);
            let mut evidence = HashMap::new();
            evidence.insert("platform".to_string(), "windows".to_string());
            let (assignment, _) = network.sample(&evidence, &mut rng).unwrap();
            assert_eq!(assignment.get("device"), Some(&"desktop".to_string()));
        }
    }
}
