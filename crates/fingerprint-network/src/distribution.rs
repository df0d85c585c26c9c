//! The two distribution shapes a node can carry, and the CPT container that
//! maps a parent condition key to one of them.

use fingerprint_core::error::{FingerprintError, Result};
use fingerprint_core::SeededRng;

/// A single (non-conditional) distribution a node samples from once its
/// condition key has been resolved.
#[derive(Debug, Clone)]
pub enum Distribution {
    /// Ordered labels with equal-length probabilities summing to 1.
    Categorical {
        labels: Vec<&'static str>,
        probabilities: Vec<f64>,
    },
    /// Mean/variance plus the legal output range the node documents; sampled
    /// via Box-Muller and rounded to the nearest integer, then clamped.
    Gaussian { mean: f64, variance: f64, min: i64, max: i64 },
}

impl Distribution {
    pub fn validate(&self, node_name: &str) -> Result<()> {
        if let Distribution::Categorical { labels, probabilities } = self {
            if labels.len() != probabilities.len() {
                return Err(FingerprintError::ConfigurationError {
                    message: format!(
                        "node `{node_name}`: {} labels but {} probabilities",
                        labels.len(),
                        probabilities.len()
                    ),
                });
            }
            let sum: f64 = probabilities.iter().sum();
            if (sum - 1.0).abs() > 1e-6 {
                return Err(FingerprintError::ConfigurationError {
                    message: format!("node `{node_name}`: probabilities sum to {sum}, not 1"),
                });
            }
        }
        Ok(())
    }

    pub fn sample(&self, rng: &mut SeededRng) -> String {
        match self {
            Distribution::Categorical { labels, probabilities } => {
                let idx = rng.sample_categorical(probabilities);
                labels[idx.min(labels.len() - 1)].to_string()
            }
            Distribution::Gaussian { mean, variance, min, max } => {
                let draw = rng.next_gaussian(*mean, *variance).round() as i64;
                draw.clamp(*min, *max).to_string()
            }
        }
    }
}

/// An insertion-ordered conditional probability table. Stored as a `Vec`
/// rather than a hash map so "first row wins" fallback has a well-defined,
/// implementation-independent meaning.
#[derive(Debug, Clone, Default)]
pub struct ConditionalTable {
    rows: Vec<(String, Distribution)>,
}

impl ConditionalTable {
    pub fn new(rows: Vec<(&str, Distribution)>) -> Self {
        Self {
            rows: rows.into_iter().map(|(k, d)| (k.to_string(), d)).collect(),
        }
    }

    pub fn get(&self, condition_key: &str) -> Option<&Distribution> {
        self.rows.iter().find(|(k, _)| k == condition_key).map(|(_, d)| d)
    }

    /// First row in declaration order, the fallback of last resort.
    pub fn first(&self) -> Option<&Distribution> {
        self.rows.first().map(|(_, d)| d)
    }

    /// First row whose key starts with `"{prefix}|"`, used by the
    /// `screen_resolution` fallback to at least match on device type when the
    /// exact `device|platform` row is absent.
    pub fn first_with_prefix(&self, prefix: &str) -> Option<&Distribution> {
        let needle = format!("{prefix}|");
        self.rows.iter().find(|(k, _)| k.starts_with(&needle)).map(|(_, d)| d)
    }

    pub fn rows(&self) -> &[(String, Distribution)] {
        &self.rows
    }
}
