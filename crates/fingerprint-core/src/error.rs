//! The error type shared by every generation-pipeline crate.
//!
//! Every fallible public function in this workspace returns [`Result`]. The
//! variants below are the five kinds a caller of `generate()` can observe;
//! scoring warnings are not represented here since they are non-fatal and are
//! attached to a successful `GenerationResult` instead of returned as `Err`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FingerprintError {
    /// A caller-supplied evidence value or override is not in the node's legal value set.
    #[error("invalid evidence for node `{node}`: `{value}` is not a legal value")]
    InvalidEvidence { node: String, value: String },

    /// The network has no distribution for a reachable (node, parent-values) combination,
    /// and the fallback policy also failed to produce one.
    #[error("no distribution available for node `{node}` under condition `{condition_key}`")]
    MissingDistribution {
        node: String,
        condition_key: String,
    },

    /// The requested options describe a combination the network cannot realize.
    #[error("unsatisfiable constraint: {message}")]
    InvalidConstraint { message: String },

    /// A declaration bug: probabilities don't sum to 1, or the graph is cyclic.
    #[error("configuration error: {message}")]
    ConfigurationError { message: String },

    /// Any other failure that does not merit its own variant.
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, FingerprintError>;
