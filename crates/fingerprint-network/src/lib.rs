//! # fingerprint-network
//!
//! The probabilistic graphical model: a directed acyclic graph of named
//! nodes, each carrying either an unconditional distribution or a CPT keyed
//! by its parents' current values, plus the sampler that walks the graph's
//! cached topological order to produce a full [`Assignment`].
//!
//! Grounded in the same shape as a Bayesian-network-driven fingerprint
//! generator: a sampler that resolves caller constraints into evidence, then
//! walks dependent value tables in order, retrying/falling back rather than
//! failing outright on a missing row.

pub mod constraints;
pub mod declaration;
pub mod distribution;
pub mod graph;
pub mod node;

pub use constraints::{BrowserConstraint, FingerprintConstraints};
pub use declaration::build_default_network;
pub use distribution::{ConditionalTable, Distribution};
pub use graph::{Assignment, Network, SampleWarning};
pub use node::{Node, NodeDistribution};
