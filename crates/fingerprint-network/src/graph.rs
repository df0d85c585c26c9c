//! The network: a declaration-order list of nodes, a cached topological
//! order, and the sampler that walks it.

use crate::node::{Node, NodeDistribution};
use fingerprint_core::error::{FingerprintError, Result};
use fingerprint_core::SeededRng;
use std::collections::HashMap;

pub type Assignment = HashMap<String, String>;

/// A fallback was taken while resolving a node's distribution; attached to
/// the result's warnings by the orchestrator's scoring pass.
#[derive(Debug, Clone)]
pub struct SampleWarning {
    pub node: String,
    pub message: String,
}

pub struct Network {
    nodes: Vec<Node>,
    index_of: HashMap<&'static str, usize>,
    /// Node indices in a valid topological order, computed once at
    /// construction via iterative Kahn's algorithm.
    topo_order: Vec<usize>,
}

impl Network {
    pub fn build(nodes: Vec<Node>) -> Result<Self> {
        let index_of: HashMap<&'static str, usize> =
            nodes.iter().enumerate().map(|(i, n)| (n.name, i)).collect();

        for node in &nodes {
            for parent in &node.parents {
                if !index_of.contains_key(parent) {
                    return Err(FingerprintError::ConfigurationError {
                        message: format!(
                            "node `{}` declares unknown parent `{}`",
                            node.name, parent
                        ),
                    });
                }
            }
            match &node.distribution {
                NodeDistribution::Unconditional(d) => d.validate(node.name)?,
                NodeDistribution::Conditional(table) => {
                    for (key, d) in table.rows() {
                        d.validate(&format!("{}[{key}]", node.name))?;
                    }
                }
            }
        }

        let topo_order = topological_sort(&nodes, &index_of)?;

        Ok(Self {
            nodes,
            index_of,
            topo_order,
        })
    }

    pub fn node_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.nodes.iter().map(|n| n.name)
    }

    /// Look up a declared node by name, for callers that need to inspect its
    /// legal value set without sampling.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.index_of.get(name).map(|&idx| &self.nodes[idx])
    }

    /// Produce a full assignment, honoring any caller-supplied evidence.
    /// Evidence values are checked against the node's legal value set before
    /// being copied in; an illegal value fails the whole call with
    /// `InvalidEvidence` rather than poisoning downstream condition keys.
    pub fn sample(
        &self,
        evidence: &Assignment,
        rng: &mut SeededRng,
    ) -> Result<(Assignment, Vec<SampleWarning>)> {
        let mut assignment = Assignment::new();
        let mut warnings = Vec::new();

        for &idx in &self.topo_order {
            let node = &self.nodes[idx];
            if let Some(value) = evidence.get(node.name) {
                if !is_legal_evidence(node, value) {
                    return Err(FingerprintError::InvalidEvidence {
                        node: node.name.to_string(),
                        value: value.clone(),
                    });
                }
                assignment.insert(node.name.to_string(), value.clone());
                continue;
            }

            let value = match &node.distribution {
                NodeDistribution::Unconditional(d) => d.sample(rng),
                NodeDistribution::Conditional(table) => {
                    let key = node.condition_key(&assignment);
                    if let Some(d) = table.get(&key) {
                        d.sample(rng)
                    } else {
                        let (d, message) = self.fallback(node, &key, table)?;
                        log::debug!("network: {}", message);
                        warnings.push(SampleWarning {
                            node: node.name.to_string(),
                            message,
                        });
                        d.sample(rng)
                    }
                }
            };
            assignment.insert(node.name.to_string(), value);
        }

        Ok((assignment, warnings))
    }

    fn fallback<'a>(
        &self,
        node: &Node,
        condition_key: &str,
        table: &'a crate::distribution::ConditionalTable,
    ) -> Result<(&'a crate::distribution::Distribution, String)> {
        if node.name == "screen_resolution" {
            if let Some(device_type) = condition_key.split('|').next() {
                if let Some(d) = table.first_with_prefix(device_type) {
                    return Ok((
                        d,
                        format!(
                            "no CPT row for `{}` under `{condition_key}`; fell back to the first `{device_type}|*` row",
                            node.name
                        ),
                    ));
                }
            }
        }
        if let Some(d) = table.first() {
            return Ok((
                d,
                format!(
                    "no CPT row for `{}` under `{condition_key}`; fell back to the first declared row",
                    node.name
                ),
            ));
        }
        Err(FingerprintError::MissingDistribution {
            node: node.name.to_string(),
            condition_key: condition_key.to_string(),
        })
    }
}

/// Whether `value` is in `node`'s legal value set. `screen_resolution` is the
/// one open-domain node: callers may pin any `WxH` label, not just the ones
/// the default distribution enumerates, so legality there is a format check.
fn is_legal_evidence(node: &Node, value: &str) -> bool {
    if node.name == "screen_resolution" {
        return value
            .split_once('x')
            .is_some_and(|(w, h)| w.parse::<u32>().is_ok() && h.parse::<u32>().is_ok());
    }
    match &node.distribution {
        NodeDistribution::Unconditional(d) => distribution_accepts(d, value),
        NodeDistribution::Conditional(table) => {
            table.rows().iter().any(|(_, d)| distribution_accepts(d, value))
        }
    }
}

fn distribution_accepts(d: &crate::distribution::Distribution, value: &str) -> bool {
    match d {
        crate::distribution::Distribution::Categorical { labels, .. } => {
            labels.iter().any(|l| *l == value)
        }
        crate::distribution::Distribution::Gaussian { .. } => value.parse::<i64>().is_ok(),
    }
}

/// Iterative Kahn's-algorithm topological sort. Ties (multiple nodes with
/// zero remaining in-degree) are broken by declaration order, so the sort is
/// itself deterministic across runs.
fn topological_sort(nodes: &[Node], index_of: &HashMap<&'static str, usize>) -> Result<Vec<usize>> {
    let n = nodes.len();
    let mut in_degree = vec![0usize; n];
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];

    for (i, node) in nodes.iter().enumerate() {
        in_degree[i] = node.parents.len();
        for parent in &node.parents {
            let parent_idx = index_of[parent];
            children[parent_idx].push(i);
        }
    }

    let mut ready: Vec<usize> = (0..n).filter(|&i| in_degree[i] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while !ready.is_empty() {
        // Always take the smallest index among ready nodes to keep the order
        // a deterministic function of declaration order.
        ready.sort_unstable();
        let current = ready.remove(0);
        order.push(current);
        for &child in &children[current] {
            in_degree[child] -= 1;
            if in_degree[child] == 0 {
                ready.push(child);
            }
        }
    }

    if order.len() != n {
        return Err(FingerprintError::ConfigurationError {
            message: "network graph contains a cycle".to_string(),
        });
    }

    Ok(order)
}
