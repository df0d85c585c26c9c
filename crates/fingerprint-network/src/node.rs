//! A single network node: its name, its parents, and the distribution (or
//! CPT) it samples from.

use crate::distribution::{ConditionalTable, Distribution};

#[derive(Debug, Clone)]
pub enum NodeDistribution {
    Unconditional(Distribution),
    Conditional(ConditionalTable),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub name: &'static str,
    /// Declaration-ordered parent names; order matters because it fixes how
    /// multi-parent condition keys are joined.
    pub parents: Vec<&'static str>,
    pub distribution: NodeDistribution,
}

impl Node {
    pub fn root(name: &'static str, distribution: Distribution) -> Self {
        Self {
            name,
            parents: Vec::new(),
            distribution: NodeDistribution::Unconditional(distribution),
        }
    }

    pub fn conditional(name: &'static str, parents: Vec<&'static str>, table: ConditionalTable) -> Self {
        Self {
            name,
            parents,
            distribution: NodeDistribution::Conditional(table),
        }
    }

    /// The condition key for this node given the current partial assignment:
    /// a single parent's value verbatim, or parent values joined by `|` in
    /// declaration order for two or more parents.
    pub fn condition_key(&self, assignment: &std::collections::HashMap<String, String>) -> String {
        self.parents
            .iter()
            .map(|p| assignment.get(*p).map(String::as_str).unwrap_or(""))
            .collect::<Vec<_>>()
            .join("|")
    }
}
