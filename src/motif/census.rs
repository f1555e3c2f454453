//! Census aggregation over the whole graph

use std::collections::HashMap;

use rayon::prelude::*;
use serde::Serialize;

use crate::graph::TransactionGraph;
use crate::motif::classify::classify;
use crate::motif::triads::triads_centered_on;
use crate::motif::MotifRole;

/// Node count below which the parallel pass is not worth the overhead
const PARALLEL_THRESHOLD: usize = 1000;

/// Per-role occurrence counts, keyed by node index.
///
/// All six maps exist from the start; roles a node never plays simply have
/// no entry for it. Partial results from concurrent workers merge by
/// per-(role, node) summation, which is commutative and associative.
#[derive(Debug, Clone, Serialize)]
pub struct MotifCensus {
    counts: [HashMap<u32, u64>; 6],
}

impl MotifCensus {
    /// Create an empty census with all six role maps initialized
    pub fn new() -> Self {
        Self {
            counts: std::array::from_fn(|_| HashMap::new()),
        }
    }

    /// Record one occurrence of `node` as the center of `role`
    pub fn record(&mut self, role: MotifRole, node: u32) {
        *self.counts[role.index()].entry(node).or_insert(0) += 1;
    }

    /// Occurrence count of `node` under `role` (0 if never seen)
    pub fn count(&self, role: MotifRole, node: u32) -> u64 {
        self.counts[role.index()].get(&node).copied().unwrap_or(0)
    }

    /// All per-node counts for one role class
    pub fn counts_for(&self, role: MotifRole) -> &HashMap<u32, u64> {
        &self.counts[role.index()]
    }

    /// Sum of all occurrence counts under `role`
    pub fn total(&self, role: MotifRole) -> u64 {
        self.counts[role.index()].values().sum()
    }

    /// Fold another partial census into this one by summing counts
    pub fn merge(&mut self, other: MotifCensus) {
        for (into, from) in self.counts.iter_mut().zip(other.counts) {
            for (node, count) in from {
                *into.entry(node).or_insert(0) += count;
            }
        }
    }
}

impl Default for MotifCensus {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the motif census over every node of the graph.
///
/// The graph is read-only during the pass; per-node work is independent, so
/// large graphs are partitioned across the rayon pool and the partial
/// censuses merged.
pub fn run_census(graph: &TransactionGraph) -> MotifCensus {
    log::info!(
        "Running motif census over {} nodes and {} edges",
        graph.node_count,
        graph.edge_count()
    );

    let census = if graph.node_count < PARALLEL_THRESHOLD {
        census_of_nodes(graph, 0..graph.node_count as u32)
    } else {
        (0..graph.node_count as u32)
            .into_par_iter()
            .fold(MotifCensus::new, |mut acc, node| {
                tally_node(graph, node, &mut acc);
                acc
            })
            .reduce(MotifCensus::new, |mut a, b| {
                a.merge(b);
                a
            })
    };

    for role in MotifRole::ALL {
        log::info!(
            "{}: {} occurrences across {} distinct centers",
            role,
            census.total(role),
            census.counts_for(role).len()
        );
    }

    census
}

/// Sequential census over a range of node indices; also the worker body for
/// partition-based callers
pub fn census_of_nodes(
    graph: &TransactionGraph,
    nodes: impl IntoIterator<Item = u32>,
) -> MotifCensus {
    let mut census = MotifCensus::new();
    for node in nodes {
        tally_node(graph, node, &mut census);
    }
    census
}

/// Classify every triad centered on `node` and record the matched centers
fn tally_node(graph: &TransactionGraph, node: u32, census: &mut MotifCensus) {
    for triad in triads_centered_on(graph, node) {
        for (role, center) in classify(&triad) {
            census.record(role, center);
        }
    }
}
