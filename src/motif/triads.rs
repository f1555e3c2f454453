//! Triad enumeration
//!
//! A triad is the induced subgraph on a node and two of its undirected
//! neighbors. Enumeration walks every unordered neighbor pair exactly once;
//! nodes with fewer than two undirected neighbors contribute nothing.

use itertools::Itertools;

use crate::graph::TransactionGraph;

/// Induced three-node subgraph, captured as an adjacency matrix over the
/// local positions 0..3. Ephemeral: built, classified, discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triad {
    /// The actual graph node at each local position
    pub nodes: [u32; 3],

    /// adj[i][j] is true iff the graph has a directed edge nodes[i] -> nodes[j]
    pub adj: [[bool; 3]; 3],
}

impl Triad {
    /// Build the induced subgraph on {center, a, b}, keeping only directed
    /// edges actually present among the three nodes
    pub fn induced(graph: &TransactionGraph, center: u32, a: u32, b: u32) -> Self {
        let nodes = [center, a, b];
        let mut adj = [[false; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    adj[i][j] = graph.has_edge(nodes[i] as usize, nodes[j]);
                }
            }
        }
        Self { nodes, adj }
    }

    /// Out-degree of local position `i` within the triad
    pub fn out_degree(&self, i: usize) -> usize {
        self.adj[i].iter().filter(|&&present| present).count()
    }

    /// In-degree of local position `i` within the triad
    pub fn in_degree(&self, i: usize) -> usize {
        (0..3).filter(|&j| self.adj[j][i]).count()
    }
}

/// Lazily enumerate every triad centered on `node`: one induced subgraph per
/// unordered pair of its undirected neighbors (combinations, not
/// permutations).
pub fn triads_centered_on(
    graph: &TransactionGraph,
    node: u32,
) -> impl Iterator<Item = Triad> + '_ {
    graph
        .undirected_neighbors(node as usize)
        .iter()
        .copied()
        .tuple_combinations()
        .map(move |(a, b)| Triad::induced(graph, node, a, b))
}

#[cfg(test)]
mod test {
    use super::*;

    fn graph(node_count: usize, edges: &[(u32, u32)]) -> TransactionGraph {
        TransactionGraph::from_edges(node_count, edges, None).unwrap()
    }

    #[test]
    fn fewer_than_two_neighbors_yields_nothing() {
        let g = graph(3, &[(0, 1)]);
        assert_eq!(triads_centered_on(&g, 0).count(), 0);
        assert_eq!(triads_centered_on(&g, 1).count(), 0);
        assert_eq!(triads_centered_on(&g, 2).count(), 0);
    }

    #[test]
    fn yields_k_choose_2_triads() {
        // Star with 4 spokes, mixed edge directions
        let g = graph(5, &[(0, 1), (0, 2), (3, 0), (4, 0)]);
        assert_eq!(triads_centered_on(&g, 0).count(), 6); // 4 choose 2

        // Pairs are unordered and distinct
        let mut pairs: Vec<[u32; 2]> = triads_centered_on(&g, 0)
            .map(|t| {
                let mut pair = [t.nodes[1], t.nodes[2]];
                pair.sort_unstable();
                pair
            })
            .collect();
        pairs.sort_unstable();
        pairs.dedup();
        assert_eq!(pairs.len(), 6);
    }

    #[test]
    fn induced_subgraph_keeps_only_present_edges() {
        // 0 -> 1, 2 -> 1: neighbors of 1 are {0, 2}, with no 0-2 edge
        let g = graph(3, &[(0, 1), (2, 1)]);
        let triads: Vec<Triad> = triads_centered_on(&g, 1).collect();
        assert_eq!(triads.len(), 1);

        let t = &triads[0];
        assert_eq!(t.nodes[0], 1);
        assert_eq!(t.in_degree(0), 2);
        assert_eq!(t.out_degree(0), 0);
        assert_eq!(t.out_degree(1) + t.out_degree(2), 2);
        // No edge between the two spokes in either direction
        assert!(!t.adj[1][2] && !t.adj[2][1]);
    }
}
