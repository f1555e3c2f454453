//! Memory-efficient directed graph representation

use std::mem;
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Errors detected while freezing a graph. Construction is the single
/// validation gate: the census assumes a valid graph and re-checks nothing.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An edge endpoint is not a node of the graph
    #[error("edge ({src} -> {dst}) references a node outside the graph ({node_count} nodes)")]
    InvalidEdge { src: u32, dst: u32, node_count: usize },
}

/// Compressed sparse representation of a directed transaction graph.
///
/// Nodes are dense `u32` indices; the original address strings are kept in
/// `node_ids` when available. Adjacency is stored three times: outgoing
/// edges, incoming edges, and the undirected projection (an edge in either
/// direction). The projection is derived once at construction because the
/// graph is immutable for the whole census pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionGraph {
    /// Number of nodes in the graph
    pub node_count: usize,

    /// Offset array for outgoing edges: out_offsets[i] to out_offsets[i+1]
    /// defines the edge range for node i
    out_offsets: Vec<u32>,

    /// Concatenated sorted lists of edge targets
    out_edges: Vec<u32>,

    /// Offset array for incoming edges
    in_offsets: Vec<u32>,

    /// Concatenated sorted lists of edge sources
    in_edges: Vec<u32>,

    /// Offset array for the undirected projection
    undirected_offsets: Vec<u32>,

    /// Concatenated sorted neighbor lists of the undirected projection
    undirected_edges: Vec<u32>,

    /// Optional mapping from internal node IDs to original address strings
    pub node_ids: Option<Vec<String>>,
}

impl TransactionGraph {
    /// Freeze an edge list into a graph.
    ///
    /// Every endpoint must be a valid node index. Self-loops are dropped
    /// (motifs require three distinct identifiers) and repeated ordered
    /// pairs collapse to a single edge.
    pub fn from_edges(
        node_count: usize,
        edges: &[(u32, u32)],
        node_ids: Option<Vec<String>>,
    ) -> Result<Self, GraphError> {
        let mut out_lists: Vec<Vec<u32>> = vec![Vec::new(); node_count];
        let mut in_lists: Vec<Vec<u32>> = vec![Vec::new(); node_count];

        for &(src, dst) in edges {
            if src as usize >= node_count || dst as usize >= node_count {
                return Err(GraphError::InvalidEdge { src, dst, node_count });
            }
            if src == dst {
                continue;
            }
            out_lists[src as usize].push(dst);
            in_lists[dst as usize].push(src);
        }

        // Sort and dedupe so lookups can binary-search and multi-edges
        // collapse to one
        for list in out_lists.iter_mut().chain(in_lists.iter_mut()) {
            list.sort_unstable();
            list.dedup();
        }

        let (out_offsets, out_edges) = flatten(&out_lists);
        let (in_offsets, in_edges) = flatten(&in_lists);

        // Undirected projection: neighbor in either direction, each once
        let mut undirected_lists: Vec<Vec<u32>> = Vec::with_capacity(node_count);
        for node in 0..node_count {
            let mut merged: Vec<u32> =
                Vec::with_capacity(out_lists[node].len() + in_lists[node].len());
            merged.extend_from_slice(&out_lists[node]);
            merged.extend_from_slice(&in_lists[node]);
            merged.sort_unstable();
            merged.dedup();
            undirected_lists.push(merged);
        }
        let (undirected_offsets, undirected_edges) = flatten(&undirected_lists);

        Ok(Self {
            node_count,
            out_offsets,
            out_edges,
            in_offsets,
            in_edges,
            undirected_offsets,
            undirected_edges,
            node_ids,
        })
    }

    /// Get outgoing edge targets for a node
    pub fn out_neighbors(&self, node: usize) -> &[u32] {
        let start = self.out_offsets[node] as usize;
        let end = self.out_offsets[node + 1] as usize;
        &self.out_edges[start..end]
    }

    /// Get incoming edge sources for a node
    pub fn in_neighbors(&self, node: usize) -> &[u32] {
        let start = self.in_offsets[node] as usize;
        let end = self.in_offsets[node + 1] as usize;
        &self.in_edges[start..end]
    }

    /// Get neighbors in the undirected projection (either direction)
    pub fn undirected_neighbors(&self, node: usize) -> &[u32] {
        let start = self.undirected_offsets[node] as usize;
        let end = self.undirected_offsets[node + 1] as usize;
        &self.undirected_edges[start..end]
    }

    /// Check if there's a directed edge from src to dst
    pub fn has_edge(&self, src: usize, dst: u32) -> bool {
        self.out_neighbors(src).binary_search(&dst).is_ok()
    }

    /// Get out-degree of a node
    pub fn out_degree(&self, node: usize) -> usize {
        self.out_neighbors(node).len()
    }

    /// Get in-degree of a node
    pub fn in_degree(&self, node: usize) -> usize {
        self.in_neighbors(node).len()
    }

    /// Total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.out_edges.len()
    }

    /// Resolve a node index to its address string, or a numeric fallback
    pub fn node_label(&self, node: u32) -> String {
        match &self.node_ids {
            Some(ids) => ids[node as usize].clone(),
            None => node.to_string(),
        }
    }

    /// Estimate memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        let base = mem::size_of::<Self>();
        let arrays = (self.out_offsets.capacity()
            + self.out_edges.capacity()
            + self.in_offsets.capacity()
            + self.in_edges.capacity()
            + self.undirected_offsets.capacity()
            + self.undirected_edges.capacity())
            * mem::size_of::<u32>();

        let ids = self.node_ids.as_ref()
            .map(|ids| ids.iter().map(|s| s.capacity()).sum::<usize>())
            .unwrap_or(0);

        base + arrays + ids
    }
}

/// Flatten per-node adjacency lists into an offset/edge array pair
fn flatten(lists: &[Vec<u32>]) -> (Vec<u32>, Vec<u32>) {
    let edge_count: usize = lists.iter().map(|list| list.len()).sum();

    let mut offsets = Vec::with_capacity(lists.len() + 1);
    let mut edges = Vec::with_capacity(edge_count);

    offsets.push(0);
    let mut offset = 0;
    for list in lists {
        offset += list.len() as u32;
        offsets.push(offset);
        edges.extend_from_slice(list);
    }

    (offsets, edges)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builds_projection_from_either_direction() {
        // 0 -> 1, 2 -> 0: node 0 sees both 1 and 2 undirected
        let graph = TransactionGraph::from_edges(3, &[(0, 1), (2, 0)], None).unwrap();

        assert_eq!(graph.undirected_neighbors(0), &[1, 2]);
        assert_eq!(graph.undirected_neighbors(1), &[0]);
        assert_eq!(graph.undirected_neighbors(2), &[0]);

        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert_eq!(graph.in_neighbors(0), &[2]);
    }

    #[test]
    fn rejects_edge_to_unknown_node() {
        let err = TransactionGraph::from_edges(2, &[(0, 5)], None).unwrap_err();
        assert!(matches!(err, GraphError::InvalidEdge { src: 0, dst: 5, .. }));
    }

    #[test]
    fn drops_self_loops_and_duplicate_edges() {
        let graph =
            TransactionGraph::from_edges(2, &[(0, 0), (0, 1), (0, 1), (1, 1)], None).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.out_neighbors(0), &[1]);
        assert_eq!(graph.undirected_neighbors(0), &[1]);
        assert_eq!(graph.undirected_neighbors(1), &[0]);
    }
}
