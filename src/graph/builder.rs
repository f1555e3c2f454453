//! Graph construction module

use anyhow::Result;
use std::collections::HashMap;

use crate::graph::TransactionGraph;

/// Builder for incrementally constructing a TransactionGraph from
/// address-pair records
pub struct GraphBuilder {
    /// Number of nodes
    node_count: usize,

    /// Mapping from address strings to node indices
    id_to_index: HashMap<String, u32>,

    /// Node address strings
    node_ids: Vec<String>,

    /// Collected directed edges as index pairs
    edges: Vec<(u32, u32)>,
}

impl GraphBuilder {
    /// Create a new graph builder with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            node_count: 0,
            id_to_index: HashMap::with_capacity(capacity),
            node_ids: Vec::with_capacity(capacity),
            edges: Vec::with_capacity(capacity),
        }
    }

    /// Get or create a node index for the given address
    pub fn get_or_create_node(&mut self, id: &str) -> u32 {
        if let Some(&idx) = self.id_to_index.get(id) {
            return idx;
        }

        let idx = self.node_count as u32;
        self.id_to_index.insert(id.to_string(), idx);
        self.node_ids.push(id.to_string());
        self.node_count += 1;

        idx
    }

    /// Add a directed edge from one address to another
    pub fn add_edge(&mut self, src_id: &str, dst_id: &str) {
        let src_idx = self.get_or_create_node(src_id);
        let dst_idx = self.get_or_create_node(dst_id);
        self.edges.push((src_idx, dst_idx));
    }

    /// Number of nodes seen so far
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of edge records seen so far (before dedup)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Freeze the builder into an immutable graph
    pub fn build(self) -> Result<TransactionGraph> {
        let graph = TransactionGraph::from_edges(
            self.node_count,
            &self.edges,
            Some(self.node_ids),
        )?;
        Ok(graph)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn interns_addresses_and_builds_graph() {
        let mut builder = GraphBuilder::with_capacity(4);
        builder.add_edge("0xaaa", "0xbbb");
        builder.add_edge("0xaaa", "0xccc");
        builder.add_edge("0xaaa", "0xbbb"); // duplicate transfer

        assert_eq!(builder.node_count(), 3);
        assert_eq!(builder.edge_count(), 3);

        let graph = builder.build().unwrap();
        assert_eq!(graph.node_count, 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.node_label(0), "0xaaa");
        assert_eq!(graph.undirected_neighbors(0).len(), 2);
    }
}
