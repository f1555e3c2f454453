//! Immutable catalog of reference triad patterns

use crate::motif::MotifRole;

/// How the center of a matched pattern is identified: by its local degree
/// within the three-node subgraph, never by global graph degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterRule {
    /// Nodes with out-degree 2 within the triad take the role
    OutDegreeTwo,
    /// Nodes with in-degree 2 within the triad take the role
    InDegreeTwo,
}

/// A reference directed pattern on three labeled positions (0, 1, 2).
///
/// `edges` is one representative labeling; any isomorphic relabeling of a
/// candidate triad counts as a match. `rules` lists the role attributions
/// performed on a match.
#[derive(Debug, Clone, Copy)]
pub struct MotifPattern {
    /// Pattern name from the motif literature (S-series numbering)
    pub name: &'static str,

    /// Directed edges between positions 0..3
    pub edges: &'static [(usize, usize)],

    /// Center attribution rules applied on a match
    pub rules: &'static [(CenterRule, MotifRole)],
}

impl MotifPattern {
    /// Expand the edge list into a 3x3 adjacency matrix
    pub fn adjacency(&self) -> [[bool; 3]; 3] {
        let mut adj = [[false; 3]; 3];
        for &(src, dst) in self.edges {
            adj[src][dst] = true;
        }
        adj
    }
}

/// The five patterns recognized by the census. The catalog is fixed; the
/// classifier checks every entry for every triad.
pub const CATALOG: [MotifPattern; 5] = [
    MotifPattern {
        name: "S1",
        edges: &[(0, 1), (0, 2)],
        rules: &[(CenterRule::OutDegreeTwo, MotifRole::Motif1)],
    },
    MotifPattern {
        name: "S4",
        edges: &[(1, 0), (2, 0)],
        rules: &[(CenterRule::InDegreeTwo, MotifRole::Motif4)],
    },
    MotifPattern {
        name: "S5",
        edges: &[(0, 1), (1, 2), (0, 2)],
        rules: &[
            (CenterRule::OutDegreeTwo, MotifRole::Motif5Sell),
            (CenterRule::InDegreeTwo, MotifRole::Motif5Buy),
        ],
    },
    MotifPattern {
        name: "S6",
        edges: &[(0, 2), (1, 2), (1, 0), (2, 0)],
        rules: &[(CenterRule::OutDegreeTwo, MotifRole::Motif6)],
    },
    MotifPattern {
        name: "S11",
        edges: &[(0, 1), (0, 2), (2, 0), (2, 1)],
        rules: &[(CenterRule::InDegreeTwo, MotifRole::Motif11)],
    },
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn adjacency_matches_edge_list() {
        let s1 = &CATALOG[0];
        let adj = s1.adjacency();
        assert!(adj[0][1] && adj[0][2]);
        assert!(!adj[1][0] && !adj[2][0] && !adj[1][2] && !adj[2][1]);
    }

    #[test]
    fn catalog_has_distinct_structures() {
        // No two patterns share an edge set; a triad can still be checked
        // against all five without double-attributing a single pattern
        for i in 0..CATALOG.len() {
            for j in (i + 1)..CATALOG.len() {
                assert_ne!(
                    CATALOG[i].adjacency(),
                    CATALOG[j].adjacency(),
                    "{} and {} collide",
                    CATALOG[i].name,
                    CATALOG[j].name
                );
            }
        }
    }

    #[test]
    fn every_pattern_has_exactly_one_center_per_rule() {
        for pattern in &CATALOG {
            let adj = pattern.adjacency();
            for &(rule, _) in pattern.rules {
                let centers = (0..3)
                    .filter(|&node| match rule {
                        CenterRule::OutDegreeTwo => {
                            (0..3).filter(|&other| adj[node][other]).count() == 2
                        }
                        CenterRule::InDegreeTwo => {
                            (0..3).filter(|&other| adj[other][node]).count() == 2
                        }
                    })
                    .count();
                assert_eq!(centers, 1, "pattern {}", pattern.name);
            }
        }
    }
}
