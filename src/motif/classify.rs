//! Motif classification
//!
//! Matches an induced triad against every catalog pattern by brute-force
//! isomorphism over the six permutations of three labels, then attributes
//! center roles by local degree within the triad.

use crate::motif::catalog::{CenterRule, CATALOG};
use crate::motif::{MotifRole, Triad};

/// All permutations of the three local positions
const PERMUTATIONS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

/// Check whether two 3-node directed graphs are isomorphic: some relabeling
/// of positions makes the edge sets identical. With three nodes the six
/// permutations are cheaper and more obviously correct than a general
/// isomorphism algorithm.
pub fn is_isomorphic(a: &[[bool; 3]; 3], b: &[[bool; 3]; 3]) -> bool {
    PERMUTATIONS.iter().any(|perm| {
        (0..3).all(|i| (0..3).all(|j| a[i][j] == b[perm[i]][perm[j]]))
    })
}

/// Classify a triad against the full catalog.
///
/// Every pattern is checked independently (no early exit, matches are not
/// assumed mutually exclusive). Returns the (role, center node) attributions;
/// an empty result is the normal no-match outcome.
pub fn classify(triad: &Triad) -> Vec<(MotifRole, u32)> {
    let mut matches = Vec::new();

    for pattern in &CATALOG {
        if !is_isomorphic(&triad.adj, &pattern.adjacency()) {
            continue;
        }

        for &(rule, role) in pattern.rules {
            for position in 0..3 {
                let qualifies = match rule {
                    CenterRule::OutDegreeTwo => triad.out_degree(position) == 2,
                    CenterRule::InDegreeTwo => triad.in_degree(position) == 2,
                };
                if qualifies {
                    matches.push((role, triad.nodes[position]));
                }
            }
        }
    }

    matches
}
