//! Results persistence module

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde_json::{json, to_string_pretty};

use crate::graph::TransactionGraph;
use crate::motif::{MotifCensus, MotifRole};

/// Save census results to the specified directory: one ranked CSV per role
/// class named `<day>_<role>.csv`, plus a summary.json
pub fn save_census(
    census: &MotifCensus,
    graph: &TransactionGraph,
    day: i64,
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving census results to {}", output_dir);

    fs::create_dir_all(output_dir)?;

    for role in MotifRole::ALL {
        save_role_counts(census, graph, role, day, output_dir)?;
    }

    save_summary(census, graph, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Write one role class as `<day>_<role>.csv` with address and occurrence
/// columns, ranked descending by count. This is the exact shape the NF-IAF
/// pipeline reads back.
fn save_role_counts(
    census: &MotifCensus,
    graph: &TransactionGraph,
    role: MotifRole,
    day: i64,
    output_dir: &str,
) -> Result<()> {
    let mut ranked: Vec<(String, u64)> = census
        .counts_for(role)
        .iter()
        .map(|(&node, &count)| (graph.node_label(node), count))
        .collect();

    // Descending by count, address as the tie-breaker for stable output
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let path = Path::new(output_dir).join(format!("{}_{}.csv", day, role.as_str()));
    let mut file = File::create(&path)?;

    writeln!(file, "address,occurrences")?;
    for (address, count) in &ranked {
        writeln!(file, "{},{}", address, count)?;
    }

    log::debug!("Wrote {} centers to {}", ranked.len(), path.display());

    Ok(())
}

/// Save summary information
fn save_summary(
    census: &MotifCensus,
    graph: &TransactionGraph,
    output_dir: &str,
) -> Result<()> {
    let path = Path::new(output_dir).join("summary.json");
    let mut file = File::create(path)?;

    let roles: serde_json::Map<String, serde_json::Value> = MotifRole::ALL
        .iter()
        .map(|&role| {
            (
                role.as_str().to_string(),
                json!({
                    "occurrences": census.total(role),
                    "distinct_centers": census.counts_for(role).len(),
                }),
            )
        })
        .collect();

    let summary = json!({
        "graph_stats": {
            "node_count": graph.node_count,
            "edge_count": graph.edge_count(),
            "avg_degree": graph.edge_count() as f64 / graph.node_count.max(1) as f64,
            "memory_bytes": graph.memory_usage(),
        },
        "census_stats": roles,
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}
