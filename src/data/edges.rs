//! Edge-list loading for graph construction

use anyhow::Result;
use polars::prelude::*;

use crate::graph::{GraphBuilder, TransactionGraph};

/// Load a directed transaction graph from a Parquet or CSV edge list.
///
/// Each row is one directed edge from `source_column` to `target_column`.
/// Self-transfers and repeated ordered pairs are collapsed by the graph
/// layer; rows with a missing endpoint are skipped.
pub fn load_edge_list(
    path: &str,
    source_column: &str,
    target_column: &str,
) -> Result<TransactionGraph> {
    log::info!("Reading edge list: {}", path);

    if !std::path::Path::new(path).exists() {
        return Err(anyhow::anyhow!("File not found: {}", path));
    }

    let frame = if path.ends_with(".parquet") {
        LazyFrame::scan_parquet(path, Default::default())?
    } else {
        LazyCsvReader::new(path).with_has_header(true).finish()?
    };

    let df = frame
        .select([col(source_column), col(target_column)])
        .collect()?;

    log::info!("Loaded {} edge records", df.height());

    let src_col = df.column(source_column)?.cast(&DataType::String)?;
    let dst_col = df.column(target_column)?.cast(&DataType::String)?;
    let src_col = src_col.str()?;
    let dst_col = dst_col.str()?;

    let mut builder = GraphBuilder::with_capacity(df.height());
    let mut skipped = 0usize;

    for i in 0..df.height() {
        match (src_col.get(i), dst_col.get(i)) {
            (Some(src), Some(dst)) if !src.is_empty() && !dst.is_empty() => {
                builder.add_edge(src, dst);
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {} edge records with missing endpoints", skipped);
    }

    let graph = builder.build()?;
    log::info!(
        "Built graph with {} nodes and {} edges ({} bytes)",
        graph.node_count,
        graph.edge_count(),
        graph.memory_usage()
    );

    Ok(graph)
}
