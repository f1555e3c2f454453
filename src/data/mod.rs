//! Tabular data loading module

pub mod edges;
pub mod snapshots;
