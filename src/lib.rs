//! Core library functions for the transaction motif analyzer

pub mod config;
pub mod data;
pub mod graph;
pub mod motif;
pub mod stats;
pub mod storage;

pub use anyhow::{Result, anyhow};
