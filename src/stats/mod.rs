//! Cross-day reporting pipelines built on top of motif census outputs

pub mod expansion;
pub mod nfiaf;
