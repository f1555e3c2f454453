//! Graph representation module

pub mod builder;
pub mod directed;

pub use builder::GraphBuilder;
pub use directed::{GraphError, TransactionGraph};
