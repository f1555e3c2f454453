//! Configuration management for the transaction motif analyzer

/// Number of seconds in one day; daily snapshot files are keyed by
/// UNIX timestamps aligned to day boundaries.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Default configuration for the motif census
pub struct Config {
    /// Column holding the sending address in edge-list inputs
    pub source_column: String,

    /// Column holding the receiving address in edge-list inputs
    pub target_column: String,

    /// Node count below which the census runs sequentially
    pub parallel_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_column: "from_address".to_string(),
            target_column: "to_address".to_string(),
            parallel_threshold: 1000,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(source_column: &str, target_column: &str, parallel_threshold: usize) -> Self {
        Self {
            source_column: source_column.to_string(),
            target_column: target_column.to_string(),
            parallel_threshold,
        }
    }
}
