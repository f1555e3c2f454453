//! Daily snapshot readers for the reporting pipelines
//!
//! The pipelines consume one file per UNIX day: address snapshots named
//! `<prefix><day>.csv` and per-motif count files named
//! `<prefix><day>_<motif>.csv`.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::*;

use crate::config::SECONDS_PER_DAY;

/// Iterate day timestamps from `start` to `end` inclusive
pub fn day_range(start: i64, end: i64) -> impl Iterator<Item = i64> {
    (start..=end).step_by(SECONDS_PER_DAY as usize)
}

/// Load one address set per day from `<prefix><day>.csv` files
pub fn load_address_sets(
    data_dir: &Path,
    file_prefix: &str,
    column: &str,
    start: i64,
    end: i64,
) -> Result<BTreeMap<i64, HashSet<String>>> {
    let mut days = BTreeMap::new();

    for day in day_range(start, end) {
        let path = data_dir.join(format!("{}{}.csv", file_prefix, day));
        let df = read_csv(&path)?;

        let addresses = df.column(column)?.cast(&DataType::String)?;
        let addresses = addresses.str()?;

        let mut set = HashSet::with_capacity(df.height());
        for i in 0..df.height() {
            if let Some(addr) = addresses.get(i) {
                set.insert(addr.to_string());
            }
        }

        log::debug!("Day {}: {} addresses", day, set.len());
        days.insert(day, set);
    }

    Ok(days)
}

/// Load one address -> occurrence map per day from
/// `<prefix><day>_<motif>.csv` files
pub fn load_occurrence_maps(
    data_dir: &Path,
    file_prefix: &str,
    motif: &str,
    address_column: &str,
    occurrences_column: &str,
    start: i64,
    end: i64,
) -> Result<BTreeMap<i64, HashMap<String, u64>>> {
    let mut days = BTreeMap::new();

    for day in day_range(start, end) {
        let path = data_dir.join(format!("{}{}_{}.csv", file_prefix, day, motif));
        let df = read_csv(&path)?;

        let addresses = df.column(address_column)?.cast(&DataType::String)?;
        let addresses = addresses.str()?;
        let occurrences = df.column(occurrences_column)?.cast(&DataType::UInt64)?;
        let occurrences = occurrences.u64()?;

        let mut map = HashMap::with_capacity(df.height());
        for i in 0..df.height() {
            if let (Some(addr), Some(count)) = (addresses.get(i), occurrences.get(i)) {
                map.insert(addr.to_string(), count);
            }
        }

        log::debug!("Day {} {}: {} center addresses", day, motif, map.len());
        days.insert(day, map);
    }

    Ok(days)
}

fn read_csv(path: &PathBuf) -> Result<DataFrame> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()
        .with_context(|| format!("Failed to open {}", path.display()))?
        .collect()
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(df)
}
