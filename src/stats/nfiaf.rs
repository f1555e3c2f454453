//! NF-IAF scoring over daily motif-count files
//!
//! NF-IAF weighs how dominant an address is within a day's motif counts
//! (normalized frequency) against how rarely it appears across the whole
//! day range (inverse appearance frequency):
//!
//!   iaf(addr)        = log10(num_days / days_present(addr))
//!   nfiaf(addr, day) = occurrences(addr, day) / total(day) * iaf(addr)
//!
//! An address scores on every day of the range, with zero occurrences on
//! days it is absent.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::data::snapshots;

/// One scored (address, day) pair
#[derive(Debug, Clone, PartialEq)]
pub struct NfIafRow {
    pub address: String,
    pub timestamp: i64,
    pub score: f64,
}

/// Score every address seen anywhere in the range against every day,
/// sorted descending by score
pub fn nfiaf_scores(days: &BTreeMap<i64, HashMap<String, u64>>) -> Vec<NfIafRow> {
    let num_days = days.len();
    if num_days == 0 {
        return Vec::new();
    }

    // Union of center addresses over all days, in stable order
    let addresses: BTreeSet<&String> = days.values().flat_map(|counts| counts.keys()).collect();

    // Per-day totals across all addresses
    let day_totals: BTreeMap<i64, u64> = days
        .iter()
        .map(|(&day, counts)| (day, counts.values().sum()))
        .collect();

    let mut rows = Vec::with_capacity(addresses.len() * num_days);

    for &address in &addresses {
        let days_present = days
            .values()
            .filter(|counts| counts.contains_key(address))
            .count();
        let iaf = (num_days as f64 / days_present as f64).log10();

        for (&day, counts) in days {
            let occurrences = counts.get(address).copied().unwrap_or(0);
            let total = day_totals[&day];
            let score = if total == 0 {
                0.0
            } else {
                occurrences as f64 / total as f64 * iaf
            };
            rows.push(NfIafRow {
                address: address.clone(),
                timestamp: day,
                score,
            });
        }
    }

    rows.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.address.cmp(&b.address))
            .then_with(|| a.timestamp.cmp(&b.timestamp))
    });

    rows
}

/// Run the pipeline for each motif type: load the day range of count files
/// and write `nfiaf_<start>_to_<end>_<motif>.csv` ranked by score
pub fn run(
    data_dir: &Path,
    output_dir: &Path,
    start: i64,
    end: i64,
    motifs: &[String],
    file_prefix: &str,
    address_column: &str,
    occurrences_column: &str,
) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    for motif in motifs {
        let days = snapshots::load_occurrence_maps(
            data_dir,
            file_prefix,
            motif,
            address_column,
            occurrences_column,
            start,
            end,
        )?;

        let rows = nfiaf_scores(&days);
        log::info!("{}: scored {} (address, day) pairs", motif, rows.len());

        let path = output_dir.join(format!("nfiaf_{}_to_{}_{}.csv", start, end, motif));
        let mut file = File::create(&path)?;

        writeln!(file, "address,timestamp,nfiaf")?;
        for row in &rows {
            writeln!(file, "{},{},{:.6}", row.address, row.timestamp, row.score)?;
        }

        log::info!("Wrote {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::SECONDS_PER_DAY;

    fn day_counts(days: &[(i64, &[(&str, u64)])]) -> BTreeMap<i64, HashMap<String, u64>> {
        days.iter()
            .map(|&(day, counts)| {
                (
                    day,
                    counts
                        .iter()
                        .map(|&(addr, count)| (addr.to_string(), count))
                        .collect(),
                )
            })
            .collect()
    }

    #[test]
    fn ever_present_addresses_score_zero() {
        // Present on both days: iaf = log10(2/2) = 0
        let days = day_counts(&[
            (0, &[("a", 3), ("b", 1)]),
            (SECONDS_PER_DAY, &[("a", 2), ("c", 2)]),
        ]);

        let rows = nfiaf_scores(&days);
        for row in rows.iter().filter(|r| r.address == "a") {
            assert_eq!(row.score, 0.0);
        }
    }

    #[test]
    fn rare_dominant_addresses_rank_first() {
        // b appears once out of two days and owns half of that day's counts
        let days = day_counts(&[
            (0, &[("a", 2), ("b", 2)]),
            (SECONDS_PER_DAY, &[("a", 4)]),
        ]);

        let rows = nfiaf_scores(&days);
        assert_eq!(rows[0].address, "b");
        assert_eq!(rows[0].timestamp, 0);

        let expected = 2.0 / 4.0 * (2.0f64).log10();
        assert!((rows[0].score - expected).abs() < 1e-12);
    }

    #[test]
    fn every_address_scores_every_day() {
        let days = day_counts(&[
            (0, &[("a", 1)]),
            (SECONDS_PER_DAY, &[("b", 1)]),
            (2 * SECONDS_PER_DAY, &[("a", 1), ("b", 1)]),
        ]);

        let rows = nfiaf_scores(&days);
        assert_eq!(rows.len(), 2 * 3);

        // Absent days contribute zero-score rows
        let absent: Vec<&NfIafRow> = rows
            .iter()
            .filter(|r| r.address == "a" && r.timestamp == SECONDS_PER_DAY)
            .collect();
        assert_eq!(absent.len(), 1);
        assert_eq!(absent[0].score, 0.0);
    }

    #[test]
    fn empty_range_yields_nothing() {
        assert!(nfiaf_scores(&BTreeMap::new()).is_empty());
    }
}
