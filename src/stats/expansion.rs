//! Expansion and decay measure over daily address snapshots
//!
//! For each day t at least `interval` days past the start, compare the day's
//! address set against the union of the preceding `interval` days:
//! expansion is the share of newly appearing addresses, decay the share of
//! disappeared ones, both relative to the union size.

use std::collections::{BTreeMap, HashSet};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::config::SECONDS_PER_DAY;
use crate::data::snapshots;

/// Expansion and decay of one day relative to its preceding window
#[derive(Debug, Clone, PartialEq)]
pub struct DayMeasure {
    pub timestamp: i64,
    pub expansion: f64,
    pub decay: f64,
}

/// Compute the measure for every day from `start + interval` days to the
/// last day in `days`. Days missing from the map are treated as empty sets.
pub fn expansion_decay(
    days: &BTreeMap<i64, HashSet<String>>,
    interval: usize,
) -> Vec<DayMeasure> {
    let mut measures = Vec::new();

    let (Some(&start), Some(&end)) = (days.keys().next(), days.keys().next_back()) else {
        return measures;
    };

    let empty = HashSet::new();
    let window = interval as i64 * SECONDS_PER_DAY;

    let mut day = start + window;
    while day <= end {
        // Union of the preceding `interval` day sets
        let mut union: HashSet<&String> = HashSet::new();
        let mut past = day - window;
        while past < day {
            union.extend(days.get(&past).unwrap_or(&empty));
            past += SECONDS_PER_DAY;
        }

        let current = days.get(&day).unwrap_or(&empty);

        if union.is_empty() {
            log::warn!("Empty preceding window for day {}", day);
            measures.push(DayMeasure { timestamp: day, expansion: 0.0, decay: 0.0 });
        } else {
            let expanded = current.iter().filter(|addr| !union.contains(addr)).count();
            let decayed = union.iter().filter(|addr| !current.contains(**addr)).count();
            measures.push(DayMeasure {
                timestamp: day,
                expansion: expanded as f64 / union.len() as f64,
                decay: decayed as f64 / union.len() as f64,
            });
        }

        day += SECONDS_PER_DAY;
    }

    measures
}

/// Run the pipeline end to end: load daily snapshots, compute the measures,
/// and write `expansion_decay_<first>_to_<end>_i=<interval>.csv`
pub fn run(
    data_dir: &Path,
    output_dir: &Path,
    interval: usize,
    start: i64,
    end: i64,
    file_prefix: &str,
    column: &str,
) -> Result<()> {
    if interval == 0 {
        return Err(anyhow::anyhow!("Interval must be at least 1 day"));
    }
    if start + interval as i64 * SECONDS_PER_DAY > end {
        return Err(anyhow::anyhow!(
            "Day range {}..={} is shorter than the {}-day interval",
            start,
            end,
            interval
        ));
    }

    let days = snapshots::load_address_sets(data_dir, file_prefix, column, start, end)?;
    let measures = expansion_decay(&days, interval);

    log::info!("Computed expansion/decay for {} days", measures.len());

    fs::create_dir_all(output_dir)?;
    let first = measures.first().map(|m| m.timestamp).unwrap_or(start);
    let path = output_dir.join(format!(
        "expansion_decay_{}_to_{}_i={}.csv",
        first, end, interval
    ));
    let mut file = File::create(&path)?;

    writeln!(file, "timestamp,expansion,decay")?;
    for measure in &measures {
        writeln!(
            file,
            "{},{:.6},{:.6}",
            measure.timestamp, measure.expansion, measure.decay
        )?;
    }

    log::info!("Wrote {}", path.display());

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn day_sets(sets: &[(i64, &[&str])]) -> BTreeMap<i64, HashSet<String>> {
        sets.iter()
            .map(|&(day, addrs)| {
                (day, addrs.iter().map(|a| a.to_string()).collect())
            })
            .collect()
    }

    #[test]
    fn measures_new_and_disappeared_shares() {
        // Window of 1 day: day 2 vs day 1, day 3 vs day 2
        let days = day_sets(&[
            (0, &["a", "b"]),
            (SECONDS_PER_DAY, &["a", "c"]),
            (2 * SECONDS_PER_DAY, &["c", "d"]),
        ]);

        let measures = expansion_decay(&days, 1);
        assert_eq!(measures.len(), 2);

        // Day 1 vs {a, b}: c is new, b gone
        assert_eq!(measures[0].timestamp, SECONDS_PER_DAY);
        assert!((measures[0].expansion - 0.5).abs() < 1e-12);
        assert!((measures[0].decay - 0.5).abs() < 1e-12);

        // Day 2 vs {a, c}: d is new, a gone
        assert!((measures[1].expansion - 0.5).abs() < 1e-12);
        assert!((measures[1].decay - 0.5).abs() < 1e-12);
    }

    #[test]
    fn union_covers_the_whole_interval() {
        // Window of 2 days: union of days 0 and 1 is {a, b, c}
        let days = day_sets(&[
            (0, &["a", "b"]),
            (SECONDS_PER_DAY, &["c"]),
            (2 * SECONDS_PER_DAY, &["a", "d", "e"]),
        ]);

        let measures = expansion_decay(&days, 2);
        assert_eq!(measures.len(), 1);

        // d and e new out of a union of 3; b and c disappeared
        assert!((measures[0].expansion - 2.0 / 3.0).abs() < 1e-12);
        assert!((measures[0].decay - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn too_short_a_range_yields_nothing() {
        let days = day_sets(&[(0, &["a"])]);
        assert!(expansion_decay(&days, 1).is_empty());
        assert!(expansion_decay(&BTreeMap::new(), 1).is_empty());
    }

    #[test]
    fn identical_days_measure_zero() {
        let days = day_sets(&[
            (0, &["a", "b"]),
            (SECONDS_PER_DAY, &["a", "b"]),
        ]);
        let measures = expansion_decay(&days, 1);
        assert_eq!(measures[0].expansion, 0.0);
        assert_eq!(measures[0].decay, 0.0);
    }
}
