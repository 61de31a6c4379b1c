//! Match records and the derived K/D metric
//!
//! A [`MatchRecord`] is one row of training-session results as entered in the
//! spreadsheet. Records are immutable for the duration of one render; every
//! refresh replaces the whole collection.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Expected sheet columns, spelling-exact
pub const COL_TIMESTAMP: &str = "Date time";
pub const COL_KILLS: &str = "Kills";
pub const COL_DEATHS: &str = "Deaths";
pub const COL_SHOTS_FIRED: &str = "Shots Fired";
pub const COL_SHOTS_HIT: &str = "Shots Hit";
pub const COL_ACCURACY: &str = "Accuracy";
pub const COL_DAMAGE_DEALT: &str = "Damage Dealt";
pub const COL_DAMAGE_TAKEN: &str = "Damage Taken";

/// One training session's results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Entry timestamp as written in the sheet (not parsed, not re-sorted)
    pub timestamp: String,
    pub kills: u32,
    pub deaths: u32,
    pub shots_fired: u32,
    pub shots_hit: u32,
    /// Percentage, 0-100
    pub accuracy: f64,
    pub damage_dealt: f64,
    pub damage_taken: f64,
    /// Derived: kills / deaths, one decimal; set by [`derive_kd_ratios`]
    pub kill_death_ratio: f64,
}

/// Column positions resolved from the sheet's header row
#[derive(Debug, Clone, Copy)]
pub struct ColumnIndex {
    timestamp: usize,
    kills: usize,
    deaths: usize,
    shots_fired: usize,
    shots_hit: usize,
    accuracy: usize,
    damage_dealt: usize,
    damage_taken: usize,
}

impl ColumnIndex {
    /// Resolve column positions from a header row
    ///
    /// # Errors
    ///
    /// `SchemaError` naming the first expected column that is absent.
    pub fn from_header(header: &[Value]) -> Result<Self> {
        let find = |name: &str| -> Result<usize> {
            header
                .iter()
                .position(|cell| cell.as_str().map(str::trim) == Some(name))
                .ok_or_else(|| StatsError::Schema {
                    column: name.to_string(),
                })
        };

        Ok(Self {
            timestamp: find(COL_TIMESTAMP)?,
            kills: find(COL_KILLS)?,
            deaths: find(COL_DEATHS)?,
            shots_fired: find(COL_SHOTS_FIRED)?,
            shots_hit: find(COL_SHOTS_HIT)?,
            accuracy: find(COL_ACCURACY)?,
            damage_dealt: find(COL_DAMAGE_DEALT)?,
            damage_taken: find(COL_DAMAGE_TAKEN)?,
        })
    }
}

impl MatchRecord {
    /// Build a record from one sheet row
    ///
    /// Cell contents are taken as-is with lenient numeric parsing; the sheet
    /// is hand-maintained and its contents are not validated here.
    pub fn from_row(row: &[Value], columns: &ColumnIndex) -> Self {
        Self {
            timestamp: cell_str(row, columns.timestamp),
            kills: cell_u32(row, columns.kills),
            deaths: cell_u32(row, columns.deaths),
            shots_fired: cell_u32(row, columns.shots_fired),
            shots_hit: cell_u32(row, columns.shots_hit),
            accuracy: cell_f64(row, columns.accuracy),
            damage_dealt: cell_f64(row, columns.damage_dealt),
            damage_taken: cell_f64(row, columns.damage_taken),
            kill_death_ratio: 0.0,
        }
    }
}

fn cell_str(row: &[Value], index: usize) -> String {
    match row.get(index) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn cell_f64(row: &[Value], index: usize) -> f64 {
    match row.get(index) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s
            .trim()
            .trim_end_matches('%')
            .trim()
            .parse()
            .unwrap_or(0.0),
        _ => 0.0,
    }
}

fn cell_u32(row: &[Value], index: usize) -> u32 {
    cell_f64(row, index) as u32
}

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// K/D ratio for one session, one decimal
///
/// A session with zero deaths reads as its kill count: the ratio floor is one
/// implicit death.
pub fn kd_ratio(kills: u32, deaths: u32) -> f64 {
    if deaths == 0 {
        f64::from(kills)
    } else {
        round1(f64::from(kills) / f64::from(deaths))
    }
}

/// Set the derived K/D column on every record
///
/// Pure over the collection contents; deterministic.
pub fn derive_kd_ratios(records: &mut [MatchRecord]) {
    for record in records {
        record.kill_death_ratio = kd_ratio(record.kills, record.deaths);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(timestamp: &str, kills: u32, deaths: u32) -> MatchRecord {
        MatchRecord {
            timestamp: timestamp.to_string(),
            kills,
            deaths,
            shots_fired: 300,
            shots_hit: 150,
            accuracy: 50.0,
            damage_dealt: 4000.0,
            damage_taken: 2500.0,
            kill_death_ratio: 0.0,
        }
    }

    #[test]
    fn test_kd_ratio_rounds_to_one_decimal() {
        assert_eq!(kd_ratio(10, 3), 3.3);
        assert_eq!(kd_ratio(11, 3), 3.7);
        assert_eq!(kd_ratio(10, 4), 2.5);
    }

    #[test]
    fn test_kd_ratio_zero_deaths_is_kill_count() {
        assert_eq!(kd_ratio(17, 0), 17.0);
        assert_eq!(kd_ratio(0, 0), 0.0);
    }

    #[test]
    fn test_derive_sets_every_record() {
        let mut records = vec![
            record("2024-01-01 19:00", 10, 5),
            record("2024-01-02 19:00", 14, 7),
            record("2024-01-03 19:00", 8, 4),
        ];
        derive_kd_ratios(&mut records);

        let ratios: Vec<f64> = records.iter().map(|r| r.kill_death_ratio).collect();
        assert_eq!(ratios, vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_column_index_from_header() {
        let header = vec![
            json!("Date time"),
            json!("Kills"),
            json!("Deaths"),
            json!("Shots Fired"),
            json!("Shots Hit"),
            json!("Accuracy"),
            json!("Damage Dealt"),
            json!("Damage Taken"),
        ];
        assert!(ColumnIndex::from_header(&header).is_ok());
    }

    #[test]
    fn test_column_index_reordered_header() {
        // Columns may appear in any order; positions are resolved by name
        let header = vec![
            json!("Kills"),
            json!("Date time"),
            json!("Deaths"),
            json!("Accuracy"),
            json!("Shots Fired"),
            json!("Shots Hit"),
            json!("Damage Taken"),
            json!("Damage Dealt"),
        ];
        let columns = ColumnIndex::from_header(&header).unwrap();
        let row = vec![
            json!("22"),
            json!("2024-02-10 20:15"),
            json!("9"),
            json!("48.5"),
            json!("412"),
            json!("200"),
            json!("2800.5"),
            json!("5100"),
        ];

        let record = MatchRecord::from_row(&row, &columns);
        assert_eq!(record.timestamp, "2024-02-10 20:15");
        assert_eq!(record.kills, 22);
        assert_eq!(record.deaths, 9);
        assert_eq!(record.shots_fired, 412);
        assert_eq!(record.shots_hit, 200);
        assert_eq!(record.accuracy, 48.5);
        assert_eq!(record.damage_dealt, 5100.0);
        assert_eq!(record.damage_taken, 2800.5);
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let header = vec![json!("Date time"), json!("Kills"), json!("Deaths")];
        let err = ColumnIndex::from_header(&header).unwrap_err();
        match err {
            StatsError::Schema { column } => assert_eq!(column, "Shots Fired"),
            other => panic!("expected schema error, got {other}"),
        }
    }

    #[test]
    fn test_lenient_cell_parsing() {
        let header = vec![
            json!("Date time"),
            json!("Kills"),
            json!("Deaths"),
            json!("Shots Fired"),
            json!("Shots Hit"),
            json!("Accuracy"),
            json!("Damage Dealt"),
            json!("Damage Taken"),
        ];
        let columns = ColumnIndex::from_header(&header).unwrap();

        // Percent suffix, numeric cells, and a short row all parse without error
        let row = vec![
            json!("2024-01-05 18:30"),
            json!(25),
            json!("7"),
            json!("390"),
            json!("not a number"),
            json!("52%"),
        ];
        let record = MatchRecord::from_row(&row, &columns);
        assert_eq!(record.kills, 25);
        assert_eq!(record.deaths, 7);
        assert_eq!(record.shots_hit, 0);
        assert_eq!(record.accuracy, 52.0);
        assert_eq!(record.damage_dealt, 0.0);
    }
}
