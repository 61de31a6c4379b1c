//! Per-column averages over the current record collection

use crate::error::{Result, StatsError};
use crate::records::MatchRecord;
use serde::{Deserialize, Serialize};

/// Arithmetic means of the numeric columns, recomputed every render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub kills: f64,
    pub deaths: f64,
    pub accuracy: f64,
    pub damage_dealt: f64,
    pub damage_taken: f64,
}

impl SummaryStats {
    /// Compute averages over the full collection
    ///
    /// Order-independent. An empty collection is `EmptyDataset`; the caller
    /// decides how to degrade (the engine omits the summary cards).
    pub fn compute(records: &[MatchRecord]) -> Result<Self> {
        if records.is_empty() {
            return Err(StatsError::EmptyDataset);
        }

        let n = records.len() as f64;
        let sum = |value: fn(&MatchRecord) -> f64| records.iter().map(value).sum::<f64>() / n;

        Ok(Self {
            kills: sum(|r| f64::from(r.kills)),
            deaths: sum(|r| f64::from(r.deaths)),
            accuracy: sum(|r| r.accuracy),
            damage_dealt: sum(|r| r.damage_dealt),
            damage_taken: sum(|r| r.damage_taken),
        })
    }

    /// Kill average rounded for card display
    pub fn kills_display(&self) -> i64 {
        self.kills.round() as i64
    }

    /// Death average rounded for card display
    pub fn deaths_display(&self) -> i64 {
        self.deaths.round() as i64
    }
}
