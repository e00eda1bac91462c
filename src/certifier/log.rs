// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Append-only log of obstruction records, with per-classification counters.

use super::record::{Classification, ObstructionRecord};
use serde::Serialize;
use std::collections::BTreeMap;
use strum::{EnumCount, IntoEnumIterator};

/// A record together with its position in the orbit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggedRecord {
    pub iteration: usize,
    #[serde(flatten)]
    pub record: ObstructionRecord,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct ObstructionLog {
    records: Vec<LoggedRecord>,
    #[serde(skip)]
    counts: [u64; Classification::COUNT],
}

impl ObstructionLog {
    pub fn new() -> Self {
        ObstructionLog::default()
    }

    /// Append a record; iterations number from 0 in insertion order.
    pub fn push(&mut self, record: ObstructionRecord) {
        self.counts[record.classification as usize] += 1;
        self.records.push(LoggedRecord {
            iteration: self.records.len(),
            record,
        });
    }

    pub fn records(&self) -> &[LoggedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&LoggedRecord> {
        self.records.last()
    }

    /// Number of records with the given classification.
    pub fn count(&self, classification: Classification) -> u64 {
        self.counts[classification as usize]
    }

    /// Counts keyed by classification tag, every tag present.
    pub fn summary(&self) -> BTreeMap<String, u64> {
        Classification::iter()
            .map(|c| (c.to_string(), self.count(c)))
            .collect()
    }

    /// Iteration index of the first ring-solvable record, if any.
    pub fn first_ring_solvable(&self) -> Option<usize> {
        self.records
            .iter()
            .find(|logged| logged.record.classification == Classification::RingSolvable)
            .map(|logged| logged.iteration)
    }

    pub fn into_records(self) -> Vec<LoggedRecord> {
        self.records
    }
}
