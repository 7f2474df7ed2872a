//! Bounded in-memory buffer of captured webhooks.
//!
//! Records are kept newest first. The buffer never holds more than
//! [`MAX_RECORDS`] entries: inserting into a full buffer drops the oldest one.
//! Callers share the store behind a single lock (see `AppState`), so each
//! operation observes and leaves a consistent sequence.

use std::{collections::VecDeque, num::IntErrorKind};

use thiserror::Error;

use crate::model::record::WebhookRecord;

/// Maximum number of records retained.
pub const MAX_RECORDS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("index {0:?} is not an integer")]
    InvalidArgument(String),

    #[error("index range {from}..={to} is outside 0..{len}")]
    OutOfRange { from: i64, to: i64, len: usize },

    #[error("fromIndex {from} is greater than toIndex {to}")]
    InvalidRange { from: i64, to: i64 },
}

/// Point-in-time copy of the store contents, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub records: Vec<WebhookRecord>,
    pub total: usize,
}

/// Result of a successful range deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deleted {
    pub deleted: usize,
    pub remaining: usize,
}

#[derive(Debug, Default)]
pub struct RecordStore {
    records: VecDeque<WebhookRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: VecDeque::with_capacity(MAX_RECORDS + 1),
        }
    }

    /// Places `record` at position 0 and evicts from the tail past capacity.
    pub fn insert(&mut self, record: WebhookRecord) {
        self.records.push_front(record);
        self.records.truncate(MAX_RECORDS);
    }

    /// Removes the inclusive slice `[from, to]` of positions given as raw
    /// path text.
    ///
    /// Checks run in a fixed order: both indices must parse as integers, both
    /// must address an existing record, and `from` must not exceed `to`. A
    /// rejected call leaves the store untouched.
    pub fn delete_range(&mut self, from: &str, to: &str) -> Result<Deleted, StoreError> {
        let from = parse_index(from)?;
        let to = parse_index(to)?;
        self.delete_positions(from, to)
    }

    fn delete_positions(&mut self, from: i64, to: i64) -> Result<Deleted, StoreError> {
        let len = self.records.len();
        let in_bounds = |i: i64| usize::try_from(i).is_ok_and(|i| i < len);
        if !in_bounds(from) || !in_bounds(to) {
            return Err(StoreError::OutOfRange { from, to, len });
        }
        if from > to {
            return Err(StoreError::InvalidRange { from, to });
        }

        // both bounds were checked against len above
        let (start, end) = (from as usize, to as usize);
        let deleted = self.records.drain(start..=end).count();

        Ok(Deleted {
            deleted,
            remaining: self.records.len(),
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            records: self.records.iter().cloned().collect(),
            total: self.records.len(),
        }
    }
}

/// Parses a position. Integers too large for `i64` saturate so that they fail
/// the bounds check rather than the integer check.
fn parse_index(raw: &str) -> Result<i64, StoreError> {
    raw.parse::<i64>().or_else(|err| match err.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(StoreError::InvalidArgument(raw.to_string())),
    })
}
