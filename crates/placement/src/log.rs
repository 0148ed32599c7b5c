//! What the placement systems did with each input, newest last.
//!
//! Only the most recent `MAX_LOG_ENTRIES` inputs are kept; sequence numbers
//! keep counting across evictions so callers can tell how much was dropped.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::config::MAX_LOG_ENTRIES;
use crate::input::{InputOutcome, PlacementInput};
use crate::module_type::PlacedInstance;
use crate::results::RejectReason;

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Position of this input in the stream, starting at 0.
    pub seq: u64,
    pub input: PlacementInput,
    pub outcome: InputOutcome,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct PlacementLog {
    entries: VecDeque<LogEntry>,
    recorded: u64,
}

impl PlacementLog {
    /// Append an applied input and return its sequence number.
    pub fn record(&mut self, input: PlacementInput, outcome: InputOutcome) -> u64 {
        let seq = self.recorded;
        self.recorded += 1;
        if self.entries.len() == MAX_LOG_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            seq,
            input,
            outcome,
        });
        seq
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    /// Retained entries, oldest first.
    pub fn recent(&self) -> impl DoubleEndedIterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Inputs recorded since startup, including evicted ones.
    pub fn recorded(&self) -> u64 {
        self.recorded
    }

    /// Instances placed by the retained inputs, in placement order.
    pub fn accepted(&self) -> impl Iterator<Item = &PlacedInstance> {
        self.entries
            .iter()
            .flat_map(|e| e.outcome.placements())
            .filter_map(|r| r.instance())
    }

    /// The most recent refused placement and the input that asked for it.
    pub fn last_rejection(&self) -> Option<(&PlacementInput, &RejectReason)> {
        self.entries.iter().rev().find_map(|e| {
            e.outcome
                .placements()
                .iter()
                .rev()
                .find_map(|r| r.reject_reason())
                .map(|reason| (&e.input, reason))
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
