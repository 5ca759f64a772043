use chrono::{Local, NaiveDateTime, Timelike};

use crate::{
    common::money::Money,
    domain::transaction::{EntryKind, LedgerEntry},
};

/// Source of entry timestamps.
pub type Clock = fn() -> NaiveDateTime;

/// Local wall clock, truncated to whole seconds.
pub fn local_now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Append-only record of completed operations, oldest first.
#[derive(Debug, Clone)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
    clock: Clock,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_clock(local_now)
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            entries: Vec::new(),
            clock,
        }
    }

    /// Stamps and appends an entry. Entries are never edited or removed.
    pub fn record(&mut self, kind: EntryKind, amount: Money) -> &LedgerEntry {
        let entry = LedgerEntry::new((self.clock)(), kind, amount);
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
