use std::fmt;

use chrono::NaiveDateTime;

use crate::common::money::Money;

/// Wall-clock layout used when entries are displayed or exported.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Inquiry,
    Withdrawal,
    Deposit,
    PinChange,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Inquiry => "Balance Inquiry",
            EntryKind::Withdrawal => "Withdrawal",
            EntryKind::Deposit => "Deposit",
            EntryKind::PinChange => "PIN Change",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One completed operation. Withdrawals carry a negative amount, deposits a
/// positive one, inquiries and PIN changes zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    timestamp: NaiveDateTime,
    kind: EntryKind,
    amount: Money,
}

impl LedgerEntry {
    pub fn new(timestamp: NaiveDateTime, kind: EntryKind, amount: Money) -> Self {
        Self {
            timestamp,
            kind,
            amount,
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }
}
