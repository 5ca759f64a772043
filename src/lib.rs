//! A single-account ATM session: secret-code authentication with attempt
//! limiting, withdrawals, deposits, balance inquiries, code changes and an
//! append-only ledger of everything that happened.
//!
//! The `domain` modules hold the account state machine and never perform
//! I/O. `io` and `app` form the interactive caller around it.

pub mod app;
pub mod config;
pub mod observability;

pub mod common {
    pub mod error;
    pub mod event;
    pub mod money;
}

pub mod domain {
    pub mod account;
    pub mod auth;
    pub mod ledger;
    pub mod secret_code;
    pub mod transaction;
}

pub mod io {
    pub mod reader;
    pub mod writer;
}

pub mod worker {
    pub mod processor;
}
