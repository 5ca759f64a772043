use tracing::{debug, info, warn};

use crate::{
    common::{
        error::{ChangeCodeError, DepositError, WithdrawError},
        event::Command,
        money::Money,
    },
    domain::{account::Account, transaction::LedgerEntry},
};

/// What a command did, for the presentation layer to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Balance(Money),
    Withdrawn { amount: Money, balance: Money },
    Deposited { amount: Money, balance: Money },
    CodeChanged,
    History(Vec<LedgerEntry>),
    Rejected(Rejection),
    Exit,
}

/// A command the account refused. State is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Withdraw(WithdrawError),
    Deposit(DepositError),
    ChangeCode(ChangeCodeError),
}

impl From<WithdrawError> for Rejection {
    fn from(err: WithdrawError) -> Self {
        Rejection::Withdraw(err)
    }
}

impl From<DepositError> for Rejection {
    fn from(err: DepositError) -> Self {
        Rejection::Deposit(err)
    }
}

impl From<ChangeCodeError> for Rejection {
    fn from(err: ChangeCodeError) -> Self {
        Rejection::ChangeCode(err)
    }
}

/// Dispatches parsed commands onto an authenticated account.
#[derive(Debug, Default)]
pub struct Processor {
    processed: u64,
    rejected: u64,
}

impl Processor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    pub fn process(&mut self, account: &mut Account, command: Command) -> Outcome {
        self.processed += 1;
        let before = account.balance();
        let outcome = match command {
            Command::Inquiry => {
                let balance = account.inquire_balance();
                debug!(%balance, "balance inquiry");
                Outcome::Balance(balance)
            }
            Command::Withdraw { amount } => match account.withdraw(amount) {
                Ok(balance) => {
                    let amount = before - balance;
                    info!(%amount, %balance, "withdrawal");
                    Outcome::Withdrawn { amount, balance }
                }
                Err(err) => Outcome::Rejected(err.into()),
            },
            Command::Deposit { amount } => match account.deposit(amount) {
                Ok(balance) => {
                    let amount = balance - before;
                    info!(%amount, %balance, "deposit");
                    Outcome::Deposited { amount, balance }
                }
                Err(err) => Outcome::Rejected(err.into()),
            },
            Command::ChangeCode {
                old_code,
                new_code,
                confirm_code,
            } => match account.change_code(&old_code, &new_code, &confirm_code) {
                Ok(()) => {
                    info!("secret code changed");
                    Outcome::CodeChanged
                }
                Err(err) => Outcome::Rejected(err.into()),
            },
            Command::History => {
                let entries = account.transactions().to_vec();
                debug!(entries = entries.len(), "history listed");
                Outcome::History(entries)
            }
            Command::Exit => Outcome::Exit,
        };

        if let Outcome::Rejected(rejection) = &outcome {
            self.rejected += 1;
            warn!(?rejection, "command rejected");
        }
        outcome
    }
}
