use crate::{
    common::{
        error::{AccountError, ChangeCodeError, DepositError, WithdrawError},
        money::{Money, ParsedAmount},
    },
    domain::{
        ledger::Ledger,
        secret_code::{self, SecretCode},
        transaction::{EntryKind, LedgerEntry},
    },
};

/// A single account: its secret code, its balance and the ledger of what
/// happened to it.
///
/// Every operation validates first and mutates second, so a rejected request
/// leaves code, balance and ledger exactly as they were. A successful
/// operation updates state and appends its ledger entry together.
#[derive(Debug, Clone)]
pub struct Account {
    secret_code: SecretCode,
    balance: Money,
    ledger: Ledger,
}

impl Account {
    pub fn new(secret_code: &str, initial_balance: Money) -> Result<Self, AccountError> {
        Self::with_ledger(secret_code, initial_balance, Ledger::new())
    }

    /// Opens an account on a caller-supplied ledger (e.g. one with a fixed clock).
    pub fn with_ledger(
        secret_code: &str,
        initial_balance: Money,
        ledger: Ledger,
    ) -> Result<Self, AccountError> {
        let secret_code =
            SecretCode::parse(secret_code).ok_or(AccountError::InvalidInitialCode)?;
        if initial_balance.is_negative() {
            return Err(AccountError::InvalidInitialBalance);
        }
        Ok(Self {
            secret_code,
            balance: initial_balance,
            ledger,
        })
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Exact comparison against the current code. Never touches state.
    pub fn verify_code(&self, candidate: &str) -> bool {
        self.secret_code.matches(candidate)
    }

    pub fn inquire_balance(&mut self) -> Money {
        self.ledger.record(EntryKind::Inquiry, Money::zero());
        self.balance
    }

    /// Debits `amount` and returns the new balance.
    pub fn withdraw(&mut self, amount: impl Into<ParsedAmount>) -> Result<Money, WithdrawError> {
        let amount = match amount.into() {
            ParsedAmount::Amount(amount) => amount,
            ParsedAmount::Invalid => return Err(WithdrawError::InvalidInput),
        };
        if !amount.is_positive() {
            return Err(WithdrawError::NonPositiveAmount);
        }
        if amount > self.balance {
            return Err(WithdrawError::InsufficientFunds);
        }

        self.balance -= amount;
        self.ledger.record(EntryKind::Withdrawal, -amount);
        Ok(self.balance)
    }

    /// Credits `amount` and returns the new balance.
    pub fn deposit(&mut self, amount: impl Into<ParsedAmount>) -> Result<Money, DepositError> {
        let amount = match amount.into() {
            ParsedAmount::Amount(amount) => amount,
            ParsedAmount::Invalid => return Err(DepositError::InvalidInput),
        };
        if !amount.is_positive() {
            return Err(DepositError::NonPositiveAmount);
        }
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(DepositError::BalanceOverflow)?;

        self.balance = balance;
        self.ledger.record(EntryKind::Deposit, amount);
        Ok(self.balance)
    }

    pub fn change_code(
        &mut self,
        old_code: &str,
        new_code: &str,
        confirm_code: &str,
    ) -> Result<(), ChangeCodeError> {
        if !self.secret_code.matches(old_code) {
            return Err(ChangeCodeError::WrongCurrentCode);
        }
        if !secret_code::is_well_formed(new_code) {
            return Err(ChangeCodeError::InvalidFormat);
        }
        if new_code != confirm_code {
            return Err(ChangeCodeError::ConfirmationMismatch);
        }
        let new_code = SecretCode::parse(new_code).ok_or(ChangeCodeError::InvalidFormat)?;

        self.secret_code = new_code;
        self.ledger.record(EntryKind::PinChange, Money::zero());
        Ok(())
    }

    /// Full history, oldest first. Reading it does not add an entry.
    pub fn transactions(&self) -> &[LedgerEntry] {
        self.ledger.entries()
    }
}
