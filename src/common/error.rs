/// Process-level failures of the session driver and binary.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("config error: {0}")]
    Config(String),
    #[error("cannot open account: {0}")]
    Account(#[from] AccountError),
}

/// Rejections when opening an account.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountError {
    #[error("initial code must be exactly 4 digits")]
    InvalidInitialCode,
    #[error("initial balance must not be negative")]
    InvalidInitialBalance,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("wrong code")]
    WrongCode,
    #[error("locked out")]
    LockedOut,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawError {
    #[error("invalid input")]
    InvalidInput,
    #[error("non-positive amount")]
    NonPositiveAmount,
    #[error("insufficient funds")]
    InsufficientFunds,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepositError {
    #[error("invalid input")]
    InvalidInput,
    #[error("non-positive amount")]
    NonPositiveAmount,
    #[error("balance overflow")]
    BalanceOverflow,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCodeError {
    #[error("wrong current code")]
    WrongCurrentCode,
    #[error("invalid code format")]
    InvalidFormat,
    #[error("confirmation mismatch")]
    ConfirmationMismatch,
}
