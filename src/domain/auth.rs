use crate::{common::error::AuthError, domain::account::Account};

/// Attempts allowed per session unless configured otherwise.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthResult {
    Authenticated,
    LockedOut,
}

/// Attempt counter for one authentication sequence.
///
/// Created when a caller starts asking for the code and dropped once the
/// caller is authenticated or locked out. Checking a candidate only reads the
/// account.
#[derive(Debug, Clone)]
pub struct AuthSession {
    attempts_remaining: u32,
}

impl AuthSession {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            attempts_remaining: max_attempts,
        }
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    pub fn is_locked_out(&self) -> bool {
        self.attempts_remaining == 0
    }

    /// Checks one candidate.
    ///
    /// A miss costs one attempt and yields `WrongCode`, or `LockedOut` when it
    /// was the last one. Once locked out every further call yields `LockedOut`
    /// without looking at the candidate.
    pub fn attempt(&mut self, account: &Account, candidate: &str) -> Result<(), AuthError> {
        if self.is_locked_out() {
            return Err(AuthError::LockedOut);
        }
        if account.verify_code(candidate) {
            return Ok(());
        }
        self.attempts_remaining -= 1;
        if self.is_locked_out() {
            Err(AuthError::LockedOut)
        } else {
            Err(AuthError::WrongCode)
        }
    }
}

/// Runs a whole authentication sequence over `candidates`.
///
/// Candidates are pulled one at a time and iteration stops at the first
/// match, so nothing after it is consumed. Running out of candidates before a
/// match also ends in `LockedOut`: the session cannot proceed.
pub fn authenticate<I, S>(account: &Account, candidates: I, max_attempts: u32) -> AuthResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut session = AuthSession::new(max_attempts);
    if session.is_locked_out() {
        return AuthResult::LockedOut;
    }

    for candidate in candidates {
        match session.attempt(account, candidate.as_ref()) {
            Ok(()) => return AuthResult::Authenticated,
            Err(AuthError::WrongCode) => continue,
            Err(AuthError::LockedOut) => return AuthResult::LockedOut,
        }
    }
    AuthResult::LockedOut
}
