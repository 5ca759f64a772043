use std::fmt;

pub const CODE_LENGTH: usize = 4;

/// The numeric credential guarding an account. Always exactly four ASCII digits.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretCode(String);

impl SecretCode {
    /// Returns `None` unless `code` is exactly four ASCII digits. No trimming.
    pub fn parse(code: &str) -> Option<Self> {
        if is_well_formed(code) {
            Some(Self(code.to_owned()))
        } else {
            None
        }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn is_well_formed(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Debug for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretCode(****)")
    }
}
