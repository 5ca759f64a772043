use crate::common::money::ParsedAmount;

/// One of the six menu options a caller can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Inquiry,
    Withdraw,
    Deposit,
    ChangeCode,
    History,
    Exit,
}

impl MenuChoice {
    /// Maps the menu keys `1`..`6`; anything else is not an option.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "1" => Some(MenuChoice::Inquiry),
            "2" => Some(MenuChoice::Withdraw),
            "3" => Some(MenuChoice::Deposit),
            "4" => Some(MenuChoice::ChangeCode),
            "5" => Some(MenuChoice::History),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// A fully parsed request sent from the input layer to the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Inquiry,
    Withdraw {
        amount: ParsedAmount,
    },
    Deposit {
        amount: ParsedAmount,
    },
    ChangeCode {
        old_code: String,
        new_code: String,
        confirm_code: String,
    },
    History,
    Exit,
}
