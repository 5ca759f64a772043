use std::io::{self, Write};

use crate::{
    common::{
        error::{AuthError, ChangeCodeError, DepositError, WithdrawError},
        money::Money,
    },
    domain::transaction::{LedgerEntry, TIMESTAMP_FORMAT},
    worker::processor::{Outcome, Rejection},
};

pub const CURRENCY: &str = "₹";

pub const GREETING: &str = "Welcome to the ATM Machine Simulation!";
pub const FAREWELL: &str = "Thank you for using the ATM. Goodbye!";
pub const INVALID_OPTION: &str = "Invalid option. Please try again.";
pub const INCORRECT_PIN: &str = "Incorrect PIN.";
pub const LOCKED_OUT: &str = "Too many incorrect attempts. Exiting...";
pub const NO_TRANSACTIONS: &str = "No transactions yet.";

pub const PROMPT_PIN: &str = "Enter your 4-digit PIN: ";
pub const PROMPT_CHOICE: &str = "Choose an option (1-6): ";
pub const PROMPT_WITHDRAW: &str = "Enter amount to withdraw: ₹";
pub const PROMPT_DEPOSIT: &str = "Enter amount to deposit: ₹";
pub const PROMPT_CURRENT_PIN: &str = "Enter your current PIN: ";
pub const PROMPT_NEW_PIN: &str = "Enter new 4-digit PIN: ";
pub const PROMPT_CONFIRM_PIN: &str = "Confirm new PIN: ";

const MENU: &str = "\n--- ATM MENU ---\n\
1. Balance Inquiry\n\
2. Cash Withdrawal\n\
3. Cash Deposit\n\
4. Change PIN\n\
5. Transaction History\n\
6. Exit";

/// Writes a prompt with no newline and flushes so it shows before input is read.
pub fn write_prompt<W: Write>(out: &mut W, prompt: &str) -> io::Result<()> {
    out.write_all(prompt.as_bytes())?;
    out.flush()
}

pub fn write_line<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    writeln!(out, "{line}")
}

pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{MENU}")
}

pub fn write_auth_failure<W: Write>(out: &mut W, err: AuthError) -> io::Result<()> {
    match err {
        AuthError::WrongCode => write_line(out, INCORRECT_PIN),
        AuthError::LockedOut => {
            write_line(out, INCORRECT_PIN)?;
            write_line(out, LOCKED_OUT)
        }
    }
}

fn currency(amount: Money) -> String {
    format!("{CURRENCY}{}", amount.to_string_2dp())
}

/// Caller-facing wording for a refused command.
pub fn rejection_message(rejection: Rejection) -> &'static str {
    match rejection {
        Rejection::Withdraw(WithdrawError::InvalidInput)
        | Rejection::Deposit(DepositError::InvalidInput) => {
            "Invalid input. Please enter a numeric value."
        }
        Rejection::Withdraw(WithdrawError::NonPositiveAmount)
        | Rejection::Deposit(DepositError::NonPositiveAmount) => {
            "Invalid amount. Please enter a positive value."
        }
        Rejection::Withdraw(WithdrawError::InsufficientFunds) => "Insufficient balance.",
        Rejection::Deposit(DepositError::BalanceOverflow) => {
            "Amount too large. The balance cannot hold it."
        }
        Rejection::ChangeCode(ChangeCodeError::WrongCurrentCode) => "Incorrect current PIN.",
        Rejection::ChangeCode(ChangeCodeError::InvalidFormat) => {
            "Invalid PIN format. Must be 4 digits."
        }
        Rejection::ChangeCode(ChangeCodeError::ConfirmationMismatch) => {
            "PIN mismatch. New PIN and confirmation differ."
        }
    }
}

/// Formats one ledger entry as a history line:
/// `timestamp | kind (15 wide) | ₹amount (8 wide)`.
pub fn format_entry(entry: &LedgerEntry) -> String {
    format!(
        "{} | {:<15} | {CURRENCY}{:>8}",
        entry.timestamp().format(TIMESTAMP_FORMAT),
        entry.kind().label(),
        entry.amount().to_string_2dp()
    )
}

pub fn write_history<W: Write>(out: &mut W, entries: &[LedgerEntry]) -> io::Result<()> {
    if entries.is_empty() {
        return write_line(out, NO_TRANSACTIONS);
    }
    writeln!(out, "\n--- Transaction History ---")?;
    for entry in entries {
        write_line(out, &format_entry(entry))?;
    }
    Ok(())
}

pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Balance(balance) => {
            writeln!(out, "Your current balance is: {}", currency(*balance))
        }
        Outcome::Withdrawn { amount, .. } => {
            writeln!(out, "{} withdrawn successfully.", currency(*amount))
        }
        Outcome::Deposited { amount, .. } => {
            writeln!(out, "{} deposited successfully.", currency(*amount))
        }
        Outcome::CodeChanged => write_line(out, "PIN changed successfully."),
        Outcome::History(entries) => write_history(out, entries),
        Outcome::Rejected(rejection) => write_line(out, rejection_message(*rejection)),
        Outcome::Exit => write_line(out, FAREWELL),
    }
}

#[derive(serde::Serialize)]
/// CSV export row, one per entry under the `timestamp,kind,amount` header.
struct HistoryRow {
    timestamp: String,
    kind: &'static str,
    amount: String,
}

/// Writes the ledger as CSV, oldest entry first.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use atm_session::common::money::Money;
/// use atm_session::domain::account::Account;
/// use atm_session::io::writer::write_history_csv;
///
/// let mut account = Account::new("1234", Money::from_major(10)).unwrap();
/// account.deposit(Money::from_major(5)).unwrap();
///
/// let mut out = Vec::new();
/// write_history_csv(&mut out, account.transactions()).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("timestamp,kind,amount\n"));
/// assert!(s.trim_end().ends_with(",Deposit,5.00"));
/// ```
pub fn write_history_csv<W: Write>(writer: W, entries: &[LedgerEntry]) -> Result<(), csv::Error> {
    // Header is written up front so an empty ledger still exports one line.
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(["timestamp", "kind", "amount"])?;

    for entry in entries {
        wtr.serialize(HistoryRow {
            timestamp: entry.timestamp().format(TIMESTAMP_FORMAT).to_string(),
            kind: entry.kind().label(),
            amount: entry.amount().to_string_2dp(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::domain::transaction::EntryKind;

    fn ts() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2024-05-06 07:08:09", TIMESTAMP_FORMAT).unwrap()
    }

    fn render(outcome: &Outcome) -> String {
        let mut out = Vec::new();
        write_outcome(&mut out, outcome).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn formats_history_line_with_padding() {
        let entry = LedgerEntry::new(ts(), EntryKind::Withdrawal, Money::from_major(-2500));
        assert_eq!(
            format_entry(&entry),
            "2024-05-06 07:08:09 | Withdrawal      | ₹-2500.00"
        );

        let entry = LedgerEntry::new(ts(), EntryKind::Inquiry, Money::zero());
        assert_eq!(
            format_entry(&entry),
            "2024-05-06 07:08:09 | Balance Inquiry | ₹    0.00"
        );
    }

    #[test]
    fn empty_history_says_so() {
        assert_eq!(render(&Outcome::History(Vec::new())), "No transactions yet.\n");
    }

    #[test]
    fn history_has_header_then_entries_oldest_first() {
        let entries = vec![
            LedgerEntry::new(ts(), EntryKind::Deposit, Money::from_major(10)),
            LedgerEntry::new(ts(), EntryKind::PinChange, Money::zero()),
        ];
        let s = render(&Outcome::History(entries));
        let lines: Vec<&str> = s.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "--- Transaction History ---");
        assert!(lines[2].contains("| Deposit         | ₹   10.00"));
        assert!(lines[3].contains("| PIN Change      |"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn renders_successes() {
        assert_eq!(
            render(&Outcome::Balance(Money::from_major(10000))),
            "Your current balance is: ₹10000.00\n"
        );
        assert_eq!(
            render(&Outcome::Withdrawn {
                amount: Money::from_major(2500),
                balance: Money::from_major(7500),
            }),
            "₹2500.00 withdrawn successfully.\n"
        );
        assert_eq!(
            render(&Outcome::Deposited {
                amount: Money::from_minor_units(150),
                balance: Money::from_major(2),
            }),
            "₹1.50 deposited successfully.\n"
        );
        assert_eq!(render(&Outcome::CodeChanged), "PIN changed successfully.\n");
        assert_eq!(render(&Outcome::Exit), format!("{FAREWELL}\n"));
    }

    #[test]
    fn renders_rejections() {
        assert_eq!(
            render(&Outcome::Rejected(Rejection::Withdraw(
                WithdrawError::InsufficientFunds
            ))),
            "Insufficient balance.\n"
        );
        assert_eq!(
            rejection_message(Rejection::Deposit(DepositError::InvalidInput)),
            rejection_message(Rejection::Withdraw(WithdrawError::InvalidInput))
        );
        assert_eq!(
            rejection_message(Rejection::ChangeCode(ChangeCodeError::WrongCurrentCode)),
            "Incorrect current PIN."
        );
    }

    #[test]
    fn lockout_prints_miss_then_exit_notice() {
        let mut out = Vec::new();
        write_auth_failure(&mut out, AuthError::LockedOut).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{INCORRECT_PIN}\n{LOCKED_OUT}\n")
        );
    }

    #[test]
    fn menu_lists_six_options() {
        let mut out = Vec::new();
        write_menu(&mut out).unwrap();
        let s = String::from_utf8(out).unwrap();

        assert!(s.contains("--- ATM MENU ---"));
        assert!(s.contains("1. Balance Inquiry"));
        assert!(s.contains("6. Exit"));
    }

    #[test]
    fn csv_export_writes_header_and_rows_in_order() {
        let entries = vec![
            LedgerEntry::new(ts(), EntryKind::Withdrawal, Money::from_major(-20)),
            LedgerEntry::new(ts(), EntryKind::Inquiry, Money::zero()),
        ];
        let mut out = Vec::new();
        write_history_csv(&mut out, &entries).unwrap();
        let s = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = s.lines().collect();

        assert_eq!(lines[0], "timestamp,kind,amount");
        assert_eq!(lines[1], "2024-05-06 07:08:09,Withdrawal,-20.00");
        assert_eq!(lines[2], "2024-05-06 07:08:09,Balance Inquiry,0.00");
    }

    #[test]
    fn csv_export_of_empty_ledger_is_header_only() {
        let mut out = Vec::new();
        write_history_csv(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "timestamp,kind,amount\n");
    }
}
