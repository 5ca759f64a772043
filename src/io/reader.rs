use std::io::{self, BufRead, Write};

use crate::{
    common::{
        event::{Command, MenuChoice},
        money::ParsedAmount,
    },
    io::writer,
};

/// Line-oriented input layer for an interactive session.
///
/// Reads one line per answer and turns menu picks plus their follow-up
/// answers into [`Command`]s. End of input is reported as `None` so the caller
/// can close the session.
pub struct LineReader<R> {
    input: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Next line without its line terminator, or `None` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    pub fn prompt<W: Write>(&mut self, out: &mut W, prompt: &str) -> io::Result<Option<String>> {
        writer::write_prompt(out, prompt)?;
        self.next_line()
    }

    /// Collects whatever `choice` needs and builds the command.
    ///
    /// ```
    /// use std::io::Cursor;
    /// use atm_session::common::event::{Command, MenuChoice};
    /// use atm_session::common::money::{Money, ParsedAmount};
    /// use atm_session::io::reader::LineReader;
    ///
    /// let mut reader = LineReader::new(Cursor::new("250.5\n"));
    /// let mut out = Vec::new();
    /// let cmd = reader.read_command(&mut out, MenuChoice::Withdraw).unwrap();
    ///
    /// assert_eq!(
    ///     cmd,
    ///     Some(Command::Withdraw { amount: ParsedAmount::Amount(Money::from_minor_units(25050)) })
    /// );
    /// ```
    pub fn read_command<W: Write>(
        &mut self,
        out: &mut W,
        choice: MenuChoice,
    ) -> io::Result<Option<Command>> {
        let command = match choice {
            MenuChoice::Inquiry => Command::Inquiry,
            MenuChoice::Withdraw => match self.prompt(out, writer::PROMPT_WITHDRAW)? {
                Some(text) => Command::Withdraw {
                    amount: ParsedAmount::parse(&text),
                },
                None => return Ok(None),
            },
            MenuChoice::Deposit => match self.prompt(out, writer::PROMPT_DEPOSIT)? {
                Some(text) => Command::Deposit {
                    amount: ParsedAmount::parse(&text),
                },
                None => return Ok(None),
            },
            MenuChoice::ChangeCode => {
                let Some(old_code) = self.prompt(out, writer::PROMPT_CURRENT_PIN)? else {
                    return Ok(None);
                };
                let Some(new_code) = self.prompt(out, writer::PROMPT_NEW_PIN)? else {
                    return Ok(None);
                };
                let Some(confirm_code) = self.prompt(out, writer::PROMPT_CONFIRM_PIN)? else {
                    return Ok(None);
                };
                Command::ChangeCode {
                    old_code,
                    new_code,
                    confirm_code,
                }
            }
            MenuChoice::History => Command::History,
            MenuChoice::Exit => Command::Exit,
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::common::money::Money;

    fn reader(input: &str) -> LineReader<Cursor<Vec<u8>>> {
        LineReader::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn next_line_strips_terminators_only() {
        let mut r = reader("1234\r\n 12 \nlast");
        assert_eq!(r.next_line().unwrap().as_deref(), Some("1234"));
        assert_eq!(r.next_line().unwrap().as_deref(), Some(" 12 "));
        assert_eq!(r.next_line().unwrap().as_deref(), Some("last"));
        assert_eq!(r.next_line().unwrap(), None);
    }

    #[test]
    fn prompt_writes_prompt_before_reading() {
        let mut r = reader("42\n");
        let mut out = Vec::new();
        let answer = r.prompt(&mut out, "Amount: ").unwrap();

        assert_eq!(answer.as_deref(), Some("42"));
        assert_eq!(String::from_utf8(out).unwrap(), "Amount: ");
    }

    #[test]
    fn read_command_parses_amounts() {
        let mut r = reader("100\nabc\n");
        let mut out = Vec::new();

        assert_eq!(
            r.read_command(&mut out, MenuChoice::Deposit).unwrap(),
            Some(Command::Deposit {
                amount: ParsedAmount::Amount(Money::from_major(100))
            })
        );
        assert_eq!(
            r.read_command(&mut out, MenuChoice::Withdraw).unwrap(),
            Some(Command::Withdraw {
                amount: ParsedAmount::Invalid
            })
        );
    }

    #[test]
    fn read_command_collects_three_codes_for_change() {
        let mut r = reader("1234\n4321\n4321\n");
        let mut out = Vec::new();

        assert_eq!(
            r.read_command(&mut out, MenuChoice::ChangeCode).unwrap(),
            Some(Command::ChangeCode {
                old_code: "1234".into(),
                new_code: "4321".into(),
                confirm_code: "4321".into(),
            })
        );
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains(writer::PROMPT_CURRENT_PIN));
        assert!(shown.contains(writer::PROMPT_CONFIRM_PIN));
    }

    #[test]
    fn read_command_without_follow_up_needs_no_input() {
        let mut r = reader("");
        let mut out = Vec::new();

        assert_eq!(
            r.read_command(&mut out, MenuChoice::Inquiry).unwrap(),
            Some(Command::Inquiry)
        );
        assert_eq!(
            r.read_command(&mut out, MenuChoice::History).unwrap(),
            Some(Command::History)
        );
        assert!(out.is_empty());
    }

    #[test]
    fn read_command_reports_end_of_input() {
        let mut r = reader("1234\n");
        let mut out = Vec::new();
        assert_eq!(r.read_command(&mut out, MenuChoice::ChangeCode).unwrap(), None);
        assert_eq!(r.read_command(&mut out, MenuChoice::Deposit).unwrap(), None);
    }
}
