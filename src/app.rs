use std::io::{BufRead, BufWriter, Write, stdin, stdout};

use tracing::{info, warn};

use crate::{
    common::{error::AppError, event::MenuChoice},
    config::Config,
    domain::{account::Account, auth::AuthSession},
    io::{reader::LineReader, writer},
    worker::processor::{Outcome, Processor},
};

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    LockedOut,
    Exited,
    InputClosed,
}

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    let config = Config::from_env()?;

    let stdin = stdin();
    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_with(config, &args, stdin.lock(), &mut out)?;
    out.flush()?;
    Ok(())
}

/// Opens the configured account, runs a session over `input`/`output` and
/// exports the ledger afterwards.
///
/// `args` follows `std::env::args` layout: a first positional argument
/// replaces `config.history_export`. The export also runs after a lockout,
/// writing just the CSV header for the empty ledger.
pub fn run_with<R, W>(
    mut config: Config,
    args: &[String],
    input: R,
    output: &mut W,
) -> Result<SessionEnd, AppError>
where
    R: BufRead,
    W: Write,
{
    if let Some(path) = args.get(1) {
        config.history_export = Some(path.into());
    }

    let mut account = Account::new(&config.pin, config.initial_balance)?;
    let end = run_session(&mut account, config.max_attempts, input, output)?;
    info!(?end, "session closed");

    if let Some(path) = &config.history_export {
        let file = std::fs::File::create(path)?;
        writer::write_history_csv(BufWriter::new(file), account.transactions())?;
        info!(
            path = %path.display(),
            entries = account.transactions().len(),
            "history exported"
        );
    }

    Ok(end)
}

/// Drives one interactive session against `account`.
///
/// Greets, authenticates with at most `max_attempts` tries, then loops over
/// the menu until the user exits or input runs out. All prompts and results
/// go to `output`.
pub fn run_session<R, W>(
    account: &mut Account,
    max_attempts: u32,
    input: R,
    output: &mut W,
) -> Result<SessionEnd, AppError>
where
    R: BufRead,
    W: Write,
{
    let mut reader = LineReader::new(input);
    writer::write_line(output, writer::GREETING)?;

    let mut auth = AuthSession::new(max_attempts);
    if auth.is_locked_out() {
        writer::write_line(output, writer::LOCKED_OUT)?;
        warn!("no authentication attempts allowed");
        return Ok(SessionEnd::LockedOut);
    }
    loop {
        let Some(candidate) = reader.prompt(output, writer::PROMPT_PIN)? else {
            return Ok(SessionEnd::InputClosed);
        };
        match auth.attempt(account, &candidate) {
            Ok(()) => {
                info!("authenticated");
                break;
            }
            Err(err) => {
                writer::write_auth_failure(output, err)?;
                if auth.is_locked_out() {
                    warn!(max_attempts, "locked out");
                    return Ok(SessionEnd::LockedOut);
                }
            }
        }
    }

    let mut processor = Processor::new();
    let end = loop {
        writer::write_menu(output)?;
        let Some(key) = reader.prompt(output, writer::PROMPT_CHOICE)? else {
            break SessionEnd::InputClosed;
        };
        let Some(choice) = MenuChoice::from_key(&key) else {
            writer::write_line(output, writer::INVALID_OPTION)?;
            continue;
        };
        let Some(command) = reader.read_command(output, choice)? else {
            break SessionEnd::InputClosed;
        };

        let outcome = processor.process(account, command);
        writer::write_outcome(output, &outcome)?;
        if outcome == Outcome::Exit {
            break SessionEnd::Exited;
        }
    };

    info!(
        processed = processor.processed(),
        rejected = processor.rejected(),
        "menu loop finished"
    );
    Ok(end)
}
