//! CLI interface for yap.
//!
//! Every invocation is one synchronous pass: resolve the state file, load the
//! record as of `now`, apply at most one transition, and write the record back
//! if the command mutates it. `state` and `outside-pomodoro` only read, so
//! they never create the state file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::{self, ConfigError};
use crate::storage::{Storage, StorageError};
use crate::timer::{Outcome, Pomodoro};

/// Yet another pomodoro: a file-backed Pomodoro timer.
#[derive(Debug, Parser)]
#[command(name = "yap", version, after_long_help = STATE_FILE_HELP)]
pub struct Cli {
    /// State file to read and write.
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Output extra debugging on stderr.
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

const STATE_FILE_HELP: &str = r"State file:
  Resolved from --file, then $YAP_FILE, then `file = ...` in
  <config dir>/yap/config.toml, then ~/.yap.

Exit status:
  0 success (a refused `next` or `start` still succeeds)
  1 `outside-pomodoro` while a pomodoro is running
  2 bad invocation
  3 unreadable config or state file

Scripting:
  yap outside-pomodoro && notify-send 'safe to interrupt'";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current status line.
    State,

    /// Skip ahead and schedule the next interval from now.
    ///
    /// Refused while a pomodoro is running.
    Next,

    /// Clear the running interval, keeping phase and session count.
    Stop,

    /// Start the first pomodoro of a fresh run.
    ///
    /// Refused once the run is under way.
    Start,

    /// Back to session 1 with nothing running.
    Reset,

    /// Exit with status 1 and "in pomodoro" while a pomodoro is running.
    OutsidePomodoro,
}

/// Why an invocation did not exit successfully.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A pomodoro is running. Not a failure of the tool.
    #[error("in pomodoro")]
    InPomodoro,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CliError {
    /// Process exit status for this error.
    ///
    /// `1` is reserved for [`CliError::InPomodoro`] and `2` for clap's usage
    /// errors, so scripts can tell both apart from a broken state file.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InPomodoro => 1,
            Self::Config(_) | Self::Storage(_) => 3,
        }
    }
}

/// Run one command as of `now` (epoch milliseconds).
pub fn run(cli: &Cli, now: i64) -> Result<(), CliError> {
    let storage = Storage::new(config::resolve_state_file(cli.file.as_deref())?);
    debug!(path = %storage.path().display(), "resolved state file");

    let mut pomodoro = Pomodoro::load(storage.read()?, now);
    debug!(
        record = ?pomodoro.record(),
        status = ?pomodoro.status(),
        now,
        "loaded timer"
    );

    let outcome = match cli.command {
        Command::State => {
            println!("{}", pomodoro.describe(now));
            return Ok(());
        }
        Command::OutsidePomodoro => {
            return if pomodoro.is_in_active_work_phase() {
                Err(CliError::InPomodoro)
            } else {
                Ok(())
            };
        }
        Command::Next => pomodoro.advance(now),
        Command::Stop => pomodoro.stop(),
        Command::Start => pomodoro.go_time(now),
        Command::Reset => pomodoro.reset(),
    };

    match outcome {
        Outcome::Applied => debug!(command = ?cli.command, "applied"),
        Outcome::Refused(refusal) => println!("{refusal}"),
    }

    // Written even after a refusal: load may have rolled the record over.
    storage.write(pomodoro.record())?;
    Ok(())
}
