//! The `list` and `ssh` commands.

use std::io::{self, Write};
use thiserror::Error;
use yansi::Paint;

use crate::api::ApiError;
use crate::config::Config;

pub mod list;
pub mod ssh;

pub use list::{list, run_list, ListOptions};
pub use ssh::{run_ssh, ssh};

/// Failures that stop a command before it can report an [`Outcome`].
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("interactive task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// How a command ended; drives the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `list` printed this many records.
    Listed(usize),
    /// Nothing to list (including a failed fetch).
    Empty,
    NoPackageMatch,
    NoHostMatch,
    /// `ssh` found no name match.
    NotFound,
    InvalidChoice,
    /// Remote shell ran; its exit code, `None` if it was killed by a signal.
    Session(Option<i32>),
    /// Remote shell could not be started.
    ConnectFailed,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Listed(_) => 0,
            Outcome::Session(Some(code)) => (code & 0xff) as u8,
            Outcome::Session(None) => 1,
            Outcome::Empty
            | Outcome::NoPackageMatch
            | Outcome::NoHostMatch
            | Outcome::NotFound
            | Outcome::InvalidChoice
            | Outcome::ConnectFailed => 1,
        }
    }
}

/// Echo a step when running verbose.
fn step<W: Write>(config: &Config, out: &mut W, msg: &str) -> io::Result<()> {
    tracing::debug!("{}", msg);
    if config.verbose {
        writeln!(out, "{}", Paint::new(msg).green())?;
    }
    Ok(())
}
