//! Picking one teleservice among several matches and opening a remote shell on
//! its host.

use std::io::{self, BufRead, Write};
use std::process::Command;
use thiserror::Error;
use yansi::Paint;

use crate::display::format_choice;
use crate::models::Teleservice;

const PROMPT: &str = "Enter the number of the Teleservice you want to connect to";

#[derive(Debug, Error)]
pub enum ConnectError {
    /// Neither TS_SSH_USER, USER nor the OS account yields a user name
    #[error("could not determine the ssh user (set TS_SSH_USER or USER)")]
    MissingUser,

    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Result of resolving the name matches down to a single record.
#[derive(Debug, PartialEq)]
pub enum Selection<'a> {
    NotFound,
    Chosen(&'a Teleservice),
    InvalidChoice,
}

/// Something able to run an interactive remote shell against `user@host`.
pub trait ShellLauncher {
    /// Blocks until the session ends. `None` means the client died from a signal.
    fn launch(&self, target: &str) -> io::Result<Option<i32>>;

    fn program(&self) -> &str;
}

/// Runs the host's `ssh` client, inheriting the terminal.
pub struct SshLauncher {
    program: String,
}

impl SshLauncher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ShellLauncher for SshLauncher {
    fn launch(&self, target: &str) -> io::Result<Option<i32>> {
        let status = Command::new(&self.program).arg(target).status()?;
        Ok(status.code())
    }

    fn program(&self) -> &str {
        &self.program
    }
}

/// Resolve `matches` to one record, prompting on `input` when there are several.
///
/// Non-numeric answers re-prompt; end of input counts as an invalid choice.
pub fn choose<'a, R: BufRead, W: Write>(
    matches: &'a [Teleservice],
    fragment: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<Selection<'a>> {
    match matches.len() {
        0 => return Ok(Selection::NotFound),
        1 => return Ok(Selection::Chosen(&matches[0])),
        _ => {}
    }

    writeln!(
        out,
        "{}",
        Paint::new(format!(
            "Multiple Teleservices found for {}. Please choose one:",
            fragment
        ))
        .yellow()
    )?;
    for (i, ts) in matches.iter().enumerate() {
        writeln!(out, "{}", format_choice(i + 1, ts))?;
    }

    loop {
        write!(out, "{}: ", PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(Selection::InvalidChoice);
        }
        let answer = line.trim();
        if !is_integer(answer) {
            writeln!(out, "Error: '{}' is not a valid integer.", answer)?;
            continue;
        }

        // Negative or too large for u64/usize is simply out of range
        let position = answer
            .parse::<u64>()
            .ok()
            .and_then(|n| usize::try_from(n).ok())
            .filter(|n| (1..=matches.len()).contains(n));
        return match position {
            Some(n) => Ok(Selection::Chosen(&matches[n - 1])),
            None => {
                tracing::debug!(choice = answer, count = matches.len(), "Choice out of range");
                Ok(Selection::InvalidChoice)
            }
        };
    }
}

/// Optional sign followed by at least one ASCII digit.
fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `user@host` target for the remote shell.
pub fn ssh_target(user: &str, ts: &Teleservice) -> String {
    format!("{}@{}", user, ts.host)
}

/// Launch the remote shell on `ts` and wait for it to exit.
pub fn connect<L: ShellLauncher + ?Sized>(
    ts: &Teleservice,
    user: Option<&str>,
    launcher: &L,
) -> Result<Option<i32>, ConnectError> {
    let user = user.ok_or(ConnectError::MissingUser)?;
    let target = ssh_target(user, ts);
    tracing::info!(%target, program = launcher.program(), "Opening remote shell");

    let code = launcher.launch(&target).map_err(|source| ConnectError::Spawn {
        program: launcher.program().to_string(),
        source,
    })?;
    tracing::info!(%target, ?code, "Remote shell exited");
    Ok(code)
}
