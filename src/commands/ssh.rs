use std::io::{self, BufRead, Write};
use yansi::Paint;

use super::{step, CommandError, Outcome};
use crate::api::InventoryClient;
use crate::config::Config;
use crate::connect::{choose, connect, Selection, ShellLauncher, SshLauncher};
use crate::filters;
use crate::models::Teleservice;

/// Find the teleservice matching `fragment` and open a shell on its host.
pub async fn ssh(config: &Config, fragment: &str) -> Result<Outcome, CommandError> {
    let mut stdout = io::stdout();
    step(config, &mut stdout, &format!("Searching for Teleservice {}", fragment))?;
    let client = InventoryClient::new(config)?;
    let teleservices = client.fetch_or_empty(&mut stdout).await;

    // Prompt and ssh both block until the user is done
    let config = config.clone();
    let fragment = fragment.to_string();
    let outcome = tokio::task::spawn_blocking(move || {
        let launcher = SshLauncher::new(config.ssh_program.as_str());
        run_ssh(
            &config,
            teleservices,
            &fragment,
            &mut io::stdin().lock(),
            &mut io::stdout(),
            &launcher,
        )
    })
    .await??;
    Ok(outcome)
}

/// Narrow by name (case-sensitive), disambiguate, then connect.
pub fn run_ssh<R, W, L>(
    config: &Config,
    teleservices: Vec<Teleservice>,
    fragment: &str,
    input: &mut R,
    out: &mut W,
    launcher: &L,
) -> io::Result<Outcome>
where
    R: BufRead,
    W: Write,
    L: ShellLauncher + ?Sized,
{
    let matches = filters::by_name_case_sensitive(teleservices, fragment);
    step(config, out, &format!("{} Teleservices match {}", matches.len(), fragment))?;

    let chosen = match choose(&matches, fragment, input, out)? {
        Selection::Chosen(ts) => ts,
        Selection::NotFound => {
            writeln!(out, "{}", Paint::new(format!("Teleservice {} not found.", fragment)).red())?;
            return Ok(Outcome::NotFound);
        }
        Selection::InvalidChoice => {
            writeln!(out, "{}", Paint::new("Invalid choice.").red())?;
            return Ok(Outcome::InvalidChoice);
        }
    };

    step(config, out, &format!("Connecting to {}...", chosen.host))?;
    out.flush()?;
    match connect(chosen, config.ssh_user.as_deref(), launcher) {
        Ok(code) => Ok(Outcome::Session(code)),
        Err(e) => {
            tracing::error!(%e, host = %chosen.host, "Connection failed");
            eprintln!("{}: {}", Paint::new("Connection failed").red(), e);
            Ok(Outcome::ConnectFailed)
        }
    }
}
