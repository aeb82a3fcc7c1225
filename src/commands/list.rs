use std::io::{self, Write};
use yansi::Paint;

use super::{step, CommandError, Outcome};
use crate::api::InventoryClient;
use crate::config::Config;
use crate::display::{format_summary, write_teleservice};
use crate::filters;
use crate::models::Teleservice;

/// Options of `ts list`.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub name: String,
    pub package: String,
    pub url_only: bool,
    pub host: Option<String>,
}

/// Fetch, filter and print teleservices on stdout.
pub async fn list(config: &Config, opts: &ListOptions) -> Result<Outcome, CommandError> {
    let mut stdout = io::stdout();
    step(config, &mut stdout, "Listing all Teleservices instances")?;
    let client = InventoryClient::new(config)?;
    let teleservices = client.fetch_or_empty(&mut stdout).await;
    Ok(run_list(config, teleservices, opts, &mut stdout.lock())?)
}

/// Apply package, host then name filters and print what survives.
///
/// A package or host filter matching nothing stops right there.
pub fn run_list<W: Write>(
    config: &Config,
    mut teleservices: Vec<Teleservice>,
    opts: &ListOptions,
    out: &mut W,
) -> io::Result<Outcome> {
    if !opts.package.is_empty() {
        step(config, out, &format!("Filtering teleservices for package {}", opts.package))?;
        teleservices = filters::by_package(teleservices, &opts.package);
        if teleservices.is_empty() {
            writeln!(
                out,
                "{}",
                Paint::new(format!("No Teleservices found for package {}", opts.package)).red()
            )?;
            return Ok(Outcome::NoPackageMatch);
        }
    }

    if let Some(host) = opts.host.as_deref().filter(|h| !h.is_empty()) {
        step(config, out, &format!("Filtering teleservices for host {}", host))?;
        teleservices = filters::by_host(teleservices, host);
        if teleservices.is_empty() {
            writeln!(
                out,
                "{}",
                Paint::new(format!("No Teleservices found for host {}", host)).red()
            )?;
            return Ok(Outcome::NoHostMatch);
        }
    }

    step(config, out, &format!("Filtering teleservices for name '{}'", opts.name))?;
    let teleservices = filters::by_name(teleservices, &opts.name);
    for ts in &teleservices {
        write_teleservice(out, ts, opts.url_only)?;
    }

    writeln!(out, "{}", format_summary(teleservices.len()))?;
    if teleservices.is_empty() {
        Ok(Outcome::Empty)
    } else {
        Ok(Outcome::Listed(teleservices.len()))
    }
}
