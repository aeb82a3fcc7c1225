//! Terminal rendering of teleservices.

use std::io::{self, Write};
use yansi::Paint;

use crate::models::Teleservice;

/// Render one record. With `url_only`, only the vhost is emitted.
pub fn format_teleservice(ts: &Teleservice, url_only: bool) -> String {
    if url_only {
        return ts.vhost_name.clone();
    }
    let header = Paint::new(format!("{} ({})", ts.application_name, ts.environment))
        .blue()
        .bold();
    format!(
        "{}\nHost: {} · Vhost: {} · Total size: {}\nPackages: [{}]",
        header,
        ts.host,
        ts.vhost_name,
        format_size_gb(ts),
        ts.packages.join(", ")
    )
}

/// `total_size` (MB) as GB with two decimals.
pub fn format_size_gb(ts: &Teleservice) -> String {
    match ts.total_size_gb() {
        Some(gb) => format!("{:.2} GB", gb),
        None => "n/a".to_string(),
    }
}

pub fn write_teleservice<W: Write>(out: &mut W, ts: &Teleservice, url_only: bool) -> io::Result<()> {
    writeln!(out, "{}", format_teleservice(ts, url_only))
}

/// Closing line of a `list` run.
pub fn format_summary(count: usize) -> String {
    if count == 0 {
        Paint::new("No Teleservices found.").red().to_string()
    } else {
        Paint::new(format!(
            "All Teleservices listed successfully ({} elements found so far!)",
            count
        ))
        .green()
        .to_string()
    }
}

/// One numbered entry of the disambiguation menu (1-based).
pub fn format_choice(position: usize, ts: &Teleservice) -> String {
    format!("{}. {} ({})", position, ts.application_name, ts.environment)
}
