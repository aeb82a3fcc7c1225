use std::io::Write;
use yansi::Paint;

use super::error::ApiError;
use crate::config::Config;
use crate::models::Teleservice;

/// HTTP client for the teleservices inventory endpoint.
pub struct InventoryClient {
    client: reqwest::Client,
    url: String,
    verbose: bool,
}

impl InventoryClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("ts/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: config.api_url.clone(),
            verbose: config.verbose,
        })
    }

    /// Issue the GET and return every record, sorted by `application_name`.
    ///
    /// Verbose progress goes to `out`.
    pub async fn fetch<W: Write>(&self, out: &mut W) -> Result<Vec<Teleservice>, ApiError> {
        tracing::debug!(url = %self.url, "Requesting teleservices");
        if self.verbose {
            writeln!(
                out,
                "{}",
                Paint::new(format!("Requesting teleservices from {}", self.url)).green()
            )?;
            writeln!(out, "Request:\n{}", curl_line(&self.url))?;
        }

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let teleservices = parse_teleservices(&text)?;

        tracing::debug!(count = teleservices.len(), "Teleservices received");
        if self.verbose {
            writeln!(
                out,
                "{}",
                Paint::new(format!(
                    "Teleservices received successfully ({} records).",
                    teleservices.len()
                ))
                .green()
            )?;
        }
        Ok(teleservices)
    }

    /// Like [`fetch`](Self::fetch), but a failure is reported on stderr and
    /// degrades to an empty collection.
    pub async fn fetch_or_empty<W: Write>(&self, out: &mut W) -> Vec<Teleservice> {
        match self.fetch(out).await {
            Ok(teleservices) => teleservices,
            Err(e) => {
                tracing::warn!(%e, url = %self.url, "Fetching teleservices failed");
                eprintln!(
                    "{}: {}",
                    Paint::new("Failed to fetch teleservices").red(),
                    e
                );
                Vec::new()
            }
        }
    }
}

/// Parse an inventory body into records, validated and sorted by name.
pub fn parse_teleservices(body: &str) -> Result<Vec<Teleservice>, ApiError> {
    let mut teleservices: Vec<Teleservice> =
        serde_json::from_str(body).map_err(|e| ApiError::InvalidPayload(e.to_string()))?;

    for (index, ts) in teleservices.iter().enumerate() {
        ts.validate()
            .map_err(|reason| ApiError::InvalidRecord { index, reason })?;
    }

    // Ordinal, case-sensitive ordering
    teleservices.sort_by(|a, b| a.application_name.cmp(&b.application_name));
    Ok(teleservices)
}

fn curl_line(url: &str) -> String {
    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new("GET").fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));
    parts.push(format!(
        "{} {}",
        Paint::new("-H").fg(yansi::Color::Magenta),
        Paint::new("'Accept: application/json'").fg(yansi::Color::Magenta)
    ));
    parts.join(" ")
}
