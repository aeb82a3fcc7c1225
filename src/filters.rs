//! Predicates narrowing a fetched teleservices collection.
//!
//! Every filter keeps the input order and never fails: an empty input simply
//! yields an empty output.

use crate::models::Teleservice;

/// Keep records where at least one package contains `package`, ignoring case.
pub fn by_package(teleservices: Vec<Teleservice>, package: &str) -> Vec<Teleservice> {
    let needle = package.to_lowercase();
    teleservices
        .into_iter()
        .filter(|ts| ts.packages.iter().any(|p| p.to_lowercase().contains(&needle)))
        .collect()
}

/// Keep records whose host contains `host` (case-sensitive).
pub fn by_host(teleservices: Vec<Teleservice>, host: &str) -> Vec<Teleservice> {
    teleservices
        .into_iter()
        .filter(|ts| ts.host.contains(host))
        .collect()
}

/// Keep records whose name contains `name`, ignoring case. An empty pattern
/// keeps everything.
pub fn by_name(teleservices: Vec<Teleservice>, name: &str) -> Vec<Teleservice> {
    let needle = name.to_lowercase();
    teleservices
        .into_iter()
        .filter(|ts| ts.application_name.to_lowercase().contains(&needle))
        .collect()
}

/// Keep records whose name contains `fragment` exactly as typed.
pub fn by_name_case_sensitive(teleservices: Vec<Teleservice>, fragment: &str) -> Vec<Teleservice> {
    teleservices
        .into_iter()
        .filter(|ts| ts.application_name.contains(fragment))
        .collect()
}
