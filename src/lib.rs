//! Discover and connect to Teleservices instances tracked by the infra inventory.
//!
//! The `ts` binary exposes two commands:
//!
//! - `ts list [--name N] [--package P] [--host H] [--url-only]`
//! - `ts ssh <fragment>`
//!
//! Both fetch the inventory fresh, narrow it in memory and either print the
//! records or open a remote shell on the chosen instance's host.

pub mod api;
pub mod commands;
pub mod config;
pub mod connect;
pub mod display;
pub mod filters;
pub mod models;
