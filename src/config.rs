use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_INFRA_API_URL: &str = "https://infra-api.imio.be/application/teleservices";
pub const DEFAULT_SSH_PROGRAM: &str = "ssh";

/// Environment variables consulted, in order, before asking the OS.
const SSH_USER_VARS: [&str; 2] = ["TS_SSH_USER", "USER"];

/// Runtime configuration, resolved once at startup and handed to every command.
#[derive(Debug, Clone)]
pub struct Config {
    /// Echo each major step on stdout.
    pub verbose: bool,
    /// Inventory endpoint returning the teleservices collection.
    pub api_url: String,
    /// Remote user for `ssh`; `None` only when even the OS account name is blank.
    pub ssh_user: Option<String>,
    /// Remote-shell client binary.
    pub ssh_program: String,
}

impl Config {
    pub fn from_env(verbose: bool) -> Self {
        Config {
            verbose,
            api_url: get_infra_api_url(),
            ssh_user: get_ssh_user(),
            ssh_program: get_ssh_program(),
        }
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        if let Err(e) = dotenvy::from_path(Path::new(path)) {
            tracing::warn!(%e, path, "Failed to load env file");
        }
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_infra_api_url() -> String {
    sanitize_api_url(&env::var("INFRA_API_URL").unwrap_or_default())
}

/// `TS_SSH_USER`, then `USER`, then the account running this process.
pub fn get_ssh_user() -> Option<String> {
    SSH_USER_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .chain(std::iter::once_with(whoami::username))
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

pub fn get_ssh_program() -> String {
    env::var("TS_SSH_PROGRAM")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_SSH_PROGRAM.to_string())
}

pub fn sanitize_api_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_INFRA_API_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
