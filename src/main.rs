use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use teleservices::commands::{self, ListOptions};
use teleservices::config::{self, Config};

#[derive(Parser)]
#[command(
    name = "ts",
    author,
    version,
    about = "Teleservices command-line tool",
    long_about = r#"Welcome to the Teleservices CLI.
This CLI lists Teleservices instances known to the infra inventory and opens ssh sessions on them.

The inventory endpoint is read from INFRA_API_URL (default: https://infra-api.imio.be/application/teleservices).
The ssh user is read from TS_SSH_USER, falling back to USER and then to the current OS account.

Examples:
  ts list
  ts list --name saint
  ts list --package imio_ts_aes --url-only
  ts list --host ts021
  ts ssh etalle
"#,
    after_help = "Use `ts <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Enables verbose mode.
    #[arg(long, global = true)]
    verbose: bool,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List Teleservices instances. Can be filtered by name, package and host.
    #[command(disable_help_flag = true)]
    List {
        /// Filter instances by name. Part of the name is sufficient.
        #[arg(long, short = 'n', default_value = "")]
        name: String,
        /// Filter instances by package.
        #[arg(long, short = 'p', default_value = "")]
        package: String,
        /// Display only the URL of the Teleservices.
        #[arg(long)]
        url_only: bool,
        /// Filter instances by host.
        #[arg(long, short = 'h')]
        host: Option<String>,
        /// Print help
        #[arg(long, action = ArgAction::Help)]
        help: Option<bool>,
    },
    /// SSH into a Teleservices instance. Prompts for a choice when several instances match.
    Ssh {
        /// Part of the instance name (case-sensitive)
        teleservice: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Loaded first so RUST_LOG may come from the .env file
    config::load_env_file(cli.env_file.as_deref());

    // Logs go to stderr, stdout is for listings
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    let config = Config::from_env(cli.verbose);
    tracing::debug!(?config, "Configuration resolved");

    if config.verbose {
        println!("{}", yansi::Paint::new("Verbose mode enabled.").green());
    }

    let result = match cli.command {
        Commands::List {
            name,
            package,
            url_only,
            host,
            help: _,
        } => {
            let opts = ListOptions {
                name,
                package,
                url_only,
                host,
            };
            commands::list(&config, &opts).await
        }
        Commands::Ssh { teleservice } => commands::ssh(&config, &teleservice).await,
    };

    match result {
        Ok(outcome) => {
            tracing::debug!(?outcome, "Command finished");
            ExitCode::from(outcome.exit_code())
        }
        Err(e) => {
            tracing::error!(%e, "Command failed");
            eprintln!("{}: {}", yansi::Paint::new("Error").red(), e);
            ExitCode::FAILURE
        }
    }
}
