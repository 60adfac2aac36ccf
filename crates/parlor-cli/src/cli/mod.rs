//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use parlor_core::config::Config;

mod commands;

#[derive(Parser)]
#[command(name = "parlor")]
#[command(version = "0.1")]
#[command(about = "Parlor sign-in client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Sign in without the interactive screen
    Login {
        /// E-mail address to sign in with
        #[arg(long)]
        email: String,

        /// Read the password from stdin (trailing newline stripped)
        #[arg(long = "password-stdin")]
        password_stdin: bool,
    },

    /// Clear the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Set the API base URL in the config file
    SetUrl {
        /// Base URL of the Parlor API
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = crate::logging::init();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;

    // default to the interactive sign-in screen
    let Some(command) = cli.command else {
        return run_tui(config);
    };

    match command {
        Commands::Login {
            email,
            password_stdin,
        } => commands::auth::login(&config, &email, password_stdin).await,
        Commands::Logout => commands::auth::logout(),
        Commands::Whoami => commands::auth::whoami(),

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::SetUrl { url } => commands::config::set_url(&url),
        },
    }
}

fn run_tui(config: Config) -> Result<()> {
    use std::io::IsTerminal;

    if !std::io::stdout().is_terminal() {
        anyhow::bail!(
            "The interactive screen needs a terminal; use `parlor login --email <EMAIL> --password-stdin` instead"
        );
    }

    parlor_tui::run(config)
}
