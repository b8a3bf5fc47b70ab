//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, ConnectionFlags, OutputFlags};
use crate::commands;

/// Command-line client for MicroVM orchestration services
#[derive(Parser)]
#[command(
    name = "mvmctl",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Service address (host:port or URL)
    #[arg(short, long, global = true, env = "MVMCTL_ADDRESS")]
    pub address: Option<String>,

    /// Basic auth token
    #[arg(short, long, global = true, env = "MVMCTL_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new MicroVM
    #[command(visible_alias = "c")]
    Create(commands::create::CreateArgs),

    /// Get an existing MicroVM
    #[command(visible_alias = "g")]
    Get(commands::get::GetArgs),

    /// List MicroVMs
    #[command(visible_alias = "l")]
    List(commands::list::ListArgs),

    /// Delete MicroVMs
    #[command(visible_alias = "d")]
    Delete(commands::delete::DeleteArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),
}

impl Cli {
    /// Returns `true` when `--json` was passed.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            address,
            token,
            json,
            quiet,
            no_color,
            verbose,
            command,
        } = self;
        crate::logging::init(verbose);

        let app = AppContext::new(AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            connection: ConnectionFlags { address, token },
        })?;

        match command {
            Command::Config(cmd) => commands::config::run(&app, cmd),
            Command::Create(args) => commands::create::run(&app, &args, &app.store()?).await,
            Command::Get(args) => commands::get::run(&app, &args, &app.store()?).await,
            Command::List(args) => commands::list::run(&app, &args, &app.store()?).await,
            Command::Delete(args) => commands::delete::run(&app, &args, &app.store()?).await,
        }
    }
}
