//! `mvmctl config` — show and set configuration values.

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Set configuration value (address, token, timeout_secs)
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written, or the key
/// or value is invalid.
pub fn run(app: &AppContext, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => show_config(app),
        ConfigCommand::Set { key, value } => set_config(app, &key, &value),
    }
}

fn show_config(app: &AppContext) -> Result<()> {
    let config = app.config_store.load()?;
    let path = app.config_store.path()?;
    app.renderer().render_config(&config, &path)
}

fn set_config(app: &AppContext, key: &str, value: &str) -> Result<()> {
    let mut config = app.config_store.load()?;
    config.set(key, value)?;
    app.config_store.save(&config)?;

    if app.is_json() {
        return app
            .renderer()
            .render_config(&config, &app.config_store.path()?);
    }
    let shown = if key == "token" { "(hidden)" } else { value };
    app.output.success(&format!("Set {key} = {shown}"));
    Ok(())
}
