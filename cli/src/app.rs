//! Application context — unified state passed to every command handler.

use anyhow::Result;

use crate::domain::ClientSettings;
use crate::infra::config::YamlConfigStore;
use crate::infra::http_store::HttpStore;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer, TerminalReporter};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Service connection flags, already merged with their environment variables.
#[derive(Default)]
pub struct ConnectionFlags {
    pub address: Option<String>,
    pub token: Option<String>,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Service connection options.
    pub connection: ConnectionFlags,
}

/// Unified application context passed to every command handler.
///
/// Constructed once in `Cli::run()` and passed as `&AppContext` to all
/// command handlers.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    ///
    /// Progress lines are suppressed in JSON mode so stdout carries only the
    /// JSON document.
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Config file location and access.
    pub config_store: YamlConfigStore,
    /// Connection settings merged from flags, environment and config file.
    pub settings: ClientSettings,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read.
    pub fn new(flags: AppFlags) -> Result<Self> {
        let file = YamlConfigStore.load()?;
        let settings =
            ClientSettings::resolve(flags.connection.address, flags.connection.token, file);
        tracing::debug!(address = %settings.address, token = settings.token.is_some(), "client settings");
        Ok(Self::with_settings(&flags.output, settings))
    }

    /// Construct an `AppContext` without reading the config file.
    #[must_use]
    pub fn with_settings(output: &OutputFlags, settings: ClientSettings) -> Self {
        let mode = if output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Self {
            output: OutputContext::new(output.no_color, output.quiet || output.json),
            mode,
            config_store: YamlConfigStore,
            settings,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// Build the client for the real service. Does not connect.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn store(&self) -> Result<HttpStore> {
        HttpStore::new(&self.settings)
    }
}
