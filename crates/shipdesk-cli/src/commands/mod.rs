//! CLI command definitions and dispatch.

pub mod list;
pub mod rename;
pub mod show;
pub mod tui;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use shipdesk_common::config::ShipdeskConfig;
use shipdesk_core::client::HttpSource;
use shipdesk_core::source::{FileSource, ShipmentSource};
use shipdesk_core::store::ShipmentStore;

/// shipdesk — browse, search, and rename shipments.
#[derive(Parser, Debug)]
#[command(name = "shipdesk", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute; launches the console when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the shipments backend.
    #[arg(long, global = true, env = "SHIPDESK_API_URL")]
    pub api_url: Option<String>,

    /// Read shipments from a local JSON file instead of the backend.
    #[arg(long, global = true, env = "SHIPDESK_DATA_FILE")]
    pub file: Option<PathBuf>,

    /// Path to a JSON configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Rows per page of the shipment list.
    #[arg(long, global = true)]
    pub rows_per_page: Option<usize>,

    /// Push name edits to the backend or file.
    #[arg(long, global = true)]
    pub persist: bool,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Returns whether this invocation takes over the terminal.
    pub fn launches_console(&self) -> bool {
        matches!(self.command, None | Some(Command::Tui(_)))
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per line.
    Json,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one page of the shipment list.
    List(list::ListArgs),
    /// Print the details of one shipment.
    Show(show::ShowArgs),
    /// Change the name of one shipment.
    Rename(rename::RenameArgs),
    /// Launch the interactive console.
    Tui(tui::TuiArgs),
}

/// Resolved configuration and the source it points at.
pub struct Context {
    /// Effective configuration after all overrides.
    pub config: ShipdeskConfig,
    /// Where shipments are read from and edits are written to.
    pub source: Box<dyn ShipmentSource>,
}

impl Context {
    /// Builds the context for a parsed command line.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid,
    /// or if the HTTP client cannot be created.
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let base = ShipdeskConfig::load(cli.config.as_deref())
            .context("failed to load configuration")?;
        let config = resolve_config(cli, base)?;
        let source = open_source(&config)?;
        tracing::debug!(source = %source.describe(), "resolved shipment source");
        Ok(Self { config, source })
    }

    /// Fetches all shipments into a fresh store.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read.
    pub fn load_store(&self) -> anyhow::Result<ShipmentStore> {
        let shipments = self
            .source
            .fetch_shipments()
            .with_context(|| format!("failed to load shipments from {}", self.source.describe()))?;
        Ok(ShipmentStore::new(shipments))
    }
}

/// Applies command-line overrides on top of a loaded configuration.
///
/// # Errors
///
/// Returns an error if the resulting configuration is invalid.
pub fn resolve_config(cli: &Cli, mut config: ShipdeskConfig) -> anyhow::Result<ShipdeskConfig> {
    if let Some(url) = &cli.api_url {
        config.api_url.clone_from(url);
    }
    if let Some(file) = &cli.file {
        config.data_file = Some(file.clone());
    }
    if let Some(rows) = cli.rows_per_page {
        config.rows_per_page = rows;
    }
    if cli.persist {
        config.persist_edits = true;
    }
    config.validate()?;
    Ok(config)
}

/// Opens the source named by the configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub fn open_source(config: &ShipdeskConfig) -> anyhow::Result<Box<dyn ShipmentSource>> {
    if let Some(path) = &config.data_file {
        return Ok(Box::new(FileSource::new(path)));
    }
    let source = HttpSource::with_timeout(
        config.api_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;
    Ok(Box::new(source))
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let ctx = Context::from_cli(&cli)?;
    match cli.command {
        Some(Command::List(args)) => list::execute(&args, &ctx),
        Some(Command::Show(args)) => show::execute(&args, &ctx),
        Some(Command::Rename(args)) => rename::execute(&args, &ctx),
        Some(Command::Tui(args)) => tui::execute(&args, &ctx),
        None => tui::execute(&tui::TuiArgs::default(), &ctx),
    }
}
