//! `shipdesk tui` — Launch the interactive console.

use clap::Args;
use shipdesk_tui::ConsoleOptions;

use super::Context;

/// Arguments for the `tui` command.
#[derive(Args, Debug, Default)]
pub struct TuiArgs {
    /// Open the list filtered by this id fragment.
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Executes the `tui` command.
///
/// # Errors
///
/// Returns an error if the terminal cannot be initialized or driven.
pub fn execute(args: &TuiArgs, ctx: &Context) -> anyhow::Result<()> {
    tracing::info!(source = %ctx.source.describe(), "launching console");
    let options = ConsoleOptions {
        rows_per_page: ctx.config.rows_per_page,
        persist_edits: ctx.config.persist_edits,
        initial_search: args.search.clone(),
    };
    shipdesk_tui::run(ctx.source.as_ref(), options)?;
    Ok(())
}
