//! `shipdesk show` — Print the details of one shipment.

use clap::Args;
use shipdesk_common::types::ShipmentId;

use super::Context;
use crate::output;

/// Arguments for the `show` command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Shipment ID to show.
    pub id: String,

    /// Print the full record as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `show` command.
///
/// # Errors
///
/// Returns an error if the shipments cannot be loaded or the ID is unknown.
pub fn execute(args: &ShowArgs, ctx: &Context) -> anyhow::Result<()> {
    print!("{}", render(args, ctx)?);
    Ok(())
}

/// Renders the selected shipment as text or JSON.
///
/// # Errors
///
/// Returns an error if the shipments cannot be loaded or the ID is unknown.
pub fn render(args: &ShowArgs, ctx: &Context) -> anyhow::Result<String> {
    let mut store = ctx.load_store()?;
    let shipment = store.select(&ShipmentId::new(args.id.as_str()))?;

    if args.json {
        let mut json = serde_json::to_string_pretty(shipment)?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(output::format_detail(shipment))
    }
}
