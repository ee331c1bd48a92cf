//! `shipdesk rename` — Change the name of one shipment.

use clap::Args;
use shipdesk_common::types::ShipmentId;

use super::Context;
use crate::output;

/// Arguments for the `rename` command.
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Shipment ID to rename.
    pub id: String,

    /// New name (may be empty).
    pub name: String,
}

/// Executes the `rename` command.
///
/// # Errors
///
/// Returns an error if the shipment is unknown or the edit cannot be saved.
pub fn execute(args: &RenameArgs, ctx: &Context) -> anyhow::Result<()> {
    print!("{}", render(args, ctx)?);
    Ok(())
}

/// Applies the rename and renders the updated record.
///
/// The edit is written back to the source only when persistence is on.
///
/// # Errors
///
/// Returns an error if the shipment is unknown or the edit cannot be saved.
pub fn render(args: &RenameArgs, ctx: &Context) -> anyhow::Result<String> {
    let id = ShipmentId::new(args.id.as_str());
    let mut store = ctx.load_store()?;
    let previous = store.select(&id)?.name.clone();
    let shipment = store.edit_name(args.name.as_str())?;

    let note = if ctx.config.persist_edits {
        ctx.source.update_name(&id, &shipment.name)?;
        format!("saved to {}", ctx.source.describe())
    } else {
        "not saved; pass --persist to write it back".to_string()
    };

    Ok(format!(
        "renamed {id}: {previous:?} -> {:?} ({note})\n\n{}",
        shipment.name,
        output::format_detail(shipment)
    ))
}
