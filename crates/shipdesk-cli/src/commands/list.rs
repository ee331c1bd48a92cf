//! `shipdesk list` — Print one page of the shipment list.

use clap::Args;
use shipdesk_common::types::{ListColumn, SortOrder};
use shipdesk_core::table::TableQuery;

use super::Context;
use crate::output;

/// Arguments for the `list` command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show shipments whose id contains this text (case-insensitive).
    #[arg(short, long)]
    pub search: Option<String>,

    /// Column to sort by.
    #[arg(long, default_value = "id")]
    pub sort: ListColumn,

    /// Sort direction.
    #[arg(long, default_value = "asc")]
    pub order: SortOrder,

    /// Page to show, starting at 1.
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Print the page rows as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `list` command.
///
/// # Errors
///
/// Returns an error if the shipments cannot be loaded.
pub fn execute(args: &ListArgs, ctx: &Context) -> anyhow::Result<()> {
    print!("{}", render(args, ctx)?);
    Ok(())
}

/// Renders the requested page as text or JSON.
///
/// # Errors
///
/// Returns an error if the shipments cannot be loaded or serialized.
pub fn render(args: &ListArgs, ctx: &Context) -> anyhow::Result<String> {
    let store = ctx.load_store()?;

    let mut query = TableQuery::new(ctx.config.rows_per_page);
    if let Some(keyword) = &args.search {
        query.set_keyword(keyword.clone());
    }
    query.set_sort(args.sort, args.order);
    query.set_page(args.page.saturating_sub(1) as usize);

    let page = query.apply(store.list_items());
    tracing::info!(
        shown = page.rows.len(),
        matching = page.filtered_count,
        "listing shipments"
    );

    if args.json {
        let mut json = serde_json::to_string_pretty(&page.rows)?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(output::format_list(&page, &query))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::commands::tests::file_context;
    use crate::commands::{Cli, Command};

    fn parse(args: &[&str]) -> ListArgs {
        let cli = Cli::try_parse_from(std::iter::once("shipdesk").chain(args.iter().copied()))
            .expect("parse");
        match cli.command {
            Some(Command::List(args)) => args,
            other => panic!("expected list command, got {other:?}"),
        }
    }

    #[test]
    fn list_defaults_to_first_page_by_id() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let ctx = file_context(dir.path(), false);
        let text = render(&parse(&["list"]), &ctx).expect("render");
        let ids: Vec<_> = text
            .lines()
            .skip(1)
            .take(3)
            .map(|l| l.split_whitespace().next().unwrap_or_default())
            .collect();
        assert_eq!(ids, ["S1000", "S1001", "S1002"]);
        assert!(text.ends_with("1-3 of 3  (page 1/1)\n"));
    }

    #[test]
    fn list_search_and_descending_sort() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let ctx = file_context(dir.path(), false);
        let text = render(
            &parse(&["list", "--search", "s100", "--sort", "name", "--order", "desc"]),
            &ctx,
        )
        .expect("render");
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].contains("NAME ▼"));
        assert!(lines[1].starts_with("S1000"));
        assert!(lines[2].starts_with("S1002"));
        assert!(lines[3].starts_with("S1001"));
    }

    #[test]
    fn list_json_outputs_rows() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let ctx = file_context(dir.path(), false);
        let text = render(&parse(&["list", "--json", "--search", "1002"]), &ctx).expect("render");
        let rows: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(rows.as_array().map(Vec::len), Some(1));
        assert_eq!(rows[0]["id"], "S1002");
        assert_eq!(rows[0]["destination"], "Paris");
    }

    #[test]
    fn list_page_past_end_is_empty() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let ctx = file_context(dir.path(), false);
        let text = render(&parse(&["list", "--page", "2"]), &ctx).expect("render");
        assert_eq!(text.lines().count(), 2);
        assert_eq!(text.lines().last(), Some("0-0 of 3  (page 2/1)"));
    }

    #[test]
    fn list_rejects_page_zero() {
        assert!(Cli::try_parse_from(["shipdesk", "list", "--page", "0"]).is_err());
    }
}
