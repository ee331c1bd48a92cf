//! # shipdesk-tui
//!
//! Interactive terminal console for the shipment list.
//!
//! Built with `ratatui` and `crossterm`, providing:
//! - A searchable, sortable, paginated shipment table.
//! - A detail view of one shipment with an inline name editor.
//! - Optional write-back of name edits to the shipment source.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod app;
pub mod event;
pub mod ui;

use std::time::Duration;

use ratatui::DefaultTerminal;
use shipdesk_core::source::ShipmentSource;
use shipdesk_core::store::ShipmentStore;
use thiserror::Error;

use crate::app::{Action, App};
use crate::event::{EventReader, TerminalEvent};

/// Interval between redraws when no input arrives.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Errors that abort the console.
#[derive(Debug, Error)]
pub enum TuiError {
    /// The terminal could not be set up, drawn, or read.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Console settings taken from the resolved configuration.
#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    /// Rows per page of the list view.
    pub rows_per_page: usize,
    /// Whether name edits are pushed to the source.
    pub persist_edits: bool,
    /// Keyword the list opens with.
    pub initial_search: Option<String>,
}

/// Runs the console against `source` until the user quits.
///
/// Shipments are fetched once on start and again on demand. Fetch and
/// persistence failures are shown in the status line, not returned.
///
/// # Errors
///
/// Returns an error if the terminal cannot be initialized or driven.
pub fn run<S: ShipmentSource + ?Sized>(
    source: &S,
    options: ConsoleOptions,
) -> Result<(), TuiError> {
    let mut app = App::new(
        ShipmentStore::default(),
        options.rows_per_page,
        options.persist_edits,
    );
    if let Some(keyword) = options.initial_search {
        app.query.set_keyword(keyword);
    }
    perform(&mut app, source, Action::Refresh);

    let mut terminal = ratatui::try_init()?;
    let result = event_loop(&mut terminal, &mut app, source);
    ratatui::restore();
    result
}

fn event_loop<S: ShipmentSource + ?Sized>(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    source: &S,
) -> Result<(), TuiError> {
    let events = EventReader::new(TICK_RATE);
    while app.running {
        let _ = terminal.draw(|frame| ui::render(frame, app))?;
        match events.next()? {
            TerminalEvent::Key(key) => {
                if let Some(action) = app.handle_key(key) {
                    perform(app, source, action);
                }
            }
            TerminalEvent::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
            }
            TerminalEvent::Tick => {}
        }
    }
    Ok(())
}

/// Executes an [`Action`] against the source and reports the outcome in
/// the status line.
pub fn perform<S: ShipmentSource + ?Sized>(app: &mut App, source: &S, action: Action) {
    match action {
        Action::Refresh => match source.fetch_shipments() {
            Ok(shipments) => {
                let count = shipments.len();
                app.load(shipments);
                app.set_status(format!("loaded {count} shipments from {}", source.describe()));
            }
            Err(e) => {
                tracing::warn!(source = %source.describe(), error = %e, "failed to load shipments");
                app.set_status(format!("failed to load shipments: {e}"));
            }
        },
        Action::PersistName { id, name } => match source.update_name(&id, &name) {
            Ok(()) => app.set_status(format!("renamed {id} and saved to {}", source.describe())),
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "failed to persist shipment name");
                app.set_status(format!("renamed {id} locally; saving failed: {e}"));
            }
        },
    }
}
