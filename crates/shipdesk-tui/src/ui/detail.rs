//! Shipment detail view.
//!
//! Label/value table of the selected shipment with an inline name editor,
//! followed by its cargo lines and booked services.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Row, Table};
use shipdesk_common::types::Shipment;

use crate::app::{App, InputMode};

/// Renders the detail view.
pub fn render_detail(frame: &mut Frame, app: &App) {
    let [title_area, fields_area, extras_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(11),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let Some(shipment) = app.selected_shipment() else {
        frame.render_widget(Line::from("No shipment selected").bold(), title_area);
        super::render_footer(frame, footer_area, app, &[("esc", "go to home"), ("q", "quit")]);
        return;
    };

    frame.render_widget(
        Line::from(format!("Shipment {}", shipment.id)).bold(),
        title_area,
    );

    let editing = app.input_mode == InputMode::EditName;
    let rows = shipment.detail_fields().map(|(label, value)| {
        let label_cell = Span::from(label).bold();
        if label == "name" && editing {
            Row::new([label_cell, Span::from(format!("{}▏", app.draft_name)).fg(Color::Cyan)])
        } else {
            Row::new([label_cell, Span::from(value.to_string())])
        }
    });
    let fields = Table::new(rows, [Constraint::Length(12), Constraint::Fill(1)])
        .block(Block::bordered());
    frame.render_widget(fields, fields_area);

    let [cargo_area, services_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(extras_area);
    frame.render_widget(cargo_table(shipment), cargo_area);
    frame.render_widget(services_table(shipment), services_area);

    let hints: &[(&str, &str)] = if editing {
        &[("enter", "save"), ("esc", "cancel")]
    } else {
        &[("e", "edit name"), ("esc", "go to home"), ("q", "quit")]
    };
    super::render_footer(frame, footer_area, app, hints);
}

fn cargo_table(shipment: &Shipment) -> Table<'_> {
    let rows = shipment.cargo.iter().map(|item| {
        Row::new([
            item.kind.as_str(),
            item.description.as_str(),
            item.volume.as_str(),
        ])
    });
    Table::new(
        rows,
        [Constraint::Length(12), Constraint::Fill(1), Constraint::Length(8)],
    )
    .header(Row::new(["type", "description", "volume"]).bold())
    .block(Block::bordered().title("cargo"))
}

fn services_table(shipment: &Shipment) -> Table<'_> {
    let rows = shipment
        .services
        .iter()
        .map(|service| Row::new([service.kind.as_str(), service.value.as_deref().unwrap_or("-")]));
    Table::new(rows, [Constraint::Fill(1), Constraint::Fill(1)])
        .header(Row::new(["type", "value"]).bold())
        .block(Block::bordered().title("services"))
}

