//! Shipment list view.
//!
//! Title, search line, the current page of the sortable table padded to a
//! stable height, and a footer with the pagination range.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table, TableState};
use shipdesk_common::types::{ListColumn, SortOrder};

use crate::app::{App, InputMode};

const COLUMN_WIDTHS: [Constraint; 6] = [
    Constraint::Length(10),
    Constraint::Fill(3),
    Constraint::Length(8),
    Constraint::Fill(3),
    Constraint::Fill(3),
    Constraint::Length(12),
];

/// Renders the list view.
pub fn render_list(frame: &mut Frame, app: &App) {
    let [title_area, search_area, table_area, range_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(Line::from("Shipments List").bold(), title_area);

    let searching = app.input_mode == InputMode::Search;
    let search_style = if searching {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let search_text = if searching {
        format!("{}▏", app.query.keyword())
    } else {
        app.query.keyword().to_string()
    };
    frame.render_widget(
        Paragraph::new(search_text).block(
            Block::bordered()
                .title("Search by id...")
                .border_style(search_style),
        ),
        search_area,
    );

    let page = app.page();
    let header = Row::new(ListColumn::ALL.map(|column| header_cell(app, column)))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let mut rows: Vec<Row<'_>> = page
        .rows
        .iter()
        .map(|item| Row::new(ListColumn::ALL.map(|column| column.value(item).to_string())))
        .collect();
    rows.extend((0..page.empty_rows).map(|_| Row::new([""; 6])));

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("› ");

    let mut state = TableState::default();
    if !page.rows.is_empty() {
        state.select(Some(app.selected_index));
    }
    frame.render_stateful_widget(table, table_area, &mut state);

    let range = format!(
        "{}   page {}/{}",
        page.range_label(),
        page.page + 1,
        app.query.page_count(page.filtered_count)
    );
    frame.render_widget(Line::from(range).right_aligned(), range_area);

    let hints: &[(&str, &str)] = if searching {
        &[("enter/esc", "done"), ("backspace", "delete")]
    } else {
        &[
            ("↑↓", "move"),
            ("←→", "page"),
            ("/", "search"),
            ("1-6", "sort"),
            ("enter", "show details"),
            ("r", "reload"),
            ("q", "quit"),
        ]
    };
    super::render_footer(frame, footer_area, app, hints);
}

fn header_cell(app: &App, column: ListColumn) -> Cell<'static> {
    if app.query.order_by() == column {
        let arrow = match app.query.order() {
            SortOrder::Asc => "▲",
            SortOrder::Desc => "▼",
        };
        Cell::from(format!("{} {arrow}", column.label())).fg(Color::Cyan)
    } else {
        Cell::from(column.label())
    }
}
