//! Rendering of the console views.

pub mod detail;
pub mod list;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, View};

/// Renders the active view into the frame.
pub fn render(frame: &mut Frame, app: &App) {
    match app.current_view {
        View::List => list::render_list(frame, app),
        View::Detail => detail::render_detail(frame, app),
    }
}

/// Renders a footer line: the status message if any, then key hints.
pub(crate) fn render_footer(frame: &mut Frame, area: Rect, app: &App, hints: &[(&str, &str)]) {
    let mut spans: Vec<Span<'_>> = Vec::new();
    if let Some(status) = &app.status {
        spans.push(Span::styled(status.clone(), Style::default().fg(Color::Yellow)));
        spans.push(Span::raw("  "));
    }
    for (key, label) in hints {
        spans.push(Span::raw(*key).bold());
        spans.push(Span::raw(format!(" {label}  ")).dark_gray());
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
