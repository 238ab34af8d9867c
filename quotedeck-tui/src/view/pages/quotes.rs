//! Quote listing page view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::App;

/// Render the quote listing page
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.quotes.loading {
        render_message(frame, area, "Loading quotes...", Color::Gray);
    } else if let Some(ref error) = app.quotes.error {
        render_message(frame, area, error, Color::Red);
    } else if app.quotes.quotes.is_empty() {
        render_empty(frame, area);
    } else {
        render_list(app, frame, area);
    }
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Style::default().fg(color)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// Render the empty state
fn render_empty(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled("  No quotes yet", Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::styled(
            "  Press Alt+a to add your first quote",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// Render the quote list
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .quotes
        .quotes
        .iter()
        .enumerate()
        .map(|(i, quote)| {
            let is_selected = i == app.quotes.selected;

            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let dim_style = if is_selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let line = Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("\u{201c}{}\u{201d}", quote.quote), style),
                Span::styled(
                    format!("  {} · {}", quote.author, quote.category),
                    dim_style,
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.quotes.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
