//! Modal component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use quotedeck_core::Category;

use crate::model::state::{Modal, QuoteForm};
use crate::model::App;

/// Render the active modal, if any
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::CreateQuote { .. } => render_create_quote(app, frame, modal),
        Modal::ViewQuote { .. } => render_view_quote(app, frame, modal),
        Modal::Help => render_help(frame),
    }
}

/// Compute a centered modal area
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Draw the modal frame and return the inner content area
fn modal_frame(frame: &mut Frame, title: &str, width: u16, height: u16) -> Rect {
    let area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2)
}

/// A text input line: cursor when focused, dimmed when locked
fn input_lines<'a>(
    label: &'a str,
    value: &'a str,
    focused: bool,
    locked: bool,
) -> Vec<Line<'a>> {
    let label_line = Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Gray)),
        if locked {
            Span::styled(" (locked)", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw("")
        },
    ]);

    let display = if focused && !locked {
        format!("  {value}▎")
    } else {
        format!("  {value}")
    };
    let style = if locked {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    vec![label_line, Line::styled(display, style), Line::from("")]
}

/// A category select line: arrows when switchable
fn category_lines<'a>(
    categories: &'a [Category],
    selected: Option<usize>,
    focused: bool,
    locked: bool,
) -> Vec<Line<'a>> {
    let label_line = Line::from(vec![
        Span::styled("Category", Style::default().fg(Color::Gray)),
        if locked {
            Span::styled(" (locked)", Style::default().fg(Color::DarkGray))
        } else if focused {
            Span::styled(" (←→ to Switch)", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw("")
        },
    ]);

    let name = selected
        .and_then(|index| categories.get(index))
        .map_or("-", |category| category.name.as_str());
    let switchable = focused && !locked;
    let display = format!(
        "  {} {} {}",
        if switchable { "◀" } else { " " },
        name,
        if switchable { "▶" } else { " " }
    );
    let style = if locked {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    vec![label_line, Line::styled(display, style), Line::from("")]
}

/// The action row: triggers render dimmed while disabled
fn trigger_line(edit_enabled: Option<bool>, submit_enabled: bool) -> Line<'static> {
    let mut spans = Vec::new();

    if let Some(edit_enabled) = edit_enabled {
        let style = if edit_enabled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled("[Alt+e] Edit", style));
        spans.push(Span::raw("   "));
    }

    let submit_style = if submit_enabled {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    spans.push(Span::styled("[Enter] Save", submit_style));

    Line::from(spans)
}

/// Render the add-quote modal
fn render_create_quote(app: &App, frame: &mut Frame, modal: &Modal) {
    let Modal::CreateQuote {
        quote,
        author,
        category_index,
        focus,
        error,
    } = modal
    else {
        return;
    };

    let inner = modal_frame(frame, "New Quote", 54, 16);

    let mut lines = Vec::new();
    lines.extend(input_lines("Quote", quote, *focus == 0, false));
    lines.extend(input_lines("Author", author, *focus == 1, false));
    lines.extend(category_lines(
        &app.categories,
        Some(*category_index),
        *focus == 2,
        false,
    ));

    if let Some(error) = error {
        lines.push(Line::styled(
            format!("  {error}"),
            Style::default().fg(Color::Red),
        ));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(""));
    lines.push(trigger_line(None, true));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the view/edit quote modal
fn render_view_quote(app: &App, frame: &mut Frame, modal: &Modal) {
    let Modal::ViewQuote { form, loading, .. } = modal else {
        return;
    };

    let inner = modal_frame(frame, "Quote", 54, 16);

    let mut lines = Vec::new();
    lines.extend(quote_form_lines(form, &app.categories));

    if *loading {
        lines.push(Line::styled(
            "  Loading...",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(""));
    lines.push(trigger_line(Some(form.edit_enabled), form.submit_enabled));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn quote_form_lines<'a>(form: &'a QuoteForm, categories: &'a [Category]) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    lines.extend(input_lines(
        "Quote",
        &form.quote,
        form.focus == 0,
        form.locks.quote,
    ));
    lines.extend(input_lines(
        "Author",
        &form.author,
        form.focus == 1,
        form.locks.author,
    ));
    lines.extend(category_lines(
        categories,
        form.category_index,
        form.focus == 2,
        form.locks.category,
    ));
    lines
}

/// Render the help modal
fn render_help(frame: &mut Frame) {
    let inner = modal_frame(frame, "Help", 48, 16);

    let hint = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Yellow)),
            Span::raw(desc),
        ])
    };

    let lines = vec![
        hint("Tab", "Switch panels / next field"),
        hint("↑↓ / jk", "Move selection"),
        hint("Enter", "Open / confirm"),
        hint("Alt+a", "Add quote"),
        hint("Alt+e", "Edit"),
        hint("Alt+r", "Refresh"),
        hint("Alt+f", "Dismiss notification"),
        hint("Esc", "Close / back"),
        hint("Alt+q", "Quit"),
        Line::from(""),
        Line::styled(
            "  Press Esc to close",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
