//! Flash banner component

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::state::FlashCategory;
use crate::model::App;
use crate::view::theme::colors;

/// Render the flash banner
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let bg = match app.flash.category {
        Some(FlashCategory::Error) => c.error,
        _ => c.success,
    };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::raw(app.flash.message.as_str()),
        Span::raw("  "),
        Span::styled("[Alt+f] Dismiss", Style::default().fg(Color::Rgb(30, 30, 30))),
    ]);

    let banner = Paragraph::new(line).style(Style::default().bg(bg).fg(Color::Black));
    frame.render_widget(banner, area);
}
