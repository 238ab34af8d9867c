//! Main layout rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::colors;

/// Render the main layout
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // Title bar, optional flash banner, main content, status bar
    let flash_height = u16::from(app.flash.visible);
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(flash_height),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    let title_area = main_layout[0];
    let flash_area = main_layout[1];
    let content_area = main_layout[2];
    let status_area = main_layout[3];

    render_title_bar(frame, title_area);

    if app.flash.visible {
        components::flash::render(app, frame, flash_area);
    }

    // Navigation on the left, page content on the right
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20), Constraint::Percentage(80)])
        .split(content_area);

    components::navigation::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);

    components::statusbar::render(app, frame, status_area);

    // Modal on top of everything
    components::modal::render(app, frame);
}

/// Render the title bar
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(" QuoteDeck v0.1.0")
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// Render the current page's content
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let is_focused = app.focus.is_content();
    let border_style = if is_focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(format!(" {} ", app.current_page.title()))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.current_page {
        Page::Quotes => pages::quotes::render(app, frame, inner_area),
        Page::Profile => pages::profile::render(app, frame, inner_area),
    }
}
