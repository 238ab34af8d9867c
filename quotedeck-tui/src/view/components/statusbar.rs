//! Bottom status bar component

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::state::Modal;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// Render the status bar
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // Status message on the right
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// Shortcut hints for the current state
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if let Some(ref modal) = app.modal.active {
        match modal {
            Modal::CreateQuote { .. } => {
                hints.push(("Tab", "Next Field"));
                hints.push(("Enter", "Save"));
                hints.push(("Esc", "Close"));
            }
            Modal::ViewQuote { form, .. } => {
                if form.edit_enabled {
                    hints.push(("Alt+e", "Edit"));
                }
                if form.submit_enabled {
                    hints.push(("Tab", "Next Field"));
                    hints.push(("Enter", "Save"));
                }
                hints.push(("Esc", "Close"));
            }
            Modal::Help => {
                hints.push(("Esc", "Close"));
            }
        }
        return hints;
    }

    hints.push(("Tab", "Switch Panels"));

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", "Navigate"));
            hints.push(("Enter", "Open"));
        }
        FocusPanel::Content => match app.current_page {
            Page::Quotes => {
                hints.push(("↑↓", "Select"));
                hints.push(("Enter", "View"));
                hints.push(("Alt+a", "Add"));
                hints.push(("Alt+r", "Refresh"));
            }
            Page::Profile => {
                let editing = app
                    .profile
                    .form
                    .as_ref()
                    .is_some_and(|form| form.unlocked);
                if editing {
                    hints.push(("Tab", "Next Field"));
                    hints.push(("Enter", "Save"));
                } else {
                    hints.push(("Alt+e", "Edit"));
                }
            }
        },
    }

    if app.flash.visible {
        hints.push(("Alt+f", "Dismiss"));
    }

    hints.push(("Alt+q", "Quit"));

    hints
}
