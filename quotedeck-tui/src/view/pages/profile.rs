//! Profile page view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::state::{ProfileForm, SelectField};
use crate::model::App;

/// Render the profile page
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(ref form) = app.profile.form else {
        let content = vec![
            Line::from(""),
            Line::styled("  No profile loaded", Style::default().fg(Color::Gray)),
        ];
        frame.render_widget(Paragraph::new(content), area);
        return;
    };

    let mut lines = Vec::new();
    lines.push(Line::from(""));
    lines.extend(text_field(form, 0, "First Name", &form.first_name));
    lines.extend(text_field(form, 1, "Last Name", &form.last_name));
    lines.extend(text_field(form, 2, "Telephone", &form.telephone));
    lines.extend(select_field(form, 3, "Gender", &form.gender));
    lines.extend(select_field(form, 4, "Country", &form.country));

    lines.push(Line::from(""));
    if form.unlocked {
        lines.push(Line::from(vec![Span::styled(
            "  [Enter] Save",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )]));
    } else {
        lines.push(Line::from(vec![Span::styled(
            "  [Alt+e] Edit",
            Style::default().fg(Color::Cyan),
        )]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn text_field<'a>(
    form: &ProfileForm,
    index: usize,
    label: &'a str,
    value: &'a str,
) -> Vec<Line<'a>> {
    let focused = form.unlocked && form.focus == index;

    let label_line = Line::from(vec![
        Span::styled(format!("  {label}"), Style::default().fg(Color::Gray)),
        if form.unlocked {
            Span::raw("")
        } else {
            Span::styled(" (locked)", Style::default().fg(Color::DarkGray))
        },
    ]);

    let display = if focused {
        format!("    {value}▎")
    } else {
        format!("    {value}")
    };
    let style = if !form.unlocked {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    vec![label_line, Line::styled(display, style), Line::from("")]
}

fn select_field<'a>(
    form: &ProfileForm,
    index: usize,
    label: &'a str,
    field: &'a SelectField,
) -> Vec<Line<'a>> {
    let focused = form.unlocked && form.focus == index;

    let label_line = Line::from(vec![
        Span::styled(format!("  {label}"), Style::default().fg(Color::Gray)),
        if focused {
            Span::styled(" (←→ to Switch)", Style::default().fg(Color::DarkGray))
        } else if !form.unlocked {
            Span::styled(" (locked)", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw("")
        },
    ]);

    let name = field
        .selected_option()
        .map_or("-", |option| option.label.as_str());
    let display = format!(
        "    {} {} {}",
        if focused { "◀" } else { " " },
        name,
        if focused { "▶" } else { " " }
    );
    let style = if !form.unlocked {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    vec![label_line, Line::styled(display, style), Line::from("")]
}
