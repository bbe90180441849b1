//! Question edit form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{Form, FormState};
use crate::store::model::QuestionKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the question edit page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::QuestionEdit(form) = &app.state.form_state else {
        return;
    };

    // Two fixed fields, then one row per kind-specific field
    let mut constraints = vec![
        Constraint::Length(3), // Question title
        Constraint::Length(3), // Required toggle
    ];
    for _ in &form.variant_fields {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(2)); // Help text
    constraints.push(Constraint::Min(0)); // Remaining space

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(format!(" Edit Question ({}) ", form.kind.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    draw_field(frame, chunks[0], &form.title, form.active_field() == 0);
    draw_field(frame, chunks[1], &form.required, form.active_field() == 1);
    for (i, field) in form.variant_fields.iter().enumerate() {
        draw_field(frame, chunks[i + 2], field, form.active_field() == i + 2);
    }

    // Build help text; single select gets the add-option hint
    let mut help_spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
    ];
    if form.kind == QuestionKind::SingleSelect {
        help_spans.push(Span::styled(
            crate::platform::ADD_OPTION_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ));
        help_spans.push(Span::raw(": add option  "));
    }
    help_spans.extend([
        Span::styled(
            crate::platform::SAVE_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": save  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": cancel"),
    ]);

    let help = Paragraph::new(Line::from(help_spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[form.variant_fields.len() + 2]);
}
