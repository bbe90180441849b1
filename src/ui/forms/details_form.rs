//! Form details rendering (create and edit)

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{Form, FormState};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the form create page
pub fn draw_create(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::FormCreate(form) = &app.state.form_state else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title
            Constraint::Min(6),                // Description
            Constraint::Length(BUTTON_HEIGHT), // Buttons row
            Constraint::Length(2),             // Help text
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Create Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    draw_field(frame, chunks[0], &form.title, form.active_field() == 0);
    draw_field(frame, chunks[1], &form.description, form.active_field() == 1);

    // Buttons row: Cancel / Create, right-aligned
    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Flex
            Constraint::Length(12), // Cancel
            Constraint::Length(2),  // Gap
            Constraint::Length(12), // Create
        ])
        .split(chunks[2]);

    let on_buttons = form.is_buttons_row_active();
    render_button(
        frame,
        button_chunks[1],
        "Cancel",
        on_buttons && form.selected_button == 0,
        true,
    );
    render_button(
        frame,
        button_chunks[3],
        "Create",
        on_buttons && form.selected_button == 1,
        true,
    );

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": create  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": cancel"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}

/// Draw the form edit page (title and description of an existing form)
pub fn draw_edit(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::FormEdit(form) = &app.state.form_state else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Description
            Constraint::Length(2), // Help text
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Edit Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    draw_field(frame, chunks[0], &form.title, form.active_field() == 0);
    draw_field(frame, chunks[1], &form.description, form.active_field() == 1);

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled(
            crate::platform::SAVE_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": save  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": cancel"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);
}
