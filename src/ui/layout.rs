//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::{ADD_OPTION_SHORTCUT, SAVE_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main content layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    // Build status bar content
    let mut spans = vec![];

    // View-specific hints
    let hints = get_view_hints(&app.state.current_view);
    spans.push(Span::styled(
        format!(" {hints}"),
        Style::default().fg(Color::DarkGray),
    ));

    // Transient status message (saved, copied, ...)
    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    // Currently open form
    if let Some(form) = app.store.current_form() {
        if !form.title.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("📋 {}", form.title),
                Style::default().fg(Color::Blue),
            ));
        }
    }

    // Quit hint on the right
    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));

    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::FormList => {
            "j/k:nav  Enter:edit  n:new  p:preview  f:fill  u:responses  d:delete  s/S:sort"
                .to_string()
        }
        View::FormCreate => "Tab:next  Enter:create  Esc:cancel".to_string(),
        View::FormEdit => format!("Tab:next  {}:save  Esc:cancel", SAVE_SHORTCUT),
        View::FormEditor => {
            "j/k:nav  a:add  Enter:edit  t:type  r:required  J/K:move  d:delete  p:publish  y:link  v:preview  Esc:close"
                .to_string()
        }
        View::QuestionEdit => format!(
            "Tab:next  {}:add option  {}:save  Esc:cancel",
            ADD_OPTION_SHORTCUT, SAVE_SHORTCUT
        ),
        View::Preview => "j/k:scroll  f:fill  Esc:back".to_string(),
        View::Submit => "Enter/→:next  ←:prev  Esc:back".to_string(),
        View::Submissions => "j/k:scroll  Esc:back".to_string(),
    }
}
