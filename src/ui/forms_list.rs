//! Forms list view (published and draft sections)

use super::render_scrollable_list;
use crate::app::App;
use crate::store::model::Form;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the forms list
pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let published = app.state.sort_forms(app.store.published_forms());
    let drafts = app.state.sort_forms(app.store.draft_forms());

    if published.is_empty() && drafts.is_empty() {
        let content = Paragraph::new("No forms yet.\nPress 'n' to create your first form.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .title(" Forms ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(content, area);
        return;
    }

    // Split area for header and list
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    // Draw header with sort info
    let sort_label = format!(
        "Sort: {} {}",
        app.state.form_sort_field.label(),
        app.state.form_sort_direction.symbol()
    );
    let header = Paragraph::new(Line::from(vec![
        Span::styled(sort_label, Style::default().fg(Color::Cyan)),
        Span::styled(" [s]cycle [S]dir", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(header, chunks[0]);

    // Build rows: a section header, then one row per form
    let mut items: Vec<ListItem> = Vec::new();
    items.push(section_header("Published", published.len(), Color::Green));
    for (idx, form) in published.iter().enumerate() {
        items.push(form_row(form, idx == app.state.selected_index));
    }
    items.push(section_header("Drafts", drafts.len(), Color::Yellow));
    for (idx, form) in drafts.iter().enumerate() {
        let overall = published.len() + idx;
        items.push(form_row(form, overall == app.state.selected_index));
    }

    let list = List::new(items).block(
        Block::default()
            .title(" Forms ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    // Map the selected form to its row, accounting for the two header rows
    let selected_row = if app.state.selected_index < published.len() {
        1 + app.state.selected_index
    } else {
        2 + app.state.selected_index
    };
    render_scrollable_list(frame, chunks[1], list, selected_row);
}

fn section_header(label: &str, count: usize, color: Color) -> ListItem<'static> {
    ListItem::new(Line::from(Span::styled(
        format!("{} ({})", label, count),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
}

fn form_row(form: &Form, is_selected: bool) -> ListItem<'static> {
    let prefix = if is_selected { "▸ " } else { "  " };

    let style = if is_selected {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    let title_span = if form.title.is_empty() {
        Span::styled("(untitled form)", style.fg(Color::DarkGray))
    } else {
        Span::styled(form.title.clone(), style.add_modifier(Modifier::BOLD))
    };

    let question_count = match form.questions.len() {
        1 => "1 question".to_string(),
        n => format!("{} questions", n),
    };

    let mut spans = vec![
        Span::styled(prefix, style),
        title_span,
        Span::raw(" "),
        Span::styled(
            format!("[{}]", question_count),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if !form.description.is_empty() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            truncate_string(&form.description, 40),
            Style::default().fg(Color::DarkGray),
        ));
    }

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        form.updated_at.format("%Y-%m-%d").to_string(),
        Style::default().fg(Color::Cyan),
    ));

    ListItem::new(Line::from(spans))
}

/// Truncate a string, adding "..." when it exceeds the limit
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
