//! Submissions view (responses collected for a form)

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the submissions for the form in view
pub fn draw_submissions(frame: &mut Frame, area: Rect, app: &App) {
    let form = app
        .state
        .view_params
        .form_id
        .as_ref()
        .and_then(|id| app.store.form(id));

    let Some(form) = form else {
        let message = Paragraph::new("Form not found")
            .style(Style::default().fg(Color::Red))
            .block(
                Block::default()
                    .title(" Submissions ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(message, area);
        return;
    };

    let responses = app.store.responses_for(&form.id);
    let form_title = if form.title.is_empty() {
        "(untitled form)".to_string()
    } else {
        form.title.clone()
    };
    let title = format!(" Submissions - {} ({}) ", form_title, responses.len());

    if responses.is_empty() {
        let content = Paragraph::new("No submissions yet.\nShare the form link to start collecting responses.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(content, area);
        return;
    }

    let mut content: Vec<Line> = Vec::new();
    for (idx, response) in responses.iter().enumerate() {
        content.push(Line::from(vec![
            Span::styled(
                format!("Response {}", idx + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                response.submitted_at.format("%Y-%m-%d %H:%M").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        if response.answers.is_empty() {
            content.push(Line::from(Span::styled(
                "  (no answers)",
                Style::default().fg(Color::DarkGray),
            )));
        }

        // Join answers back to question titles; questions may have been
        // deleted since the response was recorded
        for answer in &response.answers {
            let question_title = form
                .question(&answer.question_id)
                .map(|q| q.display_title().to_string())
                .unwrap_or_else(|| "(deleted question)".to_string());
            let value = answer.value.display();
            let value_span = if value.is_empty() {
                Span::styled("(blank)", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(value)
            };
            content.push(Line::from(vec![
                Span::styled(
                    format!("  {}: ", question_title),
                    Style::default().fg(Color::Gray),
                ),
                value_span,
            ]));
        }

        content.push(Line::from(""));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset as u16, 0));

    frame.render_widget(paragraph, area);
}
