//! Read-only form preview

use crate::app::App;
use crate::store::model::QuestionInput;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the form preview (what a respondent would see, without input)
pub fn draw_preview(frame: &mut Frame, area: Rect, app: &App) {
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
                    .title(" Preview ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(message, area);
        return;
    };

    let title_text = if form.title.is_empty() {
        "(untitled form)".to_string()
    } else {
        form.title.clone()
    };

    let mut content = vec![Line::from(Span::styled(
        title_text.clone(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];

    if !form.description.is_empty() {
        content.push(Line::from(Span::styled(
            form.description.clone(),
            Style::default().fg(Color::Gray),
        )));
    }

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "─".repeat(40),
        Style::default().fg(Color::DarkGray),
    )));
    content.push(Line::from(""));

    if form.questions.is_empty() {
        content.push(Line::from(Span::styled(
            "This form has no questions yet.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for question in &form.questions {
        let mut title_spans = vec![Span::styled(
            format!("{}. {}", question.order + 1, question.display_title()),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if question.required {
            title_spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
        }
        content.push(Line::from(title_spans));

        match &question.input {
            QuestionInput::ShortAnswer { max_length } => {
                let hint = match max_length {
                    Some(n) => format!("(short answer, max {} chars)", n),
                    None => "(short answer)".to_string(),
                };
                content.push(placeholder_line(hint));
            }
            QuestionInput::LongAnswer { max_length } => {
                let hint = match max_length {
                    Some(n) => format!("(long answer, max {} chars)", n),
                    None => "(long answer)".to_string(),
                };
                content.push(placeholder_line(hint));
            }
            QuestionInput::SingleSelect { options } => {
                if options.is_empty() {
                    content.push(placeholder_line("(no options yet)".to_string()));
                }
                for option in options {
                    content.push(Line::from(vec![
                        Span::styled("  ( ) ", Style::default().fg(Color::Cyan)),
                        Span::raw(option.clone()),
                    ]));
                }
            }
            QuestionInput::Number { min, max } => {
                content.push(placeholder_line(format!("(number between {} and {})", min, max)));
            }
            QuestionInput::Url { pattern } => {
                let hint = if pattern.is_empty() {
                    "(link)".to_string()
                } else {
                    format!("(link matching {})", pattern)
                };
                content.push(placeholder_line(hint));
            }
        }
        content.push(Line::from(""));
    }

    content.push(Line::from(Span::styled(
        "Press 'f' to fill out this form.",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" Preview - {} ", title_text))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset as u16, 0));

    frame.render_widget(paragraph, area);
}

fn placeholder_line(hint: String) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", hint),
        Style::default().fg(Color::DarkGray),
    ))
}
