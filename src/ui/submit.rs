//! Step-through form submission view

use super::forms::draw_field_with_value;
use super::widgets::centered_rect;
use crate::app::App;
use crate::state::SubmitFlow;
use crate::store::model::{Form, Question, QuestionInput};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

/// Draw the submission view
pub fn draw_submit(frame: &mut Frame, area: Rect, app: &App) {
    let Some(flow) = &app.state.submit else {
        return;
    };

    let Some(form) = app.store.form(flow.form_id()) else {
        let message = Paragraph::new("Form not found")
            .style(Style::default().fg(Color::Red))
            .block(
                Block::default()
                    .title(" Fill Out ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(message, area);
        return;
    };

    if flow.is_submitted() {
        draw_thanks(frame, area, form);
        return;
    }

    let form_title = if form.title.is_empty() {
        "(untitled form)".to_string()
    } else {
        form.title.clone()
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress gauge
            Constraint::Length(1), // Step counter
            Constraint::Min(8),    // Question
            Constraint::Length(2), // Error / hint line
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(format!(" Fill Out - {} ", form_title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    // Progress across all questions, answered or not
    let total = form.questions.len();
    let answered = flow.answered_count().min(total);
    let gauge = Gauge::default()
        .block(Block::default().title(" Progress ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(flow.completion_percent(form))
        .label(format!("{} of {} answered", answered, total));
    frame.render_widget(gauge, chunks[0]);

    if form.questions.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "This form has no questions.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Press Enter to submit an empty response.",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(empty, chunks[2]);
        return;
    }

    let counter = Paragraph::new(Span::styled(
        format!("Question {} of {}", flow.step() + 1, total),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(counter, chunks[1]);

    if let Some(question) = flow.current_question(form) {
        draw_question(frame, chunks[2], flow, question);
    }

    // Blocked-advance error, else a context hint
    let footer = if let Some(error) = &app.submit_error {
        Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red)))
    } else if flow.at_last_step(form) {
        Line::from(Span::styled(
            "Enter submits your response.",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let remaining = flow.required_remaining(form);
        let hint = match remaining {
            0 => "Enter for next question.".to_string(),
            1 => "1 required question remaining".to_string(),
            n => format!("{n} required questions remaining"),
        };
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
    };
    frame.render_widget(Paragraph::new(footer), chunks[3]);
}

fn draw_question(frame: &mut Frame, area: Rect, flow: &SubmitFlow, question: &Question) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Question title
            Constraint::Min(3),    // Answer input
            Constraint::Length(1), // Constraint hint
        ])
        .split(area);

    let mut title_spans = vec![Span::styled(
        question.display_title(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if question.required {
        title_spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    frame.render_widget(Paragraph::new(Line::from(title_spans)), chunks[0]);

    let raw = flow.answer_raw(&question.id).unwrap_or("");

    match &question.input {
        QuestionInput::SingleSelect { options } => {
            draw_options(frame, chunks[1], flow, raw, options);
            if options.is_empty() {
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        "This question has no options.",
                        Style::default().fg(Color::DarkGray),
                    )),
                    chunks[2],
                );
            }
        }
        QuestionInput::ShortAnswer { max_length } | QuestionInput::LongAnswer { max_length } => {
            let is_multiline = matches!(question.input, QuestionInput::LongAnswer { .. });
            let input_area = if is_multiline {
                chunks[1]
            } else {
                field_row(chunks[1])
            };
            draw_field_with_value(frame, input_area, "Your answer", raw, true, is_multiline);
            if let Some(limit) = max_length {
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        format!("{}/{} chars", raw.chars().count(), limit),
                        Style::default().fg(Color::DarkGray),
                    )),
                    chunks[2],
                );
            }
        }
        QuestionInput::Number { min, max } => {
            draw_field_with_value(frame, field_row(chunks[1]), "Your answer", raw, true, false);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("Enter a number between {} and {}", min, max),
                    Style::default().fg(Color::DarkGray),
                )),
                chunks[2],
            );
        }
        QuestionInput::Url { pattern } => {
            draw_field_with_value(frame, field_row(chunks[1]), "Your answer", raw, true, false);
            let hint = if pattern.is_empty() {
                "Enter a link".to_string()
            } else {
                format!("Enter a link matching {}", pattern)
            };
            frame.render_widget(
                Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
                chunks[2],
            );
        }
    }
}

fn draw_options(frame: &mut Frame, area: Rect, flow: &SubmitFlow, raw: &str, options: &[String]) {
    let lines: Vec<Line> = options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let is_cursor = idx == flow.option_cursor;
            let is_chosen = !raw.is_empty() && raw == option;

            let marker = if is_chosen { "(•) " } else { "( ) " };
            let prefix = if is_cursor { "▸ " } else { "  " };
            let style = if is_cursor {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(marker, style.fg(Color::Cyan)),
                Span::styled(option.clone(), style),
            ])
        })
        .collect();

    let mut content = lines;
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "↑/↓ to highlight, Space to choose",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(Paragraph::new(content), area);
}

fn draw_thanks(frame: &mut Frame, area: Rect, form: &Form) {
    let panel_area = centered_rect(50, 7, area);
    frame.render_widget(Clear, panel_area);

    let form_title = if form.title.is_empty() {
        "this form".to_string()
    } else {
        form.title.clone()
    };

    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓ Response submitted",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(format!("Thank you for filling out {}.", form_title))),
        Line::from(""),
        Line::from(Span::styled(
            "Esc: back to forms",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(ratatui::layout::Alignment::Center)
    .style(Style::default().bg(Color::Black))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(content, panel_area);
}

/// First three rows of an area, for single-line input fields
fn field_row(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.min(3),
    }
}
