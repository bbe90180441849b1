//! Form editor view (question list, reordering, kind menu)

use super::widgets::centered_rect;
use crate::app::App;
use crate::store::model::{Form, Question, QuestionInput, QuestionKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Height of one question card, borders included
pub const CARD_HEIGHT: u16 = 3;

/// Height of the form header block above the question list
pub const HEADER_HEIGHT: u16 = 5;

/// Draw the form editor
pub fn draw_editor(frame: &mut Frame, area: Rect, app: &App) {
    let form = app
        .state
        .view_params
        .form_id
        .as_ref()
        .and_then(|id| app.store.form(id));

    let Some(form) = form else {
        let content = Paragraph::new("Form not found.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .title(" Form Editor ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(content, area);
        return;
    };

    draw_header(frame, header_area(area), form, app);
    draw_questions(frame, questions_area(area), form, app);

    if let Some(menu) = &app.state.editor.kind_menu {
        draw_kind_menu(frame, area, menu.selected);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, form: &Form, app: &App) {
    let title_span = if form.title.is_empty() {
        Span::styled("(untitled form)", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            form.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )
    };

    let badge = if form.is_published {
        Span::styled("[LIVE]", Style::default().fg(Color::Green))
    } else {
        Span::styled("[DRAFT]", Style::default().fg(Color::Yellow))
    };

    let description = if form.description.is_empty() {
        Span::styled("(no description)", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(form.description.clone(), Style::default().fg(Color::Gray))
    };

    let share_line = if form.is_published {
        Line::from(vec![
            Span::styled(app.share_link(&form.id), Style::default().fg(Color::Blue)),
            Span::styled("  y:copy", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(Span::styled(
            "Not published. Press 'p' to publish and get a share link.",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let header = Paragraph::new(vec![
        Line::from(vec![title_span, Span::raw("  "), badge]),
        Line::from(description),
        share_line,
    ])
    .block(
        Block::default()
            .title(" Form Editor ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

fn draw_questions(frame: &mut Frame, area: Rect, form: &Form, app: &App) {
    let block = Block::default()
        .title(format!(" Questions ({}) ", form.questions.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if form.questions.is_empty() {
        let empty = Paragraph::new("No questions yet.\nPress 'a' to add the first question.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let visible = (inner.height / CARD_HEIGHT) as usize;
    let offset = first_visible_card(app.state.editor.selected_question, visible);
    let drag = app.state.editor.drag.as_ref();

    for (idx, question) in form.questions.iter().enumerate().skip(offset).take(visible) {
        let card_area = Rect {
            x: inner.x,
            y: inner.y + ((idx - offset) as u16) * CARD_HEIGHT,
            width: inner.width,
            height: CARD_HEIGHT,
        };
        let is_selected = idx == app.state.editor.selected_question;
        let is_dragged = drag.is_some_and(|d| d.question_id == question.id);
        let is_drop_target = drag.and_then(|d| d.hover_index) == Some(idx) && !is_dragged;
        draw_card(frame, card_area, question, is_selected, is_dragged, is_drop_target);
    }
}

fn draw_card(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    is_selected: bool,
    is_dragged: bool,
    is_drop_target: bool,
) {
    let border_color = if is_drop_target {
        Color::Yellow
    } else if is_selected {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let style = if is_dragged {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    let prefix = if is_selected { "▸ " } else { "  " };
    let mut spans = vec![
        Span::styled(prefix, style),
        Span::styled(format!("{}. ", question.order + 1), style.fg(Color::Cyan)),
        Span::styled(question.display_title(), style),
    ];
    if question.required {
        spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }

    let card = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(format!(" {} ", input_summary(&question.input)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(card, area);
}

/// One-line description of a question's answer input
fn input_summary(input: &QuestionInput) -> String {
    match input {
        QuestionInput::ShortAnswer { max_length } => match max_length {
            Some(n) => format!("Short answer (max {})", n),
            None => "Short answer".to_string(),
        },
        QuestionInput::LongAnswer { max_length } => match max_length {
            Some(n) => format!("Long answer (max {})", n),
            None => "Long answer".to_string(),
        },
        QuestionInput::SingleSelect { options } => match options.len() {
            0 => "Single select (no options)".to_string(),
            1 => "Single select (1 option)".to_string(),
            n => format!("Single select ({} options)", n),
        },
        QuestionInput::Number { min, max } => format!("Number ({} to {})", min, max),
        QuestionInput::Url { pattern } if pattern.is_empty() => "URL".to_string(),
        QuestionInput::Url { pattern } => format!("URL ({})", pattern),
    }
}

fn draw_kind_menu(frame: &mut Frame, area: Rect, selected: usize) {
    let height = QuestionKind::ALL.len() as u16 + 2;
    let menu_area = centered_rect(30, height, area);

    frame.render_widget(Clear, menu_area);

    let lines: Vec<Line> = QuestionKind::ALL
        .iter()
        .enumerate()
        .map(|(idx, kind)| {
            let is_selected = idx == selected;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().fg(Color::Cyan).bg(Color::DarkGray)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{}{}", prefix, kind.label()), style))
        })
        .collect();

    let menu = Paragraph::new(lines)
        .style(Style::default().bg(Color::Black))
        .block(
            Block::default()
                .title(" Question Type ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(menu, menu_area);
}

fn header_area(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: HEADER_HEIGHT.min(area.height),
    }
}

fn questions_area(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + HEADER_HEIGHT.min(area.height),
        width: area.width,
        height: area.height.saturating_sub(HEADER_HEIGHT),
    }
}

/// First card drawn, keeping the selected card in view
fn first_visible_card(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        selected
    } else if selected >= visible {
        selected - visible + 1
    } else {
        0
    }
}

/// Map a terminal position to the question card under it, if any.
/// `area` is the editor content area and `selected_index` determines
/// the scroll position, mirroring `draw_questions`.
pub fn card_at_position(
    area: Rect,
    selected_index: usize,
    question_count: usize,
    column: u16,
    row: u16,
) -> Option<usize> {
    let questions = questions_area(area);
    let inner = Rect {
        x: questions.x + 1,
        y: questions.y + 1,
        width: questions.width.saturating_sub(2),
        height: questions.height.saturating_sub(2),
    };
    if column < inner.x
        || column >= inner.x + inner.width
        || row < inner.y
        || row >= inner.y + inner.height
    {
        return None;
    }

    let visible = (inner.height / CARD_HEIGHT) as usize;
    let offset = first_visible_card(selected_index, visible);
    let card = offset + ((row - inner.y) / CARD_HEIGHT) as usize;
    (card < question_count && card < offset + visible).then_some(card)
}
