//! Step-through fill-out flow for a published form

use thiserror::Error;

use crate::store::model::{
    AnswerValue, Form, FormResponse, Question, QuestionAnswer, QuestionInput, QuestionKind,
};

/// Where the respondent is in the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Editing,
    /// Terminal: the response has been handed to the store
    Submitted,
}

/// Why the flow refused to advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitBlock {
    #[error("An answer is required before continuing")]
    AnswerRequired,
    #[error("Required questions are missing answers")]
    MissingRequired,
}

/// An answer as typed, before submit-time typing
#[derive(Debug, Clone)]
struct DraftAnswer {
    question_id: String,
    raw: String,
}

/// One-question-at-a-time submission state machine.
///
/// Drafts are kept as raw strings in first-touch order; retyping an
/// answer replaces it in place. A draft exists as soon as the question
/// is touched, so erased answers still count toward the progress
/// gauge while failing the required gate.
#[derive(Debug, Clone)]
pub struct SubmitFlow {
    form_id: String,
    step: usize,
    answers: Vec<DraftAnswer>,
    phase: SubmitPhase,
    /// Highlighted option for single-select questions
    pub option_cursor: usize,
}

impl SubmitFlow {
    pub fn new(form: &Form) -> Self {
        Self {
            form_id: form.id.clone(),
            step: 0,
            answers: Vec::new(),
            phase: SubmitPhase::Editing,
            option_cursor: 0,
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SubmitPhase::Submitted
    }

    pub fn current_question<'a>(&self, form: &'a Form) -> Option<&'a Question> {
        form.questions.get(self.step)
    }

    /// The raw draft for a question, if it has been touched
    pub fn answer_raw(&self, question_id: &str) -> Option<&str> {
        self.answers
            .iter()
            .find(|a| a.question_id == question_id)
            .map(|a| a.raw.as_str())
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Percentage of questions with a recorded draft, for the gauge
    pub fn completion_percent(&self, form: &Form) -> u16 {
        if form.questions.is_empty() {
            return 0;
        }
        (((self.answers.len() * 100) / form.questions.len()) as u16).min(100)
    }

    /// How many required questions still lack a non-empty answer
    pub fn required_remaining(&self, form: &Form) -> usize {
        form.questions
            .iter()
            .filter(|q| q.required && !self.question_satisfied(q))
            .count()
    }

    pub fn at_last_step(&self, form: &Form) -> bool {
        form.questions.is_empty() || self.step + 1 >= form.questions.len()
    }

    pub fn can_go_previous(&self) -> bool {
        self.phase == SubmitPhase::Editing && self.step > 0
    }

    /// Type into the current question's draft, honoring the kind's
    /// input rules (digits for numbers, the max-length cap for text)
    pub fn input_char(&mut self, form: &Form, c: char) {
        if self.phase == SubmitPhase::Submitted {
            return;
        }
        let Some(question) = self.current_question(form) else {
            return;
        };
        let question_id = question.id.clone();
        match &question.input {
            // Options are chosen, not typed.
            QuestionInput::SingleSelect { .. } => {}
            QuestionInput::Number { .. } => {
                let index = self.draft_index(&question_id);
                let raw = &mut self.answers[index].raw;
                if c.is_ascii_digit() || (c == '-' && raw.is_empty()) {
                    raw.push(c);
                }
            }
            QuestionInput::ShortAnswer { max_length }
            | QuestionInput::LongAnswer { max_length } => {
                let limit = *max_length;
                let index = self.draft_index(&question_id);
                let raw = &mut self.answers[index].raw;
                if limit.map_or(true, |n| raw.chars().count() < n) {
                    raw.push(c);
                }
            }
            QuestionInput::Url { .. } => {
                let index = self.draft_index(&question_id);
                self.answers[index].raw.push(c);
            }
        }
    }

    /// Erase the last character of the current draft
    pub fn backspace(&mut self, form: &Form) {
        if self.phase == SubmitPhase::Submitted {
            return;
        }
        let Some(question) = self.current_question(form) else {
            return;
        };
        if matches!(question.input, QuestionInput::SingleSelect { .. }) {
            return;
        }
        let question_id = question.id.clone();
        let index = self.draft_index(&question_id);
        self.answers[index].raw.pop();
    }

    pub fn option_down(&mut self, form: &Form) {
        let count = self.option_count(form);
        if count > 0 && self.option_cursor < count - 1 {
            self.option_cursor += 1;
        }
    }

    pub fn option_up(&mut self) {
        if self.option_cursor > 0 {
            self.option_cursor -= 1;
        }
    }

    /// Record the highlighted option as the answer
    pub fn select_option(&mut self, form: &Form) {
        if self.phase == SubmitPhase::Submitted {
            return;
        }
        let Some(question) = self.current_question(form) else {
            return;
        };
        if let QuestionInput::SingleSelect { options } = &question.input {
            if let Some(option) = options.get(self.option_cursor) {
                let value = option.clone();
                let question_id = question.id.clone();
                let index = self.draft_index(&question_id);
                self.answers[index].raw = value;
            }
        }
    }

    /// Step forward; on the last question, build the response and move
    /// to the terminal phase. `Ok(Some(..))` carries the finished
    /// response for the caller to submit.
    pub fn advance(&mut self, form: &Form) -> Result<Option<FormResponse>, SubmitBlock> {
        if self.phase == SubmitPhase::Submitted {
            return Ok(None);
        }
        if !self.at_last_step(form) {
            if let Some(question) = self.current_question(form) {
                if !self.question_satisfied(question) {
                    return Err(SubmitBlock::AnswerRequired);
                }
            }
            self.step += 1;
            self.sync_option_cursor(form);
            return Ok(None);
        }
        if let Some(question) = self.current_question(form) {
            if !self.question_satisfied(question) {
                return Err(SubmitBlock::AnswerRequired);
            }
        }
        // Earlier questions may have been skipped backwards past.
        if form
            .questions
            .iter()
            .any(|q| q.required && !self.question_satisfied(q))
        {
            return Err(SubmitBlock::MissingRequired);
        }
        let response = self.build_response(form);
        self.phase = SubmitPhase::Submitted;
        Ok(Some(response))
    }

    /// Step back one question (allowed regardless of answers)
    pub fn previous(&mut self, form: &Form) {
        if self.phase == SubmitPhase::Submitted {
            return;
        }
        if self.step > 0 {
            self.step -= 1;
            self.sync_option_cursor(form);
        }
    }

    fn question_satisfied(&self, question: &Question) -> bool {
        !question.required
            || self
                .answer_raw(&question.id)
                .is_some_and(|raw| !raw.is_empty())
    }

    fn option_count(&self, form: &Form) -> usize {
        match self.current_question(form).map(|q| &q.input) {
            Some(QuestionInput::SingleSelect { options }) => options.len(),
            _ => 0,
        }
    }

    /// Re-highlight the saved option when landing on a select question
    fn sync_option_cursor(&mut self, form: &Form) {
        self.option_cursor = 0;
        if let Some(question) = self.current_question(form) {
            if let QuestionInput::SingleSelect { options } = &question.input {
                if let Some(raw) = self.answer_raw(&question.id) {
                    if let Some(position) = options.iter().position(|o| o == raw) {
                        self.option_cursor = position;
                    }
                }
            }
        }
    }

    fn draft_index(&mut self, question_id: &str) -> usize {
        match self.answers.iter().position(|a| a.question_id == question_id) {
            Some(index) => index,
            None => {
                self.answers.push(DraftAnswer {
                    question_id: question_id.to_string(),
                    raw: String::new(),
                });
                self.answers.len() - 1
            }
        }
    }

    /// Encode drafts into a typed response, in first-touch order.
    /// Number questions parse to numeric values; a draft whose question
    /// has since been deleted stays as text.
    fn build_response(&self, form: &Form) -> FormResponse {
        let answers = self
            .answers
            .iter()
            .map(|draft| {
                let value = match form.question(&draft.question_id).map(Question::kind) {
                    Some(QuestionKind::Number) => match draft.raw.parse::<i64>() {
                        Ok(number) => AnswerValue::Number(number),
                        Err(_) => AnswerValue::Text(draft.raw.clone()),
                    },
                    _ => AnswerValue::Text(draft.raw.clone()),
                };
                QuestionAnswer {
                    question_id: draft.question_id.clone(),
                    value,
                }
            })
            .collect();
        FormResponse::new(self.form_id.clone(), answers)
    }
}
