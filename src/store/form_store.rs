//! The form store: every domain mutation goes through `dispatch`

use chrono::Utc;

use super::model::{Form, FormResponse, Question, QuestionInput, QuestionKind};

/// Partial update for a form's own fields
#[derive(Debug, Clone, Default)]
pub struct FormPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Partial update for a question. Variant fields only apply when the
/// question is of the matching kind; mismatched fields are ignored.
/// `max_length` is doubly optional: `Some(None)` clears the limit.
#[derive(Debug, Clone, Default)]
pub struct QuestionPatch {
    pub title: Option<String>,
    pub required: Option<bool>,
    pub options: Option<Vec<String>>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub pattern: Option<String>,
    pub max_length: Option<Option<usize>>,
}

/// Commands accepted by the store
#[derive(Debug, Clone)]
pub enum StoreCommand {
    CreateForm {
        title: String,
        description: String,
    },
    UpdateForm {
        form_id: String,
        patch: FormPatch,
    },
    DeleteForm {
        form_id: String,
    },
    PublishForm {
        form_id: String,
    },
    UnpublishForm {
        form_id: String,
    },
    SetCurrentForm {
        form_id: Option<String>,
    },
    AddQuestion {
        form_id: String,
    },
    UpdateQuestion {
        form_id: String,
        question_id: String,
        patch: QuestionPatch,
    },
    ChangeQuestionKind {
        form_id: String,
        question_id: String,
        kind: QuestionKind,
    },
    DeleteQuestion {
        form_id: String,
        question_id: String,
    },
    MoveQuestion {
        form_id: String,
        question_id: String,
        to_index: usize,
    },
    SubmitResponse {
        response: FormResponse,
    },
}

/// Events emitted by executed commands. Commands that reference an
/// unknown form or question execute as no-ops and emit nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    FormCreated { form_id: String },
    FormUpdated { form_id: String },
    FormDeleted { form_id: String },
    FormPublished { form_id: String },
    FormUnpublished { form_id: String },
    CurrentFormChanged { form_id: Option<String> },
    QuestionAdded { form_id: String, question_id: String },
    QuestionUpdated { form_id: String, question_id: String },
    QuestionKindChanged { form_id: String, question_id: String },
    QuestionDeleted { form_id: String, question_id: String },
    QuestionsReordered { form_id: String },
    ResponseSubmitted { response_id: String, form_id: String },
}

/// In-memory store for forms, the current-form pointer, and responses
#[derive(Debug, Default)]
pub struct FormStore {
    forms: Vec<Form>,
    current_form_id: Option<String>,
    responses: Vec<FormResponse>,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forms(&self) -> &[Form] {
        &self.forms
    }

    pub fn form(&self, form_id: &str) -> Option<&Form> {
        self.forms.iter().find(|f| f.id == form_id)
    }

    pub fn current_form_id(&self) -> Option<&str> {
        self.current_form_id.as_deref()
    }

    pub fn current_form(&self) -> Option<&Form> {
        self.current_form_id
            .as_deref()
            .and_then(|id| self.form(id))
    }

    pub fn published_forms(&self) -> Vec<&Form> {
        self.forms.iter().filter(|f| f.is_published).collect()
    }

    pub fn draft_forms(&self) -> Vec<&Form> {
        self.forms.iter().filter(|f| !f.is_published).collect()
    }

    pub fn responses(&self) -> &[FormResponse] {
        &self.responses
    }

    pub fn responses_for(&self, form_id: &str) -> Vec<&FormResponse> {
        self.responses
            .iter()
            .filter(|r| r.form_id == form_id)
            .collect()
    }

    /// Execute a command and return the events it produced
    pub fn dispatch(&mut self, command: StoreCommand) -> Vec<StoreEvent> {
        tracing::debug!(?command, "store dispatch");
        match command {
            StoreCommand::CreateForm { title, description } => {
                self.create_form(title, description)
            }
            StoreCommand::UpdateForm { form_id, patch } => self.update_form(&form_id, patch),
            StoreCommand::DeleteForm { form_id } => self.delete_form(&form_id),
            StoreCommand::PublishForm { form_id } => self.publish_form(&form_id),
            StoreCommand::UnpublishForm { form_id } => self.unpublish_form(&form_id),
            StoreCommand::SetCurrentForm { form_id } => self.set_current_form(form_id),
            StoreCommand::AddQuestion { form_id } => self.add_question(&form_id),
            StoreCommand::UpdateQuestion {
                form_id,
                question_id,
                patch,
            } => self.update_question(&form_id, &question_id, patch),
            StoreCommand::ChangeQuestionKind {
                form_id,
                question_id,
                kind,
            } => self.change_question_kind(&form_id, &question_id, kind),
            StoreCommand::DeleteQuestion {
                form_id,
                question_id,
            } => self.delete_question(&form_id, &question_id),
            StoreCommand::MoveQuestion {
                form_id,
                question_id,
                to_index,
            } => self.move_question(&form_id, &question_id, to_index),
            StoreCommand::SubmitResponse { response } => self.submit_response(response),
        }
    }

    /// Apply a mutation to a form by cloning it, editing the clone, and
    /// swapping it back in. Every successful replacement bumps
    /// `updated_at`. Returns false when the form does not exist.
    fn replace_form(&mut self, form_id: &str, mutate: impl FnOnce(&mut Form)) -> bool {
        let Some(index) = self.forms.iter().position(|f| f.id == form_id) else {
            return false;
        };
        let mut form = self.forms[index].clone();
        mutate(&mut form);
        form.updated_at = Utc::now();
        self.forms[index] = form;
        true
    }

    fn question_exists(&self, form_id: &str, question_id: &str) -> bool {
        self.form(form_id)
            .is_some_and(|f| f.question(question_id).is_some())
    }

    fn create_form(&mut self, title: String, description: String) -> Vec<StoreEvent> {
        let form = Form::new(title, description);
        let form_id = form.id.clone();
        self.forms.push(form);
        self.current_form_id = Some(form_id.clone());
        vec![
            StoreEvent::FormCreated {
                form_id: form_id.clone(),
            },
            StoreEvent::CurrentFormChanged {
                form_id: Some(form_id),
            },
        ]
    }

    fn update_form(&mut self, form_id: &str, patch: FormPatch) -> Vec<StoreEvent> {
        let replaced = self.replace_form(form_id, |form| {
            if let Some(title) = patch.title {
                form.title = title;
            }
            if let Some(description) = patch.description {
                form.description = description;
            }
        });
        if !replaced {
            return Vec::new();
        }
        vec![StoreEvent::FormUpdated {
            form_id: form_id.to_string(),
        }]
    }

    fn delete_form(&mut self, form_id: &str) -> Vec<StoreEvent> {
        let before = self.forms.len();
        self.forms.retain(|f| f.id != form_id);
        if self.forms.len() == before {
            return Vec::new();
        }
        let mut events = vec![StoreEvent::FormDeleted {
            form_id: form_id.to_string(),
        }];
        if self.current_form_id.as_deref() == Some(form_id) {
            self.current_form_id = None;
            events.push(StoreEvent::CurrentFormChanged { form_id: None });
        }
        events
    }

    fn publish_form(&mut self, form_id: &str) -> Vec<StoreEvent> {
        let now = Utc::now();
        let replaced = self.replace_form(form_id, |form| {
            form.is_published = true;
            form.published_at = Some(now);
        });
        if !replaced {
            return Vec::new();
        }
        vec![StoreEvent::FormPublished {
            form_id: form_id.to_string(),
        }]
    }

    fn unpublish_form(&mut self, form_id: &str) -> Vec<StoreEvent> {
        let replaced = self.replace_form(form_id, |form| {
            form.is_published = false;
            form.published_at = None;
        });
        if !replaced {
            return Vec::new();
        }
        vec![StoreEvent::FormUnpublished {
            form_id: form_id.to_string(),
        }]
    }

    fn set_current_form(&mut self, form_id: Option<String>) -> Vec<StoreEvent> {
        if let Some(id) = form_id.as_deref() {
            if self.form(id).is_none() {
                return Vec::new();
            }
        }
        self.current_form_id = form_id.clone();
        vec![StoreEvent::CurrentFormChanged { form_id }]
    }

    fn add_question(&mut self, form_id: &str) -> Vec<StoreEvent> {
        // New questions go to the end; the order is the target form's
        // own question count.
        let Some(count) = self.form(form_id).map(|f| f.questions.len()) else {
            return Vec::new();
        };
        let question = Question::new(count);
        let question_id = question.id.clone();
        self.replace_form(form_id, |form| form.questions.push(question));
        vec![StoreEvent::QuestionAdded {
            form_id: form_id.to_string(),
            question_id,
        }]
    }

    fn update_question(
        &mut self,
        form_id: &str,
        question_id: &str,
        patch: QuestionPatch,
    ) -> Vec<StoreEvent> {
        if !self.question_exists(form_id, question_id) {
            return Vec::new();
        }
        self.replace_form(form_id, |form| {
            if let Some(question) = form.questions.iter_mut().find(|q| q.id == question_id) {
                apply_question_patch(question, patch);
            }
        });
        vec![StoreEvent::QuestionUpdated {
            form_id: form_id.to_string(),
            question_id: question_id.to_string(),
        }]
    }

    fn change_question_kind(
        &mut self,
        form_id: &str,
        question_id: &str,
        kind: QuestionKind,
    ) -> Vec<StoreEvent> {
        if !self.question_exists(form_id, question_id) {
            return Vec::new();
        }
        self.replace_form(form_id, |form| {
            if let Some(question) = form.questions.iter_mut().find(|q| q.id == question_id) {
                // Always a full reset, even when the kind is unchanged.
                question.input = QuestionInput::defaults_for(kind);
            }
        });
        vec![StoreEvent::QuestionKindChanged {
            form_id: form_id.to_string(),
            question_id: question_id.to_string(),
        }]
    }

    fn delete_question(&mut self, form_id: &str, question_id: &str) -> Vec<StoreEvent> {
        if !self.question_exists(form_id, question_id) {
            return Vec::new();
        }
        self.replace_form(form_id, |form| {
            form.questions.retain(|q| q.id != question_id);
            form.renumber_questions();
        });
        vec![StoreEvent::QuestionDeleted {
            form_id: form_id.to_string(),
            question_id: question_id.to_string(),
        }]
    }

    fn move_question(
        &mut self,
        form_id: &str,
        question_id: &str,
        to_index: usize,
    ) -> Vec<StoreEvent> {
        let Some(from) = self
            .form(form_id)
            .and_then(|f| f.questions.iter().position(|q| q.id == question_id))
        else {
            return Vec::new();
        };
        self.replace_form(form_id, |form| {
            let question = form.questions.remove(from);
            // Clamp to the valid range after removal.
            let to = to_index.min(form.questions.len());
            form.questions.insert(to, question);
            form.renumber_questions();
        });
        vec![StoreEvent::QuestionsReordered {
            form_id: form_id.to_string(),
        }]
    }

    fn submit_response(&mut self, response: FormResponse) -> Vec<StoreEvent> {
        let event = StoreEvent::ResponseSubmitted {
            response_id: response.id.clone(),
            form_id: response.form_id.clone(),
        };
        self.responses.push(response);
        vec![event]
    }
}

fn apply_question_patch(question: &mut Question, patch: QuestionPatch) {
    if let Some(title) = patch.title {
        question.title = title;
    }
    if let Some(required) = patch.required {
        question.required = required;
    }
    match &mut question.input {
        QuestionInput::ShortAnswer { max_length } | QuestionInput::LongAnswer { max_length } => {
            if let Some(new_limit) = patch.max_length {
                *max_length = new_limit;
            }
        }
        QuestionInput::SingleSelect { options } => {
            if let Some(new_options) = patch.options {
                *options = new_options;
            }
        }
        QuestionInput::Number { min, max } => {
            if let Some(new_min) = patch.min {
                *min = new_min;
            }
            if let Some(new_max) = patch.max {
                *max = new_max;
            }
        }
        QuestionInput::Url { pattern } => {
            if let Some(new_pattern) = patch.pattern {
                *pattern = new_pattern;
            }
        }
    }
}
