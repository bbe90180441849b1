//! Form state management and form structs

use super::field::FormField;
use crate::store::model::{Question, QuestionInput, QuestionKind};
use crate::store::QuestionPatch;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Enum representing all possible form states
#[derive(Debug, Clone, Default)]
pub enum FormState {
    #[default]
    None,
    FormCreate(FormCreateForm),
    FormEdit(FormEditForm),
    QuestionEdit(QuestionEditForm),
}

impl FormState {
    pub fn next_field(&mut self) {
        match self {
            FormState::None => {}
            FormState::FormCreate(f) => f.next_field(),
            FormState::FormEdit(f) => f.next_field(),
            FormState::QuestionEdit(f) => f.next_field(),
        }
    }

    pub fn prev_field(&mut self) {
        match self {
            FormState::None => {}
            FormState::FormCreate(f) => f.prev_field(),
            FormState::FormEdit(f) => f.prev_field(),
            FormState::QuestionEdit(f) => f.prev_field(),
        }
    }

    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self {
            FormState::None => None,
            FormState::FormCreate(f) => {
                if f.is_buttons_row_active() {
                    None
                } else {
                    Some(f.get_active_field_mut())
                }
            }
            FormState::FormEdit(f) => Some(f.get_active_field_mut()),
            FormState::QuestionEdit(f) => Some(f.get_active_field_mut()),
        }
    }

    pub fn is_active_field_multiline(&self) -> bool {
        match self {
            FormState::None => false,
            FormState::FormCreate(f) => f
                .get_field(f.active_field())
                .is_some_and(|f| f.is_multiline),
            FormState::FormEdit(f) => f
                .get_field(f.active_field())
                .is_some_and(|f| f.is_multiline),
            FormState::QuestionEdit(f) => f
                .get_field(f.active_field())
                .is_some_and(|f| f.is_multiline),
        }
    }
}

// Form Create Form
#[derive(Debug, Clone)]
pub struct FormCreateForm {
    pub title: FormField,
    pub description: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Cancel, 1=Create)
    pub selected_button: usize,
}

impl FormCreateForm {
    pub fn new() -> Self {
        Self {
            title: FormField::text("title", "Title", false),
            description: FormField::text("description", "Description", true),
            active_field_index: 0,
            selected_button: 1, // Default to "Create" button
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == 2
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        self.next_button();
    }
}

impl Default for FormCreateForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for FormCreateForm {
    fn field_count(&self) -> usize {
        3 // title, description, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.title,
            // Buttons row has no field of its own.
            _ => &mut self.description,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.title),
            1 => Some(&self.description),
            // Index 2 is the buttons row, no FormField for it
            _ => None,
        }
    }
}

// Form Edit Form (title and description of an existing form)
#[derive(Debug, Clone)]
pub struct FormEditForm {
    pub form_id: String,
    pub title: FormField,
    pub description: FormField,
    pub active_field_index: usize,
}

impl FormEditForm {
    pub fn from_form(form: &crate::store::model::Form) -> Self {
        Self {
            form_id: form.id.clone(),
            title: FormField::text_with_value("title", "Title", form.title.clone(), false),
            description: FormField::text_with_value(
                "description",
                "Description",
                form.description.clone(),
                true,
            ),
            active_field_index: 0,
        }
    }
}

impl Form for FormEditForm {
    fn field_count(&self) -> usize {
        2 // title, description
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.title,
            _ => &mut self.description,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.title),
            1 => Some(&self.description),
            _ => None,
        }
    }
}

// Question Edit Form
//
// Field layout: index 0 is the title, index 1 is the required toggle,
// and indices 2.. are the kind-specific fields built by `from_question`.
#[derive(Debug, Clone)]
pub struct QuestionEditForm {
    pub question_id: String,
    pub kind: QuestionKind,
    pub title: FormField,
    pub required: FormField,
    pub variant_fields: Vec<FormField>,
    pub active_field_index: usize,
}

impl QuestionEditForm {
    pub fn from_question(question: &Question) -> Self {
        let variant_fields = match &question.input {
            QuestionInput::ShortAnswer { max_length } | QuestionInput::LongAnswer { max_length } => {
                vec![FormField::integer_with_value(
                    "max_length",
                    "Max Length (blank for none)",
                    max_length.map(|n| n.to_string()).unwrap_or_default(),
                )]
            }
            QuestionInput::SingleSelect { options } => options
                .iter()
                .enumerate()
                .map(|(i, option)| option_field(i, option.clone()))
                .collect(),
            QuestionInput::Number { min, max } => vec![
                FormField::integer_with_value("min", "Min", min.to_string()),
                FormField::integer_with_value("max", "Max", max.to_string()),
            ],
            QuestionInput::Url { pattern } => vec![FormField::text_with_value(
                "pattern",
                "URL Pattern",
                pattern.clone(),
                false,
            )],
        };
        Self {
            question_id: question.id.clone(),
            kind: question.kind(),
            title: FormField::text_with_value("title", "Question", question.title.clone(), false),
            required: FormField::toggle_with_value("required", "Required", question.required),
            variant_fields,
            active_field_index: 0,
        }
    }

    /// Returns true if the required toggle is the active field
    pub fn is_required_field_active(&self) -> bool {
        self.active_field_index == 1
    }

    /// Append a blank option field and focus it (single select only)
    pub fn add_option(&mut self) {
        if self.kind != QuestionKind::SingleSelect {
            return;
        }
        let index = self.variant_fields.len();
        self.variant_fields.push(option_field(index, String::new()));
        self.active_field_index = index + 2;
    }

    /// Collect the buffered edits into a store patch
    pub fn to_patch(&self) -> QuestionPatch {
        let mut patch = QuestionPatch {
            title: Some(self.title.as_text().to_string()),
            required: Some(self.required.as_toggle()),
            ..QuestionPatch::default()
        };
        match self.kind {
            QuestionKind::ShortAnswer | QuestionKind::LongAnswer => {
                patch.max_length = Some(
                    self.variant_fields
                        .first()
                        .and_then(|f| f.as_integer())
                        .and_then(|n| usize::try_from(n).ok()),
                );
            }
            QuestionKind::SingleSelect => {
                patch.options = Some(
                    self.variant_fields
                        .iter()
                        .map(|f| f.as_text().to_string())
                        .collect(),
                );
            }
            QuestionKind::Number => {
                // Unparsable buffers leave the stored bound unchanged.
                patch.min = self.variant_fields.first().and_then(|f| f.as_integer());
                patch.max = self.variant_fields.get(1).and_then(|f| f.as_integer());
            }
            QuestionKind::Url => {
                patch.pattern = Some(
                    self.variant_fields
                        .first()
                        .map(|f| f.as_text().to_string())
                        .unwrap_or_default(),
                );
            }
        }
        patch
    }
}

fn option_field(index: usize, value: String) -> FormField {
    FormField::text_with_value("option", &format!("Option {}", index + 1), value, false)
}

impl Form for QuestionEditForm {
    fn field_count(&self) -> usize {
        2 + self.variant_fields.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.title,
            1 => &mut self.required,
            i => {
                let last = self.variant_fields.len() - 1;
                &mut self.variant_fields[(i - 2).min(last)]
            }
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.title),
            1 => Some(&self.required),
            i => self.variant_fields.get(i - 2),
        }
    }
}
