//! Application state definitions

use super::editor::EditorState;
use super::forms::FormState;
use super::submit::SubmitFlow;
use crate::store::model::Form;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    FormList,
    FormCreate,
    FormEdit,
    /// Question design surface for the current form
    FormEditor,
    QuestionEdit,
    Preview,
    Submit,
    Submissions,
}

impl View {
    /// Views that edit through buffered form fields; `go_back` skips
    /// these so Esc lands on the last real view
    pub fn is_form_view(&self) -> bool {
        matches!(self, View::FormCreate | View::FormEdit | View::QuestionEdit)
    }
}

/// View parameters for navigation
#[derive(Debug, Clone, Default)]
pub struct ViewParams {
    pub form_id: Option<String>,
    pub question_id: Option<String>,
}

impl ViewParams {
    pub fn for_form(form_id: &str) -> Self {
        Self {
            form_id: Some(form_id.to_string()),
            question_id: None,
        }
    }
}

/// Sort field for the forms list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormSortField {
    #[default]
    UpdatedAt,
    CreatedAt,
    Title,
}

impl FormSortField {
    pub fn next(&self) -> Self {
        match self {
            Self::UpdatedAt => Self::CreatedAt,
            Self::CreatedAt => Self::Title,
            Self::Title => Self::UpdatedAt,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::UpdatedAt => "Updated",
            Self::CreatedAt => "Created",
            Self::Title => "Title",
        }
    }

    pub fn as_config_str(&self) -> &'static str {
        match self {
            Self::UpdatedAt => "updated",
            Self::CreatedAt => "created",
            Self::Title => "title",
        }
    }

    pub fn from_config_str(value: &str) -> Option<Self> {
        match value {
            "updated" => Some(Self::UpdatedAt),
            "created" => Some(Self::CreatedAt),
            "title" => Some(Self::Title),
            _ => None,
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Desc,
    Asc,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }

    pub fn as_config_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn from_config_str(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Form delete awaiting confirmation
#[derive(Debug, Clone)]
pub struct PendingDelete {
    pub form_id: String,
    pub form_title: String,
    /// false = Cancel, true = Delete
    pub selected_option: bool,
}

impl PendingDelete {
    pub fn new(form_id: String, form_title: String) -> Self {
        Self {
            form_id,
            form_title,
            selected_option: false, // Default to Cancel
        }
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_params: ViewParams,
    pub view_history: Vec<(View, ViewParams)>,

    // Selection
    pub selected_index: usize,

    // Sorting
    pub form_sort_field: FormSortField,
    pub form_sort_direction: SortDirection,

    // UI state
    pub scroll_offset: usize,
    pub pending_delete: Option<PendingDelete>,

    // Per-view state
    pub form_state: FormState,
    pub editor: EditorState,
    pub submit: Option<SubmitFlow>,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    /// Scroll down
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down a page (10 lines)
    pub fn scroll_down_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(10);
    }

    /// Scroll up a page (10 lines)
    pub fn scroll_up_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
    }

    /// Cycle forms-list sort field
    pub fn cycle_form_sort_field(&mut self) {
        self.form_sort_field = self.form_sort_field.next();
        self.reset_selection();
    }

    /// Toggle forms-list sort direction
    pub fn toggle_form_sort_direction(&mut self) {
        self.form_sort_direction = self.form_sort_direction.toggle();
        self.reset_selection();
    }

    /// Order a list section by the active sort preference
    pub fn sort_forms<'a>(&self, mut forms: Vec<&'a Form>) -> Vec<&'a Form> {
        forms.sort_by(|a, b| {
            let cmp = match self.form_sort_field {
                FormSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
                FormSortField::CreatedAt => a.created_at.cmp(&b.created_at),
                FormSortField::Title => a.title.cmp(&b.title),
            };
            match self.form_sort_direction {
                SortDirection::Asc => cmp,
                SortDirection::Desc => cmp.reverse(),
            }
        });
        forms
    }
}
