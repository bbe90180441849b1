//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{
    AppState, DragState, Form as _, FormCreateForm, FormEditForm, FormSortField, FormState,
    KindMenu, PendingDelete, QuestionEditForm, SortDirection, SubmitFlow, View, ViewParams,
};
use crate::store::model::Form;
use crate::store::{FormPatch, FormStore, QuestionPatch, StoreCommand, StoreEvent};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// In-memory form store; all domain mutations go through dispatch
    pub store: FormStore,
    /// Persisted preferences
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback message shown in the status bar
    pub status_message: Option<String>,
    /// Why the submit flow refused to advance, shown in the submit view
    pub submit_error: Option<String>,
    /// Terminal size for mouse hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance, loading saved preferences
    pub fn new() -> Self {
        let config = TuiConfig::load().unwrap_or_else(|e| {
            tracing::warn!("failed to load config: {e:#}");
            TuiConfig::default()
        });
        Self::with_config(config)
    }

    /// Create an App with an explicit config (used by tests)
    pub fn with_config(config: TuiConfig) -> Self {
        let mut state = AppState::default();
        if let Some(field) = config
            .form_sort_field
            .as_deref()
            .and_then(FormSortField::from_config_str)
        {
            state.form_sort_field = field;
        }
        if let Some(direction) = config
            .form_sort_direction
            .as_deref()
            .and_then(SortDirection::from_config_str)
        {
            state.form_sort_direction = direction;
        }

        Self {
            state,
            store: FormStore::new(),
            config,
            quit: false,
            status_message: None,
            submit_error: None,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Public link where a published form accepts responses
    pub fn share_link(&self, form_id: &str) -> String {
        format!("{}/submit/{}", self.config.share_base(), form_id)
    }

    /// Run a store command and react to the events it emits
    fn dispatch(&mut self, command: StoreCommand) {
        let events = self.store.dispatch(command);
        for event in events {
            self.apply_store_event(event);
        }
    }

    /// Keep UI state consistent with what the store just did
    fn apply_store_event(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::FormDeleted { .. } => {
                let max = self.store.forms().len();
                if max == 0 {
                    self.state.reset_selection();
                } else if self.state.selected_index >= max {
                    self.state.selected_index = max - 1;
                }
            }
            StoreEvent::QuestionAdded { form_id, .. } => {
                // Jump the editor selection to the new question
                let count = question_count_of(&self.store, &form_id);
                self.state.editor.selected_question = count.saturating_sub(1);
            }
            StoreEvent::QuestionDeleted { form_id, .. }
            | StoreEvent::QuestionsReordered { form_id } => {
                let count = question_count_of(&self.store, &form_id);
                self.state.editor.clamp_selection(count);
            }
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Confirm-delete dialog is modal
        if self.state.pending_delete.is_some() {
            self.handle_delete_dialog_key(key);
            return Ok(());
        }

        // So is the question type menu
        if self.state.editor.kind_menu.is_some() {
            self.handle_kind_menu_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::FormList => self.handle_form_list_key(key),
            View::FormCreate => self.handle_form_create_key(key),
            View::FormEdit => self.handle_form_edit_key(key),
            View::FormEditor => self.handle_editor_key(key),
            View::QuestionEdit => self.handle_question_edit_key(key),
            View::Preview => self.handle_preview_key(key),
            View::Submit => self.handle_submit_key(key),
            View::Submissions => self.handle_submissions_key(key),
        }

        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View, params: ViewParams) {
        // Save current view to history
        self.state.view_history.push((
            self.state.current_view.clone(),
            self.state.view_params.clone(),
        ));
        self.state.current_view = view;
        self.state.view_params = params;
        self.state.scroll_offset = 0;
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        // Skip form views in history to go back to the last real view
        while let Some((view, params)) = self.state.view_history.pop() {
            if view.is_form_view() {
                continue;
            }
            self.state.current_view = view;
            self.state.view_params = params;
            self.state.scroll_offset = 0;
            return;
        }
        // Nothing left: the forms list is home
        self.state.current_view = View::FormList;
        self.state.view_params = ViewParams::default();
        self.state.scroll_offset = 0;
    }

    /// Forms in display order: published section first, then drafts
    pub fn ordered_forms(&self) -> Vec<&Form> {
        let mut forms = self.state.sort_forms(self.store.published_forms());
        forms.extend(self.state.sort_forms(self.store.draft_forms()));
        forms
    }

    fn selected_form_id(&self) -> Option<String> {
        self.ordered_forms()
            .get(self.state.selected_index)
            .map(|form| form.id.clone())
    }

    /// Handle keys in the forms list
    fn handle_form_list_key(&mut self, key: KeyEvent) {
        let total = self.store.forms().len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(total),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Enter => {
                if let Some(form_id) = self.selected_form_id() {
                    self.open_editor(&form_id);
                }
            }
            KeyCode::Char('n') => {
                self.state.form_state = FormState::FormCreate(FormCreateForm::new());
                self.navigate(View::FormCreate, ViewParams::default());
            }
            KeyCode::Char('p') => {
                if let Some(form_id) = self.selected_form_id() {
                    self.navigate(View::Preview, ViewParams::for_form(&form_id));
                }
            }
            KeyCode::Char('f') => {
                if let Some(form_id) = self.selected_form_id() {
                    self.start_submit(&form_id);
                }
            }
            KeyCode::Char('u') => {
                if let Some(form_id) = self.selected_form_id() {
                    self.navigate(View::Submissions, ViewParams::for_form(&form_id));
                }
            }
            KeyCode::Char('d') => {
                if let Some(form_id) = self.selected_form_id() {
                    let title = self
                        .store
                        .form(&form_id)
                        .map(|form| form.title.clone())
                        .unwrap_or_default();
                    self.state.pending_delete = Some(PendingDelete::new(form_id, title));
                }
            }
            KeyCode::Char('s') => {
                self.state.cycle_form_sort_field();
                self.save_sort_prefs();
            }
            KeyCode::Char('S') => {
                self.state.toggle_form_sort_direction();
                self.save_sort_prefs();
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Persist the sort preference so the next session starts with it
    fn save_sort_prefs(&mut self) {
        self.config.form_sort_field = Some(self.state.form_sort_field.as_config_str().to_string());
        self.config.form_sort_direction =
            Some(self.state.form_sort_direction.as_config_str().to_string());
        if let Err(e) = self.config.save() {
            tracing::warn!("failed to save config: {e:#}");
        }
    }

    fn open_editor(&mut self, form_id: &str) {
        self.dispatch(StoreCommand::SetCurrentForm {
            form_id: Some(form_id.to_string()),
        });
        self.state.editor.reset();
        self.navigate(View::FormEditor, ViewParams::for_form(form_id));
    }

    fn start_submit(&mut self, form_id: &str) {
        let Some(form) = self.store.form(form_id) else {
            return;
        };
        self.state.submit = Some(SubmitFlow::new(form));
        self.submit_error = None;
        self.navigate(View::Submit, ViewParams::for_form(form_id));
    }

    /// Handle keys while the confirm-delete dialog is open
    fn handle_delete_dialog_key(&mut self, key: KeyEvent) {
        let Some(pending) = &mut self.state.pending_delete else {
            return;
        };
        match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Tab
            | KeyCode::Char('j')
            | KeyCode::Char('k') => {
                pending.selected_option = !pending.selected_option;
            }
            KeyCode::Enter => {
                let confirmed = pending.selected_option;
                let form_id = pending.form_id.clone();
                self.state.pending_delete = None;
                if confirmed {
                    self.dispatch(StoreCommand::DeleteForm { form_id });
                    self.status_message = Some("Form deleted".to_string());
                }
            }
            KeyCode::Esc => self.state.pending_delete = None,
            _ => {}
        }
    }

    /// Handle keys while the question type menu is open
    fn handle_kind_menu_key(&mut self, key: KeyEvent) {
        let Some(menu) = &mut self.state.editor.kind_menu else {
            return;
        };
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => menu.select_next(),
            KeyCode::Char('k') | KeyCode::Up => menu.select_prev(),
            KeyCode::Enter => {
                let question_id = menu.question_id.clone();
                let kind = menu.selected_kind();
                self.state.editor.kind_menu = None;
                if let Some(form_id) = self.state.view_params.form_id.clone() {
                    self.dispatch(StoreCommand::ChangeQuestionKind {
                        form_id,
                        question_id,
                        kind,
                    });
                }
            }
            KeyCode::Esc => self.state.editor.kind_menu = None,
            _ => {}
        }
    }

    /// Handle keys in the form create page
    fn handle_form_create_key(&mut self, key: KeyEvent) {
        let on_buttons = matches!(
            &self.state.form_state,
            FormState::FormCreate(form) if form.is_buttons_row_active()
        );

        match key.code {
            KeyCode::Tab => self.state.form_state.next_field(),
            KeyCode::BackTab => self.state.form_state.prev_field(),
            KeyCode::Left | KeyCode::Char('h') if on_buttons => {
                if let FormState::FormCreate(form) = &mut self.state.form_state {
                    form.prev_button();
                }
            }
            KeyCode::Right | KeyCode::Char('l') if on_buttons => {
                if let FormState::FormCreate(form) = &mut self.state.form_state {
                    form.next_button();
                }
            }
            KeyCode::Enter if on_buttons => {
                let create = matches!(
                    &self.state.form_state,
                    FormState::FormCreate(form) if form.selected_button == 1
                );
                if create {
                    self.create_form();
                } else {
                    self.state.form_state = FormState::None;
                    self.go_back();
                }
            }
            KeyCode::Enter => {
                // Enter in the description adds a newline; on the title
                // it confirms the form
                if self.state.form_state.is_active_field_multiline() {
                    if let Some(field) = self.state.form_state.get_active_field_mut() {
                        field.push_char('\n');
                    }
                } else {
                    self.create_form();
                }
            }
            KeyCode::Esc => {
                self.state.form_state = FormState::None;
                self.go_back();
            }
            KeyCode::Char(c) if !on_buttons => {
                if let Some(field) = self.state.form_state.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace if !on_buttons => {
                if let Some(field) = self.state.form_state.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    /// Create the form from the buffered fields and open its editor
    fn create_form(&mut self) {
        let FormState::FormCreate(form) = &self.state.form_state else {
            return;
        };
        let title = form.title.as_text().trim().to_string();
        let description = form.description.as_text().trim().to_string();
        if title.is_empty() {
            self.status_message = Some("A form needs a title".to_string());
            return;
        }

        self.state.form_state = FormState::None;
        self.dispatch(StoreCommand::CreateForm { title, description });

        // The new form becomes current; drop straight into its editor
        if let Some(form_id) = self.store.current_form_id().map(|id| id.to_string()) {
            self.state.editor.reset();
            self.navigate(View::FormEditor, ViewParams::for_form(&form_id));
            self.status_message = Some("Form created".to_string());
        }
    }

    /// Handle keys in the form edit page (title and description)
    fn handle_form_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.state.form_state.next_field(),
            KeyCode::BackTab => self.state.form_state.prev_field(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.save_form_edit();
            }
            KeyCode::Esc => {
                self.state.form_state = FormState::None;
                self.go_back();
            }
            KeyCode::Enter => {
                if self.state.form_state.is_active_field_multiline() {
                    if let Some(field) = self.state.form_state.get_active_field_mut() {
                        field.push_char('\n');
                    }
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.state.form_state.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form_state.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    fn save_form_edit(&mut self) {
        let FormState::FormEdit(form) = &self.state.form_state else {
            return;
        };
        let form_id = form.form_id.clone();
        let patch = FormPatch {
            title: Some(form.title.as_text().to_string()),
            description: Some(form.description.as_text().to_string()),
        };
        self.state.form_state = FormState::None;
        self.dispatch(StoreCommand::UpdateForm { form_id, patch });
        self.status_message = Some("Form saved".to_string());
        self.go_back();
    }

    /// Handle keys in the form editor (question list)
    fn handle_editor_key(&mut self, key: KeyEvent) {
        let Some(form_id) = self.state.view_params.form_id.clone() else {
            self.go_back();
            return;
        };
        let question_count = question_count_of(&self.store, &form_id);

        match key.code {
            KeyCode::Down if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.move_selected_question(&form_id, 1);
            }
            KeyCode::Up if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.move_selected_question(&form_id, -1);
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.editor.select_down(question_count),
            KeyCode::Char('k') | KeyCode::Up => self.state.editor.select_up(),
            KeyCode::Char('J') => self.move_selected_question(&form_id, 1),
            KeyCode::Char('K') => self.move_selected_question(&form_id, -1),
            KeyCode::Char('a') => {
                self.dispatch(StoreCommand::AddQuestion { form_id });
            }
            KeyCode::Enter | KeyCode::Char('e') => self.open_question_edit(&form_id),
            KeyCode::Char('t') => {
                let menu = self
                    .store
                    .form(&form_id)
                    .and_then(|form| form.questions.get(self.state.editor.selected_question))
                    .map(|question| KindMenu::new(question.id.clone(), question.kind()));
                self.state.editor.kind_menu = menu;
            }
            KeyCode::Char('r') => {
                let toggled = self
                    .store
                    .form(&form_id)
                    .and_then(|form| form.questions.get(self.state.editor.selected_question))
                    .map(|question| (question.id.clone(), !question.required));
                if let Some((question_id, required)) = toggled {
                    self.dispatch(StoreCommand::UpdateQuestion {
                        form_id,
                        question_id,
                        patch: QuestionPatch {
                            required: Some(required),
                            ..QuestionPatch::default()
                        },
                    });
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                let question_id = self
                    .store
                    .form(&form_id)
                    .and_then(|form| form.questions.get(self.state.editor.selected_question))
                    .map(|question| question.id.clone());
                if let Some(question_id) = question_id {
                    self.dispatch(StoreCommand::DeleteQuestion {
                        form_id,
                        question_id,
                    });
                }
            }
            KeyCode::Char('E') => {
                let edit = self.store.form(&form_id).map(FormEditForm::from_form);
                if let Some(edit) = edit {
                    self.state.form_state = FormState::FormEdit(edit);
                    self.navigate(View::FormEdit, ViewParams::for_form(&form_id));
                }
            }
            KeyCode::Char('p') => self.toggle_publish(&form_id),
            KeyCode::Char('y') => self.copy_share_link(&form_id),
            KeyCode::Char('v') => self.navigate(View::Preview, ViewParams::for_form(&form_id)),
            KeyCode::Char('u') => {
                self.navigate(View::Submissions, ViewParams::for_form(&form_id));
            }
            KeyCode::Esc | KeyCode::Backspace => {
                self.dispatch(StoreCommand::SetCurrentForm { form_id: None });
                self.state.editor.reset();
                self.go_back();
            }
            _ => {}
        }
    }

    /// Move the selected question up or down one slot
    fn move_selected_question(&mut self, form_id: &str, delta: isize) {
        let index = self.state.editor.selected_question;
        let snapshot = self.store.form(form_id).and_then(|form| {
            form.questions
                .get(index)
                .map(|question| (question.id.clone(), form.questions.len()))
        });
        let Some((question_id, count)) = snapshot else {
            return;
        };
        let Some(target) = index.checked_add_signed(delta) else {
            return;
        };
        let to_index = target.min(count.saturating_sub(1));
        if to_index == index {
            return;
        }
        self.dispatch(StoreCommand::MoveQuestion {
            form_id: form_id.to_string(),
            question_id,
            to_index,
        });
        self.state.editor.selected_question = to_index;
    }

    fn open_question_edit(&mut self, form_id: &str) {
        let edit = self
            .store
            .form(form_id)
            .and_then(|form| form.questions.get(self.state.editor.selected_question))
            .map(QuestionEditForm::from_question);
        if let Some(edit) = edit {
            let question_id = edit.question_id.clone();
            self.state.form_state = FormState::QuestionEdit(edit);
            self.navigate(
                View::QuestionEdit,
                ViewParams {
                    form_id: Some(form_id.to_string()),
                    question_id: Some(question_id),
                },
            );
        }
    }

    fn toggle_publish(&mut self, form_id: &str) {
        let Some(is_published) = self.store.form(form_id).map(|form| form.is_published) else {
            return;
        };
        if is_published {
            self.dispatch(StoreCommand::UnpublishForm {
                form_id: form_id.to_string(),
            });
            self.status_message = Some("Form unpublished".to_string());
        } else {
            self.dispatch(StoreCommand::PublishForm {
                form_id: form_id.to_string(),
            });
            self.status_message = Some(format!("Published at {}", self.share_link(form_id)));
        }
    }

    fn copy_share_link(&mut self, form_id: &str) {
        let is_published = self
            .store
            .form(form_id)
            .map(|form| form.is_published)
            .unwrap_or(false);
        if !is_published {
            self.status_message = Some("Publish the form to get a share link".to_string());
            return;
        }
        let link = self.share_link(form_id);
        match self.copy_to_clipboard(&link) {
            Ok(()) => self.status_message = Some("Link copied!".to_string()),
            Err(e) => {
                tracing::warn!("clipboard copy failed: {e:#}");
                // No clipboard available: show the link itself instead
                self.status_message = Some(link);
            }
        }
    }

    /// Handle keys in the question edit page
    fn handle_question_edit_key(&mut self, key: KeyEvent) {
        let on_required = matches!(
            &self.state.form_state,
            FormState::QuestionEdit(form) if form.is_required_field_active()
        );

        match key.code {
            KeyCode::Tab => self.state.form_state.next_field(),
            KeyCode::BackTab => self.state.form_state.prev_field(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.save_question_edit();
            }
            KeyCode::Char('o') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                if let FormState::QuestionEdit(form) = &mut self.state.form_state {
                    form.add_option();
                }
            }
            KeyCode::Char(' ') if on_required => {
                if let FormState::QuestionEdit(form) = &mut self.state.form_state {
                    form.required.toggle();
                }
            }
            KeyCode::Enter => self.save_question_edit(),
            KeyCode::Esc => {
                self.state.form_state = FormState::None;
                self.go_back();
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.state.form_state.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form_state.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    fn save_question_edit(&mut self) {
        let FormState::QuestionEdit(form) = &self.state.form_state else {
            return;
        };
        let question_id = form.question_id.clone();
        let patch = form.to_patch();
        let Some(form_id) = self.state.view_params.form_id.clone() else {
            return;
        };
        self.state.form_state = FormState::None;
        self.dispatch(StoreCommand::UpdateQuestion {
            form_id,
            question_id,
            patch,
        });
        self.status_message = Some("Question saved".to_string());
        self.go_back();
    }

    /// Handle keys in the preview
    fn handle_preview_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::Char('d') | KeyCode::PageDown => self.state.scroll_down_page(),
            KeyCode::Char('u') | KeyCode::PageUp => self.state.scroll_up_page(),
            KeyCode::Char('f') => {
                if let Some(form_id) = self.state.view_params.form_id.clone() {
                    self.start_submit(&form_id);
                }
            }
            KeyCode::Esc | KeyCode::Backspace => self.go_back(),
            _ => {}
        }
    }

    /// Handle keys in the submit flow
    fn handle_submit_key(&mut self, key: KeyEvent) {
        self.submit_error = None;

        if key.code == KeyCode::Esc {
            self.state.submit = None;
            self.go_back();
            return;
        }

        let submitted = self
            .state
            .submit
            .as_ref()
            .map(|flow| flow.is_submitted())
            .unwrap_or(false);
        if submitted {
            // Terminal phase: only the exit keys do anything
            if matches!(key.code, KeyCode::Enter | KeyCode::Backspace) {
                self.state.submit = None;
                self.go_back();
            }
            return;
        }

        // Snapshot the form; the flow needs it for every operation
        let form = self
            .state
            .submit
            .as_ref()
            .and_then(|flow| self.store.form(flow.form_id()))
            .cloned();
        let Some(form) = form else {
            // The form disappeared mid-fill
            self.state.submit = None;
            self.go_back();
            return;
        };
        let Some(flow) = self.state.submit.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Char(' ') => {
                // Space chooses the highlighted option on selects and
                // types a space everywhere else
                flow.input_char(&form, ' ');
                flow.select_option(&form);
            }
            KeyCode::Char(c) => flow.input_char(&form, c),
            KeyCode::Backspace => flow.backspace(&form),
            KeyCode::Up => flow.option_up(),
            KeyCode::Down => flow.option_down(&form),
            KeyCode::Left => flow.previous(&form),
            KeyCode::Enter | KeyCode::Right => {
                let result = flow.advance(&form);
                match result {
                    Ok(Some(response)) => {
                        self.dispatch(StoreCommand::SubmitResponse { response });
                        self.status_message = Some("Response submitted".to_string());
                    }
                    Ok(None) => {}
                    Err(block) => self.submit_error = Some(block.to_string()),
                }
            }
            _ => {}
        }
    }

    /// Handle keys in the submissions view
    fn handle_submissions_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::Char('d') | KeyCode::PageDown => self.state.scroll_down_page(),
            KeyCode::Char('u') | KeyCode::PageUp => self.state.scroll_up_page(),
            KeyCode::Esc | KeyCode::Backspace => self.go_back(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        match self.state.current_view {
            View::FormList => self.handle_list_mouse(mouse),
            View::FormEditor => self.handle_editor_mouse(mouse),
            View::QuestionEdit => self.handle_form_mouse(mouse),
            View::Preview | View::Submissions => self.handle_scroll_mouse(mouse),
            _ => {}
        }
        Ok(())
    }

    fn handle_list_mouse(&mut self, mouse: MouseEvent) {
        let total = self.store.forms().len();
        match mouse.kind {
            MouseEventKind::ScrollUp => self.state.move_selection_up(),
            MouseEventKind::ScrollDown => self.state.move_selection_down(total),
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.list_form_at_row(mouse.row) {
                    self.state.selected_index = index;
                }
            }
            _ => {}
        }
    }

    /// Map a terminal row in the forms list back to a form index.
    /// The list draws a 2-row sort header, a border row, then one row
    /// per item, where items include the two section header rows.
    fn list_form_at_row(&self, row: u16) -> Option<usize> {
        let published_count = self.store.published_forms().len();
        let total = self.store.forms().len();
        if total == 0 {
            return None;
        }

        let terminal_height = self.terminal_size.map(|(h, _)| h).unwrap_or(24) as usize;
        const ITEMS_START: usize = 3;
        // Bottom border and status bar close off the list area
        let visible = terminal_height.saturating_sub(ITEMS_START + 2);
        if (row as usize) >= terminal_height.saturating_sub(2) {
            return None;
        }

        // The list keeps the selected row visible; recompute its offset
        let selected_row = if self.state.selected_index < published_count {
            1 + self.state.selected_index
        } else {
            2 + self.state.selected_index
        };
        let offset = (selected_row + 1).saturating_sub(visible);

        let clicked_row = (row as usize).checked_sub(ITEMS_START)? + offset;
        if clicked_row == 0 {
            return None; // "Published" section header
        }
        if clicked_row <= published_count {
            return Some(clicked_row - 1);
        }
        if clicked_row == published_count + 1 {
            return None; // "Drafts" section header
        }
        let index = clicked_row - 2;
        (index < total).then_some(index)
    }

    fn handle_editor_mouse(&mut self, mouse: MouseEvent) {
        let Some(form_id) = self.state.view_params.form_id.clone() else {
            return;
        };
        let question_count = question_count_of(&self.store, &form_id);
        let content = self.content_area();

        match mouse.kind {
            MouseEventKind::ScrollUp => self.state.editor.select_up(),
            MouseEventKind::ScrollDown => self.state.editor.select_down(question_count),
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = crate::ui::editor::card_at_position(
                    content,
                    self.state.editor.selected_question,
                    question_count,
                    mouse.column,
                    mouse.row,
                );
                if let Some(index) = hit {
                    self.state.editor.selected_question = index;
                    let question_id = self
                        .store
                        .form(&form_id)
                        .and_then(|form| form.questions.get(index))
                        .map(|question| question.id.clone());
                    if let Some(question_id) = question_id {
                        self.state.editor.drag = Some(DragState {
                            question_id,
                            hover_index: None,
                        });
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.state.editor.drag.is_some() {
                    let hover = crate::ui::editor::card_at_position(
                        content,
                        self.state.editor.selected_question,
                        question_count,
                        mouse.column,
                        mouse.row,
                    );
                    if let Some(drag) = self.state.editor.drag.as_mut() {
                        drag.hover_index = hover;
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(drag) = self.state.editor.drag.take() {
                    if let Some(to_index) = drag.hover_index {
                        let from = self.store.form(&form_id).and_then(|form| {
                            form.questions
                                .iter()
                                .position(|question| question.id == drag.question_id)
                        });
                        if from.is_some_and(|from| from != to_index) {
                            self.dispatch(StoreCommand::MoveQuestion {
                                form_id,
                                question_id: drag.question_id,
                                to_index,
                            });
                            self.state.editor.selected_question = to_index;
                        }
                    }
                }
            }
            _ => {}
        }
    }

    /// Click-to-focus for the question edit page, which stacks 3-row
    /// fields from the top margin
    fn handle_form_mouse(&mut self, mouse: MouseEvent) {
        const FIELD_HEIGHT: u16 = 3;
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let field_index = (mouse.row.saturating_sub(1) / FIELD_HEIGHT) as usize;
            if let FormState::QuestionEdit(form) = &mut self.state.form_state {
                if field_index < form.field_count() {
                    form.set_active_field(field_index);
                }
            }
        }
    }

    fn handle_scroll_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.state.scroll_up(),
            MouseEventKind::ScrollDown => self.state.scroll_down(),
            _ => {}
        }
    }

    /// The drawable region above the status bar
    fn content_area(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        Rect {
            x: 0,
            y: 0,
            width,
            height: height.saturating_sub(1),
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

fn question_count_of(store: &FormStore, form_id: &str) -> usize {
    store
        .form(form_id)
        .map(|form| form.questions.len())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Form as FormFields;
    use crate::store::model::{AnswerValue, QuestionKind};

    fn test_app() -> App {
        App::with_config(TuiConfig::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(key(code)).unwrap();
    }

    fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        app.handle_key(KeyEvent::new(code, modifiers)).unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// App with one form containing a question per given kind
    fn seeded_app(kinds: &[QuestionKind]) -> (App, String) {
        let mut app = test_app();
        app.store.dispatch(StoreCommand::CreateForm {
            title: "Survey".to_string(),
            description: String::new(),
        });
        let form_id = app.store.forms()[0].id.clone();
        for kind in kinds {
            app.store.dispatch(StoreCommand::AddQuestion {
                form_id: form_id.clone(),
            });
            let question_id = app
                .store
                .form(&form_id)
                .unwrap()
                .questions
                .last()
                .unwrap()
                .id
                .clone();
            app.store.dispatch(StoreCommand::ChangeQuestionKind {
                form_id: form_id.clone(),
                question_id,
                kind: *kind,
            });
        }
        // Tests drive from the list, so clear the current-form pointer
        app.store
            .dispatch(StoreCommand::SetCurrentForm { form_id: None });
        (app, form_id)
    }

    fn question_ids(app: &App, form_id: &str) -> Vec<String> {
        app.store
            .form(form_id)
            .unwrap()
            .questions
            .iter()
            .map(|q| q.id.clone())
            .collect()
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_navigate_saves_history() {
            let mut app = test_app();
            app.navigate(View::Preview, ViewParams::for_form("f-1"));
            assert_eq!(app.state.current_view, View::Preview);
            assert_eq!(app.state.view_history.len(), 1);
            assert_eq!(app.state.view_history[0].0, View::FormList);
        }

        #[test]
        fn test_go_back_restores_previous_view() {
            let mut app = test_app();
            app.navigate(View::Preview, ViewParams::for_form("f-1"));
            app.go_back();
            assert_eq!(app.state.current_view, View::FormList);
            assert!(app.state.view_history.is_empty());
        }

        #[test]
        fn test_go_back_skips_form_views() {
            let mut app = test_app();
            app.navigate(View::FormEditor, ViewParams::for_form("f-1"));
            app.navigate(View::QuestionEdit, ViewParams::for_form("f-1"));
            app.go_back();
            assert_eq!(app.state.current_view, View::FormEditor);
        }

        #[test]
        fn test_go_back_with_empty_history_lands_on_list() {
            let mut app = test_app();
            app.state.current_view = View::Submit;
            app.go_back();
            assert_eq!(app.state.current_view, View::FormList);
        }
    }

    mod form_list_keys {
        use super::*;

        #[test]
        fn test_new_form_key_opens_create_page() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('n'));
            assert_eq!(app.state.current_view, View::FormCreate);
            assert!(matches!(app.state.form_state, FormState::FormCreate(_)));
        }

        #[test]
        fn test_create_form_lands_in_editor() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('n'));
            type_str(&mut app, "Customer Survey");
            press(&mut app, KeyCode::Enter);

            assert_eq!(app.state.current_view, View::FormEditor);
            assert_eq!(app.store.forms().len(), 1);
            assert_eq!(app.store.forms()[0].title, "Customer Survey");
            assert!(app.store.current_form().is_some());
        }

        #[test]
        fn test_create_via_buttons_row() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('n'));
            type_str(&mut app, "Feedback");
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Tab);
            // Default button is Create
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.store.forms().len(), 1);
        }

        #[test]
        fn test_blank_title_is_refused() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('n'));
            press(&mut app, KeyCode::Enter);

            assert_eq!(app.state.current_view, View::FormCreate);
            assert!(app.store.forms().is_empty());
            assert!(app.status_message.is_some());
        }

        #[test]
        fn test_cancel_button_discards_form() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('n'));
            type_str(&mut app, "Discarded");
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Left);
            press(&mut app, KeyCode::Enter);

            assert_eq!(app.state.current_view, View::FormList);
            assert!(app.store.forms().is_empty());
        }

        #[test]
        fn test_enter_opens_editor_with_current_form() {
            let (mut app, form_id) = seeded_app(&[]);
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.current_view, View::FormEditor);
            assert_eq!(app.store.current_form_id(), Some(form_id.as_str()));
        }

        #[test]
        fn test_delete_dialog_confirms() {
            let (mut app, _) = seeded_app(&[]);
            press(&mut app, KeyCode::Char('d'));
            assert!(app.state.pending_delete.is_some());

            // Toggle from Cancel to Delete, then confirm
            press(&mut app, KeyCode::Up);
            press(&mut app, KeyCode::Enter);
            assert!(app.state.pending_delete.is_none());
            assert!(app.store.forms().is_empty());
        }

        #[test]
        fn test_delete_dialog_defaults_to_cancel() {
            let (mut app, _) = seeded_app(&[]);
            press(&mut app, KeyCode::Char('d'));
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.store.forms().len(), 1);
        }

        #[test]
        fn test_delete_dialog_escape_cancels() {
            let (mut app, _) = seeded_app(&[]);
            press(&mut app, KeyCode::Char('d'));
            press(&mut app, KeyCode::Esc);
            assert!(app.state.pending_delete.is_none());
            assert_eq!(app.store.forms().len(), 1);
        }
    }

    mod editor_keys {
        use super::*;

        fn open_editor(app: &mut App) {
            press(app, KeyCode::Enter);
            assert_eq!(app.state.current_view, View::FormEditor);
        }

        #[test]
        fn test_add_question_selects_it() {
            let (mut app, form_id) = seeded_app(&[]);
            open_editor(&mut app);
            press(&mut app, KeyCode::Char('a'));
            press(&mut app, KeyCode::Char('a'));

            let form = app.store.form(&form_id).unwrap();
            assert_eq!(form.questions.len(), 2);
            assert_eq!(app.state.editor.selected_question, 1);
        }

        #[test]
        fn test_required_toggle() {
            let (mut app, form_id) = seeded_app(&[QuestionKind::ShortAnswer]);
            open_editor(&mut app);
            press(&mut app, KeyCode::Char('r'));
            assert!(app.store.form(&form_id).unwrap().questions[0].required);
            press(&mut app, KeyCode::Char('r'));
            assert!(!app.store.form(&form_id).unwrap().questions[0].required);
        }

        #[test]
        fn test_move_question_down() {
            let (mut app, form_id) =
                seeded_app(&[QuestionKind::ShortAnswer, QuestionKind::Number]);
            let before = question_ids(&app, &form_id);
            open_editor(&mut app);
            press(&mut app, KeyCode::Char('J'));

            let after = question_ids(&app, &form_id);
            assert_eq!(after, vec![before[1].clone(), before[0].clone()]);
            assert_eq!(app.state.editor.selected_question, 1);
        }

        #[test]
        fn test_move_question_with_shift_arrow() {
            let (mut app, form_id) =
                seeded_app(&[QuestionKind::ShortAnswer, QuestionKind::Number]);
            let before = question_ids(&app, &form_id);
            open_editor(&mut app);
            press(&mut app, KeyCode::Char('j'));
            press_with(&mut app, KeyCode::Up, KeyModifiers::SHIFT);

            let after = question_ids(&app, &form_id);
            assert_eq!(after, vec![before[1].clone(), before[0].clone()]);
            assert_eq!(app.state.editor.selected_question, 0);
        }

        #[test]
        fn test_move_first_question_up_is_noop() {
            let (mut app, form_id) =
                seeded_app(&[QuestionKind::ShortAnswer, QuestionKind::Number]);
            let before = question_ids(&app, &form_id);
            open_editor(&mut app);
            press(&mut app, KeyCode::Char('K'));
            assert_eq!(question_ids(&app, &form_id), before);
        }

        #[test]
        fn test_delete_question_clamps_selection() {
            let (mut app, form_id) =
                seeded_app(&[QuestionKind::ShortAnswer, QuestionKind::Number]);
            open_editor(&mut app);
            press(&mut app, KeyCode::Char('j'));
            press(&mut app, KeyCode::Char('d'));

            assert_eq!(app.store.form(&form_id).unwrap().questions.len(), 1);
            assert_eq!(app.state.editor.selected_question, 0);
        }

        #[test]
        fn test_kind_menu_changes_question_type() {
            let (mut app, form_id) = seeded_app(&[QuestionKind::ShortAnswer]);
            open_editor(&mut app);
            press(&mut app, KeyCode::Char('t'));
            assert!(app.state.editor.kind_menu.is_some());

            // Short answer -> long answer -> single select
            press(&mut app, KeyCode::Char('j'));
            press(&mut app, KeyCode::Char('j'));
            press(&mut app, KeyCode::Enter);

            assert!(app.state.editor.kind_menu.is_none());
            let question = &app.store.form(&form_id).unwrap().questions[0];
            assert_eq!(question.kind(), QuestionKind::SingleSelect);
        }

        #[test]
        fn test_kind_menu_escape_keeps_kind() {
            let (mut app, form_id) = seeded_app(&[QuestionKind::Number]);
            open_editor(&mut app);
            press(&mut app, KeyCode::Char('t'));
            press(&mut app, KeyCode::Char('k'));
            press(&mut app, KeyCode::Esc);

            let question = &app.store.form(&form_id).unwrap().questions[0];
            assert_eq!(question.kind(), QuestionKind::Number);
        }

        #[test]
        fn test_publish_toggle() {
            let (mut app, form_id) = seeded_app(&[]);
            open_editor(&mut app);
            press(&mut app, KeyCode::Char('p'));
            assert!(app.store.form(&form_id).unwrap().is_published);
            assert!(app
                .status_message
                .as_deref()
                .unwrap()
                .contains("/submit/"));

            press(&mut app, KeyCode::Char('p'));
            assert!(!app.store.form(&form_id).unwrap().is_published);
        }

        #[test]
        fn test_escape_clears_current_form() {
            let (mut app, _) = seeded_app(&[]);
            open_editor(&mut app);
            press(&mut app, KeyCode::Esc);
            assert_eq!(app.state.current_view, View::FormList);
            assert!(app.store.current_form_id().is_none());
        }
    }

    mod question_edit_keys {
        use super::*;

        fn open_question_edit(app: &mut App) {
            press(app, KeyCode::Enter); // list -> editor
            press(app, KeyCode::Enter); // editor -> question edit
            assert_eq!(app.state.current_view, View::QuestionEdit);
        }

        #[test]
        fn test_edit_and_save_title() {
            let (mut app, form_id) = seeded_app(&[QuestionKind::ShortAnswer]);
            open_question_edit(&mut app);
            type_str(&mut app, "Your name?");
            press_with(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

            assert_eq!(app.state.current_view, View::FormEditor);
            let question = &app.store.form(&form_id).unwrap().questions[0];
            assert_eq!(question.title, "Your name?");
        }

        #[test]
        fn test_space_toggles_required_field() {
            let (mut app, form_id) = seeded_app(&[QuestionKind::Url]);
            open_question_edit(&mut app);
            press(&mut app, KeyCode::Tab); // to the required toggle
            press(&mut app, KeyCode::Char(' '));
            press_with(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

            assert!(app.store.form(&form_id).unwrap().questions[0].required);
        }

        #[test]
        fn test_add_option_shortcut() {
            let (mut app, form_id) = seeded_app(&[QuestionKind::SingleSelect]);
            open_question_edit(&mut app);
            press_with(&mut app, KeyCode::Char('o'), crate::platform::COPY_MODIFIER);
            type_str(&mut app, "Yes");
            press_with(&mut app, KeyCode::Char('o'), crate::platform::COPY_MODIFIER);
            type_str(&mut app, "No");
            press_with(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

            let question = &app.store.form(&form_id).unwrap().questions[0];
            match &question.input {
                crate::store::model::QuestionInput::SingleSelect { options } => {
                    assert_eq!(options, &vec!["Yes".to_string(), "No".to_string()]);
                }
                other => panic!("expected single select, got {:?}", other),
            }
        }

        #[test]
        fn test_enter_saves() {
            let (mut app, form_id) = seeded_app(&[QuestionKind::ShortAnswer]);
            open_question_edit(&mut app);
            type_str(&mut app, "Email");
            press(&mut app, KeyCode::Enter);
            assert_eq!(
                app.store.form(&form_id).unwrap().questions[0].title,
                "Email"
            );
        }

        #[test]
        fn test_escape_discards_edits() {
            let (mut app, form_id) = seeded_app(&[QuestionKind::ShortAnswer]);
            open_question_edit(&mut app);
            type_str(&mut app, "Discarded");
            press(&mut app, KeyCode::Esc);

            assert_eq!(app.state.current_view, View::FormEditor);
            assert_eq!(app.store.form(&form_id).unwrap().questions[0].title, "");
        }

        #[test]
        fn test_number_bounds_save() {
            let (mut app, form_id) = seeded_app(&[QuestionKind::Number]);
            open_question_edit(&mut app);
            press(&mut app, KeyCode::Tab); // required
            press(&mut app, KeyCode::Tab); // min
            if let FormState::QuestionEdit(form) = &mut app.state.form_state {
                form.get_active_field_mut().clear();
            }
            type_str(&mut app, "5");
            press(&mut app, KeyCode::Tab); // max
            if let FormState::QuestionEdit(form) = &mut app.state.form_state {
                form.get_active_field_mut().clear();
            }
            type_str(&mut app, "10");
            press_with(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

            let question = &app.store.form(&form_id).unwrap().questions[0];
            match &question.input {
                crate::store::model::QuestionInput::Number { min, max } => {
                    assert_eq!((*min, *max), (5, 10));
                }
                other => panic!("expected number input, got {:?}", other),
            }
        }
    }

    mod submit_keys {
        use super::*;

        fn require_first_question(app: &mut App, form_id: &str) {
            let question_id = app.store.form(form_id).unwrap().questions[0].id.clone();
            app.store.dispatch(StoreCommand::UpdateQuestion {
                form_id: form_id.to_string(),
                question_id,
                patch: QuestionPatch {
                    required: Some(true),
                    ..QuestionPatch::default()
                },
            });
        }

        #[test]
        fn test_fill_and_submit() {
            let (mut app, form_id) = seeded_app(&[QuestionKind::ShortAnswer]);
            press(&mut app, KeyCode::Char('f'));
            assert_eq!(app.state.current_view, View::Submit);

            type_str(&mut app, "hello");
            press(&mut app, KeyCode::Enter);

            assert!(app.state.submit.as_ref().unwrap().is_submitted());
            assert_eq!(app.store.responses_for(&form_id).len(), 1);

            press(&mut app, KeyCode::Esc);
            assert!(app.state.submit.is_none());
            assert_eq!(app.state.current_view, View::FormList);
        }

        #[test]
        fn test_required_question_blocks_advance() {
            let (mut app, form_id) = seeded_app(&[QuestionKind::ShortAnswer]);
            require_first_question(&mut app, &form_id);

            press(&mut app, KeyCode::Char('f'));
            press(&mut app, KeyCode::Enter);

            assert!(app.submit_error.is_some());
            assert!(app.store.responses_for(&form_id).is_empty());
            assert_eq!(app.state.submit.as_ref().unwrap().step(), 0);
        }

        #[test]
        fn test_number_answers_are_typed() {
            let (mut app, form_id) = seeded_app(&[QuestionKind::Number]);
            press(&mut app, KeyCode::Char('f'));
            type_str(&mut app, "42");
            press(&mut app, KeyCode::Enter);

            let responses = app.store.responses_for(&form_id);
            assert_eq!(responses.len(), 1);
            let question_id = &app.store.form(&form_id).unwrap().questions[0].id;
            assert_eq!(
                responses[0].answer(question_id),
                Some(&AnswerValue::Number(42))
            );
        }

        #[test]
        fn test_select_option_and_submit() {
            let (mut app, form_id) = seeded_app(&[QuestionKind::SingleSelect]);
            let question_id = app.store.form(&form_id).unwrap().questions[0].id.clone();
            app.store.dispatch(StoreCommand::UpdateQuestion {
                form_id: form_id.clone(),
                question_id: question_id.clone(),
                patch: QuestionPatch {
                    options: Some(vec!["Red".to_string(), "Blue".to_string()]),
                    ..QuestionPatch::default()
                },
            });

            press(&mut app, KeyCode::Char('f'));
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Char(' '));
            press(&mut app, KeyCode::Enter);

            let responses = app.store.responses_for(&form_id);
            assert_eq!(
                responses[0].answer(&question_id),
                Some(&AnswerValue::Text("Blue".to_string()))
            );
        }

        #[test]
        fn test_escape_abandons_flow() {
            let (mut app, form_id) = seeded_app(&[QuestionKind::ShortAnswer]);
            press(&mut app, KeyCode::Char('f'));
            type_str(&mut app, "half-finished");
            press(&mut app, KeyCode::Esc);

            assert!(app.state.submit.is_none());
            assert!(app.store.responses_for(&form_id).is_empty());
        }

        #[test]
        fn test_left_goes_to_previous_question() {
            let (mut app, _) =
                seeded_app(&[QuestionKind::ShortAnswer, QuestionKind::ShortAnswer]);
            press(&mut app, KeyCode::Char('f'));
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.submit.as_ref().unwrap().step(), 1);
            press(&mut app, KeyCode::Left);
            assert_eq!(app.state.submit.as_ref().unwrap().step(), 0);
        }
    }

    mod mouse_handling {
        use super::*;

        #[test]
        fn test_drag_reorders_questions() {
            let (mut app, form_id) = seeded_app(&[
                QuestionKind::ShortAnswer,
                QuestionKind::Number,
                QuestionKind::Url,
            ]);
            let before = question_ids(&app, &form_id);
            press(&mut app, KeyCode::Enter);
            app.terminal_size = Some((24, 80));

            // Cards start below the 5-row header and the list border:
            // question 0 covers rows 6-8, question 1 rows 9-11, ...
            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 2, 9))
                .unwrap();
            assert_eq!(app.state.editor.selected_question, 1);
            assert!(app.state.editor.drag.is_some());

            app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 2, 12))
                .unwrap();
            assert_eq!(
                app.state.editor.drag.as_ref().unwrap().hover_index,
                Some(2)
            );

            app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 2, 12))
                .unwrap();
            let after = question_ids(&app, &form_id);
            assert_eq!(
                after,
                vec![before[0].clone(), before[2].clone(), before[1].clone()]
            );
            assert!(app.state.editor.drag.is_none());
            assert_eq!(app.state.editor.selected_question, 2);
        }

        #[test]
        fn test_drop_outside_cards_is_noop() {
            let (mut app, form_id) =
                seeded_app(&[QuestionKind::ShortAnswer, QuestionKind::Number]);
            let before = question_ids(&app, &form_id);
            press(&mut app, KeyCode::Enter);
            app.terminal_size = Some((24, 80));

            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 2, 6))
                .unwrap();
            app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 2, 20))
                .unwrap();
            app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 2, 20))
                .unwrap();

            assert_eq!(question_ids(&app, &form_id), before);
        }

        #[test]
        fn test_list_click_selects_form() {
            let (mut app, _) = seeded_app(&[]);
            app.store.dispatch(StoreCommand::CreateForm {
                title: "Second".to_string(),
                description: String::new(),
            });
            app.store
                .dispatch(StoreCommand::SetCurrentForm { form_id: None });
            app.terminal_size = Some((24, 80));

            // Rows: 3 = Published header, 4 = Drafts header, 5..6 forms
            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 2, 6))
                .unwrap();
            assert_eq!(app.state.selected_index, 1);
        }

        #[test]
        fn test_list_click_on_header_is_ignored() {
            let (mut app, _) = seeded_app(&[]);
            app.terminal_size = Some((24, 80));
            app.state.selected_index = 0;

            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 2, 4))
                .unwrap();
            assert_eq!(app.state.selected_index, 0);
        }

        #[test]
        fn test_scroll_wheel_moves_list_selection() {
            let (mut app, _) = seeded_app(&[]);
            app.store.dispatch(StoreCommand::CreateForm {
                title: "Second".to_string(),
                description: String::new(),
            });
            app.store
                .dispatch(StoreCommand::SetCurrentForm { form_id: None });

            app.handle_mouse(mouse(MouseEventKind::ScrollDown, 0, 0)).unwrap();
            assert_eq!(app.state.selected_index, 1);
            app.handle_mouse(mouse(MouseEventKind::ScrollUp, 0, 0)).unwrap();
            assert_eq!(app.state.selected_index, 0);
        }

        #[test]
        fn test_question_edit_click_focuses_field() {
            let (mut app, _) = seeded_app(&[QuestionKind::Number]);
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Enter);
            app.terminal_size = Some((24, 80));

            // Third field (min) starts at row 7
            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 2, 7))
                .unwrap();
            if let FormState::QuestionEdit(form) = &app.state.form_state {
                assert_eq!(form.active_field(), 2);
            } else {
                panic!("expected question edit form state");
            }
        }
    }

    mod store_event_reactions {
        use super::*;

        #[test]
        fn test_deleting_last_form_resets_selection() {
            let (mut app, _) = seeded_app(&[]);
            app.state.selected_index = 0;
            press(&mut app, KeyCode::Char('d'));
            press(&mut app, KeyCode::Up);
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.selected_index, 0);
            assert!(app.store.forms().is_empty());
        }

        #[test]
        fn test_selection_clamps_after_form_delete() {
            let (mut app, _) = seeded_app(&[]);
            app.store.dispatch(StoreCommand::CreateForm {
                title: "Second".to_string(),
                description: String::new(),
            });
            app.store
                .dispatch(StoreCommand::SetCurrentForm { form_id: None });
            app.state.selected_index = 1;

            press(&mut app, KeyCode::Char('d'));
            press(&mut app, KeyCode::Up);
            press(&mut app, KeyCode::Enter);

            assert_eq!(app.store.forms().len(), 1);
            assert_eq!(app.state.selected_index, 0);
        }
    }
}
