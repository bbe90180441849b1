//! Question design surface state

use crate::store::model::QuestionKind;

/// Kind-select popup for the selected question
#[derive(Debug, Clone)]
pub struct KindMenu {
    pub question_id: String,
    pub selected: usize,
}

impl KindMenu {
    /// Open the menu with the question's current kind highlighted
    pub fn new(question_id: String, current: QuestionKind) -> Self {
        let selected = QuestionKind::ALL
            .iter()
            .position(|k| *k == current)
            .unwrap_or(0);
        Self {
            question_id,
            selected,
        }
    }

    pub fn select_next(&mut self) {
        if self.selected < QuestionKind::ALL.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn selected_kind(&self) -> QuestionKind {
        QuestionKind::ALL[self.selected]
    }
}

/// In-flight mouse drag of a question card
#[derive(Debug, Clone)]
pub struct DragState {
    pub question_id: String,
    /// Row the card would drop onto, updated while dragging
    pub hover_index: Option<usize>,
}

/// UI state for the question list in the form editor
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub selected_question: usize,
    pub kind_menu: Option<KindMenu>,
    pub drag: Option<DragState>,
}

impl EditorState {
    /// Move selection down within the question list
    pub fn select_down(&mut self, max: usize) {
        if max > 0 && self.selected_question < max - 1 {
            self.selected_question += 1;
        }
    }

    /// Move selection up within the question list
    pub fn select_up(&mut self) {
        if self.selected_question > 0 {
            self.selected_question -= 1;
        }
    }

    /// Keep the selection in range after questions are removed
    pub fn clamp_selection(&mut self, count: usize) {
        if count == 0 {
            self.selected_question = 0;
        } else if self.selected_question >= count {
            self.selected_question = count - 1;
        }
    }

    /// Drop any transient popup or drag state
    pub fn reset(&mut self) {
        self.selected_question = 0;
        self.kind_menu = None;
        self.drag = None;
    }
}
