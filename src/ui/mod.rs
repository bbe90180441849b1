//! UI module for rendering the TUI

mod components;
pub mod editor;
mod forms;
mod forms_list;
mod layout;
mod preview;
mod submissions;
mod submit;
mod widgets;

pub use widgets::render_scrollable_list;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let content_area = layout::create_layout(area);

    // Draw main content based on current view
    match &app.state.current_view {
        View::FormList => forms_list::draw_list(frame, content_area, app),
        View::FormCreate => forms::draw_form_create(frame, content_area, app),
        View::FormEdit => forms::draw_form_edit(frame, content_area, app),
        View::FormEditor => editor::draw_editor(frame, content_area, app),
        View::QuestionEdit => forms::draw_question_edit(frame, content_area, app),
        View::Preview => preview::draw_preview(frame, content_area, app),
        View::Submit => submit::draw_submit(frame, content_area, app),
        View::Submissions => submissions::draw_submissions(frame, content_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Modal dialogs sit on top of everything
    if let Some(pending) = &app.state.pending_delete {
        components::render_confirm_dialog(frame, pending);
    }
}
