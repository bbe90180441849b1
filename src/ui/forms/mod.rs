//! Form rendering module
//!
//! This module contains UI components for rendering form pages:
//! - `field_renderer`: Field rendering utilities
//! - `details_form`: Form create/edit pages
//! - `question_form`: Question edit page

mod details_form;
mod field_renderer;
mod question_form;

pub use details_form::{draw_create as draw_form_create, draw_edit as draw_form_edit};
pub use field_renderer::draw_field_with_value;
pub use question_form::draw as draw_question_edit;
