//! Form domain layer
//!
//! Type-safe input handling for the create/edit pages.

mod field;
mod form_state;

pub use field::{FieldValue, FormField};
pub use form_state::{Form, FormCreateForm, FormEditForm, FormState, QuestionEditForm};
