//! In-memory form store and domain model

pub mod model;

mod form_store;

pub use form_store::{FormPatch, FormStore, QuestionPatch, StoreCommand, StoreEvent};
