//! Application state module

mod app_state;
mod editor;
mod forms;
mod submit;

pub use app_state::*;
pub use editor::*;
pub use forms::*;
pub use submit::*;
