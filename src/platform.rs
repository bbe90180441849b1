//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for copy/save shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Save shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SAVE_SHORTCUT: &str = "Ctrl+S";

/// Add-option shortcut display for the question editor
/// - macOS: "Cmd+O"
/// - Linux/Windows: "Ctrl+O"
#[cfg(target_os = "macos")]
pub const ADD_OPTION_SHORTCUT: &str = "Cmd+O";

#[cfg(not(target_os = "macos"))]
pub const ADD_OPTION_SHORTCUT: &str = "Ctrl+O";
