//! Rendering code for the prompt surfaces, one file per surface:
//! - `toast`: floating auto-dismissing notifications
//! - `alert`: blocking success/error dialog
//! - `custom`: confirmation dialog with the `start`/`end` inputs
//! - `theme`: semantic colors and icon glyphs

mod alert;
mod custom;
mod theme;
mod toast;

pub use alert::AlertDialog;
pub use custom::CustomDialog;
pub use theme::{icon_glyph, PromptTheme};
pub use toast::{render_toasts, Toast, TOAST_LIFETIME_MS};
