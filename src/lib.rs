//! prompt-ui library.
//!
//! An egui facade for toasts, success/error dialogs, and a confirmation
//! dialog with two input fields. Create one [`Prompt`] per application and
//! render it every frame.

pub mod config;
pub mod options;
pub mod outcome;
pub mod prompt;
pub mod ui;
pub mod validation;

#[cfg(test)]
mod integration_tests;

pub use options::{
    AlertOptions, CustomOptions, Icon, LifecycleHook, ResultCallback, ToastOptions, ToastPosition,
};
pub use outcome::{CustomResult, DismissReason, Outcome};
pub use prompt::Prompt;
