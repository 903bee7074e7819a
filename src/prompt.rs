//! The prompt facade - one place to open and render every surface.
//!
//! `Prompt` is the crate's public entry point. Create one per application,
//! call the four operations from anywhere in the update loop, and call
//! [`Prompt::render`] once per frame.
//!
//! Uses the Option<Dialog> pattern where None = closed, Some = open.

use eframe::egui::Context;

use crate::options::{AlertOptions, CustomOptions, ResultCallback, ToastOptions};
use crate::outcome::dispatch_result;
use crate::ui::{render_toasts, AlertDialog, CustomDialog, PromptTheme, Toast};

/// Manages all prompt surfaces in one place.
pub struct Prompt {
    theme: PromptTheme,
    toasts: Vec<Toast>,
    alert: Option<AlertDialog>,
    custom: Option<CustomDialog>,
    /// Held outside the dialog so the resolution policy stays in one place
    custom_callback: Option<ResultCallback>,
}

impl Prompt {
    /// Create a prompt facade with the default (dark) theme.
    pub fn new() -> Self {
        Self::with_theme(PromptTheme::default())
    }

    /// Create a prompt facade with a specific theme.
    pub fn with_theme(theme: PromptTheme) -> Self {
        Self {
            theme,
            toasts: Vec::new(),
            alert: None,
            custom: None,
            custom_callback: None,
        }
    }

    /// Show an auto-dismissing toast notification.
    pub fn toast(&mut self, options: ToastOptions) {
        self.toasts.push(Toast::new(options));
    }

    /// Show a blocking success dialog.
    pub fn success(&mut self, options: AlertOptions) {
        self.alert = Some(AlertDialog::success(options));
    }

    /// Show a blocking error dialog.
    pub fn error(&mut self, options: AlertOptions) {
        self.alert = Some(AlertDialog::error(options));
    }

    /// Open the confirmation dialog.
    ///
    /// Opening a new one while another is pending replaces it; the replaced
    /// dialog never resolved, so its callback is never invoked.
    pub fn custom(&mut self, mut options: CustomOptions) {
        self.custom_callback = options.on_result.take();
        self.custom = Some(CustomDialog::new(options));
    }

    /// Number of live toasts.
    pub fn toast_count(&self) -> usize {
        self.toasts.len()
    }

    /// Whether a blocking or confirmation dialog is currently open.
    pub fn has_open_dialog(&self) -> bool {
        self.alert.is_some() || self.custom.is_some()
    }

    /// Render every open surface and resolve the confirmation dialog's
    /// callback when an outcome is produced. Call once per frame.
    pub fn render(&mut self, ctx: &Context) {
        render_toasts(ctx, &mut self.toasts, &self.theme);

        let mut close_alert = false;
        if let Some(ref mut dialog) = self.alert {
            if !dialog.render(ctx, &self.theme) {
                close_alert = true;
            }
        }
        if close_alert {
            self.alert = None;
        }

        let mut close_custom = false;
        if let Some(ref mut dialog) = self.custom {
            let (outcome, still_open) = dialog.render(ctx, &self.theme);
            self.custom_callback = dispatch_result(outcome, self.custom_callback.take());
            if !still_open {
                close_custom = true;
            }
        }
        if close_custom {
            self.custom = None;
            self.custom_callback = None;
        }
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new()
    }
}
