//! Custom confirmation dialog - confirm/cancel over two named input fields.
//!
//! Unlike the alert dialog this one has no backdrop. It owns the two
//! single-line inputs with the fixed widget ids `start` and `end`, whose
//! contents are captured only when the confirm button resolves the dialog.

use eframe::egui;

use crate::options::{CustomOptions, Icon, LifecycleHook};
use crate::outcome::{DismissReason, Outcome};
use crate::ui::theme::{icon_glyph, PromptTheme};

/// Self-contained confirmation dialog state.
pub struct CustomDialog {
    icon: Option<Icon>,
    title: String,
    message: String,
    confirm_button: bool,
    cancel_button: bool,
    will_open: Option<LifecycleHook>,
    did_open: Option<LifecycleHook>,
    /// Contents of the `start` input field
    pub start_input: String,
    /// Contents of the `end` input field
    pub end_input: String,
    opened: bool,
}

impl CustomDialog {
    /// Create a dialog from its options. The result callback is not part of
    /// the dialog; the manager holds it and applies the resolution policy.
    pub fn new(options: CustomOptions) -> Self {
        Self {
            icon: options.icon,
            title: options.title,
            message: options.message,
            confirm_button: options.confirm_button,
            cancel_button: options.cancel_button,
            will_open: options.will_open,
            did_open: options.did_open,
            start_input: String::new(),
            end_input: String::new(),
            opened: false,
        }
    }

    /// Snapshot of the two input fields, in `[start, end]` order.
    pub fn read_inputs(&self) -> [String; 2] {
        [self.start_input.clone(), self.end_input.clone()]
    }

    /// Render the dialog.
    ///
    /// Returns the outcome if the dialog resolved this frame, and whether it
    /// is still open. Confirm captures the inputs; cancel, the close control,
    /// and Escape each dismiss with their own reason.
    pub fn render(&mut self, ctx: &egui::Context, theme: &PromptTheme) -> (Option<Outcome>, bool) {
        // Fires just before the first visible frame
        if !self.opened {
            if let Some(hook) = self.will_open.take() {
                hook();
            }
        }

        let mut outcome: Option<Outcome> = None;
        // Use separate bools to avoid borrow conflict with .open()
        let mut window_open = true;
        let mut should_close = false;

        egui::Window::new(egui::RichText::new(&self.title).strong())
            .id(egui::Id::new("prompt_custom_dialog"))
            .open(&mut window_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                if let Some(icon) = self.icon {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(icon_glyph(icon))
                                .color(theme.icon_color(icon))
                                .size(32.0),
                        );
                    });
                    ui.add_space(6.0);
                }

                if !self.message.is_empty() {
                    // Passed through verbatim
                    ui.label(egui::RichText::new(&self.message).color(theme.text_primary));
                    ui.add_space(8.0);
                }

                ui.horizontal(|ui| {
                    ui.label("Start:");
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.start_input)
                            .id(egui::Id::new("start"))
                            .desired_width(140.0),
                    );
                    if !self.opened {
                        response.request_focus();
                    }
                });
                ui.horizontal(|ui| {
                    ui.label("End:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.end_input)
                            .id(egui::Id::new("end"))
                            .desired_width(140.0),
                    );
                });

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if self.confirm_button && ui.button("Confirm").clicked() {
                        outcome = Some(Outcome::Confirmed(self.read_inputs()));
                        should_close = true;
                    }
                    if self.cancel_button && ui.button("Cancel").clicked() {
                        outcome = Some(Outcome::Dismissed(DismissReason::Cancel));
                        should_close = true;
                    }
                });

                // Close on Escape
                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    outcome = Some(Outcome::Dismissed(DismissReason::Esc));
                    should_close = true;
                }
            });

        // Fires just after the first visible frame
        if !self.opened {
            self.opened = true;
            if let Some(hook) = self.did_open.take() {
                hook();
            }
        }

        // The window's close control resolves without captured values
        if !window_open && outcome.is_none() {
            outcome = Some(Outcome::Dismissed(DismissReason::Close));
        }

        let still_open = window_open && !should_close;
        (outcome, still_open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_dialog_creation() {
        let dialog = CustomDialog::new(CustomOptions {
            title: "Confirm".to_string(),
            message: "Pick range".to_string(),
            ..Default::default()
        });
        assert_eq!(dialog.title, "Confirm");
        assert_eq!(dialog.message, "Pick range");
        assert!(dialog.confirm_button);
        assert!(dialog.cancel_button);
        assert!(!dialog.opened);
        assert_eq!(dialog.start_input, "");
        assert_eq!(dialog.end_input, "");
    }

    #[test]
    fn test_read_inputs_order() {
        let mut dialog = CustomDialog::new(CustomOptions::default());
        dialog.start_input = "2024-01-01".to_string();
        dialog.end_input = "2024-01-31".to_string();
        assert_eq!(
            dialog.read_inputs(),
            ["2024-01-01".to_string(), "2024-01-31".to_string()]
        );
    }

    #[test]
    fn test_button_visibility_flags() {
        let dialog = CustomDialog::new(CustomOptions {
            confirm_button: false,
            cancel_button: false,
            ..Default::default()
        });
        assert!(!dialog.confirm_button);
        assert!(!dialog.cancel_button);
    }
}
