//! Blocking acknowledgment dialog for the success/error operations.

use eframe::egui;

use crate::options::{AlertOptions, Icon};
use crate::ui::theme::{icon_glyph, PromptTheme};

/// Self-contained success/error dialog state.
pub struct AlertDialog {
    /// Whether the dialog is visible
    pub open: bool,
    /// Success or Error, set by the operation that opened it
    pub icon: Icon,
    title: String,
    message: String,
    footer: String,
}

impl AlertDialog {
    /// Create a success-styled dialog from its options.
    pub fn success(options: AlertOptions) -> Self {
        Self::styled(Icon::Success, options)
    }

    /// Create an error-styled dialog from its options.
    pub fn error(options: AlertOptions) -> Self {
        Self::styled(Icon::Error, options)
    }

    fn styled(icon: Icon, options: AlertOptions) -> Self {
        Self {
            open: true,
            icon,
            title: options.title,
            message: options.message,
            footer: options.footer,
        }
    }

    /// Check if the dialog is open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Render the dialog over a click-swallowing backdrop.
    /// Returns true if the dialog is still open.
    pub fn render(&mut self, ctx: &egui::Context, theme: &PromptTheme) -> bool {
        if !self.open {
            return false;
        }

        render_backdrop(ctx, theme);

        let mut still_open = true;
        let mut acknowledged = false;

        egui::Window::new(egui::RichText::new(&self.title).strong())
            .id(egui::Id::new("prompt_alert_dialog"))
            .open(&mut still_open)
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(icon_glyph(self.icon))
                            .color(theme.icon_color(self.icon))
                            .size(40.0),
                    );
                    ui.add_space(8.0);

                    if !self.message.is_empty() {
                        ui.label(egui::RichText::new(&self.message).color(theme.text_primary));
                        ui.add_space(8.0);
                    }

                    if ui.button("OK").clicked() {
                        acknowledged = true;
                    }

                    if !self.footer.is_empty() {
                        ui.add_space(6.0);
                        ui.separator();
                        ui.label(
                            egui::RichText::new(&self.footer)
                                .small()
                                .color(theme.text_muted),
                        );
                    }
                });

                // Also acknowledge on Enter, close on Escape
                if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    acknowledged = true;
                }
                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    acknowledged = true;
                }
            });

        if !still_open || acknowledged {
            self.open = false;
        }

        self.open
    }
}

/// Full-screen tinted area that swallows clicks while a blocking dialog is up.
fn render_backdrop(ctx: &egui::Context, theme: &PromptTheme) {
    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new("prompt_alert_backdrop"))
        .order(egui::Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            // Sense::click() consumes the press so nothing behind the dialog reacts
            let _ = ui.allocate_response(screen.size(), egui::Sense::click());
            ui.painter().rect_filled(screen, 0.0, theme.backdrop);
        });
}
