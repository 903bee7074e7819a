//! Toast notifications - floating auto-dismissing messages.
//!
//! Each toast lives for [`TOAST_LIFETIME_MS`] and shows a progress bar for
//! its remaining time. The countdown freezes while the pointer is over the
//! toast and resumes when it leaves. Toasts sharing an anchor stack in one
//! floating area.

use eframe::egui;

use crate::options::{Icon, ToastOptions, ToastPosition};
use crate::ui::theme::{icon_glyph, PromptTheme};

/// Auto-dismiss timer, in milliseconds.
pub const TOAST_LIFETIME_MS: f32 = 3000.0;

/// A single live toast.
pub struct Toast {
    pub message: String,
    pub icon: Icon,
    pub position: ToastPosition,
    remaining_ms: f32,
}

impl Toast {
    /// Create a toast with a full timer from its options.
    pub fn new(options: ToastOptions) -> Self {
        Self {
            message: options.message,
            icon: options.icon,
            position: options.position,
            remaining_ms: TOAST_LIFETIME_MS,
        }
    }

    /// Advance the countdown by one frame. A hovered toast does not age.
    pub fn tick(&mut self, dt_ms: f32, hovered: bool) {
        if !hovered {
            self.remaining_ms = (self.remaining_ms - dt_ms).max(0.0);
        }
    }

    /// Whether the timer has run out.
    pub fn expired(&self) -> bool {
        self.remaining_ms <= 0.0
    }

    /// Remaining lifetime as a 0..=1 fraction, for the progress bar.
    pub fn fraction_remaining(&self) -> f32 {
        (self.remaining_ms / TOAST_LIFETIME_MS).clamp(0.0, 1.0)
    }
}

/// Render all live toasts, age them, and drop the expired ones.
pub fn render_toasts(ctx: &egui::Context, toasts: &mut Vec<Toast>, theme: &PromptTheme) {
    if toasts.is_empty() {
        return;
    }

    let dt_ms = ctx.input(|i| i.stable_dt) * 1000.0;

    for (slot, position) in ToastPosition::ALL.iter().enumerate() {
        if !toasts.iter().any(|t| t.position == *position) {
            continue;
        }

        let (align, offset) = position.anchor();
        egui::Area::new(egui::Id::new(("prompt_toast_area", slot)))
            .anchor(align, offset)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in toasts.iter_mut().filter(|t| t.position == *position) {
                    let hovered = egui::Frame::new()
                        .fill(theme.toast_fill)
                        .corner_radius(6.0)
                        .inner_margin(egui::Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new(icon_glyph(toast.icon))
                                        .color(theme.icon_color(toast.icon))
                                        .strong(),
                                );
                                ui.label(
                                    egui::RichText::new(&toast.message)
                                        .color(theme.text_primary),
                                );
                            });
                            ui.add(
                                egui::ProgressBar::new(toast.fraction_remaining())
                                    .desired_width(180.0)
                                    .desired_height(3.0),
                            );
                            ui.ui_contains_pointer()
                        })
                        .inner;

                    toast.tick(dt_ms, hovered);
                    ui.add_space(4.0);
                }
            });
    }

    toasts.retain(|t| !t.expired());

    // Keep animating the countdown even without input events
    if !toasts.is_empty() {
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_starts_with_full_timer() {
        let toast = Toast::new(ToastOptions {
            message: "Saved".to_string(),
            ..Default::default()
        });
        assert_eq!(toast.message, "Saved");
        assert_eq!(toast.icon, Icon::Success);
        assert_eq!(toast.position, ToastPosition::TopEnd);
        assert!(!toast.expired());
        assert_eq!(toast.fraction_remaining(), 1.0);
    }

    #[test]
    fn test_toast_expires_after_lifetime() {
        let mut toast = Toast::new(ToastOptions::default());

        toast.tick(TOAST_LIFETIME_MS / 2.0, false);
        assert!(!toast.expired());
        assert!((toast.fraction_remaining() - 0.5).abs() < 1e-4);

        toast.tick(TOAST_LIFETIME_MS / 2.0, false);
        assert!(toast.expired());
        assert_eq!(toast.fraction_remaining(), 0.0);
    }

    #[test]
    fn test_hover_pauses_countdown() {
        let mut toast = Toast::new(ToastOptions::default());

        toast.tick(1000.0, false);
        let before = toast.fraction_remaining();

        // Hovered frames do not consume lifetime
        toast.tick(10_000.0, true);
        assert_eq!(toast.fraction_remaining(), before);

        // Resumes once the pointer leaves
        toast.tick(1000.0, false);
        assert!(toast.fraction_remaining() < before);
    }

    #[test]
    fn test_timer_never_goes_negative() {
        let mut toast = Toast::new(ToastOptions::default());
        toast.tick(TOAST_LIFETIME_MS * 10.0, false);
        assert_eq!(toast.fraction_remaining(), 0.0);
        assert!(toast.expired());
    }
}
