//! Semantic colors and icon glyphs shared by toasts and dialogs.

use eframe::egui::Color32;

use crate::options::Icon;

/// Color palette for the prompt surfaces.
#[derive(Clone, Debug)]
pub struct PromptTheme {
    /// Toast background.
    pub toast_fill: Color32,
    /// Modal backdrop tint.
    pub backdrop: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub info: Color32,
    pub question: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
}

impl PromptTheme {
    /// Dark palette, matching common desktop-chat semantics.
    pub fn dark() -> Self {
        Self {
            toast_fill: Color32::from_rgba_unmultiplied(30, 30, 30, 230),
            backdrop: Color32::from_black_alpha(130),
            success: Color32::from_rgb(67, 181, 129),
            warning: Color32::from_rgb(250, 166, 26),
            error: Color32::from_rgb(240, 71, 71),
            info: Color32::from_rgb(0, 175, 244),
            question: Color32::from_rgb(135, 140, 150),
            text_primary: Color32::WHITE,
            text_muted: Color32::from_rgb(114, 118, 125),
        }
    }

    /// Accent color for an icon.
    pub fn icon_color(&self, icon: Icon) -> Color32 {
        match icon {
            Icon::Success => self.success,
            Icon::Error => self.error,
            Icon::Warning => self.warning,
            Icon::Info => self.info,
            Icon::Question => self.question,
        }
    }
}

impl Default for PromptTheme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Glyph shown next to a message for the given icon.
pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Success => "✔",
        Icon::Error => "✘",
        Icon::Warning => "⚠",
        Icon::Info => "ℹ",
        Icon::Question => "?",
    }
}
