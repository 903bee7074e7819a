//! Configuration records for the prompt facade.
//!
//! Each facade operation takes one of these records. Every field has a
//! documented default, so callers fill in only what they need:
//!
//! ```ignore
//! prompt.toast(ToastOptions {
//!     message: "Saved".into(),
//!     ..Default::default()
//! });
//! ```

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::outcome::CustomResult;

/// Icon shown on toasts and dialogs.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Icon {
    #[default]
    Success,
    Error,
    Warning,
    Info,
    Question,
}

/// Screen anchor for toast notifications.
///
/// "Start" and "end" follow the left-to-right reading direction,
/// so `TopEnd` is the top-right corner.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToastPosition {
    Top,
    TopStart,
    #[default]
    TopEnd,
    Center,
    CenterStart,
    CenterEnd,
    Bottom,
    BottomStart,
    BottomEnd,
}

impl ToastPosition {
    /// Every anchor, in rendering order.
    pub const ALL: [ToastPosition; 9] = [
        ToastPosition::Top,
        ToastPosition::TopStart,
        ToastPosition::TopEnd,
        ToastPosition::Center,
        ToastPosition::CenterStart,
        ToastPosition::CenterEnd,
        ToastPosition::Bottom,
        ToastPosition::BottomStart,
        ToastPosition::BottomEnd,
    ];

    /// Short human-readable label, for settings UIs.
    pub fn label(self) -> &'static str {
        match self {
            ToastPosition::Top => "top",
            ToastPosition::TopStart => "top-start",
            ToastPosition::TopEnd => "top-end",
            ToastPosition::Center => "center",
            ToastPosition::CenterStart => "center-start",
            ToastPosition::CenterEnd => "center-end",
            ToastPosition::Bottom => "bottom",
            ToastPosition::BottomStart => "bottom-start",
            ToastPosition::BottomEnd => "bottom-end",
        }
    }

    /// Map to an egui anchor plus an inset away from the screen edge.
    pub fn anchor(self) -> (egui::Align2, egui::Vec2) {
        const INSET: f32 = 10.0;
        match self {
            ToastPosition::Top => (egui::Align2::CENTER_TOP, egui::vec2(0.0, INSET)),
            ToastPosition::TopStart => (egui::Align2::LEFT_TOP, egui::vec2(INSET, INSET)),
            ToastPosition::TopEnd => (egui::Align2::RIGHT_TOP, egui::vec2(-INSET, INSET)),
            ToastPosition::Center => (egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0)),
            ToastPosition::CenterStart => (egui::Align2::LEFT_CENTER, egui::vec2(INSET, 0.0)),
            ToastPosition::CenterEnd => (egui::Align2::RIGHT_CENTER, egui::vec2(-INSET, 0.0)),
            ToastPosition::Bottom => (egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -INSET)),
            ToastPosition::BottomStart => (egui::Align2::LEFT_BOTTOM, egui::vec2(INSET, -INSET)),
            ToastPosition::BottomEnd => (egui::Align2::RIGHT_BOTTOM, egui::vec2(-INSET, -INSET)),
        }
    }
}

/// Options for [`crate::Prompt::toast`].
///
/// Omitted fields default to an empty message, a success icon,
/// and the top-end anchor.
#[derive(Clone, Debug, Default)]
pub struct ToastOptions {
    pub message: String,
    pub icon: Icon,
    pub position: ToastPosition,
}

/// Options for [`crate::Prompt::success`] and [`crate::Prompt::error`].
///
/// All fields default to the empty string; empty title and footer
/// are simply not rendered.
#[derive(Clone, Debug, Default)]
pub struct AlertOptions {
    pub title: String,
    pub message: String,
    pub footer: String,
}

/// Lifecycle hook invoked at a fixed point in a dialog's open sequence.
pub type LifecycleHook = Box<dyn FnOnce() + Send>;

/// Callback receiving the confirmation dialog's result shape.
pub type ResultCallback = Box<dyn FnOnce(CustomResult) + Send>;

/// Options for [`crate::Prompt::custom`].
///
/// Both buttons are visible by default; all hooks are optional.
pub struct CustomOptions {
    pub icon: Option<Icon>,
    pub title: String,
    /// Dialog body, passed through verbatim.
    pub message: String,
    pub confirm_button: bool,
    pub cancel_button: bool,
    /// Fires just before the dialog's first frame.
    pub will_open: Option<LifecycleHook>,
    /// Fires just after the dialog's first frame.
    pub did_open: Option<LifecycleHook>,
    /// Receives the dialog's result; see [`CustomResult`] for the shapes.
    pub on_result: Option<ResultCallback>,
}

impl CustomOptions {
    /// Options with the documented defaults and both buttons shown.
    pub fn new() -> Self {
        Self {
            icon: None,
            title: String::new(),
            message: String::new(),
            confirm_button: true,
            cancel_button: true,
            will_open: None,
            did_open: None,
            on_result: None,
        }
    }
}

impl Default for CustomOptions {
    fn default() -> Self {
        Self::new()
    }
}
