//! Outcome types for the confirmation dialog.
//!
//! The dialog surface produces a tagged [`Outcome`]; the facade maps it onto the
//! caller's callback through [`dispatch_result`]. The mapping is deliberately a
//! value-definedness check rather than a button-identity check: a dismissal that
//! is not the cancel button (window close, Escape) carries no captured values
//! and yields [`CustomResult::Empty`], not [`CustomResult::Cancelled`].

use crate::options::ResultCallback;

/// How a dialog was closed without confirming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The cancel button.
    Cancel,
    /// The window's close control.
    Close,
    /// The Escape key.
    Esc,
}

/// What the confirmation dialog resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The confirm button was pressed; carries the `start`/`end` field
    /// contents captured at that moment.
    Confirmed([String; 2]),
    /// The dialog was dismissed without capturing the fields.
    Dismissed(DismissReason),
}

/// The shape in which the result callback is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomResult {
    /// Confirmed with the two captured input values.
    Confirmed([String; 2]),
    /// Resolved without captured values, but not via the cancel button.
    Empty,
    /// Dismissed via the cancel button.
    Cancelled,
}

/// Apply the resolution policy to a (possibly still pending) outcome.
///
/// Returns the callback unconsumed when there is no outcome yet, so the
/// dialog can hold onto it across frames. Once an outcome exists the
/// callback is invoked at most once and never returned.
pub fn dispatch_result(
    outcome: Option<Outcome>,
    on_result: Option<ResultCallback>,
) -> Option<ResultCallback> {
    let Some(outcome) = outcome else {
        return on_result;
    };

    if let Some(callback) = on_result {
        match outcome {
            Outcome::Confirmed(values) => callback(CustomResult::Confirmed(values)),
            Outcome::Dismissed(DismissReason::Cancel) => callback(CustomResult::Cancelled),
            Outcome::Dismissed(_) => callback(CustomResult::Empty),
        }
    }
    None
}
