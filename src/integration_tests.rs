//! Integration tests for prompt-ui
//!
//! These tests exercise full workflows across the facade, outcome policy,
//! and validation modules, including headless egui frames for the parts
//! that need a rendering context.

use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::options::{CustomOptions, Icon, ResultCallback, ToastOptions, ToastPosition};
use crate::outcome::{dispatch_result, CustomResult, DismissReason, Outcome};
use crate::prompt::Prompt;
use crate::ui::CustomDialog;
use crate::validation::validate_date_range;

/// Callback that records every invocation shape it receives.
fn recording_callback() -> (ResultCallback, Arc<Mutex<Vec<CustomResult>>>) {
    let record = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&record);
    let callback: ResultCallback = Box::new(move |result| {
        sink.lock().unwrap().push(result);
    });
    (callback, record)
}

/// Full confirm flow: dates typed into the dialog reach the callback as a
/// tuple, and the tuple validates into the expected range.
#[test]
fn test_availability_confirm_flow() {
    let mut dialog = CustomDialog::new(CustomOptions {
        title: "Confirm".to_string(),
        message: "Pick range".to_string(),
        ..Default::default()
    });
    dialog.start_input = "2024-01-01".to_string();
    dialog.end_input = "2024-01-31".to_string();

    let (callback, record) = recording_callback();
    let outcome = Outcome::Confirmed(dialog.read_inputs());
    let leftover = dispatch_result(Some(outcome), Some(callback));
    assert!(leftover.is_none());

    let record = record.lock().unwrap();
    assert_eq!(
        record.as_slice(),
        [CustomResult::Confirmed([
            "2024-01-01".to_string(),
            "2024-01-31".to_string()
        ])]
    );

    let CustomResult::Confirmed(values) = &record[0] else {
        unreachable!();
    };
    let (start, end) = validate_date_range(values).unwrap();
    assert_eq!((end - start).num_days(), 30);
}

/// Cancel flow: the callback is invoked in the zero-argument shape.
#[test]
fn test_cancel_flow() {
    let (callback, record) = recording_callback();
    dispatch_result(
        Some(Outcome::Dismissed(DismissReason::Cancel)),
        Some(callback),
    );
    assert_eq!(record.lock().unwrap().as_slice(), [CustomResult::Cancelled]);
}

/// Non-cancel dismissals resolve without captured values, so the callback
/// receives the empty shape regardless of which path closed the dialog.
#[test]
fn test_close_and_escape_map_to_empty() {
    for reason in [DismissReason::Close, DismissReason::Esc] {
        let (callback, record) = recording_callback();
        dispatch_result(Some(Outcome::Dismissed(reason)), Some(callback));
        assert_eq!(record.lock().unwrap().as_slice(), [CustomResult::Empty]);
    }
}

/// A dialog that is rendered but not resolved must not invoke its callback.
#[test]
fn test_pending_dialog_never_invokes_callback() {
    let (callback, record) = recording_callback();

    let mut prompt = Prompt::new();
    prompt.custom(CustomOptions {
        title: "Confirm".to_string(),
        on_result: Some(callback),
        ..Default::default()
    });

    let ctx = egui::Context::default();
    for _ in 0..3 {
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            prompt.render(ctx);
        });
    }

    assert!(prompt.has_open_dialog());
    assert!(record.lock().unwrap().is_empty());
}

/// Lifecycle hooks fire around the first rendered frame, exactly once.
#[test]
fn test_lifecycle_hooks_fire_once() {
    let calls = Arc::new(Mutex::new(Vec::new()));

    let will = Arc::clone(&calls);
    let did = Arc::clone(&calls);
    let mut prompt = Prompt::new();
    prompt.custom(CustomOptions {
        will_open: Some(Box::new(move || will.lock().unwrap().push("will_open"))),
        did_open: Some(Box::new(move || did.lock().unwrap().push("did_open"))),
        ..Default::default()
    });

    // Opening alone fires nothing
    assert!(calls.lock().unwrap().is_empty());

    let ctx = egui::Context::default();
    for _ in 0..3 {
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            prompt.render(ctx);
        });
    }

    assert_eq!(calls.lock().unwrap().as_slice(), ["will_open", "did_open"]);
}

/// The "Saved" toast scenario: defaults fill in the icon and anchor, and the
/// toast drops out of the facade once its timer has fully elapsed.
#[test]
fn test_saved_toast_scenario() {
    let mut prompt = Prompt::new();
    prompt.toast(ToastOptions {
        message: "Saved".to_string(),
        ..Default::default()
    });
    assert_eq!(prompt.toast_count(), 1);
    assert!(!prompt.has_open_dialog());

    let ctx = egui::Context::default();
    // Advance the clock well past the 3000 ms lifetime, one 60 Hz frame at a
    // time so the frame delta stays at the predicted ~16.7 ms
    for frame in 1..=220 {
        let input = egui::RawInput {
            time: Some(frame as f64 / 60.0),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            prompt.render(ctx);
        });
    }

    assert_eq!(prompt.toast_count(), 0);
}

/// Every icon and anchor combination is accepted without touching dialogs.
#[test]
fn test_toasts_stack_across_positions() {
    let mut prompt = Prompt::new();
    for (i, position) in ToastPosition::ALL.into_iter().enumerate() {
        prompt.toast(ToastOptions {
            message: format!("toast {}", i),
            icon: Icon::Info,
            position,
        });
    }
    assert_eq!(prompt.toast_count(), 9);
    assert!(!prompt.has_open_dialog());
}
