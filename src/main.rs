//! prompt-ui demo - an availability-search window exercising the facade.
//!
//! Mirrors the flow the facade was built for: a confirmation dialog asks for
//! a start/end date range, the result callback validates it, and the outcome
//! is reported through a success dialog, an error dialog, or a toast.

use std::sync::mpsc;

use eframe::egui;

use prompt_ui::config::{load_settings, save_settings, Settings};
use prompt_ui::validation::validate_date_range;
use prompt_ui::{
    AlertOptions, CustomOptions, CustomResult, Icon, Prompt, ToastOptions, ToastPosition,
};

struct DemoApp {
    prompt: Prompt,
    settings: Settings,
    /// Results flow back from the dialog callback through this channel
    result_tx: mpsc::Sender<CustomResult>,
    result_rx: mpsc::Receiver<CustomResult>,
}

impl DemoApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        Self {
            prompt: Prompt::new(),
            settings: load_settings().unwrap_or_default(),
            result_tx,
            result_rx,
        }
    }

    /// Open the date-range confirmation dialog.
    fn open_availability_dialog(&mut self) {
        let tx = self.result_tx.clone();
        self.prompt.custom(CustomOptions {
            icon: Some(Icon::Question),
            title: "Search Availability".to_string(),
            message: "Enter the dates you want to stay (YYYY-MM-DD)".to_string(),
            did_open: Some(Box::new(|| {
                eprintln!("availability dialog open");
            })),
            on_result: Some(Box::new(move |result| {
                let _ = tx.send(result);
            })),
            ..Default::default()
        });
    }

    /// Drain dialog results and turn them into follow-up prompts.
    fn process_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                CustomResult::Confirmed(values) => match validate_date_range(&values) {
                    Ok((start, end)) => {
                        let nights = (end - start).num_days().max(1);
                        self.settings.last_start = values[0].clone();
                        self.settings.last_end = values[1].clone();
                        if let Err(e) = save_settings(&self.settings) {
                            eprintln!("Failed to save settings: {}", e);
                        }
                        self.prompt.success(AlertOptions {
                            title: "Room is available!".to_string(),
                            message: format!(
                                "{} night(s), {} to {}",
                                nights,
                                start.format("%Y-%m-%d"),
                                end.format("%Y-%m-%d")
                            ),
                            footer: "Availability is not held until you book".to_string(),
                        });
                    }
                    Err(reason) => self.prompt.error(AlertOptions {
                        title: "Invalid dates".to_string(),
                        message: reason,
                        ..Default::default()
                    }),
                },
                CustomResult::Empty => self.prompt.error(AlertOptions {
                    title: "No dates received".to_string(),
                    message: "The dialog closed before any dates were captured".to_string(),
                    ..Default::default()
                }),
                CustomResult::Cancelled => self.prompt.toast(ToastOptions {
                    message: "Search cancelled".to_string(),
                    icon: Icon::Info,
                    position: self.settings.toast_position,
                }),
            }
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("prompt-ui demo");
            if !self.settings.last_start.is_empty() {
                ui.label(format!(
                    "Last search: {} to {}",
                    self.settings.last_start, self.settings.last_end
                ));
            }
            ui.separator();

            if ui.button("Check availability…").clicked() {
                self.open_availability_dialog();
            }
            if ui.button("Show toast").clicked() {
                self.prompt.toast(ToastOptions {
                    message: "Saved".to_string(),
                    position: self.settings.toast_position,
                    ..Default::default()
                });
            }
            if ui.button("Show success dialog").clicked() {
                self.prompt.success(AlertOptions {
                    title: "Done".to_string(),
                    message: "Everything went fine".to_string(),
                    ..Default::default()
                });
            }
            if ui.button("Show error dialog").clicked() {
                self.prompt.error(AlertOptions {
                    title: "Something broke".to_string(),
                    message: "The operation failed".to_string(),
                    footer: "Try again later".to_string(),
                });
            }

            ui.separator();

            let previous = self.settings.toast_position;
            egui::ComboBox::from_label("Toast position")
                .selected_text(self.settings.toast_position.label())
                .show_ui(ui, |ui| {
                    for position in ToastPosition::ALL {
                        ui.selectable_value(
                            &mut self.settings.toast_position,
                            position,
                            position.label(),
                        );
                    }
                });
            if self.settings.toast_position != previous {
                if let Err(e) = save_settings(&self.settings) {
                    eprintln!("Failed to save settings: {}", e);
                }
            }
        });

        self.process_results();
        self.prompt.render(ctx);
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 360.0])
            .with_min_inner_size([360.0, 280.0]),
        ..Default::default()
    };

    eframe::run_native(
        "prompt-ui demo",
        options,
        Box::new(|cc| Ok(Box::new(DemoApp::new(cc)))),
    )
}
