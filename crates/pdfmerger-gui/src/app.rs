//! The Simple PDF Merger window.
//!
//! Widgets never mutate state while the frame is being laid out. They push
//! an [`Action`] instead, and the queued actions are dispatched to the
//! controller once the frame is built.

use eframe::egui;
use pdfmerger::merge::LopdfMerger;
use pdfmerger::picker::{FilePicker, Notifier};
use pdfmerger::{CompressionLevel, Config, MergeController};

use crate::about;

const PLACEHOLDER: &str = "Click \"Add PDF\" to select PDFs to merge.";

/// A user intent emitted by a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Merge,
    Select(usize),
    ShowAbout,
    Exit,
}

/// Application state for the main window.
pub struct MergerApp<P, N> {
    controller: MergeController<P, N>,
    compression: CompressionLevel,
    show_about: bool,
    about_text: String,
}

impl<P: FilePicker, N: Notifier> MergerApp<P, N> {
    pub fn new(config: Config, picker: P, notifier: N) -> Self {
        let mut controller = MergeController::new(picker, notifier);
        for path in config.inputs {
            controller.push(path);
        }

        Self {
            controller,
            compression: config.compression,
            show_about: false,
            about_text: about::current_about_text(),
        }
    }

    /// Apply one action. Returns true when the window should close.
    pub fn dispatch(&mut self, action: Action) -> bool {
        log::debug!("Dispatching {action:?}");
        match action {
            Action::Add => {
                self.controller.add();
            }
            Action::Remove => {
                // Failures are already shown to the user by the controller.
                let _ = self.controller.remove();
            }
            Action::Merge => {
                let _ = self
                    .controller
                    .merge(LopdfMerger::with_compression(self.compression));
            }
            Action::Select(index) => self.controller.select(Some(index)),
            Action::ShowAbout => self.show_about = true,
            Action::Exit => return true,
        }
        false
    }

    fn menu_bar(ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    actions.push(Action::Exit);
                    ui.close_menu();
                }
            });
            ui.menu_button("Help", |ui| {
                if ui.button("About this program").clicked() {
                    actions.push(Action::ShowAbout);
                    ui.close_menu();
                }
            });
        });
    }

    fn toolbar(&self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        let states = self.controller.button_states();
        ui.horizontal(|ui| {
            if ui.button("Add PDF").clicked() {
                actions.push(Action::Add);
            }
            if ui
                .add_enabled(states.remove_enabled, egui::Button::new("Remove PDF"))
                .clicked()
            {
                actions.push(Action::Remove);
            }
            if ui
                .add_enabled(states.merge_enabled, egui::Button::new("Merge PDFs"))
                .clicked()
            {
                actions.push(Action::Merge);
            }
        });
    }

    /// The list view. Entries are shown in merge order.
    fn queue_list(&self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        let can_remove = self.controller.can_remove_selection();
        let queue = self.controller.queue();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if queue.is_empty() {
                    ui.centered_and_justified(|ui| {
                        let response =
                            ui.add(egui::Label::new(PLACEHOLDER).sense(egui::Sense::click()));
                        context_menu(&response, can_remove, actions);
                    });
                    return;
                }

                for (index, path) in queue.iter().enumerate() {
                    let selected = self.controller.selected() == Some(index);
                    let response = ui.add_sized(
                        [ui.available_width(), 0.0],
                        egui::SelectableLabel::new(selected, path.display().to_string()),
                    );
                    if response.clicked() || response.secondary_clicked() {
                        actions.push(Action::Select(index));
                    }
                    context_menu(&response, can_remove, actions);
                }
            });
    }
}

/// Right-click menu shared by every row of the list.
fn context_menu(response: &egui::Response, can_remove: bool, actions: &mut Vec<Action>) {
    response.context_menu(|ui| {
        if ui.button("Add PDF").clicked() {
            actions.push(Action::Add);
            ui.close_menu();
        }
        if ui
            .add_enabled(can_remove, egui::Button::new("Remove PDF"))
            .clicked()
        {
            actions.push(Action::Remove);
            ui.close_menu();
        }
    });
}

impl<P: FilePicker, N: Notifier> eframe::App for MergerApp<P, N> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            Self::menu_bar(ui, &mut actions);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.toolbar(ui, &mut actions);
            ui.add_space(5.0);
            self.queue_list(ui, &mut actions);
        });

        if self.show_about {
            egui::Window::new(format!("{} - About", pdfmerger::APP_TITLE))
                .open(&mut self.show_about)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.add_space(10.0);
                    ui.label(&self.about_text);
                });
        }

        for action in actions {
            if self.dispatch(action) {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}
