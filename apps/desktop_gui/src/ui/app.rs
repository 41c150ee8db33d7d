use std::time::{Duration, Instant};

use client_core::UiSession;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{ContactId, FormMode, ToastLevel, TABLE_HEADERS};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::TableState;
use crate::ui::forms::{AddForm, UpdateForm};

const IDLE_REPAINT: Duration = Duration::from_millis(100);

pub struct PhoneBookApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: TableState,
    session: UiSession,
    add_form: AddForm,
    update_form: UpdateForm,
    search_input: String,
}

impl PhoneBookApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            state: TableState::default(),
            session: UiSession::default(),
            add_form: AddForm::default(),
            update_form: UpdateForm::default(),
            search_input: String::new(),
        };
        app.dispatch(BackendCommand::LoadAll);
        app
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        if let Err(err) = dispatch_backend_command(&self.cmd_tx, cmd) {
            tracing::warn!("{}", err.message());
            self.state.status = err.status_text();
        }
    }

    fn toggle_form_mode(&mut self, mode: FormMode) {
        self.session.toggle_form_mode(&mut self.state, mode);
    }

    fn request_delete(&mut self, id: ContactId) {
        self.session.request_delete(&mut self.state, id);
    }

    fn answer_confirmation(&mut self, confirmed: bool) {
        if !confirmed {
            self.session.cancel_delete(&mut self.state);
            return;
        }
        if let Some(id) = self.session.take_confirmed_delete(&mut self.state) {
            self.dispatch(BackendCommand::DeleteContact { id });
        }
    }

    fn process_ui_events(&mut self) {
        let now = Instant::now();
        while let Ok(event) = self.ui_rx.try_recv() {
            self.state.apply(event, now);
        }
        self.state.expire_toasts(now);
    }

    fn show_toolbar(&mut self, ui: &mut egui::Ui) {
        let mut commands = Vec::new();
        let mut toggled = None;
        ui.horizontal(|ui| {
            let mut selected = self.state.form_mode;
            for mode in [FormMode::Add, FormMode::Update] {
                ui.selectable_value(&mut selected, mode, mode.label());
            }
            if selected != self.state.form_mode {
                toggled = Some(selected);
            }

            ui.separator();
            ui.label("Search by contact:");
            let response = ui.text_edit_singleline(&mut self.search_input);
            let enter_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Search").clicked() || enter_pressed {
                commands.push(BackendCommand::Search {
                    query: self.search_input.clone(),
                });
            }
        });
        if let Some(mode) = toggled {
            self.toggle_form_mode(mode);
        }
        for cmd in commands {
            self.dispatch(cmd);
        }
    }

    fn show_forms(&mut self, ui: &mut egui::Ui) {
        let mut submitted = None;
        if self.state.add_form_visible() {
            ui.heading("Add contact");
            egui::Grid::new("add_contact_form")
                .num_columns(2)
                .show(ui, |ui| {
                    labeled_input(ui, "Contact", &mut self.add_form.contact);
                    labeled_input(ui, "Name", &mut self.add_form.name);
                    labeled_input(ui, "Address", &mut self.add_form.address);
                    labeled_input(ui, "City", &mut self.add_form.city);
                });
            ui.horizontal(|ui| {
                if ui.button("Add").clicked() {
                    submitted = Some(BackendCommand::AddContact(self.add_form.to_new_contact()));
                }
                if ui.button("Clear").clicked() {
                    self.add_form.clear();
                }
            });
        } else if self.state.update_form_visible() {
            ui.heading("Update contact");
            egui::Grid::new("update_contact_form")
                .num_columns(2)
                .show(ui, |ui| {
                    labeled_input(ui, "Id", &mut self.update_form.id);
                    labeled_input(ui, "Contact", &mut self.update_form.contact);
                    labeled_input(ui, "Name", &mut self.update_form.name);
                    labeled_input(ui, "Address", &mut self.update_form.address);
                    labeled_input(ui, "City", &mut self.update_form.city);
                });
            ui.horizontal(|ui| {
                if ui.button("Update").clicked() {
                    submitted = Some(BackendCommand::UpdateContact(
                        self.update_form.to_update_fields(),
                    ));
                }
                if ui.button("Clear").clicked() {
                    self.update_form.clear();
                }
            });
        }
        if let Some(cmd) = submitted {
            self.dispatch(cmd);
        }
    }

    fn show_table(&mut self, ui: &mut egui::Ui) {
        let mut delete_requests = Vec::new();
        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("contact_table")
                .striped(true)
                .num_columns(TABLE_HEADERS.len() + 1)
                .show(ui, |ui| {
                    for header in TABLE_HEADERS {
                        ui.strong(header);
                    }
                    ui.label("");
                    ui.end_row();

                    for row in &self.state.rows {
                        for cell in row.cells() {
                            ui.label(cell);
                        }
                        if ui.button("Delete").clicked() {
                            delete_requests.push(row.delete_target());
                        }
                        ui.end_row();
                    }
                });
        });
        for id in delete_requests {
            self.request_delete(id);
        }
    }

    fn show_confirmation_dialog(&mut self, ctx: &egui::Context) {
        if !self.state.confirmation_open {
            return;
        }
        let mut answer = None;
        egui::Window::new("Confirm delete")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Are you sure you want to delete this contact?");
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        answer = Some(true);
                    }
                    if ui.button("No").clicked() {
                        answer = Some(false);
                    }
                });
            });
        if let Some(confirmed) = answer {
            self.answer_confirmation(confirmed);
        }
    }

    fn show_toasts(&self, ctx: &egui::Context) {
        if self.state.toasts.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_TOP, [-12.0, 12.0])
            .show(ctx, |ui| {
                for active in &self.state.toasts {
                    let color = match active.toast.level {
                        ToastLevel::Success => egui::Color32::from_rgb(46, 160, 67),
                        ToastLevel::Error => egui::Color32::from_rgb(218, 54, 51),
                    };
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.colored_label(color, active.toast.title);
                        ui.label(active.toast.message.as_str());
                    });
                }
            });
    }
}

fn labeled_input(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.text_edit_singleline(value);
    ui.end_row();
}

impl eframe::App for PhoneBookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.show_toolbar(ui));
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.state.status.as_str());
        });
        egui::SidePanel::left("forms")
            .resizable(false)
            .show(ctx, |ui| self.show_forms(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.show_table(ui));

        self.show_confirmation_dialog(ctx);
        self.show_toasts(ctx);

        let repaint_in = self
            .state
            .next_toast_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .map_or(IDLE_REPAINT, |until| until.min(IDLE_REPAINT));
        ctx.request_repaint_after(repaint_in);
    }
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
