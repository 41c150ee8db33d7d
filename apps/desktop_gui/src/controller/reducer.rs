//! UI-thread state and the transitions backend events apply to it.

use std::time::{Duration, Instant};

use client_core::ContactView;
use shared::domain::{ContactRow, FormMode, Toast};

use crate::controller::events::UiEvent;

pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);
const MAX_VISIBLE_TOASTS: usize = 5;

#[derive(Debug, Clone)]
pub struct ActiveToast {
    pub toast: Toast,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct TableState {
    pub rows: Vec<ContactRow>,
    pub confirmation_open: bool,
    pub form_mode: FormMode,
    pub status: String,
    pub toasts: Vec<ActiveToast>,
}

impl TableState {
    pub fn apply(&mut self, event: UiEvent, now: Instant) {
        match event {
            UiEvent::Info(message) => self.status = message,
            UiEvent::Error(err) => self.status = err.status_text(),
            UiEvent::RowsReplaced(rows) => self.render(rows),
            UiEvent::Toast(toast) => self.push_toast(toast, now),
            UiEvent::ConfirmationOpen(open) => self.set_confirmation_open(open),
            UiEvent::FormModeChanged(mode) => self.set_form_mode(mode),
        }
    }

    fn push_toast(&mut self, toast: Toast, now: Instant) {
        if self.toasts.len() == MAX_VISIBLE_TOASTS {
            self.toasts.remove(0);
        }
        self.toasts.push(ActiveToast {
            toast,
            expires_at: now + TOAST_LIFETIME,
        });
    }

    pub fn expire_toasts(&mut self, now: Instant) {
        self.toasts.retain(|active| active.expires_at > now);
    }

    pub fn next_toast_deadline(&self) -> Option<Instant> {
        self.toasts.iter().map(|active| active.expires_at).min()
    }

    pub fn add_form_visible(&self) -> bool {
        self.form_mode == FormMode::Add
    }

    pub fn update_form_visible(&self) -> bool {
        self.form_mode == FormMode::Update
    }
}

/// Local dialog and form transitions land here directly, without a round trip
/// through the backend worker.
impl ContactView for TableState {
    fn render(&mut self, rows: Vec<ContactRow>) {
        self.rows = rows;
    }

    fn notify(&mut self, toast: Toast) {
        self.push_toast(toast, Instant::now());
    }

    fn set_confirmation_open(&mut self, open: bool) {
        self.confirmation_open = open;
    }

    fn set_form_mode(&mut self, mode: FormMode) {
        self.form_mode = mode;
    }
}
