//! Controller view that forwards every change to the UI thread.

use client_core::ContactView;
use crossbeam_channel::{Sender, TrySendError};
use shared::domain::{ContactRow, FormMode, Toast};

use crate::controller::events::UiEvent;

#[derive(Clone)]
pub struct ChannelView {
    ui_tx: Sender<UiEvent>,
}

impl ChannelView {
    pub fn new(ui_tx: Sender<UiEvent>) -> Self {
        Self { ui_tx }
    }

    fn emit(&self, event: UiEvent) {
        match self.ui_tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => tracing::warn!("ui event queue full; dropping event"),
            Err(TrySendError::Disconnected(_)) => {
                tracing::debug!("ui event receiver gone; dropping event")
            }
        }
    }
}

impl ContactView for ChannelView {
    /// Blocks for queue room; row replacements are never dropped.
    fn render(&mut self, rows: Vec<ContactRow>) {
        if self.ui_tx.send(UiEvent::RowsReplaced(rows)).is_err() {
            tracing::debug!("ui event receiver gone; dropping rows");
        }
    }

    fn notify(&mut self, toast: Toast) {
        self.emit(UiEvent::Toast(toast));
    }

    fn set_confirmation_open(&mut self, open: bool) {
        self.emit(UiEvent::ConfirmationOpen(open));
    }

    fn set_form_mode(&mut self, mode: FormMode) {
        self.emit(UiEvent::FormModeChanged(mode));
    }
}
