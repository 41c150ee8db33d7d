//! Backend-to-UI events and error modeling for the desktop GUI.

use shared::domain::{ContactRow, FormMode, Toast};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Info(String),
    Error(UiError),
    RowsReplaced(Vec<ContactRow>),
    Toast(Toast),
    ConfirmationOpen(bool),
    FormModeChanged(FormMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    CommandQueue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Status-line text for this error.
    pub fn status_text(&self) -> String {
        match self.context {
            UiErrorContext::BackendStartup => format!(
                "Backend unavailable; check the api url and relaunch: {}",
                self.message
            ),
            UiErrorContext::CommandQueue => self.message.clone(),
        }
    }
}
