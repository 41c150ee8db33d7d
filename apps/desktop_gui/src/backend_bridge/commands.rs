//! Network commands queued from UI to backend worker. Dialog and form state
//! never cross this queue.

use client_core::UpdateFields;
use shared::{domain::ContactId, protocol::NewContact};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    LoadAll,
    Search { query: String },
    AddContact(NewContact),
    UpdateContact(UpdateFields),
    /// Already confirmed on the UI thread.
    DeleteContact { id: ContactId },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadAll => "load_all",
            BackendCommand::Search { .. } => "search",
            BackendCommand::AddContact(_) => "add_contact",
            BackendCommand::UpdateContact(_) => "update_contact",
            BackendCommand::DeleteContact { .. } => "delete_contact",
        }
    }
}
