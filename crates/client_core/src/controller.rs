//! Contact table controller: reconciles the rendered table with server state
//! after every user action.

use shared::{
    domain::{Contact, ContactId, ContactRow, FormMode, Toast},
    protocol::{ContactUpdate, NewContact},
};
use tracing::debug;

use crate::{workflow, PhoneBookApi};

/// View elements the controller drives. Implementations are resolved once and
/// handed to the controller at construction.
pub trait ContactView {
    /// Replace the whole table body with `rows`, in order.
    fn render(&mut self, rows: Vec<ContactRow>);
    fn notify(&mut self, toast: Toast);
    fn set_confirmation_open(&mut self, open: bool);
    /// Show exactly one of the add/update forms and mark its toggle active.
    fn set_form_mode(&mut self, mode: FormMode);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded,
    Failed,
    /// Nothing to do, e.g. confirming with no pending delete.
    Skipped,
}

impl ActionOutcome {
    pub fn is_failure(self) -> bool {
        self == ActionOutcome::Failed
    }
}

/// Raw update-form values, forwarded without validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateFields {
    pub id: String,
    pub contact: String,
    pub name: String,
    pub address: String,
    pub city: String,
}

impl From<UpdateFields> for ContactUpdate {
    fn from(fields: UpdateFields) -> Self {
        ContactUpdate {
            id: fields.id,
            contact: fields.contact,
            name: fields.name,
            address: fields.address,
            city: fields.city,
        }
    }
}

/// Local session state: the pending delete id and the visible form. None of
/// its transitions touch the network.
#[derive(Debug, Default)]
pub struct UiSession {
    pending_delete: Option<ContactId>,
    form_mode: FormMode,
}

impl UiSession {
    pub fn pending_delete(&self) -> Option<ContactId> {
        self.pending_delete
    }

    pub fn form_mode(&self) -> FormMode {
        self.form_mode
    }

    /// Last request wins if one is already pending.
    pub fn request_delete<V: ContactView + ?Sized>(&mut self, view: &mut V, id: ContactId) {
        debug!(%id, "delete requested");
        self.pending_delete = Some(id);
        view.set_confirmation_open(true);
    }

    /// Close the dialog and hand back the id to delete, if any.
    pub fn take_confirmed_delete<V: ContactView + ?Sized>(
        &mut self,
        view: &mut V,
    ) -> Option<ContactId> {
        let pending = self.pending_delete.take();
        view.set_confirmation_open(false);
        pending
    }

    pub fn cancel_delete<V: ContactView + ?Sized>(&mut self, view: &mut V) {
        self.pending_delete = None;
        view.set_confirmation_open(false);
    }

    pub fn toggle_form_mode<V: ContactView + ?Sized>(&mut self, view: &mut V, mode: FormMode) {
        self.form_mode = mode;
        view.set_form_mode(mode);
    }
}

pub struct ContactTableController<A, V> {
    api: A,
    view: V,
    session: UiSession,
}

impl<A: PhoneBookApi, V: ContactView> ContactTableController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            session: UiSession::default(),
        }
    }

    pub fn pending_delete(&self) -> Option<ContactId> {
        self.session.pending_delete()
    }

    pub fn form_mode(&self) -> FormMode {
        self.session.form_mode()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub async fn load_all(&mut self) -> ActionOutcome {
        workflow::load_all(&self.api, &mut self.view).await
    }

    pub fn render_rows(&mut self, contacts: Vec<Contact>) {
        workflow::render_rows(&mut self.view, contacts);
    }

    pub async fn add_contact(&mut self, fields: NewContact) -> ActionOutcome {
        workflow::add_contact(&self.api, &mut self.view, fields).await
    }

    pub async fn update_contact(&mut self, fields: UpdateFields) -> ActionOutcome {
        workflow::update_contact(&self.api, &mut self.view, fields).await
    }

    pub async fn search_by_contact(&mut self, query: &str) -> ActionOutcome {
        workflow::search_by_contact(&self.api, &mut self.view, query).await
    }

    pub fn request_delete(&mut self, id: ContactId) {
        self.session.request_delete(&mut self.view, id);
    }

    /// The dialog closes and the pending id is cleared whatever the outcome.
    pub async fn confirm_delete(&mut self) -> ActionOutcome {
        match self.session.take_confirmed_delete(&mut self.view) {
            Some(id) => workflow::delete_contact(&self.api, &mut self.view, id).await,
            None => ActionOutcome::Skipped,
        }
    }

    pub fn cancel_delete(&mut self) {
        self.session.cancel_delete(&mut self.view);
    }

    pub fn toggle_form_mode(&mut self, mode: FormMode) {
        self.session.toggle_form_mode(&mut self.view, mode);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
