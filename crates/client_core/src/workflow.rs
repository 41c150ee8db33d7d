//! Network workflows that reconcile the table with the server. They borrow the
//! api and view only for their own duration, so hosts may run several at once.

use shared::{
    domain::{Contact, ContactId, ContactRow, Toast},
    protocol::{ContactUpdate, NewContact},
};
use tracing::{debug, error, info, warn};

use crate::{
    controller::{ActionOutcome, ContactView, UpdateFields},
    PhoneBookApi,
};

pub fn render_rows<V: ContactView + ?Sized>(view: &mut V, contacts: Vec<Contact>) {
    let rows = contacts.into_iter().map(ContactRow::new).collect();
    view.render(rows);
}

/// Fetch every contact and replace the table, ordered by id. Failures are
/// logged only and leave the table as it was.
pub async fn load_all<A, V>(api: &A, view: &mut V) -> ActionOutcome
where
    A: PhoneBookApi + ?Sized,
    V: ContactView + ?Sized,
{
    match api.get_all().await {
        Ok(mut contacts) => {
            contacts.sort_by_key(|contact| contact.id);
            info!(count = contacts.len(), "loaded contacts");
            render_rows(view, contacts);
            ActionOutcome::Succeeded
        }
        Err(err) => {
            error!(operation = "load_all", "failed to load contacts: {err}");
            ActionOutcome::Failed
        }
    }
}

/// An empty query reloads everything. Any failure, including not-found,
/// leaves the table empty.
pub async fn search_by_contact<A, V>(api: &A, view: &mut V, query: &str) -> ActionOutcome
where
    A: PhoneBookApi + ?Sized,
    V: ContactView + ?Sized,
{
    if query.is_empty() {
        return load_all(api, view).await;
    }

    match api.get_by_contact(query).await {
        Ok(contact) => {
            render_rows(view, vec![contact]);
            ActionOutcome::Succeeded
        }
        Err(err) => {
            if err.is_not_found() {
                warn!(operation = "search", query, "contact is not found");
            } else {
                error!(operation = "search", query, "search failed: {err}");
            }
            render_rows(view, Vec::new());
            ActionOutcome::Failed
        }
    }
}

pub async fn add_contact<A, V>(api: &A, view: &mut V, fields: NewContact) -> ActionOutcome
where
    A: PhoneBookApi + ?Sized,
    V: ContactView + ?Sized,
{
    debug!(?fields, "adding contact");
    match api.add_contact(&fields).await {
        Ok(()) => {
            view.notify(Toast::success("Contact added!"));
            load_all(api, view).await;
            ActionOutcome::Succeeded
        }
        Err(err) => {
            error!(operation = "add_contact", "{err}");
            view.notify(Toast::error("Failed to add contact."));
            ActionOutcome::Failed
        }
    }
}

pub async fn update_contact<A, V>(api: &A, view: &mut V, fields: UpdateFields) -> ActionOutcome
where
    A: PhoneBookApi + ?Sized,
    V: ContactView + ?Sized,
{
    let update = ContactUpdate::from(fields);
    debug!(?update, "updating contact");
    match api.update_contact(&update).await {
        Ok(()) => {
            info!("updated contact");
            view.notify(Toast::success("Contact updated!"));
            load_all(api, view).await;
            ActionOutcome::Succeeded
        }
        Err(err) => {
            error!(operation = "update_contact", "{err}");
            view.notify(Toast::error("Failed to update contact."));
            ActionOutcome::Failed
        }
    }
}

/// Delete an already-confirmed id. The dialog is the caller's concern.
pub async fn delete_contact<A, V>(api: &A, view: &mut V, id: ContactId) -> ActionOutcome
where
    A: PhoneBookApi + ?Sized,
    V: ContactView + ?Sized,
{
    match api.delete_contact(id).await {
        Ok(()) => {
            info!(%id, "deleted contact");
            view.notify(Toast::success("Contact deleted!"));
            load_all(api, view).await;
            ActionOutcome::Succeeded
        }
        Err(err) => {
            error!(operation = "delete_contact", %id, "{err}");
            view.notify(Toast::error("Failed to delete contact."));
            ActionOutcome::Failed
        }
    }
}
