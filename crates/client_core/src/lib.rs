//! Phone-book client core: the REST API seam, its reqwest implementation, and
//! the controller that keeps a contact table in sync with the server.

use async_trait::async_trait;
use shared::{
    domain::{Contact, ContactId},
    protocol::{ContactUpdate, NewContact},
};

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod workflow;

pub use client::PhoneBookClient;
pub use config::{load_settings, ClientSettings};
pub use controller::{ActionOutcome, ContactTableController, ContactView, UiSession, UpdateFields};
pub use error::PhoneBookError;

/// Remote phone-book operations. Each method applies that operation's success
/// criterion, so callers only see `Ok` or `Err`.
#[async_trait]
pub trait PhoneBookApi: Send + Sync {
    /// `GET /GetAll`, any 2xx with a JSON array.
    async fn get_all(&self) -> error::Result<Vec<Contact>>;
    /// `GET /GetByContact/{contact}`; 404 maps to [`PhoneBookError::NotFound`].
    async fn get_by_contact(&self, contact: &str) -> error::Result<Contact>;
    /// `POST /AddContact`, any 2xx with a JSON body.
    async fn add_contact(&self, contact: &NewContact) -> error::Result<()>;
    /// `PUT /UpdateContact`, exactly 204.
    async fn update_contact(&self, update: &ContactUpdate) -> error::Result<()>;
    /// `DELETE /DeleteContact/{id}`, exactly 204.
    async fn delete_contact(&self, id: ContactId) -> error::Result<()>;
}
