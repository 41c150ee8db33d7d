use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(ContactId);

/// A phone-book record as the server returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    /// Phone number.
    pub contact: String,
    pub name: String,
    pub address: String,
    pub city: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Add,
    Update,
}

impl FormMode {
    pub fn label(self) -> &'static str {
        match self {
            FormMode::Add => "Add",
            FormMode::Update => "Update",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: &'static str,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            title: "Success",
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            title: "Error",
            message: message.into(),
        }
    }
}

/// One rendered table row. The delete trigger is tagged with the row's id so
/// hosts dispatch on it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub contact: Contact,
}

impl ContactRow {
    pub fn new(contact: Contact) -> Self {
        Self { contact }
    }

    pub fn delete_target(&self) -> ContactId {
        self.contact.id
    }

    pub fn cells(&self) -> [String; 5] {
        [
            self.contact.id.to_string(),
            self.contact.contact.clone(),
            self.contact.name.clone(),
            self.contact.address.clone(),
            self.contact.city.clone(),
        ]
    }
}

pub const TABLE_HEADERS: [&str; 5] = ["Id", "Contact", "Name", "Address", "City"];
