use serde::{Deserialize, Serialize};

use crate::domain::ContactId;

/// Relative routes exposed by the phone-book service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRoute {
    GetAll,
    GetByContact(String),
    AddContact,
    UpdateContact,
    DeleteContact(ContactId),
}

impl ApiRoute {
    /// Path segments appended to the configured base URL. Segments are raw;
    /// callers percent-encode them.
    pub fn segments(&self) -> Vec<String> {
        match self {
            ApiRoute::GetAll => vec!["GetAll".to_string()],
            ApiRoute::GetByContact(contact) => {
                vec!["GetByContact".to_string(), contact.clone()]
            }
            ApiRoute::AddContact => vec!["AddContact".to_string()],
            ApiRoute::UpdateContact => vec!["UpdateContact".to_string()],
            ApiRoute::DeleteContact(id) => vec!["DeleteContact".to_string(), id.to_string()],
        }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            ApiRoute::GetAll => "get_all",
            ApiRoute::GetByContact(_) => "get_by_contact",
            ApiRoute::AddContact => "add_contact",
            ApiRoute::UpdateContact => "update_contact",
            ApiRoute::DeleteContact(_) => "delete_contact",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub contact: String,
    pub name: String,
    pub address: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactUpdate {
    /// Id text exactly as typed into the update form.
    pub id: String,
    pub contact: String,
    pub name: String,
    pub address: String,
    pub city: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_body_forwards_id_text_verbatim() {
        let body = ContactUpdate {
            id: " 12".into(),
            contact: "555-0100".into(),
            name: "Ada".into(),
            address: "1 Main St".into(),
            city: "Pune".into(),
        };
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json["id"], serde_json::json!(" 12"));
        assert_eq!(json["city"], "Pune");
    }

    #[test]
    fn contact_id_is_transparent_on_the_wire() {
        let contact: crate::domain::Contact = serde_json::from_str(
            r#"{"id":7,"contact":"555","name":"n","address":"a","city":"c"}"#,
        )
        .expect("decode");
        assert_eq!(contact.id, ContactId(7));
    }

    #[test]
    fn delete_route_carries_id_segment() {
        assert_eq!(
            ApiRoute::DeleteContact(ContactId(4)).segments(),
            vec!["DeleteContact".to_string(), "4".to_string()]
        );
    }
}
