//! Text buffers behind the add and update forms.

use client_core::UpdateFields;
use shared::protocol::NewContact;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    pub contact: String,
    pub name: String,
    pub address: String,
    pub city: String,
}

impl AddForm {
    /// Raw field values; the server does all validation.
    pub fn to_new_contact(&self) -> NewContact {
        NewContact {
            contact: self.contact.clone(),
            name: self.name.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateForm {
    pub id: String,
    pub contact: String,
    pub name: String,
    pub address: String,
    pub city: String,
}

impl UpdateForm {
    pub fn to_update_fields(&self) -> UpdateFields {
        UpdateFields {
            id: self.id.clone(),
            contact: self.contact.clone(),
            name: self.name.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_form_passes_values_through_untouched() {
        let form = AddForm {
            contact: " 555 ".into(),
            name: String::new(),
            address: "x".into(),
            city: "y".into(),
        };
        let body = form.to_new_contact();
        assert_eq!(body.contact, " 555 ");
        assert!(body.name.is_empty());
    }

    #[test]
    fn clear_resets_every_field() {
        let mut form = UpdateForm {
            id: "4".into(),
            contact: "555".into(),
            name: "n".into(),
            address: "a".into(),
            city: "c".into(),
        };
        assert_eq!(form.to_update_fields().id, "4");
        form.clear();
        assert_eq!(form, UpdateForm::default());
    }
}
