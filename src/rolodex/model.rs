use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single address book entry.
///
/// `id` is `None` until the contact is inserted into a registry. The registry
/// assigns it during [`add_contact`](crate::registry::ContactRegistry::add_contact)
/// and it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Option<String>,
    pub first_name: String,
    pub surname: Option<String>,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
}

impl Contact {
    pub fn new(first_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            surname: None,
            phone: None,
            birthday: None,
        }
    }

    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_birthday(mut self, birthday: NaiveDate) -> Self {
        self.birthday = Some(birthday);
        self
    }
}
