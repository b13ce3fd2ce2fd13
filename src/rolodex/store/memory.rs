use super::ContactStore;
use crate::error::{RegistryError, Result};
use crate::model::Contact;
use std::collections::HashMap;

/// In-memory storage.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contacts: HashMap<String, Contact>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactStore for InMemoryStore {
    fn insert(&mut self, contact: Contact) -> Result<()> {
        let id = contact
            .id
            .clone()
            .ok_or_else(|| RegistryError::Store("contact has no assigned id".to_string()))?;
        self.contacts.insert(id, contact);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Contact> {
        self.contacts
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    fn list(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.values().cloned().collect())
    }

    fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.contacts.contains_key(id))
    }

    fn remove(&mut self, id: &str) -> Result<bool> {
        Ok(self.contacts.remove(id).is_some())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.contacts.len())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 1..=count {
                let mut contact =
                    Contact::new(format!("Test Contact {i}")).with_surname(format!("Surname {i}"));
                contact.id = Some(format!("fixture-{i}"));
                self.store.insert(contact).unwrap();
            }
            self
        }

        pub fn with_contact(mut self, id: &str, first_name: &str) -> Self {
            let mut contact = Contact::new(first_name);
            contact.id = Some(id.to_string());
            self.store.insert(contact).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn insert_requires_an_assigned_id() {
        let mut store = InMemoryStore::new();
        let err = store.insert(Contact::new("Ada")).unwrap_err();
        assert!(matches!(err, RegistryError::Store(_)));
        assert_eq!(store.len().unwrap(), 0);
    }

    #[test]
    fn remove_reports_whether_an_entry_existed() {
        let mut fixture = StoreFixture::new().with_contact("a1", "Ada");
        assert!(fixture.store.remove("a1").unwrap());
        assert!(!fixture.store.remove("a1").unwrap());
    }

    #[test]
    fn list_returns_a_detached_snapshot() {
        let mut fixture = StoreFixture::new().with_contacts(2);
        let snapshot = fixture.store.list().unwrap();
        fixture.store.remove("fixture-1").unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(fixture.store.len().unwrap(), 1);
    }
}
