//! # Contact Registry
//!
//! The registry owns every rule in the crate: field validation, the
//! duplicate-content business rule, and identifier uniqueness. Its two
//! collaborators are constructor-injected and dumb by contract (the
//! [`IdGenerator`] may repeat itself, the [`ContactStore`] stores whatever it
//! is told), so everything observable happens here, in one fixed order.
//!
//! ## Insertion pipeline
//!
//! `add_contact` runs: validate → normalize → duplicate-content scan →
//! mint id → duplicate-id check → store. A failure at any step leaves the
//! store untouched.
//!
//! ## Id collisions are the caller's problem
//!
//! When the generator hands back an id that is already taken, the registry
//! fails with [`RegistryError::DuplicateId`] instead of silently asking for
//! another. Retrying internally would hide a systematically broken generator
//! behind an unbounded loop; the caller decides whether calling again makes
//! sense (with a random generator it usually does).
//!
//! ## Concurrency
//!
//! Single-threaded by contract. Mutating operations take `&mut self`, so the
//! check-then-insert sequence inside `add_contact` is atomic with respect to
//! any other use of the same registry: the exclusive borrow rules out two
//! inserts validating against a stale snapshot. To share a registry across
//! threads, wrap it in a `Mutex`; the crate does not lock internally.

use crate::error::{RegistryError, Result};
use crate::idgen::IdGenerator;
use crate::model::Contact;
use crate::store::memory::InMemoryStore;
use crate::store::ContactStore;

/// The contact registry service.
///
/// Generic over [`ContactStore`] and [`IdGenerator`] so backends and id
/// strategies can be swapped without touching the rules.
pub struct ContactRegistry<S: ContactStore, G: IdGenerator> {
    store: S,
    idgen: G,
}

impl<G: IdGenerator> ContactRegistry<InMemoryStore, G> {
    /// Registry over the stock in-memory store.
    pub fn in_memory(idgen: G) -> Self {
        Self::new(InMemoryStore::new(), idgen)
    }
}

impl<S: ContactStore, G: IdGenerator> ContactRegistry<S, G> {
    pub fn new(store: S, idgen: G) -> Self {
        Self { store, idgen }
    }

    /// Validate, normalize and store `contact`, returning its assigned id.
    ///
    /// Any id already set on `contact` is discarded; assignment is the
    /// registry's job alone.
    pub fn add_contact(&mut self, contact: Contact) -> Result<String> {
        let mut contact = normalize(contact)?;

        let existing = self.store.list()?;
        if let Some(dup) = existing.iter().find(|c| same_person(c, &contact)) {
            return Err(RegistryError::InvalidContact(format!(
                "duplicate of existing contact {}",
                dup.id.as_deref().unwrap_or("?")
            )));
        }

        let id = self.idgen.next_id();
        if self.store.contains(&id)? {
            return Err(RegistryError::DuplicateId(id));
        }

        contact.id = Some(id.clone());
        self.store.insert(contact)?;
        Ok(id)
    }

    pub fn get_contact(&self, id: &str) -> Result<Contact> {
        self.store.get(id)
    }

    /// Point-in-time snapshot of every stored contact, order not significant.
    /// An empty registry yields an empty vec.
    pub fn list_contacts(&self) -> Result<Vec<Contact>> {
        self.store.list()
    }

    /// Remove the contact stored under `id`. Removing an id that was never
    /// stored, or was already removed, is a no-op.
    pub fn delete_contact(&mut self, id: &str) -> Result<()> {
        self.store.remove(id)?;
        Ok(())
    }

    pub fn len(&self) -> Result<usize> {
        self.store.len()
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.store.len()? == 0)
    }
}

/// Trim names and reject a blank first name. An empty-after-trim surname
/// collapses to `None` so it takes part in the both-absent duplicate rule.
fn normalize(mut contact: Contact) -> Result<Contact> {
    let first_name = contact.first_name.trim();
    if first_name.is_empty() {
        return Err(RegistryError::InvalidContact(
            "first name must not be blank".to_string(),
        ));
    }
    contact.first_name = first_name.to_string();

    contact.surname = contact
        .surname
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    contact.id = None;
    Ok(contact)
}

/// The duplicate-content rule: case-insensitive first name AND surname match.
/// Two absent surnames match each other; absent vs present never match.
fn same_person(a: &Contact, b: &Contact) -> bool {
    if a.first_name.to_lowercase() != b.first_name.to_lowercase() {
        return false;
    }
    match (&a.surname, &b.surname) {
        (Some(x), Some(y)) => x.to_lowercase() == y.to_lowercase(),
        (None, None) => true,
        _ => false,
    }
}
