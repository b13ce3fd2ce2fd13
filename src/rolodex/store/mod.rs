//! # Storage Layer
//!
//! This module defines the storage abstraction for the registry. The
//! [`ContactStore`] trait allows the registry to work with different storage
//! backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** without committing to a backend
//! - Allow **alternate backends** (a durable database, say) without changing
//!   the registry
//! - Keep the business rules **decoupled** from storage details
//!
//! The store is deliberately dumb: it never mints identifiers and never
//! validates records. All of that lives in [`crate::registry`], so every
//! backend's observable behaviour (validation order, error taxonomy) is
//! identical.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the stock backend; a `HashMap` keyed by
//!   identifier. Nothing is persisted; dropping the store drops the data.

use crate::error::Result;
use crate::model::Contact;

pub mod memory;

/// Abstract interface for contact storage.
///
/// Contacts handed to [`insert`](ContactStore::insert) always carry an
/// assigned id. Fetching an id the store has never seen is an error;
/// removing one is not.
pub trait ContactStore {
    /// Store a contact under its assigned id, replacing any previous entry.
    fn insert(&mut self, contact: Contact) -> Result<()>;

    /// Fetch the contact stored under `id`.
    fn get(&self, id: &str) -> Result<Contact>;

    /// Snapshot of every stored contact, order not significant.
    fn list(&self) -> Result<Vec<Contact>>;

    /// Whether an entry exists under `id`.
    fn contains(&self, id: &str) -> Result<bool>;

    /// Remove the entry under `id`, reporting whether one existed.
    fn remove(&mut self, id: &str) -> Result<bool>;

    /// Number of stored contacts.
    fn len(&self) -> Result<usize> {
        Ok(self.list()?.len())
    }
}
