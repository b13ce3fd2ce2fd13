//! Identifier generation strategies.
//!
//! The [`IdGenerator`] contract deliberately promises nothing about
//! distinctness: successive calls may repeat. Collision handling belongs to
//! the registry, which checks every candidate against its store before
//! accepting it. Keeping the contract this weak is what lets wildly different
//! strategies (counters, UUIDs, test constants) plug into the same slot.

use uuid::Uuid;

/// Produces candidate identifiers for the registry.
///
/// Implementations take `&mut self` so counters can live as instance state;
/// exclusive access comes from the borrow, not from any internal locking.
/// Generation always succeeds.
pub trait IdGenerator {
    /// Return the next candidate identifier.
    fn next_id(&mut self) -> String;
}

impl IdGenerator for Box<dyn IdGenerator> {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}

/// Monotonically increasing integer identifiers.
///
/// Single-writer: the counter is plain instance state, constructed
/// explicitly, never shared process-wide.
#[derive(Debug, Default)]
pub struct SequentialId {
    next: u64,
}

impl SequentialId {
    /// Counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter starting at `base`.
    pub fn starting_at(base: u64) -> Self {
        Self { next: base }
    }
}

impl IdGenerator for SequentialId {
    fn next_id(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}

/// Random UUID v4 identifiers.
///
/// Collisions are astronomically unlikely, but the contract still does not
/// rule them out; callers must not assume uniqueness.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomId;

impl RandomId {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomId {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Always returns the same configured identifier.
///
/// Exists to drive the registry's duplicate-id path deterministically in
/// tests.
#[derive(Debug, Clone)]
pub struct FixedId {
    value: String,
}

impl FixedId {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl IdGenerator for FixedId {
    fn next_id(&mut self) -> String {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_counts_up_from_zero() {
        let mut gen = SequentialId::new();
        assert_eq!(gen.next_id(), "0");
        assert_eq!(gen.next_id(), "1");
        assert_eq!(gen.next_id(), "2");
    }

    #[test]
    fn sequential_respects_configured_base() {
        let mut gen = SequentialId::starting_at(100);
        assert_eq!(gen.next_id(), "100");
        assert_eq!(gen.next_id(), "101");
    }

    #[test]
    fn random_produces_parseable_uuids() {
        let mut gen = RandomId::new();
        assert!(Uuid::parse_str(&gen.next_id()).is_ok());
    }

    #[test]
    fn fixed_repeats_its_value() {
        let mut gen = FixedId::new("X");
        assert_eq!(gen.next_id(), "X");
        assert_eq!(gen.next_id(), "X");
    }

    #[test]
    fn boxed_generators_dispatch() {
        let mut gen: Box<dyn IdGenerator> = Box::new(SequentialId::starting_at(7));
        assert_eq!(gen.next_id(), "7");
    }
}
